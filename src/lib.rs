//! 按名称查找文件和目录的库
//!
//! 本库提供了 `wi` 命令背后的搜索引擎：
//! - 子串或完全匹配，可忽略大小写
//! - 可限制深度的递归遍历，自动跳过 `node_modules` 和 `.git`
//! - 按条目类型过滤，可选包含隐藏文件
//! - 达到结果上限后立即停止
//!
//! # 示例
//!
//! ```no_run
//! use whereis::finder::{Finder, SearchConfig, TypeFilter};
//!
//! let config = SearchConfig::new("config", "/home/me/project")
//!     .with_max_depth(3)                 // 递归，最多三层
//!     .with_type_filter(TypeFilter::File)
//!     .with_case_insensitive(true);
//!
//! let outcome = Finder::new(config).find().unwrap();
//!
//! for record in &outcome {
//!     println!("{} {}", record.entry_type, record.path.display());
//! }
//! ```

pub mod cli;
pub mod errors;
pub mod finder;
pub mod output;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::{search, Finder, SearchConfig};
