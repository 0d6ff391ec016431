//! 文件查找模块
//!
//! 这个模块把名称匹配与目录遍历组合成一次完整的搜索：
//! 先校验根目录，再按先序遍历收集匹配结果。

pub mod filter;
pub mod options;
pub mod record;
pub mod walker;

use log::{debug, info};

use crate::errors::FindResult;

pub use self::filter::{NameFilter, NameMatcher};
pub use self::options::{SearchConfig, TypeFilter};
pub use self::record::{EntryType, ResultRecord, SearchOutcome, SkippedDir};
pub use self::walker::FileWalker;

/// 文件查找器
///
/// 持有一份不可变的搜索配置，每次调用 [`Finder::find`] 都会重新遍历。
#[derive(Debug, Clone)]
pub struct Finder {
    config: SearchConfig,
}

impl Finder {
    /// 创建新的文件查找器实例
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 在配置的根目录中查找匹配的文件和目录
    ///
    /// 根目录不存在、不是目录或无法读取时返回错误，不会进行任何遍历。
    pub fn find(&self) -> FindResult<SearchOutcome> {
        self.config.validate()?;

        info!(
            "Searching {} for '{}'",
            self.config.root_dir.display(),
            self.config.pattern
        );

        let outcome = FileWalker::new(&self.config).walk();

        debug!(
            "Found {} results, skipped {} directories",
            outcome.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }
}

/// 使用给定配置执行一次搜索
pub fn search(config: &SearchConfig) -> FindResult<SearchOutcome> {
    Finder::new(config.clone()).find()
}
