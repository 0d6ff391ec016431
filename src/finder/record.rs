//! 搜索结果模型

use std::fmt;
use std::path::PathBuf;

use crate::errors::FindError;

/// 结果条目的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

impl EntryType {
    /// 输出时使用的标签
    pub fn label(self) -> &'static str {
        match self {
            EntryType::File => "[FILE]",
            EntryType::Directory => "[DIRECTORY]",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 一条匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// 根目录与各级名称拼接而成的完整路径
    pub path: PathBuf,
    pub entry_type: EntryType,
}

impl ResultRecord {
    pub fn new(path: impl Into<PathBuf>, entry_type: EntryType) -> Self {
        Self {
            path: path.into(),
            entry_type,
        }
    }
}

/// 遍历过程中因读取失败而跳过的目录
#[derive(Debug)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub error: FindError,
}

/// 一次搜索的完整结果
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// 按发现顺序（先序）排列的匹配结果
    pub results: Vec<ResultRecord>,
    /// 被跳过的目录，调用方可自行决定是否展示
    pub skipped: Vec<SkippedDir>,
    /// 是否因达到结果上限而提前结束
    pub hit_limit: bool,
}

impl SearchOutcome {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a SearchOutcome {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
