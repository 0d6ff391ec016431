//! 文件系统遍历功能
//!
//! 本模块按先序遍历目录树，对每个条目进行名称匹配并收集结果。
//! 达到结果上限后立即停止全部遍历；无法读取的子目录会被跳过并记录。

use log::debug;
use walkdir::{DirEntry, WalkDir};

use super::filter::{NameFilter, NameMatcher};
use super::options::SearchConfig;
use super::record::{EntryType, ResultRecord, SearchOutcome, SkippedDir};
use crate::errors::FindError;

/// 递归时不会进入的目录名
pub const PRUNED_DIRS: &[&str] = &["node_modules", ".git"];

/// 使用给定配置处理文件系统遍历
pub struct FileWalker<'a> {
    config: &'a SearchConfig,
    matcher: NameMatcher,
}

impl<'a> FileWalker<'a> {
    /// 使用给定配置创建新的 FileWalker
    pub fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            matcher: NameMatcher::from_config(config),
        }
    }

    /// 从配置的根目录开始遍历，返回匹配结果和被跳过的目录
    ///
    /// 根目录需事先校验；这里不会因为任何读取错误而失败。
    pub fn walk(&self) -> SearchOutcome {
        let limit = self.config.max_results.get();
        let include_hidden = self.config.include_hidden;
        let mut outcome = SearchOutcome::default();

        debug!(
            "Walking {} ({})",
            self.config.root_dir.display(),
            self.matcher.description()
        );

        let mut entries = self
            .init_walker()
            .into_iter()
            .filter_entry(move |entry| include_hidden || !is_hidden(entry));

        while outcome.results.len() < limit {
            let entry = match entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    self.handle_walk_error(err, &mut outcome.skipped);
                    continue;
                }
                None => break,
            };

            if let Some(record) = self.process_entry(&entry) {
                outcome.results.push(record);
            }

            if self.is_pruned(&entry) {
                debug!("Pruning {}", entry.path().display());
                entries.skip_current_dir();
            }
        }

        outcome.hit_limit = outcome.results.len() >= limit;
        outcome
    }

    /// 使用配置的选项初始化目录遍历器
    ///
    /// 根目录本身不参与匹配。walkdir 的深度比目录层级多一：
    /// 第 d 层目录的子条目深度为 d + 1。
    fn init_walker(&self) -> WalkDir {
        let max_depth = if self.config.recursive {
            self.config.max_depth.saturating_add(1)
        } else {
            1
        };

        let walker = WalkDir::new(&self.config.root_dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .max_open(1);

        if self.config.sort_by_name {
            walker.sort_by_file_name()
        } else {
            walker
        }
    }

    /// 处理单个目录条目
    fn process_entry(&self, entry: &DirEntry) -> Option<ResultRecord> {
        let file_type = entry.file_type();
        let entry_type = if file_type.is_dir() {
            EntryType::Directory
        } else if file_type.is_file() {
            EntryType::File
        } else {
            // 符号链接、套接字、设备文件等
            return None;
        };

        let wanted = match entry_type {
            EntryType::Directory => self.config.type_filter.accepts_dirs(),
            EntryType::File => self.config.type_filter.accepts_files(),
        };
        if !wanted {
            return None;
        }

        let name = entry.file_name().to_string_lossy();
        self.matcher
            .matches(&name)
            .then(|| ResultRecord::new(entry.path(), entry_type))
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        self.config.recursive
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| PRUNED_DIRS.contains(&name))
    }

    /// 记录无法读取的目录，遍历继续进行
    fn handle_walk_error(&self, err: walkdir::Error, skipped: &mut Vec<SkippedDir>) {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        let error = FindError::from(err);
        debug!("Skipping {}: {}", path.display(), error);
        skipped.push(SkippedDir { path, error });
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}
