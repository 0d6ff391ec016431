//! Options for name searches
//!
//! This module provides the immutable configuration handed to the finder.

use std::fmt;
use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::errors::{FindError, FindResult};

/// Default depth limit for recursive searches
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default cap on collected results
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Which kinds of entries may be collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Regular files only
    File,
    /// Directories only
    Directory,
    /// Files and directories
    #[default]
    Any,
}

impl TypeFilter {
    /// Map a `--type` code to a filter. `f` and `d` select files and
    /// directories; every other code means both.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "f" => TypeFilter::File,
            "d" => TypeFilter::Directory,
            _ => TypeFilter::Any,
        }
    }

    pub fn accepts_files(self) -> bool {
        matches!(self, TypeFilter::File | TypeFilter::Any)
    }

    pub fn accepts_dirs(self) -> bool {
        matches!(self, TypeFilter::Directory | TypeFilter::Any)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::File => write!(f, "file"),
            TypeFilter::Directory => write!(f, "dir"),
            TypeFilter::Any => write!(f, "all"),
        }
    }
}

/// Options for configuring a name search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Literal text matched against entry names
    pub pattern: String,

    /// Directory the search starts from
    pub root_dir: PathBuf,

    /// Kinds of entries to collect
    pub type_filter: TypeFilter,

    /// Compare names and pattern in lower case
    pub case_insensitive: bool,

    /// Require the whole name to equal the pattern
    pub exact_match: bool,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Deepest directory level listed when recursing (root is 0)
    pub max_depth: usize,

    /// Stop once this many results are collected
    pub max_results: NonZeroUsize,

    /// Include entries whose name starts with a dot
    pub include_hidden: bool,

    /// Visit each directory's entries in file-name order
    pub sort_by_name: bool,
}

impl SearchConfig {
    /// Create a new SearchConfig with default values
    pub fn new(pattern: impl Into<String>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            pattern: pattern.into(),
            root_dir: root_dir.into(),
            type_filter: TypeFilter::Any,
            case_insensitive: false,
            exact_match: false,
            recursive: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_results: NonZeroUsize::new(DEFAULT_MAX_RESULTS).unwrap_or(NonZeroUsize::MIN),
            include_hidden: false,
            sort_by_name: false,
        }
    }

    pub fn with_type_filter(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the depth limit. A depth limit only makes sense for a recursive
    /// search, so this also turns recursion on.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self.recursive = true;
        self
    }

    pub fn with_max_results(mut self, max_results: NonZeroUsize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn with_sort_by_name(mut self, sort_by_name: bool) -> Self {
        self.sort_by_name = sort_by_name;
        self
    }

    /// Create SearchConfig from CLI arguments
    ///
    /// The search root is made absolute against the current directory; a
    /// missing `--dir` means the current directory itself.
    pub fn from_cli(cli: &Cli) -> io::Result<Self> {
        let root_dir = match &cli.dir {
            Some(dir) => std::path::absolute(dir)?,
            None => std::env::current_dir()?,
        };

        let mut config = Self::new(cli.pattern.clone().unwrap_or_default(), root_dir)
            .with_type_filter(cli.type_filter)
            .with_case_insensitive(cli.ignore_case)
            .with_exact_match(cli.exact)
            .with_recursive(cli.recursive)
            .with_include_hidden(cli.hidden)
            .with_sort_by_name(cli.sort);

        if let Some(depth) = cli.depth {
            config = config.with_max_depth(depth);
        }
        if let Some(max) = cli.max {
            config = config.with_max_results(max);
        }

        Ok(config)
    }

    /// Check that the search root exists, is a directory and can be listed.
    pub fn validate(&self) -> FindResult<()> {
        validate_root(&self.root_dir)
    }
}

fn validate_root(root: &Path) -> FindResult<()> {
    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FindError::RootNotFound(root.to_path_buf()));
        }
        Err(source) => {
            return Err(FindError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(FindError::NotADirectory(root.to_path_buf()));
    }

    fs::read_dir(root)
        .map(drop)
        .map_err(|source| FindError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })
}
