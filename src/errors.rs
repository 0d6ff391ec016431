use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// whereis 的自定义错误类型
#[derive(Debug, Error)]
pub enum FindError {
    /// 搜索根目录不存在
    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// 搜索根路径不是目录
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// 搜索根目录不可读
    #[error("Cannot read directory {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 权限不足
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// 文件系统错误（其他IO错误）
    #[error("Filesystem error {}: {source}", .path.display())]
    FilesystemError {
        #[source]
        source: io::Error,
        path: PathBuf,
    },

    /// 遍历目录时的错误
    #[error("Directory walk error: {0}")]
    WalkDirError(String),
}

impl FindError {
    /// 根目录相关的错误属于配置错误，会终止整个搜索
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FindError::RootNotFound(_)
                | FindError::NotADirectory(_)
                | FindError::RootUnreadable { .. }
        )
    }
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error() {
            Some(io_err) => match io_err.kind() {
                io::ErrorKind::PermissionDenied => FindError::PermissionDenied(path),
                kind => FindError::FilesystemError {
                    source: io::Error::new(kind, io_err.to_string()),
                    path,
                },
            },
            None => FindError::WalkDirError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_root_not_found_display() {
        let err = FindError::RootNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "Directory not found: /no/such/dir");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_filesystem_error_display() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = FindError::FilesystemError {
            source: io_error,
            path: PathBuf::from("/test/path"),
        };
        assert_eq!(err.to_string(), "Filesystem error /test/path: file not found");
        assert!(err.source().is_some());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_root_unreadable_is_fatal() {
        let err = FindError::RootUnreadable {
            path: PathBuf::from("/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "Cannot read directory /locked: denied");
    }

    #[test]
    fn test_from_walkdir_error_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let walk_err = walkdir::WalkDir::new(&missing)
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();

        match FindError::from(walk_err) {
            FindError::FilesystemError { source, path } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
                assert_eq!(path, missing);
            }
            other => panic!("Expected FilesystemError variant, got {:?}", other),
        }
    }
}
