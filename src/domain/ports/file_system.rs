//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the use case to read assets and write generated files
//! without depending on concrete implementations (local, mock).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found")]
    NotFound,
    /// Permission denied
    #[error("permission denied")]
    PermissionDenied,
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound,
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied,
            _ => FsError::Io(err),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read a whole file as raw bytes
    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, replacing it if present
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Regular files directly inside `dir`, sorted
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}
