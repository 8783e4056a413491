//! ManifestRepository port - abstraction for fingerprint manifest persistence
//!
//! This trait allows the use case to load/save the manifest without knowing
//! about JSON serialization details.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::FingerprintManifest;
use crate::domain::ports::FsError;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest exists but cannot be parsed
    #[error("invalid manifest format: {0}")]
    InvalidFormat(String),
    /// Underlying file system error
    #[error("{0}")]
    Io(#[from] FsError),
}

/// Abstract repository for manifest persistence
pub trait ManifestRepository {
    /// Load the manifest at `path`; a missing file is an empty manifest
    fn load(&self, path: &Path) -> ManifestResult<FingerprintManifest>;

    /// Replace the manifest at `path`
    fn save(&self, manifest: &FingerprintManifest, path: &Path) -> ManifestResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_error_display() {
        let err = ManifestError::InvalidFormat("expected value at line 1".to_string());
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn manifest_io_error_chains_to_fs_error() {
        use std::error::Error as _;

        let err = ManifestError::from(FsError::PermissionDenied);
        assert_eq!(err.to_string(), "permission denied");
        let source = err.source().expect("fs error is the source");
        assert!(source.downcast_ref::<FsError>().is_some());
    }
}
