//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port as a flat JSON object mapping each
//! logical path to its hex fingerprint:
//!
//! ```json
//! {
//!   "models/car.obj": "9f86d08...",
//!   "ui/icon.png": "2cf24db..."
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::entities::FingerprintManifest;
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::manifest_repository::{
    ManifestError, ManifestRepository, ManifestResult,
};
use crate::infrastructure::fs::LocalFs;

/// JSON-based manifest repository
pub struct JsonManifestRepository<F: FileSystem = LocalFs> {
    fs: F,
}

impl JsonManifestRepository {
    /// Create a new repository with the local file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<F: FileSystem> JsonManifestRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl Default for JsonManifestRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> ManifestRepository for JsonManifestRepository<F> {
    fn load(&self, path: &Path) -> ManifestResult<FingerprintManifest> {
        if !self.fs.exists(path) {
            return Ok(FingerprintManifest::new());
        }

        let content = self.fs.read(path)?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;

        Ok(entries.into_iter().collect())
    }

    fn save(&self, manifest: &FingerprintManifest, path: &Path) -> ManifestResult<()> {
        let entries: BTreeMap<&str, &str> = manifest
            .entries()
            .map(|(asset, hash)| (asset, hash.as_str()))
            .collect();

        let mut content = serde_json::to_string_pretty(&entries)
            .map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;
        content.push('\n');

        self.fs.write(path, &content)?;
        Ok(())
    }
}
