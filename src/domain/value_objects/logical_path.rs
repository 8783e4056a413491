//! Logical Asset Path Value Object
//!
//! The caller-supplied path identifying an asset, relative to the asset root.
//! The runtime looks assets up by this path with one leading `/`.

use std::fmt;
use std::path::{Path, PathBuf};

/// A logical asset path as requested by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalPath(String);

impl LogicalPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key the generated lookup routine matches against
    pub fn lookup_key(&self) -> String {
        format!("/{}", self.0)
    }

    /// Location of the asset under `asset_dir`
    pub fn resolve(&self, asset_dir: &Path) -> PathBuf {
        asset_dir.join(&self.0)
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogicalPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LogicalPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
