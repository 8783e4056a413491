//! GeneratedSource entity - a rendered file ready to be written
//!
//! Emitters render GeneratedSources; the use case writes them through the
//! FileSystem port.

use std::path::{Path, PathBuf};

/// A generated file: path plus full text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    path: PathBuf,
    content: String,
}

impl GeneratedSource {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Every source the host build system must compile
///
/// One per-asset source per requested asset (regenerated this run or not)
/// in request order, plus the aggregate source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSourceSet {
    per_asset: Vec<PathBuf>,
    aggregate: PathBuf,
}

impl GeneratedSourceSet {
    pub fn new(per_asset: Vec<PathBuf>, aggregate: impl Into<PathBuf>) -> Self {
        Self {
            per_asset,
            aggregate: aggregate.into(),
        }
    }

    pub fn per_asset(&self) -> &[PathBuf] {
        &self.per_asset
    }

    pub fn aggregate(&self) -> &Path {
        &self.aggregate
    }

    /// All paths, per-asset sources first, aggregate last
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.per_asset
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.aggregate.as_path()))
    }
}
