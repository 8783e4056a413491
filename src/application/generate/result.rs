//! Generate Result

use std::path::PathBuf;

use crate::domain::services::RegenerateReason;

/// Result of a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Per-asset sources rewritten this run, with the reason
    pub regenerated: Vec<(PathBuf, RegenerateReason)>,
    /// Per-asset sources left untouched
    pub skipped: Vec<PathBuf>,
    /// Logical paths recorded by the previous run but no longer requested
    pub dropped: Vec<String>,
    /// Generated per-asset sources no longer listed, removed from disk
    /// (or due for removal in a dry run)
    pub removed: Vec<PathBuf>,
    /// Aggregate header and source
    pub aggregate: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub file_list: PathBuf,
    /// Every source listed in the build file list, in listing order
    pub sources: Vec<PathBuf>,
    /// The previous manifest was unreadable and ignored
    pub manifest_ignored: bool,
    pub dry_run: bool,
}

impl GenerateResult {
    pub fn asset_count(&self) -> usize {
        self.regenerated.len() + self.skipped.len()
    }
}
