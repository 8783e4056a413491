//! Output Layout Value Object
//!
//! Where every generated artifact lives under the output directory:
//!
//! ```text
//! <output>/embedded_assets.hpp
//! <output>/embedded_assets.cpp
//! <output>/assets/<name>.cpp
//! <output>/assets/hashes.json
//! <output>/assets/cmake_file_list.txt
//! <output>/assets/.assetbake.lock
//! ```

use std::path::{Path, PathBuf};

use super::NormalizedName;

pub const AGGREGATE_HEADER: &str = "embedded_assets.hpp";
pub const AGGREGATE_SOURCE: &str = "embedded_assets.cpp";
pub const ASSETS_SUBDIR: &str = "assets";
pub const MANIFEST_FILE: &str = "hashes.json";
pub const FILE_LIST_FILE: &str = "cmake_file_list.txt";
pub const LOCK_FILE: &str = ".assetbake.lock";

/// Paths of the generated artifacts for one output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join(ASSETS_SUBDIR)
    }

    pub fn aggregate_header(&self) -> PathBuf {
        self.root.join(AGGREGATE_HEADER)
    }

    pub fn aggregate_source(&self) -> PathBuf {
        self.root.join(AGGREGATE_SOURCE)
    }

    /// Per-asset source for `name`
    pub fn asset_source(&self, name: &NormalizedName) -> PathBuf {
        self.assets_dir().join(format!("{}.cpp", name))
    }

    /// Whether `path` sits where per-asset sources are written
    pub fn is_asset_source(&self, path: &Path) -> bool {
        path.parent() == Some(self.assets_dir().as_path())
            && path.extension().is_some_and(|ext| ext == "cpp")
    }

    pub fn manifest(&self) -> PathBuf {
        self.assets_dir().join(MANIFEST_FILE)
    }

    pub fn file_list(&self) -> PathBuf {
        self.assets_dir().join(FILE_LIST_FILE)
    }

    pub fn lock_file(&self) -> PathBuf {
        self.assets_dir().join(LOCK_FILE)
    }
}
