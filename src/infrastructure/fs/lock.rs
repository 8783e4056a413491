//! Output directory lock
//!
//! Serializes concurrent runs against the same output directory with an
//! exclusive advisory lock held for the lifetime of the guard.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{BakeError, BakeResult};

/// Exclusive lock on a lock file; released on drop
#[derive(Debug)]
pub struct OutputLock {
    file: fs::File,
    path: PathBuf,
}

impl OutputLock {
    /// Block until the lock at `path` is acquired
    pub fn acquire(path: &Path) -> BakeResult<Self> {
        let lock_err = |source| BakeError::Lock {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(lock_err)?;
        }
        let file = fs::File::create(path).map_err(lock_err)?;
        file.lock_exclusive().map_err(lock_err)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for OutputLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
