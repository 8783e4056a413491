//! Asset entity - one requested file, loaded into memory
//!
//! Assets are read once, fully, then fingerprinted and emitted from the
//! same buffer.

use crate::domain::value_objects::{ContentHash, LogicalPath, NormalizedName};

/// A requested asset with its bytes and derived identifiers
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    path: LogicalPath,
    name: NormalizedName,
    symbol: String,
    content: Vec<u8>,
    fingerprint: ContentHash,
}

impl Asset {
    /// Create an asset fingerprinted by its bytes alone
    pub fn new(
        path: impl Into<LogicalPath>,
        name: NormalizedName,
        symbol: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        let fingerprint = ContentHash::from_bytes(&content);
        Self {
            path: path.into(),
            name,
            symbol: symbol.into(),
            content,
            fingerprint,
        }
    }

    /// Bind the fingerprint to the emitter settings that render this asset
    pub fn with_stamp(mut self, stamp: &str) -> Self {
        self.fingerprint = ContentHash::from_stamped(stamp, &self.content);
        self
    }

    pub fn path(&self) -> &LogicalPath {
        &self.path
    }

    /// Name used for the per-asset source file
    pub fn name(&self) -> &NormalizedName {
        &self.name
    }

    /// C++ symbol of the byte array (`symbol_size` holds the length)
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Change detection token recorded in the manifest
    pub fn fingerprint(&self) -> &ContentHash {
        &self.fingerprint
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
