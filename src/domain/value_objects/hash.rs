//! Content Hash Value Object
//!
//! Fingerprint of an asset's exact bytes, optionally bound to the settings
//! that shape its generated source. Used only for change detection between
//! runs, never for security.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a lowercase hex-encoded SHA-256 digest (64 chars).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Length of the hex encoding
    pub const HEX_LEN: usize = 64;

    /// Wrap an already computed hex digest
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Compute the SHA-256 fingerprint of `content`
    pub fn from_bytes(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self(format!("{:x}", digest))
    }

    /// Fingerprint of `content` as rendered under `stamp`
    ///
    /// `stamp` names every input besides the bytes that affects the generated
    /// source, so a renamed symbol or a new line width changes the result.
    pub fn from_stamped(stamp: &str, content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(stamp.as_bytes());
        hasher.update([0u8]);
        hasher.update(content);
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this hash matches another
    pub fn matches(&self, other: &ContentHash) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
