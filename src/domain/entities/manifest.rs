//! Fingerprint manifest entity - tracks asset fingerprints between runs
//!
//! The manifest is the single source of truth for "did this asset change
//! since the last run". It's a pure data structure - I/O operations are
//! handled by ManifestRepository.

use std::collections::BTreeMap;

use crate::domain::value_objects::ContentHash;

/// Logical path → content fingerprint
///
/// Entries are kept sorted by logical path so the persisted form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintManifest {
    entries: BTreeMap<String, ContentHash>,
}

impl FingerprintManifest {
    /// Create a new empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fingerprint recorded for a logical path
    pub fn get(&self, path: &str) -> Option<&ContentHash> {
        self.entries.get(path)
    }

    /// Record the fingerprint of a logical path, replacing any previous one
    pub fn set(&mut self, path: impl Into<String>, hash: impl Into<ContentHash>) {
        self.entries.insert(path.into(), hash.into());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in logical path order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ContentHash)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Paths recorded here but not in `other`
    pub fn dropped_from<'a>(&'a self, other: &'a FingerprintManifest) -> Vec<&'a str> {
        self.entries
            .keys()
            .filter(|k| !other.contains(k))
            .map(String::as_str)
            .collect()
    }
}

impl<K: Into<String>, V: Into<ContentHash>> FromIterator<(K, V)> for FingerprintManifest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut manifest = Self::new();
        for (path, hash) in iter {
            manifest.set(path, hash);
        }
        manifest
    }
}
