//! Normalized Name Value Object
//!
//! Symbol-safe identifier derived from a logical asset path. Every ASCII
//! letter or digit is kept as-is (case preserved); every other character,
//! including separators, dots, spaces and non-ASCII characters, becomes the
//! filler character.
//!
//! The mapping is not injective: `a.b` and `a-b` both become `a_b`.
//! Collisions are detected by [`crate::domain::services::SymbolTable`].

use std::fmt;

/// Default filler for characters that are not ASCII alphanumeric
pub const DEFAULT_FILLER: char = '_';

/// A normalized, symbol-safe asset name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Derive the normalized name of a logical path using `filler`
    pub fn derive(logical_path: &str, filler: char) -> Self {
        Self(
            logical_path
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { filler })
                .collect(),
        )
    }

    /// Derive with the default `_` filler
    pub fn from_path(logical_path: &str) -> Self {
        Self::derive(logical_path, DEFAULT_FILLER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The C++ symbol for this name with an optional prefix
    pub fn symbol(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check that `s` is a plain C/C++ identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
