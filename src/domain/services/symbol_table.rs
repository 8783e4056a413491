//! Symbol table validation
//!
//! Derives the normalized name and C++ symbol of every requested asset and
//! rejects requests that would emit clashing or invalid definitions. Runs
//! before anything is read or written.

use std::collections::{HashMap, HashSet};

use crate::domain::value_objects::{
    is_valid_identifier, LogicalPath, NamingOptions, NormalizedName,
};
use crate::error::{BakeError, BakeResult};

/// Identifiers derived for one requested asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub path: LogicalPath,
    pub name: NormalizedName,
    pub symbol: String,
}

/// Validated identifiers for a whole request, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    /// Build the table, failing on the first duplicate, collision or invalid symbol
    ///
    /// Each asset claims its array symbol, its `<symbol>_size` constant and
    /// its source file name (compared case-insensitively, since the output
    /// directory may live on a case-insensitive file system).
    pub fn build(paths: &[LogicalPath], naming: &NamingOptions) -> BakeResult<Self> {
        let mut seen = HashSet::new();
        let mut claimed: HashMap<String, &str> = HashMap::new();
        let mut entries = Vec::with_capacity(paths.len());

        for path in paths {
            if !seen.insert(path.as_str()) {
                return Err(BakeError::DuplicateAsset {
                    path: path.to_string(),
                });
            }

            let name = NormalizedName::derive(path.as_str(), naming.filler);
            let symbol = name.symbol(&naming.symbol_prefix);
            if !is_valid_identifier(&symbol) {
                return Err(BakeError::InvalidSymbol {
                    path: path.to_string(),
                    symbol,
                });
            }

            let claims = [
                symbol.clone(),
                format!("{}_size", symbol),
                format!("{}.cpp", name.as_str().to_ascii_lowercase()),
            ];
            for claim in claims {
                if let Some(first) = claimed.get(&claim) {
                    return Err(BakeError::NameCollision {
                        name: claim,
                        first: (*first).to_string(),
                        second: path.to_string(),
                    });
                }
                claimed.insert(claim, path.as_str());
            }

            entries.push(SymbolEntry {
                path: path.clone(),
                name,
                symbol,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
