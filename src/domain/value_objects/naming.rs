//! Naming Options Value Object

use super::normalized_name::{is_valid_identifier, DEFAULT_FILLER};

/// How logical paths become file names and C++ symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingOptions {
    /// Replacement for characters that are not ASCII alphanumeric
    pub filler: char,
    /// Prepended to every C++ symbol (not to file names)
    pub symbol_prefix: String,
}

impl NamingOptions {
    /// Check the options produce identifier-safe output
    pub fn validate(&self) -> Result<(), String> {
        if !(self.filler.is_ascii_alphanumeric() || self.filler == '_') {
            return Err(format!(
                "filler '{}' must be an ASCII letter, digit or '_'",
                self.filler
            ));
        }
        if !self.symbol_prefix.is_empty() && !is_valid_identifier(&self.symbol_prefix) {
            return Err(format!(
                "symbol_prefix '{}' is not a valid identifier",
                self.symbol_prefix
            ));
        }
        Ok(())
    }
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER,
            symbol_prefix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(NamingOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_punctuation_filler() {
        let naming = NamingOptions {
            filler: '-',
            ..Default::default()
        };
        assert!(naming.validate().is_err());
    }

    #[test]
    fn rejects_prefix_starting_with_digit() {
        let naming = NamingOptions {
            symbol_prefix: "9x".to_string(),
            ..Default::default()
        };
        assert!(naming.validate().is_err());
    }
}
