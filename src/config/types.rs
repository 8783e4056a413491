//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{is_valid_identifier, NamingOptions, DEFAULT_FILLER};
use crate::error::{BakeError, BakeResult};
use crate::infrastructure::emitters::{CppOptions, DEFAULT_VARIABLE};

use super::loader::{self, ConfigWarning};

/// How logical paths become names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_filler")]
    pub filler: char,

    #[serde(default)]
    pub symbol_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            filler: default_filler(),
            symbol_prefix: String::new(),
        }
    }
}

fn default_filler() -> char {
    DEFAULT_FILLER
}

/// Shape of the generated C++
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CppConfig {
    pub namespace: String,
    pub repository_class: String,
    pub base_class: String,
    pub base_header: String,
    pub lookup_function: String,
    pub values_per_line: usize,
}

impl Default for CppConfig {
    fn default() -> Self {
        let options = CppOptions::default();
        Self {
            namespace: options.namespace,
            repository_class: options.repository_class,
            base_class: options.base_class,
            base_header: options.base_header,
            lookup_function: options.lookup_function,
            values_per_line: options.values_per_line,
        }
    }
}

/// Build file list configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_variable")]
    pub variable: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            variable: default_variable(),
        }
    }
}

fn default_variable() -> String {
    DEFAULT_VARIABLE.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a level name, falling back to `Normal`
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub cpp: CppConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BakeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BakeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ASSETBAKE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn naming_options(&self) -> NamingOptions {
        NamingOptions {
            filler: self.naming.filler,
            symbol_prefix: self.naming.symbol_prefix.clone(),
        }
    }

    pub fn cpp_options(&self) -> CppOptions {
        CppOptions {
            namespace: self.cpp.namespace.clone(),
            repository_class: self.cpp.repository_class.clone(),
            base_class: self.cpp.base_class.clone(),
            base_header: self.cpp.base_header.clone(),
            lookup_function: self.cpp.lookup_function.clone(),
            values_per_line: self.cpp.values_per_line,
        }
    }

    /// Reject values that would produce uncompilable output
    ///
    /// `file` is only used to label the error.
    pub fn validate(&self, file: &Path) -> BakeResult<()> {
        self.check().map_err(|message| BakeError::InvalidConfig {
            file: file.to_path_buf(),
            message,
        })
    }

    fn check(&self) -> Result<(), String> {
        self.naming_options().validate()?;

        let cpp = &self.cpp;
        if !cpp.namespace.is_empty() && !is_qualified_name(&cpp.namespace) {
            return Err(format!("cpp.namespace '{}' is not a C++ namespace", cpp.namespace));
        }
        if !is_valid_identifier(&cpp.repository_class) {
            return Err(format!(
                "cpp.repository_class '{}' is not a valid identifier",
                cpp.repository_class
            ));
        }
        if !is_qualified_name(&cpp.base_class) {
            return Err(format!("cpp.base_class '{}' is not a class name", cpp.base_class));
        }
        if !is_valid_identifier(&cpp.lookup_function) {
            return Err(format!(
                "cpp.lookup_function '{}' is not a valid identifier",
                cpp.lookup_function
            ));
        }
        if cpp.base_header.trim().is_empty() {
            return Err("cpp.base_header must not be empty".to_string());
        }
        if cpp.values_per_line == 0 {
            return Err("cpp.values_per_line must be at least 1".to_string());
        }
        if !is_valid_identifier(&self.build.variable) {
            return Err(format!(
                "build.variable '{}' is not a valid CMake variable name",
                self.build.variable
            ));
        }
        Ok(())
    }
}

/// `A::B::C`, optionally rooted with a leading `::`
fn is_qualified_name(s: &str) -> bool {
    let s = s.strip_prefix("::").unwrap_or(s);
    !s.is_empty() && s.split("::").all(is_valid_identifier)
}
