//! Configuration module for assetbake
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETBAKE_*)
//! 3. Config file (`--config`, else `<asset-dir>/assetbake.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, resolve, ConfigWarning, CONFIG_FILE_NAME, ENV_NAMESPACE,
    ENV_SYMBOL_PREFIX, ENV_VERBOSITY,
};
pub use types::{BuildConfig, Config, CppConfig, NamingConfig, OutputConfig, Verbosity};
