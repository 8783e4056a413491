//! Error types for assetbake
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for assetbake operations
pub type BakeResult<T> = Result<T, BakeError>;

/// Main error type for assetbake operations
#[derive(Error, Debug)]
pub enum BakeError {
    /// An asset could not be read, or the output directory could not be created
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A generated source, the manifest or the file list could not be written
    #[error("cannot write {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Two logical paths derive the same symbol or source file name
    #[error("assets '{first}' and '{second}' both map to '{name}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    /// The same logical path was requested more than once
    #[error("asset '{path}' is listed more than once")]
    DuplicateAsset { path: String },

    /// The derived symbol is not a valid C++ identifier
    #[error("asset '{path}' derives the invalid symbol '{symbol}' (set naming.symbol_prefix)")]
    InvalidSymbol { path: String, symbol: String },

    /// Configuration file could not be parsed or holds an invalid value
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The output directory lock could not be taken
    #[error("cannot lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
