//! assetbake - build-time asset embedder
//!
//! Turns a list of binary files into C++ sources exposing each file's bytes
//! as a linkable array, plus an aggregate lookup routine resolving a logical
//! asset path to its embedded byte range. Unchanged assets are detected with
//! a manifest of content fingerprints and are not regenerated.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::{Config, Verbosity};
pub use domain::value_objects::{ContentHash, NamingOptions, NormalizedName};
pub use error::{BakeError, BakeResult};
