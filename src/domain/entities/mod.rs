//! Domain Entities
//!
//! - `Asset` - A requested file loaded into memory
//! - `FingerprintManifest` - Fingerprints recorded by the previous run
//! - `GeneratedSource` - A rendered file ready to be written

mod asset;
mod generated_source;
mod manifest;

pub use asset::Asset;
pub use generated_source::{GeneratedSource, GeneratedSourceSet};
pub use manifest::FingerprintManifest;
