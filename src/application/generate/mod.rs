//! Generate Module
//!
//! Orchestrates one incremental generation run.
//!
//! ## Structure
//!
//! - `options` - Request types (`GenerateOptions`)
//! - `result` - Result types (`GenerateResult`)
//! - `use_case` - Core use case logic (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use assetbake::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(fs, manifest_repo, emitter, file_list);
//! let result = use_case.execute(&GenerateOptions::new("assets", "gen").with_assets(["a.bin"]))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;
