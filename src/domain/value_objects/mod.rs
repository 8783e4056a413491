//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod layout;
mod logical_path;
mod naming;
mod normalized_name;

pub use hash::ContentHash;
pub use layout::OutputLayout;
pub use logical_path::LogicalPath;
pub use naming::NamingOptions;
pub use normalized_name::{is_valid_identifier, NormalizedName, DEFAULT_FILLER};
