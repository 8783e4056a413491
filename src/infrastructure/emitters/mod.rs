//! Source emitters
//!
//! - `CppEmitter` renders the per-asset and aggregate C++ sources
//! - `CMakeFileList` renders the build file list

mod cmake;
mod cpp;

pub use cmake::{CMakeFileList, DEFAULT_VARIABLE};
pub use cpp::{escape_string_literal, CppEmitter, CppOptions};
