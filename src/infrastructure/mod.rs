//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system, atomic writes and the output lock
//! - `repositories/` - JSON fingerprint manifest
//! - `emitters/` - C++ sources and the CMake file list
//! - `events/` - Console and NDJSON event sinks

pub mod emitters;
pub mod events;
pub mod fs;
pub mod repositories;

pub use emitters::{CMakeFileList, CppEmitter, CppOptions};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{atomic_write, LocalFs, OutputLock};
pub use repositories::JsonManifestRepository;
