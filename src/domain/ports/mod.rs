//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod generate_events;
pub mod manifest_repository;
pub mod source_emitter;

pub use file_system::{FileSystem, FsError, FsResult};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use manifest_repository::{ManifestError, ManifestRepository, ManifestResult};
pub use source_emitter::{BuildFileList, SourceEmitter};
