//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
mod lock;

pub use local::{atomic_write, LocalFs};
pub use lock::OutputLock;
