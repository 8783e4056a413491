//! Generate Event Port
//!
//! Provides an observable interface for generate runs.
//! Enables console progress, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::services::RegenerateReason;

/// Event emitted during a generate run
#[derive(Debug, Clone)]
pub enum GenerateEvent {
    /// Run started
    Started {
        asset_dir: PathBuf,
        output_dir: PathBuf,
        asset_count: usize,
    },

    /// Previous manifest loaded (possibly empty)
    ManifestLoaded { path: PathBuf, entries: usize },

    /// Previous manifest could not be used; every asset regenerates
    ManifestIgnored { path: PathBuf, reason: String },

    /// Per-asset source rewritten
    AssetRegenerated {
        index: usize,
        asset: String,
        source: PathBuf,
        reason: RegenerateReason,
        hash: String,
    },

    /// Per-asset source left untouched
    AssetSkipped {
        index: usize,
        asset: String,
        source: PathBuf,
        hash: String,
    },

    /// Asset recorded by the previous run but no longer requested
    AssetDropped { asset: String },

    /// Generated per-asset source no longer listed in the build file list
    ///
    /// Removed from disk unless `dry_run` is set.
    StaleSourceRemoved { path: PathBuf, dry_run: bool },

    /// Aggregate header or source written
    AggregateWritten { path: PathBuf },

    /// Manifest written
    ManifestWritten { path: PathBuf, entries: usize },

    /// Build file list written
    FileListWritten { path: PathBuf, sources: usize },

    /// Run completed
    Completed {
        regenerated: usize,
        skipped: usize,
        dropped: usize,
        dry_run: bool,
    },
}

/// Trait for receiving generate events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait GenerateEventSink {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);

    /// Check if this sink wants per-asset events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
