//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let json = match event {
            GenerateEvent::Started {
                asset_dir,
                output_dir,
                asset_count,
            } => serde_json::json!({
                "event": "start",
                "asset_dir": asset_dir.display().to_string(),
                "output_dir": output_dir.display().to_string(),
                "asset_count": asset_count,
            }),

            GenerateEvent::ManifestLoaded { path, entries } => serde_json::json!({
                "event": "manifest_loaded",
                "path": path.display().to_string(),
                "entries": entries,
            }),

            GenerateEvent::ManifestIgnored { path, reason } => serde_json::json!({
                "event": "manifest_ignored",
                "path": path.display().to_string(),
                "reason": reason,
            }),

            GenerateEvent::AssetRegenerated {
                index,
                asset,
                source,
                reason,
                hash,
            } => serde_json::json!({
                "event": "asset_regenerated",
                "index": index,
                "asset": asset,
                "source": source.display().to_string(),
                "reason": reason.as_str(),
                "hash": hash,
            }),

            GenerateEvent::AssetSkipped {
                index,
                asset,
                source,
                hash,
            } => serde_json::json!({
                "event": "asset_skipped",
                "index": index,
                "asset": asset,
                "source": source.display().to_string(),
                "hash": hash,
            }),

            GenerateEvent::AssetDropped { asset } => serde_json::json!({
                "event": "asset_dropped",
                "asset": asset,
            }),

            GenerateEvent::StaleSourceRemoved { path, dry_run } => serde_json::json!({
                "event": "stale_source_removed",
                "path": path.display().to_string(),
                "dry_run": dry_run,
            }),

            GenerateEvent::AggregateWritten { path } => serde_json::json!({
                "event": "aggregate_written",
                "path": path.display().to_string(),
            }),

            GenerateEvent::ManifestWritten { path, entries } => serde_json::json!({
                "event": "manifest_written",
                "path": path.display().to_string(),
                "entries": entries,
            }),

            GenerateEvent::FileListWritten { path, sources } => serde_json::json!({
                "event": "file_list_written",
                "path": path.display().to_string(),
                "sources": sources,
            }),

            GenerateEvent::Completed {
                regenerated,
                skipped,
                dropped,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "status": "success",
                "regenerated": regenerated,
                "skipped": skipped,
                "dropped": dropped,
                "dry_run": dry_run,
            }),
        };

        self.write_event(json);
    }
}
