//! Console Event Sink
//!
//! Human-readable progress lines gated by verbosity. Warnings go to stderr
//! at every level except quiet.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{GenerateEvent, GenerateEventSink};

pub struct ConsoleEventSink {
    verbosity: Verbosity,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_writers(verbosity, io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(verbosity: Verbosity, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            verbosity,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn print(&self, line: String) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn warn(&self, line: String) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "warning: {}", line);
        }
    }

    fn at_least(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }

        match event {
            GenerateEvent::Started {
                asset_dir,
                output_dir,
                asset_count,
            } => {
                if self.at_least(Verbosity::Verbose) {
                    self.print(format!(
                        "Embedding {} asset(s) from {} into {}",
                        asset_count,
                        asset_dir.display(),
                        output_dir.display()
                    ));
                }
            }
            GenerateEvent::ManifestLoaded { path, entries } => {
                if self.at_least(Verbosity::Debug) {
                    self.print(format!("manifest {} ({} entries)", path.display(), entries));
                }
            }
            GenerateEvent::ManifestIgnored { path, reason } => {
                self.warn(format!(
                    "ignoring unreadable manifest {}: {}",
                    path.display(),
                    reason
                ));
            }
            GenerateEvent::AssetRegenerated {
                asset,
                source,
                reason,
                hash,
                ..
            } => {
                if self.at_least(Verbosity::Debug) {
                    self.print(format!(
                        " -> {} ({}, {}) {}",
                        asset,
                        reason.as_str(),
                        hash,
                        source.display()
                    ));
                } else {
                    self.print(format!(" -> {}", asset));
                }
            }
            GenerateEvent::AssetSkipped { asset, .. } => {
                if self.at_least(Verbosity::Verbose) {
                    self.print(format!("    {} (unchanged)", asset));
                }
            }
            GenerateEvent::AssetDropped { asset } => {
                if self.at_least(Verbosity::Verbose) {
                    self.print(format!("    {} (no longer requested)", asset));
                }
            }
            GenerateEvent::StaleSourceRemoved { path, dry_run } => {
                let verb = if dry_run { "would remove" } else { "removed" };
                self.print(format!("    {} stale {}", verb, path.display()));
            }
            GenerateEvent::AggregateWritten { path }
            | GenerateEvent::ManifestWritten { path, .. }
            | GenerateEvent::FileListWritten { path, .. } => {
                if self.at_least(Verbosity::Debug) {
                    self.print(format!("wrote {}", path.display()));
                }
            }
            GenerateEvent::Completed {
                regenerated,
                skipped,
                dropped,
                dry_run,
            } => {
                let prefix = if dry_run { "[dry run] " } else { "" };
                let mut line = format!(
                    "{}{} regenerated, {} unchanged",
                    prefix, regenerated, skipped
                );
                if dropped > 0 {
                    line.push_str(&format!(", {} dropped", dropped));
                }
                self.print(line);
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity != Verbosity::Quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::RegenerateReason;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sink(verbosity: Verbosity) -> (ConsoleEventSink, Captured, Captured) {
        let out = Captured::default();
        let err = Captured::default();
        let sink = ConsoleEventSink::with_writers(verbosity, out.clone(), err.clone());
        (sink, out, err)
    }

    fn regenerated(asset: &str) -> GenerateEvent {
        GenerateEvent::AssetRegenerated {
            index: 0,
            asset: asset.to_string(),
            source: PathBuf::from("gen/assets/a_bin.cpp"),
            reason: RegenerateReason::New,
            hash: "00".to_string(),
        }
    }

    fn skipped(asset: &str) -> GenerateEvent {
        GenerateEvent::AssetSkipped {
            index: 1,
            asset: asset.to_string(),
            source: PathBuf::from("gen/assets/b_bin.cpp"),
            hash: "11".to_string(),
        }
    }

    #[test]
    fn normal_reports_regenerated_assets_only() {
        let (sink, out, _) = sink(Verbosity::Normal);

        sink.on_event(regenerated("a.bin"));
        sink.on_event(skipped("b.bin"));

        assert_eq!(out.text(), " -> a.bin\n");
    }

    #[test]
    fn verbose_also_reports_skipped_assets() {
        let (sink, out, _) = sink(Verbosity::Verbose);

        sink.on_event(skipped("b.bin"));

        assert!(out.text().contains("b.bin (unchanged)"));
    }

    #[test]
    fn quiet_prints_nothing() {
        let (sink, out, err) = sink(Verbosity::Quiet);

        sink.on_event(regenerated("a.bin"));
        sink.on_event(GenerateEvent::ManifestIgnored {
            path: PathBuf::from("gen/assets/hashes.json"),
            reason: "bad".to_string(),
        });

        assert!(out.text().is_empty());
        assert!(err.text().is_empty());
        assert!(!sink.wants_detailed_events());
    }

    #[test]
    fn ignored_manifest_warns_on_stderr() {
        let (sink, out, err) = sink(Verbosity::Normal);

        sink.on_event(GenerateEvent::ManifestIgnored {
            path: PathBuf::from("gen/assets/hashes.json"),
            reason: "expected value".to_string(),
        });

        assert!(out.text().is_empty());
        assert!(err.text().starts_with("warning: ignoring unreadable manifest"));
    }

    #[test]
    fn stale_sources_are_reported() {
        let (sink, out, _) = sink(Verbosity::Normal);

        sink.on_event(GenerateEvent::StaleSourceRemoved {
            path: PathBuf::from("gen/assets/old_bin.cpp"),
            dry_run: false,
        });
        sink.on_event(GenerateEvent::StaleSourceRemoved {
            path: PathBuf::from("gen/assets/gone_bin.cpp"),
            dry_run: true,
        });

        assert_eq!(
            out.text(),
            "    removed stale gen/assets/old_bin.cpp
    would remove stale gen/assets/gone_bin.cpp
"
        );
    }

    #[test]
    fn summary_mentions_dry_run_and_drops() {
        let (sink, out, _) = sink(Verbosity::Normal);

        sink.on_event(GenerateEvent::Completed {
            regenerated: 1,
            skipped: 2,
            dropped: 3,
            dry_run: true,
        });

        assert_eq!(out.text(), "[dry run] 1 regenerated, 2 unchanged, 3 dropped\n");
    }
}
