//! Generate Use Case
//!
//! Orchestrates a generation run:
//! 1. Validate the request (duplicates, name collisions, invalid symbols)
//! 2. Read every asset and fingerprint it
//! 3. Resolve the change set against the previous manifest
//! 4. Rewrite per-asset sources that changed
//! 5. Rewrite the aggregate sources, the manifest and the build file list
//! 6. Remove generated per-asset sources that are no longer listed
//!
//! Any error aborts the run; files already written stay in place.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{Asset, FingerprintManifest, GeneratedSource, GeneratedSourceSet};
use crate::domain::ports::{
    BuildFileList, FileSystem, FsError, GenerateEvent, GenerateEventSink, ManifestError,
    ManifestRepository, NoopEventSink, SourceEmitter,
};
use crate::domain::services::{AssetAction, ChangeSetResolver, SymbolTable};
use crate::domain::value_objects::{LogicalPath, OutputLayout};
use crate::error::{BakeError, BakeResult};

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case - parameterized by its ports
pub struct GenerateUseCase<FS, MR, SE, BL>
where
    FS: FileSystem,
    MR: ManifestRepository,
    SE: SourceEmitter,
    BL: BuildFileList,
{
    file_system: FS,
    manifest_repo: MR,
    emitter: SE,
    file_list: BL,
}

impl<FS, MR, SE, BL> GenerateUseCase<FS, MR, SE, BL>
where
    FS: FileSystem,
    MR: ManifestRepository,
    SE: SourceEmitter,
    BL: BuildFileList,
{
    pub fn new(file_system: FS, manifest_repo: MR, emitter: SE, file_list: BL) -> Self {
        Self {
            file_system,
            manifest_repo,
            emitter,
            file_list,
        }
    }

    /// Execute a run without event reporting
    pub fn execute(&self, options: &GenerateOptions) -> BakeResult<GenerateResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute a run, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        events: Arc<dyn GenerateEventSink>,
    ) -> BakeResult<GenerateResult> {
        let detailed = events.wants_detailed_events();
        let layout = OutputLayout::new(&options.output_dir);

        let requested: Vec<LogicalPath> = options
            .assets
            .iter()
            .map(|p| LogicalPath::new(p.as_str()))
            .collect();
        let table = SymbolTable::build(&requested, &options.naming)?;

        events.on_event(GenerateEvent::Started {
            asset_dir: options.asset_dir.clone(),
            output_dir: options.output_dir.clone(),
            asset_count: table.len(),
        });

        let assets = self.read_assets(&table, &options.asset_dir)?;

        let manifest_path = layout.manifest();
        let (previous, manifest_ignored) = self.load_manifest(&manifest_path, events.as_ref());

        let (change_set, next) = ChangeSetResolver::resolve(&previous, &assets, |asset| {
            self.file_system.exists(&layout.asset_source(asset.name()))
        });

        if !options.dry_run {
            self.ensure_dir(layout.root())?;
            self.ensure_dir(&layout.assets_dir())?;
        }

        let mut result = GenerateResult {
            manifest: manifest_path.clone(),
            file_list: layout.file_list(),
            manifest_ignored,
            dry_run: options.dry_run,
            ..Default::default()
        };

        for planned in &change_set.entries {
            let asset = &assets[planned.index];
            let source_path = layout.asset_source(asset.name());

            match planned.action {
                AssetAction::Regenerate(reason) => {
                    if !options.dry_run {
                        let source = self.emitter.render_asset(asset, &source_path);
                        self.write(&source)?;
                    }
                    if detailed {
                        events.on_event(GenerateEvent::AssetRegenerated {
                            index: planned.index,
                            asset: asset.path().to_string(),
                            source: source_path.clone(),
                            reason,
                            hash: asset.fingerprint().to_string(),
                        });
                    }
                    result.regenerated.push((source_path, reason));
                }
                AssetAction::Skip => {
                    if detailed {
                        events.on_event(GenerateEvent::AssetSkipped {
                            index: planned.index,
                            asset: asset.path().to_string(),
                            source: source_path.clone(),
                            hash: asset.fingerprint().to_string(),
                        });
                    }
                    result.skipped.push(source_path);
                }
            }
        }

        result.dropped = previous
            .dropped_from(&next)
            .into_iter()
            .map(str::to_string)
            .collect();
        if detailed {
            for asset in &result.dropped {
                events.on_event(GenerateEvent::AssetDropped {
                    asset: asset.clone(),
                });
            }
        }

        for source in self.emitter.render_aggregate(&assets, &layout) {
            if !options.dry_run {
                self.write(&source)?;
                events.on_event(GenerateEvent::AggregateWritten {
                    path: source.path().to_path_buf(),
                });
            }
            result.aggregate.push(source.path().to_path_buf());
        }

        if !options.dry_run {
            self.save_manifest(&next, &manifest_path)?;
            events.on_event(GenerateEvent::ManifestWritten {
                path: manifest_path,
                entries: next.len(),
            });
        }

        let per_asset: Vec<PathBuf> = assets
            .iter()
            .map(|asset| layout.asset_source(asset.name()))
            .collect();
        let sources = GeneratedSourceSet::new(per_asset, layout.aggregate_source());
        result.sources = sources.paths().map(Path::to_path_buf).collect();

        if !options.dry_run {
            let list = self.file_list.render(&sources, &result.file_list);
            self.write(&list)?;
            events.on_event(GenerateEvent::FileListWritten {
                path: result.file_list.clone(),
                sources: result.sources.len(),
            });
        }

        result.removed =
            self.remove_stale_sources(&layout, &result.sources, options.dry_run, events.as_ref())?;

        events.on_event(GenerateEvent::Completed {
            regenerated: change_set.regenerate_count(),
            skipped: change_set.skip_count(),
            dropped: result.dropped.len(),
            dry_run: options.dry_run,
        });

        Ok(result)
    }

    fn read_assets(&self, table: &SymbolTable, asset_dir: &Path) -> BakeResult<Vec<Asset>> {
        table
            .entries()
            .iter()
            .map(|entry| {
                let path = entry.path.resolve(asset_dir);
                let content = self
                    .file_system
                    .read_bytes(&path)
                    .map_err(|source| BakeError::FileAccess { path, source })?;
                let asset = Asset::new(
                    entry.path.clone(),
                    entry.name.clone(),
                    entry.symbol.clone(),
                    content,
                );
                let stamp = self.emitter.asset_stamp(&asset);
                Ok(asset.with_stamp(&stamp))
            })
            .collect()
    }

    /// An unreadable manifest is reported and treated as empty
    fn load_manifest(
        &self,
        path: &Path,
        events: &dyn GenerateEventSink,
    ) -> (FingerprintManifest, bool) {
        match self.manifest_repo.load(path) {
            Ok(manifest) => {
                events.on_event(GenerateEvent::ManifestLoaded {
                    path: path.to_path_buf(),
                    entries: manifest.len(),
                });
                (manifest, false)
            }
            Err(err) => {
                events.on_event(GenerateEvent::ManifestIgnored {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
                (FingerprintManifest::new(), true)
            }
        }
    }

    /// Delete per-asset sources left behind by earlier runs
    ///
    /// Only files in the assets directory that carry the emitter's marker are
    /// touched. Names are compared ignoring ASCII case so a listed source is
    /// never removed on a case-insensitive file system.
    fn remove_stale_sources(
        &self,
        layout: &OutputLayout,
        listed: &[PathBuf],
        dry_run: bool,
        events: &dyn GenerateEventSink,
    ) -> BakeResult<Vec<PathBuf>> {
        let Ok(existing) = self.file_system.list_files(&layout.assets_dir()) else {
            return Ok(Vec::new());
        };
        let keep: HashSet<String> = listed
            .iter()
            .map(|p| p.to_string_lossy().to_ascii_lowercase())
            .collect();

        let mut removed = Vec::new();
        for path in existing {
            if !layout.is_asset_source(&path)
                || keep.contains(&path.to_string_lossy().to_ascii_lowercase())
            {
                continue;
            }
            let generated = self
                .file_system
                .read(&path)
                .map(|content| self.emitter.is_generated(&content))
                .unwrap_or(false);
            if !generated {
                continue;
            }

            if !dry_run {
                self.file_system
                    .remove(&path)
                    .map_err(|source| BakeError::Persistence {
                        path: path.clone(),
                        source,
                    })?;
            }
            events.on_event(GenerateEvent::StaleSourceRemoved {
                path: path.clone(),
                dry_run,
            });
            removed.push(path);
        }
        Ok(removed)
    }

    fn save_manifest(&self, manifest: &FingerprintManifest, path: &Path) -> BakeResult<()> {
        self.manifest_repo
            .save(manifest, path)
            .map_err(|err| BakeError::Persistence {
                path: path.to_path_buf(),
                source: match err {
                    ManifestError::Io(source) => source,
                    ManifestError::InvalidFormat(message) => FsError::Other(message),
                },
            })
    }

    fn ensure_dir(&self, dir: &Path) -> BakeResult<()> {
        self.file_system
            .create_dir_all(dir)
            .map_err(|source| BakeError::FileAccess {
                path: dir.to_path_buf(),
                source,
            })
    }

    fn write(&self, source: &GeneratedSource) -> BakeResult<()> {
        self.file_system
            .write(source.path(), source.content())
            .map_err(|err| BakeError::Persistence {
                path: source.path().to_path_buf(),
                source: err,
            })
    }
}
