//! Change set resolution
//!
//! Pure domain logic deciding which per-asset sources must be regenerated.
//! The previous manifest is passed in by value-reference and the manifest of
//! this run is returned; nothing is kept between invocations.

use crate::domain::entities::{Asset, FingerprintManifest};
use crate::domain::value_objects::{ContentHash, LogicalPath};

/// Why a per-asset source is regenerated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerateReason {
    /// No fingerprint recorded for this logical path
    New,
    /// Fingerprint differs from the recorded one
    Changed,
    /// Fingerprint matches but the generated source is gone
    Missing,
}

impl RegenerateReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegenerateReason::New => "new",
            RegenerateReason::Changed => "changed",
            RegenerateReason::Missing => "missing",
        }
    }
}

/// The action to take for one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetAction {
    /// Rewrite the per-asset source
    Regenerate(RegenerateReason),
    /// Leave the per-asset source untouched
    Skip,
}

/// A planned action for a single asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAsset {
    /// Position in the request
    pub index: usize,
    pub path: LogicalPath,
    pub action: AssetAction,
}

impl PlannedAsset {
    pub fn should_regenerate(&self) -> bool {
        matches!(self.action, AssetAction::Regenerate(_))
    }
}

/// Result of resolving a request against the previous manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// One entry per requested asset, in request order
    pub entries: Vec<PlannedAsset>,
}

impl ChangeSet {
    pub fn to_regenerate(&self) -> impl Iterator<Item = &PlannedAsset> {
        self.entries.iter().filter(|e| e.should_regenerate())
    }

    pub fn to_skip(&self) -> impl Iterator<Item = &PlannedAsset> {
        self.entries.iter().filter(|e| !e.should_regenerate())
    }

    pub fn regenerate_count(&self) -> usize {
        self.to_regenerate().count()
    }

    pub fn skip_count(&self) -> usize {
        self.to_skip().count()
    }
}

/// Pure change detection service
pub struct ChangeSetResolver;

impl ChangeSetResolver {
    /// Decide for a single asset
    ///
    /// Regenerate iff the fingerprint differs from the recorded one (or none
    /// is recorded), or the generated source no longer exists.
    pub fn decide(
        previous: Option<&ContentHash>,
        current: &ContentHash,
        source_exists: bool,
    ) -> AssetAction {
        match previous {
            None => AssetAction::Regenerate(RegenerateReason::New),
            Some(recorded) if !recorded.matches(current) => {
                AssetAction::Regenerate(RegenerateReason::Changed)
            }
            Some(_) if !source_exists => AssetAction::Regenerate(RegenerateReason::Missing),
            Some(_) => AssetAction::Skip,
        }
    }

    /// Resolve every requested asset
    ///
    /// Returns the change set and the manifest to persist for this run. The
    /// returned manifest holds exactly the fingerprints of `assets`; entries of
    /// `previous` that are no longer requested are dropped.
    pub fn resolve<F>(
        previous: &FingerprintManifest,
        assets: &[Asset],
        source_exists: F,
    ) -> (ChangeSet, FingerprintManifest)
    where
        F: Fn(&Asset) -> bool,
    {
        let mut change_set = ChangeSet::default();
        let mut next = FingerprintManifest::new();

        for (index, asset) in assets.iter().enumerate() {
            let path = asset.path().as_str();
            let action =
                Self::decide(previous.get(path), asset.fingerprint(), source_exists(asset));
            change_set.entries.push(PlannedAsset {
                index,
                path: asset.path().clone(),
                action,
            });
            next.set(path, asset.fingerprint().clone());
        }

        (change_set, next)
    }
}
