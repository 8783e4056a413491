//! SourceEmitter port - renders generated sources for a target language
//!
//! Emitters only render text; writing is done by the use case through the
//! FileSystem port.

use std::path::Path;

use crate::domain::entities::{Asset, GeneratedSource, GeneratedSourceSet};
use crate::domain::value_objects::OutputLayout;

/// Renders the per-asset and aggregate sources
pub trait SourceEmitter {
    /// Source defining the byte array of one asset, to be written at `path`
    fn render_asset(&self, asset: &Asset, path: &Path) -> GeneratedSource;

    /// Everything besides the bytes that shapes `render_asset` output
    ///
    /// Folded into the asset fingerprint, so a settings change regenerates
    /// sources whose content did not change.
    fn asset_stamp(&self, asset: &Asset) -> String;

    /// Whether `content` is a per-asset source written by this emitter
    fn is_generated(&self, content: &str) -> bool;

    /// Aggregate sources covering every requested asset, in request order
    ///
    /// Holds the size constants, the array declarations and the lookup
    /// routine. Rewritten on every run.
    fn render_aggregate(&self, assets: &[Asset], layout: &OutputLayout) -> Vec<GeneratedSource>;
}

/// Renders the artifact listing every source for the host build system
pub trait BuildFileList {
    fn render(&self, sources: &GeneratedSourceSet, path: &Path) -> GeneratedSource;
}
