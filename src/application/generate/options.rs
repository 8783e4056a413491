//! Generate Options

use std::path::PathBuf;

use crate::domain::value_objects::NamingOptions;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory logical paths are resolved against
    pub asset_dir: PathBuf,
    /// Directory receiving the aggregate sources, `assets/` and the manifest
    pub output_dir: PathBuf,
    /// Logical paths, in the order they appear in generated output
    pub assets: Vec<String>,
    pub naming: NamingOptions,
    /// Compute and report the plan without writing anything
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(asset_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            output_dir: output_dir.into(),
            assets: Vec::new(),
            naming: NamingOptions::default(),
            dry_run: false,
        }
    }

    pub fn with_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assets = assets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_naming(mut self, naming: NamingOptions) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
