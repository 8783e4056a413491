//! Common test utilities for assetbake integration tests.
//!
//! Provides `TestWorkspace` - an isolated asset directory and output
//! directory, plus helpers to run the library pipeline and the CLI.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::SystemTime;

use tempfile::TempDir;

use assetbake::config::Config;
use assetbake::presentation::create_generate_use_case;
use assetbake::{BakeResult, GenerateOptions, GenerateResult};

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn asset_dir(&self) -> PathBuf {
        self.root().join("assets")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("gen")
    }

    /// Write an asset below the asset directory
    pub fn put_asset(&self, logical: &str, content: &[u8]) {
        let path = self.asset_dir().join(logical);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Path of a file below the output directory
    pub fn output(&self, relative: &str) -> PathBuf {
        self.output_dir().join(relative)
    }

    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.output(relative)).unwrap()
    }

    pub fn mtime(&self, relative: &str) -> SystemTime {
        fs::metadata(self.output(relative))
            .unwrap()
            .modified()
            .unwrap()
    }

    /// Run the library pipeline with default configuration
    pub fn generate(&self, assets: &[&str]) -> BakeResult<GenerateResult> {
        self.generate_with(&Config::default(), assets)
    }

    pub fn generate_with(&self, config: &Config, assets: &[&str]) -> BakeResult<GenerateResult> {
        let options = GenerateOptions::new(self.asset_dir(), self.output_dir())
            .with_assets(assets.iter().copied())
            .with_naming(config.naming_options());
        create_generate_use_case(config).execute(&options)
    }

    /// Run the CLI with `--output-dir`/`--asset-dir` filled in
    pub fn cli(&self, args: &[&str]) -> Output {
        self.cli_with_env(&[], args)
    }

    /// Run the CLI with only the given `ASSETBAKE_*` variables set
    pub fn cli_with_env(&self, env: &[(&str, &str)], args: &[&str]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_assetbake"));
        command
            .current_dir(self.root())
            .env_remove("ASSETBAKE_VERBOSITY")
            .env_remove("ASSETBAKE_NAMESPACE")
            .env_remove("ASSETBAKE_SYMBOL_PREFIX");
        for (key, value) in env {
            command.env(key, value);
        }
        command
            .arg("--output-dir")
            .arg(self.output_dir())
            .arg("--asset-dir")
            .arg(self.asset_dir())
            .args(args)
            .output()
            .unwrap()
    }
}
