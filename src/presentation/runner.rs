//! Generate Runner
//!
//! Drives one CLI invocation: configuration, asset list, output lock, run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::{GenerateOptions, GenerateResult};
use crate::config::{self, ConfigWarning};
use crate::domain::value_objects::OutputLayout;
use crate::infrastructure::OutputLock;

use super::cli::Cli;
use super::factory::{create_event_sink, create_generate_use_case};

/// Run the invocation described by `cli`
pub fn run(cli: &Cli) -> Result<GenerateResult> {
    let (config, warnings) = config::resolve(cli.config.as_deref(), &cli.asset_dir)
        .context("failed to load configuration")?;
    let verbosity = cli.verbosity(config.output.verbosity);
    if !cli.json {
        report_warnings(&warnings, verbosity);
    }

    let mut assets = cli.assets.clone();
    if let Some(list) = &cli.assets_from {
        assets.extend(read_asset_list_file(list)?);
    }

    let options = GenerateOptions::new(&cli.asset_dir, &cli.output_dir)
        .with_assets(assets)
        .with_naming(config.naming_options())
        .with_dry_run(cli.dry_run);

    let _lock = if cli.dry_run {
        None
    } else {
        let layout = OutputLayout::new(&cli.output_dir);
        Some(OutputLock::acquire(&layout.lock_file())?)
    };

    let use_case = create_generate_use_case(&config);
    let events = create_event_sink(cli.json, verbosity);
    let result = use_case
        .execute_with_events(&options, events)
        .with_context(|| format!("failed to generate sources in {}", cli.output_dir.display()))?;

    Ok(result)
}

/// Parse an asset list: one logical path per line, blank lines and `#` comments ignored
pub fn parse_asset_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn read_asset_list_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read asset list {}", path.display()))?;
    Ok(parse_asset_list(&content))
}

fn report_warnings(warnings: &[ConfigWarning], verbosity: config::Verbosity) {
    if verbosity == config::Verbosity::Quiet {
        return;
    }
    for warning in warnings {
        eprintln!("warning: {}", warning);
    }
}
