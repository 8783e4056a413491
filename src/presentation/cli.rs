//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap. There are no
//! subcommands: every invocation is one generation run.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Verbosity;

/// assetbake - embed binary assets into C++ sources
#[derive(Parser, Debug)]
#[command(name = "assetbake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory receiving the generated sources
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Directory logical asset paths are resolved against
    #[arg(short, long)]
    pub asset_dir: PathBuf,

    /// Read additional logical paths from a file (one per line, `#` comments)
    #[arg(long, value_name = "FILE")]
    pub assets_from: Option<PathBuf>,

    /// Configuration file (defaults to <ASSET_DIR>/assetbake.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report what would be regenerated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Logical asset paths, in output order
    #[arg(value_name = "ASSETS")]
    pub assets: Vec<String>,
}

impl Cli {
    /// Flags win over the configured verbosity
    pub fn verbosity(&self, configured: Verbosity) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => configured,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_minimal() {
        let cli =
            Cli::try_parse_from(["assetbake", "--output-dir", "gen", "--asset-dir", "assets"])
                .unwrap();

        assert_eq!(cli.output_dir, PathBuf::from("gen"));
        assert_eq!(cli.asset_dir, PathBuf::from("assets"));
        assert!(cli.assets.is_empty());
        assert!(!cli.dry_run);
        assert!(!cli.json);
        assert_eq!(cli.verbosity(Verbosity::Normal), Verbosity::Normal);
    }

    #[test]
    fn test_cli_parse_assets_keep_order() {
        let cli = Cli::try_parse_from([
            "assetbake",
            "-o",
            "gen",
            "-a",
            "assets",
            "ui/b.png",
            "a.bin",
        ])
        .unwrap();

        assert_eq!(cli.assets, vec!["ui/b.png", "a.bin"]);
    }

    #[test]
    fn test_cli_requires_directories() {
        assert!(Cli::try_parse_from(["assetbake", "a.bin"]).is_err());
        assert!(Cli::try_parse_from(["assetbake", "--output-dir", "gen", "a.bin"]).is_err());
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::try_parse_from(["assetbake", "-o", "g", "-a", "a", "-vv"]).unwrap();
        assert_eq!(cli.verbosity(Verbosity::Quiet), Verbosity::Debug);

        let cli = Cli::try_parse_from(["assetbake", "-o", "g", "-a", "a", "-q"]).unwrap();
        assert_eq!(cli.verbosity(Verbosity::Verbose), Verbosity::Quiet);

        assert!(Cli::try_parse_from(["assetbake", "-o", "g", "-a", "a", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_cli_parse_optional_files() {
        let cli = Cli::try_parse_from([
            "assetbake",
            "-o",
            "gen",
            "-a",
            "assets",
            "--assets-from",
            "list.txt",
            "--config",
            "bake.toml",
            "--dry-run",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.assets_from, Some(PathBuf::from("list.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("bake.toml")));
        assert!(cli.dry_run);
        assert!(cli.json);
    }
}
