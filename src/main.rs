//! assetbake CLI
//!
//! Usage: assetbake --output-dir <DIR> --asset-dir <DIR> [OPTIONS] [ASSETS]...

use anyhow::Result;
use clap::Parser;

use assetbake::presentation::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}
