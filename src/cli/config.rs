//! Config command: print the effective configuration

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::ScanArgs;
use crate::config::to_toml;

#[derive(Args)]
pub struct ConfigArgs {
    /// Directory the configuration would scan
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let config = args.scan.resolve(args.path)?;
    print!("{}", to_toml(&config)?);
    Ok(())
}
