//! List command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use super::utils::ScanArgs;
use crate::scan::SourceEnumerator;
use crate::utils::relative_slash_path;

#[derive(Args)]
pub struct ListArgs {
    /// Directory to scan (defaults to the configured path, then '.')
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print paths relative to PATH
    #[arg(long)]
    pub relative: bool,

    /// Print a JSON array instead of one path per line
    #[arg(long)]
    pub json: bool,

    /// Print scan statistics to stderr
    #[arg(long)]
    pub stats: bool,
}

pub fn run(args: ListArgs) -> Result<()> {
    let config = args.scan.resolve(args.path)?;
    let root = config.path.unwrap_or_else(|| PathBuf::from("."));

    let enumerator = SourceEnumerator::new(config.scan);
    let (files, stats) = enumerator
        .enumerate_with_stats(&root)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    let paths: Vec<String> = files
        .iter()
        .map(|file| {
            if args.relative {
                relative_slash_path(&root, file)
                    .unwrap_or_else(|| file.to_string_lossy().into_owned())
            } else {
                file.to_string_lossy().into_owned()
            }
        })
        .collect();

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &paths)?;
        writeln!(out)?;
    } else {
        for path in &paths {
            writeln!(out, "{path}")?;
        }
    }

    if args.stats {
        eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
