//! Read command: print a file, or every enumerated file under a directory,
//! as the text that would be handed to a chat model.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::utils::ScanArgs;
use crate::scan::SourceEnumerator;
use crate::utils::{is_probably_binary, relative_slash_path};

#[derive(Args)]
pub struct ReadArgs {
    /// Path to a single file to read
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "path")]
    pub file: Option<PathBuf>,

    /// Directory (or file) to read
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,
}

pub fn run(args: ReadArgs) -> Result<()> {
    let mut out = io::stdout().lock();

    if let Some(file) = &args.file {
        return print_file(&mut out, file);
    }

    let config = args.scan.resolve(args.path)?;
    let Some(root) = config.path else {
        bail!("Either --file or a PATH must be specified");
    };

    if root.is_file() {
        return print_file(&mut out, &root);
    }

    let files = SourceEnumerator::new(config.scan)
        .enumerate(&root)
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    for file in &files {
        if !file.is_file() {
            warn!(path = %file.display(), "Skipping non-regular file");
            continue;
        }
        let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
        if is_probably_binary(&bytes) {
            warn!(path = %file.display(), "Skipping binary file");
            continue;
        }
        let label = relative_slash_path(&root, file).unwrap_or_else(|| file.display().to_string());
        writeln!(out, "==> {label} <==")?;
        write_text(&mut out, &bytes)?;
        writeln!(out)?;
    }

    Ok(())
}

fn print_file(out: &mut impl Write, file: &Path) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    write_text(out, &bytes)
}

fn write_text(out: &mut impl Write, bytes: &[u8]) -> Result<()> {
    let text = String::from_utf8_lossy(bytes);
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') && !text.is_empty() {
        writeln!(out)?;
    }
    Ok(())
}
