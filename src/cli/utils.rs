//! Shared helpers for CLI argument handling

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{normalize_extension, Config, IgnoreEngine};
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;

/// Scan flags shared by `list` and `read`.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Path to config file (defaults to ./aicodereader.toml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Include only these extensions (comma-separated, e.g., '.go,.js')
    #[arg(short = 'i', long, value_name = "EXTS")]
    pub include_ext: Option<String>,

    /// Include only files whose name matches these globs (comma-separated)
    #[arg(short = 'g', long, value_name = "GLOBS")]
    pub glob: Option<String>,

    /// Ignore file to use instead of <PATH>/.gitignore
    #[arg(long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Ignore matcher: 'simple' or 'gitignore'
    #[arg(long, value_name = "ENGINE")]
    pub engine: Option<String>,

    /// Ignore .gitignore rules
    #[arg(long)]
    pub no_gitignore: bool,

    /// Include hidden files (names starting with '.')
    #[arg(long)]
    pub hidden: bool,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,
}

impl ScanArgs {
    /// Load config and apply these flags on top. `path` is the positional root, if any.
    pub fn resolve(&self, path: Option<PathBuf>) -> Result<Config> {
        let base = load_config(self.config.as_deref())?;

        let ignore_engine = self
            .engine
            .as_deref()
            .map(|raw| raw.parse::<IgnoreEngine>().map_err(|e| anyhow!(e)))
            .transpose()?;

        let overrides = CliOverrides {
            path,
            extensions: self
                .include_ext
                .as_deref()
                .map(|raw| parse_csv(raw).iter().filter_map(|e| normalize_extension(e)).collect()),
            include_patterns: self.glob.as_deref().map(parse_csv),
            ignore_file: self.ignore_file.clone(),
            ignore_engine,
            respect_gitignore: self.no_gitignore.then_some(false),
            include_hidden: self.hidden.then_some(true),
            follow_symlinks: self.follow_symlinks.then_some(true),
        };

        Ok(merge_cli_with_config(base, overrides))
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_csv_trims_and_skips_empty() {
        assert_eq!(parse_csv(" .go, .js ,,"), vec![".go", ".js"]);
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn flags_override_config_defaults() {
        let args = ScanArgs {
            include_ext: Some("go,.js".to_string()),
            engine: Some("gitignore".to_string()),
            no_gitignore: true,
            hidden: true,
            ..ScanArgs::default()
        };
        figment::Jail::expect_with(|_jail| {
            let config = args.resolve(Some(PathBuf::from("proj"))).expect("resolve");
            assert_eq!(config.path, Some(PathBuf::from("proj")));
            assert!(config.scan.extensions.contains(".go"));
            assert!(config.scan.extensions.contains(".js"));
            assert_eq!(config.scan.ignore_engine, IgnoreEngine::Gitignore);
            assert!(!config.scan.respect_gitignore);
            assert!(config.scan.include_hidden);
            Ok(())
        });
    }

    #[test]
    fn unknown_engine_is_rejected() {
        let args = ScanArgs { engine: Some("regex".to_string()), ..ScanArgs::default() };
        figment::Jail::expect_with(|_jail| {
            let err = args.resolve(None).unwrap_err();
            assert!(err.to_string().contains("Invalid ignore engine"));
            Ok(())
        });
    }
}
