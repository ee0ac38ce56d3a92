//! CLI argument merging with config

use crate::domain::{Config, IgnoreEngine};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub path: Option<PathBuf>,
    pub extensions: Option<HashSet<String>>,
    pub include_patterns: Option<Vec<String>>,
    pub ignore_file: Option<PathBuf>,
    pub ignore_engine: Option<IgnoreEngine>,
    pub respect_gitignore: Option<bool>,
    pub include_hidden: Option<bool>,
    pub follow_symlinks: Option<bool>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(path) = cli.path {
        base_config.path = Some(path);
    }

    if let Some(extensions) = cli.extensions {
        base_config.scan.extensions = extensions;
    }
    if let Some(include_patterns) = cli.include_patterns {
        base_config.scan.include_patterns = include_patterns;
    }
    if let Some(ignore_file) = cli.ignore_file {
        base_config.scan.ignore_file = Some(ignore_file);
    }
    if let Some(ignore_engine) = cli.ignore_engine {
        base_config.scan.ignore_engine = ignore_engine;
    }

    if let Some(respect_gitignore) = cli.respect_gitignore {
        base_config.scan.respect_gitignore = respect_gitignore;
    }
    if let Some(include_hidden) = cli.include_hidden {
        base_config.scan.include_hidden = include_hidden;
    }
    if let Some(follow_symlinks) = cli.follow_symlinks {
        base_config.scan.follow_symlinks = follow_symlinks;
    }

    base_config
}
