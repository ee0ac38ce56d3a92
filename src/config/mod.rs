//! Configuration loading: defaults, optional TOML file, then environment.

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use crate::domain::Config;
use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::Path;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "aicodereader.toml";

/// Prefix for environment overrides, e.g. `AICR_SCAN__INCLUDE_HIDDEN=true`.
pub const ENV_PREFIX: &str = "AICR_";

/// Build the effective configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file
/// (`explicit` or `aicodereader.toml` if present), `AICR_*` environment
/// variables with `__` separating nested keys.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            debug!(path = %path.display(), "Loading config file");
            figment = figment.merge(Toml::file(path));
        }
        None => {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Invalid configuration")
}

/// Render a configuration as TOML.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}
