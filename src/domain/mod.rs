//! Core domain types: scan options, statistics, and the tool configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Which ignore matcher a scan uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreEngine {
    /// Line-oriented matcher with partial gitignore fidelity (no negation).
    #[default]
    Simple,
    /// Full gitignore semantics via the `ignore` crate.
    Gitignore,
}

impl std::str::FromStr for IgnoreEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "gitignore" | "git" => Ok(Self::Gitignore),
            other => Err(format!("Invalid ignore engine: '{other}' (expected simple or gitignore)")),
        }
    }
}

/// Options for a single scan. Read-only for the duration of the scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Apply ignore-pattern filtering
    pub respect_gitignore: bool,

    /// Allow files whose base name starts with `.`
    pub include_hidden: bool,

    /// Allowed extensions, leading dot included (e.g. ".go"). Empty = no filter.
    #[serde(deserialize_with = "deserialize_extensions")]
    pub extensions: HashSet<String>,

    /// Base-name globs; used only when `extensions` is empty. Empty = no filter.
    #[serde(deserialize_with = "deserialize_patterns")]
    pub include_patterns: Vec<String>,

    /// Explicit ignore file; falls back to `<root>/.gitignore`
    pub ignore_file: Option<PathBuf>,

    /// Matcher implementation for ignore rules
    pub ignore_engine: IgnoreEngine,

    /// Descend into symlinked directories
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            respect_gitignore: true,
            include_hidden: false,
            extensions: HashSet::new(),
            include_patterns: Vec::new(),
            ignore_file: None,
            ignore_engine: IgnoreEngine::default(),
            follow_symlinks: false,
        }
    }
}

/// Counters collected while enumerating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Non-directory entries visited
    pub files_seen: usize,

    /// Files returned to the caller
    pub files_included: usize,

    /// Files skipped by the hidden-file rule
    pub files_skipped_hidden: usize,

    /// Files skipped by the extension or pattern filter
    pub files_skipped_filter: usize,

    /// Files skipped by ignore rules
    pub files_skipped_ignored: usize,

    /// `.git` directories pruned from the walk
    pub dirs_pruned: usize,

    /// Number of ignore rules in effect (0 when ignore rules are off)
    pub ignore_rules_loaded: usize,
}

/// Top-level configuration for aicodereader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory to scan when none is given on the command line
    pub path: Option<PathBuf>,

    /// Scan defaults
    pub scan: ScanOptions,
}

/// Custom deserializer for extensions: normalizes to dot-prefixed format.
///
/// Accepts a comma-separated string or a list; adds a leading dot when missing
/// and strips whitespace.
fn deserialize_extensions<'de, D>(deserializer: D) -> Result<HashSet<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ExtensionsVisitor;

    impl<'de> Visitor<'de> for ExtensionsVisitor {
        type Value = HashSet<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or array of extensions")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.split(',').filter_map(normalize_extension).collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut result = HashSet::new();
            while let Some(ext) = seq.next_element::<String>()? {
                if let Some(normalized) = normalize_extension(&ext) {
                    result.insert(normalized);
                }
            }
            Ok(result)
        }
    }

    deserializer.deserialize_any(ExtensionsVisitor)
}

/// Custom deserializer for include patterns: comma-separated string or list.
/// Order is preserved.
fn deserialize_patterns<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct PatternsVisitor;

    impl<'de> Visitor<'de> for PatternsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or array of glob patterns")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.split(',').map(str::trim).filter(|p| !p.is_empty()).map(String::from).collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut result = Vec::new();
            while let Some(pattern) = seq.next_element::<String>()? {
                let trimmed = pattern.trim();
                if !trimmed.is_empty() {
                    result.push(trimmed.to_string());
                }
            }
            Ok(result)
        }
    }

    deserializer.deserialize_any(PatternsVisitor)
}

/// Trim an extension and give it a leading dot. Empty input yields `None`.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.starts_with('.') {
        Some(trimmed.to_string())
    } else {
        Some(format!(".{trimmed}"))
    }
}
