//! Simplified ignore rules.
//!
//! Rules are read one per line from an ignore file. Matching is a partial
//! gitignore: directory rules, shell globs, and bare names that match at any
//! depth. Negated rules (`!pattern`) are parsed but never match.

use super::observer::ScanObserver;
use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Decides whether a root-relative, `/`-separated path is ignored.
pub trait IgnoreMatcher: Send + Sync {
    fn is_ignored(&self, relative_path: &str) -> bool;
}

#[derive(Debug, Clone)]
enum RuleKind {
    /// `!pattern`: recognized, inert
    Negated,
    /// `name/` with the slash stripped
    Directory(String),
    /// Pattern containing `*` or `?`
    Glob(GlobMatcher),
    /// Exact path or segment name
    Literal(String),
    /// Wildcard pattern that failed to compile
    Invalid,
}

#[derive(Debug, Clone)]
struct Rule {
    raw: String,
    kind: RuleKind,
}

impl Rule {
    fn compile(raw: &str) -> Self {
        let kind = if raw.starts_with('!') {
            RuleKind::Negated
        } else if let Some(dir) = raw.strip_suffix('/') {
            RuleKind::Directory(dir.to_string())
        } else if raw.contains(['*', '?']) {
            match GlobBuilder::new(raw).literal_separator(true).backslash_escape(true).build() {
                Ok(glob) => RuleKind::Glob(glob.compile_matcher()),
                Err(err) => {
                    debug!(rule = raw, %err, "Ignore rule is not a valid glob; it will never match");
                    RuleKind::Invalid
                }
            }
        } else {
            RuleKind::Literal(raw.to_string())
        };
        Self { raw: raw.to_string(), kind }
    }

    fn matches(&self, path: &str) -> bool {
        match &self.kind {
            RuleKind::Negated | RuleKind::Invalid => false,
            RuleKind::Directory(dir) => {
                let dir = dir.as_str();
                // Cumulative prefixes: "a", "a/b", "a/b/c.txt"
                let mut end = 0;
                for segment in path.split('/') {
                    end += segment.len();
                    if &path[..end] == dir || segment == dir {
                        return true;
                    }
                    end += 1;
                }
                false
            }
            RuleKind::Glob(glob) => {
                glob.is_match(path) || path.split('/').any(|segment| glob.is_match(segment))
            }
            RuleKind::Literal(literal) => {
                let literal = literal.as_str();
                path == literal || path.split('/').any(|segment| segment == literal)
            }
        }
    }
}

/// Ordered set of ignore rules, compiled once per scan.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    rules: Vec<Rule>,
}

impl IgnoreRuleSet {
    /// Read rules from `path`.
    ///
    /// Never fails: a missing file gives an empty set, and any other read error
    /// is reported to `observer` before returning an empty set.
    pub fn load(path: &Path, observer: &dyn ScanObserver) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => {
                let rules = Self::parse(&text);
                debug!(path = %path.display(), rules = rules.len(), "Loaded ignore rules");
                rules
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No ignore file found");
                Self::default()
            }
            Err(err) => {
                observer.ignore_file_unreadable(path, &err);
                Self::default()
            }
        }
    }

    /// Build rules from ignore-file text. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        let rules = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Rule::compile)
            .collect();
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Raw rule text in file order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.raw.as_str())
    }

    /// First rule that matches `relative_path`, if any.
    pub fn matching_rule(&self, relative_path: &str) -> Option<&str> {
        self.rules.iter().find(|rule| rule.matches(relative_path)).map(|rule| rule.raw.as_str())
    }
}

impl IgnoreMatcher for IgnoreRuleSet {
    fn is_ignored(&self, relative_path: &str) -> bool {
        match self.matching_rule(relative_path) {
            Some(rule) => {
                debug!(path = relative_path, rule, "Ignored by rule");
                true
            }
            None => false,
        }
    }
}
