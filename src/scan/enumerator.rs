//! Source enumeration: walk a root directory and decide which files to keep.

use super::error::{Result, ScanError};
use super::gitignore::GitignoreMatcher;
use super::observer::{ScanObserver, TracingObserver};
use super::rules::{IgnoreMatcher, IgnoreRuleSet};
use crate::domain::{IgnoreEngine, ScanOptions, ScanStats};
use crate::utils::{extension_of, relative_slash_path};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use walkdir::WalkDir;

/// Directory name pruned from every walk.
const GIT_DIR: &str = ".git";

/// Default ignore file looked up under the root.
const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Walks a directory tree and returns the files that pass every active filter.
///
/// Only regular files are returned. An unfollowed symlink counts when its
/// target is a regular file; links to directories and dangling links are skipped.
pub struct SourceEnumerator {
    options: ScanOptions,
    observer: Arc<dyn ScanObserver>,
}

impl SourceEnumerator {
    pub fn new(options: ScanOptions) -> Self {
        Self { options, observer: Arc::new(TracingObserver) }
    }

    /// Route non-fatal events (unreadable ignore file) to `observer`.
    pub fn with_observer(mut self, observer: impl ScanObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Files under `root` in traversal order.
    pub fn enumerate(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.enumerate_with_stats(root).map(|(files, _)| files)
    }

    /// Files under `root` plus the counters collected along the way.
    ///
    /// On any error the partial list is discarded.
    pub fn enumerate_with_stats(
        &self,
        root: impl AsRef<Path>,
    ) -> Result<(Vec<PathBuf>, ScanStats)> {
        let root = root.as_ref();
        check_root(root)?;

        let name_filter = NameFilter::new(&self.options)?;
        let mut stats = ScanStats::default();
        let matcher = if self.options.respect_gitignore {
            let (matcher, rules) = self.load_matcher(root);
            stats.ignore_rules_loaded = rules;
            Some(matcher)
        } else {
            None
        };

        let mut files = Vec::new();
        let mut walker = WalkDir::new(root)
            .follow_links(self.options.follow_symlinks)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = walker.next() {
            let entry = next.map_err(|err| traversal_error(root, err))?;

            if entry.file_type().is_dir() {
                if entry.file_name() == GIT_DIR {
                    stats.dirs_pruned += 1;
                    walker.skip_current_dir();
                }
                continue;
            }

            if !is_regular_file(&entry) {
                debug!(path = %entry.path().display(), "Skipping non-regular entry");
                continue;
            }

            stats.files_seen += 1;
            let name = entry.file_name().to_string_lossy();

            if !self.options.include_hidden && name.starts_with('.') {
                stats.files_skipped_hidden += 1;
                continue;
            }

            if !name_filter.accepts(&name) {
                stats.files_skipped_filter += 1;
                continue;
            }

            if let Some(matcher) = &matcher {
                let relative = relative_slash_path(root, entry.path())
                    .unwrap_or_else(|| name.to_string());
                if matcher.is_ignored(&relative) {
                    stats.files_skipped_ignored += 1;
                    continue;
                }
            }

            files.push(entry.path().to_path_buf());
        }

        stats.files_included = files.len();
        debug!(
            root = %root.display(),
            seen = stats.files_seen,
            included = stats.files_included,
            "Enumerated source files"
        );
        Ok((files, stats))
    }

    fn load_matcher(&self, root: &Path) -> (Box<dyn IgnoreMatcher>, usize) {
        let ignore_file = self
            .options
            .ignore_file
            .clone()
            .unwrap_or_else(|| root.join(DEFAULT_IGNORE_FILE));

        match self.options.ignore_engine {
            IgnoreEngine::Simple => {
                let rules = IgnoreRuleSet::load(&ignore_file, self.observer.as_ref());
                let count = rules.len();
                (Box::new(rules), count)
            }
            IgnoreEngine::Gitignore => {
                let matcher = GitignoreMatcher::load(root, &ignore_file, self.observer.as_ref());
                let count = matcher.len();
                (Box::new(matcher), count)
            }
        }
    }
}

impl Default for SourceEnumerator {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

/// Extension or base-name pattern filter. Extensions win when both are set.
enum NameFilter {
    All,
    Extensions(HashSet<String>),
    Patterns(GlobSet),
}

impl NameFilter {
    fn new(options: &ScanOptions) -> Result<Self> {
        if !options.extensions.is_empty() {
            return Ok(Self::Extensions(options.extensions.clone()));
        }
        if options.include_patterns.is_empty() {
            return Ok(Self::All);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in &options.include_patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| ScanError::InvalidPattern { pattern: pattern.clone(), source })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| ScanError::InvalidPattern {
            pattern: options.include_patterns.join(","),
            source,
        })?;
        Ok(Self::Patterns(set))
    }

    fn accepts(&self, file_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Extensions(extensions) => extensions.contains(extension_of(file_name)),
            Self::Patterns(set) => set.is_match(file_name),
        }
    }
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root)
        .map_err(|source| ScanError::RootAccess { path: root.to_path_buf(), source })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    fs::read_dir(root)
        .map_err(|source| ScanError::RootAccess { path: root.to_path_buf(), source })?;
    Ok(())
}

/// Regular file, or a symlink whose target is one.
fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}

fn traversal_error(root: &Path, err: walkdir::Error) -> ScanError {
    let path = err.path().unwrap_or(root).to_path_buf();
    ScanError::Traversal { path, source: err }
}
