//! Full gitignore matching backed by the `ignore` crate.

use super::observer::ScanObserver;
use super::rules::IgnoreMatcher;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;
use tracing::debug;

/// Gitignore matcher with negation, anchoring, and `**` support.
///
/// Patterns are interpreted relative to the scan root, whatever directory the
/// ignore file itself lives in.
pub struct GitignoreMatcher {
    gitignore: Gitignore,
}

impl GitignoreMatcher {
    /// Load `ignore_file` with patterns rooted at `root`. Never fails.
    pub fn load(root: &Path, ignore_file: &Path, observer: &dyn ScanObserver) -> Self {
        if !ignore_file.exists() {
            debug!(path = %ignore_file.display(), "No ignore file found");
            return Self { gitignore: Gitignore::empty() };
        }

        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(ignore_file) {
            // Partial errors still leave the valid lines in the builder.
            observer.ignore_file_unreadable(ignore_file, &err);
        }

        let gitignore = match builder.build() {
            Ok(gitignore) => gitignore,
            Err(err) => {
                observer.ignore_file_unreadable(ignore_file, &err);
                Gitignore::empty()
            }
        };
        debug!(path = %ignore_file.display(), rules = gitignore.len(), "Loaded gitignore rules");
        Self { gitignore }
    }

    pub fn len(&self) -> usize {
        self.gitignore.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gitignore.is_empty()
    }
}

impl IgnoreMatcher for GitignoreMatcher {
    fn is_ignored(&self, relative_path: &str) -> bool {
        self.gitignore.matched_path_or_any_parents(Path::new(relative_path), false).is_ignore()
    }
}
