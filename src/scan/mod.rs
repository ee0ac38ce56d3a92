//! Source file enumeration with ignore-rule support

use crate::domain::ScanOptions;
use std::path::{Path, PathBuf};

pub mod enumerator;
pub mod error;
pub mod gitignore;
pub mod observer;
pub mod rules;

pub use enumerator::SourceEnumerator;
pub use error::{Result, ScanError};
pub use gitignore::GitignoreMatcher;
pub use observer::{ScanObserver, SilentObserver, TracingObserver};
pub use rules::{IgnoreMatcher, IgnoreRuleSet};

/// Enumerate source files under `root`.
///
/// `None` options mean [`ScanOptions::default`]: ignore rules on, hidden files
/// off, no extension or pattern filter.
pub fn enumerate<P: AsRef<Path>>(root: P, options: Option<&ScanOptions>) -> Result<Vec<PathBuf>> {
    let options = options.cloned().unwrap_or_default();
    SourceEnumerator::new(options).enumerate(root)
}
