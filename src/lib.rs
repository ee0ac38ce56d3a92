//! aicodereader: collect a project's source files for LLM prompting
//!
//! The core is [`scan::enumerate`], which walks a directory and returns the
//! files that pass the hidden-file rule, extension or pattern filters, and
//! ignore rules.

pub mod cli;
pub mod config;
pub mod domain;
pub mod scan;
pub mod utils;

pub use domain::{IgnoreEngine, ScanOptions, ScanStats};
pub use scan::{enumerate, ScanError, SourceEnumerator};
