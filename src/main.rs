//! aicodereader: collect a project's source files for LLM prompting
//!
//! Lists or prints the files under a directory, honoring .gitignore rules,
//! hidden-file policy, and extension/pattern filters.

use anyhow::Result;

fn main() -> Result<()> {
    aicodereader::cli::run()
}
