//! Integration tests for source enumeration.

use aicodereader::{enumerate, IgnoreEngine, ScanError, ScanOptions, SourceEnumerator};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Root with `a.go`, `a.txt`, `sub/b.go`, `.secret`, `node_modules/pkg.json`,
/// `build/out.bin`, and a `.gitignore` excluding the last three.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    fn new() -> Self {
        let repo = Self::empty();
        for rel in ["a.go", "a.txt", "sub/b.go", ".secret", "node_modules/pkg.json", "build/out.bin"]
        {
            repo.write(rel, "test content");
        }
        repo.write(".gitignore", "node_modules/\nbuild/\n*.bin\n.secret\n");
        repo
    }

    fn empty() -> Self {
        Self { dir: TempDir::new().expect("temp dir") }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(path, content).expect("write file");
    }

    /// Relative, `/`-separated, sorted.
    fn relative(&self, files: &[PathBuf]) -> BTreeSet<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(self.root())
                    .expect("under root")
                    .to_string_lossy()
                    .replace(std::path::MAIN_SEPARATOR, "/")
            })
            .collect()
    }
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn extensions(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn default_options_apply_ignore_and_hidden_rules() {
    let repo = TestRepo::new();
    let files = enumerate(repo.root(), None).expect("scan");
    assert_eq!(repo.relative(&files), set(&["a.go", "a.txt", "sub/b.go"]));
}

#[test]
fn explicit_default_options_match_none() {
    let repo = TestRepo::new();
    let implicit = enumerate(repo.root(), None).expect("scan");
    let explicit = enumerate(repo.root(), Some(&ScanOptions::default())).expect("scan");
    assert_eq!(implicit, explicit);
}

#[test]
fn without_ignore_rules_hidden_still_excluded() {
    let repo = TestRepo::new();
    let options = ScanOptions { respect_gitignore: false, ..ScanOptions::default() };
    let files = enumerate(repo.root(), Some(&options)).expect("scan");
    assert_eq!(
        repo.relative(&files),
        set(&["a.go", "a.txt", "sub/b.go", "node_modules/pkg.json", "build/out.bin"])
    );
}

#[test]
fn without_ignore_rules_with_hidden() {
    let repo = TestRepo::new();
    let options =
        ScanOptions { respect_gitignore: false, include_hidden: true, ..ScanOptions::default() };
    let files = enumerate(repo.root(), Some(&options)).expect("scan");
    assert_eq!(
        repo.relative(&files),
        set(&[
            ".gitignore",
            ".secret",
            "a.go",
            "a.txt",
            "sub/b.go",
            "node_modules/pkg.json",
            "build/out.bin",
        ])
    );
}

#[test]
fn single_extension_filter() {
    let repo = TestRepo::new();
    let options = ScanOptions { extensions: extensions(&[".go"]), ..ScanOptions::default() };
    let files = enumerate(repo.root(), Some(&options)).expect("scan");
    assert_eq!(repo.relative(&files), set(&["a.go", "sub/b.go"]));
    assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "go")));
}

#[test]
fn multiple_extension_filter_ignores_other_suffixes() {
    let repo = TestRepo::new();
    repo.write("web/app.js", "console.log(1)");
    repo.write("web/app.ts", "export {}");

    let options = ScanOptions {
        respect_gitignore: false,
        extensions: extensions(&[".go", ".js"]),
        ..ScanOptions::default()
    };
    let files = enumerate(repo.root(), Some(&options)).expect("scan");
    assert_eq!(repo.relative(&files), set(&["a.go", "sub/b.go", "web/app.js"]));
}

#[test]
fn git_directory_never_listed() {
    let repo = TestRepo::new();
    repo.write(".git/HEAD", "ref: refs/heads/main");
    repo.write(".git/objects/00/abc", "blob");
    repo.write("sub/.git/config", "[core]");

    for (respect, hidden) in [(true, false), (false, false), (false, true), (true, true)] {
        let options = ScanOptions {
            respect_gitignore: respect,
            include_hidden: hidden,
            ..ScanOptions::default()
        };
        let files = enumerate(repo.root(), Some(&options)).expect("scan");
        assert!(
            repo.relative(&files).iter().all(|p| !p.split('/').any(|seg| seg == ".git")),
            "respect={respect} hidden={hidden}"
        );
    }
}

#[test]
fn hidden_names_excluded_at_every_depth() {
    let repo = TestRepo::new();
    repo.write("sub/.env", "KEY=1");
    repo.write("deep/er/.cache", "x");

    let options = ScanOptions { respect_gitignore: false, ..ScanOptions::default() };
    let files = enumerate(repo.root(), Some(&options)).expect("scan");
    assert!(!files.is_empty());
    for file in &files {
        let name = file.file_name().expect("file name").to_string_lossy();
        assert!(!name.starts_with('.'), "{name} should be hidden");
    }
}

#[test]
fn repeated_scans_are_identical() {
    let repo = TestRepo::new();
    let first = enumerate(repo.root(), None).expect("scan");
    let second = enumerate(repo.root(), None).expect("scan");
    assert_eq!(first, second);
}

#[test]
fn results_are_rooted_at_the_given_path() {
    let repo = TestRepo::new();
    let files = enumerate(repo.root(), None).expect("scan");
    assert!(files.iter().all(|f| f.starts_with(repo.root())));
}

#[test]
fn custom_ignore_file_path() {
    let repo = TestRepo::new();
    repo.write("custom.gitignore", "*.txt\nsub/\n");

    let options = ScanOptions {
        ignore_file: Some(repo.root().join("custom.gitignore")),
        ..ScanOptions::default()
    };
    let files = enumerate(repo.root(), Some(&options)).expect("scan");
    assert_eq!(
        repo.relative(&files),
        set(&["a.go", "build/out.bin", "custom.gitignore", "node_modules/pkg.json"])
    );
}

#[test]
fn missing_ignore_file_is_not_an_error() {
    let repo = TestRepo::new();
    let options = ScanOptions {
        ignore_file: Some(PathBuf::from("/non/existent/path/.gitignore")),
        ..ScanOptions::default()
    };
    let files = enumerate(repo.root(), Some(&options)).expect("scan");
    assert_eq!(repo.relative(&files).len(), 5);
}

#[test]
fn negated_rule_stays_inert_with_simple_engine() {
    let repo = TestRepo::new();
    repo.write(".gitignore", "*.txt\n!a.txt\n");

    let files = enumerate(repo.root(), None).expect("scan");
    assert!(!repo.relative(&files).contains("a.txt"));

    let options = ScanOptions { ignore_engine: IgnoreEngine::Gitignore, ..ScanOptions::default() };
    let files = enumerate(repo.root(), Some(&options)).expect("scan");
    assert!(repo.relative(&files).contains("a.txt"));
}

#[test]
fn nonexistent_root_is_an_error() {
    let repo = TestRepo::empty();
    let missing = repo.root().join("does-not-exist");
    let err = enumerate(&missing, None).expect_err("missing root");
    match err {
        ScanError::RootAccess { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_directory_yields_empty_list() {
    let repo = TestRepo::empty();
    let files = enumerate(repo.root(), None).expect("scan");
    assert!(files.is_empty());
}

#[test]
fn concurrent_scans_share_nothing() {
    let repo = TestRepo::new();
    let go_only = SourceEnumerator::new(ScanOptions {
        extensions: extensions(&[".go"]),
        ..ScanOptions::default()
    });
    let everything = SourceEnumerator::new(ScanOptions {
        respect_gitignore: false,
        include_hidden: true,
        ..ScanOptions::default()
    });

    std::thread::scope(|scope| {
        let a = scope.spawn(|| go_only.enumerate(repo.root()).expect("scan"));
        let b = scope.spawn(|| everything.enumerate(repo.root()).expect("scan"));
        let a = a.join().expect("thread a");
        let b = b.join().expect("thread b");
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 7);
    });
}
