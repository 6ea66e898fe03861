use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::scanner::RegexFilter;
use crate::{EXIT_CONFIG_ERROR, EXIT_RUNTIME_ERROR};

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.go", "package main\n\n// entry\nfunc main() {} // run\n");
    write(dir.path(), "lib/util.go", "/*\n helpers\n*/\nfunc x() {}\n");
    write(dir.path(), "script.py", "# hi\nprint(1)\n");
    write(dir.path(), "notes.unknown", "whatever\n");
    write(dir.path(), "vendor/dep.go", "package dep\n");
    dir
}

#[test]
fn count_file_classifies_lines() {
    let dir = sample_tree();
    let registry = LanguageRegistry::default();
    let path = dir.path().join("main.go");
    let language = registry.detect(&path).unwrap();

    let stats = count_file(&path, language).unwrap();

    assert_eq!(
        stats,
        LineStats {
            code: 1,
            comment: 1,
            mixed: 1,
            blank: 1,
        }
    );
}

#[test]
fn count_file_missing_is_file_read_error() {
    let dir = TempDir::new().unwrap();
    let registry = LanguageRegistry::default();
    let path = dir.path().join("gone.rs");
    let language = registry.detect(&path).unwrap();

    let err = count_file(&path, language).unwrap_err();

    assert!(matches!(err, SlocError::FileRead { .. }));
    assert_eq!(err.exit_code(), EXIT_RUNTIME_ERROR);
}

#[test]
fn count_path_groups_by_language() {
    let dir = sample_tree();
    let registry = LanguageRegistry::default();

    let summary = count_path(dir.path(), RegexFilter::default(), &registry, false).unwrap();

    assert_eq!(summary.len(), 2);
    let go = summary.get("Golang").unwrap();
    assert_eq!(go.file_count, 3);
    assert_eq!(go.code_lines, 3);
    assert_eq!(go.comment_lines, 4);
    assert_eq!(go.mixed_lines, 1);
    assert_eq!(go.empty_lines, 1);
    let python = summary.get("Python").unwrap();
    assert_eq!(python.file_count, 1);
    assert_eq!(python.comment_lines, 1);
}

#[test]
fn count_path_skips_unknown_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.unknown", "x\n");
    write(dir.path(), "LICENSE", "text\n");
    let registry = LanguageRegistry::default();

    let summary = count_path(dir.path(), RegexFilter::default(), &registry, false).unwrap();

    assert!(summary.is_empty());
}

#[test]
fn count_path_applies_exclude() {
    let dir = sample_tree();
    let registry = LanguageRegistry::default();
    let filter = RegexFilter::new(None, Some("vendor")).unwrap();

    let summary = count_path(dir.path(), filter, &registry, false).unwrap();

    assert_eq!(summary.get("Golang").unwrap().file_count, 2);
}

#[test]
fn count_path_applies_include() {
    let dir = sample_tree();
    let registry = LanguageRegistry::default();
    let filter = RegexFilter::new(Some(r"\.py$"), None).unwrap();

    let summary = count_path(dir.path(), filter, &registry, false).unwrap();

    assert_eq!(summary.len(), 1);
    assert!(summary.get("Python").is_some());
}

#[test]
fn parallel_count_matches_sequential() {
    let dir = sample_tree();
    for i in 0..20 {
        write(dir.path(), &format!("gen/f{i}.rs"), "// c\nfn f() {}\n\n");
    }
    let registry = LanguageRegistry::default();

    let sequential = count_path(dir.path(), RegexFilter::default(), &registry, false).unwrap();
    let parallel = count_path(dir.path(), RegexFilter::default(), &registry, true).unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(parallel.get("Rust").unwrap().file_count, 20);
}

#[test]
fn count_files_advances_progress_for_every_file() {
    let dir = sample_tree();
    let registry = LanguageRegistry::default();
    let files = vec![dir.path().join("main.go"), dir.path().join("notes.unknown")];
    let progress = CountProgress::new(2, true);

    count_files(&files, &registry, false, &progress).unwrap();

    assert_eq!(progress.position(), 2);
}

#[test]
fn count_path_empty_file_counts_as_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "empty.rs", "");
    let registry = LanguageRegistry::default();

    let summary = count_path(dir.path(), RegexFilter::default(), &registry, false).unwrap();

    let rust = summary.get("Rust").unwrap();
    assert_eq!(rust.file_count, 1);
    assert_eq!(rust.total_lines(), 0);
}

#[test]
fn run_count_writes_output_file() {
    let dir = sample_tree();
    let out = dir.path().join("report").join("out.csv");
    let cli = Cli::parse_from([
        "sloc",
        dir.path().to_str().unwrap(),
        "--no-config",
        "--format",
        "csv",
        "--exclude",
        "report",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert_eq!(run_count(&cli), EXIT_SUCCESS);

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Language, Files, Code, Comment, Mixed, Blank\n"));
    assert!(content.contains("Golang, 3, 3, 4, 1, 1\n"));
}

#[test]
fn run_count_invalid_pattern_is_config_error() {
    let dir = sample_tree();
    let cli = Cli::parse_from(["sloc", dir.path().to_str().unwrap(), "--no-config", "-i", "("]);

    assert_eq!(run_count(&cli), EXIT_CONFIG_ERROR);
}

#[test]
fn run_count_missing_root_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let cli = Cli::parse_from(["sloc", missing.to_str().unwrap(), "--no-config"]);

    assert_eq!(run_count(&cli), EXIT_RUNTIME_ERROR);
}

#[test]
fn run_count_reads_explicit_config() {
    let dir = sample_tree();
    write(
        dir.path(),
        "cfg/sloc.toml",
        "format = \"json\"\nexclude = \"vendor\"\n\n[languages.Notes]\nextensions = [\".unknown\"]\nline_comments = [\"--\"]\n",
    );
    let out = dir.path().join("out.json");
    let cli = Cli::parse_from([
        "sloc",
        dir.path().to_str().unwrap(),
        "-c",
        dir.path().join("cfg/sloc.toml").to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);

    assert_eq!(run_count(&cli), EXIT_SUCCESS);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["Golang"]["FileCount"], 2);
    assert_eq!(json["Notes"]["CodeLines"], 1);
}
