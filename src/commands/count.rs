use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::cli::Cli;
use crate::counter::{LineStats, SlocCounter};
use crate::error::SlocError;
use crate::language::{Language, LanguageRegistry};
use crate::output::CountProgress;
use crate::scanner::{DirectoryScanner, FileFilter, FileScanner, RegexFilter};
use crate::stats::LanguageSummary;
use crate::EXIT_SUCCESS;

use super::context::{color_choice_to_mode, load_config, write_output};

/// Run a full count for the parsed command line and return the process exit code.
#[must_use]
pub fn run_count(cli: &Cli) -> i32 {
    match run_count_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(error = ?e, "count failed");
            eprintln!("Error: {e}");
            if let Some(detail) = e.detail() {
                eprintln!("  {detail}");
            }
            e.exit_code()
        }
    }
}

fn run_count_impl(cli: &Cli) -> crate::Result<i32> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "loaded config");
    }
    let config = loaded.config;

    let format = cli.format.or(config.format).unwrap_or_default();
    let include = cli.include.as_deref().or(config.include.as_deref());
    let exclude = cli.exclude.as_deref().or(config.exclude.as_deref());
    let parallel = cli.parallel || config.parallel;

    let registry = LanguageRegistry::with_custom_languages(&config.languages);
    let filter = RegexFilter::new(include, exclude)?;

    tracing::info!(root = %cli.path.display(), "scanning");
    let files = DirectoryScanner::new(filter).scan(&cli.path)?;
    tracing::info!(files = files.len(), parallel, "counting");

    let progress = CountProgress::new(files.len() as u64, cli.quiet);
    let summary = count_files(&files, &registry, parallel, &progress);
    progress.finish();
    let summary = summary?;

    let totals = summary.totals();
    tracing::info!(
        languages = summary.len(),
        files = totals.file_count,
        lines = totals.lines.total(),
        "done"
    );

    let output = format
        .formatter(color_choice_to_mode(cli.color))
        .format(&summary)?;
    write_output(cli.output.as_deref(), &output)?;

    Ok(EXIT_SUCCESS)
}

/// Walk `root` and count every recognised file that passes `filter`.
///
/// # Errors
/// Returns the first traversal or read error encountered.
pub fn count_path<F: FileFilter>(
    root: &Path,
    filter: F,
    registry: &LanguageRegistry,
    parallel: bool,
) -> crate::Result<LanguageSummary> {
    let files = DirectoryScanner::new(filter).scan(root)?;
    let progress = CountProgress::new(files.len() as u64, true);
    count_files(&files, registry, parallel, &progress)
}

/// Count `files`, skipping those in no registered language.
///
/// In parallel mode every rayon worker builds its own partial summary and the
/// partials are absorbed into one; no lock is shared between workers.
///
/// # Errors
/// Returns an error if any recognised file cannot be read.
pub fn count_files(
    files: &[PathBuf],
    registry: &LanguageRegistry,
    parallel: bool,
    progress: &CountProgress,
) -> crate::Result<LanguageSummary> {
    let count_one = |path: &PathBuf| count_entry(path, registry, progress);

    if parallel {
        files
            .par_iter()
            .filter_map(count_one)
            .try_fold(LanguageSummary::new, merge_counted)
            .try_reduce(LanguageSummary::new, |mut summary, partial| {
                summary.absorb(partial);
                Ok(summary)
            })
    } else {
        files
            .iter()
            .filter_map(count_one)
            .try_fold(LanguageSummary::new(), merge_counted)
    }
}

fn merge_counted(
    mut summary: LanguageSummary,
    counted: crate::Result<(&Language, LineStats)>,
) -> crate::Result<LanguageSummary> {
    let (language, stats) = counted?;
    summary.merge(language, &stats);
    Ok(summary)
}

fn count_entry<'r>(
    path: &Path,
    registry: &'r LanguageRegistry,
    progress: &CountProgress,
) -> Option<crate::Result<(&'r Language, LineStats)>> {
    let result = registry
        .detect(path)
        .map(|language| count_file(path, language).map(|stats| (language, stats)));
    if result.is_none() {
        tracing::trace!(path = %path.display(), "no language, skipped");
    }
    progress.inc();
    result
}

/// Classify every line of one file.
///
/// # Errors
/// Returns [`SlocError::FileRead`] if the file cannot be opened or read.
pub fn count_file(path: &Path, language: &Language) -> crate::Result<LineStats> {
    let read_error = |source| SlocError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let stats = SlocCounter::new(&language.comments)
        .count_reader(BufReader::new(file))
        .map_err(read_error)?;
    tracing::debug!(
        path = %path.display(),
        language = %language.name,
        lines = stats.total(),
        "counted"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
