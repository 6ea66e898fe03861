//! Per-language aggregation of per-file line counts.
//!
//! A [`LanguageSummary`] is owned by one invocation: the caller creates it,
//! merges each file's [`LineStats`] into it and hands it to a formatter.

mod summary;

pub use summary::{LanguageStats, LanguageSummary, Totals};

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
