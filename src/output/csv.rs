use std::fmt::Write;

use crate::error::Result;
use crate::stats::LanguageSummary;

use super::{COLUMNS, StatsFormatter};

const SEPARATOR: &str = ", ";

/// One header row, then one row per language. No total row.
pub struct CsvFormatter;

impl StatsFormatter for CsvFormatter {
    fn format(&self, summary: &LanguageSummary) -> Result<String> {
        let mut output = COLUMNS.join(SEPARATOR);
        output.push('\n');

        for s in summary.iter() {
            let _ = writeln!(
                output,
                "{name}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
                s.file_count,
                s.code_lines,
                s.comment_lines,
                s.mixed_lines,
                s.empty_lines,
                name = s.language.name,
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
