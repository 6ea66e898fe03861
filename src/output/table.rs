use std::fmt::Write;

use crate::counter::LineStats;
use crate::error::Result;
use crate::stats::LanguageSummary;

use super::{COLUMNS, StatsFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Space between columns.
const PADDING: usize = 2;

/// Right-aligned table with a trailing `Total` row.
pub struct TableFormatter {
    use_colors: bool,
}

impl TableFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn write_row(&self, out: &mut String, cells: &[String], widths: &[usize], bold: bool) {
        let mut line = String::new();
        for (cell, width) in cells.iter().zip(widths) {
            let _ = write!(line, "{cell:>w$}", w = width + PADDING);
        }

        if bold && self.use_colors {
            let _ = writeln!(out, "{}{line}{}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(out, "{line}");
        }
    }
}

fn row(name: &str, files: usize, lines: &LineStats) -> Vec<String> {
    vec![
        name.to_string(),
        files.to_string(),
        lines.code.to_string(),
        lines.comment.to_string(),
        lines.mixed.to_string(),
        lines.blank.to_string(),
    ]
}

impl StatsFormatter for TableFormatter {
    fn format(&self, summary: &LanguageSummary) -> Result<String> {
        let header: Vec<String> = COLUMNS.iter().map(ToString::to_string).collect();
        let body: Vec<Vec<String>> = summary
            .iter()
            .map(|s| {
                let lines = LineStats {
                    code: s.code_lines,
                    comment: s.comment_lines,
                    mixed: s.mixed_lines,
                    blank: s.empty_lines,
                };
                row(&s.language.name, s.file_count, &lines)
            })
            .collect();
        let totals = summary.totals();
        let total = row("Total", totals.file_count, &totals.lines);

        let mut widths = vec![0; COLUMNS.len()];
        for cells in std::iter::once(&header).chain(&body).chain(std::iter::once(&total)) {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        self.write_row(&mut output, &header, &widths, true);
        for cells in &body {
            self.write_row(&mut output, cells, &widths, false);
        }
        output.push('\n');
        self.write_row(&mut output, &total, &widths, true);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
