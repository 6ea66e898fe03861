mod csv;
mod json;
mod progress;
mod table;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use progress::CountProgress;
pub use table::{ColorMode, TableFormatter};

use serde::Deserialize;

use crate::error::Result;
use crate::stats::LanguageSummary;

/// Column titles shared by the table and CSV renderers.
pub const COLUMNS: [&str; 6] = ["Language", "Files", "Code", "Comment", "Mixed", "Blank"];

/// Trait for rendering a language summary.
pub trait StatsFormatter {
    /// Format the summary into a string ending with a newline.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, summary: &LanguageSummary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    /// Formatter for this output format.
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn StatsFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter::new(color)),
            Self::Csv => Box::new(CsvFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
