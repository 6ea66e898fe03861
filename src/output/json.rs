use crate::error::Result;
use crate::stats::LanguageSummary;

use super::StatsFormatter;

/// Pretty-printed object keyed by language name.
pub struct JsonFormatter;

impl StatsFormatter for JsonFormatter {
    fn format(&self, summary: &LanguageSummary) -> Result<String> {
        let mut output = serde_json::to_string_pretty(summary)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
