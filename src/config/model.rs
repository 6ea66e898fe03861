use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, SlocError};
use crate::output::OutputFormat;

/// Contents of a `.sloc.toml` file. Every field is optional; command-line
/// flags take precedence.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Regex a file path must match to be counted.
    #[serde(default)]
    pub include: Option<String>,

    /// Regex for files and directories to skip.
    #[serde(default)]
    pub exclude: Option<String>,

    /// Classify files on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,

    /// User languages, keyed by name, in declaration order.
    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CustomLanguageConfig {
    /// `.ext` entries or exact file names.
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub line_comments: Vec<String>,

    #[serde(default)]
    pub block_comment_starts: Vec<String>,

    #[serde(default)]
    pub block_comment_ends: Vec<String>,
}

impl Config {
    /// Check semantic constraints serde cannot express.
    ///
    /// # Errors
    /// Returns a configuration error naming the offending language.
    pub fn validate(&self) -> Result<()> {
        for (name, lang) in &self.languages {
            if name.trim().is_empty() {
                return Err(SlocError::Config("language name must not be empty".to_string()));
            }
            if lang.extensions.is_empty() {
                return Err(SlocError::Config(format!(
                    "language '{name}' needs at least one extension or file name"
                )));
            }
            let mut all_markers = lang
                .extensions
                .iter()
                .chain(&lang.line_comments)
                .chain(&lang.block_comment_starts)
                .chain(&lang.block_comment_ends);
            if all_markers.any(String::is_empty) {
                return Err(SlocError::Config(format!(
                    "language '{name}' contains an empty extension or comment marker"
                )));
            }
            if lang.block_comment_starts.is_empty() != lang.block_comment_ends.is_empty() {
                return Err(SlocError::Config(format!(
                    "language '{name}' must declare both block comment starts and ends, or neither"
                )));
            }
        }
        Ok(())
    }
}
