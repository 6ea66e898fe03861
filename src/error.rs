use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_CONFIG_ERROR, EXIT_RUNTIME_ERROR};

#[derive(Error, Debug)]
pub enum SlocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid regular expression: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SlocError {
    /// Process exit code for this error.
    ///
    /// Problems with the user's configuration (config file, patterns) map to
    /// [`EXIT_CONFIG_ERROR`]; everything that happens while counting maps to
    /// [`EXIT_RUNTIME_ERROR`].
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_) => {
                EXIT_CONFIG_ERROR
            }
            Self::FileRead { .. } | Self::Walk(_) | Self::Io(_) | Self::JsonSerialize(_) => {
                EXIT_RUNTIME_ERROR
            }
        }
    }

    /// Underlying cause, rendered for the second line of an error report.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::Walk(e) => e.io_error().map(ToString::to_string),
            Self::Config(_)
            | Self::Io(_)
            | Self::TomlParse(_)
            | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SlocError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
