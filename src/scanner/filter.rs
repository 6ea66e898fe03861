use std::borrow::Cow;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, SlocError};

pub trait FileFilter {
    /// Whether a file should be counted.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walker should enter a directory.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

/// Include/exclude filter over walked paths.
///
/// Patterns are unanchored regular expressions matched against the path as
/// walked (root joined), with `/` separators on every platform.
#[derive(Debug, Clone, Default)]
pub struct RegexFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl RegexFilter {
    /// Create a filter. Empty patterns are treated as absent.
    ///
    /// # Errors
    /// Returns an error if either pattern is not a valid regular expression.
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    fn is_included(&self, path: &Path) -> bool {
        self.include
            .as_ref()
            .is_none_or(|re| re.is_match(&match_path(path)))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|re| re.is_match(&match_path(path)))
    }
}

impl FileFilter for RegexFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.is_included(path) && !self.is_excluded(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        !self.is_excluded(dir)
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern {
        None | Some("") => Ok(None),
        Some(pattern) => Regex::new(pattern)
            .map(Some)
            .map_err(|source| SlocError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }),
    }
}

/// Path text used for pattern matching.
fn match_path(path: &Path) -> Cow<'_, str> {
    let text = path.to_string_lossy();
    if text.contains('\\') {
        Cow::Owned(text.replace('\\', "/"))
    } else {
        text
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
