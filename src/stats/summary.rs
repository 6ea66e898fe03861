use std::collections::BTreeMap;

use serde::Serialize;

use crate::counter::LineStats;
use crate::language::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageStats {
    pub language: Language,
    pub file_count: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub mixed_lines: usize,
    pub empty_lines: usize,
}

impl LanguageStats {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            file_count: 0,
            code_lines: 0,
            comment_lines: 0,
            mixed_lines: 0,
            empty_lines: 0,
        }
    }

    /// Account for one more file of this language.
    pub const fn add_file(&mut self, counts: &LineStats) {
        self.file_count += 1;
        self.code_lines += counts.code;
        self.comment_lines += counts.comment;
        self.mixed_lines += counts.mixed;
        self.empty_lines += counts.blank;
    }

    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.code_lines + self.comment_lines + self.mixed_lines + self.empty_lines
    }

    const fn absorb(&mut self, other: &Self) {
        self.file_count += other.file_count;
        self.code_lines += other.code_lines;
        self.comment_lines += other.comment_lines;
        self.mixed_lines += other.mixed_lines;
        self.empty_lines += other.empty_lines;
    }
}

/// Sum over every language in a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub file_count: usize,
    pub lines: LineStats,
}

/// Statistics keyed by language name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageSummary {
    by_language: BTreeMap<String, LanguageStats>,
}

impl LanguageSummary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            by_language: BTreeMap::new(),
        }
    }

    /// Merge one file's counts. The first file of a language creates its entry.
    pub fn merge(&mut self, language: &Language, counts: &LineStats) {
        self.by_language
            .entry(language.name.clone())
            .or_insert_with(|| LanguageStats::new(language.clone()))
            .add_file(counts);
    }

    /// Fold another summary into this one.
    pub fn absorb(&mut self, other: Self) {
        for (name, stats) in other.by_language {
            match self.by_language.get_mut(&name) {
                Some(existing) => existing.absorb(&stats),
                None => {
                    self.by_language.insert(name, stats);
                }
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LanguageStats> {
        self.by_language.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageStats> {
        self.by_language.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_language.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_language.is_empty()
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        self.iter().fold(Totals::default(), |mut acc, s| {
            acc.file_count += s.file_count;
            acc.lines += LineStats {
                code: s.code_lines,
                comment: s.comment_lines,
                mixed: s.mixed_lines,
                blank: s.empty_lines,
            };
            acc
        })
    }
}
