use crate::language::CommentSyntax;

/// Block comment markers present on a single trimmed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockMarkers {
    pub opens: bool,
    pub closes: bool,
}

impl BlockMarkers {
    #[must_use]
    pub const fn opens_and_closes(self) -> bool {
        self.opens && self.closes
    }
}

/// Textual comment marker matching for one language.
///
/// Nothing here understands string literals or escapes: `"http://x"` contains
/// a `//` line comment as far as the detector is concerned.
pub struct CommentDetector<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> CommentDetector<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    /// The trimmed line starts with a line comment prefix.
    #[must_use]
    pub fn is_single_line_comment(&self, trimmed: &str) -> bool {
        self.syntax
            .line_comments
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    /// The trimmed line contains a line comment prefix anywhere.
    #[must_use]
    pub fn contains_line_comment(&self, trimmed: &str) -> bool {
        self.syntax
            .line_comments
            .iter()
            .any(|prefix| trimmed.contains(prefix.as_str()))
    }

    #[must_use]
    pub fn starts_with_block_start(&self, trimmed: &str) -> bool {
        self.syntax
            .block_comment_starts
            .iter()
            .any(|marker| trimmed.starts_with(marker.as_str()))
    }

    /// Whether the line carries code ahead of any comment.
    ///
    /// This is a prefix check while comment and block detection use containment.
    /// The asymmetry is what turns `x = 1 // note` into a mixed line and keeps
    /// `// note` a pure comment. It also means a line that closes a block and
    /// then continues with code (`*/ x = 1`) counts as having code.
    #[must_use]
    pub fn has_code(&self, trimmed: &str) -> bool {
        !self.is_single_line_comment(trimmed) && !self.starts_with_block_start(trimmed)
    }

    /// Block markers on the line.
    ///
    /// A line whose only marker occurrence is a token that both opens and
    /// closes (Python's `"""`) is a single toggle: it closes when a block is
    /// already open and opens otherwise.
    #[must_use]
    pub fn block_markers(&self, trimmed: &str, in_block: bool) -> BlockMarkers {
        if !self.syntax.has_block_comments() {
            return BlockMarkers::default();
        }

        let opens = self
            .syntax
            .block_comment_starts
            .iter()
            .any(|marker| trimmed.contains(marker.as_str()));
        let closes = self
            .syntax
            .block_comment_ends
            .iter()
            .any(|marker| trimmed.contains(marker.as_str()));

        if opens && closes && self.marker_occurrences(trimmed) == 1 {
            return BlockMarkers {
                opens: !in_block,
                closes: in_block,
            };
        }

        BlockMarkers { opens, closes }
    }

    /// Total occurrences of distinct block markers on the line.
    fn marker_occurrences(&self, trimmed: &str) -> usize {
        let mut seen: Vec<&str> = Vec::new();
        let mut occurrences = 0;

        for marker in self
            .syntax
            .block_comment_starts
            .iter()
            .chain(&self.syntax.block_comment_ends)
        {
            if seen.contains(&marker.as_str()) {
                continue;
            }
            seen.push(marker);
            occurrences += trimmed.matches(marker.as_str()).count();
        }

        occurrences
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
