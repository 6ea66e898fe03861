use std::io::BufRead;

use serde::Serialize;

use crate::language::CommentSyntax;

use super::CommentDetector;

/// Bucket a single line falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Mixed,
    Code,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub code: usize,
    pub comment: usize,
    pub mixed: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: 0,
            comment: 0,
            mixed: 0,
            blank: 0,
        }
    }

    /// Number of lines classified; every line lands in exactly one bucket.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.code + self.comment + self.mixed + self.blank
    }

    pub const fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Mixed => self.mixed += 1,
            LineKind::Code => self.code += 1,
        }
    }
}

impl std::ops::AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comment += other.comment;
        self.mixed += other.mixed;
        self.blank += other.blank;
    }
}

/// Per-file scratch state carried from one line to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationState {
    comment_depth: usize,
}

impl ClassificationState {
    #[must_use]
    pub const fn new() -> Self {
        Self { comment_depth: 0 }
    }

    /// Number of block comments opened and not yet closed.
    #[must_use]
    pub const fn comment_depth(&self) -> usize {
        self.comment_depth
    }

    #[must_use]
    pub const fn in_block_comment(&self) -> bool {
        self.comment_depth > 0
    }
}

pub struct SlocCounter<'a> {
    detector: CommentDetector<'a>,
}

impl<'a> SlocCounter<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            detector: CommentDetector::new(syntax),
        }
    }

    /// Classify every line of `source`. A trailing newline does not add a line.
    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        self.count_lines(source.lines())
    }

    /// Classify an ordered sequence of lines.
    #[must_use]
    pub fn count_lines<I, S>(&self, lines: I) -> LineStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = LineStats::new();
        let mut state = ClassificationState::new();

        for line in lines {
            stats.record(self.classify_line(line.as_ref(), &mut state));
        }

        stats
    }

    /// Count lines from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<LineStats> {
        let mut stats = LineStats::new();
        let mut state = ClassificationState::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            let line = String::from_utf8_lossy(&buf);
            stats.record(self.classify_line(&line, &mut state));
        }

        Ok(stats)
    }

    /// Classify one line and advance the block comment state.
    pub fn classify_line(&self, line: &str, state: &mut ClassificationState) -> LineKind {
        let trimmed = line.trim();

        // Blank wins even inside an open block comment.
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        let is_line_comment = self.detector.contains_line_comment(trimmed);
        let has_code = self.detector.has_code(trimmed);
        let block = self
            .detector
            .block_markers(trimmed, state.in_block_comment());

        if is_line_comment || block.opens_and_closes() {
            return if has_code {
                LineKind::Mixed
            } else {
                LineKind::Comment
            };
        }

        if block.opens {
            state.comment_depth += 1;
            return LineKind::Comment;
        }

        if block.closes {
            state.comment_depth = state.comment_depth.saturating_sub(1);
            return LineKind::Comment;
        }

        if state.in_block_comment() {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
