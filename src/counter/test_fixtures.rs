//! Shared test fixtures for counter tests.
//!
//! Provides common `CommentSyntax` configurations used across both
//! `comment_tests` and `sloc_tests` modules.

use crate::language::CommentSyntax;

/// `//` line comments only, no block comments
pub fn line_only_syntax() -> CommentSyntax {
    CommentSyntax::line_only(vec!["//"])
}

/// C family: `//` and `/* */`
pub fn c_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec!["/*"], vec!["*/"])
}

/// Block comments only (CSS)
pub fn css_syntax() -> CommentSyntax {
    CommentSyntax::new(vec![], vec!["/*"], vec!["*/"])
}

/// Python: `#` and symmetric triple-quote markers
pub fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec!["\"\"\"", "'''"], vec!["\"\"\"", "'''"])
}

/// No comment syntax at all (JSON)
pub fn json_syntax() -> CommentSyntax {
    CommentSyntax::default()
}
