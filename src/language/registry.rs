use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::CustomLanguageConfig;

/// Comment markers of a language.
///
/// Block markers are matched by containment, not by pairing: any start marker
/// opens a block that any end marker closes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommentSyntax {
    pub line_comments: Vec<String>,
    pub block_comment_starts: Vec<String>,
    pub block_comment_ends: Vec<String>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(line_comments: Vec<&str>, block_starts: Vec<&str>, block_ends: Vec<&str>) -> Self {
        Self {
            line_comments: to_owned_set(line_comments),
            block_comment_starts: to_owned_set(block_starts),
            block_comment_ends: to_owned_set(block_ends),
        }
    }

    /// Syntax with line comments only.
    #[must_use]
    pub fn line_only(line_comments: Vec<&str>) -> Self {
        Self::new(line_comments, vec![], vec![])
    }

    #[must_use]
    pub fn has_block_comments(&self) -> bool {
        !self.block_comment_starts.is_empty() && !self.block_comment_ends.is_empty()
    }
}

fn to_owned_set(markers: Vec<&str>) -> Vec<String> {
    let mut owned: Vec<String> = Vec::with_capacity(markers.len());
    for marker in markers {
        if !marker.is_empty() && !owned.iter().any(|m| m == marker) {
            owned.push(marker.to_string());
        }
    }
    owned
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Language {
    pub name: String,
    /// `.ext` entries match file extensions, anything else matches a whole file name.
    pub extensions: Vec<String>,
    pub comments: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comments: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comments,
        }
    }
}

/// Extension of a file name, dot included: everything from the last `.`.
///
/// A dotfile such as `.bashrc` is its own extension.
#[must_use]
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    matcher_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            matcher_map: HashMap::new(),
        }
    }

    /// Register a language. Matchers already claimed by an earlier language keep
    /// pointing at it.
    ///
    /// Returns `false` (and registers nothing) when a language with the same
    /// name exists, since statistics are keyed by name.
    pub fn register(&mut self, language: Language) -> bool {
        if self.get_by_name(&language.name).is_some() {
            return false;
        }

        let idx = self.languages.len();
        for matcher in &language.extensions {
            self.matcher_map.entry(matcher.clone()).or_insert(idx);
        }
        self.languages.push(language);
        true
    }

    /// Look up by a raw matcher: `.go`, `.bashrc`, `Makefile`.
    #[must_use]
    pub fn get_by_matcher(&self, matcher: &str) -> Option<&Language> {
        self.matcher_map
            .get(matcher)
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }

    /// Resolve the language of a file: exact file name first, then extension.
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<&Language> {
        let file_name = path.file_name()?.to_str()?;

        self.get_by_matcher(file_name)
            .or_else(|| extension_of(file_name).and_then(|ext| self.get_by_matcher(ext)))
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Built-in registry with user languages layered on top.
    ///
    /// User languages are registered first, so they win both matcher and name
    /// collisions with the built-in table.
    #[must_use]
    pub fn with_custom_languages(custom: &IndexMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::new();

        for (name, config) in custom {
            let comments = CommentSyntax {
                line_comments: config.line_comments.clone(),
                block_comment_starts: config.block_comment_starts.clone(),
                block_comment_ends: config.block_comment_ends.clone(),
            };
            registry.register(Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                comments,
            });
        }

        for language in builtin_languages() {
            registry.register(language);
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for language in builtin_languages() {
            registry.register(language);
        }
        registry
    }
}

fn c_style() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec!["/*"], vec!["*/"])
}

fn hash_only() -> CommentSyntax {
    CommentSyntax::line_only(vec!["#"])
}

fn markup() -> CommentSyntax {
    CommentSyntax::new(vec![], vec!["<!--"], vec!["-->"])
}

fn builtin_languages() -> Vec<Language> {
    vec![
        Language::new(
            "Batch",
            vec![".bat", ".cmd"],
            CommentSyntax::line_only(vec!["REM", "::"]),
        ),
        Language::new("C", vec![".c", ".cc", ".h"], c_style()),
        Language::new("C++", vec![".cpp", ".cxx", ".hpp", ".hxx", ".hh"], c_style()),
        Language::new("C#", vec![".cs"], c_style()),
        Language::new(
            "Clojure",
            vec![".clj", ".cljs", ".cljc", ".cljx", ".clojure", ".edn"],
            CommentSyntax::line_only(vec![";;"]),
        ),
        Language::new(
            "Coffeescript",
            vec![".coffee", ".cson"],
            CommentSyntax::new(vec!["#"], vec!["###"], vec!["###"]),
        ),
        Language::new(
            "CSS",
            vec![".css"],
            CommentSyntax::new(vec![], vec!["/*"], vec!["*/"]),
        ),
        Language::new(
            "Bash",
            vec![".sh", ".bash", ".zsh", ".bashrc", ".bash_profile"],
            hash_only(),
        ),
        Language::new("Golang", vec![".go"], c_style()),
        Language::new("Html", vec![".html", ".htm"], markup()),
        Language::new("JavaScript", vec![".js", ".mjs", ".cjs", ".jsx"], c_style()),
        Language::new("JSON", vec![".json"], CommentSyntax::default()),
        Language::new("LESS", vec![".less"], c_style()),
        Language::new(
            "Python",
            vec![".py", ".pyw", ".pyi"],
            CommentSyntax::new(
                vec!["#"],
                vec!["\"\"\"", "'''"],
                vec!["\"\"\"", "'''"],
            ),
        ),
        Language::new("SCSS", vec![".scss"], c_style()),
        Language::new("Typescript", vec![".ts", ".tsx", ".mts", ".cts"], c_style()),
        Language::new("Rust", vec![".rs"], c_style()),
        Language::new("Java", vec![".java"], c_style()),
        Language::new("Kotlin", vec![".kt", ".kts"], c_style()),
        Language::new("Swift", vec![".swift"], c_style()),
        Language::new(
            "PHP",
            vec![".php"],
            CommentSyntax::new(vec!["//", "#"], vec!["/*"], vec!["*/"]),
        ),
        Language::new(
            "Ruby",
            vec![".rb", "Rakefile", "Gemfile"],
            CommentSyntax::new(vec!["#"], vec!["=begin"], vec!["=end"]),
        ),
        Language::new(
            "Lua",
            vec![".lua"],
            CommentSyntax::line_only(vec!["--"]),
        ),
        Language::new(
            "SQL",
            vec![".sql"],
            CommentSyntax::new(vec!["--"], vec!["/*"], vec!["*/"]),
        ),
        Language::new(
            "Haskell",
            vec![".hs"],
            CommentSyntax::new(vec!["--"], vec!["{-"], vec!["-}"]),
        ),
        Language::new("XML", vec![".xml", ".xsd", ".svg"], markup()),
        Language::new("YAML", vec![".yml", ".yaml"], hash_only()),
        Language::new("TOML", vec![".toml"], hash_only()),
        Language::new(
            "Makefile",
            vec!["Makefile", "makefile", "GNUmakefile", ".mk"],
            hash_only(),
        ),
        Language::new("Dockerfile", vec!["Dockerfile", ".dockerfile"], hash_only()),
    ]
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
