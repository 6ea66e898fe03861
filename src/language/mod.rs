mod registry;

pub use registry::{CommentSyntax, Language, LanguageRegistry, extension_of};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
