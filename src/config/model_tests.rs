use super::*;

fn language(extensions: &[&str], starts: &[&str], ends: &[&str]) -> CustomLanguageConfig {
    CustomLanguageConfig {
        extensions: extensions.iter().map(ToString::to_string).collect(),
        line_comments: vec!["//".to_string()],
        block_comment_starts: starts.iter().map(ToString::to_string).collect(),
        block_comment_ends: ends.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn config_default_values() {
    let config = Config::default();

    assert!(config.format.is_none());
    assert!(config.include.is_none());
    assert!(config.exclude.is_none());
    assert!(!config.parallel);
    assert!(config.languages.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn validate_accepts_complete_language() {
    let mut config = Config::default();
    config
        .languages
        .insert("Zig".to_string(), language(&[".zig"], &[], &[]));
    config
        .languages
        .insert("Odin".to_string(), language(&[".odin"], &["/*"], &["*/"]));

    assert!(config.validate().is_ok());
}

#[test]
fn validate_requires_extensions() {
    let mut config = Config::default();
    config
        .languages
        .insert("Nothing".to_string(), language(&[], &[], &[]));

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Nothing"));
}

#[test]
fn validate_rejects_empty_markers() {
    let mut config = Config::default();
    config
        .languages
        .insert("Blank".to_string(), language(&[""], &[], &[]));

    assert!(config.validate().is_err());
}

#[test]
fn validate_requires_block_markers_in_pairs() {
    let mut config = Config::default();
    config
        .languages
        .insert("Half".to_string(), language(&[".half"], &["/*"], &[]));

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("block comment"));
}
