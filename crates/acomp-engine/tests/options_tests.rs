use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let options = CompletionOptions::default();
    assert_eq!(options.max_replace_length, 1_000);
    assert_eq!(options.max_context_scan_tokens, MAX_CONTEXT_SCAN_TOKENS);
    assert!(options.override_soft_tabs);
    assert!(options.keywords.iter().any(|k| k == "return"));
}

#[test]
fn test_partial_json_keeps_defaults() {
    let options = CompletionOptions::from_json_str(r#"{"maxReplaceLength": 40}"#).unwrap();
    assert_eq!(options.max_replace_length, 40);
    assert_eq!(options.keywords, CompletionOptions::default().keywords);

    let empty = CompletionOptions::from_json_str("{}").unwrap();
    assert_eq!(empty, CompletionOptions::default());
}

#[test]
fn test_keywords_override() {
    let options =
        CompletionOptions::from_json_str(r#"{"keywords": ["let", "loop"], "overrideSoftTabs": false}"#)
            .unwrap();
    assert_eq!(options.keywords, vec!["let", "loop"]);
    assert!(!options.override_soft_tabs);

    let built = CompletionOptions::default().with_keywords(["fn"]);
    assert_eq!(built.keywords, vec!["fn"]);
}

#[test]
fn test_wrong_field_type_is_an_error() {
    assert!(CompletionOptions::from_json_str(r#"{"maxReplaceLength": "wide"}"#).is_err());
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"maxContextScanTokens": 16}}"#).unwrap();
    let options = CompletionOptions::from_path(file.path()).unwrap();
    assert_eq!(options.max_context_scan_tokens, 16);
}
