use super::*;
use std::io::Write;

#[test]
fn test_additional_context_shadows_globals() {
    let env = SymbolEnvironment::new()
        .with_global("foo", Value::Number(1.0))
        .with_additional("foo", Value::String("a".into()));
    assert_eq!(env.lookup("foo"), Some(&Value::String("a".into())));
}

#[test]
fn test_nullish_additional_binding_falls_through_to_global() {
    let document = Value::object([("body", Value::Null)]);
    let env = SymbolEnvironment::new()
        .with_global("document", document.clone())
        .with_global("flag", Value::Bool(true))
        .with_additional("document", Value::Null)
        .with_additional("flag", Value::Undefined)
        .with_additional("gone", Value::Null);
    assert_eq!(env.lookup("document"), Some(&document));
    assert_eq!(env.lookup("flag"), Some(&Value::Bool(true)));
    assert_eq!(env.lookup("gone"), Some(&Value::Null));
}

#[test]
fn test_names_follow_insertion_order() {
    let mut env = SymbolEnvironment::new();
    env.set_global("b", Value::Null);
    env.set_global("a", Value::Null);
    env.set_additional("z", Value::Null);
    assert_eq!(env.global_names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(env.additional_names().collect::<Vec<_>>(), vec!["z"]);
}

#[test]
fn test_from_json_str() {
    let env = SymbolEnvironment::from_json_str(
        r#"{
            "globals": { "document": { "body": {}, "title": "t" } },
            "additionalContext": { "editor": { "session": {} } }
        }"#,
    )
    .unwrap();
    assert_eq!(
        env.lookup("document").unwrap().own_property_names(),
        vec!["body", "title"]
    );
    assert!(env.lookup("editor").is_some());
}

#[test]
fn test_from_json_str_defaults_missing_sections() {
    let env = SymbolEnvironment::from_json_str("{}").unwrap();
    assert_eq!(env, SymbolEnvironment::default());
}

#[test]
fn test_from_json_str_rejects_malformed_input() {
    let err = SymbolEnvironment::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, crate::error::ConfigError::Json(_)));
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"globals": {{"x": 1}}}}"#).unwrap();
    let env = SymbolEnvironment::from_path(file.path()).unwrap();
    assert_eq!(env.lookup("x"), Some(&Value::Number(1.0)));

    let missing = file.path().with_extension("missing");
    let err = SymbolEnvironment::from_path(&missing).unwrap_err();
    assert!(matches!(err, crate::error::ConfigError::Io { .. }));
    assert!(err.to_string().contains("failed to read"));
}
