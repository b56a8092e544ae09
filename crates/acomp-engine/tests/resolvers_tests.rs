use super::*;
use crate::value::{FunctionValue, ValueKind};
use acomp_scanner::ScopeState;

fn token(text: &str, kind: TokenKind) -> Token {
    Token::new(text, kind, 0, 0, text.len() as u32, ScopeState::new())
}

#[test]
fn test_default_literal_resolvers() {
    let registry = ResolverRegistry::default();
    let env = SymbolEnvironment::new();

    let s = registry.resolve(&token("\"hello\"", TokenKind::String), &env);
    assert_eq!(s, Some(Value::String("hello".into())));

    let n = registry.resolve(&token("42", TokenKind::Number), &env);
    assert_eq!(n, Some(Value::Number(42.0)));

    // Hex and other non-decimal forms still resolve to a number.
    let hex = registry.resolve(&token("0xFF", TokenKind::Number), &env);
    assert_eq!(hex.map(|v| v.kind()), Some(ValueKind::Number));

    let t = registry.resolve(&token("true", TokenKind::Atom), &env);
    assert_eq!(t, Some(Value::Bool(true)));
    let inf = registry.resolve(&token("Infinity", TokenKind::Atom), &env);
    assert_eq!(inf.map(|v| v.kind()), Some(ValueKind::Number));
    assert_eq!(registry.resolve(&token("null", TokenKind::Atom), &env), None);
}

#[test]
fn test_word_resolves_through_environment() {
    let registry = ResolverRegistry::default();
    let env = SymbolEnvironment::new()
        .with_global("foo", Value::object([("bar", Value::Null)]))
        .with_additional("foo", Value::Number(3.0));
    assert_eq!(
        registry.resolve(&token("foo", TokenKind::Word), &env),
        Some(Value::Number(3.0))
    );
    assert_eq!(registry.resolve(&token("nope", TokenKind::Word), &env), None);
}

#[test]
fn test_function_resolves_only_registered_callees() {
    let registry = ResolverRegistry::default();
    let jq = Value::Function(FunctionValue::returning(Value::object([(
        "addClass",
        Value::Function(FunctionValue::new()),
    )])));
    let env = SymbolEnvironment::new()
        .with_global("$", jq.clone())
        .with_global("other", jq);

    let base = registry
        .resolve(&token("$", TokenKind::Function), &env)
        .unwrap();
    assert_eq!(base.own_property_names(), vec!["addClass"]);

    // `other` is callable in the environment but not registered.
    assert_eq!(registry.resolve(&token("other", TokenKind::Function), &env), None);
}

#[test]
fn test_registered_callee_missing_from_environment() {
    let registry = ResolverRegistry::default();
    assert!(registry.has_call("_"));
    assert_eq!(
        registry.resolve(&token("_", TokenKind::Function), &SymbolEnvironment::new()),
        None
    );
}

#[test]
fn test_custom_registrations() {
    let mut registry = ResolverRegistry::empty();
    assert_eq!(
        registry.resolve(&token("x", TokenKind::Word), &SymbolEnvironment::new()),
        None
    );

    registry.register_kind(TokenKind::Function, |t, env, r| r.resolve_call(&t.text, env));
    registry.register_call("make", |_| Some(Value::String(String::new())));
    let value = registry.resolve(&token("make", TokenKind::Function), &SymbolEnvironment::new());
    assert_eq!(value.map(|v| v.kind()), Some(ValueKind::String));

    registry.unregister_call("make");
    assert!(!registry.has_call("make"));
    registry.unregister_kind(TokenKind::Function);
    assert!(format!("{registry:?}").contains("kinds: []"));
}
