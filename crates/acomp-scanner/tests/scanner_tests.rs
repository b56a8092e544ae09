use super::*;

fn scan(line: &str) -> Vec<Token> {
    ScannerState::new().scan_line(0, line)
}

fn significant(tokens: &[Token]) -> Vec<(&str, TokenKind)> {
    tokens
        .iter()
        .filter(|t| !t.trivia)
        .map(|t| (t.text.as_str(), t.kind))
        .collect()
}

fn locals(token: &Token) -> Vec<&str> {
    token.scope.local_vars().iter().collect()
}

#[test]
fn test_scan_classifies_basic_tokens() {
    let tokens = scan("var x = foo.bar(1, 'a') + true;");
    assert_eq!(
        significant(&tokens),
        vec![
            ("var", TokenKind::Other),
            ("x", TokenKind::Word),
            ("=", TokenKind::Operator),
            ("foo", TokenKind::Word),
            (".", TokenKind::Operator),
            ("bar", TokenKind::Property),
            ("(", TokenKind::Operator),
            ("1", TokenKind::Number),
            (",", TokenKind::Operator),
            ("'a'", TokenKind::String),
            (")", TokenKind::Operator),
            ("+", TokenKind::Operator),
            ("true", TokenKind::Atom),
            (";", TokenKind::Operator),
        ]
    );
}

#[test]
fn test_scan_tokens_cover_the_whole_line() {
    let line = "  let a=1 // trailing";
    let tokens = scan(line);
    let mut column = 0;
    for token in &tokens {
        assert_eq!(token.start, column, "gap before {:?}", token.text);
        column = token.end;
    }
    assert_eq!(column as usize, line.len());
    assert!(tokens.last().unwrap().trivia);
}

#[test]
fn test_scan_number_does_not_swallow_member_dot() {
    let tokens = scan("1.");
    assert_eq!(
        significant(&tokens),
        vec![("1", TokenKind::Number), (".", TokenKind::Operator)]
    );

    let tokens = scan("1.5e+3 0xFF 10n");
    assert_eq!(
        significant(&tokens),
        vec![
            ("1.5e+3", TokenKind::Number),
            ("0xFF", TokenKind::Number),
            ("10n", TokenKind::Number),
        ]
    );
}

#[test]
fn test_scan_optional_chaining_and_spread() {
    let tokens = scan("a?.b ...c x?.5:1");
    assert_eq!(
        significant(&tokens),
        vec![
            ("a", TokenKind::Word),
            ("?.", TokenKind::Operator),
            ("b", TokenKind::Property),
            ("...", TokenKind::Operator),
            ("c", TokenKind::Word),
            ("x", TokenKind::Word),
            ("?", TokenKind::Operator),
            (".5", TokenKind::Number),
            (":", TokenKind::Operator),
            ("1", TokenKind::Number),
        ]
    );
}

#[test]
fn test_scan_keyword_after_dot_is_property() {
    let tokens = scan("obj.default");
    assert_eq!(tokens[2].kind, TokenKind::Property);
}

#[test]
fn test_scan_string_escapes_and_unterminated() {
    let tokens = scan(r#""a\"b" 'open"#);
    assert_eq!(
        significant(&tokens),
        vec![(r#""a\"b""#, TokenKind::String), ("'open", TokenKind::String)]
    );
}

#[test]
fn test_scan_block_comment_spans_rows() {
    let mut state = ScannerState::new();
    let first = state.scan_line(0, "a /* start");
    let second = state.scan_line(1, "still */ b");
    assert!(first.last().unwrap().trivia);
    assert!(second[0].trivia);
    assert_eq!(second[0].text, "still */");
    assert_eq!(significant(&second), vec![("b", TokenKind::Word)]);
}

#[test]
fn test_scan_template_spans_rows() {
    let mut state = ScannerState::new();
    let first = state.scan_line(0, "x = `one");
    let second = state.scan_line(1, "two` + y");
    assert_eq!(first.last().unwrap().kind, TokenKind::String);
    assert_eq!(
        significant(&second),
        vec![
            ("two`", TokenKind::String),
            ("+", TokenKind::Operator),
            ("y", TokenKind::Word),
        ]
    );
}

#[test]
fn test_scan_var_declarations_are_visible_afterwards() {
    let tokens = scan("var alpha = 1, beta = f(a, b); al");
    let last = tokens.last().unwrap();
    assert_eq!(last.text, "al");
    let names = locals(last);
    assert!(names.contains(&"alpha"));
    assert!(names.contains(&"beta"));
    // Arguments of the call in the initializer are not declarations.
    assert!(!names.contains(&"a"));
    assert!(!names.contains(&"b"));
    assert!(!names.contains(&"al"));
}

#[test]
fn test_scan_object_literal_keys_are_not_declarations() {
    let tokens = scan("var point = {x: 1, y: 2}, size = 3; p");
    let names = locals(tokens.last().unwrap());
    assert_eq!(names, vec!["size", "point"]);
}

#[test]
fn test_scan_declaration_does_not_see_itself() {
    let tokens = scan("let gamma");
    let gamma = tokens.iter().find(|t| t.text == "gamma").unwrap();
    assert!(locals(gamma).is_empty());
}

#[test]
fn test_scan_most_recent_local_first() {
    let tokens = scan("const a = 1; const b = 2; x");
    assert_eq!(locals(tokens.last().unwrap()), vec!["b", "a"]);
}

#[test]
fn test_scan_function_scope_params_and_exit() {
    let mut state = ScannerState::new();
    state.scan_line(0, "var outer;");
    state.scan_line(1, "function f(p, q) {");
    let inside = state.scan_line(2, "  var inner; z");
    let z = inside.last().unwrap();
    let names = locals(z);
    assert!(names.contains(&"outer"));
    assert!(names.contains(&"f"));
    assert!(names.contains(&"p"));
    assert!(names.contains(&"q"));
    assert!(names.contains(&"inner"));
    assert_eq!(z.scope.function_depth(), 1);

    state.scan_line(3, "  if (p) { q(); }");
    let after = state.scan_line(4, "} w");
    let w = after.last().unwrap();
    let names = locals(w);
    assert!(names.contains(&"outer"));
    assert!(names.contains(&"f"));
    assert!(!names.contains(&"p"));
    assert!(!names.contains(&"inner"));
    assert_eq!(w.scope.function_depth(), 0);
}

#[test]
fn test_scan_catch_binding() {
    let tokens = scan("try { x() } catch (err) { er");
    assert!(locals(tokens.last().unwrap()).contains(&"err"));
}

#[test]
fn test_scan_non_ascii_is_one_token_per_char() {
    let tokens = scan("é.x");
    assert_eq!(tokens[0].text, "é");
    assert_eq!(tokens[0].end, 2);
    assert_eq!(tokens[0].kind, TokenKind::Other);
}
