use super::*;
use crate::token::TokenKind;

#[test]
fn test_document_splits_rows_and_strips_carriage_returns() {
    let doc = Document::new("a\r\nb\n");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line(0), Some("a"));
    assert_eq!(doc.line(1), Some("b"));
    assert_eq!(doc.line(2), Some(""));
    assert_eq!(doc.text(), "a\nb\n");
}

#[test]
fn test_raw_token_at_prefers_token_ending_at_column() {
    let doc = Document::new("foo.bar");
    // Column 3 sits between `foo` and `.`: the token ending there wins.
    assert_eq!(doc.raw_token_at(0, 3).unwrap().text, "foo");
    assert_eq!(doc.raw_token_at(0, 4).unwrap().text, ".");
    assert_eq!(doc.raw_token_at(0, 5).unwrap().text, "bar");
    assert_eq!(doc.raw_token_at(0, 7).unwrap().text, "bar");
    assert!(doc.raw_token_at(0, 0).is_none());
    assert!(doc.raw_token_at(0, 8).is_none());
}

#[test]
fn test_significant_token_before_crosses_rows_and_skips_trivia() {
    let doc = Document::new("foo\n  // note\n  .bar");
    let bar = doc.raw_token_at(2, 6).unwrap();
    assert_eq!(bar.text, "bar");
    let dot = doc
        .significant_token_before(Position::new(bar.row, bar.start))
        .unwrap();
    assert_eq!(dot.text, ".");
    let foo = doc
        .significant_token_before(Position::new(dot.row, dot.start))
        .unwrap();
    assert_eq!(foo.text, "foo");
    assert_eq!(foo.row, 0);
    assert!(
        doc.significant_token_before(Position::new(0, 0))
            .is_none()
    );
}

#[test]
fn test_replace_within_row_rescans() {
    let mut doc = Document::new("var alpha = 1; al");
    let end = doc.replace(LineRange::new(0, 15, 17), "alpha");
    assert_eq!(doc.line(0), Some("var alpha = 1; alpha"));
    assert_eq!(end, Position::new(0, 20));
    let token = doc.raw_token_at(0, 20).unwrap();
    assert_eq!(token.text, "alpha");
    assert_eq!(token.kind, TokenKind::Word);
}

#[test]
fn test_replace_clamps_range_past_row_end() {
    let mut doc = Document::new("ab");
    doc.replace(LineRange::with_len(0, 1, 1_000), "xyz");
    assert_eq!(doc.line(0), Some("axyz"));
}

#[test]
fn test_replace_with_newline_splits_rows_and_updates_scope() {
    let mut doc = Document::new("x\ny");
    let end = doc.replace(LineRange::new(0, 0, 1), "var a;\nvar b;");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(end, Position::new(1, 6));
    let y = doc.raw_token_at(2, 1).unwrap();
    let names: Vec<&str> = y.scope.local_vars().iter().collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_scope_at_row_start_carries_declarations() {
    let doc = Document::new("let one;\n\nlet two;");
    let names: Vec<String> = doc
        .scope_at_row_start(1)
        .local_vars()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(names, vec!["one"]);
}

#[test]
fn test_replace_past_last_row_pads_with_empty_rows() {
    let mut doc = Document::new("var a;\nb");
    let end = doc.replace(LineRange::new(4, 0, 0), "var c;");
    assert_eq!(doc.line_count(), 5);
    assert_eq!(doc.line(2), Some(""));
    assert_eq!(doc.line(3), Some(""));
    assert_eq!(doc.line(4), Some("var c;"));
    assert_eq!(end, Position::new(4, 6));
    assert_eq!(doc.tokens(4).first().map(|t| t.text.as_str()), Some("var"));
    let names: Vec<String> = doc
        .scope_at_row_start(4)
        .local_vars()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(names, vec!["a"]);
}
