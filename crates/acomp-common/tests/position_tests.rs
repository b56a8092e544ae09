use super::*;

#[test]
fn test_line_range_normalizes_reversed_bounds() {
    let range = LineRange::new(2, 9, 4);
    assert_eq!(range.start_column, 4);
    assert_eq!(range.end_column, 9);
    assert_eq!(range.len(), 5);
}

#[test]
fn test_line_range_with_len_saturates() {
    let range = LineRange::with_len(0, u32::MAX - 1, 1_000);
    assert_eq!(range.end_column, u32::MAX);
}

#[test]
fn test_line_range_contains_is_end_exclusive() {
    let range = LineRange::new(1, 3, 6);
    assert!(range.contains(Position::new(1, 3)));
    assert!(range.contains(Position::new(1, 5)));
    assert!(!range.contains(Position::new(1, 6)));
    assert!(!range.contains(Position::new(0, 4)));
}

#[test]
fn test_line_range_clamp_end() {
    let range = LineRange::with_len(0, 4, 1_000);
    let clamped = range.clamp_end(7);
    assert_eq!(clamped, LineRange::new(0, 4, 7));

    // Clamping below the start collapses to an empty range at the start.
    let collapsed = range.clamp_end(1);
    assert!(collapsed.is_empty());
    assert_eq!(collapsed.start(), Position::new(0, 4));
}

#[test]
fn test_line_range_serializes_camel_case() {
    let range = LineRange::new(3, 1, 2);
    let json = serde_json::to_value(range).unwrap();
    assert_eq!(json["startColumn"], 1);
    assert_eq!(json["endColumn"], 2);
    assert_eq!(json["row"], 3);
}
