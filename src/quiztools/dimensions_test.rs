use super::*;

// =============================================================================
// parse_dimensions
// =============================================================================

#[test]
fn parse_dimensions_trims_and_zeroes() {
    let dims = parse_dimensions(" happy ,sad,  angry");
    let entries: Vec<(&str, f64)> = dims.iter().collect();
    assert_eq!(entries, vec![("happy", 0.0), ("sad", 0.0), ("angry", 0.0)]);
}

#[test]
fn parse_dimensions_preserves_declaration_order() {
    let dims = parse_dimensions("zeta,alpha,mid");
    let names: Vec<&str> = dims.names().collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn parse_dimensions_keeps_empty_segment_key() {
    let dims = parse_dimensions("a,,b");
    assert_eq!(dims.len(), 3);
    assert!(dims.contains(""));
    assert_eq!(dims.get(""), Some(0.0));
}

#[test]
fn parse_dimensions_of_empty_string_is_single_empty_key() {
    let dims = parse_dimensions("");
    assert_eq!(dims.len(), 1);
    assert!(dims.contains(""));
}

#[test]
fn parse_dimensions_collapses_duplicates_at_first_position() {
    let dims = parse_dimensions("a,b,a");
    let names: Vec<&str> = dims.names().collect();
    assert_eq!(names, vec!["a", "b"]);
}

// =============================================================================
// Dimensions
// =============================================================================

#[test]
fn add_accumulates_on_declared_dimension() {
    let mut dims = parse_dimensions("a");
    dims.add("a", 1.5).unwrap();
    dims.add("a", -0.5).unwrap();
    assert_eq!(dims.get("a"), Some(1.0));
}

#[test]
fn add_rejects_undeclared_dimension() {
    let mut dims = parse_dimensions("a");
    let err = dims.add("z", 1.0).unwrap_err();
    assert_eq!(err, QuizError::UnknownDimension { dimension: "z".into() });
    assert_eq!(dims.get("a"), Some(0.0));
}

#[test]
fn add_rejects_overflowing_sum_and_keeps_score() {
    let mut dims = parse_dimensions("a");
    dims.add("a", 1e308).unwrap();
    let err = dims.add("a", 1e308).unwrap_err();
    assert!(matches!(err, QuizError::InvalidValue { .. }));
    assert_eq!(dims.get("a"), Some(1e308));
}

#[test]
fn from_iter_overwrites_value_but_keeps_position() {
    let dims: Dimensions = [("a", 1.0), ("b", 2.0), ("a", 3.0)].into_iter().collect();
    let entries: Vec<(&str, f64)> = dims.iter().collect();
    assert_eq!(entries, vec![("a", 3.0), ("b", 2.0)]);
}

#[test]
fn serializes_as_ordered_json_object() {
    let dims: Dimensions = [("b", 3.0), ("a", 2.0)].into_iter().collect();
    let json = serde_json::to_string(&dims).unwrap();
    assert_eq!(json, r#"{"b":3.0,"a":2.0}"#);
}
