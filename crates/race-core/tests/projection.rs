// File: crates/race-core/tests/projection.rs
// Purpose: Validate row projection (coercion, period capture) and ranking (stability, top-N).

use race_core::project::{coerce_measure, FieldCell};
use race_core::{project, rank, raw_row, FieldBinding, ProjectedPoint, RawRow, SortOrder};
use serde_json::{json, Value};

fn binding() -> FieldBinding {
    FieldBinding::new("cat", "val")
}

fn labels(points: &[ProjectedPoint]) -> Vec<&str> {
    points.iter().map(|p| p.label.as_str()).collect()
}

#[test]
fn non_numeric_or_absent_measures_project_to_zero() {
    let rows = vec![
        raw_row([("cat", json!("A")), ("val", json!("abc"))]),
        raw_row([("cat", json!("B"))]),
        raw_row([("cat", json!("C")), ("val", Value::Null)]),
        raw_row([("cat", json!("D")), ("val", json!({"nested": 1}))]),
        raw_row([("cat", json!("E")), ("val", json!(""))]),
        raw_row([("cat", json!("F")), ("val", json!("NaN"))]),
        raw_row([("cat", json!("G")), ("val", json!("inf"))]),
    ];
    let projection = project(&rows, &binding());
    assert_eq!(projection.points.len(), rows.len());
    for p in &projection.points {
        assert_eq!(p.value, 0.0, "{} should project to 0", p.label);
        assert!(!p.value.is_nan());
    }
}

#[test]
fn numeric_strings_and_booleans_are_coerced() {
    assert_eq!(coerce_measure(Some(&json!(" 42.5 "))), 42.5);
    assert_eq!(coerce_measure(Some(&json!(true))), 1.0);
    assert_eq!(coerce_measure(Some(&json!(false))), 0.0);
    assert_eq!(coerce_measure(Some(&json!(-3))), -3.0);
    assert_eq!(coerce_measure(None), 0.0);
}

#[test]
fn labels_are_taken_without_coercion() {
    let rows = vec![
        raw_row([("cat", json!("007")), ("val", json!(1))]),
        raw_row([("cat", json!(2025)), ("val", json!(2))]),
        raw_row([("val", json!(3))]),
    ];
    let projection = project(&rows, &binding());
    assert_eq!(labels(&projection.points), vec!["007", "2025", ""]);
}

#[test]
fn host_rows_deserialize_from_value_wrappers() {
    let rows: Vec<RawRow> = serde_json::from_value(json!([
        {"cat": {"value": "A"}, "val": {"value": 100000, "rendered": "100K"}},
        {"cat": {"value": "B"}, "val": {"value": 80000}}
    ]))
    .expect("rows");
    assert_eq!(rows[0]["val"], FieldCell { value: json!(100000), rendered: Some("100K".into()) });
    let projection = project(&rows, &binding());
    assert_eq!(projection.points[0], ProjectedPoint::new("A", 100_000.0));
    assert_eq!(projection.period, None);
}

#[test]
fn period_comes_from_the_first_row_only() {
    let rows = vec![
        raw_row([("cat", json!("A")), ("val", json!(1)), ("per", json!("Enero/2025"))]),
        raw_row([("cat", json!("B")), ("val", json!(2)), ("per", json!("Febrero/2025"))]),
        raw_row([("cat", json!("C")), ("val", json!(3))]),
    ];
    let projection = project(&rows, &binding().with_period("per"));
    assert_eq!(projection.period.as_deref(), Some("Enero/2025"));
    assert_eq!(projection.period_text(), "Enero/2025");
}

#[test]
fn period_is_empty_without_binding_or_rows() {
    let rows = vec![raw_row([("cat", json!("A")), ("val", json!(1)), ("per", json!("X"))])];
    assert_eq!(project(&rows, &binding()).period_text(), "");
    assert_eq!(project(&[], &binding().with_period("per")).period.as_deref(), Some(""));
}

fn sample() -> Vec<ProjectedPoint> {
    vec![
        ProjectedPoint::new("C", 18_000.0),
        ProjectedPoint::new("A", 100_000.0),
        ProjectedPoint::new("B", 80_000.0),
    ]
}

#[test]
fn rank_desc_and_asc() {
    assert_eq!(labels(&rank(sample(), SortOrder::Desc, 10)), vec!["A", "B", "C"]);
    assert_eq!(labels(&rank(sample(), SortOrder::Asc, 10)), vec!["C", "B", "A"]);
}

#[test]
fn rank_length_is_min_of_top_n_and_input() {
    for top_n in 1..=6 {
        let ranked = rank(sample(), SortOrder::Desc, top_n);
        assert_eq!(ranked.len(), top_n.min(3));
    }
    assert_eq!(labels(&rank(sample(), SortOrder::Desc, 2)), vec!["A", "B"]);
}

#[test]
fn ties_keep_input_order_in_both_directions() {
    let points = vec![
        ProjectedPoint::new("first", 5.0),
        ProjectedPoint::new("low", 1.0),
        ProjectedPoint::new("second", 5.0),
        ProjectedPoint::new("third", 5.0),
    ];
    assert_eq!(
        labels(&rank(points.clone(), SortOrder::Desc, 10)),
        vec!["first", "second", "third", "low"]
    );
    assert_eq!(
        labels(&rank(points, SortOrder::Asc, 10)),
        vec!["low", "first", "second", "third"]
    );
}
