// File: crates/race-core/src/project.rs
// Summary: Projection of raw host rows into (label, value) points plus the period label.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One cell of a host row: `{"value": ..., "rendered": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldCell {
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
}

impl From<Value> for FieldCell {
    fn from(value: Value) -> Self {
        Self { value, rendered: None }
    }
}

/// A result row keyed by field name. Supplied by the host per render.
pub type RawRow = HashMap<String, FieldCell>;

/// Build a row from `(field, value)` pairs.
pub fn raw_row<I, K, V>(cells: I) -> RawRow
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    cells
        .into_iter()
        .map(|(k, v)| (k.into(), FieldCell::from(v.into())))
        .collect()
}

/// Which fields play the category, measure and (optional) period roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    pub category: String,
    pub measure: String,
    #[serde(default)]
    pub period: Option<String>,
}

impl FieldBinding {
    pub fn new(category: impl Into<String>, measure: impl Into<String>) -> Self {
        Self { category: category.into(), measure: measure.into(), period: None }
    }

    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub label: String,
    pub value: f64,
}

impl ProjectedPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
    pub points: Vec<ProjectedPoint>,
    /// Period text of the first row (empty when there are no rows); `None` when no
    /// period field is bound.
    pub period: Option<String>,
}

impl Projection {
    pub fn period_text(&self) -> &str {
        self.period.as_deref().unwrap_or("")
    }
}

/// Project every row into a point. The period is read from the first row only;
/// later rows are assumed to carry the same period (a mismatch is only logged).
pub fn project(rows: &[RawRow], binding: &FieldBinding) -> Projection {
    let points = rows
        .iter()
        .map(|row| ProjectedPoint {
            label: cell_text(row.get(&binding.category).map(|c| &c.value)),
            value: coerce_measure(row.get(&binding.measure).map(|c| &c.value)),
        })
        .collect();

    let period = binding.period.as_ref().map(|field| {
        rows.first()
            .map(|first| cell_text(first.get(field).map(|c| &c.value)))
            .unwrap_or_default()
    });
    if let (Some(text), Some(field)) = (&period, &binding.period) {
        let differs = rows
            .iter()
            .skip(1)
            .any(|row| cell_text(row.get(field).map(|c| &c.value)) != *text);
        if differs {
            warn!("rows carry more than one '{field}' value; showing '{text}' from the first row");
        }
    }

    Projection { points, period }
}

/// Cell value as display text. Strings are used verbatim; other scalars use their JSON form.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numeric coercion of a measure cell; anything that is not a finite number becomes 0.
pub fn coerce_measure(value: Option<&Value>) -> f64 {
    let v = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() { 0.0 } else { s.parse::<f64>().unwrap_or(0.0) }
        }
        Some(Value::Bool(b)) => {
            if *b { 1.0 } else { 0.0 }
        }
        _ => 0.0,
    };
    // Also folds -0 into 0 so ranking treats them as ties.
    if v.is_finite() && v != 0.0 { v } else { 0.0 }
}
