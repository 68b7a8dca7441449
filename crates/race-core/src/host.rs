// File: crates/race-core/src/host.rs
// Summary: Dashboard host adapter: option manifest, query metadata, and the render entry point.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{
    HostOptions, RenderConfig, DEFAULT_BAR_PADDING, DEFAULT_DURATION_MS, DEFAULT_TOP_N,
};
use crate::error::{RenderError, UserFacingError};
use crate::pipeline::build_plan;
use crate::plan::RenderPlan;
use crate::project::{FieldBinding, RawRow};
use crate::types::SurfaceSize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FieldMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), label: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFields {
    #[serde(default)]
    pub dimensions: Vec<FieldMeta>,
    #[serde(default)]
    pub measures: Vec<FieldMeta>,
}

impl QueryFields {
    /// First dimension is the category, the second (if any) the period; first measure is the value.
    pub fn binding(&self) -> Result<FieldBinding, RenderError> {
        match (self.dimensions.first(), self.measures.first()) {
            (Some(category), Some(measure)) => {
                let binding = FieldBinding::new(&category.name, &measure.name);
                Ok(match self.dimensions.get(1) {
                    Some(period) => binding.with_period(&period.name),
                    None => binding,
                })
            }
            _ => Err(RenderError::ConfigurationIncomplete {
                dimensions: self.dimensions.len(),
                measures: self.measures.len(),
            }),
        }
    }
}

/// Query metadata sent alongside the rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub fields: Option<QueryFields>,
}

/// Host-specific render details. Carried through for logging only.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RenderDetails {
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The host's element the chart lives in.
pub trait HostElement {
    /// Current bounds, read once per render.
    fn bounds(&self) -> SurfaceSize;
    /// Remove every mark drawn by a previous render.
    fn clear(&mut self);
    fn clear_errors(&mut self);
    fn add_error(&mut self, error: &UserFacingError);
    /// Apply `plan` to the element's surface. Failures abort the render.
    fn draw(&mut self, plan: &RenderPlan) -> Result<(), RenderError>;
}

/// What a single `update_async` call ended with.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutcome {
    Drawn { elements: usize },
    Aborted(RenderError),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionValue {
    pub label: &'static str,
    pub value: &'static str,
}

/// One entry of the user-editable configuration panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionDescriptor {
    pub section: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<OptionValue>,
    pub default: Value,
}

/// Bar-race visualization registered with a dashboard host.
#[derive(Clone, Debug)]
pub struct RaceChartVisualization {
    pub id: &'static str,
    pub label: &'static str,
    base: RenderConfig,
}

impl Default for RaceChartVisualization {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl RaceChartVisualization {
    /// `base` supplies everything the host panel does not expose (margins, logo, style).
    pub fn new(base: RenderConfig) -> Self {
        Self { id: "racing_bar_chart", label: "Racing bar chart", base }
    }

    pub fn base_config(&self) -> &RenderConfig {
        &self.base
    }

    /// Configuration panel entries keyed by option name.
    pub fn options() -> BTreeMap<&'static str, OptionDescriptor> {
        let mut options = BTreeMap::new();
        options.insert(
            "animation_duration_ms",
            OptionDescriptor {
                section: "Animation",
                kind: "number",
                label: "Animation duration (ms)",
                display: None,
                values: Vec::new(),
                default: json!(DEFAULT_DURATION_MS),
            },
        );
        options.insert(
            "sort_order",
            OptionDescriptor {
                section: "Data",
                kind: "string",
                label: "Sort order",
                display: Some("select"),
                values: vec![
                    OptionValue { label: "Descending (largest first)", value: "desc" },
                    OptionValue { label: "Ascending (smallest first)", value: "asc" },
                ],
                default: json!("desc"),
            },
        );
        options.insert(
            "top_n",
            OptionDescriptor {
                section: "Data",
                kind: "number",
                label: "Top N (number of bars)",
                display: None,
                values: Vec::new(),
                default: json!(DEFAULT_TOP_N),
            },
        );
        options.insert(
            "bar_padding",
            OptionDescriptor {
                section: "Style",
                kind: "number",
                label: "Bar spacing (0.1 = thick, 0.8 = thin)",
                display: None,
                values: Vec::new(),
                default: manifest_number(DEFAULT_BAR_PADDING),
            },
        );
        options.insert(
            "number_locale",
            OptionDescriptor {
                section: "Style",
                kind: "string",
                label: "Number format",
                display: Some("select"),
                values: vec![
                    OptionValue { label: "Portuguese/Spanish (1.250,00)", value: "pt" },
                    OptionValue { label: "English (1,250.00)", value: "en" },
                ],
                default: json!("pt"),
            },
        );
        options
    }

    /// Lifecycle hook run once when the element is attached.
    pub fn create<E: HostElement>(&self, element: &mut E) {
        element.clear();
    }

    /// Render `data` into `element` and signal `done` exactly once, whatever the outcome.
    pub fn update_async<E, F>(
        &self,
        data: &[RawRow],
        element: &mut E,
        config: &Value,
        query: Option<&QueryResponse>,
        details: &RenderDetails,
        done: F,
    ) -> RenderOutcome
    where
        E: HostElement,
        F: FnOnce(),
    {
        if !details.extra.is_empty() {
            debug!("render details: {:?}", details.extra);
        }
        let outcome = match self.render(data, element, config, query) {
            Ok(elements) => RenderOutcome::Drawn { elements },
            Err(err) => {
                match err.user_facing() {
                    Some(user) => element.add_error(&user),
                    None => warn!("render skipped: {err}"),
                }
                RenderOutcome::Aborted(err)
            }
        };
        done();
        outcome
    }

    fn render<E: HostElement>(
        &self,
        data: &[RawRow],
        element: &mut E,
        config: &Value,
        query: Option<&QueryResponse>,
    ) -> Result<usize, RenderError> {
        element.clear_errors();
        element.clear();

        let fields = query
            .and_then(|q| q.fields.as_ref())
            .ok_or(RenderError::MissingQueryMetadata)?;
        let binding = fields.binding()?;
        let resolved = HostOptions::from_json(config)?.resolve(&self.base);

        let plan = build_plan(data, &binding, &resolved, element.bounds())?;
        element.draw(&plan)?;
        Ok(plan.element_count())
    }
}

/// JSON number with the shortest decimal form of `v` (`0.4`, not `0.4000000059604645`).
fn manifest_number(v: f32) -> Value {
    v.to_string()
        .parse::<f64>()
        .map(Value::from)
        .unwrap_or(Value::Null)
}
