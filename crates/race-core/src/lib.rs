// File: crates/race-core/src/lib.rs
// Summary: Core library entry point; exports the rows-to-render-plan transform and host adapter.

pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod pipeline;
pub mod plan;
pub mod project;
pub mod rank;
pub mod scale;
pub mod timeline;
pub mod types;

pub use config::{Easing, HostOptions, NumberLocale, RenderConfig, SortOrder};
pub use error::{ConfigError, LayoutError, RenderError, UserFacingError};
pub use format::NumberFormatter;
pub use host::{HostElement, QueryResponse, RaceChartVisualization, RenderDetails, RenderOutcome};
pub use layout::{layout, ChartLayout};
pub use pipeline::build_plan;
pub use plan::{Drawable, Frame, PlanExecutor, RenderPlan};
pub use project::{project, raw_row, FieldBinding, ProjectedPoint, RawRow};
pub use rank::rank;
pub use types::{Margins, Rgba, SurfaceSize, TextAnchor};
