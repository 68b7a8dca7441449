// File: crates/race-core/src/error.rs
// Summary: Error taxonomy for layout, configuration and whole-render failures.

/// Failures computing scales from the surface geometry and ranked series.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Drawable area is not positive ({width} x {height})")]
    NonPositiveArea { width: f32, height: f32 },

    #[error("Cannot lay out an empty series")]
    EmptySeries,
}

/// Invalid or malformed chart configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Malformed(String),

    #[error("animation_duration_ms must be at most 60000 (got {0})")]
    InvalidDuration(u64),

    #[error("top_n must be at least 1 (got {0})")]
    InvalidTopN(usize),

    #[error("bar_padding must be in [0, 1) (got {0})")]
    InvalidBarPadding(f32),

    #[error("Logo aspect ratio must be positive (got {0})")]
    InvalidAspectRatio(f32),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}

/// Reasons a render stops before drawing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("At least 1 dimension and 1 measure are required (got {dimensions} dimensions, {measures} measures)")]
    ConfigurationIncomplete { dimensions: usize, measures: usize },

    #[error("Drawable area is not positive ({width} x {height})")]
    NonPositiveDrawArea { width: f32, height: f32 },

    #[error("Query metadata is missing")]
    MissingQueryMetadata,

    #[error("Series is empty")]
    EmptySeries,

    #[error("Drawing the plan failed: {0}")]
    Draw(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<LayoutError> for RenderError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::NonPositiveArea { width, height } => {
                RenderError::NonPositiveDrawArea { width, height }
            }
            LayoutError::EmptySeries => RenderError::EmptySeries,
        }
    }
}

/// Message shown in the host UI instead of a chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserFacingError {
    pub title: String,
    pub message: String,
}

impl RenderError {
    /// The message to surface to the user, or `None` when the render aborts silently.
    pub fn user_facing(&self) -> Option<UserFacingError> {
        match self {
            RenderError::ConfigurationIncomplete { .. } => Some(UserFacingError {
                title: "Incomplete fields".to_string(),
                message: "Please add at least 1 dimension (category) and 1 measure (value)."
                    .to_string(),
            }),
            RenderError::Config(err) => Some(UserFacingError {
                title: "Invalid configuration".to_string(),
                message: err.to_string(),
            }),
            RenderError::NonPositiveDrawArea { .. }
            | RenderError::MissingQueryMetadata
            | RenderError::EmptySeries
            | RenderError::Draw(_) => None,
        }
    }
}
