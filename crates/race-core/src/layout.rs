// File: crates/race-core/src/layout.rs
// Summary: Chart layout engine; derives the drawable area and both scales for one render.

use crate::error::LayoutError;
use crate::geometry::RectF;
use crate::project::ProjectedPoint;
use crate::scale::{BandScale, LinearScale};
use crate::types::{Margins, SurfaceSize};

/// Scales and plot rectangle for one ranked series on one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub surface: SurfaceSize,
    /// Plot rectangle in surface coordinates.
    pub plot: RectF,
    pub x: LinearScale,
    pub y: BandScale,
}

impl ChartLayout {
    pub fn value_to_length(&self, value: f64) -> f32 {
        self.x.to_px(value)
    }

    pub fn category_to_slot(&self, label: &str) -> Option<f32> {
        self.y.slot(label)
    }

    pub fn bandwidth(&self) -> f32 {
        self.y.bandwidth()
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f32 {
        self.y.step()
    }

    /// Width and height of the plot area.
    pub fn drawable_size(&self) -> (f32, f32) {
        (self.plot.width(), self.plot.height())
    }
}

/// Plot rectangle left after the margins, rejecting empty or negative areas.
pub fn drawable_area(surface: SurfaceSize, margins: &Margins) -> Result<RectF, LayoutError> {
    let plot = RectF::inset(surface, margins);
    let (width, height) = (plot.width(), plot.height());
    // Written so NaN sizes fail too.
    if !(width > 0.0 && height > 0.0) {
        return Err(LayoutError::NonPositiveArea { width, height });
    }
    Ok(plot)
}

/// Compute the value and category scales for `ranked` on `surface`.
///
/// The linear domain is `[0, max value]`; the band domain keeps the ranked order.
pub fn layout(
    ranked: &[ProjectedPoint],
    surface: SurfaceSize,
    margins: &Margins,
    bar_padding: f32,
) -> Result<ChartLayout, LayoutError> {
    let plot = drawable_area(surface, margins)?;
    if ranked.is_empty() {
        return Err(LayoutError::EmptySeries);
    }

    let max = ranked.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let x = LinearScale::new((0.0, max), (0.0, plot.width()));
    let y = BandScale::new(ranked.iter().map(|p| p.label.as_str()), (0.0, plot.height()))
        .with_padding(bar_padding);

    Ok(ChartLayout { surface, plot, x, y })
}
