// File: crates/race-core/src/pipeline.rs
// Summary: Pure rows-to-plan pipeline shared by the host adapter and the local harness.

use log::debug;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::format::NumberFormatter;
use crate::layout::{drawable_area, layout};
use crate::plan::RenderPlan;
use crate::project::{project, FieldBinding, RawRow};
use crate::rank::rank;
use crate::timeline::{emit, emit_empty};
use crate::types::SurfaceSize;

/// Project, rank, lay out and schedule `rows` for a surface of `surface` size.
///
/// Fails before touching the rows when the drawable area is not positive.
/// An empty result set yields a plan with no bar groups.
pub fn build_plan(
    rows: &[RawRow],
    binding: &FieldBinding,
    config: &RenderConfig,
    surface: SurfaceSize,
) -> Result<RenderPlan, RenderError> {
    config.validate()?;
    drawable_area(surface, &config.margins)?;

    let projection = project(rows, binding);
    let period = projection.period.clone();
    let ranked = rank(projection.points, config.sort_order, config.top_n);
    debug!(
        "ranked {} of {} rows ({:?}, top {})",
        ranked.len(),
        rows.len(),
        config.sort_order,
        config.top_n
    );

    if ranked.is_empty() {
        return Ok(emit_empty(surface, config, period.as_deref()));
    }

    let chart = layout(&ranked, surface, &config.margins, config.bar_padding)?;
    let formatter = NumberFormatter::new(config.number_locale);
    Ok(emit(&ranked, &chart, &formatter, config, period.as_deref()))
}
