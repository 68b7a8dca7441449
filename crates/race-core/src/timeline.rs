// File: crates/race-core/src/timeline.rs
// Summary: Render timeline; turns a ranked series and its layout into draw + animate instructions.

use crate::config::RenderConfig;
use crate::format::NumberFormatter;
use crate::layout::ChartLayout;
use crate::plan::{Animated, BarGroup, BarMark, LogoMark, RenderPlan, TextMark, Transition};
use crate::project::ProjectedPoint;
use crate::types::{SurfaceSize, TextAnchor};

/// Vertical centering shift for single-line labels, in ems.
const CENTER_DY_EM: f32 = 0.35;

/// Build the plan for a non-empty ranked series.
///
/// Every group starts collapsed at x = 0: the bar grows to its value length, and
/// the logo and value label slide out with it. All tweens share one transition.
pub fn emit(
    ranked: &[ProjectedPoint],
    layout: &ChartLayout,
    formatter: &NumberFormatter,
    config: &RenderConfig,
    period: Option<&str>,
) -> RenderPlan {
    let band = layout.bandwidth();
    let logo_height = band * config.logo.height_ratio;
    let logo_width = logo_height * config.logo.aspect_ratio;
    let logo_y = band * config.logo.top_ratio;
    let style = &config.style;

    let groups = ranked
        .iter()
        .map(|point| {
            let length = layout.value_to_length(point.value);
            let offset_y = layout.category_to_slot(&point.label).unwrap_or(0.0);
            BarGroup {
                key: point.label.clone(),
                offset_y,
                bar: BarMark {
                    x: 0.0,
                    y: 0.0,
                    width: Animated::tween(0.0, length.max(0.0)),
                    height: band,
                    fill: style.bar_fill,
                },
                logo: LogoMark {
                    href: config.logo.url.clone(),
                    x: Animated::tween(0.0, length + config.logo.gap),
                    y: logo_y,
                    width: logo_width,
                    height: logo_height,
                },
                label: TextMark {
                    text: point.label.clone(),
                    x: Animated::fixed(-style.label_gap),
                    y: band / 2.0,
                    dy_em: CENTER_DY_EM,
                    anchor: TextAnchor::End,
                    font_size: style.font_size,
                    bold: false,
                    fill: style.text_fill,
                },
                value: TextMark {
                    text: formatter.format(point.value),
                    x: Animated::tween(0.0, length + logo_width + style.value_gap),
                    y: band / 2.0,
                    dy_em: CENTER_DY_EM,
                    anchor: TextAnchor::Start,
                    font_size: style.font_size,
                    bold: false,
                    fill: style.text_fill,
                },
            }
        })
        .collect();

    RenderPlan {
        surface: layout.surface,
        origin: (layout.plot.left, layout.plot.top),
        transition: transition(config),
        groups,
        period: period.map(|text| period_mark(text, layout.surface, config)),
    }
}

/// Plan with no bar groups, only the period annotation when one was captured.
pub fn emit_empty(surface: SurfaceSize, config: &RenderConfig, period: Option<&str>) -> RenderPlan {
    RenderPlan {
        surface,
        origin: (config.margins.left as f32, config.margins.top as f32),
        transition: transition(config),
        groups: Vec::new(),
        period: period.map(|text| period_mark(text, surface, config)),
    }
}

fn transition(config: &RenderConfig) -> Transition {
    Transition { duration_ms: config.animation_duration_ms, easing: config.easing }
}

/// Bottom-right annotation, positioned in surface coordinates.
fn period_mark(text: &str, surface: SurfaceSize, config: &RenderConfig) -> TextMark {
    let style = &config.style;
    TextMark {
        text: text.to_string(),
        x: Animated::fixed(surface.width - style.period_inset),
        y: surface.height - style.period_inset,
        dy_em: 0.0,
        anchor: TextAnchor::End,
        font_size: style.period_font_size,
        bold: true,
        fill: style.period_fill,
    }
}
