// File: crates/race-core/src/plan.rs
// Summary: Render plan data model (marks, keyframes, shared transition) and frame sampling.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Easing;
use crate::types::{Rgba, SurfaceSize, TextAnchor};

/// An attribute tweened from `from` to `to` over the plan's transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animated {
    pub from: f32,
    pub to: f32,
}

impl Animated {
    pub const fn fixed(v: f32) -> Self {
        Self { from: v, to: v }
    }

    pub const fn tween(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    /// Value at eased `progress` in [0, 1].
    #[inline]
    pub fn sample(&self, progress: f32) -> f32 {
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * progress
    }
}

/// One start trigger and one duration shared by every animated attribute.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Transition {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Eased progress after `elapsed`; a zero duration is complete immediately.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() * 1000.0 / self.duration_ms as f64;
        self.easing.apply(t as f32)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarMark {
    pub x: f32,
    pub y: f32,
    pub width: Animated,
    pub height: f32,
    pub fill: Rgba,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogoMark {
    pub href: String,
    pub x: Animated,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextMark {
    pub text: String,
    pub x: Animated,
    pub y: f32,
    /// Baseline shift in ems (0.35 centers digits vertically on `y`).
    pub dy_em: f32,
    pub anchor: TextAnchor,
    pub font_size: f32,
    pub bold: bool,
    pub fill: Rgba,
}

impl TextMark {
    /// Baseline y after applying the `dy` shift.
    pub fn baseline(&self) -> f32 {
        self.y + self.dy_em * self.font_size
    }
}

/// The visual group of one ranked point, translated to its band slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarGroup {
    pub key: String,
    pub offset_y: f32,
    pub bar: BarMark,
    pub logo: LogoMark,
    pub label: TextMark,
    pub value: TextMark,
}

/// Draw and animate instructions for one render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub surface: SurfaceSize,
    /// Translation of the plot area (left and top margin).
    pub origin: (f32, f32),
    pub transition: Transition,
    /// Groups stacked top to bottom in ranked order.
    pub groups: Vec<BarGroup>,
    /// Static annotation in surface coordinates.
    pub period: Option<TextMark>,
}

impl RenderPlan {
    /// Number of marks an executor draws for this plan.
    pub fn element_count(&self) -> usize {
        self.groups.len() * 4 + usize::from(self.period.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    /// Resolve every mark at `elapsed` into absolute surface coordinates.
    pub fn frame_at(&self, elapsed: Duration) -> Frame {
        let progress = self.transition.progress(elapsed);
        let (ox, oy) = self.origin;
        let mut items = Vec::with_capacity(self.element_count());

        for g in &self.groups {
            let gy = oy + g.offset_y;
            items.push(Drawable::Rect {
                x: ox + g.bar.x,
                y: gy + g.bar.y,
                width: g.bar.width.sample(progress).max(0.0),
                height: g.bar.height,
                fill: g.bar.fill,
            });
            items.push(Drawable::Image {
                href: g.logo.href.clone(),
                x: ox + g.logo.x.sample(progress),
                y: gy + g.logo.y,
                width: g.logo.width,
                height: g.logo.height,
            });
            items.push(text_item(&g.label, ox, gy, progress));
            items.push(text_item(&g.value, ox, gy, progress));
        }
        if let Some(period) = &self.period {
            items.push(text_item(period, 0.0, 0.0, progress));
        }

        Frame { surface: self.surface, progress, items }
    }

    /// Frame with every animation complete.
    pub fn final_frame(&self) -> Frame {
        self.frame_at(self.transition.duration())
    }
}

fn text_item(mark: &TextMark, dx: f32, dy: f32, progress: f32) -> Drawable {
    Drawable::Text {
        text: mark.text.clone(),
        x: dx + mark.x.sample(progress),
        baseline: dy + mark.baseline(),
        anchor: mark.anchor,
        font_size: mark.font_size,
        bold: mark.bold,
        fill: mark.fill,
    }
}

/// A fully resolved mark, ready for a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Rect { x: f32, y: f32, width: f32, height: f32, fill: Rgba },
    Image { href: String, x: f32, y: f32, width: f32, height: f32 },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        anchor: TextAnchor,
        font_size: f32,
        bold: bool,
        fill: Rgba,
    },
}

/// Snapshot of a plan at one instant of its transition, in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub surface: SurfaceSize,
    pub progress: f32,
    pub items: Vec<Drawable>,
}

/// Applies plans to a concrete drawing surface.
pub trait PlanExecutor {
    type Error;

    /// Remove everything drawn by earlier plans.
    fn clear(&mut self);

    /// Draw `plan`; the executor owns the animation clock.
    fn apply(&mut self, plan: &RenderPlan) -> Result<(), Self::Error>;
}
