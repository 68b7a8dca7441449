// File: crates/race-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use serde::{Deserialize, Serialize};

use crate::types::{Margins, SurfaceSize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Rectangle left after removing `margins` from a surface anchored at the origin.
    pub fn inset(surface: SurfaceSize, margins: &Margins) -> Self {
        Self::from_ltrb(
            margins.left as f32,
            margins.top as f32,
            surface.width - margins.right as f32,
            surface.height - margins.bottom as f32,
        )
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
