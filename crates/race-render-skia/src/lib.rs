// File: crates/race-render-skia/src/lib.rs
// Summary: Skia renderer crate; applies race-core render plans to CPU raster surfaces.

pub mod executor;
pub mod text;
pub mod theme;

pub use executor::{frame_times, RenderOptions, SkiaExecutor, MAX_FRAMES};
pub use text::TextShaper;
pub use theme::Theme;
