// File: crates/race-render-skia/src/executor.rs
// Summary: Plan executor over Skia CPU raster surfaces; renders animation frames to PNG or RGBA.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use skia_safe as skia;

use race_core::{Drawable, Frame, PlanExecutor, RenderPlan};

use crate::text::TextShaper;
use crate::theme::{to_skia, Theme};

pub struct RenderOptions {
    pub theme: Theme,
    /// Skip text runs (font availability varies across machines).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true }
    }
}

/// Rasterizes render plans. Applying a plan replaces whatever was drawn before.
pub struct SkiaExecutor {
    opts: RenderOptions,
    shaper: TextShaper,
    logo: Option<skia::Image>,
    current: Option<RenderPlan>,
    snapshot: Option<Vec<u8>>,
}

impl SkiaExecutor {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new(), logo: None, current: None, snapshot: None }
    }

    /// Use an encoded image (PNG, JPEG, ...) for every logo mark.
    pub fn with_logo_bytes(mut self, bytes: &[u8]) -> Result<Self> {
        let image = skia::Image::from_encoded(skia::Data::new_copy(bytes))
            .ok_or_else(|| anyhow::anyhow!("failed to decode logo image"))?;
        self.logo = Some(image);
        Ok(self)
    }

    pub fn with_logo_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).with_context(|| format!("reading logo {}", path.display()))?;
        self.with_logo_bytes(&bytes)
    }

    /// The plan applied last, if any.
    pub fn current_plan(&self) -> Option<&RenderPlan> {
        self.current.as_ref()
    }

    /// PNG of the settled (final) frame of the plan applied last.
    pub fn snapshot_png(&self) -> Option<&[u8]> {
        self.snapshot.as_deref()
    }

    /// Render `plan` as it looks `elapsed` after the transition starts, encoded as PNG.
    pub fn render_frame_png(&self, plan: &RenderPlan, elapsed: Duration) -> Result<Vec<u8>> {
        let mut surface = self.raster(plan)?;
        self.draw_frame(surface.canvas(), &plan.frame_at(elapsed));

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render one frame into an RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_frame_rgba8(&self, plan: &RenderPlan, elapsed: Duration) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(plan)?;
        self.draw_frame(surface.canvas(), &plan.frame_at(elapsed));

        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading surface pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Every frame of the transition at `fps`, first (t = 0) and last (settled) included.
    pub fn render_frames(&self, plan: &RenderPlan, fps: u32) -> Result<Vec<Vec<u8>>> {
        frame_times(plan, fps)
            .into_iter()
            .map(|t| self.render_frame_png(plan, t))
            .collect()
    }

    /// Write every frame as `frame_0000.png`, `frame_0001.png`, ... under `dir`.
    pub fn write_frames(&self, plan: &RenderPlan, fps: u32, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let mut written = Vec::new();
        for (i, bytes) in self.render_frames(plan, fps)?.into_iter().enumerate() {
            let path = dir.join(format!("frame_{i:04}.png"));
            std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
            written.push(path);
        }
        debug!("wrote {} frames to {}", written.len(), dir.display());
        Ok(written)
    }

    fn raster(&self, plan: &RenderPlan) -> Result<skia::Surface> {
        let w = plan.surface.width.ceil();
        let h = plan.surface.height.ceil();
        if !(w >= 1.0 && h >= 1.0) {
            anyhow::bail!("surface is empty ({} x {})", plan.surface.width, plan.surface.height);
        }
        skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
    }

    fn draw_frame(&self, canvas: &skia::Canvas, frame: &Frame) {
        canvas.clear(self.opts.theme.background);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        for item in &frame.items {
            match item {
                Drawable::Rect { x, y, width, height, fill: color } => {
                    if *width <= 0.0 || *height <= 0.0 {
                        continue;
                    }
                    fill.set_color(to_skia(*color));
                    canvas.draw_rect(skia::Rect::from_xywh(*x, *y, *width, *height), &fill);
                }
                Drawable::Image { x, y, width, height, .. } => {
                    let dst = skia::Rect::from_xywh(*x, *y, *width, *height);
                    self.draw_logo(canvas, dst);
                }
                Drawable::Text { text, x, baseline, anchor, font_size, bold, fill: color } => {
                    if !self.opts.draw_labels || text.is_empty() {
                        continue;
                    }
                    self.shaper.draw_anchored(
                        canvas, text, *x, *baseline, *anchor, *font_size, to_skia(*color), *bold,
                    );
                }
            }
        }
    }

    fn draw_logo(&self, canvas: &skia::Canvas, dst: skia::Rect) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        match &self.logo {
            Some(image) => {
                canvas.draw_image_rect(image, None, dst, &paint);
            }
            None => {
                paint.set_color(self.opts.theme.logo_placeholder);
                canvas.draw_rect(dst, &paint);
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width(1.0);
                paint.set_color(self.opts.theme.logo_outline);
                canvas.draw_rect(dst, &paint);
            }
        }
    }
}

impl PlanExecutor for SkiaExecutor {
    type Error = anyhow::Error;

    fn clear(&mut self) {
        self.current = None;
        self.snapshot = None;
    }

    fn apply(&mut self, plan: &RenderPlan) -> Result<()> {
        self.clear();
        let png = self.render_frame_png(plan, plan.transition.duration())?;
        self.snapshot = Some(png);
        self.current = Some(plan.clone());
        Ok(())
    }
}

/// Upper bound on frames per transition, whatever the plan's duration.
pub const MAX_FRAMES: u64 = 3_600;

/// Sample times covering the transition at `fps`; a zero duration yields one frame.
///
/// The last sample is always the settled state. Long transitions are sampled at a
/// lower rate so no more than `MAX_FRAMES + 1` frames are produced.
pub fn frame_times(plan: &RenderPlan, fps: u32) -> Vec<Duration> {
    let duration_ms = plan.transition.duration_ms;
    let fps = u64::from(fps.max(1));
    let steps = duration_ms.saturating_mul(fps).div_ceil(1000).min(MAX_FRAMES);
    if steps == 0 {
        return vec![Duration::ZERO];
    }
    let interval_ms = duration_ms.div_ceil(steps);
    (0..=steps)
        .map(|i| Duration::from_millis(i.saturating_mul(interval_ms).min(duration_ms)))
        .collect()
}
