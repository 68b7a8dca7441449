// File: crates/race-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, background and theme handling.

mod common;

use race_core::{build_plan, RenderConfig, SurfaceSize};
use race_render_skia::theme;
use race_render_skia::{RenderOptions, SkiaExecutor, Theme};

#[test]
fn render_rgba8_buffer() {
    let plan = common::plan();
    let exec = SkiaExecutor::new(RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let (px, w, h, stride) = exec.render_frame_rgba8(&plan, plan.transition.duration()).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is plain light background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_changes_background_only() {
    let plan = common::plan();
    let exec = SkiaExecutor::new(RenderOptions { theme: Theme::dark(), draw_labels: false });
    let (px, ..) = exec.render_frame_rgba8(&plan, plan.transition.duration()).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

#[test]
fn theme_lookup_is_case_insensitive_with_light_fallback() {
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("solarized").name, "light");
}

#[test]
fn fractional_surface_rounds_up() {
    let plan = build_plan(
        &common::rows(),
        &common::binding(),
        &RenderConfig::default(),
        SurfaceSize::new(700.4, 400.2),
    )
    .expect("plan");
    let exec = SkiaExecutor::new(RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let (_, w, h, _) = exec.render_frame_rgba8(&plan, plan.transition.duration()).expect("rgba render");
    assert_eq!((w, h), (701, 401));
}
