// File: crates/race-render-skia/src/theme.rs
// Summary: Surface theming (background and logo placeholder); mark colors come from the plan.

use skia_safe as skia;

use race_core::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Fill of the box drawn where no logo image is loaded.
    pub logo_placeholder: skia::Color,
    pub logo_outline: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            logo_placeholder: skia::Color::from_argb(255, 245, 245, 245),
            logo_outline: skia::Color::from_argb(255, 200, 200, 205),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            logo_placeholder: skia::Color::from_argb(255, 40, 40, 45),
            logo_outline: skia::Color::from_argb(255, 90, 90, 100),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

pub fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
