// File: crates/race-core/src/config.rs
// Summary: Render configuration with defaults, validation, and resolution of host-supplied options.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Margins, Rgba};

pub const DEFAULT_DURATION_MS: u64 = 1000;
/// Longest accepted animation; executors sample every frame of it.
pub const MAX_DURATION_MS: u64 = 60_000;
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_BAR_PADDING: f32 = 0.4;
pub const DEFAULT_LOGO_URL: &str =
    "https://github.com/wagnernascimento-alt/Empresa/blob/main/logo_3.png?raw=true";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocale {
    /// `1.250,5` grouping (Portuguese/Spanish).
    #[default]
    Pt,
    /// `1,250.5` grouping (English).
    En,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    CubicInOut,
}

impl Easing {
    /// Map linear progress in [0, 1] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

/// Logo image drawn at the trailing edge of each bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoSpec {
    pub url: String,
    /// Width over height of the image (142x41 source ≈ 3.46).
    pub aspect_ratio: f32,
    /// Logo height as a fraction of the bar thickness.
    pub height_ratio: f32,
    /// Offset from the top of the band as a fraction of the bar thickness.
    pub top_ratio: f32,
    /// Horizontal gap between the bar end and the logo, in pixels.
    pub gap: f32,
}

impl Default for LogoSpec {
    fn default() -> Self {
        Self {
            url: DEFAULT_LOGO_URL.to_string(),
            aspect_ratio: 3.46,
            height_ratio: 0.9,
            top_ratio: 0.05,
            gap: 0.4,
        }
    }
}

/// Colors, fonts and fixed offsets of the bar groups and the period annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    pub bar_fill: Rgba,
    pub text_fill: Rgba,
    pub font_size: f32,
    /// Distance between the category label's end and the bar start.
    pub label_gap: f32,
    /// Distance between the logo's trailing edge and the value label.
    pub value_gap: f32,
    pub period_fill: Rgba,
    pub period_font_size: f32,
    /// Distance of the period annotation from the right and bottom surface edges.
    pub period_inset: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_fill: Rgba::new(0xD7, 0x19, 0x20, 255),
            text_fill: Rgba::BLACK,
            font_size: 14.0,
            label_gap: 10.0,
            value_gap: 8.0,
            period_fill: Rgba::BLACK,
            period_font_size: 16.0,
            period_inset: 20.0,
        }
    }
}

/// Everything one render needs beyond the rows and the surface size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub animation_duration_ms: u64,
    pub sort_order: SortOrder,
    pub top_n: usize,
    pub bar_padding: f32,
    pub number_locale: NumberLocale,
    pub easing: Easing,
    pub margins: Margins,
    pub logo: LogoSpec,
    pub style: BarStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_DURATION_MS,
            sort_order: SortOrder::default(),
            top_n: DEFAULT_TOP_N,
            bar_padding: DEFAULT_BAR_PADDING,
            number_locale: NumberLocale::default(),
            easing: Easing::default(),
            margins: Margins::default(),
            logo: LogoSpec::default(),
            style: BarStyle::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_duration_ms > MAX_DURATION_MS {
            return Err(ConfigError::InvalidDuration(self.animation_duration_ms));
        }
        if self.top_n == 0 {
            return Err(ConfigError::InvalidTopN(self.top_n));
        }
        if !valid_padding(self.bar_padding) {
            return Err(ConfigError::InvalidBarPadding(self.bar_padding));
        }
        if !(self.logo.aspect_ratio > 0.0 && self.logo.aspect_ratio.is_finite()) {
            return Err(ConfigError::InvalidAspectRatio(self.logo.aspect_ratio));
        }
        Ok(())
    }
}

fn valid_padding(p: f32) -> bool {
    (0.0..1.0).contains(&p)
}

/// User-editable options as a dashboard host sends them.
///
/// Every field is optional; unknown keys are ignored. The keys of the
/// legacy Portuguese option panel are accepted as aliases.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HostOptions {
    #[serde(default, alias = "duracao", alias = "animationDurationMs")]
    pub animation_duration_ms: Option<f64>,
    #[serde(default, alias = "ordem", alias = "sortOrder")]
    pub sort_order: Option<SortOrder>,
    #[serde(default, alias = "topN")]
    pub top_n: Option<f64>,
    #[serde(default, alias = "padding", alias = "barPadding")]
    pub bar_padding: Option<f64>,
    #[serde(default, alias = "idioma", alias = "numberLocale")]
    pub number_locale: Option<NumberLocale>,
}

impl HostOptions {
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(HostOptions::deserialize(value)?)
    }

    /// Overlay these options on `base`; absent or out-of-range values keep the base value.
    pub fn resolve(&self, base: &RenderConfig) -> RenderConfig {
        let mut config = base.clone();

        if let Some(ms) = self.animation_duration_ms {
            if (0.0..=MAX_DURATION_MS as f64).contains(&ms) {
                config.animation_duration_ms = ms.round() as u64;
            } else {
                warn!("ignoring animation duration {ms}; using {}", base.animation_duration_ms);
            }
        }
        if let Some(order) = self.sort_order {
            config.sort_order = order;
        }
        if let Some(n) = self.top_n {
            if n.is_finite() && n >= 1.0 {
                config.top_n = n.floor() as usize;
            } else {
                warn!("ignoring top_n {n}; using {}", base.top_n);
            }
        }
        if let Some(p) = self.bar_padding {
            if valid_padding(p as f32) {
                config.bar_padding = p as f32;
            } else {
                warn!("ignoring bar_padding {p}; using {}", base.bar_padding);
            }
        }
        if let Some(locale) = self.number_locale {
            config.number_locale = locale;
        }
        config
    }
}
