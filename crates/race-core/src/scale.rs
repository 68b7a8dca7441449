// File: crates/race-core/src/scale.rs
// Summary: Linear (value -> length) and band (category -> slot) scale transforms.

use std::collections::HashMap;

/// Continuous mapping from a numeric domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to pixels. Values outside the domain extrapolate.
    /// A zero-width domain maps everything to the middle of the range.
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 && span.is_finite() { (v - d0) / span } else { 0.5 };
        r0 + (t as f32) * (r1 - r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        d0 + ((px - r0) / span) as f64 * (d1 - d0)
    }
}

/// Bands sit centered in any space left over by the outer padding.
const BAND_ALIGN: f32 = 0.5;

/// Evenly spaced slots for an ordered set of categories.
///
/// Duplicate labels share the slot of their first occurrence. Inner padding is the
/// fraction of each step left blank between bands; outer padding is the blank space
/// before the first and after the last band, in steps.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: (f32, f32),
    padding_inner: f32,
    padding_outer: f32,
    step: f32,
    start: f32,
}

impl BandScale {
    /// Scale with no padding and centered alignment.
    pub fn new<I, S>(labels: I, range: (f32, f32)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for label in labels {
            let label = label.as_ref();
            if !index.contains_key(label) {
                index.insert(label.to_string(), domain.len());
                domain.push(label.to_string());
            }
        }
        let mut scale = Self {
            domain,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            step: 0.0,
            start: range.0,
        };
        scale.rescale();
        scale
    }

    /// Set inner and outer padding to the same value.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.max(0.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len();
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        if n == 0 {
            self.step = 0.0;
            self.start = lo;
            return;
        }
        self.step = (hi - lo) / bandspace(n, self.padding_inner, self.padding_outer).max(1.0);
        self.start = lo + (hi - lo - self.step * (n as f32 - self.padding_inner)) * BAND_ALIGN;
    }

    pub fn domain(&self) -> &[String] { &self.domain }
    pub fn step(&self) -> f32 { self.step }

    /// Thickness of each band.
    pub fn bandwidth(&self) -> f32 {
        self.step * (1.0 - self.padding_inner)
    }

    /// Start offset of the band for `label`, or `None` for labels outside the domain.
    pub fn slot(&self, label: &str) -> Option<f32> {
        let i = *self.index.get(label)?;
        let n = self.domain.len();
        let i = if self.range.1 < self.range.0 { n - 1 - i } else { i };
        Some(self.start + self.step * i as f32)
    }
}

/// Number of steps the range is divided into for `count` bands.
pub fn bandspace(count: usize, padding_inner: f32, padding_outer: f32) -> f32 {
    let padding_inner = padding_inner.clamp(0.0, 1.0);
    let padding_outer = padding_outer.max(0.0);
    count as f32 - padding_inner + padding_outer * 2.0
}
