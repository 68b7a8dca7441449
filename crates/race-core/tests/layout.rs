// File: crates/race-core/tests/layout.rs
// Purpose: Validate drawable-area checks and the linear/band scale transforms.

use race_core::scale::{BandScale, LinearScale};
use race_core::{layout, LayoutError, Margins, ProjectedPoint, SurfaceSize};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn series() -> Vec<ProjectedPoint> {
    vec![
        ProjectedPoint::new("A", 100_000.0),
        ProjectedPoint::new("B", 80_000.0),
        ProjectedPoint::new("C", 18_000.0),
    ]
}

#[test]
fn linear_scale_maps_domain_ends_to_range_ends() {
    let margins = Margins::default();
    let chart = layout(&series(), SurfaceSize::new(700.0, 400.0), &margins, 0.4).expect("layout");
    let w = 700.0 - margins.hsum() as f32;
    assert_eq!(chart.plot.width(), w);
    assert_eq!(chart.value_to_length(0.0), 0.0);
    assert!(approx(chart.value_to_length(100_000.0), w));
    assert!(approx(chart.value_to_length(50_000.0), w / 2.0));
}

#[test]
fn degenerate_linear_domain_maps_to_midpoint() {
    let scale = LinearScale::new((0.0, 0.0), (0.0, 200.0));
    assert_eq!(scale.to_px(0.0), 100.0);
    let scale = LinearScale::new((0.0, 10.0), (0.0, 200.0));
    assert!((scale.from_px(50.0) - 2.5).abs() < 1e-9);
}

#[test]
fn band_scale_matches_reference_positions() {
    // 3 bands over 100px with padding 0.4: step = 100 / 3.4.
    let scale = BandScale::new(["A", "B", "C"], (0.0, 100.0)).with_padding(0.4);
    let step = 100.0 / 3.4;
    assert!(approx(scale.step(), step));
    assert!(approx(scale.bandwidth(), step * 0.6));
    assert!(approx(scale.slot("A").unwrap(), step * 0.4));
    assert!(approx(scale.slot("C").unwrap(), step * 2.4));
    assert_eq!(scale.slot("missing"), None);
}

#[test]
fn band_domain_keeps_ranked_order_and_dedups() {
    let scale = BandScale::new(["Z", "A", "Z", "M"], (0.0, 90.0));
    assert_eq!(scale.domain(), &["Z".to_string(), "A".to_string(), "M".to_string()]);
    assert_eq!(scale.slot("Z"), Some(0.0));
    assert!(approx(scale.slot("M").unwrap(), 60.0));
}

#[test]
fn more_padding_means_thinner_bars_with_even_slots() {
    let labels = ["a", "b", "c", "d", "e"];
    let mut previous = f32::INFINITY;
    for p in [0.0, 0.1, 0.3, 0.5, 0.8, 0.95] {
        let scale = BandScale::new(labels, (0.0, 300.0)).with_padding(p);
        let bw = scale.bandwidth();
        assert!(bw < previous, "bandwidth should shrink at padding {p}");
        previous = bw;

        let slots: Vec<f32> = labels.iter().map(|l| scale.slot(l).unwrap()).collect();
        for pair in slots.windows(2) {
            assert!(approx(pair[1] - pair[0], scale.step()));
        }
    }
}

#[test]
fn zero_padding_bands_touch() {
    let scale = BandScale::new(["a", "b"], (0.0, 100.0)).with_padding(0.0);
    assert_eq!(scale.bandwidth(), 50.0);
    assert_eq!(scale.slot("b"), Some(50.0));
}

#[test]
fn non_positive_area_is_rejected() {
    let margins = Margins::default();
    let err = layout(&series(), SurfaceSize::new(0.0, 400.0), &margins, 0.4).unwrap_err();
    assert!(matches!(err, LayoutError::NonPositiveArea { .. }));

    // Exactly the margins: zero width.
    let err = layout(&series(), SurfaceSize::new(385.0, 400.0), &margins, 0.4).unwrap_err();
    assert_eq!(err, LayoutError::NonPositiveArea { width: 0.0, height: 310.0 });

    let err = layout(&series(), SurfaceSize::new(700.0, f32::NAN), &margins, 0.4).unwrap_err();
    assert!(matches!(err, LayoutError::NonPositiveArea { .. }));
}

#[test]
fn empty_series_is_a_layout_error() {
    let err = layout(&[], SurfaceSize::new(700.0, 400.0), &Margins::default(), 0.4).unwrap_err();
    assert_eq!(err, LayoutError::EmptySeries);
}

#[test]
fn layout_exposes_step_and_drawable_size() {
    let margins = Margins::default();
    let chart = layout(&series(), SurfaceSize::new(700.0, 400.0), &margins, 0.4).expect("layout");
    let (w, h) = chart.drawable_size();
    assert_eq!(w, 700.0 - margins.hsum() as f32);
    assert_eq!(h, 400.0 - margins.vsum() as f32);
    assert!(approx(chart.step(), h / 3.4));
    assert!(approx(chart.bandwidth(), chart.step() * 0.6));
}
