// File: crates/race-render-skia/tests/common/mod.rs
// Purpose: Shared fixture plans for renderer tests.

#![allow(dead_code)]

use race_core::{build_plan, raw_row, FieldBinding, RawRow, RenderConfig, RenderPlan, SurfaceSize};

pub fn rows() -> Vec<RawRow> {
    [("A", 100000), ("B", 80000), ("C", 18000)]
        .into_iter()
        .map(|(name, total)| {
            raw_row([
                ("store.name", serde_json::Value::from(name)),
                ("sales.total", serde_json::Value::from(total)),
                ("store.period", serde_json::Value::from("Enero/2025")),
            ])
        })
        .collect()
}

pub fn binding() -> FieldBinding {
    FieldBinding::new("store.name", "sales.total").with_period("store.period")
}

pub fn plan() -> RenderPlan {
    build_plan(&rows(), &binding(), &RenderConfig::default(), SurfaceSize::default()).expect("plan")
}

pub fn plan_with_duration(duration_ms: u64) -> RenderPlan {
    let config = RenderConfig { animation_duration_ms: duration_ms, ..RenderConfig::default() };
    build_plan(&rows(), &binding(), &config, SurfaceSize::default()).expect("plan")
}
