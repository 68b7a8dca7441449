// File: crates/demo/src/main.rs
// Summary: Local harness; loads rows from CSV (or built-in samples), renders through the host
// entry point and writes the plan JSON plus PNG frames to target/out.
//
// Usage: race-demo [rows.csv] [config.json] [logo.png]
// CSV headers: label (or category/name), value, and an optional period column.
// Pass "-" to skip a positional argument. RACE_THEME=dark picks the dark theme.

use anyhow::{Context, Result};
use log::info;
use race_core::host::{FieldMeta, QueryFields};
use race_core::{
    raw_row, HostElement, PlanExecutor, QueryResponse, RaceChartVisualization, RawRow,
    RenderDetails, RenderError, RenderOutcome, RenderPlan, SurfaceSize, UserFacingError,
};
use race_render_skia::{theme, RenderOptions, SkiaExecutor};
use serde_json::Value;
use std::path::{Path, PathBuf};

const CATEGORY_FIELD: &str = "label";
const MEASURE_FIELD: &str = "value";
const PERIOD_FIELD: &str = "period";
const FPS: u32 = 30;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1).map(|a| Some(a).filter(|a| a != "-"));
    let rows = match args.next().flatten() {
        Some(raw) => {
            let path = PathBuf::from(raw);
            println!("Using input file: {}", path.display());
            load_rows_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given; using built-in sample rows");
            sample_rows()
        }
    };
    println!("Loaded {} rows", rows.len());

    let config = match args.next().flatten() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<Value>(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => Value::Null,
    };

    let with_period = rows.iter().any(|r| r.contains_key(PERIOD_FIELD));
    let query = query_for(with_period);

    let theme = std::env::var("RACE_THEME").map(|name| theme::find(&name)).unwrap_or_default();
    let mut exec = SkiaExecutor::new(RenderOptions { theme, ..RenderOptions::default() });
    if let Some(logo) = args.next().flatten() {
        println!("Using logo image: {logo}");
        exec = exec.with_logo_file(&logo)?;
    }

    let mut element = LocalElement::new(SurfaceSize::default(), exec);
    let viz = RaceChartVisualization::default();
    viz.create(&mut element);
    let outcome = viz.update_async(&rows, &mut element, &config, Some(&query), &RenderDetails::default(), || {
        info!("render complete");
    });

    match outcome {
        RenderOutcome::Drawn { elements } => println!("Drew {elements} elements"),
        RenderOutcome::Aborted(err) => {
            for e in &element.errors {
                println!("Error: {}: {}", e.title, e.message);
            }
            anyhow::bail!("render aborted: {err}");
        }
    }

    let plan = element.exec.current_plan().context("no plan was applied")?;
    let out = out_dir()?;

    let plan_path = out.join("race_plan.json");
    std::fs::write(&plan_path, serde_json::to_vec_pretty(plan)?)?;
    println!("Wrote {}", plan_path.display());

    if let Some(png) = element.exec.snapshot_png() {
        let final_path = out.join("race_final.png");
        std::fs::write(&final_path, png)?;
        println!("Wrote {}", final_path.display());
    }

    let frames = element.exec.write_frames(plan, FPS, out.join("frames"))?;
    println!("Wrote {} frames to {}", frames.len(), out.join("frames").display());

    Ok(())
}

/// Host element backed by the Skia executor. Errors are kept for printing.
struct LocalElement {
    size: SurfaceSize,
    exec: SkiaExecutor,
    errors: Vec<UserFacingError>,
}

impl LocalElement {
    fn new(size: SurfaceSize, exec: SkiaExecutor) -> Self {
        Self { size, exec, errors: Vec::new() }
    }
}

impl HostElement for LocalElement {
    fn bounds(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.exec.clear();
    }

    fn clear_errors(&mut self) {
        self.errors.clear();
    }

    fn add_error(&mut self, error: &UserFacingError) {
        self.errors.push(error.clone());
    }

    fn draw(&mut self, plan: &RenderPlan) -> Result<(), RenderError> {
        self.exec.apply(plan).map_err(|err| RenderError::Draw(format!("{err:#}")))
    }
}

fn query_for(with_period: bool) -> QueryResponse {
    let mut dimensions = vec![FieldMeta::new(CATEGORY_FIELD)];
    if with_period {
        dimensions.push(FieldMeta::new(PERIOD_FIELD));
    }
    QueryResponse {
        fields: Some(QueryFields { dimensions, measures: vec![FieldMeta::new(MEASURE_FIELD)] }),
    }
}

fn sample_rows() -> Vec<RawRow> {
    [
        ("Exportación", 100000.0),
        ("Equipo Interno", 80000.0),
        ("Regional NO-NE", 65000.0),
        ("Nuevos Negocios", 35000.0),
        ("Reg. SP + Prem/Stud", 18000.0),
        ("Hotelería/Franquicias", 29768.0),
    ]
    .into_iter()
    .map(|(label, value)| {
        raw_row([
            (CATEGORY_FIELD, Value::from(label)),
            (MEASURE_FIELD, Value::from(value)),
            (PERIOD_FIELD, Value::from("Periodo: Enero/2025")),
        ])
    })
    .collect()
}

/// Load rows keyed by the demo's field names. Values stay text; the core coerces them.
fn load_rows_csv(path: &Path) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "category", "name"]);
    let i_value = idx(&["value", "measure", "total"]);
    let i_period = idx(&["period", "periodo"]);

    let (Some(i_label), Some(i_value)) = (i_label, i_value) else {
        anyhow::bail!("CSV needs a label and a value column (got {:?})", headers);
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut cells = vec![
            (CATEGORY_FIELD, Value::from(rec.get(i_label).unwrap_or_default())),
            (MEASURE_FIELD, Value::from(rec.get(i_value).unwrap_or_default())),
        ];
        if let Some(ix) = i_period {
            cells.push((PERIOD_FIELD, Value::from(rec.get(ix).unwrap_or_default())));
        }
        out.push(raw_row(cells));
    }
    Ok(out)
}

fn out_dir() -> Result<PathBuf> {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;
    Ok(out)
}
