use anyhow::{Context, Result};
use figures::api::{mutated_figures, summarize, DemoCfg, FigureSummary};
use serde_json::{json, Value};

fn figure_json(s: &FigureSummary) -> Value {
    json!({
        "name": s.name,
        "center": s.center,
        "perimeter": s.perimeter,
        "area": s.area,
        "vertices": s.vertices
    })
}

/// Build the report: library version, walkthrough params, and the figures after mutation.
pub fn build(cfg: &DemoCfg) -> Result<Value> {
    let (rect, tri) = mutated_figures(cfg).context("applying walkthrough mutations")?;
    Ok(json!({
        "version": figures::VERSION,
        "params": {
            "length": cfg.length,
            "width": cfg.width,
            "side": cfg.side,
            "shift": [cfg.shift.x, cfg.shift.y],
            "area_factor": cfg.area_factor
        },
        "figures": [figure_json(&summarize(&rect)), figure_json(&summarize(&tri))]
    }))
}
