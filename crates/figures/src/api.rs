//! Curated surface for front ends (the `cli` crate).
//!
//! Re-exports plus one summary helper that flattens any `Figure` into plain
//! numbers for reporting.

pub use crate::demo::{mutated_figures, run_figures, run_grid, DemoCfg, DemoError};
pub use crate::error::{FigureError, GridError};
pub use crate::figure::{format_points, EquilateralTriangle, Figure, Rectangle};
pub use crate::grid::{total, Grid};

/// Plain-number snapshot of a figure.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureSummary {
    pub name: &'static str,
    pub center: [f64; 2],
    pub perimeter: f64,
    pub area: f64,
    pub vertices: Vec<[f64; 2]>,
}

/// Snapshot the current state of `fig`.
pub fn summarize<F: Figure + ?Sized>(fig: &F) -> FigureSummary {
    let c = fig.center();
    FigureSummary {
        name: fig.name(),
        center: [c.x, c.y],
        perimeter: fig.perimeter(),
        area: fig.area(),
        vertices: fig.vertices().iter().map(|p| [p.x, p.y]).collect(),
    }
}
