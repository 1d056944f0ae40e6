//! Console walkthroughs for both exercises.
//!
//! The figure walkthrough runs a fixed sequence: print a rectangle and a
//! triangle, translate the rectangle, grow the triangle's area, then list the
//! vertices of both. Output goes to any `io::Write`, so callers choose stdout
//! and tests capture a buffer.

use std::io::{self, Write};

use nalgebra::Vector2;

use crate::error::FigureError;
use crate::figure::{format_points, EquilateralTriangle, Figure, Rectangle};
use crate::grid::Grid;

/// Parameters for the figure walkthrough.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoCfg {
    pub center: Vector2<f64>,
    pub length: f64,
    pub width: f64,
    pub side: f64,
    /// Translation applied to the rectangle.
    pub shift: Vector2<f64>,
    /// Area factor applied to the triangle.
    pub area_factor: f64,
}

impl Default for DemoCfg {
    fn default() -> Self {
        Self {
            center: Vector2::zeros(),
            length: 4.0,
            width: 2.0,
            side: 3.0,
            shift: Vector2::new(2.0, 3.0),
            area_factor: 4.0,
        }
    }
}

/// Errors from a walkthrough: bad parameters or a failed write.
#[derive(Debug)]
pub enum DemoError {
    Figure(FigureError),
    Io(io::Error),
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoError::Figure(e) => write!(f, "{e}"),
            DemoError::Io(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Figure(e) => Some(e),
            DemoError::Io(e) => Some(e),
        }
    }
}

impl From<FigureError> for DemoError {
    fn from(e: FigureError) -> Self {
        DemoError::Figure(e)
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        DemoError::Io(e)
    }
}

/// Apply the walkthrough mutations and return the final figures.
///
/// Rectangle is translated by `cfg.shift`; triangle area grows by `cfg.area_factor`.
pub fn mutated_figures(cfg: &DemoCfg) -> Result<(Rectangle, EquilateralTriangle), FigureError> {
    let mut rect = Rectangle::new(cfg.center, cfg.length, cfg.width)?;
    let mut tri = EquilateralTriangle::new(cfg.center, cfg.side)?;
    rect.translate(cfg.shift.x, cfg.shift.y);
    tri.grow_area(cfg.area_factor)?;
    Ok((rect, tri))
}

/// Run the figure walkthrough, writing one line per step.
pub fn run_figures<W: Write>(cfg: &DemoCfg, out: &mut W) -> Result<(), DemoError> {
    let mut rect = Rectangle::new(cfg.center, cfg.length, cfg.width)?;
    let mut tri = EquilateralTriangle::new(cfg.center, cfg.side)?;
    writeln!(out, "{rect}")?;
    writeln!(out, "{tri}")?;

    rect.translate(cfg.shift.x, cfg.shift.y);
    writeln!(out, "{rect}")?;

    tri.grow_area(cfg.area_factor)?;
    writeln!(out, "{tri}")?;

    writeln!(out, "Rectangle vertices: {}", format_points(&rect.vertices()))?;
    writeln!(out, "Triangle vertices: {}", format_points(&tri.vertices()))?;
    Ok(())
}

/// Print the total of `grid`.
pub fn run_grid<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    writeln!(out, "Grid total: {}", grid.total())
}
