//! Plane figures behind a single `Figure` trait.
//!
//! Purpose
//! - Share one capability set (perimeter, area, growth, translation, vertices)
//!   across concrete variants without inheritance.
//! - Keep every mutation explicit: growth validates its factor and leaves the
//!   figure untouched on error.
//!
//! Growth semantics
//! - `grow_area(f)`: linear dimensions × √f, so the area becomes `f · area`.
//! - `grow_perimeter(f)`: linear dimensions × (1 + f/perimeter), so the
//!   perimeter becomes `perimeter + f` (an additive step, not a multiplier).
//!
//! Code cross-refs: `Rectangle`, `EquilateralTriangle`, `error::FigureError`

use std::fmt;

use nalgebra::Vector2;

use crate::error::FigureError;

mod rect;
mod triangle;

pub use rect::Rectangle;
pub use triangle::EquilateralTriangle;

/// Capability set shared by all plane figures.
///
/// Implementors own their center and linear dimensions; `translate`,
/// `grow_area` and `grow_perimeter` are provided on top of `scale`.
pub trait Figure {
    /// Display name of the variant.
    fn name(&self) -> &'static str;

    fn center(&self) -> Vector2<f64>;

    fn set_center(&mut self, center: Vector2<f64>);

    fn perimeter(&self) -> f64;

    fn area(&self) -> f64;

    /// Corner points in a fixed, counterclockwise winding order.
    fn vertices(&self) -> Vec<Vector2<f64>>;

    /// Multiply every linear dimension by `k` about the center.
    ///
    /// Pre: `k > 0` and finite. Post: on `Err` the figure is unchanged.
    fn scale(&mut self, k: f64) -> Result<(), FigureError>;

    /// Shift the center by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64) {
        let c = self.center();
        self.set_center(c + Vector2::new(dx, dy));
    }

    /// Rescale so the area becomes `factor` times the current area.
    fn grow_area(&mut self, factor: f64) -> Result<(), FigureError> {
        let k = area_scale(factor)?;
        self.scale(k)
    }

    /// Rescale so the perimeter grows by `factor` (new perimeter = old + factor).
    fn grow_perimeter(&mut self, factor: f64) -> Result<(), FigureError> {
        let k = perimeter_scale(self.perimeter(), factor)?;
        self.scale(k)
    }
}

/// Linear scale for an area factor: `√factor`.
pub(crate) fn area_scale(factor: f64) -> Result<f64, FigureError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(FigureError::invalid(format!(
            "area factor must be positive and finite, got {factor}"
        )));
    }
    Ok(factor.sqrt())
}

/// Linear scale for an additive perimeter step: `1 + factor / perimeter`.
pub(crate) fn perimeter_scale(perimeter: f64, factor: f64) -> Result<f64, FigureError> {
    if !perimeter.is_finite() || perimeter <= 0.0 {
        return Err(FigureError::degenerate(format!(
            "perimeter growth needs a positive perimeter, have {perimeter}"
        )));
    }
    if !factor.is_finite() {
        return Err(FigureError::invalid(format!(
            "perimeter factor must be finite, got {factor}"
        )));
    }
    let k = 1.0 + factor / perimeter;
    if k <= 0.0 {
        return Err(FigureError::invalid(format!(
            "perimeter factor {factor} would shrink a perimeter of {perimeter} to nothing"
        )));
    }
    Ok(k)
}

/// `<Name> - Perimeter: p, Area: a, Center: (x, y)`.
pub(crate) fn fmt_summary<F: Figure + ?Sized>(fig: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let c = fig.center();
    write!(
        f,
        "{} - Perimeter: {}, Area: {}, Center: ({}, {})",
        fig.name(),
        fig.perimeter(),
        fig.area(),
        c.x,
        c.y
    )
}

/// Render points as `[(x0, y0), (x1, y1), ...]`.
pub fn format_points(points: &[Vector2<f64>]) -> String {
    let inner: Vec<String> = points
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect();
    format!("[{}]", inner.join(", "))
}
