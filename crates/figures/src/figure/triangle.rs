//! Equilateral triangle with a horizontal base and its centroid at `center`.

use std::fmt;

use nalgebra::Vector2;

use super::{fmt_summary, Figure};
use crate::error::{check_dimension, check_measures, FigureError};

#[inline]
fn sqrt_3() -> f64 {
    3f64.sqrt()
}

/// Equilateral triangle; the centroid coincides with `center`.
///
/// Invariant: `side > 0`, with finite perimeter and area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquilateralTriangle {
    center: Vector2<f64>,
    side: f64,
}

impl EquilateralTriangle {
    pub fn new(center: Vector2<f64>, side: f64) -> Result<Self, FigureError> {
        let candidate = Self {
            center,
            side: check_dimension("side", side)?,
        };
        check_measures(candidate.perimeter(), candidate.area())?;
        Ok(candidate)
    }

    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn set_side(&mut self, side: f64) -> Result<(), FigureError> {
        *self = Self::new(self.center, side)?;
        Ok(())
    }

    /// `h = (√3/2)·side`.
    #[inline]
    pub fn height(&self) -> f64 {
        sqrt_3() / 2.0 * self.side
    }
}

impl Figure for EquilateralTriangle {
    fn name(&self) -> &'static str {
        "EquilateralTriangle"
    }

    #[inline]
    fn center(&self) -> Vector2<f64> {
        self.center
    }

    #[inline]
    fn set_center(&mut self, center: Vector2<f64>) {
        self.center = center;
    }

    fn perimeter(&self) -> f64 {
        3.0 * self.side
    }

    fn area(&self) -> f64 {
        sqrt_3() / 4.0 * (self.side * self.side)
    }

    /// Bottom-left, bottom-right, top. The base sits `h/3` below the centroid.
    fn vertices(&self) -> Vec<Vector2<f64>> {
        let (x, y) = (self.center.x, self.center.y);
        let h = self.height();
        let half_base = self.side / 2.0;
        vec![
            Vector2::new(x - half_base, y - h / 3.0),
            Vector2::new(x + half_base, y - h / 3.0),
            Vector2::new(x, y + 2.0 * h / 3.0),
        ]
    }

    fn scale(&mut self, k: f64) -> Result<(), FigureError> {
        *self = Self::new(self.center, self.side * k)?;
        Ok(())
    }
}

impl fmt::Display for EquilateralTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_summary(self, f)
    }
}
