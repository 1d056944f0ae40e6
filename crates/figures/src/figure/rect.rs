//! Axis-aligned rectangle: length along x, width along y.

use std::fmt;

use nalgebra::Vector2;

use super::{fmt_summary, Figure};
use crate::error::{check_dimension, check_measures, FigureError};

/// Axis-aligned rectangle centered at `center`.
///
/// Invariants: `length > 0`, `width > 0`, both finite, with finite perimeter and area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    center: Vector2<f64>,
    length: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(center: Vector2<f64>, length: f64, width: f64) -> Result<Self, FigureError> {
        let candidate = Self {
            center,
            length: check_dimension("length", length)?,
            width: check_dimension("width", width)?,
        };
        check_measures(candidate.perimeter(), candidate.area())?;
        Ok(candidate)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_length(&mut self, length: f64) -> Result<(), FigureError> {
        *self = Self::new(self.center, length, self.width)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), FigureError> {
        *self = Self::new(self.center, self.length, width)?;
        Ok(())
    }
}

impl Figure for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
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
        2.0 * (self.length + self.width)
    }

    fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Bottom-left, bottom-right, top-right, top-left.
    fn vertices(&self) -> Vec<Vector2<f64>> {
        let (x, y) = (self.center.x, self.center.y);
        let hl = self.length / 2.0;
        let hw = self.width / 2.0;
        vec![
            Vector2::new(x - hl, y - hw),
            Vector2::new(x + hl, y - hw),
            Vector2::new(x + hl, y + hw),
            Vector2::new(x - hl, y + hw),
        ]
    }

    fn scale(&mut self, k: f64) -> Result<(), FigureError> {
        *self = Self::new(self.center, self.length * k, self.width * k)?;
        Ok(())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_summary(self, f)
    }
}
