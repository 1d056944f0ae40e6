//! Error types for grid validation and figure operations.

use std::fmt;

/// Errors surfaced while building or summing a grid.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Row `row` has `found` entries while the first row has `expected`.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} entries, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors shared by all figure constructors and growth operations.
#[derive(Clone, Debug, PartialEq)]
pub enum FigureError {
    /// A dimension or factor is out of range (non-positive, NaN, infinite).
    InvalidArgument { reason: String },
    /// The figure itself cannot support the operation (e.g. zero perimeter).
    Degenerate { reason: String },
}

impl FigureError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Degenerate { reason } => write!(f, "degenerate figure: {reason}"),
        }
    }
}

impl std::error::Error for FigureError {}

/// Check that a linear dimension is a positive, finite real.
pub(crate) fn check_dimension(what: &str, value: f64) -> Result<f64, FigureError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FigureError::invalid(format!(
            "{what} must be positive and finite, got {value}"
        )))
    }
}

/// Check that the derived perimeter and area of candidate dimensions are finite.
pub(crate) fn check_measures(perimeter: f64, area: f64) -> Result<(), FigureError> {
    if perimeter.is_finite() && area.is_finite() {
        Ok(())
    } else {
        Err(FigureError::invalid(format!(
            "dimensions overflow: perimeter {perimeter}, area {area}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_row() {
        let e = GridError::Ragged {
            row: 2,
            expected: 3,
            found: 1,
        };
        let msg = e.to_string();
        assert!(msg.contains("row 2"), "{msg}");
        assert!(msg.contains("expected 3"), "{msg}");
    }

    #[test]
    fn check_dimension_rejects_zero_nan_and_inf() {
        assert_eq!(check_dimension("side", 2.5), Ok(2.5));
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                check_dimension("side", bad),
                Err(FigureError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn check_measures_rejects_overflow() {
        assert_eq!(check_measures(12.0, 8.0), Ok(()));
        assert!(matches!(
            check_measures(f64::INFINITY, 1.0),
            Err(FigureError::InvalidArgument { .. })
        ));
        assert!(check_measures(4e154, f64::INFINITY).is_err());
    }
}
