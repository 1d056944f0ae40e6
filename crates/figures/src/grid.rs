//! Rectangular numeric grids and their totals.
//!
//! A `Grid` is validated once on construction (every row has the width of the
//! first row) and stored densely as an `nalgebra::DMatrix<f64>`. Empty grids
//! (`0×0`, or rows with no entries) are valid and total to `0`.

use nalgebra::DMatrix;

use crate::error::GridError;

/// Rectangular grid of `f64` entries in row-major reading order.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    m: DMatrix<f64>,
}

impl Grid {
    /// Build from rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GridError> {
        let ncols = check_rectangular(rows)?;
        let entries = rows.iter().flat_map(|r| r.as_ref().iter().copied());
        Ok(Self {
            m: DMatrix::from_row_iterator(rows.len(), ncols, entries),
        })
    }

    /// The fixed 3×3 grid `[[1,2,3],[4,5,6],[7,8,9]]`.
    pub fn sample() -> Self {
        Self {
            m: DMatrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.m.nrows()
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.m.ncols()
    }

    #[inline]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.m
    }

    /// Sum of each row, top to bottom.
    pub fn row_totals(&self) -> Vec<f64> {
        self.m.row_iter().map(|r| r.sum()).collect()
    }

    /// Sum of each column, left to right.
    pub fn col_totals(&self) -> Vec<f64> {
        self.m.column_iter().map(|c| c.sum()).collect()
    }

    /// Sum of every entry (row totals first, then their sum).
    pub fn total(&self) -> f64 {
        self.row_totals().into_iter().sum()
    }
}

/// Sum every entry of a rectangular grid given as rows.
///
/// Pre: all rows have equal length. Post: `Ok(0.0)` for an empty grid.
pub fn total<R: AsRef<[f64]>>(rows: &[R]) -> Result<f64, GridError> {
    check_rectangular(rows)?;
    Ok(rows.iter().map(|r| r.as_ref().iter().sum::<f64>()).sum())
}

/// Returns the common row width (0 for an empty grid).
fn check_rectangular<R: AsRef<[f64]>>(rows: &[R]) -> Result<usize, GridError> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };
    let expected = first.as_ref().len();
    for (row, r) in rows.iter().enumerate().skip(1) {
        let found = r.as_ref().len();
        if found != expected {
            return Err(GridError::Ragged {
                row,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}
