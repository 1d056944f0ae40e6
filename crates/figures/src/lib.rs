//! Grid totals and plane figures.
//!
//! Two unrelated exercises live side by side:
//! - `grid`: sum every entry of a rectangular numeric grid.
//! - `figure`: a `Figure` trait with `Rectangle` and `EquilateralTriangle`
//!   variants (perimeter, area, growth, translation, vertices).
//!
//! API Policy
//! - Small and explicit. Constructors and growth operations validate their
//!   inputs and return `Result`; queries are infallible.

pub mod api;
pub mod demo;
pub mod error;
pub mod figure;
pub mod grid;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{FigureError, GridError};
pub use figure::{EquilateralTriangle, Figure, Rectangle};
pub use grid::{total, Grid};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::demo::DemoCfg;
    pub use crate::error::{FigureError, GridError};
    pub use crate::figure::{EquilateralTriangle, Figure, Rectangle};
    pub use crate::grid::{total, Grid};
    pub use nalgebra::Vector2 as Vec2;
}
