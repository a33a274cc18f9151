//! Evaluation of tensor-product Bézier surfaces with De Casteljau's algorithm.
//!
//! The crate is built from two layers:
//! - [`evaluate_curve`] reduces an ordered sequence of control points to the
//!   point of the Bézier curve at `t` by repeated affine blending.
//! - [`evaluate_surface`] lifts this to a control grid: every row is reduced
//!   along `u`, then the resulting column of intermediate points along `v`.
//!
//! Points are generic over the small [`Point`] trait, [`PointN`] is the
//! const-generic implementation shipped with the crate. [`ControlGrid`] and
//! [`BezierSurface`] are validated owning types for callers that evaluate the
//! same grid more than once. [`input`] and [`report`] implement the text format
//! and console output of the `bezier-surface` tool.
//!
//! ```rust
//! use bezier_surface::{evaluate_surface, PointN};
//!
//! let grid = [
//!     [PointN::new([0.0, 0.0, 0.0]), PointN::new([0.0, 1.0, 0.0])],
//!     [PointN::new([1.0, 0.0, 0.0]), PointN::new([1.0, 1.0, 1.0])],
//! ];
//! let p: PointN<f64, 3> = evaluate_surface(&grid, 0.5, 0.5).unwrap();
//! assert_eq!(p, PointN::new([0.5, 0.5, 0.25]));
//! ```

pub mod bezier;
pub mod error;
pub mod grid;
pub mod input;
pub mod point;
pub mod point_generic;
pub mod report;
pub mod surface;

pub use bezier::{evaluate_curve, Bezier};
pub use error::{DegreeAxis, EvalError, ParseError};
pub use grid::ControlGrid;
pub use input::{parse_input, point_dimension, read_input_file, read_input_text, SurfaceInput};
pub use point::Point;
pub use point_generic::PointN;
pub use report::Report;
pub use surface::{evaluate_surface, BezierSurface};

/// Float type used by the text loader and the command line tool.
pub type NativeFloat = f64;

/// Number of points the De Casteljau scratch buffers hold before spilling to the heap.
pub(crate) const INLINE_POINTS: usize = 8;

/// Absolute tolerance for comparing results of different evaluation orders.
#[cfg(test)]
pub(crate) const EPSILON: NativeFloat = 1e-9;
