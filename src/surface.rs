use log::debug;

use crate::bezier::{casteljau, casteljau_in_place, evaluate_curve, Bezier, Scratch};
use crate::error::EvalError;
use crate::grid::{row_width, ControlGrid};
use crate::point::Point;

/// Evaluate the tensor-product Bézier surface defined by the control `grid` at `(u0, v0)`.
///
/// The grid is given as (n+1) rows of (m+1) points each. Every row is reduced along `u` with
/// De Casteljau's algorithm at `t = u0`, which yields one intermediate point per row; these are
/// then reduced along `v` at `t = v0`. Reducing the columns along `v` first gives the same point
/// up to rounding, so `n` is always the degree along `v` and `m` the degree along `u`.
///
/// Fails with [`EvalError::RaggedRow`] if the rows differ in length and with
/// [`EvalError::EmptySequence`] if the grid has no rows or its rows have no points.
///
/// ```rust
/// use bezier_surface::{evaluate_surface, PointN};
///
/// let grid = [[PointN::new([2.0, 3.0, 4.0])]];
/// let p: PointN<f64, 3> = evaluate_surface(&grid, 0.3, 0.9).unwrap();
/// assert_eq!(p, PointN::new([2.0, 3.0, 4.0]));
/// ```
pub fn evaluate_surface<P, R>(grid: &[R], u0: P::Scalar, v0: P::Scalar) -> Result<P, EvalError>
where
    P: Point,
    R: AsRef<[P]>,
{
    let width = row_width::<P, R>(grid)?;
    debug!(
        "evaluating {}x{} control grid at u0={:?}, v0={:?}",
        grid.len(),
        width,
        u0,
        v0
    );
    let intermediate = grid
        .iter()
        .map(|row| evaluate_curve(row.as_ref(), u0))
        .collect::<Result<Scratch<P>, EvalError>>()?;
    evaluate_curve(&intermediate, v0)
}

/// Tensor-product Bezier surface over a validated [`ControlGrid`].
#[derive(Clone, Debug, PartialEq)]
pub struct BezierSurface<P>
where
    P: Point,
{
    grid: ControlGrid<P>,
}

impl<P> BezierSurface<P>
where
    P: Point,
{
    pub fn new(grid: ControlGrid<P>) -> BezierSurface<P> {
        BezierSurface { grid }
    }

    pub fn grid(&self) -> &ControlGrid<P> {
        &self.grid
    }

    /// Returns the degrees `(n, m)` along `v` and `u`.
    pub fn degrees(&self) -> (usize, usize) {
        self.grid.degrees()
    }

    /// Evaluate the surface at `(u0, v0)`, rows along `u` first like [`evaluate_surface`].
    pub fn eval(&self, u0: P::Scalar, v0: P::Scalar) -> P {
        let mut intermediate: Scratch<P> = self.grid.rows().map(|row| casteljau(row, u0)).collect();
        casteljau_in_place(&mut intermediate, v0)
    }

    /// The iso-parameter curve `u -> r(u, v0)`, a Bezier curve of degree m.
    pub fn curve_at_v(&self, v0: P::Scalar) -> Bezier<P> {
        let mut column: Scratch<P> = Scratch::default();
        let mut control_points = Vec::with_capacity(self.grid.column_count());
        for col in 0..self.grid.column_count() {
            column.clear();
            column.extend(self.grid.column(col).into_iter().flatten().copied());
            control_points.push(casteljau_in_place(&mut column, v0));
        }
        Bezier::from_nonempty(control_points)
    }

    /// The iso-parameter curve `v -> r(u0, v)`, a Bezier curve of degree n.
    pub fn curve_at_u(&self, u0: P::Scalar) -> Bezier<P> {
        Bezier::from_nonempty(self.grid.rows().map(|row| casteljau(row, u0)).collect())
    }
}
