//! Validated rectangular control grids.

use core::iter::StepBy;
use core::slice::{ChunksExact, Iter};

use crate::error::{DegreeAxis, EvalError};
use crate::point::Point;

/// Checks that all `rows` have the length of the first one and returns that length.
/// An empty grid has width 0.
pub(crate) fn row_width<P, R>(rows: &[R]) -> Result<usize, EvalError>
where
    R: AsRef<[P]>,
{
    let expected = match rows.first() {
        Some(first) => first.as_ref().len(),
        None => return Ok(0),
    };
    for (row, points) in rows.iter().enumerate().skip(1) {
        let found = points.as_ref().len();
        if found != expected {
            return Err(EvalError::RaggedRow {
                row,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}

/// Rectangular arrangement of (n+1) rows with (m+1) control points each, stored row-major.
///
/// A row holds the control points that share the same `v` index, so `m` is the degree along `u`
/// and `n` the degree along `v`. A grid always holds at least one point.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlGrid<P>
where
    P: Point,
{
    points: Vec<P>,
    rows: usize,
    cols: usize,
}

impl<P> ControlGrid<P>
where
    P: Point,
{
    /// Creates a grid from its rows, which must all have the same non-zero length.
    pub fn from_rows<R>(rows: &[R]) -> Result<ControlGrid<P>, EvalError>
    where
        R: AsRef<[P]>,
    {
        let cols = row_width::<P, R>(rows)?;
        if cols == 0 {
            return Err(EvalError::EmptySequence);
        }
        let points = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Ok(ControlGrid {
            points,
            rows: rows.len(),
            cols,
        })
    }

    /// Takes `points` in row-major order. Callers guarantee `rows * cols == points.len()` with both non-zero.
    pub(crate) fn from_row_major(rows: usize, cols: usize, points: Vec<P>) -> ControlGrid<P> {
        debug_assert!(rows > 0 && cols > 0 && rows * cols == points.len());
        ControlGrid { points, rows, cols }
    }

    /// Like [`ControlGrid::from_rows`], but also checks the grid against the declared degrees `n` and `m`.
    /// A mismatch is an error, the grid is never padded or truncated to fit.
    pub fn with_degrees<R>(n: usize, m: usize, rows: &[R]) -> Result<ControlGrid<P>, EvalError>
    where
        R: AsRef<[P]>,
    {
        let grid = Self::from_rows(rows)?;
        let (actual_n, actual_m) = grid.degrees();
        if actual_n != n {
            return Err(EvalError::DegreeMismatch {
                axis: DegreeAxis::N,
                declared: n,
                actual: actual_n,
            });
        }
        if actual_m != m {
            return Err(EvalError::DegreeMismatch {
                axis: DegreeAxis::M,
                declared: m,
                actual: actual_m,
            });
        }
        Ok(grid)
    }

    /// Returns `(n, m)`: the number of rows minus one and the number of points per row minus one.
    pub fn degrees(&self) -> (usize, usize) {
        (self.rows - 1, self.cols - 1)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&P> {
        if row < self.rows && col < self.cols {
            self.points.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[P]> {
        if row < self.rows {
            Some(&self.points[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn rows(&self) -> ChunksExact<'_, P> {
        self.points.chunks_exact(self.cols)
    }

    pub fn column(&self, col: usize) -> Option<StepBy<Iter<'_, P>>> {
        if col < self.cols {
            Some(self.points[col..].iter().step_by(self.cols))
        } else {
            None
        }
    }

    /// Returns the grid with rows and columns swapped, i.e. with the roles of `u` and `v` exchanged.
    pub fn transpose(&self) -> ControlGrid<P> {
        let mut points = Vec::with_capacity(self.points.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                points.push(self.points[row * self.cols + col]);
            }
        }
        ControlGrid {
            points,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point_generic::PointN;

    type P2 = PointN<f64, 2>;

    fn p(x: f64, y: f64) -> P2 {
        PointN::new([x, y])
    }

    fn grid_2x3() -> Vec<Vec<P2>> {
        vec![
            vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)],
            vec![p(0.0, 1.0), p(1.0, 1.0), p(2.0, 1.0)],
        ]
    }

    #[test]
    fn accessors() {
        let grid = ControlGrid::<P2>::from_rows(&grid_2x3()).unwrap();
        assert_eq!(grid.degrees(), (1, 2));
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.get(1, 2), Some(&p(2.0, 1.0)));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.row(1), Some(&grid_2x3()[1][..]));
        assert_eq!(grid.row(2), None);
        assert_eq!(grid.rows().count(), 2);

        let column: Vec<P2> = grid.column(1).unwrap().copied().collect();
        assert_eq!(column, vec![p(1.0, 0.0), p(1.0, 1.0)]);
        assert!(grid.column(3).is_none());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![
            vec![p(0.0, 0.0), p(1.0, 0.0)],
            vec![p(0.0, 1.0), p(1.0, 1.0)],
            vec![p(0.0, 2.0)],
        ];
        assert_eq!(
            ControlGrid::<P2>::from_rows(&rows),
            Err(EvalError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn empty_grids_are_rejected() {
        let no_rows: Vec<Vec<P2>> = Vec::new();
        assert_eq!(ControlGrid::<P2>::from_rows(&no_rows), Err(EvalError::EmptySequence));

        let empty_rows: Vec<Vec<P2>> = vec![Vec::new(), Vec::new()];
        assert_eq!(ControlGrid::<P2>::from_rows(&empty_rows), Err(EvalError::EmptySequence));
    }

    #[test]
    fn declared_degrees_must_match() {
        let rows = grid_2x3();
        assert!(ControlGrid::<P2>::with_degrees(1, 2, &rows).is_ok());
        assert_eq!(
            ControlGrid::<P2>::with_degrees(2, 2, &rows),
            Err(EvalError::DegreeMismatch {
                axis: DegreeAxis::N,
                declared: 2,
                actual: 1
            })
        );
        assert_eq!(
            ControlGrid::<P2>::with_degrees(1, 1, &rows),
            Err(EvalError::DegreeMismatch {
                axis: DegreeAxis::M,
                declared: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn row_major_points_match_rows() {
        let rows = grid_2x3();
        let flat: Vec<P2> = rows.iter().flatten().copied().collect();
        assert_eq!(
            ControlGrid::from_row_major(2, 3, flat),
            ControlGrid::<P2>::from_rows(&rows).unwrap()
        );
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let grid = ControlGrid::<P2>::from_rows(&grid_2x3()).unwrap();
        let transposed = grid.transpose();
        assert_eq!(transposed.degrees(), (2, 1));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(grid.get(row, col), transposed.get(col, row));
            }
        }
        assert_eq!(transposed.transpose(), grid);
    }
}
