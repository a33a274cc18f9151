//! Error types of the evaluators and the text loader.

use core::fmt;
use std::io;

use thiserror::Error;

/// Names the degree a [`EvalError::DegreeMismatch`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeAxis {
    /// `n`: number of rows minus one (reduced along `v`).
    N,
    /// `m`: number of points per row minus one (reduced along `u`).
    M,
}

impl fmt::Display for DegreeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreeAxis::N => write!(f, "n"),
            DegreeAxis::M => write!(f, "m"),
        }
    }
}

/// Failures of curve and surface evaluation.
/// Arithmetic itself never fails, non-finite inputs propagate as IEEE-754 values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// De Casteljau's algorithm needs at least one control point.
    #[error("cannot evaluate a Bézier curve without control points")]
    EmptySequence,
    /// The grid is not a rectangle.
    #[error("row {row} has {found} control points, expected {expected} like row 0")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A declared degree disagrees with the grid it was declared for.
    #[error("declared degree {axis}={declared} but the control grid has degree {actual}")]
    DegreeMismatch {
        axis: DegreeAxis,
        declared: usize,
        actual: usize,
    },
}

/// Failures of reading the `n m` / points / `u0 v0` text format.
/// Line numbers are 1-based and count blank lines.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("input is empty, expected a line with the degrees `n m`")]
    MissingHeader,
    #[error("line {line}: expected two non-negative integers `n m`, got `{content}`")]
    InvalidHeader { line: usize, content: String },
    #[error("line {line}: `{token}` is not a number")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: expected a point with {expected} coordinates, got {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} control points for the declared degrees, found {found}")]
    MissingControlPoints { expected: usize, found: usize },
    #[error("parameters `u0 v0` are missing after the control points")]
    MissingParameters,
    #[error("line {line}: expected the parameters `u0 v0`, got `{content}`")]
    InvalidParameters { line: usize, content: String },
    #[error("line {line}: unexpected input after the parameters `u0 v0`")]
    TrailingInput { line: usize },
}
