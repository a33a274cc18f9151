//! Loader for the plain text surface description.
//!
//! ```text
//! n m
//! x y z        <- (n+1)*(m+1) point lines, row-major:
//! ...             all m+1 points of row 0, then row 1, ...
//! u0 v0
//! ```
//!
//! Blank lines and surrounding whitespace are ignored. Declared degrees are never
//! adjusted to the data: missing, surplus or malformed lines are reported as a
//! [`ParseError`] naming the offending line.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::ParseError;
use crate::grid::ControlGrid;
use crate::point::Point;
use crate::point_generic::PointN;
use crate::surface::BezierSurface;
use crate::NativeFloat;

/// A surface together with the parameters it should be evaluated at.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceInput<P>
where
    P: Point,
{
    pub surface: BezierSurface<P>,
    pub u0: P::Scalar,
    pub v0: P::Scalar,
}

impl<P> SurfaceInput<P>
where
    P: Point,
{
    /// Returns the degrees `(n, m)` of the surface.
    pub fn degrees(&self) -> (usize, usize) {
        self.surface.degrees()
    }

    /// Evaluates the surface at `(u0, v0)`.
    pub fn evaluate(&self) -> P {
        self.surface.eval(self.u0, self.v0)
    }
}

fn parse_float(line: usize, token: &str) -> Result<NativeFloat, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_header(line: usize, content: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidHeader {
        line,
        content: content.to_string(),
    };
    let mut tokens = content.split_whitespace();
    let (n, m) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(n), Some(m), None) => (n, m),
        _ => return Err(invalid()),
    };
    let n = n.parse::<usize>().map_err(|_| invalid())?;
    let m = m.parse::<usize>().map_err(|_| invalid())?;
    Ok((n, m))
}

fn parse_point<const N: usize>(line: usize, content: &str) -> Result<PointN<NativeFloat, N>, ParseError> {
    let mut coords = [0.0; N];
    let mut found = 0;
    for token in content.split_whitespace() {
        let value = parse_float(line, token)?;
        if found < N {
            coords[found] = value;
        }
        found += 1;
    }
    if found != N {
        return Err(ParseError::DimensionMismatch {
            line,
            expected: N,
            found,
        });
    }
    Ok(PointN::new(coords))
}

fn parse_parameters(line: usize, content: &str) -> Result<(NativeFloat, NativeFloat), ParseError> {
    let mut tokens = content.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(u0), Some(v0), None) => Ok((parse_float(line, u0)?, parse_float(line, v0)?)),
        _ => Err(ParseError::InvalidParameters {
            line,
            content: content.to_string(),
        }),
    }
}

/// Parses a surface description with `N`-dimensional control points from `text`.
///
/// ```rust
/// use bezier_surface::{parse_input, PointN};
///
/// let input = parse_input::<3>("0 1\n0 0 0\n2 2 2\n0.5 0.0\n").unwrap();
/// assert_eq!(input.degrees(), (0, 1));
/// assert_eq!(input.evaluate(), PointN::new([1.0, 1.0, 1.0]));
/// ```
pub fn parse_input<const N: usize>(text: &str) -> Result<SurfaceInput<PointN<NativeFloat, N>>, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, content) = lines.next().ok_or(ParseError::MissingHeader)?;
    let (n, m) = parse_header(line, content)?;
    let expected = n
        .checked_add(1)
        .zip(m.checked_add(1))
        .and_then(|(rows, cols)| rows.checked_mul(cols))
        .ok_or_else(|| ParseError::InvalidHeader {
            line,
            content: content.to_string(),
        })?;
    debug!("degrees n={}, m={}: expecting {} control points", n, m, expected);

    // row-major: all m+1 points of row 0, then row 1, ...
    let mut points: Vec<PointN<NativeFloat, N>> = Vec::new();
    while points.len() < expected {
        let (line, content) = lines.next().ok_or(ParseError::MissingControlPoints {
            expected,
            found: points.len(),
        })?;
        points.push(parse_point::<N>(line, content)?);
    }

    let (line, content) = lines.next().ok_or(ParseError::MissingParameters)?;
    let (u0, v0) = parse_parameters(line, content)?;

    if let Some((line, _)) = lines.next() {
        return Err(ParseError::TrailingInput { line });
    }

    Ok(SurfaceInput {
        surface: BezierSurface::new(ControlGrid::from_row_major(n + 1, m + 1, points)),
        u0,
        v0,
    })
}

/// Number of coordinates on the first control point line, i.e. the dimension the
/// description's points are written in. `None` if there is no such line.
///
/// ```rust
/// use bezier_surface::input::point_dimension;
///
/// assert_eq!(point_dimension("1 0\n0 0\n2 4\n0.0 0.5\n"), Some(2));
/// assert_eq!(point_dimension("0 0\n"), None);
/// ```
pub fn point_dimension(text: &str) -> Option<usize> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .nth(1)
        .map(|line| line.split_whitespace().count())
}

/// Reads the surface description stored at `path` without parsing it.
pub fn read_input_text(path: impl AsRef<Path>) -> Result<String, ParseError> {
    let path = path.as_ref();
    info!("reading surface from {}", path.display());
    fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads and parses the surface description stored at `path`.
pub fn read_input_file<const N: usize>(
    path: impl AsRef<Path>,
) -> Result<SurfaceInput<PointN<NativeFloat, N>>, ParseError> {
    parse_input::<N>(&read_input_text(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    const BILINEAR: &str = "1 1
0 0 0
0 1 0
1 0 0
1 1 1
0.5 0.5
";

    #[test_log::test]
    fn parses_reference_format() {
        let input = parse_input::<3>(BILINEAR).unwrap();
        assert_eq!(input.degrees(), (1, 1));
        assert_eq!(input.u0, 0.5);
        assert_eq!(input.v0, 0.5);
        let grid = input.surface.grid();
        assert_eq!(grid.get(0, 1), Some(&PointN::new([0.0, 1.0, 0.0])));
        assert_eq!(grid.get(1, 0), Some(&PointN::new([1.0, 0.0, 0.0])));
        assert_eq!(input.evaluate(), PointN::new([0.5, 0.5, 0.25]));
    }

    #[test_log::test]
    fn ignores_blank_lines_and_whitespace() {
        let text = "\n  1 1  \n\n0 0 0\n\t0 1 0\n1 0 0\n\n1   1   1\n  0.5 0.5\n\n\n";
        let input = parse_input::<3>(text).unwrap();
        assert_eq!(input, parse_input::<3>(BILINEAR).unwrap());
    }

    #[test_log::test]
    fn other_dimensions() {
        let input = parse_input::<2>("2 0\n0 0\n1 2\n2 0\n0.5 0.25\n").unwrap();
        assert_eq!(input.degrees(), (2, 0));
        // single column: quadratic along v at v0 = 0.25
        let p = input.evaluate();
        assert!((p[0] - 0.5).abs() < EPSILON);
        assert!((p[1] - 0.75).abs() < EPSILON);
    }

    #[test_log::test]
    fn planar_points_use_their_own_dimension() {
        let text = "1 0\n0 0\n2 4\n0.0 0.5\n";
        assert_eq!(point_dimension(text), Some(2));
        assert_eq!(parse_input::<2>(text).unwrap().evaluate(), PointN::new([1.0, 2.0]));
        assert!(matches!(
            parse_input::<3>(text),
            Err(ParseError::DimensionMismatch {
                line: 2,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test_log::test]
    fn point_dimension_skips_blank_lines() {
        assert_eq!(point_dimension(BILINEAR), Some(3));
        assert_eq!(point_dimension("\n 0 0 \n\n  1 2 3 4 \n0 0\n"), Some(4));
        assert_eq!(point_dimension(""), None);
    }

    #[test_log::test]
    fn missing_header() {
        assert!(matches!(parse_input::<3>(""), Err(ParseError::MissingHeader)));
        assert!(matches!(parse_input::<3>(" \n\n"), Err(ParseError::MissingHeader)));
    }

    #[test_log::test]
    fn invalid_header() {
        for header in ["1", "1 1 1", "-1 1", "a b", "1.5 1"] {
            let text = format!("{}\n0 0 0\n0.5 0.5\n", header);
            assert!(
                matches!(parse_input::<3>(&text), Err(ParseError::InvalidHeader { line: 1, .. })),
                "header `{}` was accepted",
                header
            );
        }
        let huge = format!("{} {}\n", usize::MAX, usize::MAX);
        assert!(matches!(parse_input::<3>(&huge), Err(ParseError::InvalidHeader { line: 1, .. })));
    }

    #[test_log::test]
    fn missing_control_points_are_not_padded() {
        let text = "1 1\n0 0 0\n0 1 0\n1 0 0\n";
        assert!(matches!(
            parse_input::<3>(text),
            Err(ParseError::MissingControlPoints { expected: 4, found: 3 })
        ));
    }

    #[test_log::test]
    fn parameter_line_read_as_point() {
        // one point short: the parameter line is taken for the last point
        let text = "1 1\n0 0 0\n0 1 0\n1 0 0\n0.5 0.5\n";
        assert!(matches!(
            parse_input::<3>(text),
            Err(ParseError::DimensionMismatch {
                line: 5,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test_log::test]
    fn missing_parameters() {
        let text = "0 0\n2 3 4\n";
        assert!(matches!(parse_input::<3>(text), Err(ParseError::MissingParameters)));
    }

    #[test_log::test]
    fn invalid_parameters() {
        let text = "0 0\n2 3 4\n0.5\n";
        assert!(matches!(
            parse_input::<3>(text),
            Err(ParseError::InvalidParameters { line: 3, .. })
        ));
        let text = "0 0\n2 3 4\n0.5 x\n";
        assert!(matches!(
            parse_input::<3>(text),
            Err(ParseError::InvalidNumber { line: 3, .. })
        ));
    }

    #[test_log::test]
    fn surplus_lines_are_rejected() {
        let text = format!("{}0 0 0\n", BILINEAR);
        assert!(matches!(
            parse_input::<3>(&text),
            Err(ParseError::TrailingInput { line: 7 })
        ));
    }

    #[test_log::test]
    fn invalid_coordinate() {
        let text = "0 0\n2 three 4\n0.5 0.5\n";
        match parse_input::<3>(text) {
            Err(ParseError::InvalidNumber { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "three");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test_log::test]
    fn missing_file() {
        let err = read_input_file::<3>("this/file/does/not/exist.txt").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert!(err.to_string().contains("this/file/does/not/exist.txt"));
    }

    #[test_log::test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("bezier_surface_input_{}.txt", std::process::id()));
        fs::write(&path, "0 0\n2 3 4\n0.1 0.9\n").unwrap();
        let input = read_input_file::<3>(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(input.unwrap().evaluate(), PointN::new([2.0, 3.0, 4.0]));
    }
}
