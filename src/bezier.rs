use log::trace;
use num_traits::One;
use tinyvec::TinyVec;

use crate::error::EvalError;
use crate::point::Point;
use crate::INLINE_POINTS;

/// Working buffer of De Casteljau's algorithm, inline for low degrees.
pub(crate) type Scratch<P> = TinyVec<[P; INLINE_POINTS]>;

/// Evaluate the Bézier curve defined by `points` at `t` using De Casteljau's algorithm.
///
/// Every pass replaces the sequence by one that is one point shorter, each new point being
/// the affine blend `(1 - t) * points[i] + t * points[i + 1]`, until a single point remains.
/// A single control point is returned unchanged for any `t`. `t` is not restricted to [0,1],
/// outside of it the blend extrapolates.
///
/// ```rust
/// use bezier_surface::{evaluate_curve, PointN};
///
/// let line = [PointN::new([0.0, 0.0]), PointN::new([2.0, 4.0])];
/// assert_eq!(evaluate_curve(&line, 0.25).unwrap(), PointN::new([0.5, 1.0]));
/// ```
pub fn evaluate_curve<P: Point>(points: &[P], t: P::Scalar) -> Result<P, EvalError> {
    if points.is_empty() {
        return Err(EvalError::EmptySequence);
    }
    Ok(casteljau(points, t))
}

/// Copies `points` into a scratch buffer and reduces it. `points` must not be empty.
pub(crate) fn casteljau<P: Point>(points: &[P], t: P::Scalar) -> P {
    let mut p: Scratch<P> = points.iter().copied().collect();
    casteljau_in_place(&mut p, t)
}

/// Reduces `p` in place, overwriting it with the intermediate levels. `p` must not be empty.
pub(crate) fn casteljau_in_place<P: Point>(p: &mut [P], t: P::Scalar) -> P {
    debug_assert!(!p.is_empty());
    let s = P::Scalar::one() - t;
    // loop up to degree = p.len() - 1, level i keeps p.len() - i live points
    for i in 1..p.len() {
        for j in 0..p.len() - i {
            p[j] = p[j].scale(s) + p[j + 1].scale(t);
        }
        trace!("casteljau level {} at t={:?}: {:?}", i, t, &p[..p.len() - i]);
    }
    p[0]
}

/// Bezier curve of arbitrary degree (= number of control points - 1) over an owned list of control points.
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier<P>
where
    P: Point,
{
    /// Control points which define the curve and hence its degree
    control_points: Vec<P>,
}

impl<P> Bezier<P>
where
    P: Point,
{
    /// Create a new Bezier curve from its `control_points`, fails if there are none.
    pub fn new(control_points: Vec<P>) -> Result<Bezier<P>, EvalError> {
        if control_points.is_empty() {
            return Err(EvalError::EmptySequence);
        }
        Ok(Bezier { control_points })
    }

    /// Construction from a sequence that is known to be non-empty.
    pub(crate) fn from_nonempty(control_points: Vec<P>) -> Bezier<P> {
        debug_assert!(!control_points.is_empty());
        Bezier { control_points }
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Evaluate a point on the curve at 't' which should be in the interval [0,1]
    pub fn eval(&self, t: P::Scalar) -> P {
        casteljau(&self.control_points, t)
    }
}
