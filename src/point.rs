use core::fmt::Debug;
use core::ops::{Add, Sub};

use num_traits::{Float, Zero};

/// Trait defined over generic points P of fixed dimension which themselves are generic over their Scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves and surfaces, so that implementing it requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy:
/// the evaluators only ever add two points and scale a point by a scalar.
pub trait Point:
    Add<Self, Output = Self> + Sub<Self, Output = Self> + Copy + PartialEq + Default + Debug
{
    type Scalar: Float + Debug;

    /// Number of components of every point of this type.
    const DIM: usize;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1, 2] -> [x, y, z]
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Multiplies every component with `factor`.
    fn scale(self, factor: Self::Scalar) -> Self;

    /// Returns the squared L2 norm of the Point interpreted as a vector.
    fn squared_length(&self) -> Self::Scalar {
        let mut sqr_len = Self::Scalar::zero();
        for i in 0..Self::DIM {
            sqr_len = sqr_len + self.axis(i) * self.axis(i);
        }
        sqr_len
    }
}
