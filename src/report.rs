use core::fmt;

use crate::input::SurfaceInput;
use crate::point::Point;

/// Console report of one evaluation: the echoed degrees and parameters followed by the result.
///
/// ```text
/// Surface degrees: n=1, m=1
/// Parameters: u0=0.5, v0=0.5
/// Resulting point r(u0, v0): [0.5, 0.5, 0.25]
/// ```
pub struct Report<'a, P>
where
    P: Point,
{
    input: &'a SurfaceInput<P>,
    result: P,
}

impl<'a, P> Report<'a, P>
where
    P: Point,
{
    pub fn new(input: &'a SurfaceInput<P>, result: P) -> Self {
        Report { input, result }
    }
}

impl<P> fmt::Display for Report<'_, P>
where
    P: Point + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, m) = self.input.degrees();
        writeln!(f, "Surface degrees: n={}, m={}", n, m)?;
        writeln!(f, "Parameters: u0={:?}, v0={:?}", self.input.u0, self.input.v0)?;
        write!(f, "Resulting point r(u0, v0): {}", self.result)
    }
}
