//! Natural cubic spline interpolation.
//!
//! Given strictly increasing knots `x[0] < x[1] < ... < x[n]` and values `y`, builds
//! `n` cubic segments which pass through every point, are continuous up to the second
//! derivative at the interior knots and have zero second derivative at both ends.
//! The returned [SplineFunction] is immutable and evaluates the interpolant on
//! `[x[0], x[n])`.
//!
//! # Example
//! ```
//! use natural_spline::{interpolate, SplineError};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let spline = interpolate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
//!
//! assert_approx_eq!(0.6875, spline.evaluate(0.5).unwrap(), 1e-12);
//! assert_approx_eq!(1.0, spline.evaluate(1.0).unwrap(), 1e-12);
//! assert!(matches!(spline.evaluate(2.0), Err(SplineError::OutOfDomain { .. })));
//! ```

mod error;
mod function;
mod polynomial;
mod solver;
mod spline;
mod validation;

pub use error::SplineError;
pub use function::{SplineInterpolator, UnivariateFunction, UnivariateInterpolator};
pub use polynomial::Polynomial;
pub use spline::SplineFunction;

/// Computes the natural cubic spline through `(x[i], y[i])`.
///
/// # Errors
/// - [SplineError::DimensionMismatch] when `x` and `y` lengths differ,
/// - [SplineError::InsufficientPoints] for fewer than 3 points,
/// - [SplineError::NonMonotonicKnots] when `x` is not strictly increasing.
/// ```
/// use natural_spline::{interpolate, SplineError};
///
/// let result = interpolate(&[0.0, 1.0], &[0.0, 1.0]);
/// assert_eq!(result.unwrap_err(), SplineError::InsufficientPoints { got: 2 });
/// ```
pub fn interpolate(x: &[f64], y: &[f64]) -> Result<SplineFunction, SplineError> {
    SplineFunction::natural(x, y)
}
