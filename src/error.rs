use thiserror::Error;

/// Errors reported while building or evaluating a [SplineFunction](crate::SplineFunction).
/// Construction either succeeds completely or fails with one of these before any
/// segment is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// `x` and `y` have different lengths.
    #[error("dataset arrays must have the same length, got {x_len} x values and {y_len} y values")]
    DimensionMismatch { x_len: usize, y_len: usize },

    /// Fewer than 3 sample points.
    #[error("at least 3 points are required to compute a spline interpolant, got {got}")]
    InsufficientPoints { got: usize },

    /// `x[index] >= x[index + 1]`, or one of them is NaN.
    #[error("x values must be strictly increasing, but x[{index}] = {current} is followed by {next}")]
    NonMonotonicKnots { index: usize, current: f64, next: f64 },

    /// Evaluation point outside of `[min, max)`.
    #[error("{x} is out of the spline domain [{min}, {max})")]
    OutOfDomain { x: f64, min: f64, max: f64 },
}
