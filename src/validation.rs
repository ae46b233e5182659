use log::debug;

use crate::error::SplineError;

/// Minimal number of points for which the interior system is well posed.
pub const MIN_POINTS: usize = 3;

/// Checks that `x` and `y` describe a dataset the natural spline can pass through:
/// equal lengths, at least [MIN_POINTS] points and strictly increasing `x`.
pub fn validate(x: &[f64], y: &[f64]) -> Result<(), SplineError> {
    if x.len() != y.len() {
        debug!("rejected dataset: {} x values, {} y values", x.len(), y.len());
        return Err(SplineError::DimensionMismatch { x_len: x.len(), y_len: y.len() });
    }

    if x.len() < MIN_POINTS {
        debug!("rejected dataset: only {} points", x.len());
        return Err(SplineError::InsufficientPoints { got: x.len() });
    }

    check_strictly_increasing(x)
}

fn check_strictly_increasing(x: &[f64]) -> Result<(), SplineError> {
    // written as a negation so that NaN is rejected as well
    match x.windows(2).position(|w| !(w[0] < w[1])) {
        Some(index) => {
            debug!("rejected dataset: x[{}] = {} is followed by {}", index, x[index], x[index + 1]);
            Err(SplineError::NonMonotonicKnots {
                index,
                current: x[index],
                next: x[index + 1],
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_increasing_dataset() {
        assert!(validate(&[0.0, 0.5, 3.0, 7.25], &[1.0, -1.0, 2.0, 0.0]).is_ok());
    }

    #[test]
    fn dimension_mismatch() {
        let result = validate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0, 3.0]);

        assert_eq!(result, Err(SplineError::DimensionMismatch { x_len: 3, y_len: 4 }));
    }

    #[test]
    fn insufficient_points() {
        let result = validate(&[0.0, 1.0], &[0.0, 1.0]);

        assert_eq!(result, Err(SplineError::InsufficientPoints { got: 2 }));
        assert_eq!(validate(&[], &[]), Err(SplineError::InsufficientPoints { got: 0 }));
    }

    #[test]
    fn dimension_mismatch_is_reported_before_point_count() {
        let result = validate(&[0.0], &[0.0, 1.0]);

        assert_eq!(result, Err(SplineError::DimensionMismatch { x_len: 1, y_len: 2 }));
    }

    #[test]
    fn non_monotonic_knots() {
        let result = validate(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]);

        assert_eq!(
            result,
            Err(SplineError::NonMonotonicKnots { index: 1, current: 2.0, next: 1.0 })
        );
    }

    #[test]
    fn repeated_knot_is_not_strictly_increasing() {
        let result = validate(&[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 2.0, 3.0]);

        assert!(matches!(result, Err(SplineError::NonMonotonicKnots { index: 1, .. })));
    }

    #[test]
    fn nan_knot_is_rejected() {
        let result = validate(&[0.0, f64::NAN, 2.0], &[0.0, 1.0, 2.0]);

        assert!(matches!(result, Err(SplineError::NonMonotonicKnots { index: 0, .. })));
    }
}
