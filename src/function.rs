use crate::{error::SplineError, spline::SplineFunction};

/// A function from a real domain to a real value.
pub trait UnivariateFunction {
    fn value(&self, x: f64) -> Result<f64, SplineError>;
}

/// Builds a [UnivariateFunction] passing through sample points.
pub trait UnivariateInterpolator {
    type Function: UnivariateFunction;

    fn interpolate(&self, x: &[f64], y: &[f64]) -> Result<Self::Function, SplineError>;
}

impl UnivariateFunction for SplineFunction {
    fn value(&self, x: f64) -> Result<f64, SplineError> {
        self.evaluate(x)
    }
}

/// Natural cubic spline interpolation. Stateless, [crate::interpolate] in object form.
/// ```
/// use natural_spline::{SplineInterpolator, UnivariateFunction, UnivariateInterpolator};
///
/// let function = SplineInterpolator.interpolate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(function.value(0.5).unwrap(), 0.6875);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineInterpolator;

impl UnivariateInterpolator for SplineInterpolator {
    type Function = SplineFunction;

    fn interpolate(&self, x: &[f64], y: &[f64]) -> Result<SplineFunction, SplineError> {
        SplineFunction::natural(x, y)
    }
}
