use log::debug;

use crate::{error::SplineError, polynomial::Polynomial, solver, solver::SplineCoefficients, validation};

/// Piecewise cubic function over strictly increasing knots. Segment `i` covers
/// `knots[i] <= x < knots[i + 1]` and is evaluated at the offset `x - knots[i]`.
///
/// Immutable once built, so a single instance may be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineFunction {
    knots: Vec<f64>,
    polynomials: Vec<Polynomial>,
}

impl SplineFunction {
    /// Builds the natural cubic spline through `(x, y)`. See [crate::interpolate].
    pub fn natural(x: &[f64], y: &[f64]) -> Result<Self, SplineError> {
        validation::validate(x, y)?;
        debug!("computing natural cubic spline through {} points", x.len());

        let coefficients = solver::solve_natural(x, y);
        let polynomials = assemble_polynomials(&coefficients);

        Ok(SplineFunction { knots: x.to_vec(), polynomials })
    }

    /// Value of the spline at `x`.
    ///
    /// The domain is the half-open interval `[knots[0], knots[n])`; the last knot
    /// itself is rejected.
    ///
    /// # Errors
    /// [SplineError::OutOfDomain] when `x` is outside of the domain or NaN.
    pub fn evaluate(&self, x: f64) -> Result<f64, SplineError> {
        self.check_domain(x)?;
        let index = self.find_interval_index(x);
        Ok(self.evaluate_interval(index, x))
    }

    /// Evaluates every element of `x_vector`. Fails without partial results if any
    /// point is out of the domain.
    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        for x in x_vector {
            self.check_domain(*x)?;
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.evaluate_interval(index, *x));
        }
        Ok(results)
    }

    /// Spline of the derivative over the same knots.
    /// ```
    /// use natural_spline::interpolate;
    ///
    /// let spline = interpolate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
    /// let slope = spline.derivative();
    /// assert_eq!(slope.evaluate(1.0).unwrap(), 0.0);
    /// ```
    pub fn derivative(&self) -> Self {
        SplineFunction {
            knots: self.knots.clone(),
            polynomials: self.polynomials.iter().map(Polynomial::derivative).collect(),
        }
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn polynomials(&self) -> &[Polynomial] {
        &self.polynomials
    }

    pub fn number_of_segments(&self) -> usize {
        self.polynomials.len()
    }

    fn min_x(&self) -> f64 {
        self.knots[0]
    }

    fn max_x(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    fn check_domain(&self, x: f64) -> Result<(), SplineError> {
        if self.min_x() <= x && x < self.max_x() {
            Ok(())
        } else {
            Err(SplineError::OutOfDomain { x, min: self.min_x(), max: self.max_x() })
        }
    }

    fn evaluate_interval(&self, index: usize, x: f64) -> f64 {
        self.polynomials[index].evaluate(x - self.knots[index])
    }

    fn find_interval_index(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.knots.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.knots[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            index_hint
        } else if index_hint + 1 < self.polynomials.len() && self.is_in_interval_range(index_hint + 1, x) {
            index_hint + 1
        } else {
            self.find_interval_index(x)
        }
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        self.knots[interval_index] <= x && x < self.knots[interval_index + 1]
    }
}

/// Packs the solved coefficient arrays into one polynomial per segment.
fn assemble_polynomials(coefficients: &SplineCoefficients) -> Vec<Polynomial> {
    (0..coefficients.number_of_segments())
        .map(|i| {
            Polynomial::new([
                coefficients.a[i],
                coefficients.b[i],
                coefficients.c[i],
                coefficients.d[i],
            ])
        })
        .collect()
}
