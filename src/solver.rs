use log::trace;
use nalgebra::DVector;

/// Per-segment coefficients of a natural cubic spline. Segment `i` is
/// `a[i] + b[i]*t + c[i]*t^2 + d[i]*t^3` with `t = x - x[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCoefficients {
    pub a: DVector<f64>,
    pub b: DVector<f64>,
    pub c: DVector<f64>,
    pub d: DVector<f64>,
}

impl SplineCoefficients {
    pub fn number_of_segments(&self) -> usize {
        self.a.len()
    }
}

/// Solves the tridiagonal system of the natural cubic spline through `(x, y)`.
///
/// Input must already be validated: equal lengths, at least 3 points and strictly
/// increasing `x`. The system is strictly diagonally dominant for such input, so
/// elimination runs without pivoting and every pivot is positive.
pub fn solve_natural(x: &[f64], y: &[f64]) -> SplineCoefficients {
    let n = x.len() - 1;

    let h = DVector::from_vec(x.windows(2).map(|w| w[1] - w[0]).collect());

    let mut alpha = DVector::<f64>::zeros(n);
    for i in 1..n {
        alpha[i] = 3.0 * (y[i + 1] * h[i - 1] - y[i] * (x[i + 1] - x[i - 1]) + y[i - 1] * h[i])
            / (h[i - 1] * h[i]);
    }

    // forward elimination, left end pinned by the natural boundary
    let mut l = DVector::<f64>::zeros(n + 1);
    let mut mu = DVector::<f64>::zeros(n);
    let mut z = DVector::<f64>::zeros(n + 1);
    l[0] = 1.0;

    for i in 1..n {
        l[i] = 2.0 * (x[i + 1] - x[i - 1]) - h[i - 1] * mu[i - 1];
        mu[i] = h[i] / l[i];
        z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / l[i];
    }
    l[n] = 1.0;
    z[n] = 0.0;
    trace!("pivots: {:?}", l.as_slice());

    // back substitution, c[n] = 0 from the right boundary
    let mut b = DVector::<f64>::zeros(n);
    let mut c = DVector::<f64>::zeros(n + 1);
    let mut d = DVector::<f64>::zeros(n);

    for j in (0..n).rev() {
        c[j] = z[j] - mu[j] * c[j + 1];
        b[j] = (y[j + 1] - y[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
        d[j] = (c[j + 1] - c[j]) / (3.0 * h[j]);
    }

    SplineCoefficients {
        a: DVector::from_vec(y[..n].to_vec()),
        b,
        c: c.rows(0, n).into_owned(),
        d,
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn three_points_worked_by_hand() {
        let coefficients = solve_natural(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]);

        assert_eq!(coefficients.number_of_segments(), 2);
        assert_eq!(coefficients.a.as_slice(), &[0.0, 1.0]);
        assert_eq!(coefficients.b.as_slice(), &[1.5, 0.0]);
        assert_eq!(coefficients.c.as_slice(), &[0.0, -1.5]);
        assert_eq!(coefficients.d.as_slice(), &[-0.5, 0.5]);
    }

    #[test]
    fn linear_data_has_no_curvature() {
        let eps = 1e-12;
        let x = [-1.0, 0.5, 2.0, 2.25, 4.0];
        let y: Vec<f64> = x.iter().map(|x| 3.0 * x - 2.0).collect();

        let coefficients = solve_natural(&x, &y);

        for i in 0..coefficients.number_of_segments() {
            assert_approx_eq!(coefficients.a[i], y[i], eps);
            assert_approx_eq!(coefficients.b[i], 3.0, eps);
            assert_approx_eq!(coefficients.c[i], 0.0, eps);
            assert_approx_eq!(coefficients.d[i], 0.0, eps);
        }
    }

    #[test]
    fn left_end_has_zero_curvature() {
        let coefficients = solve_natural(&[0.0, 0.3, 1.1, 1.7, 3.0], &[2.0, -1.0, 4.0, 0.5, 1.0]);

        assert_eq!(coefficients.c[0], 0.0);
    }

    #[test]
    fn matches_dense_solution() {
        // same system assembled as a dense matrix over c[1..n-1] and solved by LU
        let eps = 1e-10;
        let x = [0.0, 0.9, 1.1, 1.7, 2.0, 3.5];
        let y = [1.0, -2.0, 0.5, 3.0, 2.0, -1.0];
        let n = x.len() - 1;
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

        let m = n - 1;
        let mut matrix = nalgebra::DMatrix::<f64>::zeros(m, m);
        let mut rhs = DVector::<f64>::zeros(m);
        for k in 0..m {
            let i = k + 1;
            if k > 0 {
                matrix[(k, k - 1)] = h[i - 1];
            }
            matrix[(k, k)] = 2.0 * (h[i - 1] + h[i]);
            if k + 1 < m {
                matrix[(k, k + 1)] = h[i];
            }
            rhs[k] = 3.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }
        let dense = matrix.lu().solve(&rhs).unwrap();

        let coefficients = solve_natural(&x, &y);

        for k in 0..m {
            assert_approx_eq!(coefficients.c[k + 1], dense[k], eps);
        }
    }
}
