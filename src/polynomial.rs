/// One cubic piece of a spline, stored as 4 coefficients in increasing degree order.
/// The argument of [Polynomial::evaluate] is the offset from the segment's left knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: [f64; 4],
}

impl Polynomial {
    pub fn new(coefficients: [f64; 4]) -> Self {
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64; 4] {
        &self.coefficients
    }

    /// Horner's scheme, `a + t*(b + t*(c + t*d))`.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |result, coefficient| result * t + coefficient)
    }

    /// Derivative polynomial; the leading coefficient becomes zero.
    /// ```
    /// use natural_spline::Polynomial;
    ///
    /// let polynomial = Polynomial::new([1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(polynomial.derivative().coefficients(), &[2.0, 6.0, 12.0, 0.0]);
    /// ```
    pub fn derivative(&self) -> Self {
        let [_, b, c, d] = self.coefficients;
        Polynomial::new([b, 2.0 * c, 3.0 * d, 0.0])
    }
}
