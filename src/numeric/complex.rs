use std::iter::Sum;
use std::ops::Add;

/// A complex number whose real and imaginary parts may each be absent.
///
/// An absent part is not the same as a zero part: `Real(2.0)` has argument
/// 0° or 180° by definition, while `Full(2.0, 0.0)` goes through the
/// quadrant table. `Zero` (both parts absent) renders as an empty string
/// and contributes nothing to sums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComplexNumber {
    Zero,
    Real(f64),
    Imaginary(f64),
    Full(f64, f64),
}

impl ComplexNumber {
    pub fn new(re: Option<f64>, im: Option<f64>) -> Self {
        match (re, im) {
            (None, None) => ComplexNumber::Zero,
            (Some(re), None) => ComplexNumber::Real(re),
            (None, Some(im)) => ComplexNumber::Imaginary(im),
            (Some(re), Some(im)) => ComplexNumber::Full(re, im),
        }
    }

    pub fn cartesian(re: f64, im: f64) -> Self {
        ComplexNumber::Full(re, im)
    }

    pub fn re(&self) -> Option<f64> {
        match self {
            ComplexNumber::Real(re) | ComplexNumber::Full(re, _) => Some(*re),
            _ => None,
        }
    }

    pub fn im(&self) -> Option<f64> {
        match self {
            ComplexNumber::Imaginary(im) | ComplexNumber::Full(_, im) => Some(*im),
            _ => None,
        }
    }

    /// Real part with absent treated as 0.
    pub fn re_or_zero(&self) -> f64 {
        self.re().unwrap_or(0.0)
    }

    /// Imaginary part with absent treated as 0.
    pub fn im_or_zero(&self) -> f64 {
        self.im().unwrap_or(0.0)
    }

    /// Euclidean norm of (re, im), absent parts as 0.
    pub fn modulus(&self) -> f64 {
        let squares = self.re_or_zero().powi(2) + self.im_or_zero().powi(2);
        squares.sqrt().abs()
    }

    /// Argument in degrees, in [0, 360).
    ///
    /// Part-only values are axis-aligned by definition; full values go
    /// through a quadrant-adjusted arctangent. Note the asymmetric
    /// boundary handling between quadrants (>= vs > on the axes).
    pub fn theta_degrees(&self) -> f64 {
        match *self {
            ComplexNumber::Real(re) => {
                if re >= 0.0 {
                    0.0
                } else {
                    180.0
                }
            }
            ComplexNumber::Imaginary(im) => {
                if im >= 0.0 {
                    90.0
                } else {
                    270.0
                }
            }
            ComplexNumber::Zero => 0.0,
            ComplexNumber::Full(re, im) => {
                let degrees = (im / re).abs().atan().to_degrees();

                if re >= 0.0 && im >= 0.0 {
                    degrees
                } else if re < 0.0 && im >= 0.0 {
                    180.0 - degrees
                } else if re <= 0.0 && im < 0.0 {
                    180.0 + degrees
                } else {
                    360.0 - degrees
                }
            }
        }
    }

    /// Argument as a multiple of π.
    pub fn theta_pi_radians(&self) -> f64 {
        self.theta_degrees() / 180.0
    }

    /// Argument in radians.
    pub fn theta_radians(&self) -> f64 {
        self.theta_pi_radians() * std::f64::consts::PI
    }
}

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    /// Component-wise sum with absent parts treated as 0. The result
    /// always carries both parts.
    fn add(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::Full(
            self.re_or_zero() + rhs.re_or_zero(),
            self.im_or_zero() + rhs.im_or_zero(),
        )
    }
}

impl Sum for ComplexNumber {
    fn sum<I: Iterator<Item = ComplexNumber>>(iter: I) -> ComplexNumber {
        iter.fold(ComplexNumber::Full(0.0, 0.0), |acc, z| acc + z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected ~{}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_new_maps_to_variants() {
        assert_eq!(ComplexNumber::new(None, None), ComplexNumber::Zero);
        assert_eq!(ComplexNumber::new(Some(2.0), None), ComplexNumber::Real(2.0));
        assert_eq!(
            ComplexNumber::new(None, Some(-1.5)),
            ComplexNumber::Imaginary(-1.5)
        );
        assert_eq!(
            ComplexNumber::new(Some(1.0), Some(2.0)),
            ComplexNumber::Full(1.0, 2.0)
        );
    }

    #[test]
    fn test_add_treats_absent_as_zero() {
        let a = ComplexNumber::Real(3.0);
        let b = ComplexNumber::Imaginary(4.0);
        assert_eq!(a + b, ComplexNumber::Full(3.0, 4.0));

        let c = ComplexNumber::Zero + ComplexNumber::Full(1.0, -1.0);
        assert_eq!(c, ComplexNumber::Full(1.0, -1.0));
    }

    #[test]
    fn test_add_always_yields_full() {
        let z = ComplexNumber::Real(1.0) + ComplexNumber::Real(2.0);
        assert_eq!(z, ComplexNumber::Full(3.0, 0.0));
        assert_eq!(z.re(), Some(3.0));
        assert_eq!(z.im(), Some(0.0));
    }

    #[test]
    fn test_sum_of_empty_is_full_zero() {
        let zs: Vec<ComplexNumber> = vec![];
        let sum: ComplexNumber = zs.into_iter().sum();
        assert_eq!(sum, ComplexNumber::Full(0.0, 0.0));
    }

    #[test]
    fn test_modulus() {
        assert_eq!(ComplexNumber::Full(3.0, 4.0).modulus(), 5.0);
        assert_eq!(ComplexNumber::Real(-2.0).modulus(), 2.0);
        assert_eq!(ComplexNumber::Zero.modulus(), 0.0);
    }

    #[test]
    fn test_theta_real_only() {
        assert_eq!(ComplexNumber::Real(2.1).theta_degrees(), 0.0);
        assert_eq!(ComplexNumber::Real(-3.4).theta_degrees(), 180.0);
        assert_eq!(ComplexNumber::Real(0.0).theta_degrees(), 0.0);
    }

    #[test]
    fn test_theta_imaginary_only() {
        assert_eq!(ComplexNumber::Imaginary(4.2).theta_degrees(), 90.0);
        assert_eq!(ComplexNumber::Imaginary(-5.6).theta_degrees(), 270.0);
    }

    #[test]
    fn test_theta_quadrants() {
        assert_close(ComplexNumber::Full(5.0, 2.0).theta_degrees(), 21.80);
        assert_close(ComplexNumber::Full(-3.5, 4.0).theta_degrees(), 131.19);
        assert_close(ComplexNumber::Full(-6.0, -3.0).theta_degrees(), 206.57);
        assert_close(ComplexNumber::Full(4.0, -5.0).theta_degrees(), 308.66);
    }

    #[test]
    fn test_theta_on_axes_through_quadrant_table() {
        // Both parts present: the quadrant table applies even on the axes.
        assert_eq!(ComplexNumber::Full(0.0, 5.0).theta_degrees(), 90.0);
        assert_eq!(ComplexNumber::Full(0.0, -5.0).theta_degrees(), 270.0);
        assert_eq!(ComplexNumber::Full(3.0, 0.0).theta_degrees(), 0.0);
    }

    #[test]
    fn test_angle_conversions() {
        let z = ComplexNumber::Imaginary(1.0);
        assert_eq!(z.theta_pi_radians(), 0.5);
        assert_close(z.theta_radians(), std::f64::consts::FRAC_PI_2);
    }
}
