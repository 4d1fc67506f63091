//! Values with asymmetric uncertainties and first-order propagation through
//! division.

use serde::Serialize;

/// A value with an upper and a lower uncertainty.
///
/// Sign convention: `err1` (upper) is non-negative and `err2` (lower) is
/// non-positive, as the archive stores them. [`Measurement::new`] enforces
/// this; NaN marks a side with no published error and propagates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub value: f64,
    pub err1: f64,
    pub err2: f64,
}

impl Measurement {
    pub fn new(value: f64, err1: f64, err2: f64) -> Self {
        Self {
            value,
            err1: err1.abs(),
            err2: -err2.abs(),
        }
    }

    /// Unit conversion: value and both errors scaled by a positive `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.value * factor, self.err1 * factor, self.err2 * factor)
    }

    /// Symmetric estimate combining both sides in quadrature.
    pub fn quadrature(&self) -> f64 {
        self.err1.hypot(self.err2)
    }

    /// `self / denominator` with asymmetric errors.
    ///
    /// The upper errors of both operands are paired and propagated to give
    /// the upper error of the ratio; the magnitudes of the lower errors give
    /// its lower error. Numerator and denominator errors are independent, so
    /// relative variances add.
    pub fn ratio(self, denominator: Measurement) -> Measurement {
        let (n, d) = (self.value, denominator.value);
        let upper = quotient_std(n, self.err1, d, denominator.err1);
        let lower = quotient_std(n, self.err2.abs(), d, denominator.err2.abs());
        Measurement::new(n / d, upper, -lower)
    }
}

/// Standard error of `n / d` for independent errors `sn` and `sd`.
fn quotient_std(n: f64, sn: f64, d: f64, sd: f64) -> f64 {
    let dn = sn / d;
    let dd = n * sd / (d * d);
    dn.hypot(dd)
}
