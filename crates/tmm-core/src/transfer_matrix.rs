use num_complex::Complex64;
use std::ops::{Mul, MulAssign};

/// A 2×2 complex transfer matrix relating acoustic pressure and volume
/// velocity on either side of a waveguide element.
///
/// ```text
/// [p_in ]   [a  b] [p_out]
/// [U_in ] = [c  d] [U_out]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferMatrix {
    pub a: Complex64,
    pub b: Complex64,
    pub c: Complex64,
    pub d: Complex64,
}

impl TransferMatrix {
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { a, b, c, d }
    }

    /// Identity matrix (empty chain).
    pub fn identity() -> Self {
        Self {
            a: Complex64::new(1.0, 0.0),
            b: Complex64::new(0.0, 0.0),
            c: Complex64::new(0.0, 0.0),
            d: Complex64::new(1.0, 0.0),
        }
    }

    /// Chain (multiply) this matrix with another: self · other.
    pub fn chain(&self, other: &TransferMatrix) -> TransferMatrix {
        TransferMatrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
        }
    }

    pub fn determinant(&self) -> Complex64 {
        self.a * self.d - self.b * self.c
    }

    /// Sum `A + B·(S/c) + C·(c/S) + D` for equal exterior areas `S` on both ends.
    fn termination_sum(&self, exterior_area: f64, c: f64) -> Complex64 {
        self.a + self.b * (exterior_area / c) + self.c * (c / exterior_area) + self.d
    }

    /// Complex pressure transmission coefficient.
    ///
    /// t = 2 / (A + B·S/c + C·c/S + D)
    pub fn pressure_transmission(&self, exterior_area: f64, c: f64) -> Complex64 {
        Complex64::new(2.0, 0.0) / self.termination_sum(exterior_area, c)
    }

    /// Power transmittance |t|², with t = 2 / |A + B·S/c + C·c/S + D|.
    pub fn transmittance(&self, exterior_area: f64, c: f64) -> f64 {
        let t = 2.0 / self.termination_sum(exterior_area, c).norm();
        t * t
    }

    /// Transmission loss in dB, `-10·log₁₀(τ)`.
    pub fn transmission_loss(&self, exterior_area: f64, c: f64) -> f64 {
        -10.0 * self.transmittance(exterior_area, c).log10()
    }
}

impl Mul for TransferMatrix {
    type Output = TransferMatrix;

    fn mul(self, rhs: TransferMatrix) -> TransferMatrix {
        self.chain(&rhs)
    }
}

impl MulAssign for TransferMatrix {
    fn mul_assign(&mut self, rhs: TransferMatrix) {
        *self = self.chain(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransferMatrix {
        TransferMatrix::new(
            Complex64::new(1.0, 0.5),
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(1.0, 0.5),
        )
    }

    #[test]
    fn test_identity_chain() {
        let id = TransferMatrix::identity();
        let m = sample();
        let result = id.chain(&m);
        assert!((result.a - m.a).norm() < 1e-12);
        assert!((result.b - m.b).norm() < 1e-12);
        assert!((result.c - m.c).norm() < 1e-12);
        assert!((result.d - m.d).norm() < 1e-12);
    }

    #[test]
    fn test_mul_assign_matches_chain() {
        let m = sample();
        let n = TransferMatrix::new(
            Complex64::new(0.3, 0.0),
            Complex64::new(2.0, -1.0),
            Complex64::new(0.5, 0.5),
            Complex64::new(-1.0, 0.0),
        );
        let mut acc = m;
        acc *= n;
        assert_eq!(acc, m.chain(&n));
        assert_eq!(acc, m * n);
        // Matrix product does not commute.
        assert_ne!(m * n, n * m);
    }

    #[test]
    fn test_identity_transmits_everything() {
        // B = C = 0, so t = 2 / |1 + 1| regardless of the exterior area.
        let id = TransferMatrix::identity();
        for area in [1e-4, 0.008, 1.0, 50.0] {
            let tau = id.transmittance(area, 342.0);
            assert!((tau - 1.0).abs() < 1e-15, "tau = {tau} for S = {area}");
            let tl = id.transmission_loss(area, 342.0);
            assert!(tl.abs() < 1e-10, "TL of identity should be 0, got {tl}");
        }
    }

    #[test]
    fn test_transmittance_is_squared_pressure_coefficient() {
        let m = sample();
        let t = m.pressure_transmission(0.01, 342.0);
        let tau = m.transmittance(0.01, 342.0);
        assert!((t.norm_sqr() - tau).abs() < 1e-14, "|t|² = {}, tau = {tau}", t.norm_sqr());
    }

    #[test]
    fn test_zero_area_is_not_finite() {
        // C·(c/S) is NaN + ∞j, which must reach the output untouched.
        let tau = sample().transmittance(0.0, 342.0);
        assert!(tau.is_nan(), "tau = {tau}");
    }
}
