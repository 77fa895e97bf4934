//! Standard-normal building blocks for the closed-form density family.

use std::f64::consts::SQRT_2;

/// `ln(1/sqrt(2π))`.
const LOG_INV_SQRT_2PI: f64 = -0.918_938_533_204_672_7;

/// Standard normal log-density at `z`.
#[inline]
pub fn standard_normal_logpdf(z: f64) -> f64 {
    LOG_INV_SQRT_2PI - 0.5 * z * z
}

/// Standard normal density `φ(z)`.
#[inline]
pub fn standard_normal_pdf(z: f64) -> f64 {
    standard_normal_logpdf(z).exp()
}

/// Standard normal CDF `Φ(z)`.
#[inline]
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * statrs::function::erf::erfc(-z / SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_at_zero() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_cdf_symmetry() {
        for z in [0.3, 1.0, 2.5, 4.0] {
            let lo = standard_normal_cdf(-z);
            let hi = standard_normal_cdf(z);
            assert!((lo + hi - 1.0).abs() < 1e-14, "z={}: {} + {}", z, lo, hi);
        }
    }

    #[test]
    fn test_pdf_peak() {
        // φ(0) = 1/sqrt(2π)
        assert!((standard_normal_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
    }

    #[test]
    fn test_pdf_tails_vanish() {
        assert!(standard_normal_pdf(40.0) < 1e-300);
        assert!(standard_normal_cdf(-40.0) < 1e-300);
    }
}
