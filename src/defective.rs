//! Race-aware "defective" finishing-time density.
//!
//! The marginal density in [`crate::accumulator`] ignores the competition;
//! this module's density additionally requires every competitor to still be
//! running, so it describes "accumulator `ref_idx` wins at exactly `t`".
//! Integrated over all t it yields the accumulator's choice probability.

use crate::accumulator::{accumulator_cdf, accumulator_pdf};
use crate::error::{Error, Result};

/// Density that accumulator `ref_idx` finishes at exactly time `t` while
/// every other accumulator is still below threshold.
///
/// `d(t) = f(t; v_ref, b, A, s) · ∏_{j≠ref} (1 - F(t; v_j, b, A, s))`,
/// with the threshold `b` shared by all accumulators. Requires at least two
/// drift rates and `ref_idx < drift_rates.len()`.
pub fn defective_pdf(
    t: f64,
    drift_rates: &[f64],
    b: f64,
    a: f64,
    s: f64,
    ref_idx: usize,
) -> Result<f64> {
    if drift_rates.len() < 2 {
        return Err(Error::InvalidArgument(format!(
            "defective density needs at least 2 accumulators, got {}",
            drift_rates.len()
        )));
    }
    if ref_idx >= drift_rates.len() {
        return Err(Error::InvalidArgument(format!(
            "reference index {ref_idx} out of range for {} accumulators",
            drift_rates.len()
        )));
    }

    let mut density = accumulator_pdf(t, drift_rates[ref_idx], b, a, s)?;
    for (j, &v) in drift_rates.iter().enumerate() {
        if j == ref_idx {
            continue;
        }
        density *= 1.0 - accumulator_cdf(t, v, b, a, s)?;
    }
    Ok(density)
}

/// Evaluate [`defective_pdf`] over a grid of time points.
pub fn defective_pdf_grid(
    ts: &[f64],
    drift_rates: &[f64],
    b: f64,
    a: f64,
    s: f64,
    ref_idx: usize,
) -> Result<Vec<f64>> {
    ts.iter()
        .map(|&t| defective_pdf(t, drift_rates, b, a, s, ref_idx))
        .collect()
}
