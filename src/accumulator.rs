//! Closed-form finishing-time distribution of a single LBA accumulator.
//!
//! Brown & Heathcote formulation: an accumulator with mean drift rate `v`
//! (perturbed across trials by zero-mean Gaussian noise with SD `s`),
//! threshold `b`, and starting activation uniform on `[0, A]` reaches
//! threshold at a random time with the closed-form density/distribution
//! implemented here.
//!
//! # Domain conventions
//! The closed forms divide by `t*s` and by `A`, so `s`, `b` and `A` must be
//! finite and strictly positive; `s = 0` (deterministic drift) is the
//! simulator's regime, not this family's, and is rejected eagerly. At
//! `t <= 0` both functions return the limiting value `0.0`: no accumulator
//! can have finished at or before the race start.
//!
//! Note that the finishing-time distribution is itself defective whenever
//! the noisy drift can go negative: a trial drift `<= 0` never reaches
//! threshold, so `F(t) -> 1 - Φ(-v/s)` as `t -> ∞` rather than to 1.

use crate::error::{Error, Result};
use crate::math::{standard_normal_cdf, standard_normal_pdf};

fn validate_params(v: f64, b: f64, a: f64, s: f64) -> Result<()> {
    if !v.is_finite() {
        return Err(Error::InvalidArgument(format!("drift rate v must be finite, got {v}")));
    }
    if !b.is_finite() || b <= 0.0 {
        return Err(Error::InvalidArgument(format!("threshold b must be finite and > 0, got {b}")));
    }
    if !a.is_finite() || a <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "start-point bound A must be finite and > 0, got {a}"
        )));
    }
    if !s.is_finite() || s <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "drift noise SD s must be finite and > 0, got {s}"
        )));
    }
    Ok(())
}

/// Density of a single accumulator finishing exactly at time `t`.
///
/// `f(t) = (1/A)·[ -v·Φ(z1) + s·φ(z1) + v·Φ(z2) - s·φ(z2) ]` with
/// `z1 = (b-A-tv)/(ts)` and `z2 = (b-tv)/(ts)`.
///
/// Returns `0.0` for `t <= 0`. A tiny negative rounding residue (where the
/// true density is zero) is clamped to `0.0`.
pub fn accumulator_pdf(t: f64, v: f64, b: f64, a: f64, s: f64) -> Result<f64> {
    validate_params(v, b, a, s)?;
    if !t.is_finite() {
        return Err(Error::InvalidArgument(format!("time t must be finite, got {t}")));
    }
    if t <= 0.0 {
        return Ok(0.0);
    }

    let ts = t * s;
    let z1 = (b - a - t * v) / ts;
    let z2 = (b - t * v) / ts;
    let f = (-v * standard_normal_cdf(z1) + s * standard_normal_pdf(z1)
        + v * standard_normal_cdf(z2)
        - s * standard_normal_pdf(z2))
        / a;
    if !f.is_finite() {
        return Err(Error::Computation(format!(
            "non-finite density at t={t} (v={v}, b={b}, A={a}, s={s})"
        )));
    }
    Ok(f.max(0.0))
}

/// Probability that a single accumulator has finished by time `t`.
///
/// `F(t) = 1 + ((b-A-tv)/A)·Φ(z1) - ((b-tv)/A)·Φ(z2) + (ts/A)·φ(z1) - (ts/A)·φ(z2)`
/// with `z1 = (b-A-tv)/(ts)` and `z2 = (b-tv)/(ts)`.
///
/// Returns `0.0` for `t <= 0`; the result is clamped to `[0, 1]` against
/// rounding residue at the boundaries.
pub fn accumulator_cdf(t: f64, v: f64, b: f64, a: f64, s: f64) -> Result<f64> {
    validate_params(v, b, a, s)?;
    if !t.is_finite() {
        return Err(Error::InvalidArgument(format!("time t must be finite, got {t}")));
    }
    if t <= 0.0 {
        return Ok(0.0);
    }

    let ts = t * s;
    let u1 = b - a - t * v;
    let u2 = b - t * v;
    let z1 = u1 / ts;
    let z2 = u2 / ts;
    let f = 1.0 + (u1 / a) * standard_normal_cdf(z1) - (u2 / a) * standard_normal_cdf(z2)
        + (ts / a) * standard_normal_pdf(z1)
        - (ts / a) * standard_normal_pdf(z2);
    if !f.is_finite() {
        return Err(Error::Computation(format!(
            "non-finite cumulative probability at t={t} (v={v}, b={b}, A={a}, s={s})"
        )));
    }
    Ok(f.clamp(0.0, 1.0))
}

/// Evaluate [`accumulator_pdf`] over a grid of time points.
pub fn accumulator_pdf_grid(ts: &[f64], v: f64, b: f64, a: f64, s: f64) -> Result<Vec<f64>> {
    ts.iter().map(|&t| accumulator_pdf(t, v, b, a, s)).collect()
}

/// Evaluate [`accumulator_cdf`] over a grid of time points.
pub fn accumulator_cdf_grid(ts: &[f64], v: f64, b: f64, a: f64, s: f64) -> Result<Vec<f64>> {
    ts.iter().map(|&t| accumulator_cdf(t, v, b, a, s)).collect()
}
