//! Stochastic race simulator: one (choice, RT) draw per call.
//!
//! Each accumulator rises linearly from a shared random start point toward
//! its threshold; the first to arrive determines the choice and the reaction
//! time. Callers own the generator for reproducibility (seed a [`StdRng`]
//! and reuse it across trials); [`simulate_trial`] instead creates an
//! ephemeral generator scoped to the call, never a shared global.
//!
//! [`StdRng`]: rand::rngs::StdRng

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Decision thresholds for a race: one shared value broadcast to every
/// accumulator, or one value per accumulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Thresholds {
    /// Single threshold shared by all accumulators.
    Shared(f64),
    /// Per-accumulator thresholds; length must match the drift-rate count.
    PerAccumulator(Vec<f64>),
}

impl Thresholds {
    /// Normalize to one finite positive threshold per accumulator.
    fn resolve(&self, n_accumulators: usize) -> Result<Vec<f64>> {
        let out = match self {
            Thresholds::Shared(b) => vec![*b; n_accumulators],
            Thresholds::PerAccumulator(bs) => {
                if bs.len() != n_accumulators {
                    return Err(Error::InvalidArgument(format!(
                        "thresholds/drift-rates length mismatch: {} vs {}",
                        bs.len(),
                        n_accumulators
                    )));
                }
                bs.clone()
            }
        };
        for &b in &out {
            if !b.is_finite() || b <= 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "thresholds must be finite and > 0, got {b}"
                )));
            }
        }
        Ok(out)
    }
}

/// Outcome of one simulated race.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Index of the winning accumulator, in `[0, n_accumulators)`.
    pub choice: usize,
    /// Reaction time of the winning accumulator (includes `t0`).
    pub rt: f64,
}

/// Simulate one LBA trial with a caller-owned generator.
///
/// The race:
/// 1. When `s > 0`, each drift rate is perturbed by an independent `N(0, s)`
///    draw; when `s == 0` the perturbation step is skipped entirely and
///    consumes no randomness.
/// 2. One start point `k ~ U[0, A]` (closed interval, upper bound included)
///    is shared by every accumulator in the race.
/// 3. Accumulator `i` finishes at `(b_i - k)/v_i + t0`. A perturbed drift
///    `<= 0` never reaches threshold and is treated as finishing at `+∞`.
/// 4. The earliest finisher wins: `choice` is its index, `rt` its time.
///
/// Fails with [`Error::Computation`] when no accumulator finishes, i.e.
/// every perturbed drift rate came out `<= 0`.
pub fn simulate_trial_with<R: Rng + ?Sized>(
    drift_rates: &[f64],
    thresholds: &Thresholds,
    a: f64,
    t0: f64,
    s: f64,
    rng: &mut R,
) -> Result<Trial> {
    if drift_rates.is_empty() {
        return Err(Error::InvalidArgument("drift_rates must be non-empty".to_string()));
    }
    if drift_rates.iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidArgument("drift rates must be finite".to_string()));
    }
    if !a.is_finite() || a < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "start-point bound A must be finite and >= 0, got {a}"
        )));
    }
    if !t0.is_finite() || t0 < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "non-decision time t0 must be finite and >= 0, got {t0}"
        )));
    }
    if !s.is_finite() || s < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "drift noise SD s must be finite and >= 0, got {s}"
        )));
    }
    let bs = thresholds.resolve(drift_rates.len())?;

    let drifts: Vec<f64> = if s > 0.0 {
        let noise = Normal::new(0.0, s).map_err(|e| {
            Error::Computation(format!("failed to construct drift-noise distribution: {e}"))
        })?;
        drift_rates.iter().map(|&v| v + noise.sample(rng)).collect()
    } else {
        drift_rates.to_vec()
    };

    let k = rng.random_range(0.0..=a);

    let mut choice = 0;
    let mut rt = f64::INFINITY;
    for (i, (&v, &b)) in drifts.iter().zip(&bs).enumerate() {
        let finish = if v > 0.0 { (b - k) / v + t0 } else { f64::INFINITY };
        if finish < rt {
            rt = finish;
            choice = i;
        }
    }
    if !rt.is_finite() {
        return Err(Error::Computation(
            "no accumulator reached threshold (all perturbed drift rates <= 0)".to_string(),
        ));
    }
    Ok(Trial { choice, rt })
}

/// Simulate one LBA trial with an ephemeral generator scoped to this call.
///
/// See [`simulate_trial_with`] for the race semantics and for reproducible
/// simulation with a caller-owned seeded generator.
pub fn simulate_trial(
    drift_rates: &[f64],
    thresholds: &Thresholds,
    a: f64,
    t0: f64,
    s: f64,
) -> Result<Trial> {
    simulate_trial_with(drift_rates, thresholds, a, t0, s, &mut rand::rng())
}
