//! Linear Ballistic Accumulator (LBA) model of choice and reaction time.
//!
//! Two cooperating groups of pure functions share one parameter set:
//! - a stochastic race simulator ([`simulate_trial_with`] /
//!   [`simulate_trial`]) drawing one (choice, RT) sample per call
//! - the closed-form finishing-time distribution family:
//!   single-accumulator [`accumulator_pdf`] / [`accumulator_cdf`], the
//!   race-aware [`defective_pdf`], and the discrete-integration helpers
//!   [`cdf_from_defective_pdf`] / [`cdf_from_pdf`]
//!
//! All functions are pure: the only state is the caller-owned random
//! generator, so concurrent use is safe as long as each caller supplies its
//! own generator instance.
//!
//! # Parameters
//! - `v` — drift rate, one per accumulator (evidence accumulation speed)
//! - `b` — decision threshold, per accumulator or shared ([`Thresholds`])
//! - `A` — upper bound of the uniform start-point distribution `k ~ U[0, A]`
//! - `t0` — non-decision time added to every finish time
//! - `s` — between-trial SD of Gaussian drift-rate noise

pub mod accumulator;
pub mod defective;
pub mod error;
pub mod integrate;
pub mod math;
pub mod simulate;

pub use accumulator::{accumulator_cdf, accumulator_cdf_grid, accumulator_pdf, accumulator_pdf_grid};
pub use defective::{defective_pdf, defective_pdf_grid};
pub use error::{Error, Result};
pub use integrate::{cdf_from_defective_pdf, cdf_from_pdf};
pub use simulate::{simulate_trial, simulate_trial_with, Thresholds, Trial};
