//! functionals::overlaps — scalar figures of merit from target-state overlaps.
//!
//! Purpose
//! -------
//! Compute the standard fidelity measures and their error functionals from
//! the complex overlaps `τ_i = ⟨Ψ_i(T)|Ψ_i^tgt⟩` of an optimization's
//! objectives. These are the scalars a loop typically appends to the
//! record's `info_vals` series for the convergence layer to watch: a
//! `J_T` variant with [`ValueBelow`](crate::convergence::ValueBelow) and
//! [`monotonic_error`](crate::convergence::monotonic_error), or an `F`
//! variant with [`monotonic_fidelity`](crate::convergence::monotonic_fidelity).
//!
//! Key behaviors
//! -------------
//! - [`f_tau`]: weighted average of the raw complex overlaps,
//!   `f_τ = (1/N) Σ w_i τ_i`.
//! - [`f_ss`] / [`j_t_ss`]: summed absolute-square fidelity
//!   `F_ss = (1/N) Σ w_i |τ_i|²` in `[0, 1]`, and `J_T,ss = 1 − F_ss`.
//! - [`f_sm`] / [`j_t_sm`]: square-modulus fidelity `F_sm = |f_τ|²` in
//!   `[0, 1]`, and `J_T,sm = 1 − F_sm`.
//! - [`f_re`] / [`j_t_re`]: real-part fidelity `F_re = Re[f_τ]` in
//!   `[−1, 1]`, and `J_T,re = 1 − F_re`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Overlaps are assumed to lie in the complex unit disk; nothing here
//!   renormalizes them.
//! - Weights, when given, pair one-to-one with the overlaps and are finite;
//!   they are *not* normalized here. Caller convention: weights sum to the
//!   number of objectives, so the fidelities keep their nominal ranges.
//! - `F_re` can be negative for mixed states; callers comparing it against
//!   thresholds should prefer `F_sm`/`F_ss` in that regime.
//!
//! Conventions
//! -----------
//! - Inputs are `ndarray` views (`ArrayView1`), following the crate's
//!   vector representation; `None` weights mean `w_i = 1`.
//! - All functions validate before computing and return
//!   [`FunctionalResult`]; none panic.

use ndarray::ArrayView1;
use num_complex::Complex64;

use crate::functionals::errors::{FunctionalError, FunctionalResult};

fn validate(
    tau_vals: ArrayView1<'_, Complex64>, weights: Option<ArrayView1<'_, f64>>,
) -> FunctionalResult<()> {
    if tau_vals.is_empty() {
        return Err(FunctionalError::NoTauVals);
    }
    if let Some(w) = weights {
        if w.len() != tau_vals.len() {
            return Err(FunctionalError::WeightLengthMismatch {
                expected: tau_vals.len(),
                actual: w.len(),
            });
        }
        for (index, &value) in w.iter().enumerate() {
            if !value.is_finite() {
                return Err(FunctionalError::InvalidWeight { index, value });
            }
        }
    }
    Ok(())
}

/// Weighted average of the complex overlaps, `f_τ = (1/N) Σ w_i τ_i`.
///
/// # Errors
/// [`FunctionalError::NoTauVals`] for an empty input;
/// [`FunctionalError::WeightLengthMismatch`] / [`FunctionalError::InvalidWeight`]
/// for malformed weights.
pub fn f_tau(
    tau_vals: ArrayView1<'_, Complex64>, weights: Option<ArrayView1<'_, f64>>,
) -> FunctionalResult<Complex64> {
    validate(tau_vals, weights)?;
    let n = tau_vals.len() as f64;
    let sum = match weights {
        Some(w) => tau_vals.iter().zip(w.iter()).map(|(&tau, &wi)| tau * wi).sum::<Complex64>(),
        None => tau_vals.iter().sum::<Complex64>(),
    };
    Ok(sum / n)
}

/// Summed absolute-square fidelity, `F_ss = (1/N) Σ w_i |τ_i|² ∈ [0, 1]`.
pub fn f_ss(
    tau_vals: ArrayView1<'_, Complex64>, weights: Option<ArrayView1<'_, f64>>,
) -> FunctionalResult<f64> {
    validate(tau_vals, weights)?;
    let n = tau_vals.len() as f64;
    let sum = match weights {
        Some(w) => tau_vals.iter().zip(w.iter()).map(|(&tau, &wi)| wi * tau.norm_sqr()).sum::<f64>(),
        None => tau_vals.iter().map(|tau| tau.norm_sqr()).sum::<f64>(),
    };
    Ok(sum / n)
}

/// Summed absolute-square error functional, `J_T,ss = 1 − F_ss ∈ [0, 1]`.
pub fn j_t_ss(
    tau_vals: ArrayView1<'_, Complex64>, weights: Option<ArrayView1<'_, f64>>,
) -> FunctionalResult<f64> {
    Ok(1.0 - f_ss(tau_vals, weights)?)
}

/// Square-modulus fidelity, `F_sm = |f_τ|² ∈ [0, 1]`.
pub fn f_sm(
    tau_vals: ArrayView1<'_, Complex64>, weights: Option<ArrayView1<'_, f64>>,
) -> FunctionalResult<f64> {
    Ok(f_tau(tau_vals, weights)?.norm_sqr())
}

/// Square-modulus error functional, `J_T,sm = 1 − F_sm ∈ [0, 1]`.
pub fn j_t_sm(
    tau_vals: ArrayView1<'_, Complex64>, weights: Option<ArrayView1<'_, f64>>,
) -> FunctionalResult<f64> {
    Ok(1.0 - f_sm(tau_vals, weights)?)
}

/// Real-part fidelity, `F_re = Re[f_τ] ∈ [−1, 1]`.
pub fn f_re(
    tau_vals: ArrayView1<'_, Complex64>, weights: Option<ArrayView1<'_, f64>>,
) -> FunctionalResult<f64> {
    Ok(f_tau(tau_vals, weights)?.re)
}

/// Real-part error functional, `J_T,re = 1 − F_re ∈ [0, 2]`.
pub fn j_t_re(
    tau_vals: ArrayView1<'_, Complex64>, weights: Option<ArrayView1<'_, f64>>,
) -> FunctionalResult<f64> {
    Ok(1.0 - f_re(tau_vals, weights)?)
}
