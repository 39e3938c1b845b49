//! Integration tests for the record → functionals → convergence pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end flow a real optimization loop would drive:
//!   evaluate a figure of merit from overlaps, append it to the history
//!   record, and ask a composed criterion whether to stop.
//! - Exercise realistic metric trajectories (geometric error decay, loss
//!   of monotonicity, stagnation) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `record::OptRecord`:
//!   - Series population, iteration counting, and finalization.
//! - `functionals`:
//!   - `j_t_re` as the recorded figure of merit.
//! - `convergence`:
//!   - `ValueBelow` and `DeltaBelow` with parsed limits and custom names.
//!   - `monotonic_error` / `monotonic_fidelity` as loss-of-monotonicity
//!     stop conditions inside a composed check.
//!   - `AnyOf` ordering: the first satisfied condition's message is the
//!     one surfaced.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of extraction errors, limit parsing, and the
//!   missing-data gate — these are covered by unit tests in the source
//!   modules.
//! - Any actual pulse-update mathematics; the "optimizer" here is a
//!   scripted metric trajectory.

use ndarray::{array, Array1};
use num_complex::Complex64;
use qoc_convergence::convergence::{
    monotonic_error, monotonic_fidelity, AnyOf, Criterion, DeltaBelow, Limit, Signal, ValueBelow,
    ValueSpec,
};
use qoc_convergence::functionals::j_t_re;
use qoc_convergence::record::{OptRecord, INFO_VALS};

/// Overlaps for a two-objective run whose common error is `err`: both
/// objectives sit at `τ = 1 − err` on the real axis, so `J_T,re = err` up
/// to rounding.
fn overlaps_for_error(err: f64) -> Array1<Complex64> {
    array![Complex64::new(1.0 - err, 0.0), Complex64::new(1.0 - err, 0.0)]
}

/// The composed stop condition a typical minimizing loop would use:
/// functional below threshold, or improvement stagnated, or monotonic
/// convergence lost.
fn standard_check() -> AnyOf {
    AnyOf::new()
        .or(ValueBelow::new(
            Limit::parse("1e-3").unwrap(),
            ValueSpec::last(INFO_VALS),
            Some("J_T"),
        ))
        .or(DeltaBelow::new(
            Limit::parse("1e-8").unwrap(),
            ValueSpec::last(INFO_VALS),
            ValueSpec::second_to_last(INFO_VALS),
            true,
            Some("ΔJ_T"),
        ))
        .or(monotonic_error())
}

/// Purpose
/// -------
/// A cleanly converging run: the error halves every iteration, so the
/// threshold criterion fires first (long before the stagnation delta), the
/// loop stops early, and the record carries the threshold message.
#[test]
fn geometric_decay_stops_on_threshold() {
    let check = standard_check();
    let mut record = OptRecord::new();
    let max_iter = 50;

    let mut stop_message = None;
    for k in 0..max_iter {
        // "Propagate", evaluate the functional, and update the record.
        let err = 0.5_f64.powi(k);
        let tau = overlaps_for_error(err);
        let j_t = j_t_re(tau.view(), None).unwrap();
        record.push_info(j_t);
        record.record_iteration();

        match check.check(&record).unwrap() {
            Signal::Converged(msg) => {
                stop_message = Some(msg);
                break;
            }
            Signal::NotConverged => {}
        }
    }

    let msg = stop_message.expect("run must converge before the iteration cap");
    assert_eq!(msg, "J_T < 1e-3");

    // 0.5^k first drops below 1e-3 at k = 10 (9.77e-4); iterations 0..=10
    // have completed by then.
    assert_eq!(record.iterations(), 11);

    record.finalize(msg);
    assert_eq!(record.message(), Some("J_T < 1e-3"));
}

/// Purpose
/// -------
/// A run that improves and then regresses: the monotonicity-loss criterion
/// fires before either threshold, and its fixed message is the one
/// surfaced (ordering: it is the only satisfied member).
#[test]
fn monotonicity_loss_aborts_run() {
    let check = standard_check();
    let mut record = OptRecord::new();

    // Decreasing prefix, then an increase at iteration 3.
    let trajectory = [9e-1, 5e-1, 2e-1, 3e-1];
    let mut stop_message = None;
    for &j_t in &trajectory {
        record.push_info(j_t);
        record.record_iteration();
        if let Signal::Converged(msg) = check.check(&record).unwrap() {
            stop_message = Some(msg);
            break;
        }
    }

    assert_eq!(
        stop_message.as_deref(),
        Some("Loss of monotonic convergence; error decrease < 0")
    );
    assert_eq!(record.iterations(), 4);
}

/// Purpose
/// -------
/// A stagnating run: the error plateaus far above the threshold, so the
/// delta criterion is the one that fires.
#[test]
fn stagnation_stops_on_delta() {
    let check = standard_check();
    let mut record = OptRecord::new();

    // Strictly decreasing (monotonicity holds) but the final step is ~1e-9,
    // below the 1e-8 stagnation limit, while J_T is still ~0.4.
    let trajectory = [9e-1, 5e-1, 0.4 + 1e-6, 0.4 + 1e-7, 0.4 + 9.9e-8];
    let mut stop_message = None;
    for &j_t in &trajectory {
        record.push_info(j_t);
        record.record_iteration();
        if let Signal::Converged(msg) = check.check(&record).unwrap() {
            stop_message = Some(msg);
            break;
        }
    }

    assert_eq!(stop_message.as_deref(), Some("ΔJ_T < 1e-8"));
}

/// Purpose
/// -------
/// Ordering within `AnyOf`: when several members would fire on the same
/// record, the first in construction order supplies the message.
#[test]
fn first_satisfied_member_wins() {
    // Both members fire on a record whose last value is below both limits
    // and smaller than its predecessor by less than 1e-1.
    let mut record = OptRecord::new();
    record.push_info(5e-3);
    record.push_info(1e-3);

    let value_first = AnyOf::new()
        .or(ValueBelow::new(Limit::parse("1e-2").unwrap(), ValueSpec::default(), Some("J_T")))
        .or(DeltaBelow::new(
            Limit::parse("1e-1").unwrap(),
            ValueSpec::last(INFO_VALS),
            ValueSpec::second_to_last(INFO_VALS),
            true,
            Some("ΔJ_T"),
        ));
    assert_eq!(
        value_first.check(&record).unwrap().message(),
        Some("J_T < 1e-2")
    );

    let delta_first = AnyOf::new()
        .or(DeltaBelow::new(
            Limit::parse("1e-1").unwrap(),
            ValueSpec::last(INFO_VALS),
            ValueSpec::second_to_last(INFO_VALS),
            true,
            Some("ΔJ_T"),
        ))
        .or(ValueBelow::new(Limit::parse("1e-2").unwrap(), ValueSpec::default(), Some("J_T")));
    assert_eq!(
        delta_first.check(&record).unwrap().message(),
        Some("ΔJ_T < 1e-1")
    );
}

/// Purpose
/// -------
/// A maximizing loop records a fidelity instead of an error: the fidelity
/// monotonicity check passes while the fidelity grows and fires on the
/// first decrease, even on the very first iteration's sparse record.
#[test]
fn fidelity_run_uses_fidelity_variant() {
    let check = monotonic_fidelity();
    let mut record = OptRecord::new();

    record.push_info(0.0);
    assert_eq!(check.check(&record).unwrap(), Signal::NotConverged);
    record.push_info(0.2);
    assert_eq!(check.check(&record).unwrap(), Signal::NotConverged);
    record.push_info(0.15);
    assert_eq!(
        check.check(&record).unwrap().message(),
        Some("Loss of monotonic convergence; fidelity increase < 0")
    );
}
