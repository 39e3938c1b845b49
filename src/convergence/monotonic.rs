//! convergence::monotonic — loss-of-monotonicity stop conditions.
//!
//! Krotov-style updates converge monotonically in the continuous limit, but
//! time discretization (or a too-small step-size penalty) can break that.
//! These criteria stop the optimization as soon as monotonicity is lost:
//! they *fire on failure*, not on success, and the loop surfaces their
//! message as the reason for the early stop.
//!
//! Both are fixed [`DeltaBelow`] instances over the [`INFO_VALS`] series
//! with limit `0` and signed deltas; they add no behavior of their own, so
//! the missing-data gate applies unchanged (a single recorded value passes
//! silently).

use crate::convergence::criteria::{Criterion, DeltaBelow};
use crate::convergence::errors::ConvResult;
use crate::convergence::limit::Limit;
use crate::convergence::signal::Signal;
use crate::convergence::spec::ValueSpec;
use crate::record::{OptRecord, INFO_VALS};

/// Criterion that fires when the tracked error stops decreasing.
///
/// The delta is `previous - current`, which stays positive while the error
/// shrinks; it drops below `0` exactly when the newest value failed to
/// improve on the one before it. Fired message:
/// `"Loss of monotonic convergence; error decrease < 0"`.
pub fn monotonic_error() -> DeltaBelow {
    DeltaBelow::new(
        Limit::zero(),
        ValueSpec::second_to_last(INFO_VALS),
        ValueSpec::last(INFO_VALS),
        false,
        Some("Loss of monotonic convergence; error decrease"),
    )
}

/// Criterion that fires when the tracked fidelity stops increasing.
///
/// The delta is `current - previous`, positive while the fidelity grows.
/// Fired message:
/// `"Loss of monotonic convergence; fidelity increase < 0"`.
pub fn monotonic_fidelity() -> DeltaBelow {
    DeltaBelow::new(
        Limit::zero(),
        ValueSpec::last(INFO_VALS),
        ValueSpec::second_to_last(INFO_VALS),
        false,
        Some("Loss of monotonic convergence; fidelity increase"),
    )
}

/// One-shot form of [`monotonic_error`], for callers that do not keep a
/// criterion around.
pub fn check_monotonic_error(record: &OptRecord) -> ConvResult<Signal> {
    monotonic_error().check(record)
}

/// One-shot form of [`monotonic_fidelity`].
pub fn check_monotonic_fidelity(record: &OptRecord) -> ConvResult<Signal> {
    monotonic_fidelity().check(record)
}
