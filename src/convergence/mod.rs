//! convergence — composable stop conditions for an iterative optimization loop.
//!
//! Purpose
//! -------
//! Decide, once per completed iteration, whether an optimization loop should
//! terminate before its hard iteration cap. Criteria extract scalar metrics
//! from an [`OptRecord`](crate::record::OptRecord), compare them against
//! limits or against each other, and compose with short-circuiting OR
//! semantics. A fired criterion yields a short message the loop surfaces in
//! its final status report.
//!
//! Key behaviors
//! -------------
//! - Express outcomes as the explicit two-case [`Signal`]
//!   (`NotConverged | Converged(message)`) instead of a nullable string.
//! - Construct threshold criteria with [`ValueBelow`] and
//!   improvement-stagnation criteria with [`DeltaBelow`]; both fix all
//!   configuration (limit, specs, name, sidedness) at construction time.
//! - Treat "not enough history yet" as a first-class condition:
//!   [`DeltaBelow`] suppresses an extraction failure only when *exactly
//!   one* of its two values is unresolvable, and re-raises otherwise.
//! - Provide the pre-named monotonicity-loss checks
//!   ([`monotonic_error`], [`monotonic_fidelity`]) and the ordered
//!   [`AnyOf`] combinator.
//!
//! Invariants & assumptions
//! ------------------------
//! - Criteria are pure reads of the record; they hold no mutable state and
//!   their results are idempotent for an unmutated record.
//! - Limits are finite and parsed once, at construction
//!   ([`Limit`]); extracted values are validated finite at resolution
//!   ([`ValueSpec::resolve`]).
//! - All comparisons are strict (`<`).
//!
//! Conventions
//! -----------
//! - Fired messages read `"{name} < {limit}"`, with the limit rendered in
//!   its original spelling. The message has no control meaning; only the
//!   [`Signal`] case does.
//! - Default value specs point at the last and second-to-last entries of
//!   the [`INFO_VALS`](crate::record::INFO_VALS) series.
//! - Errors bubble up as [`ConvResult`]/[`ConvError`]; this module never
//!   panics and performs no I/O.
//!
//! Downstream usage
//! ----------------
//! - The loop builds one criterion (often an [`AnyOf`]) up front, calls
//!   [`Criterion::check`] after updating the record each iteration, stops
//!   on a converged signal, and treats an `Err` according to its own
//!   policy — this layer always either returns a clean signal or raises,
//!   never silently defaults.
//! - Ad-hoc conditions plug in as bare closures (any
//!   `Fn(&OptRecord) -> ConvResult<Signal>` is a [`Criterion`]) or via a
//!   custom [`ValueSpec`].
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules pin the threshold boundary, the
//!   missing-data gate branch by branch, the fixed monotonicity messages,
//!   and the combinator's ordering and short-circuit guarantees.
//! - `tests/integration_convergence_pipeline.rs` drives a simulated loop
//!   through record, functionals, and criteria together.

pub mod combinators;
pub mod criteria;
pub mod errors;
pub mod limit;
pub mod monotonic;
pub mod signal;
pub mod spec;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::combinators::AnyOf;
pub use self::criteria::{Criterion, DeltaBelow, ValueBelow};
pub use self::errors::{ConvError, ConvResult};
pub use self::limit::Limit;
pub use self::monotonic::{
    check_monotonic_error, check_monotonic_fidelity, monotonic_error, monotonic_fidelity,
};
pub use self::signal::Signal;
pub use self::spec::ValueSpec;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use qoc_convergence::convergence::prelude::*;
//
// to import the main convergence surface in a single line.

pub mod prelude {
    pub use super::combinators::AnyOf;
    pub use super::criteria::{Criterion, DeltaBelow, ValueBelow};
    pub use super::errors::{ConvError, ConvResult};
    pub use super::limit::Limit;
    pub use super::monotonic::{check_monotonic_error, check_monotonic_fidelity};
    pub use super::signal::Signal;
    pub use super::spec::ValueSpec;
}
