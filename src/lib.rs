//! qoc_convergence — convergence evaluation for iterative optimal-control loops.
//!
//! Purpose
//! -------
//! Serve as the crate root for a small, pure in-process layer that decides
//! when an iterative pulse-optimization loop should stop early. An external
//! optimizer appends scalar metrics (cost functional values, fidelities) to
//! a history record each iteration; this crate inspects that record through
//! composable convergence criteria and answers "keep going" or "stop, and
//! here is why".
//!
//! Key behaviors
//! -------------
//! - Re-export the three domain modules as the public crate surface:
//!   [`record`] (the append-only history), [`convergence`] (criteria and
//!   combinators), and [`functionals`] (the fidelity/error scalars loops
//!   record).
//! - Keep the control signal explicit: criteria return
//!   [`Signal`](convergence::Signal), never a magic null, and fail loudly
//!   with typed errors when a metric is broken or a criterion
//!   misconfigured.
//!
//! Invariants & assumptions
//! ------------------------
//! - Single-threaded call-and-return semantics: the loop appends, then
//!   checks; nothing here blocks, spawns, or mutates shared state.
//! - The loop owns iteration control and its hard cap; this crate only
//!   answers the early-termination question.
//!
//! Conventions
//! -----------
//! - Each domain module carries its own error enum and result alias and a
//!   `prelude`; the crate-level [`prelude`] forwards all three.
//! - Vector inputs use `ndarray` views; complex overlaps use
//!   `num_complex::Complex64`.
//!
//! Downstream usage
//! ----------------
//! - A loop crate builds its stop condition once (usually an
//!   [`AnyOf`](convergence::AnyOf) over a threshold, a delta, and a
//!   monotonicity check), then per iteration: evaluate a functional,
//!   `push_info` the value, `record_iteration`, and `check`.
//! - On a converged signal the loop calls
//!   [`OptRecord::finalize`](record::OptRecord::finalize) with the message
//!   and returns the record to its caller.
//!
//! Testing notes
//! -------------
//! - Each source file carries its own unit tests;
//!   `tests/integration_convergence_pipeline.rs` exercises the full
//!   record → functional → criterion flow on a simulated run.

pub mod convergence;
pub mod functionals;
pub mod record;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use qoc_convergence::prelude::*;
//
// to import the whole public surface in a single line.

pub mod prelude {
    pub use crate::convergence::prelude::*;
    pub use crate::functionals::prelude::*;
    pub use crate::record::{OptRecord, RecordError, RecordResult, INFO_VALS};
}
