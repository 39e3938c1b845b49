//! functionals — fidelity measures and error functionals for the loop.
//!
//! Purpose
//! -------
//! Turn the complex target-state overlaps an optimization produces each
//! iteration into the scalar figures of merit the convergence layer
//! monitors. The loop evaluates one of these after propagating its
//! objectives and records the value; the criteria in
//! [`convergence`](crate::convergence) never see overlaps, only the
//! recorded scalars.
//!
//! Key behaviors
//! -------------
//! - Weighted averaging of overlaps ([`f_tau`]) and the three standard
//!   fidelity conventions built on it: summed absolute-square ([`f_ss`]),
//!   square-modulus ([`f_sm`]), and real-part ([`f_re`]).
//! - Matching error functionals ([`j_t_ss`], [`j_t_sm`], [`j_t_re`]) as
//!   `1 − F`, the quantities a minimizing loop typically records.
//! - Input validation with a dedicated error enum
//!   ([`errors::FunctionalError`]); no panics.
//!
//! Conventions
//! -----------
//! - Per-objective weights are optional and never renormalized; callers
//!   keep them summing to the number of objectives.
//! - State propagation, χ-state construction, and gate fidelities live
//!   with the loop and its solver backend, not here; this module only
//!   reduces overlaps to scalars.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`overlaps`] pin reference values and validation
//!   branches; the integration test records `j_t_re` outputs and runs the
//!   convergence layer over them.

pub mod errors;
pub mod overlaps;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{FunctionalError, FunctionalResult};
pub use self::overlaps::{f_re, f_sm, f_ss, f_tau, j_t_re, j_t_sm, j_t_ss};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{FunctionalError, FunctionalResult};
    pub use super::overlaps::{f_re, f_sm, f_ss, f_tau, j_t_re, j_t_sm, j_t_ss};
}
