//! convergence::criteria — threshold and delta convergence criteria.
//!
//! Purpose
//! -------
//! Define the [`Criterion`] seam every stop condition implements, plus the
//! two constructors the rest of the layer is built from: [`ValueBelow`]
//! ("the tracked value fell below a limit") and [`DeltaBelow`] ("the change
//! between two tracked values fell below a limit"). Both are configured
//! entirely at construction time and hold no mutable state afterwards.
//!
//! Key behaviors
//! -------------
//! - [`ValueBelow`]: resolve one value spec, compare strictly against the
//!   limit, and fire with `"{name} < {limit}"`. Extraction failures
//!   propagate uncaught; this criterion does not special-case missing data.
//! - [`DeltaBelow`]: resolve two specs, apply the missing-data
//!   exclusive-or gate (see below), then compare `v1 - v0` (optionally its
//!   magnitude) strictly against the limit.
//! - Missing-data gate: when exactly one of the two extractions fails with
//!   the missing-data class, the check passes silently — in the first
//!   iteration or two the "previous value" position legitimately does not
//!   exist yet. When *both* fail, the record cannot explain it by sparsity
//!   and the error captured last (the `spec0` side) is re-raised. Any
//!   failure outside the missing-data class propagates immediately from
//!   the side that produced it.
//!
//! Invariants & assumptions
//! ------------------------
//! - Criteria are pure reads: same record, same result
//!   ([`Criterion::check`] takes `&OptRecord`).
//! - Limits are finite by construction ([`Limit`]); resolved values are
//!   finite by extraction ([`ValueSpec::resolve`]), so the comparisons here
//!   are always well defined.
//! - Strict comparison (`<`) throughout; a value exactly at the limit does
//!   not fire.
//!
//! Conventions
//! -----------
//! - Names default to the spec label(s): `info_vals[-1]` for a threshold,
//!   `Δ(info_vals[-1],info_vals[-2])` for a delta.
//! - Closures are criteria too: any `Fn(&OptRecord) -> ConvResult<Signal>`
//!   implements [`Criterion`], for one-off checks that do not warrant a
//!   config struct.
//!
//! Downstream usage
//! ----------------
//! - The monotonicity checks in [`monotonic`](crate::convergence::monotonic)
//!   are fixed [`DeltaBelow`] instances.
//! - [`AnyOf`](crate::convergence::AnyOf) composes any mix of criteria with
//!   short-circuiting OR semantics.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin the threshold-crossing boundary, the delta
//!   sequence from the reference example, every branch of the missing-data
//!   gate, idempotence, and the generated names/messages.

use crate::convergence::errors::{ConvError, ConvResult};
use crate::convergence::limit::Limit;
use crate::convergence::signal::Signal;
use crate::convergence::spec::ValueSpec;
use crate::record::{OptRecord, INFO_VALS};

/// A convergence stop condition: a pure function of the record.
///
/// Implementations must not mutate any state observable across calls;
/// checking the same (unmutated) record twice yields the same result.
pub trait Criterion {
    /// Evaluate against the current record.
    ///
    /// # Errors
    /// Extraction or configuration failures, per the implementing type's
    /// propagation policy.
    fn check(&self, record: &OptRecord) -> ConvResult<Signal>;
}

/// Any matching closure is a criterion.
///
/// For stop conditions too ad-hoc for [`ValueBelow`]/[`DeltaBelow`], e.g.
/// iteration budgets or checks across several series.
impl<F> Criterion for F
where
    F: Fn(&OptRecord) -> ConvResult<Signal>,
{
    fn check(&self, record: &OptRecord) -> ConvResult<Signal> {
        self(record)
    }
}

/// Fires when the extracted value drops strictly below the limit.
#[derive(Debug, Clone)]
pub struct ValueBelow {
    limit: Limit,
    spec: ValueSpec,
    name: String,
}

impl ValueBelow {
    /// Build a threshold criterion.
    ///
    /// `name` defaults to the spec's label and is only used in the fired
    /// message, `"{name} < {limit}"`.
    pub fn new(limit: Limit, spec: ValueSpec, name: Option<&str>) -> Self {
        let name = name.map_or_else(|| spec.label(), str::to_string);
        Self { limit, spec, name }
    }

    /// Threshold on the last [`INFO_VALS`] entry.
    pub fn with_defaults(limit: Limit) -> Self {
        Self::new(limit, ValueSpec::default(), None)
    }

    /// Display name used in the fired message.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Criterion for ValueBelow {
    fn check(&self, record: &OptRecord) -> ConvResult<Signal> {
        let v = self.spec.resolve(record)?;
        if v < self.limit.value() {
            Ok(Signal::Converged(format!("{} < {}", self.name, self.limit)))
        } else {
            Ok(Signal::NotConverged)
        }
    }
}

/// One extraction attempt, kept as a value so the exclusive-or gate can
/// compare the two sides structurally instead of juggling control flow.
enum Extracted {
    Found(f64),
    Missing(ConvError),
}

/// Fires when `v1 - v0` (optionally its magnitude) drops strictly below the
/// limit.
#[derive(Debug, Clone)]
pub struct DeltaBelow {
    limit: Limit,
    spec1: ValueSpec,
    spec0: ValueSpec,
    absolute_value: bool,
    name: String,
}

impl DeltaBelow {
    /// Build a delta criterion.
    ///
    /// `spec1` supplies the newer value, `spec0` the older one. With
    /// `absolute_value` the magnitude `|v1 - v0|` is compared; without it
    /// the signed difference, which is how the monotonicity checks detect a
    /// move in the wrong direction. `name` defaults to
    /// `Δ({spec1},{spec0})`.
    pub fn new(
        limit: Limit, spec1: ValueSpec, spec0: ValueSpec, absolute_value: bool,
        name: Option<&str>,
    ) -> Self {
        let name = name
            .map_or_else(|| format!("Δ({},{})", spec1.label(), spec0.label()), str::to_string);
        Self { limit, spec1, spec0, absolute_value, name }
    }

    /// Absolute change between the last two [`INFO_VALS`] entries.
    pub fn with_defaults(limit: Limit) -> Self {
        Self::new(
            limit,
            ValueSpec::last(INFO_VALS),
            ValueSpec::second_to_last(INFO_VALS),
            true,
            None,
        )
    }

    /// Display name used in the fired message.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn extract(spec: &ValueSpec, record: &OptRecord) -> ConvResult<Extracted> {
        match spec.resolve(record) {
            Ok(v) => Ok(Extracted::Found(v)),
            Err(err) if err.is_missing_data() => Ok(Extracted::Missing(err)),
            Err(err) => Err(err),
        }
    }
}

impl Criterion for DeltaBelow {
    fn check(&self, record: &OptRecord) -> ConvResult<Signal> {
        let v1 = Self::extract(&self.spec1, record)?;
        let v0 = Self::extract(&self.spec0, record)?;
        let (v1, v0) = match (v1, v0) {
            // Exactly one side unresolvable: expected early-iteration
            // sparsity, pass the check.
            (Extracted::Missing(_), Extracted::Found(_))
            | (Extracted::Found(_), Extracted::Missing(_)) => return Ok(Signal::NotConverged),
            // Neither side resolvable: not explainable by sparsity alone,
            // re-raise the error captured last.
            (Extracted::Missing(_), Extracted::Missing(err0)) => return Err(err0),
            (Extracted::Found(v1), Extracted::Found(v0)) => (v1, v0),
        };
        let mut delta = v1 - v0;
        if self.absolute_value {
            delta = delta.abs();
        }
        if delta < self.limit.value() {
            Ok(Signal::Converged(format!("{} < {}", self.name, self.limit)))
        } else {
            Ok(Signal::NotConverged)
        }
    }
}
