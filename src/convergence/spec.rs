//! convergence::spec — declarative value extraction from the record.
//!
//! Purpose
//! -------
//! Describe *where* a criterion finds its scalar inside an
//! [`OptRecord`](crate::record::OptRecord), without committing the criterion
//! to a particular record layout. A [`ValueSpec`] is either an indexed entry
//! of a named series ("last `info_vals` value") or an arbitrary caller
//! closure for anything the indexed form cannot express.
//!
//! Key behaviors
//! -------------
//! - Resolve deterministically and without side effects
//!   ([`ValueSpec::resolve`]); unresolvable entry specs surface the
//!   record's missing-data error class unchanged.
//! - Validate that the resolved value is finite, raising
//!   [`ConvError::NonFiniteValue`] otherwise (a broken metric must not be
//!   silently compared).
//! - Carry a display label ([`ValueSpec::label`]) used for generated
//!   criterion names, e.g. `info_vals[-1]`.
//!
//! Conventions
//! -----------
//! - Positions follow the record's Python-style indexing: `-1` is the last
//!   entry, `-2` the one before it. The convergence defaults only ever use
//!   these two.
//! - Closure specs must supply their own label and should return
//!   missing-data errors (not panic) when the record is too short, if they
//!   want the delta criterion's sparsity gate to apply to them.

use std::fmt;
use std::sync::Arc;

use crate::convergence::errors::{ConvError, ConvResult};
use crate::record::{OptRecord, INFO_VALS};

/// Closure form of a value spec.
pub type ResolveFn = Arc<dyn Fn(&OptRecord) -> ConvResult<f64> + Send + Sync>;

/// Where to find one scalar inside an [`OptRecord`].
#[derive(Clone)]
pub enum ValueSpec {
    /// Entry of a named series at a (possibly negative) position.
    Entry { series: String, position: isize },
    /// Caller-supplied resolver with a display label.
    Custom { label: String, resolve: ResolveFn },
}

impl ValueSpec {
    /// Entry of `series` at `position` (negative counts from the end).
    pub fn entry(series: &str, position: isize) -> Self {
        ValueSpec::Entry { series: series.to_string(), position }
    }

    /// Last entry of `series`.
    pub fn last(series: &str) -> Self {
        Self::entry(series, -1)
    }

    /// Second-to-last entry of `series`.
    pub fn second_to_last(series: &str) -> Self {
        Self::entry(series, -2)
    }

    /// Arbitrary resolver with a display label.
    pub fn custom<F>(label: &str, resolve: F) -> Self
    where
        F: Fn(&OptRecord) -> ConvResult<f64> + Send + Sync + 'static,
    {
        ValueSpec::Custom { label: label.to_string(), resolve: Arc::new(resolve) }
    }

    /// Display label, used for generated criterion names.
    pub fn label(&self) -> String {
        match self {
            ValueSpec::Entry { series, position } => format!("{series}[{position}]"),
            ValueSpec::Custom { label, .. } => label.clone(),
        }
    }

    /// Resolve the spec against `record`.
    ///
    /// # Errors
    /// - The record's missing-data errors (series not found, position out
    ///   of range) for unresolvable entry specs, converted to [`ConvError`]
    ///   with payloads intact.
    /// - Whatever a custom resolver returns, unchanged.
    /// - [`ConvError::NonFiniteValue`] when the resolved value is NaN or
    ///   infinite.
    pub fn resolve(&self, record: &OptRecord) -> ConvResult<f64> {
        let value = match self {
            ValueSpec::Entry { series, position } => record.value_at(series, *position)?,
            ValueSpec::Custom { resolve, .. } => resolve.as_ref()(record)?,
        };
        if !value.is_finite() {
            return Err(ConvError::NonFiniteValue { label: self.label(), value });
        }
        Ok(value)
    }
}

impl Default for ValueSpec {
    /// Last entry of the conventional [`INFO_VALS`] series.
    fn default() -> Self {
        ValueSpec::last(INFO_VALS)
    }
}

impl fmt::Debug for ValueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSpec::Entry { series, position } => {
                f.debug_struct("Entry").field("series", series).field("position", position).finish()
            }
            ValueSpec::Custom { label, .. } => {
                f.debug_struct("Custom").field("label", label).finish_non_exhaustive()
            }
        }
    }
}
