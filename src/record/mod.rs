//! record — append-only history of scalar metrics for an optimization run.
//!
//! Purpose
//! -------
//! Hold the per-iteration scalar metrics (cost functional values, fidelity
//! measures, iteration timings) that an iterative optimization loop
//! accumulates, and expose read-only queries against them. The convergence
//! layer evaluates its criteria against this record once per completed
//! iteration.
//!
//! Key behaviors
//! -------------
//! - Store any number of named series ([`OptRecord::push`]); a series is
//!   created on first push and only ever appended to afterwards.
//! - Resolve single entries with Python-style indexing
//!   ([`OptRecord::value_at`]): negative positions count from the end, so
//!   `-1` is the most recent value and `-2` the one before it.
//! - Report unresolvable queries as [`RecordError`], the catchable
//!   "not enough history / unknown series" class that the delta criterion's
//!   missing-data gate relies on.
//! - Track the iteration count and carry the final convergence message once
//!   the loop decides to stop ([`OptRecord::finalize`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Series are append-only: no mutator removes, reorders, or overwrites
//!   entries. Convergence criteria take `&OptRecord` and cannot mutate.
//! - Exactly one writer (the loop) appends between criterion evaluations;
//!   evaluation never overlaps a write, so no synchronization is needed.
//! - Values are stored as given; finiteness is checked at extraction time by
//!   the convergence layer, not on insertion.
//!
//! Conventions
//! -----------
//! - The conventional series for the monitored figure of merit is
//!   [`INFO_VALS`]; the default value specs of the convergence criteria
//!   point at it. Any other name works for custom specs.
//! - `value_at` is the only fallible query; `series`/`len` return
//!   `Option`/`0` for unknown names so that exploratory code stays terse.
//!
//! Downstream usage
//! ----------------
//! - The optimization loop owns the record mutably, calls `push`/`push_info`
//!   and `record_iteration` each iteration, then hands `&OptRecord` to a
//!   [`Criterion`](crate::convergence::Criterion).
//! - On a truthy signal the loop stores the message via `finalize` and
//!   returns the frozen record to the caller.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover indexing (positive, negative, out of range),
//!   series creation, and the error payloads.
//! - The integration test drives a full loop against the record.

pub mod errors;

pub use self::errors::{RecordError, RecordResult};

use std::collections::HashMap;

/// Conventional series name for the monitored figure of merit.
///
/// The default value specs of [`ValueBelow`](crate::convergence::ValueBelow)
/// and [`DeltaBelow`](crate::convergence::DeltaBelow) extract from this
/// series.
pub const INFO_VALS: &str = "info_vals";

/// Append-only record of named scalar series for one optimization run.
///
/// Created empty at the start of a run, appended to once per iteration by
/// the loop, and frozen (via [`OptRecord::finalize`]) when the run ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptRecord {
    series: HashMap<String, Vec<f64>>,
    iterations: usize,
    message: Option<String>,
}

impl OptRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the named series, creating the series on first use.
    pub fn push(&mut self, series: &str, value: f64) {
        self.series.entry(series.to_string()).or_default().push(value);
    }

    /// Append `value` to the [`INFO_VALS`] series.
    pub fn push_info(&mut self, value: f64) {
        self.push(INFO_VALS, value);
    }

    /// Borrow a full series, or `None` if no value was ever pushed to it.
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    /// Length of the named series; `0` for unknown names.
    pub fn len(&self, name: &str) -> usize {
        self.series.get(name).map_or(0, Vec::len)
    }

    /// `true` if nothing was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Resolve a single entry with Python-style indexing.
    ///
    /// Negative `position` counts from the end of the series (`-1` is the
    /// last entry); non-negative positions count from the start.
    ///
    /// # Errors
    /// - [`RecordError::SeriesNotFound`] for an unknown series name.
    /// - [`RecordError::PositionOutOfRange`] when the series is too short
    ///   for the requested position.
    pub fn value_at(&self, name: &str, position: isize) -> RecordResult<f64> {
        let series = self
            .series
            .get(name)
            .ok_or_else(|| RecordError::SeriesNotFound { name: name.to_string() })?;
        let len = series.len();
        // checked_add keeps pathological positions (isize::MIN) in the
        // error path instead of overflowing.
        let index =
            if position < 0 { (len as isize).checked_add(position) } else { Some(position) };
        match index {
            Some(i) if (0..len as isize).contains(&i) => Ok(series[i as usize]),
            _ => Err(RecordError::PositionOutOfRange {
                series: name.to_string(),
                position,
                len,
            }),
        }
    }

    /// Mark one more completed iteration.
    pub fn record_iteration(&mut self) {
        self.iterations += 1;
    }

    /// Number of completed iterations recorded so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Store the final status message when the run terminates.
    pub fn finalize(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// The final status message, once set by the loop.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Names of all recorded series, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}
