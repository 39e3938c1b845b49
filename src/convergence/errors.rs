//! convergence::errors — unified error surface for convergence criteria.
//!
//! Purpose
//! -------
//! Collect every failure a convergence criterion can produce into one enum,
//! [`ConvError`], with a common result alias [`ConvResult<T>`]. Record-level
//! extraction failures are flattened into dedicated variants (with a `From`
//! conversion) so that callers match on a single type.
//!
//! Key behaviors
//! -------------
//! - Flatten [`RecordError`] into [`ConvError::SeriesNotFound`] and
//!   [`ConvError::PositionOutOfRange`], preserving payloads.
//! - Classify the catchable extraction-failure kind via
//!   [`ConvError::is_missing_data`]; the delta criterion's exclusive-or gate
//!   suppresses exactly this kind, never anything else.
//! - Report construction-time configuration mistakes
//!   ([`ConvError::InvalidLimit`]) and broken metric values
//!   ([`ConvError::NonFiniteValue`]) loudly.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("limit must
//!   be finite", "position out of range") rather than internals.
//! - `ConvError` values are small, cheap to clone, and comparable, so tests
//!   can assert on exact variants.

use crate::record::RecordError;

/// Result alias for all fallible convergence operations.
pub type ConvResult<T> = Result<T, ConvError>;

/// ConvError — error conditions for convergence criteria.
///
/// Variants
/// --------
/// - `SeriesNotFound` / `PositionOutOfRange`
///   The value spec could not be resolved against the record. These two
///   form the *missing data* class: a delta criterion suppresses one of
///   them per check when the other side resolved (early-iteration
///   sparsity), and re-raises otherwise.
/// - `InvalidLimit`
///   A limit given as text did not parse to a finite float, or a numeric
///   limit was non-finite. Raised at construction time, never per call.
/// - `NonFiniteValue`
///   An extracted metric was NaN or ±∞. Not part of the missing-data
///   class; always propagates.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvError {
    // ---- Extraction (missing data) ----
    SeriesNotFound {
        name: String,
    },
    PositionOutOfRange {
        series: String,
        position: isize,
        len: usize,
    },

    // ---- Configuration ----
    /// Limit text or value does not describe a finite float.
    InvalidLimit {
        text: String,
        reason: &'static str,
    },

    // ---- Extracted values ----
    /// Resolved metric value must be finite.
    NonFiniteValue {
        label: String,
        value: f64,
    },
}

impl ConvError {
    /// `true` for the catchable extraction-failure class (spec unresolvable
    /// against the current record), the only kind the delta criterion's
    /// missing-data gate may suppress.
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            ConvError::SeriesNotFound { .. } | ConvError::PositionOutOfRange { .. }
        )
    }
}

impl std::error::Error for ConvError {}

impl std::fmt::Display for ConvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvError::SeriesNotFound { name } => {
                write!(f, "No series named '{name}' in the record")
            }
            ConvError::PositionOutOfRange { series, position, len } => {
                write!(f, "Position {position} out of range for series '{series}' of length {len}")
            }
            ConvError::InvalidLimit { text, reason } => {
                write!(f, "Invalid limit '{text}': {reason}")
            }
            ConvError::NonFiniteValue { label, value } => {
                write!(f, "Non-finite value {value} extracted by '{label}'")
            }
        }
    }
}

impl From<RecordError> for ConvError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::SeriesNotFound { name } => ConvError::SeriesNotFound { name },
            RecordError::PositionOutOfRange { series, position, len } => {
                ConvError::PositionOutOfRange { series, position, len }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The missing-data classification must cover exactly the two extraction
    // variants; a configuration or metric-value error is never suppressible.
    fn missing_data_classification() {
        assert!(ConvError::SeriesNotFound { name: "x".to_string() }.is_missing_data());
        assert!(
            ConvError::PositionOutOfRange { series: "x".to_string(), position: -2, len: 0 }
                .is_missing_data()
        );
        assert!(
            !ConvError::InvalidLimit { text: "abc".to_string(), reason: "unparseable" }
                .is_missing_data()
        );
        assert!(
            !ConvError::NonFiniteValue { label: "info_vals[-1]".to_string(), value: f64::NAN }
                .is_missing_data()
        );
    }

    #[test]
    // `From<RecordError>` must preserve the variant shape and payload.
    fn record_error_conversion() {
        let err: ConvError = RecordError::PositionOutOfRange {
            series: "info_vals".to_string(),
            position: -2,
            len: 1,
        }
        .into();
        assert_eq!(
            err,
            ConvError::PositionOutOfRange {
                series: "info_vals".to_string(),
                position: -2,
                len: 1,
            }
        );
    }
}
