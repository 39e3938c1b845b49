//! record::errors — extraction-failure error type for the history record.
//!
//! Purpose
//! -------
//! Define the catchable "value not resolvable" error class for queries
//! against an [`OptRecord`](crate::record::OptRecord). Convergence criteria
//! distinguish this class (insufficient history, unknown series) from every
//! other failure, so it lives in its own enum rather than in the umbrella
//! convergence error type.
//!
//! Conventions
//! -----------
//! - Both variants mean "the requested value does not exist right now"; they
//!   carry enough payload (series name, requested position, current length)
//!   to diagnose a misconfigured spec from the message alone.
//! - Higher layers convert these into
//!   [`ConvError`](crate::convergence::errors::ConvError) via `From`, keeping
//!   the variant shape intact.

pub type RecordResult<T> = Result<T, RecordError>;

/// Failure to resolve a value inside an [`OptRecord`](crate::record::OptRecord).
///
/// Variants
/// --------
/// - `SeriesNotFound`: no series with the requested name has been recorded.
/// - `PositionOutOfRange`: the series exists but is too short for the
///   requested (possibly negative) position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    SeriesNotFound { name: String },
    PositionOutOfRange { series: String, position: isize, len: usize },
}

impl std::error::Error for RecordError {}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::SeriesNotFound { name } => {
                write!(f, "No series named '{name}' in the record")
            }
            RecordError::PositionOutOfRange { series, position, len } => {
                write!(f, "Position {position} out of range for series '{series}' of length {len}")
            }
        }
    }
}
