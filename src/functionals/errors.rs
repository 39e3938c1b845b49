//! functionals::errors — error surface for figure-of-merit evaluation.
//!
//! Validation failures for the overlap functionals: absent inputs, weight
//! vectors of the wrong length, and non-finite weights. Kept separate from
//! the convergence errors; the two layers meet only through the scalar
//! values a loop records.

pub type FunctionalResult<T> = Result<T, FunctionalError>;

/// FunctionalError — invalid inputs to an overlap functional.
///
/// Variants
/// --------
/// - `NoTauVals`: an empty overlap vector; every functional averages over
///   at least one objective.
/// - `WeightLengthMismatch`: the weight vector does not pair one-to-one
///   with the overlaps.
/// - `InvalidWeight`: a weight is NaN or ±∞.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionalError {
    NoTauVals,
    WeightLengthMismatch { expected: usize, actual: usize },
    InvalidWeight { index: usize, value: f64 },
}

impl std::error::Error for FunctionalError {}

impl std::fmt::Display for FunctionalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionalError::NoTauVals => {
                write!(f, "No overlap values: at least one objective is required")
            }
            FunctionalError::WeightLengthMismatch { expected, actual } => {
                write!(f, "Weight length mismatch: expected {expected}, actual {actual}")
            }
            FunctionalError::InvalidWeight { index, value } => {
                write!(f, "Invalid weight at index {index}: {value}, must be finite")
            }
        }
    }
}
