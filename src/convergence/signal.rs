//! convergence::signal — the two-case convergence signal.
//!
//! The loop interprets only the case (converged or not); the message text is
//! diagnostic and carries no control meaning beyond being present.

/// Outcome of one convergence check.
///
/// Replaces the "null vs. non-empty string" convention with an explicit
/// two-case type so the control signal and the diagnostic text are
/// independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Keep iterating.
    NotConverged,
    /// Stop; the string is surfaced to the user in the final status report.
    Converged(String),
}

impl Signal {
    /// `true` when the check fired.
    pub fn is_converged(&self) -> bool {
        matches!(self, Signal::Converged(_))
    }

    /// Borrow the message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Signal::NotConverged => None,
            Signal::Converged(msg) => Some(msg),
        }
    }

    /// Consume into the message, if any.
    pub fn into_message(self) -> Option<String> {
        match self {
            Signal::NotConverged => None,
            Signal::Converged(msg) => Some(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converged_exposes_message() {
        let signal = Signal::Converged("J_T < 1e-4".to_string());
        assert!(signal.is_converged());
        assert_eq!(signal.message(), Some("J_T < 1e-4"));
        assert_eq!(signal.into_message(), Some("J_T < 1e-4".to_string()));
    }

    #[test]
    fn not_converged_is_silent() {
        assert!(!Signal::NotConverged.is_converged());
        assert_eq!(Signal::NotConverged.message(), None);
        assert_eq!(Signal::NotConverged.into_message(), None);
    }
}
