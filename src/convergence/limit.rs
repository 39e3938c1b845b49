//! convergence::limit — numeric limits that remember how they were written.
//!
//! A limit may be given as a float or as text (`"1e-4"`). It is parsed once,
//! at construction time, and keeps the original spelling so convergence
//! messages read back exactly what the user configured (`"J_T < 1e-4"`, not
//! `"J_T < 0.0001"`).

use std::str::FromStr;

use crate::convergence::errors::{ConvError, ConvResult};

/// A finite comparison limit with its display text.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    value: f64,
    display: String,
}

impl Limit {
    /// Construct from a numeric value; the display text is the default float
    /// formatting.
    ///
    /// # Errors
    /// [`ConvError::InvalidLimit`] if `value` is NaN or infinite.
    pub fn new(value: f64) -> ConvResult<Self> {
        if !value.is_finite() {
            return Err(ConvError::InvalidLimit {
                text: value.to_string(),
                reason: "Limit must be finite.",
            });
        }
        Ok(Self { value, display: value.to_string() })
    }

    /// Construct from text, keeping the original spelling for messages.
    ///
    /// # Errors
    /// [`ConvError::InvalidLimit`] if `text` does not parse to a finite
    /// float.
    pub fn parse(text: &str) -> ConvResult<Self> {
        let trimmed = text.trim();
        let value: f64 = trimmed.parse().map_err(|_| ConvError::InvalidLimit {
            text: text.to_string(),
            reason: "Limit must parse as a float.",
        })?;
        if !value.is_finite() {
            return Err(ConvError::InvalidLimit {
                text: text.to_string(),
                reason: "Limit must be finite.",
            });
        }
        Ok(Self { value, display: trimmed.to_string() })
    }

    /// The zero limit used by the monotonicity criteria.
    pub fn zero() -> Self {
        Self { value: 0.0, display: "0".to_string() }
    }

    /// Parsed numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text used when the limit appears in a convergence message.
    pub fn display(&self) -> &str {
        &self.display
    }
}

impl FromStr for Limit {
    type Err = ConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Limit::parse(s)
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Text limits keep their spelling; numeric limits use default float
    // formatting.
    fn display_preserves_spelling() {
        let limit = Limit::parse("1e-4").unwrap();
        assert_eq!(limit.value(), 1e-4);
        assert_eq!(limit.to_string(), "1e-4");

        let limit = Limit::new(1e-4).unwrap();
        assert_eq!(limit.to_string(), "0.0001");

        assert_eq!(Limit::zero().to_string(), "0");
        assert_eq!(Limit::zero().value(), 0.0);
    }

    #[test]
    // Unparseable or non-finite limits fail fast at construction.
    fn rejects_bad_limits() {
        assert!(matches!(Limit::parse("abc"), Err(ConvError::InvalidLimit { .. })));
        assert!(matches!(Limit::parse("inf"), Err(ConvError::InvalidLimit { .. })));
        assert!(matches!(Limit::new(f64::NAN), Err(ConvError::InvalidLimit { .. })));
        assert!(matches!(Limit::new(f64::INFINITY), Err(ConvError::InvalidLimit { .. })));
    }

    #[test]
    // `FromStr` mirrors `parse`, including whitespace trimming.
    fn from_str_trims() {
        let limit: Limit = " 1e-6 ".parse().unwrap();
        assert_eq!(limit.value(), 1e-6);
        assert_eq!(limit.to_string(), "1e-6");
    }
}
