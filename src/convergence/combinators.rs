//! convergence::combinators — short-circuiting OR over criteria.
//!
//! Purpose
//! -------
//! Compose an ordered sequence of criteria into one. [`AnyOf`] evaluates
//! its members in construction order and returns the first fired signal;
//! later members are not evaluated at all once one fires, and the surfaced
//! message is the first satisfied condition's, never an aggregate.
//!
//! Conventions
//! -----------
//! - Ordering is part of the contract: put cheap or decisive checks first.
//! - No member isolation: the first error aborts the remaining checks and
//!   propagates unchanged.
//! - An empty combinator is allowed and never fires.

use crate::convergence::criteria::Criterion;
use crate::convergence::errors::ConvResult;
use crate::convergence::signal::Signal;
use crate::record::OptRecord;

/// Ordered OR-composition of criteria.
#[derive(Default)]
pub struct AnyOf {
    criteria: Vec<Box<dyn Criterion>>,
}

impl AnyOf {
    /// Empty combinator; add members with [`AnyOf::or`] or [`AnyOf::push`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a criterion, builder style.
    pub fn or(mut self, criterion: impl Criterion + 'static) -> Self {
        self.push(criterion);
        self
    }

    /// Append a criterion in place.
    pub fn push(&mut self, criterion: impl Criterion + 'static) {
        self.criteria.push(Box::new(criterion));
    }

    /// Number of composed criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl Criterion for AnyOf {
    fn check(&self, record: &OptRecord) -> ConvResult<Signal> {
        for criterion in &self.criteria {
            let signal = criterion.check(record)?;
            if signal.is_converged() {
                return Ok(signal);
            }
        }
        Ok(Signal::NotConverged)
    }
}
