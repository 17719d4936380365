//! Interpretation errors.

use thiserror::Error;

/// Errors raised while resolving a command against a world.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// A referring expression matched no object.
    #[error("no object matches the description")]
    NoMatchingObject,

    /// Every candidate reading violates a physical law, or the quantifier
    /// combination is illegal.
    #[error("no interpretation satisfies the physical laws")]
    NoValidInterpretation,

    /// A `the`-quantified expression matched several objects; the payload
    /// enumerates the candidates for clarification.
    #[error("ambiguous reference, could mean {0}")]
    AmbiguousThe(String),
}

impl InterpretError {
    /// Whether this error asks the user for clarification.
    pub fn is_ambiguity(&self) -> bool {
        matches!(self, InterpretError::AmbiguousThe(_))
    }
}
