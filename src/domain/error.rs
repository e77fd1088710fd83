use crate::domain::dsl_property::Side;
use thiserror::Error;

/// Errors raised while describing a request contract.
///
/// Every variant is an authoring mistake. They are returned from the setter
/// or coercion call that caused them and are never deferred to `get()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A regular expression is malformed or uses unsupported syntax.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// An explicit pair supplied two values for the same side.
    #[error("ambiguous side assignment: both values are tagged {0}-side")]
    AmbiguousSideAssignment(Side),

    /// No example satisfying the pattern could be produced.
    #[error("cannot generate an example for '{pattern}': {reason}")]
    UnsatisfiablePattern { pattern: String, reason: String },

    /// An example value does not satisfy the pattern paired with it.
    #[error("example '{example}' does not match pattern '{pattern}'")]
    ExampleMismatch { example: String, pattern: String },

    #[error("invalid HTTP method: '{0}'")]
    InvalidMethod(String),

    #[error("invalid header name: '{0}'")]
    InvalidHeaderName(String),

    /// `by_type` was given a minimum occurrence above its maximum.
    #[error("invalid occurrence bounds: min {min} is greater than max {max}")]
    InvalidOccurrence { min: u32, max: u32 },
}

impl ContractError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unsatisfiable(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsatisfiablePattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = ContractError> = std::result::Result<T, E>;
