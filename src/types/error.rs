use std::fmt;

use thiserror::Error;

use super::kind::Kind;

/// Which side of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The value resolved from the document.
    Actual,
    /// The value stored on the rule.
    Expected,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Actual => write!(f, "actual"),
            Operand::Expected => write!(f, "expected"),
        }
    }
}

/// Errors that abort the evaluation of a [`RuleSet`](super::RuleSet).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("did not find property '{path}' in document")]
    MissingProperty { path: String },

    #[error("value types are mismatched at '{path}': actual is {actual}, expected is {expected}")]
    TypeMismatch {
        path: String,
        actual: Kind,
        expected: Kind,
    },

    #[error("type {kind} at '{path}' cannot be ordered")]
    UnsupportedType { path: String, kind: Kind },

    #[error("{operand} operand at '{path}' is not a string")]
    PatternType { path: String, operand: Operand },

    #[error("invalid pattern at '{path}': {source}")]
    InvalidPattern {
        path: String,
        #[source]
        source: regex::Error,
    },
}

impl EvalError {
    /// The rule path the error was raised for.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            EvalError::MissingProperty { path }
            | EvalError::TypeMismatch { path, .. }
            | EvalError::UnsupportedType { path, .. }
            | EvalError::PatternType { path, .. }
            | EvalError::InvalidPattern { path, .. } => path,
        }
    }
}

/// Errors raised while constructing rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unknown comparator '{token}'")]
    UnknownComparator { token: String },

    #[error("rule path must not be empty")]
    EmptyPath,

    #[error("comparator '{comparator}' at '{path}' requires a value")]
    MissingValue { path: String, comparator: String },
}
