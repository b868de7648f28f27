use thiserror::Error;

use crate::parse::ParseError;
use crate::RuleError;

/// Unified error type covering parsing, rule construction, and I/O.
///
/// Returned by convenience loaders like [`RuleSet::from_dsl()`](crate::RuleSet::from_dsl)
/// and [`RuleSet::from_file()`](crate::RuleSet::from_file).
#[derive(Debug, Error)]
pub enum RulerError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
