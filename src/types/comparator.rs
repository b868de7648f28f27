use std::fmt;
use std::str::FromStr;

use super::error::RuleError;

/// Comparison applied between a resolved value and a rule's expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Exists,
    NotExists,
    Regex,
    Matches,
    Contains,
    NotContains,
}

impl Comparator {
    pub const ALL: [Comparator; 12] = [
        Comparator::Eq,
        Comparator::Neq,
        Comparator::Gt,
        Comparator::Gte,
        Comparator::Lt,
        Comparator::Lte,
        Comparator::Exists,
        Comparator::NotExists,
        Comparator::Regex,
        Comparator::Matches,
        Comparator::Contains,
        Comparator::NotContains,
    ];

    /// The descriptor token for this comparator.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Comparator::Eq => "eq",
            Comparator::Neq => "neq",
            Comparator::Gt => "gt",
            Comparator::Gte => "gte",
            Comparator::Lt => "lt",
            Comparator::Lte => "lte",
            Comparator::Exists => "exists",
            Comparator::NotExists => "nexists",
            Comparator::Regex => "regex",
            Comparator::Matches => "matches",
            Comparator::Contains => "contains",
            Comparator::NotContains => "ncontains",
        }
    }

    /// Whether this comparator can be evaluated without an expected value.
    #[must_use]
    pub fn is_existence(self) -> bool {
        matches!(self, Comparator::Exists | Comparator::NotExists)
    }
}

impl FromStr for Comparator {
    type Err = RuleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Comparator::ALL
            .into_iter()
            .find(|c| c.token() == token)
            .ok_or_else(|| RuleError::UnknownComparator {
                token: token.to_owned(),
            })
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
