use std::fmt;

use super::comparator::Comparator;
use super::error::RuleError;
use super::value::Value;
use crate::pattern::PatternCache;

/// A single field-level condition: the value at `path` compared against
/// `expected` with `comparator`.
///
/// Rules are immutable once built. Pattern comparators compile their regex on
/// first use and keep it for the lifetime of the rule.
#[derive(Debug, Clone)]
pub struct Rule {
    path: String,
    comparator: Comparator,
    expected: Value,
    pub(crate) pattern: PatternCache,
}

impl Rule {
    /// Build a rule from an already-parsed comparator.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyPath`] if `path` is empty.
    pub fn new(
        path: impl Into<String>,
        comparator: Comparator,
        expected: impl Into<Value>,
    ) -> Result<Self, RuleError> {
        let rule = Self::unchecked(path.into(), comparator, expected.into());
        rule.validate()?;
        Ok(rule)
    }

    /// Build a rule from a comparator token such as `"gte"` or `"ncontains"`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownComparator`] for an unrecognized token and
    /// [`RuleError::EmptyPath`] for an empty path.
    pub fn parse(
        path: impl Into<String>,
        token: &str,
        expected: impl Into<Value>,
    ) -> Result<Self, RuleError> {
        Self::new(path, token.parse()?, expected)
    }

    pub(crate) fn unchecked(path: String, comparator: Comparator, expected: Value) -> Self {
        Self {
            path,
            comparator,
            expected,
            pattern: PatternCache::default(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RuleError> {
        if self.path.is_empty() {
            return Err(RuleError::EmptyPath);
        }
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    #[must_use]
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.comparator == other.comparator
            && self.expected == other.expected
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comparator.is_existence() {
            write!(f, "{} {}", self.path, self.comparator)
        } else {
            write!(f, "{} {} {}", self.path, self.comparator, self.expected)
        }
    }
}

/// Intermediate builder for field rules.
/// Created by [`field()`]; a comparison method turns it into a [`Rule`].
///
/// Paths are validated when the rule is added to a
/// [`RuleSetBuilder`](super::RuleSetBuilder) and compiled.
#[derive(Debug, Clone)]
pub struct FieldRule {
    path: String,
}

impl FieldRule {
    fn with(self, comparator: Comparator, value: impl Into<Value>) -> Rule {
        Rule::unchecked(self.path, comparator, value.into())
    }

    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> Rule {
        self.with(Comparator::Eq, value)
    }

    #[must_use]
    pub fn neq(self, value: impl Into<Value>) -> Rule {
        self.with(Comparator::Neq, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Rule {
        self.with(Comparator::Gt, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> Rule {
        self.with(Comparator::Gte, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Rule {
        self.with(Comparator::Lt, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> Rule {
        self.with(Comparator::Lte, value)
    }

    #[must_use]
    pub fn exists(self) -> Rule {
        self.with(Comparator::Exists, true)
    }

    #[must_use]
    pub fn not_exists(self) -> Rule {
        self.with(Comparator::NotExists, true)
    }

    #[must_use]
    pub fn regex(self, pattern: impl Into<Value>) -> Rule {
        self.with(Comparator::Regex, pattern)
    }

    #[must_use]
    pub fn matches(self, pattern: impl Into<Value>) -> Rule {
        self.with(Comparator::Matches, pattern)
    }

    #[must_use]
    pub fn contains(self, pattern: impl Into<Value>) -> Rule {
        self.with(Comparator::Contains, pattern)
    }

    #[must_use]
    pub fn not_contains(self, pattern: impl Into<Value>) -> Rule {
        self.with(Comparator::NotContains, pattern)
    }
}

/// Start a rule on the value at a dot-separated `path`.
#[must_use]
pub fn field(path: &str) -> FieldRule {
    FieldRule {
        path: path.to_owned(),
    }
}
