use crate::compare::{self, Inequality};
use crate::pattern;
use crate::types::{Comparator, EvalError, Rule, Scalar, Value};

/// Outcome of testing a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Check {
    Pass,
    Fail,
    /// One of the operands has no scalar semantics (map, list, null).
    Incomparable,
}

impl From<bool> for Check {
    fn from(passed: bool) -> Self {
        if passed {
            Check::Pass
        } else {
            Check::Fail
        }
    }
}

/// Test one rule against the value its path resolved to.
pub(crate) fn test(rule: &Rule, resolved: Option<&Value>) -> Result<Check, EvalError> {
    let Some(actual) = resolved else {
        return match rule.comparator() {
            Comparator::Exists => Ok(Check::Fail),
            Comparator::NotExists => Ok(Check::Pass),
            _ => Err(EvalError::MissingProperty {
                path: rule.path().to_owned(),
            }),
        };
    };

    let actual = Scalar::classify(actual);
    let expected = Scalar::classify(rule.expected());
    if actual.is_unsupported() || expected.is_unsupported() {
        return Ok(Check::Incomparable);
    }

    let path = rule.path();
    let passed = match rule.comparator() {
        Comparator::Eq => compare::equal(&actual, &expected),
        Comparator::Neq => !compare::equal(&actual, &expected),
        Comparator::Gt => compare::inequality(Inequality::Gt, path, &actual, &expected)?,
        Comparator::Gte => compare::inequality(Inequality::Gte, path, &actual, &expected)?,
        Comparator::Lt => compare::inequality(Inequality::Lt, path, &actual, &expected)?,
        Comparator::Lte => compare::inequality(Inequality::Lte, path, &actual, &expected)?,
        Comparator::Exists => true,
        Comparator::NotExists => false,
        Comparator::Regex | Comparator::Matches | Comparator::Contains => {
            pattern::is_match(path, &actual, &expected, &rule.pattern)?
        }
        Comparator::NotContains => !pattern::is_match(path, &actual, &expected, &rule.pattern)?,
    };
    Ok(Check::from(passed))
}
