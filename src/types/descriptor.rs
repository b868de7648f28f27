use super::comparator::Comparator;
use super::error::RuleError;
use super::rule::Rule;
use super::value::Value;

/// The loose, data-level shape of a rule as found in configuration:
/// `{ "comparator": "gte", "path": "user.age", "value": 18 }`.
///
/// Produced by the DSL parser and, with the `serde` feature, by any serde
/// format. Converted into a checked [`Rule`] with [`into_rule`](Self::into_rule).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RuleDescriptor {
    pub comparator: String,
    pub path: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<Value>,
}

impl RuleDescriptor {
    /// Validate the comparator token and path and build the rule.
    ///
    /// `exists` and `nexists` do not need a value; any other comparator does.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] for an unknown comparator, an empty path, or a
    /// missing value.
    pub fn into_rule(self) -> Result<Rule, RuleError> {
        let comparator: Comparator = self.comparator.parse()?;
        let value = match self.value {
            Some(value) => value,
            None if comparator.is_existence() => Value::Bool(true),
            None => {
                return Err(RuleError::MissingValue {
                    path: self.path,
                    comparator: self.comparator,
                })
            }
        };
        Rule::new(self.path, comparator, value)
    }
}

impl From<&Rule> for RuleDescriptor {
    fn from(rule: &Rule) -> Self {
        Self {
            comparator: rule.comparator().token().to_owned(),
            path: rule.path().to_owned(),
            value: Some(rule.expected().clone()),
        }
    }
}
