use std::fmt;

use tracing::debug;

use super::descriptor::RuleDescriptor;
use super::document::Document;
use super::error::{EvalError, RuleError};
use super::evaluation_report::EvaluationReport;
use super::rule::Rule;

/// Builder for constructing a [`RuleSet`].
///
/// Rules are appended in order and compiled into an immutable, thread-safe
/// rule set.
///
/// # Example
///
/// ```
/// use ruler::{field, Document, RuleSetBuilder};
///
/// let ruleset = RuleSetBuilder::new()
///     .rule(field("user.age").gte(18_i64))
///     .rule(field("user.name").matches("^A"))
///     .compile()
///     .unwrap();
///
/// let doc = Document::new()
///     .set("user.age", 30_i64)
///     .set("user.name", "Alice");
/// assert_eq!(ruleset.evaluate(&doc), Ok(true));
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Rules are evaluated in the order they are added.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules, keeping their order.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Compile the rules into an immutable `RuleSet`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if any rule fails validation.
    pub fn compile(self) -> Result<RuleSet, RuleError> {
        RuleSet::new(self.rules)
    }
}

/// An ordered conjunction of [`Rule`]s. Thread-safe and designed to live behind `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from rules in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if any rule fails validation.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        for rule in &rules {
            rule.validate()?;
        }
        debug!(rules = rules.len(), "compiled rule set");
        Ok(Self { rules })
    }

    /// A rule set with no rules. Matches every document.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Evaluate every rule in order against `doc`.
    ///
    /// Returns `Ok(true)` when all rules pass (including for an empty set),
    /// `Ok(false)` at the first rule that fails, and the first error raised.
    ///
    /// # Errors
    ///
    /// Returns the [`EvalError`] of the first rule that could not be evaluated.
    pub fn evaluate(&self, doc: &Document) -> Result<bool, EvalError> {
        crate::evaluate::evaluate(&self.rules, doc)
    }

    /// Evaluate with diagnostics.
    ///
    /// Returns an [`EvaluationReport`] with the same result as
    /// [`evaluate()`](Self::evaluate), the rule that halted evaluation, and
    /// timing information.
    pub fn evaluate_detailed(&self, doc: &Document) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(&self.rules, doc)
    }

    /// Build a rule set from descriptors, in order.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleError`] of the first invalid descriptor.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = RuleDescriptor>,
    ) -> Result<Self, RuleError> {
        let rules = descriptors
            .into_iter()
            .map(RuleDescriptor::into_rule)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    /// Parse a DSL string into a `RuleSet`.
    ///
    /// This is a convenience method combining [`parse`](crate::parse::parse)
    /// and [`from_descriptors()`](Self::from_descriptors).
    ///
    /// # Errors
    ///
    /// Returns [`RulerError`](crate::RulerError) on parse or rule failure.
    pub fn from_dsl(input: &str) -> Result<Self, crate::RulerError> {
        let parsed = crate::parse::parse(input)?;
        Ok(Self::from_descriptors(parsed.rules)?)
    }

    /// Read a DSL file into a `RuleSet`.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError`](crate::RulerError) on I/O, parse, or rule failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::RulerError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading rule set");
        Self::from_dsl(&input)
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(feature = "json")]
impl RuleSet {
    /// Parse a JSON array of rule descriptors into a `RuleSet`.
    ///
    /// ```
    /// let ruleset = ruler::RuleSet::from_json(
    ///     r#"[{"comparator": "gt", "path": "score", "value": 10}]"#,
    /// )
    /// .unwrap();
    /// assert_eq!(ruleset.len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RulerError`](crate::RulerError) on JSON or rule failure.
    pub fn from_json(input: &str) -> Result<Self, crate::RulerError> {
        let descriptors: Vec<RuleDescriptor> = serde_json::from_str(input)?;
        Ok(Self::from_descriptors(descriptors)?)
    }
}

impl FromIterator<Rule> for RuleSetBuilder {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new().rules(iter)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({} rules)", self.rules.len())
    }
}
