use std::fmt;
use std::time::Duration;

use super::error::EvalError;

/// Why evaluation stopped before reaching the end of the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// A rule evaluated to `false`.
    Rejected,
    /// A rule compared a map, list or null; the whole set yields `false`.
    Incomparable,
    /// A rule raised an [`EvalError`].
    Errored,
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Halt::Rejected => write!(f, "rejected"),
            Halt::Incomparable => write!(f, "incomparable"),
            Halt::Errored => write!(f, "errored"),
        }
    }
}

/// Detailed evaluation report returned by
/// [`RuleSet::evaluate_detailed()`](super::ruleset::RuleSet::evaluate_detailed).
///
/// Contains the result, the rule that stopped evaluation (if any), how many
/// rules ran, and the wall-clock duration of the evaluation.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    result: Result<bool, EvalError>,
    halted: Option<(usize, Halt)>,
    rules_evaluated: usize,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        result: Result<bool, EvalError>,
        halted: Option<(usize, Halt)>,
        rules_evaluated: usize,
        duration: Duration,
    ) -> Self {
        Self {
            result,
            halted,
            rules_evaluated,
            duration,
        }
    }

    /// The evaluation result, same as [`RuleSet::evaluate()`](super::ruleset::RuleSet::evaluate).
    pub fn result(&self) -> &Result<bool, EvalError> {
        &self.result
    }

    /// Consume the report, keeping only the result.
    pub fn into_result(self) -> Result<bool, EvalError> {
        self.result
    }

    /// Index of the rule that stopped evaluation.
    #[must_use]
    pub fn halted_at(&self) -> Option<usize> {
        self.halted.map(|(index, _)| index)
    }

    #[must_use]
    pub fn halt(&self) -> Option<Halt> {
        self.halted.map(|(_, halt)| halt)
    }

    /// Number of rules tested, including the one that halted evaluation.
    #[must_use]
    pub fn rules_evaluated(&self) -> usize {
        self.rules_evaluated
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(matched) => write!(f, "matched: {matched}")?,
            Err(err) => write!(f, "error: {err}")?,
        }
        if let Some((index, halt)) = self.halted {
            write!(f, ", halted at rule {index} ({halt})")?;
        }
        write!(f, ", evaluated: {}", self.rules_evaluated)?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
