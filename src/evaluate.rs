use std::time::Instant;

use tracing::{debug, trace};

use crate::dispatch::{self, Check};
use crate::types::{Document, EvalError, EvaluationReport, Halt, Rule};

/// Outcome of one pass over a rule sequence.
struct Run {
    result: Result<bool, EvalError>,
    halted: Option<(usize, Halt)>,
    rules_evaluated: usize,
}

pub(crate) fn evaluate(rules: &[Rule], doc: &Document) -> Result<bool, EvalError> {
    run(rules, doc).result
}

pub(crate) fn evaluate_detailed(rules: &[Rule], doc: &Document) -> EvaluationReport {
    let start = Instant::now();
    let run = run(rules, doc);
    EvaluationReport::new(run.result, run.halted, run.rules_evaluated, start.elapsed())
}

/// Fail-fast conjunction: the first error, rejection or incomparable rule
/// ends the pass.
fn run(rules: &[Rule], doc: &Document) -> Run {
    for (index, rule) in rules.iter().enumerate() {
        let resolved = doc.resolve(rule.path());
        let check = dispatch::test(rule, resolved);
        trace!(
            index,
            path = rule.path(),
            comparator = %rule.comparator(),
            found = resolved.is_some(),
            ?check,
            "rule tested"
        );

        let (result, halt) = match check {
            Ok(Check::Pass) => continue,
            Ok(Check::Fail) => (Ok(false), Halt::Rejected),
            // A map, list or null operand aborts the whole set without an
            // error. Kept for compatibility with existing rule files.
            Ok(Check::Incomparable) => (Ok(false), Halt::Incomparable),
            Err(err) => (Err(err), Halt::Errored),
        };
        debug!(index, path = rule.path(), %halt, "rule set evaluation halted");
        return Run {
            result,
            halted: Some((index, halt)),
            rules_evaluated: index + 1,
        };
    }

    Run {
        result: Ok(true),
        halted: None,
        rules_evaluated: rules.len(),
    }
}
