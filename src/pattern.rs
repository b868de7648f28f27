use std::sync::OnceLock;

use regex::Regex;

use crate::types::{EvalError, Operand, Scalar};

/// Write-once slot holding the compiled form of a rule's pattern.
///
/// A rule's expected value never changes, so the slot is keyed implicitly by
/// the rule it lives on. Compilation failures are cached too, which keeps the
/// reported error identical across evaluations.
#[derive(Debug, Clone, Default)]
pub(crate) struct PatternCache {
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl PatternCache {
    fn get_or_compile(&self, source: &str) -> Result<&Regex, &regex::Error> {
        self.compiled.get_or_init(|| Regex::new(source)).as_ref()
    }
}

/// Unanchored regular expression search of `actual` for the pattern in
/// `expected`. The pattern operand is checked before the subject.
pub(crate) fn is_match(
    path: &str,
    actual: &Scalar<'_>,
    expected: &Scalar<'_>,
    cache: &PatternCache,
) -> Result<bool, EvalError> {
    let Scalar::Text(source) = expected else {
        return Err(EvalError::PatternType {
            path: path.to_owned(),
            operand: Operand::Expected,
        });
    };
    let Scalar::Text(subject) = actual else {
        return Err(EvalError::PatternType {
            path: path.to_owned(),
            operand: Operand::Actual,
        });
    };

    let regex = cache
        .get_or_compile(source)
        .map_err(|err| EvalError::InvalidPattern {
            path: path.to_owned(),
            source: err.clone(),
        })?;
    Ok(regex.is_match(subject))
}
