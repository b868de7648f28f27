use crate::types::{EvalError, Scalar};

/// Ordering operators handled by [`inequality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inequality {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Inequality {
    fn apply<T: PartialOrd>(self, actual: &T, expected: &T) -> bool {
        match self {
            Inequality::Gt => actual > expected,
            Inequality::Gte => actual >= expected,
            Inequality::Lt => actual < expected,
            Inequality::Lte => actual <= expected,
        }
    }
}

/// Strict equality: identical kind (signedness and width included) and value.
pub(crate) fn equal(actual: &Scalar<'_>, expected: &Scalar<'_>) -> bool {
    match (actual, expected) {
        (Scalar::Unsigned(a, wa), Scalar::Unsigned(b, wb)) => wa == wb && a == b,
        (Scalar::Signed(a, wa), Scalar::Signed(b, wb)) => wa == wb && a == b,
        (Scalar::Float(a, wa), Scalar::Float(b, wb)) => wa == wb && a == b,
        (Scalar::Text(a), Scalar::Text(b)) => a == b,
        (Scalar::Boolean(a), Scalar::Boolean(b)) => a == b,
        _ => false,
    }
}

/// Ordering comparison between two values of the exact same kind.
///
/// Text operands are ordered as decimal numbers; if either side does not
/// parse the comparison is `false` rather than an error.
pub(crate) fn inequality(
    op: Inequality,
    path: &str,
    actual: &Scalar<'_>,
    expected: &Scalar<'_>,
) -> Result<bool, EvalError> {
    if actual.kind() != expected.kind() {
        return Err(EvalError::TypeMismatch {
            path: path.to_owned(),
            actual: actual.kind(),
            expected: expected.kind(),
        });
    }

    match (actual, expected) {
        (Scalar::Unsigned(a, _), Scalar::Unsigned(b, _)) => Ok(op.apply(a, b)),
        (Scalar::Signed(a, _), Scalar::Signed(b, _)) => Ok(op.apply(a, b)),
        (Scalar::Float(a, _), Scalar::Float(b, _)) => Ok(op.apply(a, b)),
        (Scalar::Text(a), Scalar::Text(b)) => match (parse_decimal(a), parse_decimal(b)) {
            (Some(a), Some(b)) => Ok(op.apply(&a, &b)),
            _ => Ok(false),
        },
        _ => Err(EvalError::UnsupportedType {
            path: path.to_owned(),
            kind: actual.kind(),
        }),
    }
}

/// Parse text as an `f64`. Finite-looking text that overflows to infinity
/// is out of range and does not parse; `inf` and `infinity` still do.
fn parse_decimal(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    if value.is_infinite() {
        let unsigned = text.trim_start_matches(['+', '-']);
        let literal =
            unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
        if !literal {
            return None;
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Kind, Width};

    const OPS: [Inequality; 4] = [
        Inequality::Gt,
        Inequality::Gte,
        Inequality::Lt,
        Inequality::Lte,
    ];

    fn cmp(op: Inequality, a: Scalar<'_>, b: Scalar<'_>) -> Result<bool, EvalError> {
        inequality(op, "p", &a, &b)
    }

    #[test]
    fn signed_ordering() {
        let a = Scalar::Signed(10, Width::W64);
        let b = Scalar::Signed(20, Width::W64);
        let expected = [false, false, true, true];
        for (op, want) in OPS.into_iter().zip(expected) {
            assert_eq!(cmp(op, a, b), Ok(want), "failed for {op:?}");
        }
        assert_eq!(cmp(Inequality::Gte, a, a), Ok(true));
        assert_eq!(cmp(Inequality::Lte, a, a), Ok(true));
        assert_eq!(cmp(Inequality::Gt, a, a), Ok(false));
    }

    #[test]
    fn unsigned_ordering_uses_full_range() {
        let big = Scalar::Unsigned(u64::MAX, Width::W64);
        let small = Scalar::Unsigned(1, Width::W64);
        assert_eq!(cmp(Inequality::Gt, big, small), Ok(true));
    }

    #[test]
    fn narrow_widths_compare_when_matching() {
        let a = Scalar::Signed(-5, Width::W8);
        let b = Scalar::Signed(3, Width::W8);
        assert_eq!(cmp(Inequality::Lt, a, b), Ok(true));
    }

    #[test]
    fn float_ordering() {
        let a = Scalar::Float(1.5, Width::W64);
        let b = Scalar::Float(2.5, Width::W64);
        assert_eq!(cmp(Inequality::Lt, a, b), Ok(true));
        assert_eq!(cmp(Inequality::Gt, a, b), Ok(false));
    }

    #[test]
    fn nan_never_orders() {
        let nan = Scalar::Float(f64::NAN, Width::W64);
        let one = Scalar::Float(1.0, Width::W64);
        for op in OPS {
            assert_eq!(cmp(op, nan, one), Ok(false));
        }
    }

    #[test]
    fn cross_width_is_mismatch() {
        let err = cmp(
            Inequality::Gt,
            Scalar::Signed(5, Width::W32),
            Scalar::Signed(1, Width::W64),
        )
        .unwrap_err();
        assert_eq!(
            err,
            EvalError::TypeMismatch {
                path: "p".into(),
                actual: Kind::Signed(Width::W32),
                expected: Kind::Signed(Width::W64),
            }
        );
    }

    #[test]
    fn cross_signedness_is_mismatch() {
        let err = cmp(
            Inequality::Gt,
            Scalar::Unsigned(5, Width::W64),
            Scalar::Signed(1, Width::W64),
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::TypeMismatch { .. }));
    }

    #[test]
    fn text_orders_numerically() {
        assert_eq!(
            cmp(Inequality::Gt, Scalar::Text("9"), Scalar::Text("10")),
            Ok(false)
        );
        assert_eq!(
            cmp(Inequality::Lt, Scalar::Text("9"), Scalar::Text("10")),
            Ok(true)
        );
        assert_eq!(
            cmp(Inequality::Gte, Scalar::Text("2.50"), Scalar::Text("2.5")),
            Ok(true)
        );
    }

    #[test]
    fn unparsable_text_is_false() {
        for op in OPS {
            assert_eq!(cmp(op, Scalar::Text("abc"), Scalar::Text("10")), Ok(false));
            assert_eq!(cmp(op, Scalar::Text("10"), Scalar::Text("")), Ok(false));
        }
    }

    #[test]
    fn out_of_range_text_is_false() {
        for op in OPS {
            assert_eq!(cmp(op, Scalar::Text("1e400"), Scalar::Text("1")), Ok(false));
            assert_eq!(
                cmp(op, Scalar::Text("1"), Scalar::Text("-1e400")),
                Ok(false)
            );
        }
        assert_eq!(parse_decimal("1e400"), None);
        assert_eq!(parse_decimal("1e-400"), Some(0.0));
    }

    #[test]
    fn infinity_literal_text_orders() {
        assert_eq!(
            cmp(Inequality::Gt, Scalar::Text("inf"), Scalar::Text("1")),
            Ok(true)
        );
        assert_eq!(
            cmp(Inequality::Lt, Scalar::Text("-Infinity"), Scalar::Text("1")),
            Ok(true)
        );
    }

    #[test]
    fn booleans_cannot_be_ordered() {
        let err = cmp(Inequality::Gt, Scalar::Boolean(true), Scalar::Boolean(false)).unwrap_err();
        assert_eq!(
            err,
            EvalError::UnsupportedType {
                path: "p".into(),
                kind: Kind::Boolean,
            }
        );
    }

    #[test]
    fn equality_is_kind_strict() {
        assert!(equal(
            &Scalar::Signed(5, Width::W64),
            &Scalar::Signed(5, Width::W64)
        ));
        assert!(!equal(
            &Scalar::Signed(5, Width::W32),
            &Scalar::Signed(5, Width::W64)
        ));
        assert!(!equal(
            &Scalar::Signed(5, Width::W64),
            &Scalar::Float(5.0, Width::W64)
        ));
        assert!(!equal(&Scalar::Signed(5, Width::W64), &Scalar::Text("5")));
        assert!(!equal(
            &Scalar::Unsigned(5, Width::W64),
            &Scalar::Signed(5, Width::W64)
        ));
        assert!(equal(&Scalar::Text("a"), &Scalar::Text("a")));
        assert!(equal(&Scalar::Boolean(false), &Scalar::Boolean(false)));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = Scalar::Float(f64::NAN, Width::W64);
        assert!(!equal(&nan, &nan));
    }
}
