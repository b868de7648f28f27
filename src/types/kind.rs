use std::fmt;

use super::value::Value;

/// Bit width of a numeric kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    #[must_use]
    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }
}

/// The closed set of semantic kinds a [`Value`] is classified into before
/// comparison.
///
/// Two values are only comparable when their kinds are identical, so an
/// `i32` and an `i64` never match even though both are signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Unsigned(Width),
    Signed(Width),
    Float(Width),
    Text,
    Boolean,
    /// Maps, lists, null: anything without scalar semantics.
    Unsupported,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Unsigned(w) => write!(f, "u{}", w.bits()),
            Kind::Signed(w) => write!(f, "i{}", w.bits()),
            Kind::Float(w) => write!(f, "f{}", w.bits()),
            Kind::Text => write!(f, "string"),
            Kind::Boolean => write!(f, "bool"),
            Kind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// A classified value with its payload canonicalized into the 64-bit bucket
/// of its kind. The source width is kept alongside for kind checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scalar<'a> {
    Unsigned(u64, Width),
    Signed(i64, Width),
    Float(f64, Width),
    Text(&'a str),
    Boolean(bool),
    Unsupported,
}

impl<'a> Scalar<'a> {
    pub(crate) fn classify(value: &'a Value) -> Self {
        match value {
            Value::U8(v) => Scalar::Unsigned(u64::from(*v), Width::W8),
            Value::U16(v) => Scalar::Unsigned(u64::from(*v), Width::W16),
            Value::U32(v) => Scalar::Unsigned(u64::from(*v), Width::W32),
            Value::U64(v) => Scalar::Unsigned(*v, Width::W64),
            Value::I8(v) => Scalar::Signed(i64::from(*v), Width::W8),
            Value::I16(v) => Scalar::Signed(i64::from(*v), Width::W16),
            Value::I32(v) => Scalar::Signed(i64::from(*v), Width::W32),
            Value::I64(v) => Scalar::Signed(*v, Width::W64),
            Value::F32(v) => Scalar::Float(f64::from(*v), Width::W32),
            Value::F64(v) => Scalar::Float(*v, Width::W64),
            Value::String(v) => Scalar::Text(v),
            Value::Bool(v) => Scalar::Boolean(*v),
            Value::List(_) | Value::Map(_) | Value::Null => Scalar::Unsupported,
        }
    }

    pub(crate) fn kind(&self) -> Kind {
        match self {
            Scalar::Unsigned(_, w) => Kind::Unsigned(*w),
            Scalar::Signed(_, w) => Kind::Signed(*w),
            Scalar::Float(_, w) => Kind::Float(*w),
            Scalar::Text(_) => Kind::Text,
            Scalar::Boolean(_) => Kind::Boolean,
            Scalar::Unsupported => Kind::Unsupported,
        }
    }

    pub(crate) fn is_unsupported(&self) -> bool {
        matches!(self, Scalar::Unsupported)
    }
}
