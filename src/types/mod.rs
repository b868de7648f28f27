mod comparator;
mod descriptor;
mod document;
mod error;
mod evaluation_report;
mod kind;
mod rule;
mod ruleset;
mod value;

pub use comparator::Comparator;
pub use descriptor::RuleDescriptor;
pub use document::Document;
pub use error::{EvalError, Operand, RuleError};
pub use evaluation_report::{EvaluationReport, Halt};
pub(crate) use kind::Scalar;
pub use kind::{Kind, Width};
pub use rule::{field, FieldRule, Rule};
pub use ruleset::{RuleSet, RuleSetBuilder};
pub use value::{Map, Value};
