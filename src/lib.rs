//! Evaluate nested documents against flat, data-driven rule sets.
//!
//! A [`RuleSet`] is an ordered conjunction of [`Rule`]s. Each rule resolves a
//! dotted path in a [`Document`] and compares the value found there with an
//! expected [`Value`]. Comparisons are strictly typed: integers of different
//! widths or signedness never match, and ordering a string compares it as a
//! decimal number.
//!
//! ```
//! use ruler::{field, Document, RuleSet};
//!
//! let ruleset = RuleSet::builder()
//!     .rule(field("a.b.c").eq(5_i64))
//!     .rule(field("name").matches("^A.*"))
//!     .rule(field("deleted_at").not_exists())
//!     .compile()
//!     .unwrap();
//!
//! let doc = Document::new().set("a.b.c", 5_i64).set("name", "Alice");
//! assert_eq!(ruleset.evaluate(&doc), Ok(true));
//! ```

mod compare;
mod dispatch;
mod error;
mod evaluate;
pub mod parse;
mod pattern;
mod types;

pub use error::RulerError;
pub use types::{
    field, Comparator, Document, EvalError, EvaluationReport, FieldRule, Halt, Kind, Map, Operand,
    Rule, RuleDescriptor, RuleError, RuleSet, RuleSetBuilder, Value, Width,
};
