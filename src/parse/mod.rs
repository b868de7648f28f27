mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::ParsedRuleSet;

/// Parse a DSL input string into a [`ParsedRuleSet`].
///
/// Each rule is `<path> <comparator> [<value>]`; whitespace separates rules
/// and `#` starts a comment:
///
/// ```text
/// # adults named A-something, not deleted
/// user.age gte 18
/// user.name matches "^A"
/// deleted_at nexists
/// ```
///
/// Comparator tokens are not checked here; that happens when the
/// descriptors are turned into rules.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid DSL syntax.
pub fn parse(input: &str) -> Result<ParsedRuleSet, ParseError> {
    use winnow::Parser;
    grammar::parse_ruleset
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
