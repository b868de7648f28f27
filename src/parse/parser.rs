use crate::RuleDescriptor;

/// The result of parsing a DSL input string.
#[derive(Debug)]
pub struct ParsedRuleSet {
    pub rules: Vec<RuleDescriptor>,
}
