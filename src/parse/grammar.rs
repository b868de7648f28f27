use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, not, opt, repeat, terminated};
use winnow::error::{ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

use crate::{RuleDescriptor, Value};

use super::parser::ParsedRuleSet;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

/// Spaces and tabs only. A rule's value must sit on the rule's own line.
fn inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}

// -- Paths & comparators ----------------------------------------------------

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

fn field_path<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., is_path_char),
    )
        .take()
        .parse_next(input)
}

fn comparator_token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

// -- Values -----------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    // Kept verbatim so patterns like "\d+" survive.
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn boolean(input: &mut &str) -> ModalResult<bool> {
    terminated(
        alt(("true".value(true), "false".value(false))),
        not(one_of(is_path_char)),
    )
    .parse_next(input)
}

/// Decimal literal with an optional Rust-style width suffix: `18`, `-3i8`,
/// `250u8`, `2.5`, `2.5f32`. Unsuffixed integers are `i64`, unsuffixed
/// decimals `f64`.
fn number(input: &mut &str) -> ModalResult<Value> {
    let literal = (
        opt('-'),
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(1.., |c: char| c.is_ascii_digit()))),
    )
        .take()
        .parse_next(input)?;
    let suffix = opt(alt((
        "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64", "f32", "f64",
    )))
    .parse_next(input)?;
    typed_number(literal, suffix).ok_or_else(|| ErrMode::from_input(input).cut())
}

fn typed_number(literal: &str, suffix: Option<&str>) -> Option<Value> {
    let is_decimal = literal.contains('.');
    let value = match (suffix, is_decimal) {
        (None, false) => Value::I64(literal.parse().ok()?),
        (None | Some("f64"), _) => Value::F64(literal.parse().ok()?),
        (Some("f32"), _) => Value::F32(literal.parse().ok()?),
        (Some(_), true) => return None,
        (Some("u8"), false) => Value::U8(literal.parse().ok()?),
        (Some("u16"), false) => Value::U16(literal.parse().ok()?),
        (Some("u32"), false) => Value::U32(literal.parse().ok()?),
        (Some("u64"), false) => Value::U64(literal.parse().ok()?),
        (Some("i8"), false) => Value::I8(literal.parse().ok()?),
        (Some("i16"), false) => Value::I16(literal.parse().ok()?),
        (Some("i32"), false) => Value::I32(literal.parse().ok()?),
        (Some("i64"), false) => Value::I64(literal.parse().ok()?),
        (Some(_), false) => return None,
    };
    Some(value)
}

fn literal(input: &mut &str) -> ModalResult<Value> {
    inline_ws.parse_next(input)?;
    alt((
        string_literal.map(Value::String),
        boolean.map(Value::Bool),
        number,
    ))
    .context(StrContext::Expected(StrContextValue::Description("value")))
    .parse_next(input)
}

// -- Rules ------------------------------------------------------------------

fn rule_line(input: &mut &str) -> ModalResult<RuleDescriptor> {
    ws.parse_next(input)?;
    let path = field_path.parse_next(input)?;
    ws.parse_next(input)?;

    let comparator = cut_err(comparator_token)
        .context(StrContext::Expected(StrContextValue::Description(
            "comparator",
        )))
        .parse_next(input)?;

    let value = opt(literal).parse_next(input)?;

    Ok(RuleDescriptor {
        comparator: comparator.to_owned(),
        path: path.to_owned(),
        value,
    })
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_ruleset(input: &mut &str) -> ModalResult<ParsedRuleSet> {
    let rules: Vec<RuleDescriptor> = repeat(0.., rule_line).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(ParsedRuleSet { rules })
}
