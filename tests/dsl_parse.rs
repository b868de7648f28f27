use std::io::Write;

use ruler::{
    field, Comparator, Document, EvalError, RuleError, RuleSet, RuleSetBuilder, RulerError, Value,
};

#[test]
fn dsl_parse_and_evaluate() {
    let dsl = r#"
# adults whose name starts with A
user.age gte 18
user.name matches "^A.*"
user.deleted_at nexists
"#;

    let ruleset = RuleSet::from_dsl(dsl).unwrap();
    assert_eq!(ruleset.len(), 3);

    let doc = Document::new()
        .set("user.age", 25_i64)
        .set("user.name", "Alice");
    assert_eq!(ruleset.evaluate(&doc), Ok(true));

    let doc = Document::new()
        .set("user.age", 25_i64)
        .set("user.name", "bob");
    assert_eq!(ruleset.evaluate(&doc), Ok(false));
}

#[test]
fn dsl_matches_builder() {
    let dsl = r#"
a.b.c eq 5
name ncontains "^x"
score lt 2.5f32
flag neq false
id exists
"#;

    let built = RuleSetBuilder::new()
        .rule(field("a.b.c").eq(5_i64))
        .rule(field("name").not_contains("^x"))
        .rule(field("score").lt(2.5_f32))
        .rule(field("flag").neq(false))
        .rule(field("id").exists())
        .compile()
        .unwrap();

    assert_eq!(RuleSet::from_dsl(dsl).unwrap(), built);
}

#[test]
fn dsl_width_suffix_controls_kind() {
    let ruleset = RuleSet::from_dsl("n gt 5i32").unwrap();
    assert_eq!(ruleset.rules()[0].expected(), &Value::I32(5));

    assert_eq!(
        ruleset.evaluate(&Document::new().set("n", 10_i32)),
        Ok(true)
    );
    assert!(matches!(
        ruleset.evaluate(&Document::new().set("n", 10_i64)),
        Err(EvalError::TypeMismatch { .. })
    ));
}

#[test]
fn dsl_every_comparator_token() {
    for comparator in Comparator::ALL {
        let dsl = format!("x {} \"1\"", comparator.token());
        let ruleset = RuleSet::from_dsl(&dsl).unwrap();
        assert_eq!(ruleset.rules()[0].comparator(), comparator);
    }
}

#[test]
fn dsl_boolean_named_path_after_existence_rule() {
    let ruleset = RuleSet::from_dsl("flags exists\nfalse eq 1").unwrap();
    assert_eq!(ruleset.len(), 2);
    assert_eq!(ruleset.rules()[1].path(), "false");

    let doc = Document::new().set("flags", "on").set("false", 1_i64);
    assert_eq!(ruleset.evaluate(&doc), Ok(true));
}

#[test]
fn dsl_unknown_comparator() {
    let err = RuleSet::from_dsl("x approx 1").unwrap_err();
    assert!(matches!(
        err,
        RulerError::Rule(RuleError::UnknownComparator { ref token }) if token == "approx"
    ));
}

#[test]
fn dsl_missing_value() {
    let err = RuleSet::from_dsl("x gte").unwrap_err();
    assert!(matches!(
        err,
        RulerError::Rule(RuleError::MissingValue { .. })
    ));
}

#[test]
fn dsl_syntax_error() {
    let err = RuleSet::from_dsl("x eq 1\n  = 2").unwrap_err();
    assert!(matches!(err, RulerError::Parse(_)));
    assert!(err.to_string().starts_with("parse error:"));
}

#[test]
fn dsl_empty_is_empty_ruleset() {
    let ruleset = RuleSet::from_dsl("# nothing here\n").unwrap();
    assert!(ruleset.is_empty());
    assert_eq!(ruleset.evaluate(&Document::new()), Ok(true));
}

#[test]
fn dsl_from_file() {
    let path = std::env::temp_dir().join(format!("ruler-dsl-{}.rules", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "status eq \"active\"").unwrap();
        writeln!(file, "attempts lte 3").unwrap();
    }

    let ruleset = RuleSet::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let doc = Document::new()
        .set("status", "active")
        .set("attempts", 2_i64);
    assert_eq!(ruleset.evaluate(&doc), Ok(true));
}

#[test]
fn dsl_missing_file() {
    let err = RuleSet::from_file("/definitely/not/here.rules").unwrap_err();
    assert!(matches!(err, RulerError::Io(_)));
}
