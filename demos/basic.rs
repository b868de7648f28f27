use ruler::{field, Document, RuleSetBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=ruler=trace shows every rule as it is tested.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ruleset = RuleSetBuilder::new()
        .rule(field("user.age").gte(18_i64))
        .rule(field("user.status").eq("active"))
        .rule(field("user.email").not_contains(r"@spam\."))
        .rule(field("user.banned_at").not_exists())
        .compile()
        .expect("failed to compile ruleset");

    println!("{ruleset}");
    for rule in ruleset.rules() {
        println!("  {rule}");
    }

    let doc = Document::new()
        .set("user.age", 25_i64)
        .set("user.status", "active")
        .set("user.email", "alice@example.com");

    match ruleset.evaluate(&doc) {
        Ok(matched) => println!("Matched: {matched}"),
        Err(err) => println!("Error: {err}"),
    }

    let report = ruleset.evaluate_detailed(&doc.clone().set("user.age", 16_i64));
    println!("{report}");

    match ruleset.evaluate(&Document::new()) {
        Ok(matched) => println!("Matched: {matched}"),
        Err(err) => println!("Error: {err}"),
    }
}
