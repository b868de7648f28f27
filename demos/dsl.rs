use ruler::{Document, RuleSet};

fn main() {
    let ruleset = RuleSet::from_file("demos/rules.ruler").expect("failed to load rules");

    println!("{ruleset}");

    let doc = Document::new()
        .set("user.age", 25_i64)
        .set("user.status", "active")
        .set("user.level", 3_u8)
        .set("user.name", "Alice");

    match ruleset.evaluate(&doc) {
        Ok(matched) => println!("Matched: {matched}"),
        Err(err) => println!("Error: {err}"),
    }
}
