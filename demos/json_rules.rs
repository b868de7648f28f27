use ruler::{Document, RuleSet};

const RULES: &str = r#"[
    {"comparator": "gte", "path": "order.total", "value": 100},
    {"comparator": "eq", "path": "order.currency", "value": "EUR"},
    {"comparator": "matches", "path": "customer.id", "value": "^C-\\d{4}$"},
    {"comparator": "nexists", "path": "order.refunded_at"}
]"#;

fn main() {
    let ruleset = RuleSet::from_json(RULES).expect("failed to load rules");
    println!("{ruleset}");

    let docs = [
        r#"{"order": {"total": 250, "currency": "EUR"}, "customer": {"id": "C-0042"}}"#,
        r#"{"order": {"total": 20, "currency": "EUR"}, "customer": {"id": "C-0042"}}"#,
        r#"{"order": {"total": 250.0, "currency": "EUR"}, "customer": {"id": "C-0042"}}"#,
        r#"{"order": {"currency": "EUR"}}"#,
    ];

    for input in docs {
        let doc = Document::from_json(input).expect("invalid document");
        let report = ruleset.evaluate_detailed(&doc);
        println!("{input}\n  -> {report}");
    }
}
