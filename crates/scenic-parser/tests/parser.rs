//! End-to-end behaviour of the public parsing entry points.
#![expect(clippy::expect_used, reason = "test documents are known to be valid")]

use rstest::rstest;
use scenic_parser::{
    Element, ParseError, ParseErrorKind, StepType, parse_feature, parse_steps,
};

#[test]
fn parses_english_feature_end_to_end() {
    let doc = "Feature: Accounts\n  Scenario: Login\n    Given a user\n    When they log in\n    Then they see the dashboard\n";
    let feature = parse_feature(doc, None, Some("accounts.feature"))
        .expect("valid feature")
        .expect("non-empty");
    assert_eq!(feature.filename.as_deref(), Some("accounts.feature"));
    let Some(Element::Scenario(login)) = feature.elements.first() else {
        panic!("expected a scenario");
    };
    let types: Vec<StepType> = login.steps.iter().map(|s| s.step_type).collect();
    assert_eq!(types, [StepType::Given, StepType::When, StepType::Then]);
    assert_eq!(login.line, 2);
}

#[test]
fn french_directive_accepts_native_given() {
    let doc = "# language: fr\nFonctionnalité: Comptes\n  Scénario: Connexion\n    Soit un utilisateur\n";
    let feature = parse_feature(doc, None, None)
        .expect("valid feature")
        .expect("non-empty");
    assert_eq!(feature.language, "fr");
    let step = feature
        .walk_scenarios()
        .flat_map(|s| &s.steps)
        .next()
        .expect("one step");
    assert_eq!((step.step_type, step.keyword.as_str()), (StepType::Given, "Soit"));
}

#[test]
fn escaped_pipe_survives_in_cell() {
    let doc = "Feature: f\n  Scenario: s\n    Given users:\n      | name  | value    |\n      | alice | one\\|two |\n";
    let feature = parse_feature(doc, None, None)
        .expect("valid feature")
        .expect("non-empty");
    let table = feature
        .walk_scenarios()
        .flat_map(|s| &s.steps)
        .find_map(|s| s.table.as_ref())
        .expect("table attached");
    assert_eq!(table.column("value"), Some(vec!["one|two"]));
    assert_eq!(
        table.rows_as_maps().next(),
        Some(vec![("name", "alice"), ("value", "one|two")])
    );
}

#[rstest]
#[case(
    include_str!("features/invalid/tagged_background.feature"),
    "tagged_background.feature:3: a Background cannot be tagged"
)]
#[case(
    include_str!("features/invalid/leading_and.feature"),
    "leading_and.feature:4: 'And' cannot open a step list; it needs a preceding Given, When or Then"
)]
fn errors_carry_filename_and_line(#[case] doc: &str, #[case] message: &str) {
    let name = message.split(':').next().expect("message has a filename");
    let Err(err) = parse_feature(doc, None, Some(name)) else {
        panic!("fixture should fail");
    };
    assert_eq!(err.filename.as_deref(), Some(name));
    assert_eq!(err.to_string(), message);
}

#[test]
fn unknown_caller_language_is_reported_without_line() {
    let err: ParseError = parse_feature("Feature: x", Some("tlh"), Some("x.feature"))
        .expect_err("unknown language");
    assert_eq!(err.kind, ParseErrorKind::UnknownLanguage("tlh".into()));
    assert_eq!(err.to_string(), "x.feature: unknown language 'tlh'");
}

#[test]
fn comment_only_document_is_empty() {
    let parsed = parse_feature("# nothing here\n\n", None, Some("empty.feature"))
        .expect("comment-only input is valid");
    assert!(parsed.is_none());
}

#[test]
fn parse_steps_handles_text_blocks() {
    let doc = "Given a step with multi-line text:\n    \"\"\"\n    Lorem ipsum\n    Ipsum lorem\n    \"\"\"\nWhen I have a step with multi-line text:\n    \"\"\"\n    Ipsum lorem\n    Lorem ipsum\n    \"\"\"\nThen every step will be parsed without errors\n";
    let steps = parse_steps(doc, None).expect("valid steps");
    let texts: Vec<Option<&str>> = steps.iter().map(|s| s.text.as_deref()).collect();
    assert_eq!(
        texts,
        [
            Some("Lorem ipsum\nIpsum lorem"),
            Some("Ipsum lorem\nLorem ipsum"),
            None
        ]
    );
    assert_eq!(
        steps.first().map(|s| s.name.as_str()),
        Some("a step with multi-line text")
    );
}

#[test]
fn parse_steps_rejects_malformed_table() {
    let doc = "Given a step with a malformed table:\n    | Name   | City |\n    | Alonso | Barcelona | 2004 |\n    | Bred   | London    | 2010 |\n";
    let err = parse_steps(doc, None).expect_err("malformed table");
    assert_eq!(err.line, 3);
    assert_eq!(
        err.to_string(),
        "line 3: malformed table row: expected 2 cells, found 3"
    );
}

#[test]
fn serialises_tree_to_json() {
    let doc = "@smoke\nFeature: f\n  Scenario: s\n    Given x\n";
    let feature = parse_feature(doc, None, Some("f.feature"))
        .expect("valid feature")
        .expect("non-empty");
    let json = serde_json::to_value(&feature).expect("serialisable");
    let field = |pointer: &str| json.pointer(pointer).and_then(serde_json::Value::as_str);
    assert_eq!(field("/name"), Some("f"));
    assert_eq!(field("/filename"), Some("f.feature"));
    assert_eq!(field("/tags/0/name"), Some("smoke"));
    assert_eq!(field("/elements/0/type"), Some("scenario"));
    assert_eq!(field("/elements/0/steps/0/step_type"), Some("given"));
}
