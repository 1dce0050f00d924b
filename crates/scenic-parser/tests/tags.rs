//! Tag decoding, outline tag inheritance and scenario selection.
#![expect(clippy::expect_used, reason = "fixtures and expressions are known to be valid")]

use rstest::{fixture, rstest};
use scenic_parser::{Feature, ParseErrorKind, Tag, TagExpression, parse_feature, parse_tags};

#[fixture]
fn basket() -> Feature {
    parse_feature(
        include_str!("features/basket.feature"),
        None,
        Some("basket.feature"),
    )
    .expect("fixture should parse")
    .expect("fixture should hold a feature")
}

fn selected<'a>(feature: &'a Feature, expr: &'a TagExpression) -> Vec<&'a str> {
    feature.select(expr).map(|s| s.name.as_str()).collect()
}

#[rstest]
#[case("@one", &["one"])]
#[case("@one  @two.three-four  @xxx", &["one", "two.three-four", "xxx"])]
#[case("@one  # @fake-tag-in-comment xxx", &["one"])]
#[case("   @padded   ", &["padded"])]
fn parses_tag_lines(#[case] line: &str, #[case] expected: &[&str]) {
    let tags = parse_tags(line).expect("tag line should parse");
    assert_eq!(tags, expected.iter().map(|n| Tag::new(*n, 1)).collect::<Vec<_>>());
}

#[test]
fn rejects_invalid_tag_tokens() {
    let Err(err) = parse_tags("@one  invalid.tag boom") else {
        panic!("invalid tag should fail");
    };
    assert_eq!(err.kind, ParseErrorKind::InvalidTagToken("invalid.tag".into()));
    assert_eq!(err.to_string(), "line 1: invalid tag 'invalid.tag'");
}

#[rstest]
fn walks_scenarios_and_stubs_in_document_order(basket: Feature) {
    let names: Vec<&str> = basket.walk_scenarios().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Empty basket",
            "Saved basket",
            "Adding items -- @1.1 few",
            "Adding items -- @1.2 few",
            "Adding items -- @2.1",
        ]
    );
}

#[rstest]
#[case("@web", &["Empty basket", "Saved basket", "Adding items -- @1.1 few", "Adding items -- @1.2 few", "Adding items -- @2.1"])]
#[case("@fast", &["Empty basket", "Adding items -- @1.1 few", "Adding items -- @1.2 few"])]
#[case("@slow and not @db", &["Adding items -- @2.1"])]
#[case("@db or (@fast and not @web)", &["Saved basket"])]
#[case("@missing", &[])]
fn selects_by_inherited_tags(basket: Feature, #[case] expr: &str, #[case] expected: &[&str]) {
    let expr = TagExpression::parse(expr).expect("valid expression");
    assert_eq!(selected(&basket, &expr), expected);
}

#[rstest]
#[case(&["~@slow"], &["Empty basket", "Adding items -- @1.1 few", "Adding items -- @1.2 few"])]
#[case(&["@db,@fast", "~@web"], &[])]
#[case(&["slow", "~db"], &["Adding items -- @2.1"])]
fn selects_with_legacy_options(basket: Feature, #[case] options: &[&str], #[case] expected: &[&str]) {
    let expr = TagExpression::from_options(options).expect("valid options");
    assert_eq!(selected(&basket, &expr), expected);
}

#[rstest]
fn stubs_merge_outline_and_example_tags(basket: Feature) {
    let stub_tags: Vec<Vec<&str>> = basket
        .walk_scenarios()
        .skip(2)
        .map(|s| s.tags.iter().map(|t| t.name.as_str()).collect())
        .collect();
    assert_eq!(stub_tags, vec![vec!["fast"], vec!["fast"], vec!["slow"]]);
}
