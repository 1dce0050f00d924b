//! Localised feature files parse with their native keywords.
#![expect(clippy::expect_used, reason = "fixtures are known to be valid")]

use rstest::rstest;
use scenic_parser::i18n::Section;
use scenic_parser::{Element, Feature, KeywordSet, StepType, languages, parse_feature};

fn parse_fixture(text: &str, name: &str) -> Feature {
    parse_feature(text, None, Some(name))
        .expect("fixture should parse")
        .expect("fixture should hold a feature")
}

fn step_triples(steps: &[scenic_parser::Step]) -> Vec<(StepType, &str, &str)> {
    steps
        .iter()
        .map(|s| (s.step_type, s.keyword.as_str(), s.name.as_str()))
        .collect()
}

fn first_scenario(feature: &Feature) -> &scenic_parser::Scenario {
    match feature.elements.first() {
        Some(Element::Scenario(s)) => s,
        other => panic!("expected a scenario, got {other:?}"),
    }
}

#[test]
fn french_fixture_uses_native_keywords() {
    let feature = parse_fixture(
        include_str!("features/i18n/addition_fr.feature"),
        "addition_fr.feature",
    );
    assert_eq!(feature.language, "fr");
    assert_eq!(feature.keyword, "Fonctionnalité");
    assert_eq!(feature.description, vec!["Afin d'éviter les erreurs bêtes"]);
    let background = feature.background.as_ref().expect("Contexte parsed");
    assert_eq!(background.keyword, "Contexte");
    assert_eq!(
        step_triples(&background.steps),
        vec![(StepType::Given, "Soit", "la valeur de départ est 1")]
    );
    assert_eq!(
        step_triples(&first_scenario(&feature).steps),
        vec![
            (StepType::When, "Quand", "j'ajoute 2"),
            (StepType::Then, "Alors", "le total est 3"),
            (StepType::Then, "Mais", "le total n'est pas 4"),
        ]
    );
    let Some(Element::ScenarioOutline(outline)) = feature.elements.get(1) else {
        panic!("expected an outline");
    };
    assert_eq!(outline.keyword, "Plan du scénario");
    assert_eq!(
        step_triples(&outline.steps),
        vec![
            (
                StepType::Given,
                "Étant donné qu'",
                "une valeur supplémentaire est <extra>"
            ),
            (StepType::When, "Lorsqu'", "on ajoute <value>"),
            (StepType::Then, "Alors", "le total est <total>"),
        ]
    );
    let stub_names: Vec<&str> = outline.scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        stub_names,
        vec![
            "Ajouter plusieurs nombres -- @1.1",
            "Ajouter plusieurs nombres -- @1.2"
        ]
    );
}

#[test]
fn german_fixture_prefers_longest_keyword() {
    let feature = parse_fixture(
        include_str!("features/i18n/addition_de.feature"),
        "addition_de.feature",
    );
    assert_eq!(feature.language, "de");
    let Some(Element::ScenarioOutline(outline)) = feature.elements.get(1) else {
        panic!("expected an outline");
    };
    assert_eq!(outline.keyword, "Szenariogrundriss");
    assert_eq!(
        outline.examples.first().map(|e| e.keyword.as_str()),
        Some("Beispiele")
    );
    assert_eq!(
        step_triples(&outline.steps),
        vec![
            (StepType::Given, "Gegeben sei", "ein Zusatzwert von <extra>"),
            (StepType::Given, "Und", "ich addiere <value>"),
            (StepType::Then, "Dann", "ist die Summe <total>"),
        ]
    );
}

#[test]
fn japanese_fixture_needs_no_space_after_keywords() {
    let feature = parse_fixture(
        include_str!("features/i18n/addition_ja.feature"),
        "addition_ja.feature",
    );
    assert_eq!(feature.name, "足し算");
    assert_eq!(
        step_triples(&first_scenario(&feature).steps),
        vec![
            (StepType::When, "もし", "2を足す"),
            (StepType::Then, "ならば", "合計は3"),
            (StepType::Then, "しかし", "合計は4ではない"),
        ]
    );
}

#[test]
fn russian_fixture_distinguishes_overlapping_keywords() {
    let feature = parse_fixture(
        include_str!("features/i18n/addition_ru.feature"),
        "addition_ru.feature",
    );
    assert_eq!(
        step_triples(&first_scenario(&feature).steps),
        vec![
            (StepType::When, "Когда", "я прибавляю 2"),
            (StepType::Then, "Тогда", "сумма равна 3"),
            (StepType::Then, "Но", "сумма не равна 4"),
        ]
    );
}

#[rstest]
#[case("cs", "Požadavek")]
#[case("da", "Egenskab")]
#[case("de", "Funktionalität")]
#[case("en-lol", "OH HAI")]
#[case("lv", "Funkcionalitāte")]
#[case("cy-GB", "Arwedd")]
fn directive_switches_feature_keyword(#[case] code: &str, #[case] keyword: &str) {
    let doc = format!("# language: {code}\n{keyword}: testing stuff\n  Oh my god, it's full of stuff...\n");
    let feature = parse_fixture(&doc, "directive.feature");
    assert_eq!(feature.language, code);
    assert_eq!(feature.name, "testing stuff");
    assert_eq!(feature.description, vec!["Oh my god, it's full of stuff..."]);
}

#[test]
fn canonical_keywords_round_trip_through_the_parser() {
    for set in languages() {
        let step = set
            .step_spellings(scenic_parser::StepKeyword::Given)
            .first()
            .expect("every language has a Given");
        let separator = if step.glued { "" } else { " " };
        let doc = format!(
            "# language: {code}\n{feature}: f\n  {scenario}: s\n    {given}{separator}x\n",
            code = set.code(),
            feature = set.canonical(Section::Feature),
            scenario = set.canonical(Section::Scenario),
            given = step.text,
        );
        let feature = parse_feature(&doc, None, None)
            .unwrap_or_else(|err| panic!("{}: {err}", set.code()))
            .expect("feature present");
        let steps = &first_scenario(&feature).steps;
        assert_eq!(
            step_triples(steps),
            vec![(StepType::Given, step.text, "x")],
            "{}",
            set.code()
        );
    }
}

#[test]
fn every_bundled_language_is_resolvable() {
    for set in languages() {
        let found = KeywordSet::for_language(set.code()).expect("listed language resolves");
        assert_eq!(found.code(), set.code());
        assert!(!found.name().is_empty());
        assert!(!found.native().is_empty());
    }
}
