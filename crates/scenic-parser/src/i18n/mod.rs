//! Localised keyword tables.
//!
//! Each supported language maps the structural keywords (`Feature`,
//! `Background`, `Scenario`, `Scenario Outline`, `Examples`) and the step
//! keywords (`Given`, `When`, `Then`, `And`, `But`) to one or more
//! spellings. Tables are built once and shared read-only between threads.

mod languages;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::keyword::StepKeyword;

use languages::{LANGUAGES, LanguageData};

/// Language used when neither the caller nor the document names one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Delimiters that open and close a multi-line text block.
pub const TEXT_DELIMITERS: &[&str] = &["\"\"\"", "'''"];

const ASTERISK: &[&str] = &["*"];

static REGISTRY: LazyLock<HashMap<&'static str, KeywordSet>> = LazyLock::new(|| {
    LANGUAGES
        .iter()
        .map(|data| (data.code, KeywordSet::from_data(data)))
        .collect()
});

/// Structural keyword categories that introduce a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `Feature:` header.
    Feature,
    /// `Background:` header.
    Background,
    /// `Scenario:` header.
    Scenario,
    /// `Scenario Outline:` header.
    ScenarioOutline,
    /// `Examples:` header.
    Examples,
}

impl Section {
    const ALL: [Self; 5] = [
        Self::Feature,
        Self::Background,
        Self::Scenario,
        Self::ScenarioOutline,
        Self::Examples,
    ];
}

/// A single keyword spelling from a language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spelling {
    /// The keyword as written in the table, without the `<` marker.
    pub text: &'static str,
    /// Whether the keyword may be glued to the text that follows it.
    pub glued: bool,
}

impl Spelling {
    fn from_table(raw: &'static str) -> Self {
        raw.strip_suffix('<').map_or(
            Self {
                text: raw,
                glued: false,
            },
            |text| Self { text, glued: true },
        )
    }

    fn char_len(self) -> usize {
        self.text.chars().count()
    }
}

/// The keyword table of one language.
///
/// # Examples
///
/// ```
/// use scenic_parser::i18n::{KeywordSet, Section};
///
/// let fr = KeywordSet::for_language("fr").expect("French is bundled");
/// assert_eq!(fr.canonical(Section::Feature), "Fonctionnalité");
/// ```
#[derive(Debug)]
pub struct KeywordSet {
    code: &'static str,
    name: &'static str,
    native: &'static str,
    sections: Vec<(Section, Vec<Spelling>)>,
    steps: Vec<(StepKeyword, Vec<Spelling>)>,
    headers_by_length: Vec<(Section, Spelling)>,
    steps_by_length: Vec<(StepKeyword, Spelling)>,
}

impl KeywordSet {
    fn from_data(data: &LanguageData) -> Self {
        let spell = |raw: &'static [&'static str]| -> Vec<Spelling> {
            raw.iter().copied().map(Spelling::from_table).collect()
        };
        let sections: Vec<(Section, Vec<Spelling>)> = Section::ALL
            .iter()
            .map(|section| {
                let raw = match section {
                    Section::Feature => data.feature,
                    Section::Background => data.background,
                    Section::Scenario => data.scenario,
                    Section::ScenarioOutline => data.scenario_outline,
                    Section::Examples => data.examples,
                };
                (*section, spell(raw))
            })
            .collect();
        let steps = vec![
            (StepKeyword::Given, spell(data.given)),
            (StepKeyword::When, spell(data.when)),
            (StepKeyword::Then, spell(data.then)),
            (StepKeyword::And, spell(data.and)),
            (StepKeyword::But, spell(data.but)),
            (StepKeyword::Asterisk, spell(ASTERISK)),
        ];

        let mut headers_by_length: Vec<(Section, Spelling)> = sections
            .iter()
            .flat_map(|(section, list)| list.iter().map(|s| (*section, *s)))
            .collect();
        headers_by_length.sort_by_key(|(_, s)| std::cmp::Reverse(s.char_len()));
        let mut steps_by_length: Vec<(StepKeyword, Spelling)> = steps
            .iter()
            .flat_map(|(kw, list)| list.iter().map(|s| (*kw, *s)))
            .collect();
        steps_by_length.sort_by_key(|(_, s)| std::cmp::Reverse(s.char_len()));

        Self {
            code: data.code,
            name: data.name,
            native: data.native,
            sections,
            steps,
            headers_by_length,
            steps_by_length,
        }
    }

    /// Look up the keyword table for a language code such as `"fr"` or
    /// `"zh-TW"`. Codes are matched exactly.
    #[must_use]
    pub fn for_language(code: &str) -> Option<&'static Self> {
        REGISTRY.get(code)
    }

    /// The language code of this table.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// English name of the language.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the language in the language itself.
    #[must_use]
    pub fn native(&self) -> &'static str {
        self.native
    }

    /// Every spelling of a section keyword, canonical first.
    #[must_use]
    pub fn section_spellings(&self, section: Section) -> &[Spelling] {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, list)| list.as_slice())
            .unwrap_or_default()
    }

    /// Every spelling of a step keyword, canonical first.
    #[must_use]
    pub fn step_spellings(&self, keyword: StepKeyword) -> &[Spelling] {
        self.steps
            .iter()
            .find(|(kw, _)| *kw == keyword)
            .map(|(_, list)| list.as_slice())
            .unwrap_or_default()
    }

    /// The canonical spelling of a section keyword.
    #[must_use]
    pub fn canonical(&self, section: Section) -> &'static str {
        self.section_spellings(section)
            .first()
            .map_or("", |s| s.text)
    }

    /// Match a section header (`<keyword>:`) at the start of `text`.
    ///
    /// Returns the section, the table spelling that matched and the trimmed
    /// remainder after the colon. The longest matching spelling wins.
    pub(crate) fn match_header<'a>(
        &self,
        text: &'a str,
    ) -> Option<(Section, &'static str, &'a str)> {
        self.headers_by_length.iter().find_map(|(section, spelling)| {
            let rest = strip_keyword_prefix(text, spelling.text)?;
            let name = rest.strip_prefix(':')?;
            Some((*section, spelling.text, name.trim()))
        })
    }

    /// Match a step keyword at the start of `text`.
    ///
    /// A spelling must be followed by whitespace or the end of the line
    /// unless it is glued. Returns the category, the table spelling and the
    /// trimmed step text.
    pub(crate) fn match_step<'a>(
        &self,
        text: &'a str,
    ) -> Option<(StepKeyword, &'static str, &'a str)> {
        self.steps_by_length.iter().find_map(|(keyword, spelling)| {
            let rest = strip_keyword_prefix(text, spelling.text)?;
            let separated = rest.is_empty() || rest.starts_with(char::is_whitespace);
            (spelling.glued || separated).then_some((*keyword, spelling.text, rest.trim()))
        })
    }
}

/// All bundled keyword tables, sorted by language code.
#[must_use]
pub fn languages() -> Vec<&'static KeywordSet> {
    let mut all: Vec<&'static KeywordSet> = REGISTRY.values().collect();
    all.sort_by_key(|set| set.code);
    all
}

/// Strip `keyword` from the start of `line`, ignoring case.
///
/// Characters are compared through their Unicode lowercase forms so that
/// `GIVEN`, `given` and `Given` all match the same spelling.
pub(crate) fn strip_keyword_prefix<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let mut found = line.char_indices();
    let mut end = 0;
    for expected in keyword.chars() {
        let (idx, actual) = found.next()?;
        if !chars_match(expected, actual) {
            return None;
        }
        end = idx + actual.len_utf8();
    }
    line.get(end..)
}

fn chars_match(expected: char, actual: char) -> bool {
    expected == actual || expected.to_lowercase().eq(actual.to_lowercase())
}
