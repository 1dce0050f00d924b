//! Line classification against a keyword table.
//!
//! Classification is a pure function of a trimmed line and the active
//! [`KeywordSet`]; it never looks at neighbouring lines.

use crate::i18n::{KeywordSet, Section, TEXT_DELIMITERS};
use crate::keyword::StepKeyword;
use crate::language::directive_code;

/// A section header: the keyword spelling that matched and the name after
/// the colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Spelling from the keyword table.
    pub keyword: &'static str,
    /// Trimmed text after the colon; may be empty.
    pub name: &'a str,
}

/// Syntactic category of a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// A `#` comment that is not a language directive.
    Comment,
    /// A `# language: xx` comment carrying the language code.
    LanguageDirective(&'a str),
    /// A line of `@tag` tokens.
    TagLine,
    /// `Feature:` header.
    Feature(Header<'a>),
    /// `Background:` header.
    Background(Header<'a>),
    /// `Scenario:` header.
    Scenario(Header<'a>),
    /// `Scenario Outline:` header.
    ScenarioOutline(Header<'a>),
    /// `Examples:` header.
    Examples(Header<'a>),
    /// A step line.
    Step {
        /// Keyword category.
        keyword: StepKeyword,
        /// Spelling from the keyword table.
        literal: &'static str,
        /// Trimmed step text after the keyword.
        text: &'a str,
    },
    /// A `|`-delimited table row.
    TableRow,
    /// Opening or closing delimiter of a text block.
    TextBlockDelimiter(&'static str),
    /// Anything else, such as description prose.
    PlainText,
}

/// Classify a trimmed line.
///
/// Checks run in a fixed order: blank, comment (including language
/// directives), tag line, table row, text delimiter, section header, step,
/// and finally plain text.
///
/// # Examples
///
/// ```
/// use scenic_parser::classify::{classify, LineKind};
/// use scenic_parser::i18n::KeywordSet;
///
/// let fr = KeywordSet::for_language("fr").expect("French is bundled");
/// assert!(matches!(
///     classify("Soit un utilisateur", fr),
///     LineKind::Step { literal: "Soit", text: "un utilisateur", .. }
/// ));
/// ```
#[must_use]
pub fn classify<'a>(text: &'a str, keywords: &KeywordSet) -> LineKind<'a> {
    if text.is_empty() {
        return LineKind::Blank;
    }
    if text.starts_with('#') {
        return directive_code(text).map_or(LineKind::Comment, LineKind::LanguageDirective);
    }
    if text.starts_with('@') {
        return LineKind::TagLine;
    }
    if text.starts_with('|') {
        return LineKind::TableRow;
    }
    if let Some(delimiter) = TEXT_DELIMITERS.iter().find(|d| text.starts_with(**d)) {
        return LineKind::TextBlockDelimiter(delimiter);
    }
    if let Some((section, keyword, name)) = keywords.match_header(text) {
        let header = Header { keyword, name };
        return match section {
            Section::Feature => LineKind::Feature(header),
            Section::Background => LineKind::Background(header),
            Section::Scenario => LineKind::Scenario(header),
            Section::ScenarioOutline => LineKind::ScenarioOutline(header),
            Section::Examples => LineKind::Examples(header),
        };
    }
    keywords
        .match_step(text)
        .map_or(LineKind::PlainText, |(keyword, literal, text)| {
            LineKind::Step {
                keyword,
                literal,
                text,
            }
        })
}

impl LineKind<'_> {
    /// Whether the parser skips this line outside text blocks.
    #[must_use]
    pub const fn is_transparent(&self) -> bool {
        matches!(
            self,
            Self::Blank | Self::Comment | Self::LanguageDirective(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[expect(clippy::expect_used, reason = "English is always bundled")]
    fn en() -> &'static KeywordSet {
        KeywordSet::for_language("en").expect("English is bundled")
    }

    #[rstest]
    #[case("", LineKind::Blank)]
    #[case("# just a note", LineKind::Comment)]
    #[case("# language: fr", LineKind::LanguageDirective("fr"))]
    #[case("@slow @db", LineKind::TagLine)]
    #[case("| a | b |", LineKind::TableRow)]
    #[case("\"\"\"", LineKind::TextBlockDelimiter("\"\"\""))]
    #[case("'''", LineKind::TextBlockDelimiter("'''"))]
    #[case("In order to test", LineKind::PlainText)]
    #[case("Feature without colon", LineKind::PlainText)]
    fn classifies_structural_lines(#[case] text: &str, #[case] expected: LineKind<'_>) {
        assert_eq!(classify(text, en()), expected);
    }

    #[test]
    fn classifies_headers() {
        assert_eq!(
            classify("Background:", en()),
            LineKind::Background(Header {
                keyword: "Background",
                name: "",
            })
        );
        assert_eq!(
            classify("SCENARIO TEMPLATE:  adds up ", en()),
            LineKind::ScenarioOutline(Header {
                keyword: "Scenario Template",
                name: "adds up",
            })
        );
    }

    #[test]
    fn classifies_steps_with_table_spelling() {
        assert_eq!(
            classify("but not that", en()),
            LineKind::Step {
                keyword: StepKeyword::But,
                literal: "But",
                text: "not that",
            }
        );
        assert_eq!(
            classify("* anything", en()),
            LineKind::Step {
                keyword: StepKeyword::Asterisk,
                literal: "*",
                text: "anything",
            }
        );
    }

    #[test]
    fn comments_and_blanks_are_transparent() {
        assert!(classify("# hi", en()).is_transparent());
        assert!(classify("", en()).is_transparent());
        assert!(!classify("@tag", en()).is_transparent());
    }
}
