//! Parser for Gherkin-style feature files.
//!
//! Feature files describe behaviour as named scenarios of `Given`/`When`/
//! `Then` steps. This crate turns such a document into an owned tree
//! ([`Feature`]) with localised keyword support, data tables, multi-line
//! text blocks, tag inheritance for scenario outlines, and tag expressions
//! for selecting scenarios.
//!
//! ```
//! use scenic_parser::{StepType, parse_feature};
//!
//! let text = "Feature: Login\n  Scenario: ok\n    Given a user\n    And a password\n";
//! let feature = parse_feature(text, None, Some("login.feature"))
//!     .expect("valid feature")
//!     .expect("non-empty document");
//! let steps: Vec<StepType> = feature.walk_scenarios().flat_map(|s| &s.steps).map(|s| s.step_type).collect();
//! assert_eq!(steps, [StepType::Given, StepType::Given]);
//! ```
//!
//! Parsing is pure and synchronous; independent documents may be parsed on
//! as many threads as needed.

pub mod classify;
mod errors;
pub mod i18n;
mod keyword;
pub mod language;
mod model;
mod outline;
mod parser;
pub mod scanner;
mod table;
mod tag_expr;
mod tags;
mod text;

pub use errors::{ParseError, ParseErrorKind};
pub use i18n::{DEFAULT_LANGUAGE, KeywordSet, languages};
pub use keyword::{StepKeyword, StepType};
pub use model::{
    Background, Element, Examples, Feature, Row, Scenario, ScenarioOutline, Step, Table, Tag,
};
pub use tag_expr::{TagExprError, TagExpression};

/// Parse a feature document.
///
/// `language` is used when the document has no `# language:` directive;
/// without either, English keywords apply. `filename` is recorded on the
/// feature and on any error.
///
/// Returns `Ok(None)` when the document holds only blank and comment lines.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first structural problem found.
/// No partial tree is returned.
pub fn parse_feature(
    text: &str,
    language: Option<&str>,
    filename: Option<&str>,
) -> Result<Option<Feature>, ParseError> {
    let feature = parser::parse_document(text, language).map_err(|err| err.in_file(filename))?;
    Ok(feature.map(|mut feature| {
        feature.filename = filename.map(str::to_owned);
        feature
    }))
}

/// Parse a bare list of steps, as used by step fixtures.
///
/// The first step must use a primary keyword; a step may carry a table or a
/// text block.
///
/// # Errors
///
/// Returns a [`ParseError`] for leading conjunctions, malformed arguments or
/// any line that is not part of a step.
///
/// # Examples
///
/// ```
/// use scenic_parser::parse_steps;
///
/// let steps = parse_steps("Given a thing\nThen it works", None).expect("valid steps");
/// assert_eq!(steps.len(), 2);
/// ```
pub fn parse_steps(text: &str, language: Option<&str>) -> Result<Vec<Step>, ParseError> {
    parser::parse_step_document(text, language)
}

/// Decode a single tag line such as `@slow @db # comment`.
///
/// Tags are reported on line 1.
///
/// # Errors
///
/// Returns [`ParseErrorKind::InvalidTagToken`] for any token that is not a
/// valid `@tag`.
pub fn parse_tags(line: &str) -> Result<Vec<Tag>, ParseError> {
    tags::parse_tag_line(line.trim(), 1)
}
