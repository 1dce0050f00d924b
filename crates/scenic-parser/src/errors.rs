//! Error types raised while parsing feature files.
//!
//! Every failure is reported as a single [`ParseError`] that pairs a
//! [`ParseErrorKind`] with the location of the offending line. The rendered
//! form (`file:line: message`) is meant to be shown to users as-is.

use std::fmt;

use thiserror::Error;

/// The reason a parse failed.
///
/// # Examples
/// ```
/// use scenic_parser::ParseErrorKind;
/// let kind = ParseErrorKind::DuplicateBackground;
/// assert_eq!(kind.to_string(), "a feature may contain only one Background");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The language directive or the caller named a language without keywords.
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),
    /// A line matched no valid transition of the parser.
    #[error("expected {expected}, found '{found}'")]
    UnexpectedLine {
        /// What the parser was prepared to accept.
        expected: &'static str,
        /// The trimmed text of the offending line.
        found: String,
    },
    /// A step list started with a conjunction.
    #[error("'{keyword}' cannot open a step list; it needs a preceding Given, When or Then")]
    OutOfOrderStep {
        /// The conjunction spelling as written in the language table.
        keyword: String,
    },
    /// Tags were placed before a Background.
    #[error("a Background cannot be tagged")]
    TaggedBackground,
    /// A second Background was declared.
    #[error("a feature may contain only one Background")]
    DuplicateBackground,
    /// A Background appeared after a scenario.
    #[error("a Background must precede every Scenario and Scenario Outline")]
    BackgroundPosition,
    /// Examples were declared outside a Scenario Outline.
    #[error("Examples are only allowed inside a Scenario Outline")]
    MisplacedExamples,
    /// A table row had the wrong shape.
    #[error("malformed table row: {reason}")]
    MalformedTable {
        /// Why the row was rejected.
        reason: String,
    },
    /// A tag line contained a token that is not a tag.
    #[error("invalid tag '{0}'")]
    InvalidTagToken(String),
    /// A multi-line text block was opened but never closed.
    #[error("text block opened with {delimiter} is never closed")]
    UnterminatedTextBlock {
        /// The opening delimiter.
        delimiter: &'static str,
    },
}

/// A parse failure located in the source document.
///
/// `line` is 1-based; it is `0` when the failure is not tied to a line, such
/// as an unknown language requested by the caller.
///
/// # Examples
/// ```
/// use scenic_parser::{ParseError, ParseErrorKind};
/// let err = ParseError::new(ParseErrorKind::TaggedBackground, 4).in_file(Some("a.feature"));
/// assert_eq!(err.to_string(), "a.feature:4: a Background cannot be tagged");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Name of the parsed file, when the caller supplied one.
    pub filename: Option<String>,
    /// 1-based line number of the offending line, or 0.
    pub line: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create an error for `line` without a filename.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self {
            filename: None,
            line,
            kind,
        }
    }

    /// Attach the filename of the document being parsed.
    #[must_use]
    pub fn in_file(mut self, filename: Option<&str>) -> Self {
        self.filename = filename.map(str::to_owned);
        self
    }

    /// The message without the location prefix.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.filename, self.line) {
            (Some(file), 0) => write!(f, "{file}: {}", self.kind),
            (Some(file), line) => write!(f, "{file}:{line}: {}", self.kind),
            (None, 0) => write!(f, "{}", self.kind),
            (None, line) => write!(f, "line {line}: {}", self.kind),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

pub(crate) fn unexpected(line: usize, expected: &'static str, found: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedLine {
            expected,
            found: found.to_owned(),
        },
        line,
    )
}
