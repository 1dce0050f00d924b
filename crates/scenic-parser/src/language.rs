//! Language directive detection.
//!
//! A document may name its keyword language with a `# language: xx` comment.
//! Only comments in the leading block of blank and comment lines count; the
//! last directive there wins and overrides the caller's choice.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{ParseError, ParseErrorKind};
use crate::i18n::{DEFAULT_LANGUAGE, KeywordSet};
use crate::scanner::Line;

static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*language\s*:\s*([A-Za-z][A-Za-z0-9_-]*)\s*$")
        .unwrap_or_else(|_| unreachable!("directive regex should compile"))
});

/// Extract the language code from a trimmed `# language: xx` comment.
pub(crate) fn directive_code(text: &str) -> Option<&str> {
    DIRECTIVE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Outcome of language resolution for one document.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLanguage {
    /// The keyword table to parse the document with.
    pub keywords: &'static KeywordSet,
    /// Index of the first line that is neither blank nor a comment.
    pub first_content: usize,
}

/// Pick the keyword table for a document.
///
/// Precedence is: the last directive in the leading comment block, then
/// `explicit`, then [`DEFAULT_LANGUAGE`].
///
/// # Errors
///
/// Returns [`ParseErrorKind::UnknownLanguage`] when the chosen code has no
/// keyword table. The error points at the directive's line, or at line `0`
/// when the code came from the caller.
///
/// # Examples
///
/// ```
/// use scenic_parser::language::resolve_language;
/// use scenic_parser::scanner::scan;
///
/// let lines = scan("\n# language: fr\nFonctionnalité: x");
/// let resolved = resolve_language(&lines, Some("de")).expect("French is bundled");
/// assert_eq!(resolved.keywords.code(), "fr");
/// assert_eq!(resolved.first_content, 2);
/// ```
pub fn resolve_language(
    lines: &[Line<'_>],
    explicit: Option<&str>,
) -> Result<ResolvedLanguage, ParseError> {
    let mut directive: Option<(&str, usize)> = None;
    let mut first_content = lines.len();
    for (idx, line) in lines.iter().enumerate() {
        if line.text.is_empty() {
            continue;
        }
        if !line.text.starts_with('#') {
            first_content = idx;
            break;
        }
        if let Some(code) = directive_code(line.text) {
            directive = Some((code, line.number));
        }
    }

    let (code, line) = match (directive, explicit) {
        (Some(found), _) => found,
        (None, Some(code)) => (code, 0),
        (None, None) => (DEFAULT_LANGUAGE, 0),
    };
    let keywords = KeywordSet::for_language(code)
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnknownLanguage(code.to_owned()), line))?;
    debug!(language = code, first_content, "resolved feature language");
    Ok(ResolvedLanguage {
        keywords,
        first_content,
    })
}
