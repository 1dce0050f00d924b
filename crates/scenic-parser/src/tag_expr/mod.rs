//! Tag filters for selecting scenarios.
//!
//! Two notations are accepted. The boolean grammar combines `@tag` terms with
//! `not`, `and`, `or` and parentheses. The legacy option form lists
//! comma-separated alternatives per option, negates a term with `~` or `-`,
//! and ANDs the options together.

mod ast;
mod legacy;
mod lexer;
mod parser;

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use ast::Expr;
use parser::Parser;

/// Error raised when a tag expression cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tag expression at byte {offset}: {reason}")]
pub struct TagExprError {
    /// Byte offset of the offending token within its input.
    pub offset: usize,
    /// Human-readable reason.
    pub reason: String,
}

impl TagExprError {
    pub(crate) fn new(offset: usize, reason: impl Into<String>) -> Self {
        Self {
            offset,
            reason: reason.into(),
        }
    }
}

/// A parsed tag filter.
///
/// # Examples
///
/// ```
/// use scenic_parser::TagExpression;
///
/// let expr = TagExpression::parse("@fast and not @wip").expect("valid expression");
/// assert!(expr.evaluate(["fast"]));
/// assert!(!expr.evaluate(["fast", "wip"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagExpression {
    root: Expr,
}

impl TagExpression {
    /// Parse the boolean notation, such as `@a and (@b or not @c)`.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError`] for unknown characters, dangling operators or
    /// unbalanced parentheses.
    pub fn parse(input: &str) -> Result<Self, TagExprError> {
        let mut parser = Parser::new(input)?;
        let root = parser.parse_expression()?;
        parser.expect_end()?;
        Ok(Self { root })
    }

    /// Build a filter from legacy `--tags` options.
    ///
    /// Within one option `,` separates alternatives, and a leading `~` or `-`
    /// negates a term. The `@` is optional. Options are combined with AND.
    ///
    /// # Errors
    ///
    /// Returns [`TagExprError`] when no options are given, an option holds
    /// no terms, or a term is not a valid tag name. The offset is relative to
    /// the offending option.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenic_parser::TagExpression;
    ///
    /// let expr = TagExpression::from_legacy(&["@a,~@b", "c"]).expect("valid options");
    /// assert!(expr.evaluate(["c"]));
    /// assert!(!expr.evaluate(["b", "c"]));
    /// ```
    pub fn from_legacy<S: AsRef<str>>(options: &[S]) -> Result<Self, TagExprError> {
        legacy::parse_options(options).map(|root| Self { root })
    }

    /// Accept either notation.
    ///
    /// A single option that parses as a boolean expression is used as such;
    /// anything else is read as legacy options.
    ///
    /// # Errors
    ///
    /// Returns the legacy parser's error when neither notation applies.
    pub fn from_options<S: AsRef<str>>(options: &[S]) -> Result<Self, TagExprError> {
        if let [single] = options {
            if let Ok(expr) = Self::parse(single.as_ref()) {
                return Ok(expr);
            }
        }
        Self::from_legacy(options)
    }

    /// Test a set of tag names, given without the leading `@`.
    pub fn evaluate<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let set: HashSet<&'a str> = tags.into_iter().collect();
        self.root.eval(&set)
    }
}

impl fmt::Display for TagExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
