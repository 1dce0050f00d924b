//! Step keyword categories and conjunction resolution.
//!
//! A step line is introduced by one of five keyword categories (plus the
//! universal `*`). Only three of them carry meaning for step matching:
//! [`StepType`] is what a downstream runner dispatches on, while
//! [`StepKeyword`] records which category the literal spelling belonged to.

use std::fmt;

/// Semantic role of a step, used downstream to match step implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepType {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action.
    When,
    /// Assert the expected outcome.
    Then,
}

impl StepType {
    /// Return the lowercase name of the step type.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenic_parser::StepType;
    ///
    /// assert_eq!(StepType::Given.as_str(), "given");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword category that introduced a step line.
///
/// `And`, `But` and `*` do not carry a step type of their own; the parser
/// resolves them against the preceding primary step with
/// [`resolve`](Self::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Primary `Given` keyword or a translation of it.
    Given,
    /// Primary `When` keyword or a translation of it.
    When,
    /// Primary `Then` keyword or a translation of it.
    Then,
    /// Conjunction continuing the previous step type.
    And,
    /// Contrasting conjunction continuing the previous step type.
    But,
    /// The language-neutral `*` bullet.
    Asterisk,
}

impl StepKeyword {
    /// Return the English category name.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenic_parser::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::Asterisk.as_str(), "*");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
            Self::Asterisk => "*",
        }
    }

    /// Return `true` for `And` and `But`.
    #[must_use]
    pub const fn is_conjunction(self) -> bool {
        matches!(self, Self::And | Self::But)
    }

    /// The step type of a primary keyword, `None` for conjunctions and `*`.
    #[must_use]
    pub const fn primary_type(self) -> Option<StepType> {
        match self {
            Self::Given => Some(StepType::Given),
            Self::When => Some(StepType::When),
            Self::Then => Some(StepType::Then),
            Self::And | Self::But | Self::Asterisk => None,
        }
    }

    /// Resolve the step type of this keyword against the previous step.
    ///
    /// Primary keywords update `prev` and return their own type. `And` and
    /// `But` inherit `prev` and return `None` when there is nothing to inherit
    /// from. `*` inherits `prev` as well but falls back to `Given` when it
    /// opens a step list.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenic_parser::{StepKeyword, StepType};
    ///
    /// let mut prev = None;
    /// assert_eq!(StepKeyword::And.resolve(&mut prev), None);
    /// assert_eq!(StepKeyword::When.resolve(&mut prev), Some(StepType::When));
    /// assert_eq!(StepKeyword::But.resolve(&mut prev), Some(StepType::When));
    /// assert_eq!(prev, Some(StepType::When));
    /// ```
    #[must_use]
    pub fn resolve(self, prev: &mut Option<StepType>) -> Option<StepType> {
        match self.primary_type() {
            Some(ty) => {
                *prev = Some(ty);
                Some(ty)
            }
            None if self.is_conjunction() => *prev,
            None => {
                let ty = prev.unwrap_or(StepType::Given);
                *prev = Some(ty);
                Some(ty)
            }
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
