//! The parsed document tree.
//!
//! Every node records the 1-based line it was declared on. Nodes are plain
//! owned values built once per parse and never mutated afterwards.

use std::hash::{Hash, Hasher};

use crate::keyword::StepType;
use crate::tag_expr::TagExpression;

/// A `@name` tag attached to a feature, scenario or examples block.
///
/// Equality and hashing consider only the name, so the same tag written on
/// different lines compares equal.
///
/// # Examples
///
/// ```
/// use scenic_parser::Tag;
///
/// assert_eq!(Tag::new("slow", 1), Tag::new("slow", 99));
/// assert_eq!(Tag::new("slow", 1), "slow");
/// ```
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tag {
    /// Tag name without the leading `@`.
    pub name: String,
    /// Line the tag was written on.
    pub line: usize,
}

impl Tag {
    /// Create a tag from its name and line.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

/// A data table attached to a step or an examples block.
///
/// Every row holds exactly `headings.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    /// Cells of the first row.
    pub headings: Vec<String>,
    /// Line of the heading row.
    pub header_line: usize,
    /// Data rows below the heading.
    pub rows: Vec<Row>,
}

/// One data row of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    /// Decoded cell values.
    pub cells: Vec<String>,
    /// Line the row was written on.
    pub line: usize,
}

impl Table {
    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the column named `heading`, top to bottom.
    ///
    /// Returns `None` when no heading matches.
    #[must_use]
    pub fn column(&self, heading: &str) -> Option<Vec<&str>> {
        let idx = self.headings.iter().position(|h| h == heading)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.cells.get(idx).map(String::as_str))
                .collect(),
        )
    }

    /// Iterate over rows as `(heading, cell)` pairs.
    pub fn rows_as_maps(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        self.rows.iter().map(|row| {
            self.headings
                .iter()
                .map(String::as_str)
                .zip(row.cells.iter().map(String::as_str))
                .collect()
        })
    }
}

/// A single step of a scenario or background.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    /// Resolved semantic type; conjunctions inherit it.
    pub step_type: StepType,
    /// Keyword spelling as listed in the language table.
    pub keyword: String,
    /// Step text after the keyword.
    pub name: String,
    /// Attached multi-line text, if any.
    pub text: Option<String>,
    /// Attached data table, if any.
    pub table: Option<Table>,
    /// Line of the step.
    pub line: usize,
}

/// Steps run before every scenario of a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Background {
    /// Keyword spelling as listed in the language table.
    pub keyword: String,
    /// Optional name after the colon.
    pub name: Option<String>,
    /// Description lines below the header.
    pub description: Vec<String>,
    /// The background steps.
    pub steps: Vec<Step>,
    /// Line of the header.
    pub line: usize,
}

/// A block of example rows for a scenario outline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Examples {
    /// Keyword spelling as listed in the language table.
    pub keyword: String,
    /// Optional name after the colon.
    pub name: Option<String>,
    /// Tags written directly above this block.
    pub tags: Vec<Tag>,
    /// The example rows.
    pub table: Option<Table>,
    /// Line of the header.
    pub line: usize,
}

/// A concrete scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scenario {
    /// Keyword spelling as listed in the language table.
    pub keyword: String,
    /// Scenario name.
    pub name: String,
    /// Description lines below the header.
    pub description: Vec<String>,
    /// Tags written above the scenario.
    pub tags: Vec<Tag>,
    /// Scenario steps.
    pub steps: Vec<Step>,
    /// Line of the header.
    pub line: usize,
}

/// A scenario template run once per example row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioOutline {
    /// Keyword spelling as listed in the language table.
    pub keyword: String,
    /// Outline name.
    pub name: String,
    /// Description lines below the header.
    pub description: Vec<String>,
    /// Tags written above the outline.
    pub tags: Vec<Tag>,
    /// Template steps with `<placeholders>` left intact.
    pub steps: Vec<Step>,
    /// Example blocks in document order.
    pub examples: Vec<Examples>,
    /// One stub per example row, used for tag selection.
    pub scenarios: Vec<Scenario>,
    /// Line of the header.
    pub line: usize,
}

/// A top-level child of a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Element {
    /// A plain scenario.
    Scenario(Scenario),
    /// A scenario outline.
    ScenarioOutline(ScenarioOutline),
}

impl Element {
    /// Name of the scenario or outline.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scenario(s) => &s.name,
            Self::ScenarioOutline(o) => &o.name,
        }
    }

    /// Tags written above the element.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Scenario(s) => &s.tags,
            Self::ScenarioOutline(o) => &o.tags,
        }
    }

    /// Line of the element header.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Scenario(s) => s.line,
            Self::ScenarioOutline(o) => o.line,
        }
    }
}

/// A parsed feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Feature {
    /// Keyword spelling as listed in the language table.
    pub keyword: String,
    /// Feature name.
    pub name: String,
    /// Description lines below the header.
    pub description: Vec<String>,
    /// Tags written above the feature.
    pub tags: Vec<Tag>,
    /// Language code the document was parsed with.
    pub language: String,
    /// Shared background, if declared.
    pub background: Option<Background>,
    /// Scenarios and outlines in document order.
    pub elements: Vec<Element>,
    /// File the feature was read from, when known.
    pub filename: Option<String>,
    /// Line of the header.
    pub line: usize,
}

impl Feature {
    /// Plain scenarios and outline stubs in document order.
    pub fn walk_scenarios(&self) -> impl Iterator<Item = &Scenario> + '_ {
        self.elements.iter().flat_map(|element| match element {
            Element::Scenario(s) => std::slice::from_ref(s).iter(),
            Element::ScenarioOutline(o) => o.scenarios.iter(),
        })
    }

    /// Scenarios whose inherited tags satisfy `expr`.
    ///
    /// A scenario inherits every feature tag in addition to its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenic_parser::{TagExpression, parse_feature};
    ///
    /// let text = "@web\nFeature: f\n  @slow\n  Scenario: a\n    Given x\n  Scenario: b\n    Given y\n";
    /// let feature = parse_feature(text, None, None).expect("valid").expect("non-empty");
    /// let expr = TagExpression::parse("@web and not @slow").expect("valid expression");
    /// let names: Vec<&str> = feature.select(&expr).map(|s| s.name.as_str()).collect();
    /// assert_eq!(names, ["b"]);
    /// ```
    pub fn select<'a>(
        &'a self,
        expr: &'a TagExpression,
    ) -> impl Iterator<Item = &'a Scenario> + 'a {
        self.walk_scenarios().filter(move |scenario| {
            let names = self
                .tags
                .iter()
                .chain(&scenario.tags)
                .map(|tag| tag.name.as_str());
            expr.evaluate(names)
        })
    }
}
