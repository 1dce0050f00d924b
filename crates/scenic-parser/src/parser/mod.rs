//! Structural parser building the document tree.
//!
//! The grammar is line oriented:
//!
//! ```text
//! document   := tags? feature-header description background? element*
//! background := background-header description step*
//! element    := tags? (scenario | outline)
//! outline    := outline-header description step* (tags? examples)*
//! step       := step-line (table | text-block)?
//! ```
//!
//! Blank and comment lines may appear anywhere outside text blocks. Any
//! line that fits no rule fails the whole parse; no partial tree escapes.

mod cursor;

use tracing::{debug, trace};

use crate::classify::{Header, LineKind};
use crate::errors::{ParseError, ParseErrorKind, unexpected};
use crate::keyword::StepType;
use crate::language::resolve_language;
use crate::model::{
    Background, Element, Examples, Feature, Scenario, ScenarioOutline, Step, Table, Tag,
};
use crate::outline::expand;
use crate::scanner::{Line, scan};
use crate::table::parse_table;
use crate::text::parse_text_block;

use cursor::LineCursor;

const EXPECT_FEATURE: &str = "a Feature";
const EXPECT_ELEMENT: &str = "a Background, Scenario or Scenario Outline";
const EXPECT_TAGGED: &str = "a Feature, Scenario, Scenario Outline or Examples after tags";
const EXPECT_STEP: &str = "a step";

/// Parse a whole document. `Ok(None)` means it held only blanks and comments.
pub(crate) fn parse_document(
    text: &str,
    language: Option<&str>,
) -> Result<Option<Feature>, ParseError> {
    let lines = scan(text);
    let resolved = resolve_language(&lines, language)?;
    if resolved.first_content >= lines.len() {
        debug!("document has no content");
        return Ok(None);
    }
    let mut cursor = LineCursor::new(&lines, resolved.keywords, resolved.first_content);
    let feature = parse_feature_block(&mut cursor)?;
    debug!(
        feature = %feature.name,
        language = %feature.language,
        elements = feature.elements.len(),
        "parsed feature"
    );
    Ok(Some(feature))
}

/// Parse a bare step list.
pub(crate) fn parse_step_document(
    text: &str,
    language: Option<&str>,
) -> Result<Vec<Step>, ParseError> {
    let lines = scan(text);
    let resolved = resolve_language(&lines, language)?;
    let mut cursor = LineCursor::new(&lines, resolved.keywords, resolved.first_content);
    let steps = parse_steps(&mut cursor)?;
    if let Some((line, _)) = cursor.peek() {
        return Err(unexpected(line.number, EXPECT_STEP, line.text));
    }
    Ok(steps)
}

fn parse_feature_block(cursor: &mut LineCursor<'_, '_>) -> Result<Feature, ParseError> {
    let tags = cursor.take_tags()?;
    let (line, header) = match cursor.peek() {
        Some((line, LineKind::Feature(header))) => (line, header),
        Some((line, _)) => {
            let expected = if tags.is_empty() {
                EXPECT_FEATURE
            } else {
                EXPECT_TAGGED
            };
            return Err(unexpected(line.number, expected, line.text));
        }
        None => return Err(dangling_tags(cursor)),
    };
    cursor.bump();
    let description = cursor.take_description();

    let mut background: Option<Background> = None;
    let mut elements: Vec<Element> = Vec::new();
    while let Some((next, kind)) = cursor.peek() {
        match kind {
            LineKind::TagLine => elements.push(parse_tagged_element(cursor, next)?),
            LineKind::Background(bg) => {
                if background.is_some() {
                    return Err(ParseError::new(
                        ParseErrorKind::DuplicateBackground,
                        next.number,
                    ));
                }
                if !elements.is_empty() {
                    return Err(ParseError::new(
                        ParseErrorKind::BackgroundPosition,
                        next.number,
                    ));
                }
                cursor.bump();
                background = Some(parse_background(cursor, next, bg)?);
            }
            LineKind::Scenario(_) | LineKind::ScenarioOutline(_) => {
                elements.push(parse_element(cursor, Vec::new())?);
            }
            LineKind::Examples(_) => {
                return Err(ParseError::new(
                    ParseErrorKind::MisplacedExamples,
                    next.number,
                ));
            }
            _ => return Err(unexpected(next.number, EXPECT_ELEMENT, next.text)),
        }
    }

    Ok(Feature {
        keyword: header.keyword.to_owned(),
        name: header.name.to_owned(),
        description,
        tags,
        language: cursor.keywords().code().to_owned(),
        background,
        elements,
        filename: None,
        line: line.number,
    })
}

/// Dispatch a tag run to the element it belongs to.
fn parse_tagged_element(
    cursor: &mut LineCursor<'_, '_>,
    tag_line: Line<'_>,
) -> Result<Element, ParseError> {
    match cursor.peek_past_tags() {
        Some((_, LineKind::Background(_))) => Err(ParseError::new(
            ParseErrorKind::TaggedBackground,
            tag_line.number,
        )),
        Some((_, LineKind::Scenario(_) | LineKind::ScenarioOutline(_))) => {
            let tags = cursor.take_tags()?;
            parse_element(cursor, tags)
        }
        Some((line, LineKind::Examples(_))) => Err(ParseError::new(
            ParseErrorKind::MisplacedExamples,
            line.number,
        )),
        Some((line, _)) => Err(unexpected(line.number, EXPECT_TAGGED, line.text)),
        None => Err(dangling_tags(cursor)),
    }
}

fn dangling_tags(cursor: &LineCursor<'_, '_>) -> ParseError {
    let last_tag = cursor
        .lines()
        .iter()
        .rev()
        .find(|line| line.text.starts_with('@'));
    last_tag.map_or_else(
        || unexpected(0, EXPECT_FEATURE, ""),
        |line| unexpected(line.number, EXPECT_TAGGED, line.text),
    )
}

fn parse_background(
    cursor: &mut LineCursor<'_, '_>,
    line: Line<'_>,
    header: Header<'_>,
) -> Result<Background, ParseError> {
    let description = cursor.take_description();
    let steps = parse_steps(cursor)?;
    trace!(line = line.number, steps = steps.len(), "parsed background");
    Ok(Background {
        keyword: header.keyword.to_owned(),
        name: optional_name(header.name),
        description,
        steps,
        line: line.number,
    })
}

/// Parse a scenario or outline whose tags were already consumed.
fn parse_element(
    cursor: &mut LineCursor<'_, '_>,
    tags: Vec<Tag>,
) -> Result<Element, ParseError> {
    let Some((line, kind)) = cursor.peek() else {
        return Err(dangling_tags(cursor));
    };
    cursor.bump();
    match kind {
        LineKind::Scenario(header) => {
            let description = cursor.take_description();
            let steps = parse_steps(cursor)?;
            trace!(line = line.number, name = header.name, "parsed scenario");
            Ok(Element::Scenario(Scenario {
                keyword: header.keyword.to_owned(),
                name: header.name.to_owned(),
                description,
                tags,
                steps,
                line: line.number,
            }))
        }
        LineKind::ScenarioOutline(header) => {
            let description = cursor.take_description();
            let steps = parse_steps(cursor)?;
            let examples = parse_examples_blocks(cursor)?;
            let mut outline = ScenarioOutline {
                keyword: header.keyword.to_owned(),
                name: header.name.to_owned(),
                description,
                tags,
                steps,
                examples,
                scenarios: Vec::new(),
                line: line.number,
            };
            outline.scenarios = expand(&outline);
            trace!(
                line = line.number,
                name = header.name,
                stubs = outline.scenarios.len(),
                "parsed scenario outline"
            );
            Ok(Element::ScenarioOutline(outline))
        }
        _ => Err(unexpected(line.number, EXPECT_ELEMENT, line.text)),
    }
}

fn parse_examples_blocks(cursor: &mut LineCursor<'_, '_>) -> Result<Vec<Examples>, ParseError> {
    let mut blocks = Vec::new();
    loop {
        let tags = match cursor.peek() {
            Some((_, LineKind::Examples(_))) => Vec::new(),
            Some((_, LineKind::TagLine))
                if matches!(cursor.peek_past_tags(), Some((_, LineKind::Examples(_)))) =>
            {
                cursor.take_tags()?
            }
            _ => return Ok(blocks),
        };
        let Some((line, LineKind::Examples(header))) = cursor.peek() else {
            return Ok(blocks);
        };
        cursor.bump();
        let table = parse_optional_table(cursor)?;
        blocks.push(Examples {
            keyword: header.keyword.to_owned(),
            name: optional_name(header.name),
            tags,
            table,
            line: line.number,
        });
    }
}

/// Parse consecutive step lines with their arguments.
fn parse_steps(cursor: &mut LineCursor<'_, '_>) -> Result<Vec<Step>, ParseError> {
    let mut steps = Vec::new();
    let mut previous: Option<StepType> = None;
    while let Some((
        line,
        LineKind::Step {
            keyword,
            literal,
            text,
        },
    )) = cursor.peek()
    {
        cursor.bump();
        let step_type = keyword.resolve(&mut previous).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::OutOfOrderStep {
                    keyword: literal.to_owned(),
                },
                line.number,
            )
        })?;
        let (block, table) = parse_step_argument(cursor)?;
        let has_argument = block.is_some() || table.is_some();
        let name = if has_argument {
            text.strip_suffix(':').map_or(text, str::trim_end)
        } else {
            text
        };
        steps.push(Step {
            step_type,
            keyword: literal.to_owned(),
            name: name.to_owned(),
            text: block,
            table,
            line: line.number,
        });
    }
    Ok(steps)
}

fn parse_step_argument(
    cursor: &mut LineCursor<'_, '_>,
) -> Result<(Option<String>, Option<Table>), ParseError> {
    match cursor.peek() {
        Some((line, LineKind::TextBlockDelimiter(delimiter))) => {
            let (text, next) = parse_text_block(cursor.lines(), cursor.position(), delimiter)
                .ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnterminatedTextBlock { delimiter },
                        line.number,
                    )
                })?;
            cursor.seek(next);
            Ok((Some(text), None))
        }
        Some((_, LineKind::TableRow)) => Ok((None, parse_optional_table(cursor)?)),
        _ => Ok((None, None)),
    }
}

fn parse_optional_table(cursor: &mut LineCursor<'_, '_>) -> Result<Option<Table>, ParseError> {
    if !matches!(cursor.peek(), Some((_, LineKind::TableRow))) {
        return Ok(None);
    }
    let (table, next) = parse_table(cursor.lines(), cursor.position())?;
    cursor.seek(next);
    Ok(Some(table))
}

fn optional_name(name: &str) -> Option<String> {
    (!name.is_empty()).then(|| name.to_owned())
}
