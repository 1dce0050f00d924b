//! Position over the scanned lines of one document.

use crate::classify::{LineKind, classify};
use crate::errors::ParseError;
use crate::i18n::KeywordSet;
use crate::model::Tag;
use crate::scanner::Line;
use crate::tags::parse_tag_line;

/// Forward-only cursor that classifies lines on demand.
///
/// Blank and comment lines are skipped by every peek; only text block
/// decoding sees them, through [`lines`](Self::lines).
pub(super) struct LineCursor<'l, 'src> {
    lines: &'l [Line<'src>],
    keywords: &'static KeywordSet,
    pos: usize,
}

impl<'l, 'src> LineCursor<'l, 'src> {
    pub(super) fn new(lines: &'l [Line<'src>], keywords: &'static KeywordSet, pos: usize) -> Self {
        Self {
            lines,
            keywords,
            pos,
        }
    }

    pub(super) fn keywords(&self) -> &'static KeywordSet {
        self.keywords
    }

    pub(super) fn lines(&self) -> &'l [Line<'src>] {
        self.lines
    }

    pub(super) fn position(&self) -> usize {
        self.pos
    }

    pub(super) fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Consume the line returned by the last peek.
    pub(super) fn bump(&mut self) {
        self.pos += 1;
    }

    /// The next significant line and its classification.
    pub(super) fn peek(&mut self) -> Option<(Line<'src>, LineKind<'src>)> {
        while let Some((_, kind)) = self.at(self.pos) {
            if !kind.is_transparent() {
                break;
            }
            self.pos += 1;
        }
        self.at(self.pos)
    }

    /// The first significant line after any run of tag lines, without
    /// moving the cursor.
    pub(super) fn peek_past_tags(&self) -> Option<(Line<'src>, LineKind<'src>)> {
        (self.pos..self.lines.len())
            .filter_map(|idx| self.at(idx))
            .find(|(_, kind)| !kind.is_transparent() && *kind != LineKind::TagLine)
    }

    /// Consume a run of tag lines.
    pub(super) fn take_tags(&mut self) -> Result<Vec<Tag>, ParseError> {
        let mut tags = Vec::new();
        while let Some((line, LineKind::TagLine)) = self.peek() {
            tags.extend(parse_tag_line(line.text, line.number)?);
            self.bump();
        }
        Ok(tags)
    }

    /// Consume free-text lines following a header.
    pub(super) fn take_description(&mut self) -> Vec<String> {
        let mut description = Vec::new();
        while let Some((line, LineKind::PlainText)) = self.peek() {
            description.push(line.text.to_owned());
            self.bump();
        }
        description
    }

    fn at(&self, idx: usize) -> Option<(Line<'src>, LineKind<'src>)> {
        let line = *self.lines.get(idx)?;
        Some((line, classify(line.text, self.keywords)))
    }
}
