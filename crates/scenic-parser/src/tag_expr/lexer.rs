//! Tokeniser for the boolean tag notation.
//!
//! Tags are written with a leading `@` which the lexer drops. Operator
//! keywords are case insensitive, so `@fast Or not @wip` is accepted.

use super::TagExprError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum TokenKind {
    Tag(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
    End,
}

#[derive(Clone, Debug)]
pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) start: usize,
}

impl Token {
    pub(super) fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Tag(tag) => format!("'@{tag}'"),
            TokenKind::And => "'and'".to_owned(),
            TokenKind::Or => "'or'".to_owned(),
            TokenKind::Not => "'not'".to_owned(),
            TokenKind::LParen => "'('".to_owned(),
            TokenKind::RParen => "')'".to_owned(),
            TokenKind::End => "end of input".to_owned(),
        }
    }
}

pub(super) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(super) fn next_token(&mut self) -> Result<Token, TagExprError> {
        self.eat_while(char::is_whitespace);
        let start = self.pos;
        let Some(ch) = self.bump() else {
            return Ok(Token {
                kind: TokenKind::End,
                start,
            });
        };
        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '@' => {
                let name = self.eat_while(is_tag_char);
                if name.is_empty() {
                    return Err(TagExprError::new(start + 1, "expected tag name after '@'"));
                }
                TokenKind::Tag(name.to_owned())
            }
            c if c.is_ascii_alphabetic() => {
                self.eat_while(|c| c.is_ascii_alphabetic());
                let word = self.input.get(start..self.pos).unwrap_or_default();
                match word.to_ascii_lowercase().as_str() {
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "not" => TokenKind::Not,
                    _ => {
                        return Err(TagExprError::new(
                            start,
                            format!("unexpected identifier '{word}'"),
                        ));
                    }
                }
            }
            other => {
                return Err(TagExprError::new(
                    start,
                    format!("unexpected character '{other}'"),
                ));
            }
        };
        Ok(Token { kind, start })
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos..)?.chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume characters matching `pred` and return them.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let rest = self.input.get(start..).unwrap_or_default();
        let len = rest
            .char_indices()
            .find(|(_, c)| !pred(*c))
            .map_or(rest.len(), |(idx, _)| idx);
        self.pos += len;
        rest.get(..len).unwrap_or_default()
    }
}

pub(super) fn is_tag_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.')
}
