//! Tag line decoding and ordered tag-set union.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{ParseError, ParseErrorKind};
use crate::model::Tag;

static TAG_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap_or_else(|_| unreachable!("tag regex should compile"))
});

/// Decode one tag line into tags.
///
/// Tokens are separated by whitespace. Each must be `@name`; a token that
/// starts with `#` turns the rest of the line into a comment.
pub(crate) fn parse_tag_line(text: &str, line: usize) -> Result<Vec<Tag>, ParseError> {
    let mut tags = Vec::new();
    for token in text.split_whitespace() {
        if token.starts_with('#') {
            break;
        }
        let name = token
            .strip_prefix('@')
            .filter(|name| TAG_NAME_RE.is_match(name))
            .ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidTagToken(token.to_owned()), line)
            })?;
        tags.push(Tag::new(name, line));
    }
    Ok(tags)
}

/// Extend `target` with `additions`, keeping first occurrences in order.
pub(crate) fn extend_tag_set(target: &mut Vec<Tag>, additions: &[Tag]) {
    let mut seen: HashSet<String> = HashSet::new();
    target.retain(|tag| seen.insert(tag.name.clone()));
    for tag in additions {
        if seen.insert(tag.name.clone()) {
            target.push(tag.clone());
        }
    }
}

/// Union of two tag sets: `base` first, then unseen `additions`.
///
/// Tags are compared by name, so the line of the first occurrence survives.
pub(crate) fn merge_tag_sets(base: &[Tag], additions: &[Tag]) -> Vec<Tag> {
    let mut merged = base.to_vec();
    extend_tag_set(&mut merged, additions);
    merged
}
