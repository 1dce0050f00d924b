//! Multi-line text block decoding.
//!
//! A block opens with `"""` or `'''` and runs verbatim until a line holding
//! only the same delimiter. Blank lines and `#` lines inside it are content.

use crate::scanner::Line;

/// Decode the text block whose opening delimiter is `lines[open]`.
///
/// The opening delimiter's indentation is removed from every content line
/// (lines indented less lose only their leading whitespace). Returns the
/// joined text and the index just past the closing delimiter, or `None` when
/// the block is never closed.
pub(crate) fn parse_text_block(
    lines: &[Line<'_>],
    open: usize,
    delimiter: &str,
) -> Option<(String, usize)> {
    let indent = lines.get(open)?.indent();
    let body = lines.get(open + 1..)?;
    let close = body.iter().position(|line| line.text == delimiter)?;
    let text = body
        .get(..close)?
        .iter()
        .map(|line| line.dedent(indent))
        .collect::<Vec<_>>()
        .join("\n");
    Some((text, open + close + 2))
}
