//! Pipe-delimited data table decoding.

use crate::errors::{ParseError, ParseErrorKind};
use crate::model::{Row, Table};
use crate::scanner::Line;

/// Decode the table starting at `lines[start]`.
///
/// The first row supplies the headings. Blank and comment lines between rows
/// are skipped; the table ends at the first other line. Returns the table and
/// the index just past its last row.
pub(crate) fn parse_table(lines: &[Line<'_>], start: usize) -> Result<(Table, usize), ParseError> {
    let mut rows = Vec::new();
    let mut idx = start;
    let mut end = start;
    while let Some(line) = lines.get(idx) {
        if line.text.starts_with('|') {
            rows.push(Row {
                cells: split_row(line.text, line.number)?,
                line: line.number,
            });
            end = idx + 1;
        } else if !(line.text.is_empty() || line.text.starts_with('#')) {
            break;
        }
        idx += 1;
    }

    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        let number = lines.get(start).map_or(0, |l| l.number);
        return Err(malformed(number, "a table needs a heading row".to_owned()));
    };
    if header.cells.is_empty() {
        return Err(malformed(
            header.line,
            "a table needs at least one column".to_owned(),
        ));
    }
    let width = header.cells.len();
    let rows: Vec<Row> = rows.collect();
    if let Some(bad) = rows.iter().find(|row| row.cells.len() != width) {
        return Err(malformed(
            bad.line,
            format!("expected {width} cells, found {}", bad.cells.len()),
        ));
    }
    Ok((
        Table {
            headings: header.cells,
            header_line: header.line,
            rows,
        },
        end,
    ))
}

/// Split a trimmed `| a | b |` row into trimmed cells.
///
/// `\|` decodes to a literal pipe; any other backslash is kept as written.
fn split_row(text: &str, line: usize) -> Result<Vec<String>, ParseError> {
    let body = text.strip_prefix('|').unwrap_or(text);
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'|') => {
                cell.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut cell).trim().to_owned()),
            other => cell.push(other),
        }
    }
    if cell.trim().is_empty() {
        Ok(cells)
    } else {
        Err(malformed(
            line,
            format!("unexpected text '{}' after the last cell", cell.trim()),
        ))
    }
}

fn malformed(line: usize, reason: String) -> ParseError {
    ParseError::new(ParseErrorKind::MalformedTable { reason }, line)
}
