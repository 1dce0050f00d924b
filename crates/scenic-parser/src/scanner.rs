//! Splits feature text into numbered lines.

/// One physical line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The line without its terminator, leading whitespace intact.
    pub raw: &'a str,
    /// The line with surrounding whitespace removed.
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Number of leading whitespace characters in the raw line.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.raw.chars().take_while(|c| c.is_whitespace()).count()
    }

    /// The raw line with up to `count` leading whitespace characters removed.
    #[must_use]
    pub fn dedent(&self, count: usize) -> &'a str {
        let mut rest = self.raw;
        for _ in 0..count {
            let mut chars = rest.chars();
            match chars.next() {
                Some(c) if c.is_whitespace() => rest = chars.as_str(),
                _ => break,
            }
        }
        rest
    }
}

/// Split `input` on `\n`, dropping a trailing `\r` from each line.
///
/// A leading byte order mark is not part of the first line.
///
/// # Examples
///
/// ```
/// use scenic_parser::scanner::scan;
///
/// let lines = scan("Feature: x\r\n  Scenario: y");
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines.get(1).map(|l| l.text), Some("Scenario: y"));
/// ```
#[must_use]
pub fn scan(input: &str) -> Vec<Line<'_>> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    input
        .split('\n')
        .enumerate()
        .map(|(idx, raw)| {
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            Line {
                number: idx + 1,
                raw,
                text: raw.trim(),
            }
        })
        .collect()
}
