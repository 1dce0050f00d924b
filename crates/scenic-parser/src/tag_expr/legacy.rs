//! The comma-and-tilde option notation.
//!
//! `--tags=@a,~@b --tags=c` reads as `(@a or not @b) and @c`.

use super::TagExprError;
use super::ast::Expr;
use super::lexer::is_tag_char;

pub(super) fn parse_options<S: AsRef<str>>(options: &[S]) -> Result<Expr, TagExprError> {
    let clauses = options
        .iter()
        .map(|option| parse_option(option.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    clauses
        .into_iter()
        .reduce(Expr::and)
        .ok_or_else(|| TagExprError::new(0, "no tag options given"))
}

fn parse_option(option: &str) -> Result<Expr, TagExprError> {
    let mut offset = 0;
    let mut terms = Vec::new();
    for raw in option.split(',') {
        let term_start = offset + (raw.len() - raw.trim_start().len());
        offset += raw.len() + 1;
        let term = raw.trim();
        if !term.is_empty() {
            terms.push(parse_term(term, term_start)?);
        }
    }
    terms
        .into_iter()
        .reduce(Expr::or)
        .ok_or_else(|| TagExprError::new(0, "empty tag option"))
}

fn parse_term(term: &str, start: usize) -> Result<Expr, TagExprError> {
    let (negated, rest) = term
        .strip_prefix(['~', '-'])
        .map_or((false, term), |rest| (true, rest));
    let name_start = start + (term.len() - rest.len());
    let name = rest.strip_prefix('@').unwrap_or(rest);
    if name.is_empty() || !name.chars().all(is_tag_char) {
        return Err(TagExprError::new(name_start, format!("invalid tag '{rest}'")));
    }
    let tag = Expr::Tag(name.to_owned());
    Ok(if negated { Expr::negate(tag) } else { tag })
}
