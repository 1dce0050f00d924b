//! Expression tree and evaluation.
//!
//! `not` binds tighter than `and`, which binds tighter than `or`; binary
//! operators associate to the left. Rendering adds parentheses only where
//! that precedence would otherwise change the meaning.

use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Expr {
    Tag(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub(super) fn and(lhs: Self, rhs: Self) -> Self {
        Self::And(Box::new(lhs), Box::new(rhs))
    }

    pub(super) fn or(lhs: Self, rhs: Self) -> Self {
        Self::Or(Box::new(lhs), Box::new(rhs))
    }

    pub(super) fn negate(inner: Self) -> Self {
        Self::Not(Box::new(inner))
    }

    pub(super) fn eval(&self, tags: &HashSet<&str>) -> bool {
        match self {
            Self::Tag(tag) => tags.contains(tag.as_str()),
            Self::Not(inner) => !inner.eval(tags),
            Self::And(lhs, rhs) => lhs.eval(tags) && rhs.eval(tags),
            Self::Or(lhs, rhs) => lhs.eval(tags) || rhs.eval(tags),
        }
    }

    const fn precedence(&self) -> u8 {
        match self {
            Self::Or(..) => 1,
            Self::And(..) => 2,
            Self::Not(_) => 3,
            Self::Tag(_) => 4,
        }
    }

    fn write_operand(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "@{tag}"),
            Self::Not(inner) => {
                f.write_str("not ")?;
                inner.write_operand(f, 3)
            }
            Self::And(lhs, rhs) => {
                lhs.write_operand(f, 2)?;
                f.write_str(" and ")?;
                rhs.write_operand(f, 3)
            }
            Self::Or(lhs, rhs) => {
                lhs.write_operand(f, 1)?;
                f.write_str(" or ")?;
                rhs.write_operand(f, 2)
            }
        }
    }
}
