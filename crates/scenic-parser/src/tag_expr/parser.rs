use super::TagExprError;
use super::ast::Expr;
use super::lexer::{Lexer, Token, TokenKind};

#[derive(Clone, Copy)]
enum BinaryOp {
    And,
    Or,
}

impl BinaryOp {
    const fn binding_power(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
        }
    }

    fn combine(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            Self::Or => Expr::or(lhs, rhs),
            Self::And => Expr::and(lhs, rhs),
        }
    }
}

/// Precedence-climbing parser over the token stream.
pub(super) struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    pub(super) fn new(input: &'a str) -> Result<Self, TagExprError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    pub(super) fn parse_expression(&mut self) -> Result<Expr, TagExprError> {
        self.parse_binary(0)
    }

    pub(super) fn expect_end(&self) -> Result<(), TagExprError> {
        if self.current.kind == TokenKind::End {
            Ok(())
        } else {
            Err(TagExprError::new(
                self.current.start,
                format!("unexpected token {}", self.current.describe()),
            ))
        }
    }

    fn advance(&mut self) -> Result<Token, TagExprError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn current_operator(&self) -> Option<BinaryOp> {
        match self.current.kind {
            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),
            _ => None,
        }
    }

    fn parse_binary(&mut self, min_power: u8) -> Result<Expr, TagExprError> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = self.current_operator() {
            let power = op.binding_power();
            if power < min_power {
                break;
            }
            self.advance()?;
            self.ensure_operand(op.name())?;
            let rhs = self.parse_binary(power + 1)?;
            lhs = op.combine(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, TagExprError> {
        if self.current.kind == TokenKind::Not {
            self.advance()?;
            self.ensure_operand("not")?;
            return Ok(Expr::negate(self.parse_unary()?));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, TagExprError> {
        let token = self.advance()?;
        match &token.kind {
            TokenKind::Tag(name) => Ok(Expr::Tag(name.clone())),
            TokenKind::LParen => {
                let inner = self.parse_binary(0)?;
                if self.current.kind == TokenKind::RParen {
                    self.advance()?;
                    Ok(inner)
                } else {
                    Err(TagExprError::new(token.start, "missing ')'"))
                }
            }
            TokenKind::End => Err(TagExprError::new(token.start, "expected tag or '('")),
            _ => Err(TagExprError::new(
                token.start,
                format!("expected tag or '(' but found {}", token.describe()),
            )),
        }
    }

    fn ensure_operand(&self, after: &str) -> Result<(), TagExprError> {
        match self.current.kind {
            TokenKind::Or | TokenKind::And | TokenKind::RParen | TokenKind::End => {
                Err(TagExprError::new(
                    self.current.start,
                    format!("expected tag or '(' after '{after}'"),
                ))
            }
            _ => Ok(()),
        }
    }
}
