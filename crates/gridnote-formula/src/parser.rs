//! Arithmetic expression parser
//!
//! A recursive descent parser with standard operator precedence, run over
//! the expression text after cell references have been substituted with
//! their values.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};

/// Parse an arithmetic expression into an AST
///
/// # Example
/// ```rust
/// use gridnote_formula::parse_expression;
///
/// let expr = parse_expression("1+2*3").unwrap();
/// let expr = parse_expression("(4-1)/3").unwrap();
/// assert!(parse_expression("1+*2").is_err());
/// ```
pub fn parse_expression(input: &str) -> FormulaResult<Expr> {
    let mut parser = ExprParser::new(input);
    let expr = parser.parse_expr()?;

    // Make sure we consumed all input
    parser.skip_whitespace();
    if !parser.is_at_end() {
        return Err(FormulaError::Parse(format!(
            "unexpected characters after expression: '{}'",
            parser.rest()
        )));
    }

    Ok(expr)
}

/// Character-level recursive descent parser
struct ExprParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> ExprParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    // === Grammar ===
    //
    // expr   := term   (('+' | '-') term)*
    // term   := factor (('*' | '/') factor)*
    // factor := NUMBER | '(' expr ')' | ('+' | '-') factor

    fn parse_expr(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_term()?;

        loop {
            self.skip_whitespace();
            let op = match self.peek_char() {
                Some('+') => BinaryOperator::Add,
                Some('-') => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance();

            let right = self.parse_term()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_factor()?;

        loop {
            self.skip_whitespace();
            let op = match self.peek_char() {
                Some('*') => BinaryOperator::Multiply,
                Some('/') => BinaryOperator::Divide,
                _ => break,
            };
            self.advance();

            let right = self.parse_factor()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> FormulaResult<Expr> {
        self.skip_whitespace();

        match self.peek_char() {
            Some('(') => {
                self.advance();
                let expr = self.parse_expr()?;
                self.skip_whitespace();
                if self.peek_char() != Some(')') {
                    return Err(FormulaError::Parse("missing closing parenthesis".into()));
                }
                self.advance();
                Ok(expr)
            }
            Some('+') => {
                self.advance();
                let operand = self.parse_factor()?;
                Ok(Expr::UnaryOp {
                    op: UnaryOperator::Plus,
                    operand: Box::new(operand),
                })
            }
            Some('-') => {
                self.advance();
                let operand = self.parse_factor()?;
                Ok(Expr::UnaryOp {
                    op: UnaryOperator::Negate,
                    operand: Box::new(operand),
                })
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.parse_number(),
            Some(c) => Err(FormulaError::Parse(format!("unexpected character '{}'", c))),
            None => Err(FormulaError::Parse("unexpected end of expression".into())),
        }
    }

    fn parse_number(&mut self) -> FormulaResult<Expr> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() || c == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.input[start..self.pos];
        let value: f64 = text
            .parse()
            .map_err(|_| FormulaError::Parse(format!("invalid number '{}'", text)))?;
        Ok(Expr::Number(value))
    }

    // === Input handling ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_expression("42").unwrap(), Expr::Number(42.0));
        assert_eq!(parse_expression("3.25").unwrap(), Expr::Number(3.25));
        assert_eq!(parse_expression("  7 ").unwrap(), Expr::Number(7.0));
    }

    #[test]
    fn test_precedence() {
        // 1+2*3 parses as 1+(2*3)
        let expr = parse_expression("1+2*3").unwrap();
        match expr {
            Expr::BinaryOp {
                op: BinaryOperator::Add,
                right,
                ..
            } => assert!(matches!(
                *right,
                Expr::BinaryOp {
                    op: BinaryOperator::Multiply,
                    ..
                }
            )),
            other => panic!("expected Add at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_parentheses() {
        // (1+2)*3 parses as Multiply at the root
        let expr = parse_expression("(1+2)*3").unwrap();
        assert!(matches!(
            expr,
            Expr::BinaryOp {
                op: BinaryOperator::Multiply,
                ..
            }
        ));
    }

    #[test]
    fn test_unary_sign() {
        assert!(matches!(
            parse_expression("-5").unwrap(),
            Expr::UnaryOp {
                op: UnaryOperator::Negate,
                ..
            }
        ));
        assert!(matches!(
            parse_expression("+5").unwrap(),
            Expr::UnaryOp {
                op: UnaryOperator::Plus,
                ..
            }
        ));
        // Substituting a negative value can produce doubled signs
        assert!(parse_expression("2--3").is_ok());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_expression("").is_err());
        assert!(parse_expression("1+").is_err());
        assert!(parse_expression("1+*2").is_err());
        assert!(parse_expression("(1+2").is_err());
        assert!(parse_expression("1)").is_err());
        assert!(parse_expression("1.2.3").is_err());
        assert!(parse_expression("hello").is_err());
        assert!(parse_expression("1 2").is_err());
    }
}
