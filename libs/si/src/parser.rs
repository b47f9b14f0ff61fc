//! Unit expression parser - converts tokens to AST
//!
//! Recursive descent parser with one token of lookahead.
//! Precedence (lowest to highest):
//! 1. multiplicative (*, ·, /) - left-associative
//! 2. power (^ INTEGER) - non-associative
//! 3. factor (identifier, number, parenthesized term)

use crate::ast::{AstNode, BinaryOperator};
use crate::error::{Error, Result};
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

const MAX_RECURSION_DEPTH: usize = 200;
/// Largest exponent literal accepted after `^`.
const MAX_EXPONENT: i32 = 1000;

/// Parser for unit expressions
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    recursion_depth: usize,
}

impl Parser {
    /// Create a parser over a token stream ending in `Eof`
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            recursion_depth: 0,
        }
    }

    /// Peek at the current token
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    /// Advance and return the consumed token
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Byte offset of the current token, or of the end of input
    fn position(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.position)
            .unwrap_or(0)
    }

    fn error_at(&self, message: impl Into<String>) -> Error {
        Error::Parse {
            position: self.position(),
            message: message.into(),
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        let found = self
            .peek()
            .map(Token::describe)
            .unwrap_or_else(|| "end of input".to_string());
        self.error_at(format!("expected {}, found {}", expected, found))
    }

    /// Parse the entire token stream (top-level entry point)
    pub fn parse(&mut self) -> Result<AstNode> {
        let expr = self.parse_term()?;

        // Ensure we've consumed all input
        if self.peek_kind() != TokenKind::Eof {
            let message = match self.peek_kind() {
                TokenKind::RightParen => "unmatched ')'".to_string(),
                TokenKind::Power => "exponents cannot be chained".to_string(),
                _ => format!(
                    "unexpected trailing {}",
                    self.peek().map(Token::describe).unwrap_or_default()
                ),
            };
            return Err(self.error_at(message));
        }

        Ok(expr)
    }

    fn check_recursion_depth(&mut self) -> Result<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            return Err(self.error_at(format!(
                "expression too deeply nested (max depth: {})",
                MAX_RECURSION_DEPTH
            )));
        }
        Ok(())
    }

    /// term := power ( ('*' | '/') power )*
    fn parse_term(&mut self) -> Result<AstNode> {
        self.check_recursion_depth()?;
        let mut left = self.parse_power()?;

        loop {
            let operator = match self.peek_kind() {
                TokenKind::Multiply => BinaryOperator::Multiply,
                TokenKind::Divide => BinaryOperator::Divide,
                _ => break,
            };
            self.advance();
            let right = self.parse_power()?;
            left = AstNode::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.recursion_depth -= 1;
        Ok(left)
    }

    /// power := factor ( '^' INTEGER )?
    fn parse_power(&mut self) -> Result<AstNode> {
        let base = self.parse_factor()?;

        if self.peek_kind() != TokenKind::Power {
            return Ok(base);
        }
        self.advance(); // Skip '^'

        let exponent = self.parse_integer_exponent()?;
        if self.peek_kind() == TokenKind::Power {
            return Err(self.error_at("exponents cannot be chained"));
        }

        Ok(AstNode::Power {
            base: Box::new(base),
            exponent,
        })
    }

    fn parse_integer_exponent(&mut self) -> Result<i32> {
        if self.peek_kind() != TokenKind::Number {
            return Err(self.unexpected("integer exponent"));
        }
        let position = self.position();
        let token = self.advance().ok_or_else(|| self.unexpected("integer exponent"))?;
        if token.lexeme.contains('.') {
            return Err(Error::Parse {
                position,
                message: format!("exponent must be an integer, found '{}'", token.lexeme),
            });
        }
        match token.lexeme.parse::<i32>() {
            Ok(exponent) if exponent <= MAX_EXPONENT => Ok(exponent),
            _ => Err(Error::Parse {
                position,
                message: format!(
                    "exponent {} out of range (max: {})",
                    token.lexeme, MAX_EXPONENT
                ),
            }),
        }
    }

    /// factor := IDENT | NUMBER | '(' term ')'
    fn parse_factor(&mut self) -> Result<AstNode> {
        match self.peek_kind() {
            TokenKind::Identifier => {
                let token = self.advance().ok_or_else(|| self.unexpected("unit"))?;
                Ok(AstNode::Identifier(token.lexeme))
            }
            TokenKind::Number => {
                let position = self.position();
                let token = self.advance().ok_or_else(|| self.unexpected("number"))?;
                let value = token.lexeme.parse::<f64>().map_err(|_| Error::Parse {
                    position,
                    message: format!("invalid number '{}'", token.lexeme),
                })?;
                Ok(AstNode::Number(value))
            }
            TokenKind::LeftParen => {
                self.advance(); // Skip '('
                let inner = self.parse_term()?;
                if self.peek_kind() != TokenKind::RightParen {
                    return Err(self.unexpected("')'"));
                }
                self.advance(); // Skip ')'
                Ok(AstNode::Group(Box::new(inner)))
            }
            _ => Err(self.unexpected("unit, number or '('")),
        }
    }
}

/// Tokenize and parse a unit expression.
pub fn parse(input: &str) -> Result<AstNode> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).parse()
}
