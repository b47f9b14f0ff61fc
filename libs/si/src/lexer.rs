//! Unit expression lexer - tokenizes input strings
//!
//! Converts strings such as `kg·m/s^2` into a stream of tokens. The lexer
//! knows nothing about which identifiers are real units.

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};

/// Glyphs allowed at the start of an identifier besides letters.
fn is_special_identifier_start(c: char) -> bool {
    matches!(c, '%' | '°' | 'µ' | 'μ' | 'Ω')
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || is_special_identifier_start(c)
}

/// The unit expression lexer
pub struct Lexer {
    input_len: usize,
    /// Characters paired with their byte offsets.
    chars: Vec<(usize, char)>,
    index: usize,
}

impl Lexer {
    /// Create a new lexer for the given input
    pub fn new(input: &str) -> Self {
        Self {
            input_len: input.len(),
            chars: input.char_indices().collect(),
            index: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, c)| *c)
    }

    /// Byte offset of the current character (or the input length at the end).
    fn offset(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(pos, _)| *pos)
            .unwrap_or(self.input_len)
    }

    fn advance(&mut self) {
        if self.index < self.chars.len() {
            self.index += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if matches!(c, ' ' | '\t' | '\n' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read a run of characters matching `pred` and return it.
    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut value = String::new();
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            value.push(c);
            self.advance();
        }
        value
    }

    /// Read a decimal number: digits with at most one `.`
    fn read_number(&mut self, position: usize) -> Token {
        let value = self.read_while(|c| c.is_ascii_digit() || c == '.');
        match value.parse::<f64>() {
            Ok(_) => Token::new(TokenKind::Number, value, position),
            Err(_) => Token::invalid(format!("invalid number '{}'", value), position),
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.offset();
        let Some(c) = self.current_char() else {
            return Token::eof(position);
        };

        match c {
            '(' => {
                self.advance();
                Token::new(TokenKind::LeftParen, "(", position)
            }
            ')' => {
                self.advance();
                Token::new(TokenKind::RightParen, ")", position)
            }
            '*' | '·' => {
                self.advance();
                Token::new(TokenKind::Multiply, c.to_string(), position)
            }
            '/' => {
                self.advance();
                Token::new(TokenKind::Divide, "/", position)
            }
            '^' => {
                self.advance();
                Token::new(TokenKind::Power, "^", position)
            }
            _ if c.is_ascii_digit() => self.read_number(position),
            _ if c.is_alphabetic() || is_special_identifier_start(c) => {
                let ident = self.read_while(is_identifier_char);
                Token::new(TokenKind::Identifier, ident, position)
            }
            _ => {
                self.advance();
                Token::invalid(format!("invalid character '{}'", c), position)
            }
        }
    }
}

/// Tokenize the whole input, ending with an `Eof` token.
///
/// The first `Invalid` token aborts tokenization with [`Error::Lex`].
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Invalid => {
                return Err(Error::Lex {
                    position: token.position,
                    message: token.lexeme,
                });
            }
            TokenKind::Eof => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
