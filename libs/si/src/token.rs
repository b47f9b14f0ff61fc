//! Token types for the unit expression lexer

/// Token kinds produced by the lexer
#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub enum TokenKind {
    Identifier,
    Number,

    // Operators
    Multiply, // * or ·
    Divide,   // /
    Power,    // ^

    // Delimiters
    LeftParen,  // (
    RightParen, // )

    // End of input
    Eof,

    // Error
    Invalid, // lexeme carries the diagnostic
}

/// A token in a unit expression
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Byte offset of the first character in the input.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    pub fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), position)
    }

    pub fn invalid(message: String, position: usize) -> Self {
        Self::new(TokenKind::Invalid, message, position)
    }

    /// Human-readable description used in parse errors.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("{:?} '{}'", self.kind, self.lexeme),
        }
    }
}
