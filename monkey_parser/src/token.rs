//! Token definitions produced by the lexer.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A character sequence that starts no token.
    Illegal(String),
    /// End of input. Returned indefinitely once the source is exhausted.
    Eof,

    // Identifiers + literals
    Ident(String),
    /// The digits of an integer literal, range-checked by the parser.
    Int(String),

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// The source text this token was read from, where it is fixed.
    pub fn literal(&self) -> &str {
        match self {
            Token::Illegal(text) | Token::Ident(text) | Token::Int(text) => text,
            Token::Eof => "",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Eq => "==",
            Token::NotEq => "!=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Function => "fn",
            Token::Let => "let",
            Token::True => "true",
            Token::False => "false",
            Token::If => "if",
            Token::Else => "else",
            Token::Return => "return",
        }
    }
}

/// Renders the token *kind*: `IDENT`, `INT`, `ILLEGAL` and `EOF` for the
/// variable-text tokens, the fixed literal for everything else.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Illegal(_) => f.write_str("ILLEGAL"),
            Token::Eof => f.write_str("EOF"),
            Token::Ident(_) => f.write_str("IDENT"),
            Token::Int(_) => f.write_str("INT"),
            other => f.write_str(other.literal()),
        }
    }
}
