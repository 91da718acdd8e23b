//! Lexer for Monkey using logos.
//!
//! `logos` does the raw scanning; [`Lexer`] wraps it to add the `Eof`
//! marker and to turn unmatched input into `Illegal` tokens instead of
//! stopping.

use crate::token::Token;
use logos::Logos;

/// Raw token from logos (before the variable text is copied out).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    // === Keywords ===
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // === Operators ===
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // === Delimiters ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // === Literals ===
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// A lazy, finite token stream over one source string.
///
/// Iterating yields every token up to and including a single [`Token::Eof`].
/// Cloning a lexer snapshots its position, so a stream can be replayed.
#[derive(Clone)]
pub struct Lexer<'source> {
    raw: logos::Lexer<'source, RawToken>,
    eof_emitted: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            raw: RawToken::lexer(source),
            eof_emitted: false,
        }
    }

    /// Returns the next token. After the input is exhausted this keeps
    /// returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        match self.raw.next() {
            None => Token::Eof,
            Some(Ok(raw)) => convert_token(raw, self.raw.slice()),
            Some(Err(())) => Token::Illegal(self.raw.slice().to_string()),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.eof_emitted {
            return None;
        }
        let token = self.next_token();
        if token == Token::Eof {
            self.eof_emitted = true;
        }
        Some(token)
    }
}

fn convert_token(raw: RawToken, slice: &str) -> Token {
    match raw {
        RawToken::Function => Token::Function,
        RawToken::Let => Token::Let,
        RawToken::True => Token::True,
        RawToken::False => Token::False,
        RawToken::If => Token::If,
        RawToken::Else => Token::Else,
        RawToken::Return => Token::Return,
        RawToken::Eq => Token::Eq,
        RawToken::NotEq => Token::NotEq,
        RawToken::Assign => Token::Assign,
        RawToken::Plus => Token::Plus,
        RawToken::Minus => Token::Minus,
        RawToken::Bang => Token::Bang,
        RawToken::Asterisk => Token::Asterisk,
        RawToken::Slash => Token::Slash,
        RawToken::Lt => Token::Lt,
        RawToken::Gt => Token::Gt,
        RawToken::Comma => Token::Comma,
        RawToken::Semicolon => Token::Semicolon,
        RawToken::LParen => Token::LParen,
        RawToken::RParen => Token::RParen,
        RawToken::LBrace => Token::LBrace,
        RawToken::RBrace => Token::RBrace,
        RawToken::Int => Token::Int(slice.to_string()),
        RawToken::Ident => Token::Ident(slice.to_string()),
    }
}
