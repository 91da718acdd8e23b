//! Lexer and parser for the Monkey programming language.
//!
//! This crate turns source text into the AST defined in `monkey_ast`. The
//! interpreter only ever consumes the resulting [`Program`]; tokens and
//! parse errors never reach the evaluator.

pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::{ParseError, ParseErrors, Parser};
pub use token::Token;

use monkey_ast::Program;

/// Parses a complete program.
pub fn parse(source: &str) -> Result<Program, ParseErrors> {
    Parser::new(Lexer::new(source)).parse_program()
}
