//! Pratt parser turning a token stream into a [`Program`].
//!
//! Errors are collected rather than returned at the first failure, so a
//! single run reports every malformed statement in the input.

use crate::lexer::Lexer;
use crate::token::Token;
use monkey_ast::{
    BlockStatement, Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement,
};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: String, found: Token },
    #[error("no prefix parse function for {0} found")]
    NoPrefixParse(Token),
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}

/// Every error reported while parsing one program. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

fn precedence_of(token: &Token) -> Precedence {
    match token {
        Token::Eq | Token::NotEq => Precedence::Equals,
        Token::Lt | Token::Gt => Precedence::LessGreater,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Asterisk | Token::Slash => Precedence::Product,
        Token::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

fn infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Subtract),
        Token::Asterisk => Some(InfixOperator::Multiply),
        Token::Slash => Some(InfixOperator::Divide),
        Token::Lt => Some(InfixOperator::LessThan),
        Token::Gt => Some(InfixOperator::GreaterThan),
        Token::Eq => Some(InfixOperator::Equal),
        Token::NotEq => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'source> {
    lexer: Lexer<'source>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'source> Parser<'source> {
    pub fn new(mut lexer: Lexer<'source>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    pub fn parse_program(mut self) -> Result<Program, ParseErrors> {
        let mut program = Program::default();

        while self.current != Token::Eof {
            match self.parse_statement() {
                Ok(stmt) => program.statements.push(stmt),
                Err(e) => self.record_error(e),
            }
            self.next_token();
        }

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(ParseErrors(self.errors))
        }
    }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Records `err` and skips the rest of the broken statement, stopping on
    /// its `;` or just before the `}` closing the enclosing block.
    fn record_error(&mut self, err: ParseError) {
        self.errors.push(err);
        while self.current != Token::Semicolon
            && self.current != Token::Eof
            && self.peek != Token::RBrace
        {
            self.next_token();
        }
    }

    fn expect_peek(&mut self, expected: Token) -> ParseResult<()> {
        if self.peek == expected {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: self.peek.clone(),
            })
        }
    }

    fn expect_peek_ident(&mut self) -> ParseResult<Identifier> {
        if let Token::Ident(name) = &self.peek {
            let ident = Identifier::new(name.as_str());
            self.next_token();
            Ok(ident)
        } else {
            Err(ParseError::UnexpectedToken {
                expected: "IDENT".to_string(),
                found: self.peek.clone(),
            })
        }
    }

    // --- Statements ---

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_peek_ident()?;
        self.expect_peek(Token::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek == Token::Semicolon {
            self.next_token();
        }
        Ok(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek == Token::Semicolon {
            self.next_token();
        }
        Ok(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek == Token::Semicolon {
            self.next_token();
        }
        Ok(Statement::Expression(expr))
    }

    /// Parses `{ ... }` with the current token on the opening brace. Errors
    /// inside the block are recorded and parsing resumes at the next
    /// statement, like at the top level. Running out of input before the
    /// closing `}` is an error of its own.
    fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        let mut block = BlockStatement::default();
        self.next_token();

        while self.current != Token::RBrace {
            if self.current == Token::Eof {
                return Err(ParseError::UnexpectedToken {
                    expected: Token::RBrace.to_string(),
                    found: Token::Eof,
                });
            }
            match self.parse_statement() {
                Ok(stmt) => block.statements.push(stmt),
                Err(e) => self.record_error(e),
            }
            self.next_token();
        }
        Ok(block)
    }

    // --- Expressions ---

    fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let mut left = self.parse_prefix()?;

        while self.peek != Token::Semicolon && precedence < precedence_of(&self.peek) {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match &self.current {
            Token::Ident(name) => Ok(Expression::Identifier(Identifier::new(name.as_str()))),
            Token::Int(digits) => digits
                .parse::<i64>()
                .map(Expression::IntegerLiteral)
                .map_err(|_| ParseError::InvalidInteger(digits.clone())),
            Token::True => Ok(Expression::Boolean(true)),
            Token::False => Ok(Expression::Boolean(false)),
            Token::Bang => self.parse_prefix_expression(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_expression(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            other => Err(ParseError::NoPrefixParse(other.clone())),
        }
    }

    fn parse_infix(&mut self, left: Expression) -> ParseResult<Expression> {
        if self.current == Token::LParen {
            return self.parse_call_expression(left);
        }

        let operator = match infix_operator(&self.current) {
            Some(op) => op,
            None => return Ok(left),
        };
        let precedence = precedence_of(&self.current);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> ParseResult<Expression> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix {
            operator,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RParen)?;
        Ok(expr)
    }

    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.expect_peek(Token::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RParen)?;
        self.expect_peek(Token::LBrace)?;

        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek == Token::Else {
            self.next_token();
            self.expect_peek(Token::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(Token::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(Token::LBrace)?;
        let body = self.parse_block_statement()?;
        Ok(Expression::FunctionLiteral { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek == Token::RParen {
            self.next_token();
            return Ok(parameters);
        }

        parameters.push(self.expect_peek_ident()?);
        while self.peek == Token::Comma {
            self.next_token();
            parameters.push(self.expect_peek_ident()?);
        }

        self.expect_peek(Token::RParen)?;
        Ok(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_call_arguments()?;
        Ok(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek == Token::RParen {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek == Token::Comma {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(Token::RParen)?;
        Ok(arguments)
    }
}
