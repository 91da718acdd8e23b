//! Core AST definitions for the Monkey programming language.
//!
//! This crate contains the syntax tree shared between the parser and the
//! interpreter. The node set is closed: every consumer matches on it
//! exhaustively, so a new node kind has to be handled everywhere before the
//! workspace compiles again.

use serde::Serialize;
use std::fmt;

// --- AST (Abstract Syntax Tree) Nodes ---

/// The root node: a sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement {
    Let { name: Identifier, value: Expression },
    Return(Expression),
    /// A bare expression used as a statement, e.g. `add(1, 2);`.
    Expression(Expression),
}

/// A `{ ... }` delimited statement list used by `if` and function bodies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier(pub String);

/// Represents an expression that evaluates to a runtime object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expression {
    // Atoms
    Identifier(Identifier),
    IntegerLiteral(i64),
    Boolean(bool),

    // Operations
    Prefix {
        operator: PrefixOperator,
        right: Box<Expression>,
    },
    Infix {
        left: Box<Expression>,
        operator: InfixOperator,
        right: Box<Expression>,
    },

    // Control Flow
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },

    /// A function literal. Evaluating it creates a closure; the body only
    /// runs when the closure is called.
    FunctionLiteral {
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrefixOperator {
    /// `!`
    Not,
    /// `-`
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

// --- Source-like rendering ---

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return(value) => write!(f, "return {};", value),
            Statement::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral(n) => write!(f, "{}", n),
            Expression::Boolean(b) => write!(f, "{}", b),
            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral { parameters, body } => {
                f.write_str("fn(")?;
                write_joined(f, parameters, ", ")?;
                write!(f, ") {}", body)
            }
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{}(", function)?;
                write_joined(f, arguments, ", ")?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrefixOperator::Not => "!",
            PrefixOperator::Negate => "-",
        })
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InfixOperator::Add => "+",
            InfixOperator::Subtract => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::Divide => "/",
            InfixOperator::LessThan => "<",
            InfixOperator::GreaterThan => ">",
            InfixOperator::Equal => "==",
            InfixOperator::NotEqual => "!=",
        })
    }
}
