use crate::object::{Object, ObjectType};
use monkey_ast::{InfixOperator, PrefixOperator};
use thiserror::Error;

/// A runtime fault. The `Display` text is the message carried by the
/// `Object::Error` handed back to the driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: PrefixOperator,
        operand: ObjectType,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        operator: InfixOperator,
        right: ObjectType,
    },
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectType,
        operator: InfixOperator,
        right: ObjectType,
    },
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),
    #[error("not a function: {0}")]
    NotAFunction(ObjectType),
    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount { want: usize, got: usize },
}

/// Why evaluation stopped early: a `return` unwinding to the nearest
/// function call or program boundary, or a runtime error unwinding to the
/// driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(err: RuntimeError) -> Self {
        Unwind::Error(err)
    }
}

pub type EvalResult = Result<Object, Unwind>;
