use crate::environment::Env;
use monkey_ast::{BlockStatement, Identifier};
use std::fmt;
use std::rc::Rc;

// --- Runtime Objects ---

pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

/// Represents a runtime value in the Monkey interpreter.
///
/// Functions are wrapped in an `Rc` so copies of a closure share one
/// captured environment. Booleans are built through [`Object::from_bool`]
/// only, which hands out the `TRUE`/`FALSE` constants.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    /// A first-class function, which includes its captured environment (a closure).
    Function(Rc<Function>),
    /// A runtime fault, as handed back to the driver.
    Error(String),
}

/// The runtime type tag of an object, as spelled in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Integer,
    Boolean,
    Null,
    Function,
    Error,
}

impl Object {
    pub fn from_bool(value: bool) -> Object {
        if value {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::Null => ObjectType::Null,
            Object::Function(_) => ObjectType::Function,
            Object::Error(_) => ObjectType::Error,
        }
    }

    /// Only `false` and `null` are falsy; `0` is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::Function => "FUNCTION",
            ObjectType::Error => "ERROR",
        })
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "Integer({})", n),
            Object::Boolean(b) => write!(f, "Boolean({})", b),
            Object::Null => write!(f, "Null"),
            Object::Function(func) => write!(f, "{:?}", func),
            Object::Error(e) => write!(f, "Error({:?})", e),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{}", n),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Null => write!(f, "null"),
            Object::Function(func) => write!(f, "{}", func),
            Object::Error(e) => write!(f, "ERROR: {}", e),
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => false,
        }
    }
}

/// A closure: a function literal together with the environment that was
/// active where it was evaluated.
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Env,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .field("env", &"...")
            .finish()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.parameters.iter().map(Identifier::as_str).collect();
        write!(f, "fn({}) {{\n{}\n}}", params.join(", "), self.body)
    }
}
