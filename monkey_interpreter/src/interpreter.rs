use crate::environment::{Env, Environment};
use crate::error::{EvalResult, RuntimeError, Unwind};
use crate::object::{Function, Object, NULL};
use monkey_ast::{
    BlockStatement, Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement,
};
use std::rc::Rc;
use tracing::{debug, trace};

/// Owns the top-level environment of a session, so bindings made by one
/// program are visible to the next.
#[derive(Clone)]
pub struct Interpreter {
    pub global_env: Env,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            global_env: Environment::new(),
        }
    }

    pub fn with_env(env: Env) -> Self {
        Interpreter { global_env: env }
    }

    pub fn eval(&self, program: &Program) -> Object {
        evaluate(program, &self.global_env)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates a whole program in `env`.
///
/// A top-level `return` ends the program with its value. A runtime error
/// ends it too and comes back as an `Object::Error`.
pub fn evaluate(program: &Program, env: &Env) -> Object {
    match eval_program(program, env) {
        Ok(value) => value,
        Err(Unwind::Return(value)) => value,
        Err(Unwind::Error(err)) => {
            debug!(error = %err, "program stopped with a runtime error");
            Object::Error(err.to_string())
        }
    }
}

fn eval_program(program: &Program, env: &Env) -> EvalResult {
    let mut result = NULL;
    for stmt in &program.statements {
        match eval_statement(stmt, env) {
            Ok(value) => result = value,
            Err(Unwind::Return(value)) => return Ok(value),
            Err(err) => return Err(err),
        }
    }
    Ok(result)
}

/// Unlike a program, a block leaves `return` wrapped so it keeps unwinding
/// through enclosing blocks up to the function call.
fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult {
    let mut result = NULL;
    for stmt in &block.statements {
        result = eval_statement(stmt, env)?;
    }
    Ok(result)
}

fn eval_statement(stmt: &Statement, env: &Env) -> EvalResult {
    trace!(statement = %stmt, "eval");
    match stmt {
        Statement::Expression(expr) => eval_expression(expr, env),
        Statement::Return(expr) => {
            let value = eval_expression(expr, env)?;
            Err(Unwind::Return(value))
        }
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            Ok(env.borrow_mut().set(name.as_str(), value))
        }
    }
}

fn eval_expression(expr: &Expression, env: &Env) -> EvalResult {
    match expr {
        Expression::IntegerLiteral(n) => Ok(Object::Integer(*n)),
        Expression::Boolean(b) => Ok(Object::from_bool(*b)),
        Expression::Identifier(ident) => eval_identifier(ident, env),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            eval_prefix_expression(*operator, right)
        }
        Expression::Infix {
            left,
            operator,
            right,
        } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix_expression(*operator, left, right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
        } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expression::FunctionLiteral { parameters, body } => {
            Ok(Object::Function(Rc::new(Function {
                parameters: parameters.clone(),
                body: body.clone(),
                env: Rc::clone(env),
            })))
        }
        Expression::Call {
            function,
            arguments,
        } => eval_call(function, arguments, env),
    }
}

fn eval_identifier(ident: &Identifier, env: &Env) -> EvalResult {
    env.borrow()
        .get(ident.as_str())
        .ok_or_else(|| RuntimeError::IdentifierNotFound(ident.to_string()).into())
}

fn eval_prefix_expression(operator: PrefixOperator, right: Object) -> EvalResult {
    match operator {
        PrefixOperator::Not => Ok(Object::from_bool(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Object::Integer(n) => Ok(Object::Integer(n.wrapping_neg())),
            other => Err(RuntimeError::UnknownPrefixOperator {
                operator,
                operand: other.object_type(),
            }
            .into()),
        },
    }
}

fn eval_infix_expression(operator: InfixOperator, left: Object, right: Object) -> EvalResult {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => Ok(eval_integer_infix(operator, *l, *r)),
        _ if left.object_type() != right.object_type() => Err(RuntimeError::TypeMismatch {
            left: left.object_type(),
            operator,
            right: right.object_type(),
        }
        .into()),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: left.object_type(),
            operator,
            right: right.object_type(),
        }
        .into()),
    }
}

/// Arithmetic wraps on overflow. Division by zero yields `null`.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Object {
    match operator {
        InfixOperator::Add => Object::Integer(left.wrapping_add(right)),
        InfixOperator::Subtract => Object::Integer(left.wrapping_sub(right)),
        InfixOperator::Multiply => Object::Integer(left.wrapping_mul(right)),
        InfixOperator::Divide => {
            if right == 0 {
                NULL
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        }
        InfixOperator::LessThan => Object::from_bool(left < right),
        InfixOperator::GreaterThan => Object::from_bool(left > right),
        InfixOperator::Equal => Object::from_bool(left == right),
        InfixOperator::NotEqual => Object::from_bool(left != right),
    }
}

fn eval_if(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Env,
) -> EvalResult {
    let condition = eval_expression(condition, env)?;
    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(NULL)
    }
}

fn eval_call(function_expr: &Expression, arg_exprs: &[Expression], env: &Env) -> EvalResult {
    let function = match eval_expression(function_expr, env)? {
        Object::Function(function) => function,
        other => return Err(RuntimeError::NotAFunction(other.object_type()).into()),
    };

    let args = arg_exprs
        .iter()
        .map(|arg| eval_expression(arg, env))
        .collect::<Result<Vec<_>, _>>()?;

    apply_function(&function, args)
}

/// Missing arguments are an error. Extra arguments are evaluated but never
/// bound.
fn apply_function(function: &Function, args: Vec<Object>) -> EvalResult {
    if args.len() < function.parameters.len() {
        return Err(RuntimeError::WrongArgumentCount {
            want: function.parameters.len(),
            got: args.len(),
        }
        .into());
    }
    debug!(arity = args.len(), "applying function");

    let call_env = extend_function_env(function, args);
    match eval_block(&function.body, &call_env) {
        Err(Unwind::Return(value)) => Ok(value),
        other => other,
    }
}

/// The call scope encloses the function's captured environment, not the
/// caller's, which keeps scoping lexical.
fn extend_function_env(function: &Function, args: Vec<Object>) -> Env {
    let env = Environment::new_enclosed(&function.env);
    {
        let mut scope = env.borrow_mut();
        for (param, arg) in function.parameters.iter().zip(args) {
            scope.set(param.as_str(), arg);
        }
    }
    env
}
