use monkey_interpreter::object::{Object, NULL};
use pretty_assertions::assert_eq;

fn eval_source(source: &str) -> Object {
    monkey_interpreter::eval_source(source).expect("source should parse")
}

#[test]
fn test_if_true() {
    assert_eq!(eval_source("if (true) { 1 } else { 2 }"), Object::Integer(1));
}

#[test]
fn test_if_false() {
    assert_eq!(eval_source("if (false) { 1 } else { 2 }"), Object::Integer(2));
}

#[test]
fn test_if_without_else_is_null() {
    assert_eq!(eval_source("if (1 > 2) { 10 }"), NULL);
}

#[test]
fn test_integer_zero_is_truthy() {
    assert_eq!(eval_source("if (0) { 1 } else { 2 }"), Object::Integer(1));
}

#[test]
fn test_null_is_falsy() {
    assert_eq!(eval_source("if (if (false) { 1 }) { 1 } else { 2 }"), Object::Integer(2));
}

#[test]
fn test_top_level_return_exits_program() {
    assert_eq!(eval_source("return 10; 9;"), Object::Integer(10));
    assert_eq!(eval_source("return 2 * 5; 9;"), Object::Integer(10));
    assert_eq!(eval_source("9; return 10; 9;"), Object::Integer(10));
}

#[test]
fn test_return_inside_nested_blocks() {
    let source = "
    if (10 > 1) {
      if (10 > 1) {
        return 10;
      }
      return 1;
    }";
    assert_eq!(eval_source(source), Object::Integer(10));
}

#[test]
fn test_return_unwinds_to_function_boundary() {
    assert_eq!(
        eval_source("fn() { if (true) { return 10; } return 1; }()"),
        Object::Integer(10)
    );
}

#[test]
fn test_return_does_not_leak_past_call() {
    let source = "
    let early = fn(n) { if (n > 0) { return n; } 0 };
    let total = early(3) + early(-1) + early(4);
    total * 2";
    assert_eq!(eval_source(source), Object::Integer(14));
}
