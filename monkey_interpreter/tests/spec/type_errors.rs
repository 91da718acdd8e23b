use monkey_interpreter::object::Object;
use pretty_assertions::assert_eq;

fn eval_error(source: &str) -> String {
    match monkey_interpreter::eval_source(source).expect("source should parse") {
        Object::Error(message) => message,
        other => panic!("expected an error for {:?}, got {}", source, other),
    }
}

#[test]
fn test_add_mismatched_types() {
    assert_eq!(eval_error("5 + true;"), "type mismatch: INTEGER + BOOLEAN");
    assert_eq!(eval_error("5 + true; 5;"), "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn test_negate_boolean() {
    assert_eq!(eval_error("-true"), "unknown operator: -BOOLEAN");
}

#[test]
fn test_boolean_arithmetic() {
    assert_eq!(eval_error("true + false;"), "unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(
        eval_error("5; true + false; 5"),
        "unknown operator: BOOLEAN + BOOLEAN"
    );
}

#[test]
fn test_error_inside_if_block() {
    assert_eq!(
        eval_error("if (10 > 1) { true + false; }"),
        "unknown operator: BOOLEAN + BOOLEAN"
    );
    assert_eq!(
        eval_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }"),
        "unknown operator: BOOLEAN + BOOLEAN"
    );
}

#[test]
fn test_error_in_condition_skips_branches() {
    assert_eq!(
        eval_error("if (missing) { also_missing } else { 1 }"),
        "identifier not found: missing"
    );
}

#[test]
fn test_leftmost_error_wins() {
    assert_eq!(eval_error("a + b"), "identifier not found: a");
    assert_eq!(eval_error("(1 + true) + b"), "type mismatch: INTEGER + BOOLEAN");
    assert_eq!(eval_error("-true + missing"), "unknown operator: -BOOLEAN");
}

#[test]
fn test_unbound_identifier() {
    assert_eq!(eval_error("foobar;"), "identifier not found: foobar");
}

#[test]
fn test_calling_non_function() {
    assert_eq!(eval_error("let x = 1; x(2)"), "not a function: INTEGER");
    assert_eq!(eval_error("(1 < 2)()"), "not a function: BOOLEAN");
    assert_eq!(eval_error("(1 / 0)()"), "not a function: NULL");
}

#[test]
fn test_error_in_arguments_short_circuits() {
    assert_eq!(
        eval_error("let f = fn(a, b) { a }; f(1 + true, missing)"),
        "type mismatch: INTEGER + BOOLEAN"
    );
}

#[test]
fn test_error_propagates_out_of_function_call() {
    assert_eq!(
        eval_error("let f = fn() { 1 + true }; f() + 1; 5"),
        "type mismatch: INTEGER + BOOLEAN"
    );
}

#[test]
fn test_mismatch_with_function_operand() {
    assert_eq!(
        eval_error("fn() {} + 1"),
        "type mismatch: FUNCTION + INTEGER"
    );
    assert_eq!(
        eval_error("fn() {} == fn() {}"),
        "unknown operator: FUNCTION == FUNCTION"
    );
}

#[test]
fn test_null_operands() {
    assert_eq!(
        eval_error("(1 / 0) + (1 / 0)"),
        "unknown operator: NULL + NULL"
    );
    assert_eq!(eval_error("(1 / 0) + 1"), "type mismatch: NULL + INTEGER");
}
