use monkey_interpreter::interpreter::Interpreter;
use monkey_interpreter::object::Object;
use pretty_assertions::assert_eq;

fn eval_source(source: &str) -> Object {
    monkey_interpreter::eval_source(source).expect("source should parse")
}

#[test]
fn test_simple_function_call() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_source(source), Object::Integer(expected), "source: {}", source);
    }
}

#[test]
fn test_higher_order_function() {
    let source = "
    let apply = fn(f, x) { f(x) };
    let double = fn(y) { y * 2 };
    apply(double, 5)";
    assert_eq!(eval_source(source), Object::Integer(10));
}

#[test]
fn test_closure_captures_environment() {
    let source = "
    let newAdder = fn(x) { fn(y) { x + y } };
    let addTwo = newAdder(2);
    addTwo(3);";
    assert_eq!(eval_source(source), Object::Integer(5));
}

#[test]
fn test_rebinding_adder_leaves_first_closure_intact() {
    let interpreter = Interpreter::new();
    let first = interpreter
        .eval_source("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); let keep = addTwo; addTwo(3);")
        .unwrap();
    assert_eq!(first, Object::Integer(5));

    let second = interpreter
        .eval_source("let addTwo = newAdder(3); addTwo(3);")
        .unwrap();
    assert_eq!(second, Object::Integer(6));
    assert_eq!(interpreter.eval_source("keep(3)").unwrap(), Object::Integer(5));
}

#[test]
fn test_closure_with_multiple_captures() {
    let source = "
    let makeMultiplier = fn(x, y) { fn(z) { x * y * z } };
    let mult6 = makeMultiplier(2, 3);
    mult6(4)";
    assert_eq!(eval_source(source), Object::Integer(24));
}

#[test]
fn test_closure_sees_later_outer_bindings() {
    // Capture is by reference: bindings added to the defining scope after
    // the closure was created are visible when it runs.
    let source = "
    let show = fn() { late };
    let late = 99;
    show()";
    assert_eq!(eval_source(source), Object::Integer(99));
}

#[test]
fn test_recursive_function() {
    let source = "
    let fib = fn(n) {
      if (n < 2) { return n; }
      fib(n - 1) + fib(n - 2)
    };
    fib(15)";
    assert_eq!(eval_source(source), Object::Integer(610));
}

#[test]
fn test_scoping_is_lexical_not_dynamic() {
    let source = "
    let x = 1;
    let readX = fn() { x };
    let caller = fn() { let x = 2; readX() };
    caller()";
    assert_eq!(eval_source(source), Object::Integer(1));
}

#[test]
fn test_function_wrong_arg_count() {
    assert_eq!(
        eval_source("let add = fn(a, b) { a + b }; add(1)"),
        Object::Error("wrong number of arguments: want=2, got=1".to_string())
    );
}

#[test]
fn test_function_extra_args_are_dropped() {
    assert_eq!(
        eval_source("let first = fn(a) { a }; first(7, 8, 9)"),
        Object::Integer(7)
    );
}

#[test]
fn test_functions_are_values() {
    let result = eval_source("let f = fn() { 1 }; let g = f; g");
    assert!(matches!(result, Object::Function(_)));
}
