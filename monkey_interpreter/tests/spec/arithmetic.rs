use monkey_interpreter::object::{Object, NULL};
use proptest::prelude::*;
use pretty_assertions::assert_eq;

fn eval_source(source: &str) -> Object {
    monkey_interpreter::eval_source(source).expect("source should parse")
}

/// Renders an integer as a Monkey expression. Negative literals go through
/// the prefix `-`, and `i64::MIN` is spelled as a subtraction.
fn literal(n: i64) -> String {
    if n == i64::MIN {
        "(-9223372036854775807 - 1)".to_string()
    } else if n < 0 {
        format!("(-{})", -n)
    } else {
        n.to_string()
    }
}

proptest! {
    #[test]
    fn division_truncates_toward_zero(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let source = format!("{} / {}", literal(a), literal(b));
        prop_assert_eq!(eval_source(&source), Object::Integer(a.wrapping_div(b)));
    }

    #[test]
    fn division_by_zero_is_null(a in any::<i64>()) {
        let source = format!("{} / 0", literal(a));
        prop_assert_eq!(eval_source(&source), NULL);
    }

    #[test]
    fn addition_matches_host(a in any::<i64>(), b in any::<i64>()) {
        let source = format!("{} + {}", literal(a), literal(b));
        prop_assert_eq!(eval_source(&source), Object::Integer(a.wrapping_add(b)));
    }

    #[test]
    fn comparisons_match_host(a in any::<i64>(), b in any::<i64>()) {
        let lt = format!("{} < {}", literal(a), literal(b));
        let eq = format!("{} == {}", literal(a), literal(b));
        prop_assert_eq!(eval_source(&lt), Object::from_bool(a < b));
        prop_assert_eq!(eval_source(&eq), Object::from_bool(a == b));
    }
}

#[test]
fn test_division_examples() {
    assert_eq!(eval_source("7 / 2"), Object::Integer(3));
    assert_eq!(eval_source("-7 / 2"), Object::Integer(-3));
    assert_eq!(eval_source("7 / -2"), Object::Integer(-3));
    assert_eq!(eval_source("10 / 0"), NULL);
}
