// Expression parsing: primaries, calls, and operator precedence.

mod common;
use common::*;

use quill::Node;

#[test]
fn number_literal() {
    let (s, id) = parse_one("4;");
    assert_eq!(s[id], Node::Number(4.0));
}

#[test]
fn fractional_number_literal() {
    let (s, id) = parse_one("2.5;");
    assert_eq!(s[id], Node::Number(2.5));
}

#[test]
fn variable_reference() {
    let (s, id) = parse_one("alpha;");
    assert_eq!(s[id], Node::Variable("alpha".to_string()));
}

#[test]
fn addition_of_variables() {
    let (s, id) = parse_one("a + b;");
    let Node::Binary { op: '+', lhs, rhs } = s[id] else {
        panic!("expected '+' at the root, got {:?}", s[id]);
    };
    assert_eq!(s[lhs], Node::Variable("a".to_string()));
    assert_eq!(s[rhs], Node::Variable("b".to_string()));
}

#[test]
fn subtraction_chain_is_left_associative() {
    // a-b-c must fold as (a-b)-c
    let (s, id) = parse_one("1-2-3;");
    let Node::Binary { op: '-', lhs, rhs } = s[id] else {
        panic!("expected '-' at the root, got {:?}", s[id]);
    };
    assert_eq!(s[rhs], Node::Number(3.0));
    let Node::Binary { op: '-', lhs, rhs } = s[lhs] else {
        panic!("expected '-' on the left spine, got {:?}", s[lhs]);
    };
    assert_eq!(s[lhs], Node::Number(1.0));
    assert_eq!(s[rhs], Node::Number(2.0));
}

#[test]
fn division_chain_is_left_associative() {
    let (s, id) = parse_one("8/4/2;");
    let Node::Binary { op: '/', lhs, rhs } = s[id] else {
        panic!("expected '/' at the root, got {:?}", s[id]);
    };
    assert_eq!(s[rhs], Node::Number(2.0));
    let Node::Binary { op: '/', lhs, rhs } = s[lhs] else {
        panic!("expected '/' on the left spine, got {:?}", s[lhs]);
    };
    assert_eq!(s[lhs], Node::Number(8.0));
    assert_eq!(s[rhs], Node::Number(4.0));
}

#[test]
fn mixed_precedence_multiplication_on_the_right() {
    // 1+2*3 → +(1, *(2,3))
    let (s, id) = parse_one("1+2*3;");
    let Node::Binary { op: '+', lhs, rhs } = s[id] else {
        panic!("expected '+' at the root, got {:?}", s[id]);
    };
    assert_eq!(s[lhs], Node::Number(1.0));
    let Node::Binary { op: '*', lhs, rhs } = s[rhs] else {
        panic!("expected '*' on the right, got {:?}", s[rhs]);
    };
    assert_eq!(s[lhs], Node::Number(2.0));
    assert_eq!(s[rhs], Node::Number(3.0));
}

#[test]
fn mixed_precedence_multiplication_on_the_left() {
    // 1*2+3 → +(*(1,2), 3)
    let (s, id) = parse_one("1*2+3;");
    let Node::Binary { op: '+', lhs, rhs } = s[id] else {
        panic!("expected '+' at the root, got {:?}", s[id]);
    };
    assert_eq!(s[rhs], Node::Number(3.0));
    let Node::Binary { op: '*', lhs, rhs } = s[lhs] else {
        panic!("expected '*' on the left, got {:?}", s[lhs]);
    };
    assert_eq!(s[lhs], Node::Number(1.0));
    assert_eq!(s[rhs], Node::Number(2.0));
}

#[test]
fn same_precedence_mix_folds_left() {
    // 1-2+3 → +(-(1,2), 3)
    let (s, id) = parse_one("1-2+3;");
    let Node::Binary { op: '+', lhs, rhs } = s[id] else {
        panic!("expected '+' at the root, got {:?}", s[id]);
    };
    assert_eq!(s[rhs], Node::Number(3.0));
    let Node::Binary { op: '-', lhs, rhs } = s[lhs] else {
        panic!("expected '-' on the left, got {:?}", s[lhs]);
    };
    assert_eq!(s[lhs], Node::Number(1.0));
    assert_eq!(s[rhs], Node::Number(2.0));
}

#[test]
fn parentheses_override_precedence() {
    // (1+2)*3 → *(+(1,2), 3)
    let (s, id) = parse_one("(1+2)*3;");
    let Node::Binary { op: '*', lhs, rhs } = s[id] else {
        panic!("expected '*' at the root, got {:?}", s[id]);
    };
    assert_eq!(s[rhs], Node::Number(3.0));
    let Node::Binary { op: '+', lhs, rhs } = s[lhs] else {
        panic!("expected '+' on the left, got {:?}", s[lhs]);
    };
    assert_eq!(s[lhs], Node::Number(1.0));
    assert_eq!(s[rhs], Node::Number(2.0));
}

#[test]
fn parentheses_leave_no_node_behind() {
    let (s, id) = parse_one("((7));");
    assert_eq!(s[id], Node::Number(7.0));
    // The grouping produced nothing but the literal itself.
    assert_eq!(s.len(), 1);
}

#[test]
fn parenthesized_group_in_a_larger_chain() {
    // 2*(3+4)*5 → *( *(2, +(3,4)), 5)
    let (s, id) = parse_one("2*(3+4)*5;");
    let Node::Binary { op: '*', lhs, rhs } = s[id] else {
        panic!("expected '*' at the root, got {:?}", s[id]);
    };
    assert_eq!(s[rhs], Node::Number(5.0));
    let Node::Binary { op: '*', lhs, rhs } = s[lhs] else {
        panic!("expected '*' on the left, got {:?}", s[lhs]);
    };
    assert_eq!(s[lhs], Node::Number(2.0));
    assert!(matches!(s[rhs], Node::Binary { op: '+', .. }));
}

#[test]
fn call_with_no_arguments() {
    let (s, id) = parse_one("f();");
    let Node::Call { callee, args } = &s[id] else {
        panic!("expected a call, got {:?}", s[id]);
    };
    assert_eq!(callee, "f");
    assert!(args.is_empty());
}

#[test]
fn call_arguments_preserve_source_order() {
    let (s, id) = parse_one("f(1, x, 2+3);");
    let Node::Call { callee, args } = &s[id] else {
        panic!("expected a call, got {:?}", s[id]);
    };
    assert_eq!(callee, "f");
    assert_eq!(args.len(), 3);
    assert_eq!(s[args[0]], Node::Number(1.0));
    assert_eq!(s[args[1]], Node::Variable("x".to_string()));
    let Node::Binary { op: '+', lhs, rhs } = s[args[2]] else {
        panic!("expected '+' as the third argument, got {:?}", s[args[2]]);
    };
    assert_eq!(s[lhs], Node::Number(2.0));
    assert_eq!(s[rhs], Node::Number(3.0));
}

#[test]
fn nested_calls() {
    let (s, id) = parse_one("f(g(1), 2);");
    let Node::Call { callee, args } = &s[id] else {
        panic!("expected a call, got {:?}", s[id]);
    };
    assert_eq!(callee, "f");
    let Node::Call { callee: inner, args: inner_args } = &s[args[0]] else {
        panic!("expected a nested call, got {:?}", s[args[0]]);
    };
    assert_eq!(inner, "g");
    assert_eq!(s[inner_args[0]], Node::Number(1.0));
    assert_eq!(s[args[1]], Node::Number(2.0));
}

#[test]
fn call_to_undeclared_function_is_not_a_parse_error() {
    // Whether the callee exists is a later stage's concern.
    let (s, id) = parse_one("never_declared(1);");
    assert!(matches!(&s[id], Node::Call { callee, .. } if callee == "never_declared"));
}

#[test]
fn calls_participate_in_expressions() {
    let (s, id) = parse_one("f(1) + g(2) * h(3);");
    let Node::Binary { op: '+', lhs, rhs } = s[id] else {
        panic!("expected '+' at the root, got {:?}", s[id]);
    };
    assert!(matches!(&s[lhs], Node::Call { callee, .. } if callee == "f"));
    assert!(matches!(s[rhs], Node::Binary { op: '*', .. }));
}
