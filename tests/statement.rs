//! Behavioural tests for statements.
//!
//! Tests cover each variant's free variables, evaluation and rendering,
//! plus the laws relating operators to each other.

use std::collections::HashSet;

use statement_rs::{Assignment, EvalError, Statement};

fn t() -> Statement {
    Statement::top()
}

fn f() -> Statement {
    Statement::bottom()
}

fn var(name: &str) -> Statement {
    Statement::var(name)
}

fn names(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn env(bindings: &[(&str, bool)]) -> Assignment {
    bindings.iter().map(|&(name, value)| (name.to_string(), value)).collect()
}

fn eval(s: &Statement) -> bool {
    s.evaluate(&Assignment::new()).unwrap()
}

// ─── Leaves ────────────────────────────────────────────────────────────────────

#[test]
fn true_statement() {
    assert_eq!(t().get_variables(), HashSet::new());
    assert!(t().evaluate(&env(&[("a", true), ("b", false)])).unwrap());
    assert_eq!(t().to_string(), "1");
}

#[test]
fn false_statement() {
    assert_eq!(f().get_variables(), HashSet::new());
    assert!(!f().evaluate(&env(&[("a", true), ("b", false)])).unwrap());
    assert_eq!(f().to_string(), "0");
}

#[test]
fn variable_statement() {
    assert_eq!(var("foo").get_variables(), names(&["foo"]));
    assert!(var("foo").evaluate(&env(&[("foo", true)])).unwrap());
    assert!(!var("bar").evaluate(&env(&[("bar", false)])).unwrap());
    assert_eq!(
        var("foo").evaluate(&env(&[("bar", false)])),
        Err(EvalError::MissingVariable("foo".to_string()))
    );
    assert_eq!(var("foo").to_string(), "foo");
}

// ─── Variadic ──────────────────────────────────────────────────────────────────

#[test]
fn and_statement() {
    let s = Statement::and([var("foo"), var("foo"), var("bar"), t()]);
    assert_eq!(s.get_variables(), names(&["foo", "bar"]));
    assert_eq!(s.to_string(), "(foo & foo & bar & 1)");

    assert!(eval(&Statement::and([t()])));
    assert!(!eval(&Statement::and([f()])));
    assert!(eval(&Statement::and([t(), t(), t()])));
    assert!(!eval(&Statement::and([t(), f(), t()])));
    assert!(eval(&Statement::And(vec![])));
}

#[test]
fn or_statement() {
    let s = Statement::or([var("foo"), var("foo"), var("bar"), t()]);
    assert_eq!(s.get_variables(), names(&["foo", "bar"]));
    assert_eq!(s.to_string(), "(foo | foo | bar | 1)");

    assert!(eval(&Statement::or([t()])));
    assert!(!eval(&Statement::or([f()])));
    assert!(eval(&Statement::or([t(), t(), t()])));
    assert!(eval(&Statement::or([t(), f(), t()])));
    assert!(!eval(&Statement::or([f(), f()])));
    assert!(!eval(&Statement::Or(vec![])));
}

#[test]
fn empty_variadic_has_no_variables() {
    assert!(Statement::And(vec![]).get_variables().is_empty());
    assert!(Statement::Or(vec![]).get_variables().is_empty());
    let nested = Statement::not(Statement::Or(vec![Statement::And(vec![])]));
    assert!(nested.get_variables().is_empty());
}

#[test]
fn missing_variable_reported_left_to_right() {
    let s = Statement::and([var("foo"), var("qux")]);
    assert_eq!(
        s.evaluate(&Assignment::new()),
        Err(EvalError::MissingVariable("foo".to_string()))
    );

    // A false prefix does not stop evaluation of the remaining operands.
    let s = Statement::and([f(), var("qux"), var("foo")]);
    assert_eq!(
        s.evaluate(&Assignment::new()),
        Err(EvalError::MissingVariable("qux".to_string()))
    );

    let s = Statement::and([var("foo"), var("bar")]);
    assert_eq!(
        s.evaluate(&env(&[("bar", false)])),
        Err(EvalError::MissingVariable("foo".to_string()))
    );
}

// ─── Binary ────────────────────────────────────────────────────────────────────

#[test]
fn xor_statement() {
    assert_eq!(Statement::xor(var("foo"), var("bar")).get_variables(), names(&["foo", "bar"]));
    assert_eq!(Statement::xor(var("foo"), var("foo")).get_variables(), names(&["foo"]));

    assert!(!eval(&Statement::xor(f(), f())));
    assert!(eval(&Statement::xor(f(), t())));
    assert!(eval(&Statement::xor(t(), f())));
    assert!(!eval(&Statement::xor(t(), t())));

    assert_eq!(Statement::xor(var("foo"), f()).to_string(), "(foo ^ 0)");
}

#[test]
fn implies_statement() {
    assert_eq!(Statement::implies(var("foo"), var("bar")).get_variables(), names(&["foo", "bar"]));
    assert_eq!(Statement::implies(var("foo"), var("foo")).get_variables(), names(&["foo"]));

    assert!(eval(&Statement::implies(f(), f())));
    assert!(eval(&Statement::implies(f(), t())));
    assert!(!eval(&Statement::implies(t(), f())));
    assert!(eval(&Statement::implies(t(), t())));

    assert_eq!(Statement::implies(var("foo"), f()).to_string(), "(foo > 0)");
}

#[test]
fn xnor_statement() {
    assert_eq!(Statement::xnor(var("foo"), var("bar")).get_variables(), names(&["foo", "bar"]));
    assert_eq!(Statement::xnor(var("foo"), var("foo")).get_variables(), names(&["foo"]));

    assert!(eval(&Statement::xnor(f(), f())));
    assert!(!eval(&Statement::xnor(f(), t())));
    assert!(!eval(&Statement::xnor(t(), f())));
    assert!(eval(&Statement::xnor(t(), t())));

    assert_eq!(Statement::xnor(var("foo"), f()).to_string(), "(foo = 0)");
}

#[test]
fn xnor_complements_xor() {
    for a in [false, true] {
        for b in [false, true] {
            let xor = Statement::xor(Statement::constant(a), Statement::constant(b));
            let xnor = Statement::xnor(Statement::constant(a), Statement::constant(b));
            assert_eq!(eval(&xnor), !eval(&xor), "a = {}, b = {}", a, b);
        }
    }
}

// ─── Unary ─────────────────────────────────────────────────────────────────────

#[test]
fn not_statement() {
    assert!(Statement::not(t()).get_variables().is_empty());
    assert_eq!(Statement::not(var("foo")).get_variables(), names(&["foo"]));

    assert!(!eval(&Statement::not(t())));
    assert!(eval(&Statement::not(f())));

    assert_eq!(Statement::not(var("foo")).to_string(), "~foo");
}

#[test]
fn double_negation_preserves_value() {
    let s = Statement::or([
        Statement::and([var("a"), var("b")]),
        Statement::implies(var("c"), var("a")),
    ]);
    let nn = Statement::not(Statement::not(s.clone()));
    for bits in 0..8u8 {
        let assignment = env(&[("a", bits & 1 != 0), ("b", bits & 2 != 0), ("c", bits & 4 != 0)]);
        assert_eq!(nn.evaluate(&assignment), s.evaluate(&assignment));
    }
    assert_eq!(nn.to_string(), format!("~~{}", s));
}

// ─── Rendering ─────────────────────────────────────────────────────────────────

#[test]
fn rendering_is_deterministic() {
    let s = Statement::xnor(
        Statement::or([var("x"), Statement::not(var("y")), f()]),
        Statement::and([var("z")]),
    );
    let first = s.to_string();
    let second = s.to_string();
    assert_eq!(first, second);
    assert_eq!(first, "((x | ~y | 0) = (z))");
}

#[test]
fn constant_only_trees_have_no_variables() {
    let s = Statement::implies(Statement::xor(t(), f()), Statement::not(Statement::or([f()])));
    assert!(s.get_variables().is_empty());
    let s = Statement::implies(Statement::xor(t(), var("v")), Statement::not(Statement::or([f()])));
    assert_eq!(s.get_variables(), names(&["v"]));
}
