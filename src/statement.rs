//! Propositional statements.
//!
//! A [`Statement`] is an immutable expression tree over named boolean variables.
//! Every node supports three operations:
//!
//! - [`get_variables`][Statement::get_variables] collects the free variables,
//! - [`evaluate`][Statement::evaluate] computes the truth value under an [`Assignment`],
//! - rendering via [`Display`][fmt::Display] (or [`to_string_with`][Statement::to_string_with])
//!   produces the canonical, fully bracketed text form.
//!
//! # Evaluation order
//!
//! Composite nodes evaluate *all* of their operands, strictly left to right, even when
//! the result is already determined by a prefix. When several operands lack a binding,
//! the reported [`EvalError::MissingVariable`] is the one of the first operand in order.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use statement_rs::error::EvalError;
//! use statement_rs::statement::Statement;
//!
//! let s = Statement::and([Statement::bottom(), Statement::var("foo"), Statement::var("qux")]);
//! let err = s.evaluate(&HashMap::new()).unwrap_err();
//! assert_eq!(err, EvalError::MissingVariable("foo".to_string()));
//! ```
//!
//! # Rendering
//!
//! - constants render as the syntax's true/false tokens,
//! - variables render verbatim,
//! - `And`/`Or` render their children joined by ` op ` inside brackets (no children gives `()`),
//! - `Xor`/`Implies`/`Xnor` render as `(a op b)`,
//! - `Not` prefixes its operand with the negation token and adds no brackets.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use log::trace;

use crate::error::EvalError;
use crate::syntax::Syntax;

/// Binding of variable names to truth values.
pub type Assignment = HashMap<String, bool>;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Statement {
    /// Constant true.
    True,
    /// Constant false.
    False,
    /// Reference to a named variable.
    Var(String),
    /// Conjunction of any number of operands.
    And(Vec<Statement>),
    /// Disjunction of any number of operands.
    Or(Vec<Statement>),
    /// Exclusive or.
    Xor(Box<Statement>, Box<Statement>),
    /// Implication: antecedent, consequent.
    Implies(Box<Statement>, Box<Statement>),
    /// Equivalence.
    Xnor(Box<Statement>, Box<Statement>),
    /// Negation.
    Not(Box<Statement>),
}

impl Statement {
    pub fn constant(value: bool) -> Self {
        if value {
            Statement::True
        } else {
            Statement::False
        }
    }

    pub fn top() -> Self {
        Statement::True
    }

    pub fn bottom() -> Self {
        Statement::False
    }

    pub fn var(name: impl Into<String>) -> Self {
        Statement::Var(name.into())
    }

    pub fn and(children: impl IntoIterator<Item = Statement>) -> Self {
        Statement::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Statement>) -> Self {
        Statement::Or(children.into_iter().collect())
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Statement::Xor(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(antecedent: Self, consequent: Self) -> Self {
        Statement::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn xnor(lhs: Self, rhs: Self) -> Self {
        Statement::Xnor(Box::new(lhs), Box::new(rhs))
    }

    /// Negation. Double negations are kept as written.
    pub fn not(value: Self) -> Self {
        Statement::Not(Box::new(value))
    }
}

impl Statement {
    /// Returns the set of distinct variable names occurring anywhere in the tree.
    ///
    /// Constants and operators without operands contribute nothing, so the result
    /// is empty exactly when the tree contains no [`Statement::Var`] node.
    pub fn get_variables(&self) -> HashSet<String> {
        let mut variables = HashSet::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, acc: &mut HashSet<String>) {
        match self {
            Statement::True | Statement::False => {}
            Statement::Var(name) => {
                if !acc.contains(name) {
                    acc.insert(name.clone());
                }
            }
            Statement::And(children) | Statement::Or(children) => {
                for child in children {
                    child.collect_variables(acc);
                }
            }
            Statement::Xor(a, b) | Statement::Implies(a, b) | Statement::Xnor(a, b) => {
                a.collect_variables(acc);
                b.collect_variables(acc);
            }
            Statement::Not(a) => a.collect_variables(acc),
        }
    }

    /// Evaluates the statement under the given assignment.
    ///
    /// Operands are evaluated left to right without short-circuiting. An empty `And`
    /// is `true` and an empty `Or` is `false`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::MissingVariable`] for the first variable (in evaluation order)
    /// that has no binding in `assignment`.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Statement::True => Ok(true),
            Statement::False => Ok(false),
            Statement::Var(name) => match assignment.get(name) {
                Some(&value) => Ok(value),
                None => {
                    trace!("evaluate: no binding for '{}'", name);
                    Err(EvalError::MissingVariable(name.clone()))
                }
            },
            Statement::And(children) => {
                let mut result = true;
                for child in children {
                    result &= child.evaluate(assignment)?;
                }
                Ok(result)
            }
            Statement::Or(children) => {
                let mut result = false;
                for child in children {
                    result |= child.evaluate(assignment)?;
                }
                Ok(result)
            }
            Statement::Xor(a, b) => {
                let (a, b) = (a.evaluate(assignment)?, b.evaluate(assignment)?);
                Ok(a != b)
            }
            Statement::Implies(a, b) => {
                let (a, b) = (a.evaluate(assignment)?, b.evaluate(assignment)?);
                Ok(!a || b)
            }
            Statement::Xnor(a, b) => {
                let (a, b) = (a.evaluate(assignment)?, b.evaluate(assignment)?);
                Ok(a == b)
            }
            Statement::Not(a) => Ok(!a.evaluate(assignment)?),
        }
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Statement::True | Statement::False | Statement::Var(_) => 0,
            Statement::And(children) | Statement::Or(children) => {
                1 + children.iter().map(Statement::depth).max().unwrap_or(0)
            }
            Statement::Xor(a, b) | Statement::Implies(a, b) | Statement::Xnor(a, b) => 1 + a.depth().max(b.depth()),
            Statement::Not(a) => 1 + a.depth(),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Statement::True | Statement::False | Statement::Var(_) => 1,
            Statement::And(children) | Statement::Or(children) => 1 + children.iter().map(Statement::size).sum::<usize>(),
            Statement::Xor(a, b) | Statement::Implies(a, b) | Statement::Xnor(a, b) => 1 + a.size() + b.size(),
            Statement::Not(a) => 1 + a.size(),
        }
    }
}

impl Statement {
    /// Renders the statement with the given token set.
    pub fn to_string_with(&self, syntax: &Syntax) -> String {
        self.display_with(syntax).to_string()
    }

    /// Returns a [`Display`][fmt::Display] adapter rendering with the given token set.
    pub fn display_with<'a>(&'a self, syntax: &'a Syntax) -> WithSyntax<'a> {
        WithSyntax { statement: self, syntax }
    }

    fn write_with(&self, f: &mut impl fmt::Write, syntax: &Syntax) -> fmt::Result {
        match self {
            Statement::True => f.write_str(syntax.true_constant),
            Statement::False => f.write_str(syntax.false_constant),
            Statement::Var(name) => f.write_str(name),
            Statement::And(children) => write_joined(f, children, syntax.and_operator, syntax),
            Statement::Or(children) => write_joined(f, children, syntax.or_operator, syntax),
            Statement::Xor(a, b) => write_joined(f, [&**a, &**b], syntax.xor_operator, syntax),
            Statement::Implies(a, b) => write_joined(f, [&**a, &**b], syntax.impl_operator, syntax),
            Statement::Xnor(a, b) => write_joined(f, [&**a, &**b], syntax.xnor_operator, syntax),
            Statement::Not(a) => {
                f.write_str(syntax.not_operator)?;
                a.write_with(f, syntax)
            }
        }
    }
}

// "(a op b op c)"
fn write_joined<'a>(
    f: &mut impl fmt::Write,
    children: impl IntoIterator<Item = &'a Statement>,
    operator: &str,
    syntax: &Syntax,
) -> fmt::Result {
    f.write_str(syntax.opening_bracket)?;
    for (i, child) in children.into_iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", operator)?;
        }
        child.write_with(f, syntax)?;
    }
    f.write_str(syntax.closing_bracket)
}

/// Display adapter produced by [`Statement::display_with`].
#[derive(Debug, Copy, Clone)]
pub struct WithSyntax<'a> {
    statement: &'a Statement,
    syntax: &'a Syntax,
}

impl fmt::Display for WithSyntax<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statement.write_with(f, self.syntax)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &Syntax::ASCII)
    }
}

impl From<bool> for Statement {
    fn from(value: bool) -> Self {
        Statement::constant(value)
    }
}

impl Not for Statement {
    type Output = Statement;

    fn not(self) -> Self::Output {
        Statement::not(self)
    }
}

impl BitAnd for Statement {
    type Output = Statement;

    fn bitand(self, rhs: Self) -> Self::Output {
        Statement::And(vec![self, rhs])
    }
}

impl BitOr for Statement {
    type Output = Statement;

    fn bitor(self, rhs: Self) -> Self::Output {
        Statement::Or(vec![self, rhs])
    }
}

impl BitXor for Statement {
    type Output = Statement;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Statement::xor(self, rhs)
    }
}
