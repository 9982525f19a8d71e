//! Flattened statements for stack-free traversal.
//!
//! The operations on [`Statement`] recurse once per tree level, so a pathologically
//! deep tree can exhaust the call stack. [`StatementArena`] stores the same tree as a
//! vector of nodes whose operands are indices, ordered so that every node precedes its
//! operands. Each operation is then a single reverse sweep over the vector
//! (a catamorphism), with no recursion at all.
//!
//! Results agree with the recursive operations, including which
//! [`EvalError::MissingVariable`] is reported when several bindings are absent.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use statement_rs::arena::StatementArena;
//! use statement_rs::statement::Statement;
//! use statement_rs::syntax::Syntax;
//!
//! let s = Statement::implies(Statement::var("a"), Statement::not(Statement::var("b")));
//! let arena = StatementArena::from_statement(&s);
//! assert_eq!(arena.len(), 4);
//!
//! let env = HashMap::from([("a".to_string(), true), ("b".to_string(), true)]);
//! assert_eq!(arena.evaluate(&env), Ok(false));
//! assert_eq!(arena.render(&Syntax::default()), "(a > ~b)");
//! assert_eq!(arena.to_statement(), s);
//! ```

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use crate::error::EvalError;
use crate::statement::{Assignment, Statement};
use crate::syntax::Syntax;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Idx(usize);

/// One layer of a statement, with operands of type `I`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node<T, I = Idx> {
    True,
    False,
    Var(T),
    And(Vec<I>),
    Or(Vec<I>),
    Xor(I, I),
    Implies(I, I),
    Xnor(I, I),
    Not(I),
}

impl<T, A> Node<T, A> {
    /// Maps operands left to right.
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Node<T, B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Node::True => Node::True,
            Node::False => Node::False,
            Node::Var(t) => Node::Var(t),
            Node::And(xs) => Node::And(xs.into_iter().map(f).collect()),
            Node::Or(xs) => Node::Or(xs.into_iter().map(f).collect()),
            Node::Xor(a, b) => {
                let a = f(a);
                Node::Xor(a, f(b))
            }
            Node::Implies(a, b) => {
                let a = f(a);
                Node::Implies(a, f(b))
            }
            Node::Xnor(a, b) => {
                let a = f(a);
                Node::Xnor(a, f(b))
            }
            Node::Not(a) => Node::Not(f(a)),
        }
    }

    /// Maps operands left to right, borrowing the node.
    #[inline(always)]
    pub fn fmap_ref<B, F>(&self, mut f: F) -> Node<&T, B>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Node::True => Node::True,
            Node::False => Node::False,
            Node::Var(t) => Node::Var(t),
            Node::And(xs) => Node::And(xs.iter().map(f).collect()),
            Node::Or(xs) => Node::Or(xs.iter().map(f).collect()),
            Node::Xor(a, b) => {
                let a = f(a);
                Node::Xor(a, f(b))
            }
            Node::Implies(a, b) => {
                let a = f(a);
                Node::Implies(a, f(b))
            }
            Node::Xnor(a, b) => {
                let a = f(a);
                Node::Xnor(a, f(b))
            }
            Node::Not(a) => Node::Not(f(a)),
        }
    }
}

// See: https://recursion.wtf/posts/rust_schemes/
#[derive(Debug, Clone)]
pub struct StatementArena {
    /// Topologically sorted nodes, root first, by construction.
    nodes: Vec<Node<String>>,
}

impl StatementArena {
    pub fn get(&self, idx: Idx) -> &Node<String> {
        &self.nodes[idx.0]
    }

    pub fn root(&self) -> Idx {
        Idx(0)
    }

    /// Number of nodes, equal to [`Statement::size`].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: an arena holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl StatementArena {
    fn expand<R, F>(seed: R, expand: F) -> Self
    where
        R: Clone,
        F: Fn(R) -> Node<String, R>,
    {
        let mut frontier: VecDeque<R> = VecDeque::from([seed]);
        let mut nodes: Vec<Node<String>> = vec![];

        while let Some(seed) = frontier.pop_front() {
            let node = expand(seed);
            // The node being built lands at `nodes.len()`, queued seeds right after it.
            let node = node.fmap(|r| {
                frontier.push_back(r);
                Idx(nodes.len() + frontier.len())
            });
            nodes.push(node);
        }

        Self { nodes }
    }

    /// Flattens a tree breadth-first, without recursion.
    pub fn from_statement(statement: &Statement) -> Self {
        let arena = Self::expand(statement, |seed| match seed {
            Statement::True => Node::True,
            Statement::False => Node::False,
            Statement::Var(name) => Node::Var(name.clone()),
            Statement::And(children) => Node::And(children.iter().collect()),
            Statement::Or(children) => Node::Or(children.iter().collect()),
            Statement::Xor(a, b) => Node::Xor(&**a, &**b),
            Statement::Implies(a, b) => Node::Implies(&**a, &**b),
            Statement::Xnor(a, b) => Node::Xnor(&**a, &**b),
            Statement::Not(a) => Node::Not(&**a),
        });
        debug!("from_statement: {} nodes", arena.len());
        arena
    }

    fn collapse<R, F>(&self, mut collapse: F) -> R
    where
        F: FnMut(Node<&String, R>) -> R,
    {
        let mut results: Vec<Option<R>> = std::iter::repeat_with(|| None).take(self.nodes.len()).collect();

        for (i, node) in self.nodes.iter().enumerate().rev() {
            // Operands sit at larger indices and each is consumed by exactly one parent.
            let node = node.fmap_ref(|idx| results[idx.0].take().expect("operand collapsed before its parent"));
            results[i] = Some(collapse(node));
        }

        results
            .into_iter()
            .next()
            .flatten()
            .expect("arena contains its root")
    }

    /// Same as [`Statement::evaluate`].
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        debug!("evaluate({} nodes)", self.len());
        self.collapse::<Result<bool, EvalError>, _>(|node| match node {
            Node::True => Ok(true),
            Node::False => Ok(false),
            Node::Var(name) => match assignment.get(name) {
                Some(&value) => Ok(value),
                None => {
                    trace!("evaluate: no binding for '{}'", name);
                    Err(EvalError::MissingVariable(name.clone()))
                }
            },
            // Operand results are inspected in order, so the first failure wins.
            Node::And(values) => {
                let mut result = true;
                for value in values {
                    result &= value?;
                }
                Ok(result)
            }
            Node::Or(values) => {
                let mut result = false;
                for value in values {
                    result |= value?;
                }
                Ok(result)
            }
            Node::Xor(a, b) => {
                let (a, b) = (a?, b?);
                Ok(a != b)
            }
            Node::Implies(a, b) => {
                let (a, b) = (a?, b?);
                Ok(!a || b)
            }
            Node::Xnor(a, b) => {
                let (a, b) = (a?, b?);
                Ok(a == b)
            }
            Node::Not(a) => Ok(!a?),
        })
    }

    /// Same as [`Statement::get_variables`].
    pub fn get_variables(&self) -> HashSet<String> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Var(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Same as [`Statement::to_string_with`].
    pub fn render(&self, syntax: &Syntax) -> String {
        debug!("render({} nodes)", self.len());
        let joined = |parts: Vec<String>, operator: &str| {
            let separator = format!(" {} ", operator);
            format!("{}{}{}", syntax.opening_bracket, parts.join(&separator), syntax.closing_bracket)
        };
        self.collapse::<String, _>(|node| match node {
            Node::True => syntax.true_constant.to_string(),
            Node::False => syntax.false_constant.to_string(),
            Node::Var(name) => name.clone(),
            Node::And(parts) => joined(parts, syntax.and_operator),
            Node::Or(parts) => joined(parts, syntax.or_operator),
            Node::Xor(a, b) => joined(vec![a, b], syntax.xor_operator),
            Node::Implies(a, b) => joined(vec![a, b], syntax.impl_operator),
            Node::Xnor(a, b) => joined(vec![a, b], syntax.xnor_operator),
            Node::Not(a) => format!("{}{}", syntax.not_operator, a),
        })
    }

    /// Rebuilds the boxed tree.
    pub fn to_statement(&self) -> Statement {
        self.collapse(|node| match node {
            Node::True => Statement::True,
            Node::False => Statement::False,
            Node::Var(name) => Statement::Var(name.clone()),
            Node::And(children) => Statement::And(children),
            Node::Or(children) => Statement::Or(children),
            Node::Xor(a, b) => Statement::xor(a, b),
            Node::Implies(a, b) => Statement::implies(a, b),
            Node::Xnor(a, b) => Statement::xnor(a, b),
            Node::Not(a) => Statement::not(a),
        })
    }
}

impl From<&Statement> for StatementArena {
    fn from(statement: &Statement) -> Self {
        StatementArena::from_statement(statement)
    }
}
