//! # statement-rs: Propositional logic statements in Rust
//!
//! **`statement-rs`** models propositional formulas as immutable expression trees and
//! provides three operations over them: collecting free variables, evaluating under a
//! variable assignment, and rendering to a canonical, fully bracketed text form.
//!
//! ## Statements
//!
//! A [`Statement`][crate::statement::Statement] is one of nine variants:
//!
//! - leaves: constant true, constant false, and named variables;
//! - variadic `And` / `Or` over any number of operands (including none);
//! - binary `Xor`, `Implies` and `Xnor`;
//! - unary `Not`.
//!
//! Trees are built bottom-up and never mutated afterwards.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use statement_rs::statement::Statement;
//!
//! // f = (foo & ~bar) > baz
//! let f = Statement::implies(
//!     Statement::and([Statement::var("foo"), Statement::not(Statement::var("bar"))]),
//!     Statement::var("baz"),
//! );
//!
//! assert_eq!(f.to_string(), "((foo & ~bar) > baz)");
//! assert_eq!(f.get_variables().len(), 3);
//!
//! let env = HashMap::from([
//!     ("foo".to_string(), true),
//!     ("bar".to_string(), false),
//!     ("baz".to_string(), false),
//! ]);
//! assert_eq!(f.evaluate(&env), Ok(false));
//!
//! // Missing bindings are reported by name.
//! let err = f.evaluate(&HashMap::new()).unwrap_err();
//! assert_eq!(err.to_string(), "Missing variable 'foo'");
//! ```
//!
//! ## Core Components
//!
//! - **[`statement`]**: the [`Statement`][crate::statement::Statement] tree and its operations.
//! - **[`syntax`]**: the token set used for rendering.
//! - **[`error`]**: evaluation errors.
//! - **[`arena`]**: a flattened representation evaluated without recursion, for very deep trees.

pub mod arena;
pub mod error;
pub mod statement;
pub mod syntax;

pub use error::EvalError;
pub use statement::{Assignment, Statement};
pub use syntax::Syntax;
