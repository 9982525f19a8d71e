//! Errors raised while evaluating statements.

use std::fmt;

/// Error type for [`Statement::evaluate`][crate::statement::Statement::evaluate].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    /// A variable was reached that has no binding in the assignment.
    MissingVariable(String),
}

impl EvalError {
    /// Name of the variable responsible for the failure.
    pub fn variable_name(&self) -> &str {
        match self {
            EvalError::MissingVariable(name) => name,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MissingVariable(name) => write!(f, "Missing variable '{}'", name),
        }
    }
}

impl std::error::Error for EvalError {}
