//! Token set used to render statements.
//!
//! Rendering never consults global state: every textual token comes from a
//! [`Syntax`] value, so the output is a pure function of the tree and the
//! syntax it is rendered with.
//!
//! # Examples
//!
//! ```
//! use statement_rs::statement::Statement;
//! use statement_rs::syntax::Syntax;
//!
//! let s = Statement::and([Statement::var("a"), Statement::not(Statement::var("b"))]);
//! assert_eq!(s.to_string(), "(a & ~b)");
//! assert_eq!(s.to_string_with(&Syntax::unicode()), "(a ∧ ¬b)");
//!
//! let syntax = Syntax {
//!     and_operator: "&&",
//!     ..Syntax::default()
//! };
//! assert_eq!(s.to_string_with(&syntax), "(a && ~b)");
//! ```

/// Literal tokens for constants, operators and brackets.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Syntax {
    /// Constant true (default: "1")
    pub true_constant: &'static str,
    /// Constant false (default: "0")
    pub false_constant: &'static str,
    /// Conjunction (default: "&")
    pub and_operator: &'static str,
    /// Disjunction (default: "|")
    pub or_operator: &'static str,
    /// Exclusive or (default: "^")
    pub xor_operator: &'static str,
    /// Negation, written as a prefix without brackets (default: "~")
    pub not_operator: &'static str,
    /// Implication (default: ">")
    pub impl_operator: &'static str,
    /// Equivalence (default: "=")
    pub xnor_operator: &'static str,
    /// Opening bracket (default: "(")
    pub opening_bracket: &'static str,
    /// Closing bracket (default: ")")
    pub closing_bracket: &'static str,
}

impl Syntax {
    /// The ASCII token set used by `Display`.
    pub const ASCII: Syntax = Syntax {
        true_constant: "1",
        false_constant: "0",
        and_operator: "&",
        or_operator: "|",
        xor_operator: "^",
        not_operator: "~",
        impl_operator: ">",
        xnor_operator: "=",
        opening_bracket: "(",
        closing_bracket: ")",
    };

    /// Mathematical notation.
    pub fn unicode() -> Self {
        Self {
            true_constant: "⊤",
            false_constant: "⊥",
            and_operator: "∧",
            or_operator: "∨",
            xor_operator: "⊕",
            not_operator: "¬",
            impl_operator: "→",
            xnor_operator: "↔",
            ..Self::ASCII
        }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::ASCII
    }
}
