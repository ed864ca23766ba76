//! Expression trees for propositional formulas.
//!
//! An [`Expression`] is either a [`Expression::Literal`] naming a
//! propositional symbol, or a [`Expression::Compound`] applying a connective
//! to one or more children. The formula `(if P (and Q R))` is a compound
//! `if` with children `P` and `(and Q R)`.
//!
//! Children are held behind [`Arc`] so a tree can be wrapped (for example in
//! a `not`) without copying it.

use std::fmt;
use std::sync::Arc;

use crate::connective::Connective;

/// Marker rendered in place of an absent expression.
pub const INVALID: &str = "INVALID";

/// A parsed propositional formula.
///
/// The parser does not check connective names or child counts, so a
/// `Compound` may carry an unknown connective or no children at all until it
/// is rejected by [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A propositional symbol such as `P` or `wumpus_1_2`.
    Literal(String),
    /// A connective applied to an ordered list of children.
    Compound {
        /// The connective name as written (matched case-insensitively).
        connective: String,
        children: Vec<Arc<Expression>>,
    },
}

impl Expression {
    pub fn literal(symbol: impl Into<String>) -> Self {
        Expression::Literal(symbol.into())
    }

    pub fn compound<I, E>(connective: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        Expression::Compound {
            connective: connective.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Wrap `operand` in a `not`. The operand is shared, not copied.
    pub fn not(operand: impl Into<Arc<Expression>>) -> Self {
        Expression::Compound {
            connective: Connective::Not.name().into(),
            children: vec![operand.into()],
        }
    }

    pub fn and<I, E>(children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        Self::compound(Connective::And.name(), children)
    }

    pub fn or<I, E>(children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        Self::compound(Connective::Or.name(), children)
    }

    pub fn xor<I, E>(children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Expression>>,
    {
        Self::compound(Connective::Xor.name(), children)
    }

    pub fn implies(
        antecedent: impl Into<Arc<Expression>>,
        consequent: impl Into<Arc<Expression>>,
    ) -> Self {
        Self::compound(
            Connective::If.name(),
            [antecedent.into(), consequent.into()],
        )
    }

    pub fn iff(left: impl Into<Arc<Expression>>, right: impl Into<Arc<Expression>>) -> Self {
        Self::compound(Connective::Iff.name(), [left.into(), right.into()])
    }

    /// The symbol of a literal.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Expression::Literal(symbol) => Some(symbol),
            Expression::Compound { .. } => None,
        }
    }

    /// The connective name of a compound, exactly as written.
    pub fn connective_name(&self) -> Option<&str> {
        match self {
            Expression::Literal(_) => None,
            Expression::Compound { connective, .. } => Some(connective),
        }
    }

    /// The recognized connective of a compound, if its name is known.
    pub fn connective(&self) -> Option<Connective> {
        self.connective_name().and_then(Connective::lookup)
    }

    /// Children of a compound; empty for a literal.
    pub fn children(&self) -> &[Arc<Expression>] {
        match self {
            Expression::Literal(_) => &[],
            Expression::Compound { children, .. } => children,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expression::Literal(_))
    }

    /// Returns `true` if this is a compound whose connective is `connective`.
    pub fn is(&self, connective: Connective) -> bool {
        self.connective() == Some(connective)
    }

    /// Render with `separator` appended after each top-level child.
    ///
    /// Children are themselves rendered without a separator, so
    /// `(and P (or Q R))` with separator `","` renders as
    /// `(and P, (or Q R),)`.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_rendered(&mut out, separator);
        out
    }

    fn write_rendered(&self, out: &mut impl fmt::Write, separator: &str) -> fmt::Result {
        match self {
            Expression::Literal(symbol) => out.write_str(symbol),
            Expression::Compound {
                connective,
                children,
            } => {
                write!(out, "({connective}")?;
                for child in children {
                    out.write_char(' ')?;
                    child.write_rendered(out, "")?;
                    out.write_str(separator)?;
                }
                out.write_char(')')
            }
        }
    }
}

/// Render an expression that may be absent; `None` renders as [`INVALID`].
pub fn render(expression: Option<&Expression>, separator: &str) -> String {
    match expression {
        Some(expression) => expression.render(separator),
        None => INVALID.to_string(),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rendered(f, "")
    }
}

impl From<&str> for Expression {
    fn from(symbol: &str) -> Self {
        Expression::literal(symbol)
    }
}
