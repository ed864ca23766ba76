//! Truth assignments over propositional symbols.

use std::fmt;

use im::OrdMap;

use crate::ast::Expression;
use crate::connective::Connective;

/// An assignment of truth values to symbols.
///
/// Models are persistent: [`Model::extend`] returns a new model that shares
/// structure with the original and leaves it untouched, so sibling branches
/// of an enumeration never observe each other's assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: OrdMap<String, bool>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Facts stated directly by a conjunctive knowledge base.
    ///
    /// Only the direct children of a top-level `and` are inspected: a literal
    /// `P` fixes `P` to true and `(not P)` fixes `P` to false. Nested
    /// formulas contribute nothing, and a knowledge base of any other shape
    /// yields an empty model.
    pub fn from_facts(knowledge_base: &Expression) -> Self {
        let mut model = Self::new();
        if !knowledge_base.is(Connective::And) {
            return model;
        }

        for child in knowledge_base.children() {
            match child.as_ref() {
                Expression::Literal(symbol) => model.insert(symbol.clone(), true),
                negation if negation.is(Connective::Not) => {
                    if let [operand] = negation.children() {
                        if let Some(symbol) = operand.symbol() {
                            model.insert(symbol.to_string(), false);
                        }
                    }
                }
                _ => {}
            }
        }
        model
    }

    pub fn get(&self, symbol: &str) -> Option<bool> {
        self.values.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.values.contains_key(symbol)
    }

    /// A copy of this model with `symbol` bound to `value`.
    pub fn extend(&self, symbol: impl Into<String>, value: bool) -> Self {
        Self {
            values: self.values.update(symbol.into(), value),
        }
    }

    pub fn insert(&mut self, symbol: impl Into<String>, value: bool) {
        self.values.insert(symbol.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bindings in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.values
            .iter()
            .map(|(symbol, value)| (symbol.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut model = Self::new();
        for (symbol, value) in iter {
            model.insert(symbol, value);
        }
        model
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (symbol, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}: {value}")?;
        }
        write!(f, "}}")
    }
}
