//! Entailment by truth-table enumeration.
//!
//! A knowledge base entails a statement when every model that satisfies the
//! knowledge base also satisfies the statement. The engine seeds a model with
//! the facts stated directly by the knowledge base (see
//! [`Model::from_facts`]), then walks all `2^k` assignments of the `k`
//! remaining symbols, stopping at the first assignment that satisfies the
//! knowledge base but falsifies the statement.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::ast::Expression;
use crate::config::{EntailmentConfig, Enumeration};
use crate::error::EvaluationError;
use crate::eval::Evaluator;
use crate::model::Model;
use crate::symbols::collect_into;
use crate::verdict::{Classification, Verdict};

/// An entailment engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entailment {
    config: EntailmentConfig,
    evaluator: Evaluator,
}

impl Entailment {
    pub fn new(config: EntailmentConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(config.xor),
        }
    }

    pub fn config(&self) -> &EntailmentConfig {
        &self.config
    }

    /// Symbols of the knowledge base followed by any new symbols of the
    /// statement, excluding those already bound in `model`.
    pub fn free_symbols<'a>(
        &self,
        knowledge_base: &'a Expression,
        statement: &'a Expression,
        model: &Model,
    ) -> Vec<&'a str> {
        let mut symbols = IndexSet::new();
        collect_into(knowledge_base, &mut symbols);
        collect_into(statement, &mut symbols);
        symbols
            .into_iter()
            .filter(|symbol| !model.contains(symbol))
            .collect()
    }

    /// Returns `true` if `knowledge_base` entails `statement`.
    pub fn entails(
        &self,
        knowledge_base: &Expression,
        statement: &Expression,
    ) -> Result<bool, EvaluationError> {
        let model = Model::from_facts(knowledge_base);
        let symbols = self.free_symbols(knowledge_base, statement, &model);
        tracing::debug!(
            fixed = model.len(),
            free = symbols.len(),
            enumeration = %self.config.enumeration,
            "checking entailment"
        );
        self.check_models(knowledge_base, statement, &symbols, &model)
    }

    /// Check every extension of `model` over `symbols`, branching on
    /// `symbols` in the given order with `true` before `false`.
    ///
    /// Every symbol of both expressions must be bound in `model` or listed in
    /// `symbols`.
    pub fn check_models(
        &self,
        knowledge_base: &Expression,
        statement: &Expression,
        symbols: &[&str],
        model: &Model,
    ) -> Result<bool, EvaluationError> {
        match self.config.enumeration {
            Enumeration::Recursive => {
                self.check_recursive(knowledge_base, statement, symbols, model)
            }
            Enumeration::Iterative => {
                self.check_iterative(knowledge_base, statement, symbols, model)
            }
        }
    }

    fn check_recursive(
        &self,
        knowledge_base: &Expression,
        statement: &Expression,
        symbols: &[&str],
        model: &Model,
    ) -> Result<bool, EvaluationError> {
        match symbols.split_first() {
            None => self.check_leaf(knowledge_base, statement, model),
            Some((symbol, rest)) => Ok(self.check_recursive(
                knowledge_base,
                statement,
                rest,
                &model.extend(*symbol, true),
            )? && self.check_recursive(
                knowledge_base,
                statement,
                rest,
                &model.extend(*symbol, false),
            )?),
        }
    }

    /// Walks the same assignments as [`Self::check_recursive`] with an
    /// odometer over the symbols: the last symbol changes fastest and each
    /// position counts `true` then `false`.
    fn check_iterative(
        &self,
        knowledge_base: &Expression,
        statement: &Expression,
        symbols: &[&str],
        model: &Model,
    ) -> Result<bool, EvaluationError> {
        let mut values = vec![true; symbols.len()];
        loop {
            let leaf = symbols
                .iter()
                .zip(&values)
                .fold(model.clone(), |leaf, (symbol, value)| {
                    leaf.extend(*symbol, *value)
                });
            if !self.check_leaf(knowledge_base, statement, &leaf)? {
                return Ok(false);
            }

            let mut position = values.len();
            loop {
                if position == 0 {
                    return Ok(true);
                }
                position -= 1;
                if values[position] {
                    values[position] = false;
                    break;
                }
                values[position] = true;
            }
        }
    }

    /// A complete model passes unless it satisfies the knowledge base and
    /// falsifies the statement.
    fn check_leaf(
        &self,
        knowledge_base: &Expression,
        statement: &Expression,
        model: &Model,
    ) -> Result<bool, EvaluationError> {
        if self.evaluator.truth_value(knowledge_base, model)? {
            tracing::trace!(%model, "knowledge base holds");
            self.evaluator.truth_value(statement, model)
        } else {
            Ok(true)
        }
    }

    /// Check both the statement and its negation.
    ///
    /// The negation wraps the statement without copying it.
    pub fn assess(
        &self,
        knowledge_base: &Expression,
        statement: impl Into<Arc<Expression>>,
    ) -> Result<Classification, EvaluationError> {
        let statement = statement.into();
        let entailed = self.entails(knowledge_base, &statement)?;
        let negation = Expression::not(Arc::clone(&statement));
        let negation_entailed = self.entails(knowledge_base, &negation)?;
        tracing::debug!(entailed, negation_entailed, "classified statement");
        Ok(Classification::new(entailed, negation_entailed))
    }

    pub fn classify(
        &self,
        knowledge_base: &Expression,
        statement: impl Into<Arc<Expression>>,
    ) -> Result<Verdict, EvaluationError> {
        Ok(self.assess(knowledge_base, statement)?.verdict)
    }
}

/// Returns `true` if `knowledge_base` entails `statement`, using the default
/// configuration.
pub fn entails(
    knowledge_base: &Expression,
    statement: &Expression,
) -> Result<bool, EvaluationError> {
    Entailment::default().entails(knowledge_base, statement)
}

/// Classify `statement` against `knowledge_base`, using the default
/// configuration.
///
/// # Example
///
/// ```
/// use entail::{classify, parse, Verdict};
///
/// let kb = parse("(and P (if P Q))").unwrap();
/// let statement = parse("Q").unwrap();
/// assert_eq!(classify(&kb, statement).unwrap(), Verdict::DefinitelyTrue);
/// ```
pub fn classify(
    knowledge_base: &Expression,
    statement: impl Into<Arc<Expression>>,
) -> Result<Verdict, EvaluationError> {
    Entailment::default().classify(knowledge_base, statement)
}
