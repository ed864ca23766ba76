//! Truth-value evaluation of expressions under a model.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::Expression;
use crate::connective::Connective;
use crate::error::EvaluationError;
use crate::model::Model;

/// How an n-ary `xor` combines its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum XorSemantics {
    /// True iff exactly one child is true.
    #[default]
    ExactlyOne,
    /// True iff an odd number of children are true.
    Parity,
}

impl XorSemantics {
    fn combine(&self, true_count: usize) -> bool {
        match self {
            XorSemantics::ExactlyOne => true_count == 1,
            XorSemantics::Parity => true_count % 2 == 1,
        }
    }
}

/// Evaluates expressions with a fixed `xor` interpretation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    xor: XorSemantics,
}

impl Evaluator {
    pub fn new(xor: XorSemantics) -> Self {
        Self { xor }
    }

    pub fn xor(&self) -> XorSemantics {
        self.xor
    }

    /// Compute the truth value of `expression` under `model`.
    ///
    /// Every symbol reachable in `expression` must be bound in `model`.
    pub fn truth_value(
        &self,
        expression: &Expression,
        model: &Model,
    ) -> Result<bool, EvaluationError> {
        let (connective, children) = match expression {
            Expression::Literal(symbol) => {
                return model
                    .get(symbol)
                    .ok_or_else(|| EvaluationError::UnboundSymbol {
                        symbol: symbol.clone(),
                    });
            }
            Expression::Compound {
                connective,
                children,
            } => (connective, children),
        };

        let known = Connective::lookup(connective).ok_or_else(|| {
            EvaluationError::UnknownConnective {
                connective: connective.clone(),
            }
        })?;
        let arity_error = || EvaluationError::Arity {
            connective: connective.clone(),
            arguments: children.len(),
        };

        match known {
            Connective::Not => match children.as_slice() {
                [operand] => Ok(!self.truth_value(operand, model)?),
                _ => Err(arity_error()),
            },
            Connective::If => match children.as_slice() {
                [antecedent, consequent] => Ok(!self.truth_value(antecedent, model)?
                    || self.truth_value(consequent, model)?),
                _ => Err(arity_error()),
            },
            Connective::Iff => match children.as_slice() {
                [left, right] => {
                    Ok(self.truth_value(left, model)? == self.truth_value(right, model)?)
                }
                _ => Err(arity_error()),
            },
            Connective::And => {
                for child in children {
                    if !self.truth_value(child, model)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Connective::Or => {
                for child in children {
                    if self.truth_value(child, model)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Connective::Xor => {
                let true_count = self.count_true(children, model)?;
                Ok(self.xor.combine(true_count))
            }
        }
    }

    fn count_true(
        &self,
        children: &[Arc<Expression>],
        model: &Model,
    ) -> Result<usize, EvaluationError> {
        let mut count = 0;
        for child in children {
            if self.truth_value(child, model)? {
                count += 1;
            }
        }
        Ok(count)
    }
}

/// Compute the truth value of `expression` with the default `xor` semantics.
pub fn truth_value(expression: &Expression, model: &Model) -> Result<bool, EvaluationError> {
    Evaluator::default().truth_value(expression, model)
}
