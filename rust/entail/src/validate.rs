//! Grammar and arity checks over parsed expressions.
//!
//! A literal is valid when its symbol is non-empty and made of ASCII
//! alphanumerics and `_`. A compound is valid when its connective is one of
//! the six known connectives, its child count satisfies that connective's
//! [`Arity`](crate::connective::Arity), and every child is valid.

use crate::ast::Expression;
use crate::connective::Connective;
use crate::error::ValidationError;

/// Returns `true` if `symbol` is a well-formed propositional symbol.
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check a single node without descending into its children.
fn check_node(expression: &Expression) -> Result<(), ValidationError> {
    match expression {
        Expression::Literal(symbol) => {
            if is_valid_symbol(symbol) {
                Ok(())
            } else {
                Err(ValidationError::InvalidSymbol {
                    symbol: symbol.clone(),
                })
            }
        }
        Expression::Compound {
            connective,
            children,
        } => {
            let known = Connective::lookup(connective).ok_or_else(|| {
                ValidationError::UnknownConnective {
                    connective: connective.clone(),
                }
            })?;
            let arity = known.arity();
            if arity.admits(children.len()) {
                Ok(())
            } else {
                Err(ValidationError::Arity {
                    connective: connective.clone(),
                    arguments: children.len(),
                    expected: arity.to_string(),
                })
            }
        }
    }
}

/// Return the first violation found in a pre-order walk.
pub fn validate(expression: &Expression) -> Result<(), ValidationError> {
    check_node(expression)?;
    expression.children().iter().try_for_each(|child| validate(child))
}

/// Collect every violation, including those beneath an already invalid node.
pub fn violations(expression: &Expression) -> Vec<ValidationError> {
    let mut found = Vec::new();
    collect_violations(expression, &mut found);
    found
}

fn collect_violations(expression: &Expression, found: &mut Vec<ValidationError>) {
    if let Err(error) = check_node(expression) {
        found.push(error);
    }
    for child in expression.children() {
        collect_violations(child, found);
    }
}

/// Returns `true` if the expression is valid, logging the first violation
/// otherwise.
pub fn is_valid(expression: &Expression) -> bool {
    match validate(expression) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(%error, expression = %expression, "invalid expression");
            false
        }
    }
}
