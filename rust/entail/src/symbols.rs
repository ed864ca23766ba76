//! Collecting the propositional symbols of an expression.

use indexmap::IndexSet;

use crate::ast::Expression;

/// Distinct symbols of `expression`, in the order a pre-order walk first
/// meets them.
pub fn collect_symbols(expression: &Expression) -> Vec<&str> {
    let mut symbols = IndexSet::new();
    collect_into(expression, &mut symbols);
    symbols.into_iter().collect()
}

/// Add the symbols of `expression` to `symbols`, keeping first-seen order.
pub fn collect_into<'a>(expression: &'a Expression, symbols: &mut IndexSet<&'a str>) {
    match expression {
        Expression::Literal(symbol) => {
            symbols.insert(symbol.as_str());
        }
        Expression::Compound { children, .. } => {
            for child in children {
                collect_into(child, symbols);
            }
        }
    }
}
