//! Property-based tests for parsing and entailment.
//!
//! Formulas are generated over a four-symbol vocabulary so that every
//! enumeration stays small.

use entail::{
    Entailment, EntailmentConfig, Enumeration, Evaluator, Expression, Model, XorSemantics,
    entails, parse, truth_value,
};
use proptest::prelude::*;

const SYMBOLS: [&str; 4] = ["A", "B", "C", "D"];

// ============================================================================
// Strategies
// ============================================================================

fn symbol() -> impl Strategy<Value = Expression> {
    prop::sample::select(SYMBOLS.to_vec()).prop_map(|name| Expression::literal(name))
}

/// A connective name with random letter case.
fn spelled(name: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

fn expression() -> impl Strategy<Value = Expression> {
    symbol().prop_recursive(4, 32, 4, |inner| {
        let children = prop::collection::vec(inner.clone(), 1..4);
        prop_oneof![
            (spelled("not"), inner.clone())
                .prop_map(|(name, operand)| Expression::compound(name, [operand])),
            (spelled("if"), inner.clone(), inner.clone())
                .prop_map(|(name, a, b)| Expression::compound(name, [a, b])),
            (spelled("iff"), inner.clone(), inner.clone())
                .prop_map(|(name, a, b)| Expression::compound(name, [a, b])),
            (spelled("and"), children.clone())
                .prop_map(|(name, children)| Expression::compound(name, children)),
            (spelled("or"), children.clone())
                .prop_map(|(name, children)| Expression::compound(name, children)),
            (spelled("xor"), children)
                .prop_map(|(name, children)| Expression::compound(name, children)),
        ]
    })
}

/// A conjunctive knowledge base, often with literal facts among its conjuncts.
fn knowledge_base() -> impl Strategy<Value = Expression> {
    let fact = prop_oneof![
        symbol(),
        symbol().prop_map(|literal| Expression::not(literal)),
    ];
    (
        prop::collection::vec(fact, 0..3),
        prop::collection::vec(expression(), 1..3),
    )
        .prop_map(|(facts, rules)| Expression::and(facts.into_iter().chain(rules)))
}

fn engine(enumeration: Enumeration) -> Entailment {
    Entailment::new(EntailmentConfig::default().with_enumeration(enumeration))
}

// ============================================================================
// Parsing
// ============================================================================

proptest! {
    #[test]
    fn rendering_roundtrips_through_the_parser(expr in expression()) {
        let rendered = expr.render("");
        prop_assert_eq!(parse(&rendered).unwrap(), expr);
    }
}

// ============================================================================
// Entailment
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn entailment_ignores_enumeration_order(
        kb in knowledge_base(),
        statement in expression(),
        order in Just(SYMBOLS.to_vec()).prop_shuffle(),
    ) {
        let expected = entails(&kb, &statement).unwrap();
        for enumeration in [Enumeration::Recursive, Enumeration::Iterative] {
            let checked = engine(enumeration)
                .check_models(&kb, &statement, &order, &Model::new())
                .unwrap();
            prop_assert_eq!(checked, expected);
        }
    }

    #[test]
    fn strategies_agree(kb in knowledge_base(), statement in expression()) {
        let recursive = engine(Enumeration::Recursive).assess(&kb, statement.clone()).unwrap();
        let iterative = engine(Enumeration::Iterative).assess(&kb, statement).unwrap();
        prop_assert_eq!(recursive, iterative);
    }

    #[test]
    fn de_morgan(kb in knowledge_base(), a in symbol(), b in symbol()) {
        let negated_conjunction = Expression::not(Expression::and([a.clone(), b.clone()]));
        let disjoined_negations = Expression::or([Expression::not(a), Expression::not(b)]);
        prop_assert_eq!(
            entails(&kb, &negated_conjunction).unwrap(),
            entails(&kb, &disjoined_negations).unwrap()
        );
    }

    #[test]
    fn binary_xor_is_the_same_under_both_semantics(
        values in prop::collection::vec(any::<bool>(), SYMBOLS.len()),
        a in symbol(),
        b in symbol(),
    ) {
        let model = SYMBOLS.into_iter().zip(values).collect::<Model>();
        let statement = Expression::xor([a, b]);
        let parity = Evaluator::new(XorSemantics::Parity);
        prop_assert_eq!(
            truth_value(&statement, &model).unwrap(),
            parity.truth_value(&statement, &model).unwrap()
        );
    }

    #[test]
    fn knowledge_base_entails_each_conjunct(kb in knowledge_base()) {
        for conjunct in kb.children() {
            prop_assert!(entails(&kb, conjunct).unwrap());
        }
    }
}
