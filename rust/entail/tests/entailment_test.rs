use entail::validate::{is_valid, validate};
use entail::{
    Entailment, EntailmentConfig, Enumeration, Expression, Model, ValidationError, Verdict,
    classify, entails, parse, truth_value,
};
use pretty_assertions::assert_eq;

fn expr(input: &str) -> Expression {
    parse(input).unwrap()
}

#[test]
fn test_modus_ponens_is_definitely_true() {
    let kb = expr("(and P (if P Q))");
    assert_eq!(classify(&kb, expr("Q")).unwrap(), Verdict::DefinitelyTrue);
}

#[test]
fn test_contradictory_knowledge_base() {
    let kb = expr("(and P (not P))");
    let statement = expr("Q");
    assert!(entails(&kb, &statement).unwrap());
    assert!(entails(&kb, &Expression::not(statement.clone())).unwrap());
    assert_eq!(classify(&kb, statement).unwrap(), Verdict::Contradictory);
}

#[test]
fn test_disjunction_is_possibly_both() {
    let kb = expr("(or P Q)");
    assert_eq!(classify(&kb, expr("P")).unwrap(), Verdict::PossiblyBoth);
}

#[test]
fn test_iff_with_one_argument_is_invalid() {
    let malformed = expr("(iff A)");
    assert!(matches!(
        validate(&malformed),
        Err(ValidationError::Arity { arguments: 1, .. })
    ));
    assert!(!is_valid(&malformed));
}

#[test]
fn test_xor_truth_table() {
    let xor = expr("(xor A B)");
    let mut satisfying = Vec::new();
    for a in [true, false] {
        for b in [true, false] {
            let model = Model::from_iter([("A", a), ("B", b)]);
            if truth_value(&xor, &model).unwrap() {
                satisfying.push((a, b));
            }
        }
    }
    assert_eq!(satisfying, vec![(true, false), (false, true)]);
}

#[test]
fn test_de_morgan() {
    for kb in ["(and P)", "(and (not A))", "(or A B)", "(and (iff A (not B)))"] {
        let kb = expr(kb);
        assert_eq!(
            entails(&kb, &expr("(not (and A B))")).unwrap(),
            entails(&kb, &expr("(or (not A) (not B))")).unwrap()
        );
    }
}

/// A small wumpus world: the agent has visited the first squares and sensed
/// neither stench nor breeze at 1,1 but a breeze at 2,1.
#[test]
fn test_wumpus_world_inference() {
    let kb = expr(
        "(and
            (iff B_1_1 (or P_1_2 P_2_1))
            (iff B_2_1 (or P_1_1 P_2_2 P_3_1))
            (iff S_1_1 (or W_1_2 W_2_1))
            (not B_1_1)
            (not S_1_1)
            (not P_1_1)
            B_2_1)",
    );

    for config in [
        EntailmentConfig::default(),
        EntailmentConfig::default().with_enumeration(Enumeration::Iterative),
    ] {
        let engine = Entailment::new(config);
        assert_eq!(
            engine.classify(&kb, expr("P_1_2")).unwrap(),
            Verdict::DefinitelyFalse
        );
        assert_eq!(
            engine.classify(&kb, expr("(not W_2_1)")).unwrap(),
            Verdict::DefinitelyTrue
        );
        assert_eq!(
            engine.classify(&kb, expr("(or P_2_2 P_3_1)")).unwrap(),
            Verdict::DefinitelyTrue
        );
        assert_eq!(
            engine.classify(&kb, expr("P_2_2")).unwrap(),
            Verdict::PossiblyBoth
        );
    }
}
