//! Classifying a statement against a knowledge base.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a knowledge base says about a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The statement is entailed and its negation is not.
    DefinitelyTrue,
    /// The negation is entailed and the statement is not.
    DefinitelyFalse,
    /// Neither the statement nor its negation is entailed.
    PossiblyBoth,
    /// Both are entailed, so the knowledge base is unsatisfiable.
    Contradictory,
}

impl Verdict {
    /// Combine the two entailment checks.
    ///
    /// The conditions are tested in a fixed order and the first match wins.
    pub fn from_entailments(entailed: bool, negation_entailed: bool) -> Self {
        if entailed && !negation_entailed {
            Verdict::DefinitelyTrue
        } else if !entailed && negation_entailed {
            Verdict::DefinitelyFalse
        } else if !(entailed && negation_entailed) {
            Verdict::PossiblyBoth
        } else {
            Verdict::Contradictory
        }
    }

    /// The sentence written to the result artifact.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::DefinitelyTrue => "definitely true.",
            Verdict::DefinitelyFalse => "definitely false.",
            Verdict::PossiblyBoth => "possibly true, possibly false.",
            Verdict::Contradictory => "both true and false.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verdict together with the two entailment results it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub verdict: Verdict,
    /// Whether the knowledge base entails the statement.
    pub entailed: bool,
    /// Whether the knowledge base entails the negated statement.
    pub negation_entailed: bool,
}

impl Classification {
    pub fn new(entailed: bool, negation_entailed: bool) -> Self {
        Self {
            verdict: Verdict::from_entailments(entailed, negation_entailed),
            entailed,
            negation_entailed,
        }
    }
}
