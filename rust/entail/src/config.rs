//! Engine configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::eval::XorSemantics;

/// How the entailment engine walks the assignments of the free symbols.
///
/// Both strategies visit assignments in the same order and produce the same
/// result. The iterative walk keeps the call stack flat regardless of the
/// number of free symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Enumeration {
    #[default]
    Recursive,
    Iterative,
}

/// Configuration for an [`Entailment`](crate::engine::Entailment) engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntailmentConfig {
    pub xor: XorSemantics,
    pub enumeration: Enumeration,
}

impl EntailmentConfig {
    pub fn with_xor(mut self, xor: XorSemantics) -> Self {
        self.xor = xor;
        self
    }

    pub fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }
}

/// Returned when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} {value:?} (expected one of: {expected})")]
pub struct UnrecognizedOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for Enumeration {
    type Err = UnrecognizedOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "recursive" => Ok(Enumeration::Recursive),
            "iterative" => Ok(Enumeration::Iterative),
            _ => Err(UnrecognizedOption {
                kind: "enumeration",
                value: value.to_string(),
                expected: "recursive, iterative",
            }),
        }
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Enumeration::Recursive => write!(f, "recursive"),
            Enumeration::Iterative => write!(f, "iterative"),
        }
    }
}

impl FromStr for XorSemantics {
    type Err = UnrecognizedOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "exactly-one" => Ok(XorSemantics::ExactlyOne),
            "parity" => Ok(XorSemantics::Parity),
            _ => Err(UnrecognizedOption {
                kind: "xor semantics",
                value: value.to_string(),
                expected: "exactly-one, parity",
            }),
        }
    }
}

impl fmt::Display for XorSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XorSemantics::ExactlyOne => write!(f, "exactly-one"),
            XorSemantics::Parity => write!(f, "parity"),
        }
    }
}
