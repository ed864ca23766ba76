//! The six propositional connectives and their arity rules.

use std::fmt;
use std::str::FromStr;

/// A recognized connective. Names are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    Not,
    And,
    Or,
    Xor,
    If,
    Iff,
}

/// How many children a connective accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn admits(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl Connective {
    pub const ALL: [Connective; 6] = [
        Connective::Not,
        Connective::And,
        Connective::Or,
        Connective::Xor,
        Connective::If,
        Connective::Iff,
    ];

    /// Look up a connective by name, ignoring ASCII case.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|connective| connective.name().eq_ignore_ascii_case(name))
    }

    /// The canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Connective::Not => "not",
            Connective::And => "and",
            Connective::Or => "or",
            Connective::Xor => "xor",
            Connective::If => "if",
            Connective::Iff => "iff",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Connective::Not => Arity::Exactly(1),
            Connective::If | Connective::Iff => Arity::Exactly(2),
            Connective::And | Connective::Or | Connective::Xor => Arity::AtLeast(1),
        }
    }
}

/// Returned when a name is not one of the six connectives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown connective {0:?}")]
pub struct UnknownConnective(pub String);

impl FromStr for Connective {
    type Err = UnknownConnective;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::lookup(name).ok_or_else(|| UnknownConnective(name.to_string()))
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Connective::lookup("AND"), Some(Connective::And));
        assert_eq!(Connective::lookup("Iff"), Some(Connective::Iff));
        assert_eq!(Connective::lookup("xOr"), Some(Connective::Xor));
        assert_eq!(Connective::lookup("nand"), None);
        assert_eq!(Connective::lookup(""), None);
    }

    #[test]
    fn test_from_str_reports_unknown_name() {
        let err = "implies".parse::<Connective>().unwrap_err();
        assert_eq!(err, UnknownConnective("implies".into()));
    }

    #[test]
    fn test_arity_rules() {
        assert!(Connective::Not.arity().admits(1));
        assert!(!Connective::Not.arity().admits(2));
        assert!(Connective::If.arity().admits(2));
        assert!(!Connective::Iff.arity().admits(1));
        assert!(!Connective::Iff.arity().admits(3));
        assert!(Connective::And.arity().admits(1));
        assert!(Connective::Xor.arity().admits(5));
        assert!(!Connective::Or.arity().admits(0));
    }
}
