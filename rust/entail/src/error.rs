//! Error types for parsing, validating and evaluating expressions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort parsing of the current expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended while a compound expression was still awaiting its `)`.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput { position: usize },

    /// A character that cannot appear in a word was found while reading one.
    #[error("unexpected character {character:?} at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// A grammar violation found by the validator.
///
/// Validation errors are data: they are collected and reported, never used
/// to unwind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A literal whose symbol is empty or contains a character outside
    /// `[A-Za-z0-9_]`.
    #[error("invalid symbol {symbol:?}")]
    InvalidSymbol { symbol: String },

    /// A compound whose connective is not one of the six known connectives.
    #[error("unknown connective {connective:?}")]
    UnknownConnective { connective: String },

    /// A known connective applied to the wrong number of arguments.
    #[error("connective {connective:?} with {arguments} arguments (expected {expected})")]
    Arity {
        connective: String,
        arguments: usize,
        expected: String,
    },
}

/// Errors raised while computing a truth value.
///
/// The entailment engine binds every symbol before evaluating, so these only
/// surface when an unvalidated expression or an incomplete model reaches the
/// evaluator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("symbol {symbol:?} is not bound in the model")]
    UnboundSymbol { symbol: String },

    #[error("cannot evaluate unknown connective {connective:?}")]
    UnknownConnective { connective: String },

    #[error("cannot evaluate connective {connective:?} with {arguments} arguments")]
    Arity { connective: String, arguments: usize },
}

/// Errors raised while loading knowledge and statements from text sources.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin}:{line}: {source}")]
    Parse {
        origin: String,
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("{origin} does not contain a statement")]
    MissingStatement { origin: String },

    #[error("invalid expression: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Result type for loading operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
