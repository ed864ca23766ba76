//! # entail
//!
//! Propositional entailment by truth-table enumeration.
//!
//! Formulas are written as fully parenthesized prefix expressions over
//! symbols made of `[A-Za-z0-9_]`:
//!
//! ```text
//! (and P (if P Q))
//! (iff W_1_2 (not (or P_1_2 B_2_2)))
//! ```
//!
//! The connectives are `not` (one argument), `if` and `iff` (two
//! arguments), and `and`, `or` and `xor` (one or more arguments). Connective
//! names are case-insensitive. By default `xor` is true when exactly one of
//! its arguments is true; [`XorSemantics::Parity`] selects the odd-count
//! reading instead.
//!
//! ## How it works
//!
//! ```text
//! text → parse → validate → collect symbols → enumerate models → verdict
//! ```
//!
//! A knowledge base entails a statement when no assignment of the symbols
//! satisfies the knowledge base while falsifying the statement. Facts stated
//! directly by a conjunctive knowledge base (`P`, `(not Q)`) are fixed up
//! front; every other symbol is enumerated.
//!
//! ## Example
//!
//! ```
//! use entail::{classify, parse, validate, Verdict};
//!
//! let kb = parse("(and P (if P Q))").unwrap();
//! let statement = parse("Q").unwrap();
//! assert!(validate::is_valid(&kb) && validate::is_valid(&statement));
//!
//! let verdict = classify(&kb, statement).unwrap();
//! assert_eq!(verdict, Verdict::DefinitelyTrue);
//! assert_eq!(verdict.to_string(), "definitely true.");
//! ```

pub mod ast;
pub mod config;
pub mod connective;
pub mod engine;
pub mod error;
pub mod eval;
pub mod knowledge;
pub mod model;
pub mod parser;
pub mod symbols;
pub mod validate;
pub mod verdict;

pub use ast::{Expression, render};
pub use config::{EntailmentConfig, Enumeration};
pub use connective::Connective;
pub use engine::{Entailment, classify, entails};
pub use error::{Error, EvaluationError, ParseError, ValidationError};
pub use eval::{Evaluator, XorSemantics, truth_value};
pub use knowledge::KnowledgeBase;
pub use model::Model;
pub use parser::{parse, parse_all};
pub use symbols::collect_symbols;
pub use verdict::{Classification, Verdict};
