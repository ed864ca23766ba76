//! # entail-cli
//!
//! Command-line front end for the `entail` crate. It reads a file of rules,
//! a file of additional knowledge and a file holding one statement, then
//! writes one of the following verdicts to the output file:
//!
//! - `definitely true.`
//! - `definitely false.`
//! - `possibly true, possibly false.`
//! - `both true and false.`
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin entail -- wumpus_rules.txt kb.txt statement.txt
//! ```
//!
//! Lines starting with `#` are comments. Set `RUST_LOG=debug` (or pass
//! `--verbose`) to log the enumeration.

pub mod cli;
pub mod run;

pub use cli::{EntailCli, Format};
pub use run::run;
