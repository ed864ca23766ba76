use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use entail::{EntailmentConfig, Enumeration, XorSemantics};

/// How the verdict is written to the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The verdict sentence alone, e.g. `definitely true.`
    #[default]
    Text,
    /// The verdict and both entailment results as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "entail")]
#[command(bin_name = "entail")]
#[command(author, version)]
#[command(about = "Decide whether a knowledge base entails a statement", long_about = None)]
pub struct EntailCli {
    /// Rules shared by every query, one expression per line
    pub rules: PathBuf,

    /// Additional knowledge for this query, one expression per line
    pub knowledge: PathBuf,

    /// File holding the statement to classify
    pub statement: PathBuf,

    /// Where to write the verdict
    #[arg(short, long, default_value = "result.txt", env = "ENTAIL_OUTPUT")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Meaning of an n-ary xor (exactly-one, parity)
    #[arg(long, default_value_t = XorSemantics::ExactlyOne, env = "ENTAIL_XOR")]
    pub xor: XorSemantics,

    /// Model enumeration strategy (recursive, iterative)
    #[arg(long, default_value_t = Enumeration::Recursive, env = "ENTAIL_ENUMERATION")]
    pub enumeration: Enumeration,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl EntailCli {
    pub fn config(&self) -> EntailmentConfig {
        EntailmentConfig::default()
            .with_xor(self.xor)
            .with_enumeration(self.enumeration)
    }
}
