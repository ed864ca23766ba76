use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use entail::knowledge::load_statement_file;
use entail::validate::violations;
use entail::{Classification, Entailment, Expression, KnowledgeBase};

use crate::cli::{EntailCli, Format};

/// Load the inputs named on the command line, classify the statement and
/// write the verdict to the output file.
pub fn run(cli: &EntailCli) -> Result<Classification> {
    let mut knowledge = KnowledgeBase::new();
    knowledge.extend_from_file(&cli.rules)?;
    knowledge.extend_from_file(&cli.knowledge)?;
    let knowledge_base = knowledge.to_expression();
    ensure_valid("knowledge base", &knowledge_base)?;

    let statement = load_statement_file(&cli.statement)?;
    ensure_valid("statement", &statement)?;

    let engine = Entailment::new(cli.config());
    let classification = engine.assess(&knowledge_base, statement)?;
    tracing::info!(verdict = %classification.verdict, "classified statement");

    write_report(&cli.output, cli.format, &classification)?;
    Ok(classification)
}

/// Fail with the first violation after logging all of them.
fn ensure_valid(what: &str, expression: &Expression) -> Result<()> {
    let found = violations(expression);
    let Some(first) = found.first() else {
        return Ok(());
    };
    for violation in &found {
        tracing::error!(%violation, "invalid {what}");
    }
    bail!("invalid {what} ({} violations): {first}", found.len())
}

fn write_report(path: &Path, format: Format, classification: &Classification) -> Result<()> {
    let contents = match format {
        Format::Text => classification.verdict.to_string(),
        Format::Json => serde_json::to_string_pretty(classification)?,
    };
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
