use anyhow::Result;
use clap::Parser;
use entail_cli::{EntailCli, run};
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<()> {
    let cli = EntailCli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let classification = run(&cli)?;
    println!("{}", classification.verdict);
    Ok(())
}
