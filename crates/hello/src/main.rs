//! hello - console reporter for the practice project

use anyhow::{Context, Result};
use clap::Parser;
use hello::cli::Cli;
use hello::config::ReportConfig;
use hello::logging;
use hello::report::Reporter;
use std::io::BufWriter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ReportConfig::from_cli(&cli).context("Invalid --locale")?;
    tracing::debug!(?config, "configuration resolved");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    Reporter::new(config)
        .run(&mut out)
        .context("Failed to print report")?;

    Ok(())
}
