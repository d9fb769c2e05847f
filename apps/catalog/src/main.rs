use clap::Parser;
use elemental_catalog::cli::Cli;
use elemental_catalog::commands;
use elemental_catalog::load_config;
use elemental_catalog::logging::init_logging;
use std::io::{self, Write};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.output = output;
    }
    init_logging(&config.log)?;
    info!(output = ?config.output, sorted = config.sorted, "Catalog ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &config, &mut out)?;
    out.flush()?;

    Ok(())
}
