//! slotkeep CLI - slotkeep command

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli_lib::args::Cli;
use cli_lib::cmd;
use cli_lib::sink::FsDeletionSink;
use cli_lib::system_config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing on stderr so stdout stays scriptable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.apply(system_config::load(cli.config.as_deref())?);
    config.validate()?;

    if config.is_simulation() {
        cmd::simulate::run(&config, Local::now().date_naive())
    } else {
        cmd::prune::run(&cli.paths, &config, cli.force, &mut FsDeletionSink)
    }
}
