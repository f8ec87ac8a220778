use anyhow::Result;
use clap::Parser;

mod citation;
mod cli;
mod config;
mod generator;
mod llm;
mod logging;
mod quality;
mod service;
mod types;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.to_config()?;
    let _log_guard = logging::init(&config.logging, config.logs_path.as_deref(), config.verbose)?;

    let command = args.command.clone().unwrap_or(cli::Command::Repl);
    cli::commands::dispatch(command, &config).await
}
