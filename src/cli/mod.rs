use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Bitcoin digital artifact parser
#[derive(Parser)]
#[command(name = "digital-artifacts-parser")]
#[command(about = "Extract inscriptions and Runes artifacts from Bitcoin transactions")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./artifacts.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode an esplora-style transaction JSON file ("-" for stdin)
    Decode(commands::decode::DecodeCommand),
    /// Decode a consensus-encoded transaction given as hex
    DecodeRaw(commands::decode::DecodeRawCommand),
    /// Print the decompiled instructions of a script
    Script(commands::script::ScriptCommand),
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::get_defaults(),
    };

    // Uses RUST_LOG environment variable (defaults to the configured filter)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .try_init();

    match cli.command {
        Commands::Decode(command) => command.run(&config),
        Commands::DecodeRaw(command) => command.run(&config),
        Commands::Script(command) => command.run(),
    }
}
