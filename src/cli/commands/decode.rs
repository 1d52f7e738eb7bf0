use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::parser::parse_transaction;
use crate::transaction::Transaction;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Decode an esplora-style transaction JSON document
#[derive(Args)]
pub struct DecodeCommand {
    /// Transaction JSON file, or "-" to read stdin
    pub input: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Decode a consensus-encoded transaction
#[derive(Args)]
pub struct DecodeRawCommand {
    /// Raw transaction hex
    pub hex: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl DecodeCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        println!("{}", self.execute(config)?);
        Ok(())
    }

    /// Decode the input and render the report as JSON
    ///
    /// Unlike the library entry points, unreadable or malformed input is an
    /// error here so the user sees why nothing was found.
    pub fn execute(&self, config: &AppConfig) -> AppResult<String> {
        let json = if self.input.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            info!("Reading transaction from {}", self.input.display());
            std::fs::read_to_string(&self.input)?
        };

        let transaction = Transaction::from_json(&json)?;
        render(&transaction, config, self.pretty)
    }
}

impl DecodeRawCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        println!("{}", self.execute(config)?);
        Ok(())
    }

    pub fn execute(&self, config: &AppConfig) -> AppResult<String> {
        let transaction = Transaction::from_raw_hex(&self.hex)?;
        render(&transaction, config, self.pretty)
    }
}

fn render(transaction: &Transaction, config: &AppConfig, pretty: bool) -> AppResult<String> {
    let report = parse_transaction(transaction).report(&config.content_limits());

    let output = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    Ok(output)
}
