pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "il-bank-validator")]
#[command(about = "Validate Israeli bank account numbers against the MASAV check-digit rules")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Check a single account
    Check {
        /// Bank code, e.g. 12
        bank: String,
        /// Branch code, e.g. 571
        branch: String,
        /// Account number including its check digit(s)
        account: String,
    },

    /// Validate every account in a CSV file
    Batch {
        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Override the input CSV path
        #[arg(short, long)]
        input: Option<String>,

        /// Override the report directory
        #[arg(short, long)]
        output: Option<String>,

        /// Override the report formats (json, csv)
        #[arg(long, value_delimiter = ',')]
        format: Vec<String>,
    },

    /// List supported bank codes
    Banks,
}
