//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Cryptolert using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Cryptolert platform bootstrap
#[derive(Parser, Debug)]
#[command(name = "cryptolert")]
#[command(version, about, long_about = None)]
#[command(author = "Cryptolert Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cryptolert.toml", env = "CRYPTOLERT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CRYPTOLERT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Verify connectivity to the document database
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
