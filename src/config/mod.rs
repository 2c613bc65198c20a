//! Configuration management for Cryptolert.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation for the platform project bundle and the sections around it.
//!
//! # Overview
//!
//! Cryptolert uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`CRYPTOLERT_*` prefix)
//! - Default values for optional settings
//! - Validation before anything touches the platform SDK
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cryptolert::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cryptolert.toml")?;
//!
//! println!("Project: {}", config.service.project_id);
//! println!("Database: {}", config.database.database_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [service]
//! api_key = "${CRYPTOLERT_API_KEY}"
//! auth_domain = "cryptolert-946b0.b2clogin.com"
//! project_id = "cryptolert-946b0"
//! storage_bucket = "cryptolert946b0"
//! messaging_sender_id = "85483920473"
//! app_id = "cryptolert-web-946b0"
//! measurement_id = "G-ZYWJ66X6HZ"
//!
//! [database]
//! database_name = "cryptolert"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export CRYPTOLERT_API_KEY="secret-api-key"
//! ```
//!
//! Credentials belong in the environment or a secret store; the TOML file
//! should only ever carry the placeholder.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CryptolertConfig, DatabaseConfig, Environment, LoggingConfig, ServiceConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
