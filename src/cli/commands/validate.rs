//! Validate config command implementation
//!
//! Loads and validates the configuration file, then prints a summary.
//! The API key is never printed.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load means a
        // valid configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Environment: {:?}", config.environment);
        println!("  Project ID: {}", config.service.project_id);
        println!("  Auth Domain: {}", config.service.auth_domain);
        println!("  Storage Bucket: {}", config.service.storage_bucket);
        println!(
            "  Messaging Sender ID: {}",
            config.service.messaging_sender_id
        );
        println!("  App ID: {}", config.service.app_id);
        println!("  Measurement ID: {}", config.service.measurement_id);
        println!("  API Key: ***");
        println!(
            "  Documents Endpoint: {}",
            config.service.documents_endpoint()
        );
        println!("  Database: {}", config.database.database_name);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        let _ = format!("{args:?}");
    }
}
