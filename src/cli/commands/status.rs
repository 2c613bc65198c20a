//! Status command implementation
//!
//! Runs the startup phase and verifies connectivity to the document
//! database.

use crate::config::load_config;
use crate::core::AppContext;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking document database status");

        println!("📊 Document Database Status");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Run the startup phase
        let context = match AppContext::startup(config) {
            Ok(ctx) => ctx,
            Err(e) => {
                println!("❌ Failed to initialize database handle");
                println!("   Error: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let db = context.documents();
        println!("  Endpoint: {}", db.endpoint());
        println!("  Database: {}", db.database_name());
        println!();

        match db.test_connection().await {
            Ok(()) => {
                println!("✅ Connection test succeeded");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Connection test failed");
                println!("   Error: {e}");
                Ok(4) // Connection error exit code
            }
        }
    }
}
