//! Init command implementation
//!
//! Generates a sample configuration file. The API key is written as an
//! environment placeholder, never as a literal.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cryptolert.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Cryptolert configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your project values", self.output);
                println!("  2. Export the API key (never store it in the file):");
                println!("     export CRYPTOLERT_API_KEY=\"your-api-key\"");
                println!("  3. Validate configuration: cryptolert validate-config");
                println!("  4. Verify connectivity: cryptolert status");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn sample_config() -> String {
        r#"# Cryptolert Configuration File
# Platform project bundle and document database settings

# development | staging | production
environment = "development"

[application]
log_level = "info"

[service]
# Platform project identity and credentials.
# The API key comes from the environment; keep it out of this file.
api_key = "${CRYPTOLERT_API_KEY}"
auth_domain = "cryptolert-946b0.b2clogin.com"
project_id = "cryptolert-946b0"
storage_bucket = "cryptolert946b0"
messaging_sender_id = "85483920473"
app_id = "cryptolert-web-946b0"
measurement_id = "G-ZYWJ66X6HZ"

[database]
database_name = "cryptolert"
request_timeout_seconds = 30

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
