//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CryptolertConfig;
use crate::config::secret_string;
use crate::domain::errors::CryptolertError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CryptolertConfig
/// 4. Applies environment variable overrides (CRYPTOLERT_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use cryptolert::config::loader::load_config;
///
/// let config = load_config("cryptolert.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CryptolertConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CryptolertError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CryptolertError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: CryptolertConfig = toml::from_str(&contents)
        .map_err(|e| CryptolertError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        CryptolertError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CryptolertError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the CRYPTOLERT_* prefix
///
/// Environment variables follow the pattern: CRYPTOLERT_<SECTION>_<KEY>
/// For example: CRYPTOLERT_SERVICE_PROJECT_ID, CRYPTOLERT_DATABASE_NAME
fn apply_env_overrides(config: &mut CryptolertConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("CRYPTOLERT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Service bundle overrides
    if let Ok(val) = std::env::var("CRYPTOLERT_SERVICE_API_KEY") {
        config.service.api_key = secret_string(val);
    }
    if let Ok(val) = std::env::var("CRYPTOLERT_SERVICE_AUTH_DOMAIN") {
        config.service.auth_domain = val;
    }
    if let Ok(val) = std::env::var("CRYPTOLERT_SERVICE_PROJECT_ID") {
        config.service.project_id = val;
    }
    if let Ok(val) = std::env::var("CRYPTOLERT_SERVICE_STORAGE_BUCKET") {
        config.service.storage_bucket = val;
    }
    if let Ok(val) = std::env::var("CRYPTOLERT_SERVICE_MESSAGING_SENDER_ID") {
        config.service.messaging_sender_id = val;
    }
    if let Ok(val) = std::env::var("CRYPTOLERT_SERVICE_APP_ID") {
        config.service.app_id = val;
    }
    if let Ok(val) = std::env::var("CRYPTOLERT_SERVICE_MEASUREMENT_ID") {
        config.service.measurement_id = val;
    }

    // Database overrides
    if let Ok(val) = std::env::var("CRYPTOLERT_DATABASE_NAME") {
        config.database.database_name = val;
    }
    if let Ok(val) = std::env::var("CRYPTOLERT_DATABASE_REQUEST_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.database.request_timeout_seconds = timeout;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CRYPTOLERT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CRYPTOLERT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
