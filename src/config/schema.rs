//! Configuration schema types
//!
//! This module defines the configuration structure for Cryptolert. The
//! central piece is [`ServiceConfig`], the platform project bundle: the seven
//! identity and credential values that the cloud platform hands out for a
//! project. The rest of the application shares this bundle; this crate
//! consumes the parts that drive the document database handle.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main Cryptolert configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptolertConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Platform project identity and credentials
    pub service: ServiceConfig,

    /// Document database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CryptolertConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.service.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Platform project configuration
///
/// The identity/credential bundle issued for a cloud platform project. It
/// always carries exactly these seven values; services that need only a
/// subset (like the document database) still receive the whole bundle, the
/// same way the platform's own SDKs do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Platform API key
    /// Stored securely in memory and automatically zeroized on drop
    pub api_key: SecretString,

    /// Hostname of the platform's auth service for this project
    pub auth_domain: String,

    /// Project identifier within the platform
    pub project_id: String,

    /// Object storage bucket assigned to the project
    pub storage_bucket: String,

    /// Push notification sender id
    pub messaging_sender_id: String,

    /// Application registration id within the project
    pub app_id: String,

    /// Analytics measurement id
    pub measurement_id: String,
}

impl ServiceConfig {
    /// Derive the document database endpoint for this project
    ///
    /// The platform does not hand out per-service URLs; everything is
    /// addressed by project id.
    pub fn documents_endpoint(&self) -> String {
        format!("https://{}.documents.azure.com:443/", self.project_id)
    }

    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.api_key.expose_secret().is_empty() {
            return Err("service.api_key cannot be empty".to_string());
        }

        if self.project_id.is_empty() {
            return Err("service.project_id cannot be empty".to_string());
        }

        if !self
            .project_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            || self.project_id.starts_with('-')
            || self.project_id.ends_with('-')
        {
            return Err(format!(
                "service.project_id '{}' must contain only lowercase letters, digits, and \
                 interior dashes",
                self.project_id
            ));
        }

        if self.auth_domain.is_empty() {
            return Err("service.auth_domain cannot be empty".to_string());
        }

        if self.auth_domain.contains("://") {
            return Err("service.auth_domain must be a bare hostname, not a URL".to_string());
        }

        if self.storage_bucket.is_empty() {
            return Err("service.storage_bucket cannot be empty".to_string());
        }

        if self.messaging_sender_id.is_empty()
            || !self.messaging_sender_id.chars().all(|c| c.is_ascii_digit())
        {
            return Err(format!(
                "service.messaging_sender_id '{}' must be numeric",
                self.messaging_sender_id
            ));
        }

        if self.app_id.is_empty() {
            return Err("service.app_id cannot be empty".to_string());
        }

        if !self.measurement_id.starts_with("G-") {
            return Err(format!(
                "service.measurement_id '{}' must start with 'G-'",
                self.measurement_id
            ));
        }

        Ok(())
    }
}

/// Document database configuration
///
/// The platform bundle identifies the project; this section names the
/// database within it and bounds request time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database name
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.database_name.is_empty() {
            return Err("database.database_name cannot be empty".to_string());
        }

        if self.request_timeout_seconds == 0 {
            return Err("database.request_timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_name: default_database_name(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_database_name() -> String {
    "cryptolert".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use test_case::test_case;

    fn sample_service() -> ServiceConfig {
        ServiceConfig {
            api_key: secret_string("test-api-key".to_string()),
            auth_domain: "cryptolert-946b0.b2clogin.com".to_string(),
            project_id: "cryptolert-946b0".to_string(),
            storage_bucket: "cryptolert946b0".to_string(),
            messaging_sender_id: "85483920473".to_string(),
            app_id: "cryptolert-web-946b0".to_string(),
            measurement_id: "G-ZYWJ66X6HZ".to_string(),
        }
    }

    fn sample_config() -> CryptolertConfig {
        CryptolertConfig {
            application: ApplicationConfig::default(),
            environment: Environment::default(),
            service: sample_service(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_documents_endpoint_derived_from_project_id() {
        let service = sample_service();
        assert_eq!(
            service.documents_endpoint(),
            "https://cryptolert-946b0.documents.azure.com:443/"
        );
    }

    #[test]
    fn test_empty_project_id_rejected() {
        let mut config = sample_config();
        config.service.project_id = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.contains("project_id"));
    }

    #[test_case("Crypto_Lert" ; "uppercase and underscore")]
    #[test_case("-cryptolert" ; "leading dash")]
    #[test_case("cryptolert-" ; "trailing dash")]
    #[test_case("crypto.lert" ; "dot")]
    fn test_project_id_charset_rejected(project_id: &str) {
        let mut config = sample_config();
        config.service.project_id = project_id.to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = sample_config();
        config.service.api_key = secret_string(String::new());
        let err = config.validate().unwrap_err();
        assert!(err.contains("api_key"));
    }

    #[test]
    fn test_auth_domain_must_be_hostname() {
        let mut config = sample_config();
        config.service.auth_domain = "https://cryptolert-946b0.b2clogin.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("auth_domain"));
    }

    #[test]
    fn test_messaging_sender_id_must_be_numeric() {
        let mut config = sample_config();
        config.service.messaging_sender_id = "not-a-number".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("messaging_sender_id"));
    }

    #[test]
    fn test_measurement_id_prefix_enforced() {
        let mut config = sample_config();
        config.service.measurement_id = "ZYWJ66X6HZ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("measurement_id"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = sample_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_database_name_rejected() {
        let mut config = sample_config();
        config.database.database_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_defaults() {
        let database = DatabaseConfig::default();
        assert_eq!(database.database_name, "cryptolert");
        assert_eq!(database.request_timeout_seconds, 30);
    }
}
