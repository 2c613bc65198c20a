//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with
//! --test-threads=1 to avoid interference between tests.

use cryptolert::config::{load_config, Environment};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("CRYPTOLERT_APPLICATION_LOG_LEVEL");
    std::env::remove_var("CRYPTOLERT_SERVICE_PROJECT_ID");
    std::env::remove_var("CRYPTOLERT_DATABASE_NAME");
    std::env::remove_var("TEST_CRYPTOLERT_API_KEY");
}

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
environment = "staging"

[application]
log_level = "debug"

[service]
api_key = "test-api-key"
auth_domain = "cryptolert-946b0.b2clogin.com"
project_id = "cryptolert-946b0"
storage_bucket = "cryptolert946b0"
messaging_sender_id = "85483920473"
app_id = "cryptolert-web-946b0"
measurement_id = "G-ZYWJ66X6HZ"

[database]
database_name = "alerts"
request_timeout_seconds = 60

[logging]
local_enabled = true
local_path = "/tmp/cryptolert"
local_rotation = "hourly"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify application config
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.environment, Environment::Staging);

    // Verify the platform bundle
    assert_eq!(config.service.api_key.expose_secret(), "test-api-key");
    assert_eq!(config.service.auth_domain, "cryptolert-946b0.b2clogin.com");
    assert_eq!(config.service.project_id, "cryptolert-946b0");
    assert_eq!(config.service.storage_bucket, "cryptolert946b0");
    assert_eq!(config.service.messaging_sender_id, "85483920473");
    assert_eq!(config.service.app_id, "cryptolert-web-946b0");
    assert_eq!(config.service.measurement_id, "G-ZYWJ66X6HZ");

    // Verify database config
    assert_eq!(config.database.database_name, "alerts");
    assert_eq!(config.database.request_timeout_seconds, 60);

    // Verify logging config
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/cryptolert");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[service]
api_key = "test-api-key"
auth_domain = "cryptolert-946b0.b2clogin.com"
project_id = "cryptolert-946b0"
storage_bucket = "cryptolert946b0"
messaging_sender_id = "85483920473"
app_id = "cryptolert-web-946b0"
measurement_id = "G-ZYWJ66X6HZ"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify defaults are applied
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.database.database_name, "cryptolert");
    assert_eq!(config.database.request_timeout_seconds, 30);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_service_bundle_has_exactly_seven_keys() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[service]
api_key = "test-api-key"
auth_domain = "cryptolert-946b0.b2clogin.com"
project_id = "cryptolert-946b0"
storage_bucket = "cryptolert946b0"
messaging_sender_id = "85483920473"
app_id = "cryptolert-web-946b0"
measurement_id = "G-ZYWJ66X6HZ"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // The bundle handed to the platform client factory carries exactly the
    // seven project keys, nothing more
    let bundle = toml::Value::try_from(&config.service).unwrap();
    let table = bundle.as_table().unwrap();

    let mut keys: Vec<_> = table.keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "api_key",
            "app_id",
            "auth_domain",
            "measurement_id",
            "messaging_sender_id",
            "project_id",
            "storage_bucket",
        ]
    );
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_CRYPTOLERT_API_KEY", "secret_key");

    let toml_content = r#"
[service]
api_key = "${TEST_CRYPTOLERT_API_KEY}"
auth_domain = "cryptolert-946b0.b2clogin.com"
project_id = "cryptolert-946b0"
storage_bucket = "cryptolert946b0"
messaging_sender_id = "85483920473"
app_id = "cryptolert-web-946b0"
measurement_id = "G-ZYWJ66X6HZ"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.service.api_key.expose_secret(), "secret_key");

    std::env::remove_var("TEST_CRYPTOLERT_API_KEY");
}

#[test]
fn test_missing_env_var_fails_load() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::remove_var("TEST_CRYPTOLERT_MISSING_KEY");

    let toml_content = r#"
[service]
api_key = "${TEST_CRYPTOLERT_MISSING_KEY}"
auth_domain = "cryptolert-946b0.b2clogin.com"
project_id = "cryptolert-946b0"
storage_bucket = "cryptolert946b0"
messaging_sender_id = "85483920473"
app_id = "cryptolert-web-946b0"
measurement_id = "G-ZYWJ66X6HZ"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("TEST_CRYPTOLERT_MISSING_KEY"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("CRYPTOLERT_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("CRYPTOLERT_SERVICE_PROJECT_ID", "cryptolert-staging");
    std::env::set_var("CRYPTOLERT_DATABASE_NAME", "alerts_staging");

    let toml_content = r#"
[application]
log_level = "info"

[service]
api_key = "test-api-key"
auth_domain = "cryptolert-946b0.b2clogin.com"
project_id = "cryptolert-946b0"
storage_bucket = "cryptolert946b0"
messaging_sender_id = "85483920473"
app_id = "cryptolert-web-946b0"
measurement_id = "G-ZYWJ66X6HZ"

[database]
database_name = "cryptolert"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify env var overrides took effect
    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.service.project_id, "cryptolert-staging");
    assert_eq!(config.database.database_name, "alerts_staging");

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    // Empty project id must fail validation during load
    let toml_content = r#"
[service]
api_key = "test-api-key"
auth_domain = "cryptolert-946b0.b2clogin.com"
project_id = ""
storage_bucket = "cryptolert946b0"
messaging_sender_id = "85483920473"
app_id = "cryptolert-web-946b0"
measurement_id = "G-ZYWJ66X6HZ"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("project_id"));
}

#[test]
fn test_missing_service_section_fails_parse() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "info"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());
    assert!(result.is_err());
}
