//! Application context
//!
//! The context replaces the implicit module-level singleton a naive bootstrap
//! would use. It is constructed exactly once, during an explicit startup
//! phase, and handed by reference to whatever needs the database. Consumers
//! never initialize anything themselves, so there is no hidden
//! initialization-order coupling.
//!
//! # Example
//!
//! ```rust,no_run
//! use cryptolert::config::load_config;
//! use cryptolert::core::AppContext;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cryptolert.toml")?;
//! let context = AppContext::startup(config)?;
//!
//! let db = context.documents();
//! println!("Bound to {}", db.database_name());
//! # Ok(())
//! # }
//! ```

use crate::adapters::database::factory::create_document_database;
use crate::adapters::database::traits::DocumentDatabase;
use crate::config::CryptolertConfig;
use crate::domain::{CryptolertError, Result};
use std::sync::Arc;

/// Application-wide context owning the shared document database handle
///
/// Every call to [`documents`](AppContext::documents) returns the same
/// underlying handle instance; the context never re-initializes.
pub struct AppContext {
    /// Validated configuration the context was built from
    config: CryptolertConfig,

    /// The one document database handle for this process
    documents: Arc<dyn DocumentDatabase>,
}

impl AppContext {
    /// Run the startup phase
    ///
    /// Validates the configuration and runs the database factory once. Any
    /// failure from validation or from the SDK propagates to the caller;
    /// there is no retry, fallback, or partial context.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the database
    /// client cannot be created.
    pub fn startup(config: CryptolertConfig) -> Result<Self> {
        Self::startup_with(config, create_document_database)
    }

    /// Run the startup phase with an injected database factory
    ///
    /// This is the seam tests use to substitute a stub backend.
    pub fn startup_with<F>(config: CryptolertConfig, factory: F) -> Result<Self>
    where
        F: FnOnce(&CryptolertConfig) -> Result<Arc<dyn DocumentDatabase>>,
    {
        config.validate().map_err(CryptolertError::Configuration)?;

        let documents = factory(&config)?;

        tracing::info!(
            project_id = %config.service.project_id,
            database = %documents.database_name(),
            "Application context ready"
        );

        Ok(Self { config, documents })
    }

    /// The shared document database handle
    ///
    /// Cloning the `Arc` is cheap; the handle itself is never re-created.
    pub fn documents(&self) -> Arc<dyn DocumentDatabase> {
        Arc::clone(&self.documents)
    }

    /// The configuration the context was built from
    pub fn config(&self) -> &CryptolertConfig {
        &self.config
    }
}
