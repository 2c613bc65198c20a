//! Document database factory
//!
//! This module provides the factory function that turns a validated
//! configuration into the shared document database handle.

use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::database::traits::DocumentDatabase;
use crate::config::CryptolertConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the document database handle from the configuration
///
/// This is the only place the concrete SDK client is constructed. The handle
/// comes back as an Arc-wrapped trait object so every consumer shares the
/// same instance.
///
/// # Errors
///
/// Returns an error if the SDK client cannot be created. The error is
/// propagated unmodified in meaning; nothing is retried or swallowed here.
pub fn create_document_database(
    config: &CryptolertConfig,
) -> Result<Arc<dyn DocumentDatabase>> {
    tracing::info!(
        project_id = %config.service.project_id,
        database = %config.database.database_name,
        "Creating document database client"
    );

    let client = CosmosDbClient::connect(&config.service, &config.database)?;

    Ok(Arc::new(client) as Arc<dyn DocumentDatabase>)
}
