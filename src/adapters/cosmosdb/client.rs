//! Cosmos DB client implementation
//!
//! This module owns the two-step handle construction: the platform bundle is
//! handed to the SDK's client factory (the application handle), and the
//! database client handle is derived from it. Construction performs no I/O;
//! the SDK connects lazily on first request.

use crate::adapters::database::traits::DocumentDatabase;
use crate::config::{DatabaseConfig, ServiceConfig};
use crate::domain::{CryptolertError, DocumentDbError, Result};
use async_trait::async_trait;
use azure_core::credentials::Secret;
use azure_data_cosmos::clients::DatabaseClient;
use azure_data_cosmos::{CosmosClient, CosmosClientOptions};

/// Document database client for Cryptolert
///
/// Holds both handles the SDK hands out: the application handle for the
/// platform project, and the database client handle derived from it.
pub struct CosmosDbClient {
    /// Application handle for the platform project
    app: CosmosClient,

    /// Database client handle
    database: DatabaseClient,

    /// Database name the handle is bound to
    database_name: String,

    /// Endpoint derived from the project id
    endpoint: String,
}

impl CosmosDbClient {
    /// Create a new document database client from the platform bundle
    ///
    /// This runs the two factory calls in sequence: bundle -> application
    /// handle, application handle -> database client handle. Errors from the
    /// SDK propagate to the caller; there is no retry or fallback here.
    ///
    /// # Arguments
    ///
    /// * `service` - Platform project identity and credentials
    /// * `database` - Database selection within the project
    ///
    /// # Errors
    ///
    /// Returns an error if the SDK rejects the derived endpoint or the key.
    pub fn connect(service: &ServiceConfig, database: &DatabaseConfig) -> Result<Self> {
        use secrecy::ExposeSecret;

        let endpoint = service.documents_endpoint();

        // Convert our SecretString to the SDK's Secret type
        let key_str: String = service.api_key.expose_secret().clone().into();
        let key = Secret::new(key_str);
        let options = Some(CosmosClientOptions::default());

        let app = CosmosClient::with_key(&endpoint, key, options).map_err(|e| {
            CryptolertError::DocumentDb(DocumentDbError::ConnectionFailed(format!(
                "Failed to create platform client: {e}"
            )))
        })?;

        let db_client = app.database_client(&database.database_name);

        tracing::debug!(
            endpoint = %endpoint,
            database = %database.database_name,
            "Document database handle created"
        );

        Ok(Self {
            app,
            database: db_client,
            database_name: database.database_name.clone(),
            endpoint,
        })
    }

    /// The underlying application handle
    ///
    /// Other platform services derive their own handles from this one.
    pub fn app(&self) -> &CosmosClient {
        &self.app
    }
}

#[async_trait]
impl DocumentDatabase for CosmosDbClient {
    /// Test the connection by reading the database metadata
    async fn test_connection(&self) -> Result<()> {
        self.database.read(None).await.map_err(|e| {
            CryptolertError::DocumentDb(DocumentDbError::ConnectionFailed(format!(
                "Connection test failed: {e}"
            )))
        })?;

        Ok(())
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
