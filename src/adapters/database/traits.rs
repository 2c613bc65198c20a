//! Document database abstraction
//!
//! Consumers of the bootstrap depend on this trait, not on the SDK client,
//! so the backend can be replaced with a stub in tests.

use crate::domain::Result;
use async_trait::async_trait;

/// Ready-to-use document database handle
///
/// The handle is cheap to share; the application context hands out one
/// instance behind an `Arc` for the life of the process.
#[async_trait]
pub trait DocumentDatabase: Send + Sync {
    /// Test the database connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection test fails.
    async fn test_connection(&self) -> Result<()>;

    /// Get the database name
    fn database_name(&self) -> &str;

    /// Get the endpoint URL
    fn endpoint(&self) -> &str;
}
