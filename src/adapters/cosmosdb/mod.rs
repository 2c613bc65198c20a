//! Azure Cosmos DB integration
//!
//! This module provides the concrete document database client built on the
//! platform SDK.

pub mod client;

pub use client::CosmosDbClient;
