// Cryptolert - Platform Bootstrap for the Cryptolert Backend
// Copyright (c) 2025 Cryptolert Contributors
// Licensed under the MIT License

//! # Cryptolert Platform Bootstrap
//!
//! Cryptolert stores its alert and watchlist documents in a managed cloud
//! document store. This crate is the piece that gets the application from
//! "a project id and an API key" to "a ready database handle":
//!
//! - **Loads** the platform project bundle from TOML, with `${VAR}`
//!   substitution and `CRYPTOLERT_*` overrides, so credentials live in the
//!   environment rather than in source or config files
//! - **Initializes** the SDK's application handle from the bundle and derives
//!   the database client handle from it
//! - **Owns** the handle in an [`AppContext`](crate::core::AppContext) built
//!   during an explicit startup phase, handed by reference to consumers
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface (validate-config, status, init)
//! - [`core`] - The application context and startup phase
//! - [`adapters`] - Document database trait, factory, and SDK client
//! - [`domain`] - Error taxonomy and result alias
//! - [`config`] - Configuration loading and the platform bundle
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cryptolert::config::load_config;
//! use cryptolert::core::AppContext;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("cryptolert.toml")?;
//!     let context = AppContext::startup(config)?;
//!
//!     // Consumers receive the shared handle; nobody re-initializes
//!     let db = context.documents();
//!     println!("Bound to {} at {}", db.database_name(), db.endpoint());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Initialization failures are propagated unmodified to the caller of the
//! startup phase; there is no retry or fallback in this crate. All fallible
//! operations return [`domain::Result`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
