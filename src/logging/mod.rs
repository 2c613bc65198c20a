//! Logging and observability
//!
//! Structured logging with configurable levels, console output, and optional
//! rotating JSON file output.
//!
//! # Example
//!
//! ```no_run
//! use cryptolert::config::LoggingConfig;
//! use cryptolert::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
