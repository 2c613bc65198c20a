//! Core bootstrap logic
//!
//! The application context is the heart of the crate: it runs the startup
//! phase once and owns the shared document database handle.

pub mod context;

pub use context::AppContext;
