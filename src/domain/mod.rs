//! Domain types for Cryptolert.
//!
//! The domain layer is intentionally small: the crate's job is to load a
//! platform configuration and hand out a ready document-database handle, so
//! the only domain concerns are the error taxonomy and the result alias.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`](crate::domain::Result):
//!
//! ```rust,no_run
//! use cryptolert::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = cryptolert::config::load_config("cryptolert.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CryptolertError, DocumentDbError};
pub use result::Result;
