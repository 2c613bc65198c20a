//! Result type alias for Cryptolert
//!
//! This module provides a convenient Result type alias that uses
//! CryptolertError as the error type.

use super::errors::CryptolertError;

/// Result type alias for Cryptolert operations
///
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, CryptolertError>;
