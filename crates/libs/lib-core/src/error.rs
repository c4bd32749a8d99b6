//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the checkout
//! crates. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Input Errors** - data arriving through the URL or the form
//!    - [`Decoding`](AppError::Decoding) → malformed state parameter or cart JSON
//!    - [`InvalidInput`](AppError::InvalidInput) → required form fields left blank
//!
//! 2. **Environment Errors** - the browser or the process around us
//!    - [`Config`](AppError::Config) → bad configuration values
//!    - [`Storage`](AppError::Storage) → local storage missing or refusing writes
//!
//! 3. **Internal Errors**
//!    - [`Encoding`](AppError::Encoding) → state could not be serialized
//!
//! None of these reach the shopper. Pages log them and fall back to empty
//! or zero values.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_quantity(text: &str) -> Result<u32> {
//!     text.parse()
//!         .map_err(|_| AppError::InvalidInput(format!("not a quantity: {text}")))
//! }
//!
//! assert!(parse_quantity("two").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Checkout-wide error type.
///
/// Each variant includes a descriptive `String` for context. The `#[error]`
/// attribute from `thiserror` provides the `Display` implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration value missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Checkout state could not be serialized.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// State parameter, cart JSON, or stored value could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Key-value store unavailable or rejected the operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Short variant name, used as a log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::Encoding(_) => "Encoding",
            AppError::Decoding(_) => "Decoding",
            AppError::Storage(_) => "Storage",
            AppError::InvalidInput(_) => "InvalidInput",
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

/// Convert base64 failures to `AppError`.
impl From<lib_utils::b64::Error> for AppError {
    fn from(err: lib_utils::b64::Error) -> Self {
        AppError::Decoding(format!("base64 error: {}", err))
    }
}

/// Convert environment lookup failures to `AppError`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
