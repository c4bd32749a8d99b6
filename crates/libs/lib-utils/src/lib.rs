//! # Utilities Library
//!
//! Small helpers shared by the checkout crates: URL-safe base64 for the state
//! parameter, environment variable lookup for configuration, and presence
//! checks for form input.

pub mod b64;
pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64u_encode, b64u_decode, b64u_decode_to_string};
pub use envs::{get_env, get_env_or_built, parse_env};
pub use validation::{missing_fields, validate_not_empty};
