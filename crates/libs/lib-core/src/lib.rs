//! # Core Library
//!
//! Checkout domain, configuration, and error handling.
//!
//! - [`checkout`]: the checkout state and its single query codec, order
//!   totals, the sender form model, and the persisted totals contract
//! - [`config`]: currency, shipping methods, persistence switch
//! - [`error`]: [`AppError`] and the [`Result`] alias

pub mod checkout;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use checkout::{CheckoutState, OrderTotals, QueryParams, SenderField, TotalsStore};
pub use config::Config;
pub use error::{AppError, Result};
