//! # Shared Checkout Types
//!
//! This library defines the data carried between the checkout pages: the cart,
//! the sender record, and the shipping methods on offer. Everything here is
//! plain data plus a few money helpers, so both the domain library and the
//! WASM frontend can depend on it.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects passed between pages
//!   - **[`dto::checkout`]**: cart items, sender record, shipping methods
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_amount`]**: Fixed two-decimal rendering
//!   - **[`utils::format_money`]**: Amount with a currency label
//!
//! ## Wire Format
//!
//! DTOs serialize to JSON with **camelCase** field names (`productName`,
//! `postalCode`, ...) because that is the shape the cart page produces
//! upstream. Decoding is lenient: numbers may arrive as strings and missing
//! fields fall back to empty values.
//!
//! ```rust
//! use shared::dto::checkout::CartItem;
//! use shared::utils::format_money;
//!
//! let item: CartItem = serde_json::from_str(
//!     r#"{"productName":"Shirt","productPrice":"100","productQuantity":2}"#,
//! ).unwrap();
//! assert_eq!(format_money("THB", item.line_total()), "THB 200.00");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
