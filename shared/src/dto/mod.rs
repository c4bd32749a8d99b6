//! # Data Transfer Objects (DTOs)
//!
//! Structures passed between the checkout pages through the URL.
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase (`#[serde(rename_all = "camelCase")]`)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Numbers**: accepted either as JSON numbers or numeric strings
//!
//! ## Example JSON
//!
//! ```text
//! [
//!   {
//!     "productImg": "/img/shirt.png",
//!     "productName": "Shirt",
//!     "productPrice": "100",
//!     "productQuantity": 2
//!   }
//! ]
//! ```

pub mod checkout;

pub use checkout::*;
