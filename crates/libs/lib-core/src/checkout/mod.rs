//! # Checkout Domain
//!
//! Everything the two checkout pages share, independent of the browser:
//!
//! - [`state`]: [`CheckoutState`], the single unit of page-to-page transfer,
//!   and its query codec (`state=<base64url JSON>`, legacy flat fields on
//!   the way in)
//! - [`query`]: [`QueryParams`], percent-decoded query string access
//! - [`totals`]: [`OrderTotals`] derived from the cart and shipping cost
//! - [`sender`]: [`SenderField`], the field-by-field form model
//! - [`store`]: [`KeyValueStore`] and the persisted totals contract
//!
//! ## Flow
//!
//! ```text
//! shipping page ──/payment?state=..──▶ payment page
//!       ▲                                   │
//!       └──────/shipping?state=..#section───┘ (edit links)
//! ```
//!
//! Both directions use [`CheckoutState::link`] to build URLs and
//! [`CheckoutState::from_search`] to read them back.

pub mod query;
pub mod sender;
pub mod state;
pub mod store;
pub mod totals;

pub use query::QueryParams;
pub use sender::{check_required, missing_required, SenderField};
pub use state::{CheckoutState, STATE_PARAM};
pub use store::{
    KeyValueStore, MemoryStore, PersistedTotals, TotalsStore, SHIPPING_COST_KEY, SUBTOTAL_KEY,
};
pub use totals::OrderTotals;

#[cfg(test)]
mod tests;
