//! URL utility functions for reading the query and building page links

use lib_core::checkout::CheckoutState;
use web_sys::window;

use crate::utils::constants::routes;

/// Raw `location.search` of the current page (with its leading `?`), or an
/// empty string outside a browser.
///
/// Read directly from `window.location` so it works whether or not the
/// router's query map has caught up yet.
pub fn current_search() -> String {
    window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Shipping page link carrying `state`, landing on `section` when given.
pub fn shipping_href(state: &CheckoutState, section: Option<&str>) -> String {
    state.link(routes::SHIPPING, section)
}

/// Payment page link carrying `state`.
pub fn payment_href(state: &CheckoutState) -> String {
    state.link(routes::PAYMENT, None)
}
