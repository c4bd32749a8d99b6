//! Checkout state management

use leptos::prelude::*;
use lib_core::checkout::{CheckoutState, OrderTotals, SenderField};
use shared::dto::checkout::{CartItem, ShippingMethod};

/// Lifecycle of the payment page. One way: the query is read once it is
/// available, after that only the totals react.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentPhase {
    AwaitingQuery,
    Populated,
}

/// Global checkout context
#[derive(Clone, Copy)]
pub struct CheckoutContext {
    pub state: RwSignal<CheckoutState>,
    pub phase: RwSignal<PaymentPhase>,
}

impl CheckoutContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CheckoutState::default()),
            phase: RwSignal::new(PaymentPhase::AwaitingQuery),
        }
    }

    /// Replace the whole state with what the query carries.
    pub fn load_from_search(&self, search: &str) {
        let state = CheckoutState::from_search(search);
        log::debug!(
            "Loaded checkout state: {} cart lines, method '{}'",
            state.cart.len(),
            state.sender.selected_method
        );
        self.state.set(state);
    }

    /// Payment page entry: read the query, then mark the page populated.
    pub fn populate(&self, search: &str) {
        self.load_from_search(search);
        self.phase.set(PaymentPhase::Populated);
    }

    pub fn is_populated(&self) -> bool {
        self.phase.get() == PaymentPhase::Populated
    }

    pub fn sender_value(&self, field: SenderField) -> String {
        self.state.with(|state| field.read(&state.sender).to_string())
    }

    /// Merge-by-key update of a single sender field.
    pub fn set_field(&self, field: SenderField, value: String) {
        self.state.update(|state| field.write(&mut state.sender, value));
    }

    pub fn selected_method(&self) -> String {
        self.state.with(|state| state.sender.selected_method.clone())
    }

    pub fn select_shipping(&self, method: &ShippingMethod) {
        self.state.update(|state| state.select_shipping(method));
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.state.with(|state| state.cart.clone())
    }

    pub fn totals(&self) -> OrderTotals {
        self.state.with(CheckoutState::totals)
    }
}

impl Default for CheckoutContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_checkout_context() -> CheckoutContext {
    let context = CheckoutContext::new();
    provide_context(context);
    context
}

pub fn use_checkout_context() -> CheckoutContext {
    expect_context::<CheckoutContext>()
}
