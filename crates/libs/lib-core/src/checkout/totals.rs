//! Order totals.

use shared::dto::checkout::CartItem;
use shared::utils::{format_amount, round_to_cents};

/// Subtotal and shipping cost for one cart.
///
/// The total is never stored; it is derived on read so it always matches
/// the two inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub shipping_cost: f64,
}

impl OrderTotals {
    /// Σ unit price × quantity, rounded to cents. Non-finite shipping costs
    /// count as zero.
    pub fn compute(cart: &[CartItem], shipping_cost: f64) -> Self {
        let subtotal = cart.iter().map(CartItem::line_total).sum::<f64>();
        Self {
            subtotal: round_to_cents(subtotal),
            shipping_cost: if shipping_cost.is_finite() { shipping_cost } else { 0.0 },
        }
    }

    pub fn total(&self) -> f64 {
        round_to_cents(self.subtotal + self.shipping_cost)
    }

    pub fn subtotal_text(&self) -> String {
        format_amount(self.subtotal)
    }

    pub fn shipping_text(&self) -> String {
        format_amount(self.shipping_cost)
    }

    pub fn total_text(&self) -> String {
        format_amount(self.total())
    }
}
