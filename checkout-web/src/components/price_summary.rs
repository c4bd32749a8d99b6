//! Subtotal, shipping and total rows.

use leptos::prelude::*;
use lib_core::checkout::OrderTotals;
use shared::utils::format_money;

#[component]
pub fn PriceSummary(#[prop(into)] totals: Signal<OrderTotals>, currency: &'static str) -> impl IntoView {
    view! {
        <div class="price-detail">
            <div class="price-row">
                <span class="label">"Subtotal"</span>
                <span class="value">{move || format_money(currency, totals.get().subtotal)}</span>
            </div>
            <div class="price-row">
                <span class="label">"Shipping"</span>
                <span class="value">{move || format_money(currency, totals.get().shipping_cost)}</span>
            </div>
            <h2 class="total-row">
                <span class="label-total">"Total"</span>
                <span class="value-total">{move || format_money(currency, totals.get().total())}</span>
            </h2>
        </div>
    }
}
