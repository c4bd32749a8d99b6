//! Payment Page - order review before paying
//!
//! Reads the checkout state from the query once the router has it, derives
//! the totals, mirrors them into local storage, and links back to the
//! shipping page for edits.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use lib_core::config::core_config;

use crate::components::{CartLines, EditLink, PriceSummary};
use crate::services::storage::persist_totals;
use crate::state::checkout::{use_checkout_context, PaymentPhase};
use crate::utils::constants::{routes, sections};
use crate::utils::url::{current_search, shipping_href};

#[component]
pub fn PaymentPage() -> impl IntoView {
    let checkout = use_checkout_context();
    let query = use_query_map();
    let config = core_config();

    // Context outlives the page; a return visit must not persist stale totals
    // before the new query has been read
    checkout.phase.set(PaymentPhase::AwaitingQuery);

    // Phase 1: the query is only reliable after mount
    Effect::new(move || {
        query.track();
        checkout.populate(&current_search());
        log::debug!("Payment page populated");
    });

    // Phase 2: totals follow cart and shipping cost
    let totals = Memo::new(move |_| checkout.totals());
    Effect::new(move || {
        let totals = totals.get();
        if !checkout.is_populated() || !config.persist_totals {
            return;
        }
        persist_totals(&totals);
    });

    let cart = Signal::derive(move || checkout.cart());
    let sender = move || checkout.state.with(|state| state.sender.clone());

    // Coupons are not supported; keep the page (and its query) in place
    let on_coupon = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("Coupon submitted, ignoring");
    };

    view! {
        <div class="container">
            <div class="flex-container">
                <div class="payment-box">
                    <div class="info-row">
                        <span class="info-label">
                            "Contact: "
                            <span class="email">{move || sender().contact}</span>
                        </span>
                        <EditLink section=sections::CONTACT/>
                    </div>

                    <hr class="separator"/>

                    <div class="info-row">
                        <div>
                            <span class="info-label">"Ship to:"</span>
                            <span class="name-and-surname">{move || sender().full_name()}</span>
                            <br/>
                            <div class="input-add">
                                {move || sender().address}
                                <br/>
                                {move || sender().city}
                                <br/>
                                {move || {
                                    let sender = sender();
                                    format!("{}, {}", sender.province, sender.postal_code)
                                }}
                                <br/>
                            </div>
                        </div>
                        <EditLink section=sections::ADDRESS/>
                    </div>

                    <hr class="separator"/>

                    <div class="info-row">
                        <span class="info-label">
                            "Method: "
                            <span class="input-shipping">{move || sender().selected_method}</span>
                        </span>
                        <EditLink section=sections::METHOD/>
                    </div>
                </div>

                <div class="coupon-container">
                    <form class="coupon-box" on:submit=on_coupon>
                        <input type="text" placeholder=" Coupon Code" class="text-coupon" required=true/>
                        <button type="submit" class="coupon-button">"Add Code"</button>
                    </form>
                </div>

                <CartLines items=cart currency=config.currency.as_str()/>

                <hr class="separator"/>

                <PriceSummary totals=totals currency=config.currency.as_str()/>

                <div class="back-and-pay-buttons">
                    <a href=move || checkout.state.with(|state| shipping_href(state, None)) class="back-button">
                        <h3 class="back">"Back to detail"</h3>
                    </a>
                    <a href=routes::CONFIRM>
                        <button class="pay-button">"Pay Now"</button>
                    </a>
                </div>
            </div>
        </div>
    }
}
