//! Shipping Page - contact, address, and delivery method entry

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use lib_core::checkout::{check_required, SenderField};
use lib_core::config::core_config;
use shared::utils::format_money;

use crate::components::SenderInput;
use crate::state::checkout::use_checkout_context;
use crate::utils::constants::{routes, sections};
use crate::utils::url::{current_search, payment_href};

#[component]
pub fn ShippingPage() -> impl IntoView {
    let checkout = use_checkout_context();
    let query = use_query_map();
    let config = core_config();

    // Pre-fill from whatever the link carried (cart page or an edit link)
    Effect::new(move || {
        query.track();
        checkout.load_from_search(&current_search());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let sender = checkout.state.with(|state| state.sender.clone());
        log::info!("Form submitted: {:?}", sender);

        if let Err(err) = check_required(&sender) {
            log::warn!("{}", err);
        }
    };

    let methods = config
        .shipping_methods
        .iter()
        .map(|method| {
            let method = method.clone();
            let label = method.label.clone();
            let checked_label = label.clone();
            let cost = format_money(&config.currency, method.cost);
            view! {
                <label class="method-option">
                    <input
                        type="radio"
                        name=SenderField::SelectedMethod.name()
                        value=label.clone()
                        prop:checked=move || checkout.selected_method() == checked_label
                        on:change=move |_| checkout.select_shipping(&method)
                    />
                    <span class="method-label">{label}</span>
                    <span class="method-cost">{cost}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="container">
            <form class="flex-container" on:submit=on_submit>
                <h2 class="contact" id=sections::CONTACT>"Contact"</h2>
                <div class="contact-box">
                    <SenderInput field=SenderField::Contact/>
                </div>

                <h2 class="shipping-address" id=sections::ADDRESS>"Shipping Address"</h2>
                <div class="name-surname-box">
                    <SenderInput field=SenderField::Name/>
                    <SenderInput field=SenderField::Surname/>
                </div>
                <div class="address-box">
                    <SenderInput field=SenderField::Address/>
                </div>
                <div class="note-box">
                    <SenderInput field=SenderField::Note/>
                </div>
                <div class="location-box">
                    <SenderInput field=SenderField::City/>
                    <SenderInput field=SenderField::PostalCode/>
                    <SenderInput field=SenderField::Province/>
                </div>
                <div class="country-box">
                    <SenderInput field=SenderField::Country/>
                </div>

                <h2 class="shipping-method" id=sections::METHOD>"Shipping Method"</h2>
                <div class="method-box">{methods}</div>

                <button type="submit" class="save-button">"Save details"</button>
            </form>

            <div class="back-and-pay-buttons">
                <a href=routes::CART>
                    <h3 class="back">"Back to cart"</h3>
                </a>
                <a href=move || checkout.state.with(payment_href)>
                    <button class="pay-button">"Go to payment"</button>
                </a>
            </div>
        </div>
    }
}
