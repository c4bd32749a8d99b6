//! Text input bound to one sender field.

use leptos::prelude::*;
use lib_core::checkout::SenderField;

use crate::state::checkout::use_checkout_context;

#[component]
pub fn SenderInput(field: SenderField) -> impl IntoView {
    let checkout = use_checkout_context();

    view! {
        <input
            name=field.name()
            class="text-name"
            placeholder=format!(" {}", field.placeholder())
            required=field.is_required()
            prop:value=move || checkout.sender_value(field)
            on:input=move |ev| checkout.set_field(field, event_target_value(&ev))
        />
    }
}
