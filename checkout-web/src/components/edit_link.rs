//! "Edit" link back to a section of the shipping page.

use leptos::prelude::*;

use crate::state::checkout::use_checkout_context;
use crate::utils::url::shipping_href;

#[component]
pub fn EditLink(section: &'static str) -> impl IntoView {
    let checkout = use_checkout_context();
    let href = move || checkout.state.with(|state| shipping_href(state, Some(section)));

    view! {
        <a href=href>
            <p class="edit">"Edit"</p>
        </a>
    }
}
