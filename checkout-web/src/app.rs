//! Checkout App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::{PaymentPage, ShippingPage};
use crate::state::checkout::provide_checkout_context;
use crate::utils::constants::routes;

#[component]
pub fn App() -> impl IntoView {
    provide_checkout_context();

    view! {
        <Router>
            <main class="checkout-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=ShippingPage/>
                    <Route path=path!("/shipping") view=ShippingPage/>
                    <Route path=path!("/payment") view=PaymentPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=routes::SHIPPING>
                <span class="btn">"Back to shipping"</span>
            </A>
        </div>
    }
}
