//! Read-only list of cart lines.

use leptos::prelude::*;
use shared::dto::checkout::CartItem;
use shared::utils::format_money;

#[component]
pub fn CartLines(#[prop(into)] items: Signal<Vec<CartItem>>, currency: &'static str) -> impl IntoView {
    view! {
        <h2 class="product">"Products"</h2>
        {move || {
            let items = items.get();
            let last = items.len().saturating_sub(1);
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let price = format_money(currency, item.unit_price());
                    view! {
                        <div>
                            <div class="product-box">
                                <span class="img-product">
                                    <img src=item.product_img.clone() alt=item.product_name.clone()/>
                                </span>
                                <div>
                                    <h2>{item.product_name.clone()}</h2>
                                    <h3>
                                        <span class="info-quantity">"Quantity: "</span>
                                        {item.product_quantity}
                                    </h3>
                                </div>
                                <h3 class="product-price">{price}</h3>
                            </div>
                            {(index != last).then(|| view! { <hr class="product-separator"/> })}
                        </div>
                    }
                })
                .collect_view()
        }}
    }
}
