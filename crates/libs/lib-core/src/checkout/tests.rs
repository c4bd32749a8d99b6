//! End-to-end checks of the page handoff: query in, totals and store out,
//! edit links back.

use std::sync::{Arc, Mutex};

use shared::dto::checkout::{CartItem, SenderInfo};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use super::*;

/// Records the level of every event it sees.
#[derive(Clone, Default)]
struct EventLevels(Arc<Mutex<Vec<Level>>>);

impl<S: Subscriber> Layer<S> for EventLevels {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}

/// Run `f` with a subscriber installed, returning its result and the levels
/// of the events it emitted.
fn with_captured_levels<T>(f: impl FnOnce() -> T) -> (T, Vec<Level>) {
    let levels = EventLevels::default();
    let subscriber = tracing_subscriber::registry().with(levels.clone());
    let value = tracing::subscriber::with_default(subscriber, f);
    let captured = levels.0.lock().unwrap().clone();
    (value, captured)
}

fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn sample_sender() -> SenderInfo {
    SenderInfo {
        contact: "ann@example.com".to_string(),
        name: "Ann".to_string(),
        surname: "Lee".to_string(),
        address: "12 & 14 Main St".to_string(),
        city: "Bangkok".to_string(),
        province: "Bangkok".to_string(),
        country: "Thailand".to_string(),
        postal_code: "10110".to_string(),
        note: Some("ring twice #2, code=42".to_string()),
        selected_method: "Express".to_string(),
    }
}

// ========== Inbound: flat fields from the cart page ==========

#[test]
fn test_shirt_example_totals() {
    let products = r#"[{"productName":"Shirt","productPrice":"100","productQuantity":2}]"#;
    let search = format!("?products={}&shippingCost=50", encode_component(products));

    let state = CheckoutState::from_search(&search);
    let totals = state.totals();

    assert_eq!(state.cart.len(), 1);
    assert_eq!(totals.subtotal_text(), "200.00");
    assert_eq!(totals.shipping_text(), "50.00");
    assert_eq!(totals.total_text(), "250.00");
}

#[test]
fn test_cart_length_matches_array_and_quantity_defaults() {
    let products = r#"[
        {"productName":"A","productPrice":"10"},
        {"productName":"B","productPrice":"5","productQuantity":0},
        {"productName":"C","productPrice":"1","productQuantity":4},
        7
    ]"#;
    let params: QueryParams = [("products", products)].into_iter().collect();

    let state = CheckoutState::from_params(&params);

    assert_eq!(state.cart.len(), 4);
    let quantities: Vec<u32> = state.cart.iter().map(|i| i.product_quantity).collect();
    assert_eq!(quantities, vec![1, 1, 4, 1]);
    assert_eq!(state.totals().subtotal_text(), "19.00");
}

#[test]
fn test_products_absent_is_empty_cart() {
    let state = CheckoutState::from_search("?name=Ann");
    assert!(state.cart.is_empty());
    assert_eq!(state.totals().subtotal_text(), "0.00");
    assert_eq!(state.sender.name, "Ann");
}

#[test]
fn test_products_not_json_is_empty_cart() {
    let (state, levels) =
        with_captured_levels(|| CheckoutState::from_search("?products=not%20json&shippingCost=50"));
    assert!(levels.contains(&Level::ERROR));
    assert!(state.cart.is_empty());
    assert_eq!(state.shipping_cost, 50.0);
    assert_eq!(state.totals().total_text(), "50.00");
}

#[test]
fn test_well_formed_query_logs_no_error() {
    let products = r#"[{"productName":"Shirt","productPrice":"100"}]"#;
    let search = format!("?products={}&name=Ann", encode_component(products));

    let (state, levels) = with_captured_levels(|| CheckoutState::from_search(&search));

    assert_eq!(state.cart.len(), 1);
    assert!(!levels.contains(&Level::ERROR));
    assert!(!levels.contains(&Level::WARN));
}

#[test]
fn test_bad_cart_line_is_warned() {
    let (cart, levels) = with_captured_levels(|| state::parse_products(Some(r#"[{"productName":"A"},"x"]"#)));
    assert_eq!(cart.len(), 2);
    assert_eq!(levels, vec![Level::WARN]);
}

#[test]
fn test_products_not_an_array_is_empty_cart() {
    assert!(state::parse_products(Some(r#"{"productName":"A"}"#)).is_empty());
    assert!(state::parse_products(Some("")).is_empty());
    assert!(state::parse_products(None).is_empty());
}

#[test]
fn test_sender_fields_default_to_empty() {
    let state = CheckoutState::from_search("?contact=a%40b.co&postalCode=10110&method=Standard");

    assert_eq!(state.sender.contact, "a@b.co");
    assert_eq!(state.sender.postal_code, "10110");
    assert_eq!(state.sender.selected_method, "Standard");
    for field in SenderField::FORM_FIELDS {
        if !matches!(field, SenderField::Contact | SenderField::PostalCode) {
            assert_eq!(field.read(&state.sender), "", "{} should be empty", field.name());
        }
    }
}

#[test]
fn test_numeric_fields_fall_back_to_zero() {
    let state = CheckoutState::from_search("?total=abc&shippingCost=&paymentMethod=card");
    assert_eq!(state.total, 0.0);
    assert_eq!(state.shipping_cost, 0.0);
    assert_eq!(state.payment_method, "card");

    let state = CheckoutState::from_search("?total=99.5");
    assert_eq!(state.total, 99.5);
}

#[test]
fn test_garbage_state_param_is_default() {
    let (state, levels) = with_captured_levels(|| CheckoutState::from_search("?state=!!!&name=Ann"));
    assert_eq!(state, CheckoutState::default());
    assert!(levels.contains(&Level::ERROR));
}

// ========== Outbound: links between pages ==========

#[test]
fn test_link_round_trip_preserves_reserved_characters() {
    let state = CheckoutState {
        cart: vec![
            CartItem::new("T-shirt \"Bangkok\" 100% cotton", "199.5", 2),
            CartItem::new("Mug & spoon + lid = set", "89", 1),
        ],
        sender: sample_sender(),
        shipping_cost: 100.0,
        payment_method: "card".to_string(),
        total: 488.0,
    };

    let href = state.link("/shipping", Some("address"));
    let (path, rest) = href.split_once('?').unwrap();
    assert_eq!(path, "/shipping");

    let decoded = CheckoutState::from_search(rest);
    assert_eq!(decoded, state);
    assert_eq!(decoded.sender.address, "12 & 14 Main St");
}

#[test]
fn test_link_round_trip_unicode() {
    let mut state = CheckoutState::default();
    state.sender.name = "สมชาย".to_string();
    state.sender.city = "Zürich?x=1".to_string();

    let href = state.link("/payment", None);
    let decoded = CheckoutState::from_search(href.split_once('?').unwrap().1);
    assert_eq!(decoded.sender, state.sender);
}

/// The hand-built links this replaces interpolated raw field values. Any `&`
/// in a value splits it, and a smuggled `key=value` overrides the real field.
#[test]
fn test_naive_concatenation_misassigns_fields() {
    let mut sender = sample_sender();
    sender.address = "12 & 14 Main St&city=Nowhere".to_string();

    let naive = format!(
        "?name={}&address={}&city={}&postalCode={}",
        sender.name, sender.address, sender.city, sender.postal_code
    );
    let parsed = CheckoutState::from_search(&naive);

    assert_ne!(parsed.sender.address, sender.address);
    assert_eq!(parsed.sender.address, "12 ");
    assert_eq!(parsed.sender.city, "Nowhere");

    let mut state = CheckoutState::default();
    state.sender = sender.clone();
    let href = state.link("/shipping", None);
    let fixed = CheckoutState::from_search(href.split_once('?').unwrap().1);
    assert_eq!(fixed.sender.address, sender.address);
    assert_eq!(fixed.sender.city, "Bangkok");
}

// ========== Store: the persisted totals contract ==========

#[test]
fn test_store_tracks_latest_computation() {
    let store = MemoryStore::new();
    let totals_store = TotalsStore::new(&store);

    let mut state = CheckoutState::from_search(
        "?products=%5B%7B%22productPrice%22%3A%2210%22%7D%5D&shippingCost=5",
    );
    totals_store.persist(&state.totals()).unwrap();
    assert_eq!(store.get_item(SUBTOTAL_KEY).unwrap().as_deref(), Some("10.00"));
    assert_eq!(store.get_item(SHIPPING_COST_KEY).unwrap().as_deref(), Some("5.00"));

    state.cart[0].product_quantity = 3;
    state.shipping_cost = 7.5;
    totals_store.persist(&state.totals()).unwrap();

    assert_eq!(store.get_item(SUBTOTAL_KEY).unwrap().as_deref(), Some("30.00"));
    assert_eq!(store.get_item(SHIPPING_COST_KEY).unwrap().as_deref(), Some("7.50"));
    assert_eq!(totals_store.load().unwrap().map(|t| t.total()), Some(37.5));
}
