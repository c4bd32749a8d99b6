//! Checkout state and its query codec.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use shared::dto::checkout::{CartItem, SenderInfo, ShippingMethod};
use shared::utils::parse_decimal;

use crate::checkout::query::QueryParams;
use crate::checkout::totals::OrderTotals;
use crate::error::{AppError, Result};

/// Name of the query field carrying the encoded [`CheckoutState`].
pub const STATE_PARAM: &str = "state";

/// Everything one checkout page hands to the next.
///
/// Travels as a single `state` query field holding base64url-encoded JSON,
/// so arbitrary user text (`&`, `=`, `#`, `+`, ...) survives the round trip
/// between pages untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutState {
    #[serde(rename = "products", deserialize_with = "deserialize_cart")]
    pub cart: Vec<CartItem>,
    pub sender: SenderInfo,
    #[serde(deserialize_with = "deserialize_amount")]
    pub shipping_cost: f64,
    pub payment_method: String,
    /// Total announced by the cart page. Carried through as-is; the pages
    /// display [`OrderTotals`] instead.
    #[serde(deserialize_with = "deserialize_amount")]
    pub total: f64,
}

impl CheckoutState {
    /// Serialize to the `state` parameter value.
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(self)
            .map_err(|err| AppError::Encoding(format!("checkout state: {}", err)))?;
        Ok(lib_utils::b64u_encode(json))
    }

    /// Inverse of [`CheckoutState::encode`].
    pub fn decode(encoded: &str) -> Result<Self> {
        let json = lib_utils::b64u_decode_to_string(encoded)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// `state=<encoded>`, ready to append after `?`.
    pub fn to_query(&self) -> Result<String> {
        Ok(format!("{}={}", STATE_PARAM, self.encode()?))
    }

    /// Link to `path` carrying this state, optionally landing on `anchor`.
    ///
    /// Falls back to the bare path (state lost, logged) if encoding fails.
    pub fn link(&self, path: &str, anchor: Option<&str>) -> String {
        let mut href = match self.to_query() {
            Ok(query) => format!("{}?{}", path, query),
            Err(err) => {
                tracing::error!(code = err.code(), "Failed to encode checkout state: {}", err);
                path.to_string()
            }
        };
        if let Some(anchor) = anchor {
            href.push('#');
            href.push_str(anchor);
        }
        href
    }

    /// Read the state from a `location.search` string.
    pub fn from_search(search: &str) -> Self {
        Self::from_params(&QueryParams::parse(search))
    }

    /// Read the state from decoded query parameters.
    ///
    /// The `state` field wins when present. Without it the flat fields the
    /// cart page sends (`products`, `total`, `shippingCost`, sender fields)
    /// are read instead. Malformed input never fails: it is logged and
    /// replaced by empty or zero values.
    pub fn from_params(params: &QueryParams) -> Self {
        match params.get(STATE_PARAM) {
            Some(encoded) => Self::decode(encoded).unwrap_or_else(|err| {
                tracing::error!(code = err.code(), "Error parsing checkout state: {}", err);
                Self::default()
            }),
            None => Self::from_flat_params(params),
        }
    }

    fn from_flat_params(params: &QueryParams) -> Self {
        let sender = SenderInfo {
            contact: params.get_or_default("contact"),
            name: params.get_or_default("name"),
            surname: params.get_or_default("surname"),
            address: params.get_or_default("address"),
            city: params.get_or_default("city"),
            province: params.get_or_default("province"),
            country: params.get_or_default("country"),
            postal_code: params.get_or_default("postalCode"),
            note: params
                .get("note")
                .filter(|note| !note.is_empty())
                .map(str::to_string),
            // Older edit links spelled it "method"
            selected_method: params
                .get("selectedMethod")
                .or_else(|| params.get("method"))
                .unwrap_or_default()
                .to_string(),
        };

        Self {
            cart: parse_products(params.get("products")),
            sender,
            shipping_cost: parse_decimal(params.get("shippingCost").unwrap_or_default()),
            payment_method: params.get_or_default("paymentMethod"),
            total: parse_decimal(params.get("total").unwrap_or_default()),
        }
    }

    /// Subtotal and shipping derived from the current cart.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::compute(&self.cart, self.shipping_cost)
    }

    /// Pick a delivery option: records its label on the sender and its cost.
    pub fn select_shipping(&mut self, method: &ShippingMethod) {
        self.sender.selected_method = method.label.clone();
        self.shipping_cost = method.cost;
    }
}

/// Parse the `products` JSON array.
///
/// An absent or empty value is an empty cart. Anything that is not a JSON
/// array is logged and treated as an empty cart. Each array element becomes
/// one line, so the cart length always equals the array length; elements
/// that are not product objects become blank lines priced at zero.
pub fn parse_products(raw: Option<&str>) -> Vec<CartItem> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Vec::new();
    };

    let values = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(values) => values,
        Err(err) => {
            let err = AppError::from(err);
            tracing::error!(code = err.code(), "Error parsing products query: {}", err);
            return Vec::new();
        }
    };

    values.into_iter().map(cart_line).collect()
}

/// One cart line out of a JSON array element. Anything that is not a product
/// object becomes a blank line priced at zero.
fn cart_line(value: Value) -> CartItem {
    serde_json::from_value::<CartItem>(value).unwrap_or_else(|err| {
        tracing::warn!("Cart line is not a product object: {}", err);
        CartItem::new("", "", 1)
    })
}

/// `products` inside an encoded state, read with the same per-line leniency
/// as the flat `products` field. A non-array value is an empty cart.
fn deserialize_cart<'de, D>(deserializer: D) -> std::result::Result<Vec<CartItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values.into_iter().map(cart_line).collect(),
        None => Vec::new(),
        Some(other) => {
            tracing::error!("Checkout state products is not an array: {}", other);
            Vec::new()
        }
    })
}

/// Accept numbers and numeric strings; anything else is zero.
fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Some(Value::String(s)) => parse_decimal(&s),
        _ => 0.0,
    })
}
