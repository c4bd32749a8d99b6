use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::parse_decimal;

/// One product line in the cart.
///
/// The quantity lives on the item itself so the cart and its quantities can
/// never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub product_img: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub product_name: String,
    /// Unit price as decimal text, exactly as the cart page sent it.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub product_price: String,
    #[serde(default = "default_quantity", deserialize_with = "deserialize_quantity")]
    pub product_quantity: u32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_img: String::new(),
            product_name: name.into(),
            product_price: price.into(),
            product_quantity: quantity.max(1),
        }
    }

    /// Unit price, `0.0` when the price text is not a finite number.
    ///
    /// The whole text must be the number: `"100 THB"` or `"$5"` read as
    /// `0.0`, not as their leading digits.
    pub fn unit_price(&self) -> f64 {
        parse_decimal(&self.product_price)
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.product_quantity)
    }
}

/// Contact and address record of the person placing the order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SenderInfo {
    pub contact: String,
    pub name: String,
    pub surname: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Label of the chosen [`ShippingMethod`].
    pub selected_method: String,
}

impl SenderInfo {
    /// `"name surname"`, trimmed when either part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }
}

/// A delivery option offered on the shipping page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    pub label: String,
    pub cost: f64,
}

impl ShippingMethod {
    pub fn new(label: impl Into<String>, cost: f64) -> Self {
        Self { label: label.into(), cost }
    }
}

fn default_quantity() -> u32 {
    1
}

/// Accept strings, numbers and booleans as text; anything else becomes empty.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Quantities below one (or not numbers at all) count as a single unit.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(quantity_from_value).unwrap_or(1))
}

fn quantity_from_value(value: &Value) -> Option<u32> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    let whole = raw.trunc();
    if whole < 1.0 {
        return None;
    }
    Some(whole.min(f64::from(u32::MAX)) as u32)
}
