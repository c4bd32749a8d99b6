//! Persisted totals.
//!
//! The payment page mirrors its subtotal and shipping cost into the
//! browser's local storage under [`SUBTOTAL_KEY`] and [`SHIPPING_COST_KEY`],
//! both as decimal text with two fraction digits. [`TotalsStore`] is the one
//! place that writes and reads those keys.

use std::cell::RefCell;
use std::collections::HashMap;

use shared::utils::format_amount;

use crate::checkout::totals::OrderTotals;
use crate::error::{AppError, Result};

pub const SUBTOTAL_KEY: &str = "subtotal";
pub const SHIPPING_COST_KEY: &str = "shippingCost";

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// In-memory store for native builds and tests, where there is no
/// `window.localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Totals as last written by the payment page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistedTotals {
    pub subtotal: f64,
    pub shipping_cost: f64,
}

impl PersistedTotals {
    pub fn total(&self) -> f64 {
        OrderTotals::from(*self).total()
    }
}

impl From<PersistedTotals> for OrderTotals {
    fn from(persisted: PersistedTotals) -> Self {
        OrderTotals {
            subtotal: persisted.subtotal,
            shipping_cost: persisted.shipping_cost,
        }
    }
}

/// Reader and writer of the persisted totals keys.
#[derive(Debug)]
pub struct TotalsStore<S> {
    store: S,
}

impl<S: KeyValueStore> TotalsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Write both keys. Last writer wins.
    pub fn persist(&self, totals: &OrderTotals) -> Result<()> {
        let subtotal = format_amount(totals.subtotal);
        let shipping_cost = format_amount(totals.shipping_cost);

        self.store.set_item(SUBTOTAL_KEY, &subtotal)?;
        self.store.set_item(SHIPPING_COST_KEY, &shipping_cost)?;

        tracing::debug!(%subtotal, %shipping_cost, "Persisted checkout totals");
        Ok(())
    }

    /// `None` until both keys have been written.
    pub fn load(&self) -> Result<Option<PersistedTotals>> {
        let subtotal = self.store.get_item(SUBTOTAL_KEY)?;
        let shipping_cost = self.store.get_item(SHIPPING_COST_KEY)?;

        let (Some(subtotal), Some(shipping_cost)) = (subtotal, shipping_cost) else {
            return Ok(None);
        };

        Ok(Some(PersistedTotals {
            subtotal: parse_stored(SUBTOTAL_KEY, &subtotal)?,
            shipping_cost: parse_stored(SHIPPING_COST_KEY, &shipping_cost)?,
        }))
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove_item(SUBTOTAL_KEY)?;
        self.store.remove_item(SHIPPING_COST_KEY)
    }
}

fn parse_stored(key: &str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::Decoding(format!("stored {key} is not a decimal: {text:?}"))),
    }
}
