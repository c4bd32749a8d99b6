//! Local storage adapter for the persisted totals contract.

use lib_core::checkout::{KeyValueStore, OrderTotals, TotalsStore};
use lib_core::error::{AppError, Result};
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// `window.localStorage` behind [`KeyValueStore`].
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Fails when there is no window or the browser refuses storage access
    /// (private mode, disabled cookies).
    pub fn open() -> Result<Self> {
        let window = window().ok_or_else(|| AppError::Storage("no window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> AppError {
    AppError::Storage(format!("{:?}", err))
}

/// Write subtotal and shipping cost to local storage. Failures are logged
/// and otherwise ignored.
pub fn persist_totals(totals: &OrderTotals) {
    let result = LocalStore::open().and_then(|store| TotalsStore::new(store).persist(totals));
    if let Err(err) = result {
        log::warn!("Could not persist checkout totals: {}", err);
    }
}
