//! # Checkout Configuration
//!
//! Currency label, shipping methods on offer, and whether derived totals are
//! mirrored into local storage.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! assert!(!config.shipping_methods.is_empty());
//! ```
//!
//! [`init_config()`] loads and validates the environment once at startup.
//! When it was never called (tests) the defaults apply.
//!
//! ## Sources
//!
//! Each variable is read from the process environment first, then from the
//! value captured when this crate was compiled. The browser build has no
//! process environment, so it is configured at build time:
//!
//! ```text
//! CHECKOUT_CURRENCY=USD CHECKOUT_SHIPPING_METHODS="Ground:5,Air:20" \
//!     cargo build -p checkout-web --target wasm32-unknown-unknown
//! ```

use std::sync::OnceLock;

use lib_utils::envs;
use shared::dto::checkout::ShippingMethod;

use crate::error::{AppError, Result};

pub const CURRENCY_ENV: &str = "CHECKOUT_CURRENCY";
pub const SHIPPING_METHODS_ENV: &str = "CHECKOUT_SHIPPING_METHODS";
pub const PERSIST_TOTALS_ENV: &str = "CHECKOUT_PERSIST_TOTALS";

pub const DEFAULT_CURRENCY: &str = "THB";
pub const DEFAULT_SHIPPING_METHODS: &str = "Standard:50,Express:100";

/// Checkout configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Label rendered in front of every amount (`CHECKOUT_CURRENCY`).
    pub currency: String,

    /// Delivery options shown on the shipping page
    /// (`CHECKOUT_SHIPPING_METHODS`, `label:cost` pairs separated by commas).
    pub shipping_methods: Vec<ShippingMethod>,

    /// Mirror subtotal and shipping cost into local storage
    /// (`CHECKOUT_PERSIST_TOTALS`).
    pub persist_totals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            shipping_methods: vec![
                ShippingMethod::new("Standard", 50.0),
                ShippingMethod::new("Express", 100.0),
            ],
            persist_totals: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, defaulting unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| envs::get_env_or_built(name, built_in(name)))
    }

    /// Load configuration through `lookup`, which reports unset variables as
    /// [`envs::Error::MissingEnv`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> std::result::Result<String, envs::Error>,
    {
        let currency = optional(lookup(CURRENCY_ENV))?
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let shipping_methods = parse_shipping_methods(
            &optional(lookup(SHIPPING_METHODS_ENV))?
                .unwrap_or_else(|| DEFAULT_SHIPPING_METHODS.to_string()),
        )?;

        let persist_totals = match optional(lookup(PERSIST_TOTALS_ENV))? {
            Some(raw) => envs::parse_env::<bool>(PERSIST_TOTALS_ENV, &raw)?,
            None => true,
        };

        Ok(Self {
            currency,
            shipping_methods,
            persist_totals,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            return Err(AppError::Config(format!("{CURRENCY_ENV} cannot be empty")));
        }

        if self.shipping_methods.is_empty() {
            return Err(AppError::Config(
                "at least one shipping method must be configured".to_string(),
            ));
        }

        for (index, method) in self.shipping_methods.iter().enumerate() {
            if method.label.trim().is_empty() {
                return Err(AppError::Config("shipping method label cannot be empty".to_string()));
            }
            if !method.cost.is_finite() || method.cost < 0.0 {
                return Err(AppError::Config(format!(
                    "shipping method {} has invalid cost {}",
                    method.label, method.cost
                )));
            }
            if self.shipping_methods[..index].iter().any(|m| m.label == method.label) {
                return Err(AppError::Config(format!(
                    "duplicate shipping method {}",
                    method.label
                )));
            }
        }

        Ok(())
    }
}

/// Value of `name` captured at compile time.
fn built_in(name: &str) -> Option<&'static str> {
    match name {
        CURRENCY_ENV => option_env!("CHECKOUT_CURRENCY"),
        SHIPPING_METHODS_ENV => option_env!("CHECKOUT_SHIPPING_METHODS"),
        PERSIST_TOTALS_ENV => option_env!("CHECKOUT_PERSIST_TOTALS"),
        _ => None,
    }
}

/// Unset is `None`, anything else wrong is an error.
fn optional(value: std::result::Result<String, envs::Error>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(envs::Error::MissingEnv(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Parse `"Standard:50,Express:100"` into shipping methods.
pub fn parse_shipping_methods(list: &str) -> Result<Vec<ShippingMethod>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (label, cost) = entry.rsplit_once(':').ok_or_else(|| {
                AppError::Config(format!("shipping method '{entry}' must look like label:cost"))
            })?;
            let cost = cost.trim().parse::<f64>().map_err(|_| {
                AppError::Config(format!("shipping method '{entry}' has a non-numeric cost"))
            })?;
            Ok(ShippingMethod::new(label.trim(), cost))
        })
        .collect()
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are malformed
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration, defaults when uninitialized.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency, "THB");
        assert!(config.persist_totals);
    }

    fn lookup_in<'a>(
        vars: &'a [(&'static str, &'static str)],
    ) -> impl Fn(&'static str) -> std::result::Result<String, envs::Error> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .ok_or(envs::Error::MissingEnv(name))
        }
    }

    #[test]
    fn test_from_lookup_unset_is_default() {
        assert_eq!(Config::from_lookup(lookup_in(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_in(&[
            (CURRENCY_ENV, "USD"),
            (SHIPPING_METHODS_ENV, "Ground:5,Air:20"),
            (PERSIST_TOTALS_ENV, " false"),
        ]))
        .unwrap();

        assert_eq!(config.currency, "USD");
        assert_eq!(
            config.shipping_methods,
            vec![ShippingMethod::new("Ground", 5.0), ShippingMethod::new("Air", 20.0)]
        );
        assert!(!config.persist_totals);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup_in(&[(PERSIST_TOTALS_ENV, "sometimes")])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_in(&[(SHIPPING_METHODS_ENV, "Ground")])),
            Err(AppError::Config(_))
        ));

        let negative = Config::from_lookup(lookup_in(&[(SHIPPING_METHODS_ENV, "Ground:-5")])).unwrap();
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_parse_shipping_methods() {
        let methods = parse_shipping_methods(" Standard:50 , Next day: 120.5,").unwrap();
        assert_eq!(
            methods,
            vec![
                ShippingMethod::new("Standard", 50.0),
                ShippingMethod::new("Next day", 120.5),
            ]
        );
        assert_eq!(parse_shipping_methods(DEFAULT_SHIPPING_METHODS).unwrap(), Config::default().shipping_methods);
    }

    #[test]
    fn test_parse_shipping_methods_rejects_malformed() {
        assert!(parse_shipping_methods("Standard").is_err());
        assert!(parse_shipping_methods("Standard:cheap").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_methods() {
        let mut config = Config::default();
        config.shipping_methods.push(ShippingMethod::new("Standard", 10.0));
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.shipping_methods = vec![ShippingMethod::new("Drone", -1.0)];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.shipping_methods.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.currency = " ".to_string();
        assert!(config.validate().is_err());
    }
}
