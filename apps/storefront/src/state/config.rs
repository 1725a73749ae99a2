//! # Store Configuration
//!
//! Settings loaded once at session start.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ATELIER_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use atelier_core::validation::validate_tax_rate_bps;
use atelier_core::{Money, TaxRate, DEFAULT_SHIPPING};
use serde::Serialize;
use tracing::warn;

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Shown in the header and on order acknowledgements
    pub store_name: String,

    /// Currency symbol (for display). Amounts are always in cents.
    pub currency_symbol: String,

    /// Flat shipping charge added at checkout
    pub shipping: Money,

    /// Sales tax applied to the subtotal
    pub tax_rate: TaxRate,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Currency: USD ($)
    /// - Shipping: $25.00
    /// - Tax: 8%
    fn default() -> Self {
        StoreConfig {
            store_name: "Atelier".to_string(),
            currency_symbol: "$".to_string(),
            shipping: DEFAULT_SHIPPING,
            tax_rate: TaxRate::default(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ATELIER_STORE_NAME`: Override store name
    /// - `ATELIER_CURRENCY_SYMBOL`: Display symbol (e.g., "€")
    /// - `ATELIER_SHIPPING`: Flat shipping charge (e.g., "$25" or "19.50")
    /// - `ATELIER_TAX_RATE`: Tax rate in percent (e.g., "8.25")
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`StoreConfig::from_env`], reading from the given pairs.
    ///
    /// Unparseable values are logged and the default kept.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = StoreConfig::default();

        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                "ATELIER_STORE_NAME" => config.store_name = value.to_string(),
                "ATELIER_CURRENCY_SYMBOL" => config.currency_symbol = value.trim().to_string(),
                "ATELIER_SHIPPING" => match Money::parse(value) {
                    Ok(shipping) => config.shipping = shipping,
                    Err(e) => warn!(error = %e, "Ignoring ATELIER_SHIPPING"),
                },
                "ATELIER_TAX_RATE" => match value.trim().parse::<f64>() {
                    Ok(pct) if pct >= 0.0 => {
                        let rate = TaxRate::from_percentage(pct);
                        match validate_tax_rate_bps(rate.bps()) {
                            Ok(()) => config.tax_rate = rate,
                            Err(e) => warn!(error = %e, "Ignoring ATELIER_TAX_RATE"),
                        }
                    }
                    _ => warn!(value, "Ignoring ATELIER_TAX_RATE: not a percentage"),
                },
                _ => {}
            }
        }

        config
    }

    /// Formats a money amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::Money;
    /// use atelier_storefront::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(82420)), "$824.20");
    /// assert_eq!(config.format_currency(Money::from_cents(123456)), "$1,234.56");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.shipping.cents(), 2500);
        assert_eq!(config.tax_rate.bps(), 800);
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = StoreConfig::from_vars([
            ("ATELIER_STORE_NAME", "Studio Sale"),
            ("ATELIER_SHIPPING", "$19.50"),
            ("ATELIER_TAX_RATE", "8.25"),
            ("UNRELATED", "x"),
        ]);
        assert_eq!(config.store_name, "Studio Sale");
        assert_eq!(config.shipping.cents(), 1950);
        assert_eq!(config.tax_rate.bps(), 825);
    }

    #[test]
    fn test_from_vars_ignores_bad_values() {
        let config = StoreConfig::from_vars([
            ("ATELIER_SHIPPING", "free"),
            ("ATELIER_TAX_RATE", "-3"),
        ]);
        assert_eq!(config, StoreConfig::default());

        let config = StoreConfig::from_vars([("ATELIER_TAX_RATE", "250")]);
        assert_eq!(config.tax_rate, TaxRate::default());
    }

    #[test]
    fn test_format_currency_positive() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_symbol_round_trips() {
        let config = StoreConfig::from_vars([("ATELIER_CURRENCY_SYMBOL", "¥")]);
        let shown = config.format_currency(Money::from_cents(280000));
        assert_eq!(shown, "¥2,800.00");
        assert_eq!(Money::parse(&shown).unwrap().cents(), 280000);
        assert_eq!(config.format_currency(Money::from_cents(-550)), "-¥5.50");
    }
}
