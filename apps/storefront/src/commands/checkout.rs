//! # Checkout Commands
//!
//! The order summary and the checkout form.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout page loads ──► get_checkout_summary() ──► items + totals      │
//! │                                                                         │
//! │  "Place Order" ──► submit_checkout(form)                                │
//! │                       │                                                 │
//! │                       ├── fields missing? → VALIDATION_ERROR (all)      │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │                    info!(redacted order) ──► SubmissionReceipt          │
//! │                                                                         │
//! │  No payment is taken and nothing leaves the process.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::forms::CheckoutForm;
use atelier_core::{CheckoutTotals, LineItem};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::SubmissionReceipt;
use crate::error::ApiError;
use crate::state::{CartStore, StoreConfig};

/// Totals formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

/// Order summary shown beside the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub items: Vec<LineItem>,
    pub totals: CheckoutTotals,
    pub formatted: FormattedTotals,
}

fn summarize(cart: &CartStore, config: &StoreConfig) -> CheckoutSummary {
    cart.with_cart(|c| {
        let totals = CheckoutTotals::for_cart(c, config.shipping, config.tax_rate);
        CheckoutSummary {
            items: c.items().to_vec(),
            formatted: FormattedTotals {
                subtotal: config.format_currency(totals.subtotal),
                shipping: config.format_currency(totals.shipping),
                tax: config.format_currency(totals.tax),
                total: config.format_currency(totals.total),
            },
            totals,
        }
    })
}

/// Gets the order summary for the current cart.
pub fn get_checkout_summary(cart: &CartStore, config: &StoreConfig) -> CheckoutSummary {
    debug!("get_checkout_summary command");
    summarize(cart, config)
}

/// Accepts the checkout form.
///
/// ## Behavior
/// - Every required field is checked; all failures are reported together
/// - A valid order is logged with card details masked
/// - The cart is left as it is
pub fn submit_checkout(
    cart: &CartStore,
    config: &StoreConfig,
    form: &CheckoutForm,
) -> Result<SubmissionReceipt, ApiError> {
    debug!("submit_checkout command");

    form.validate().map_err(|errors| {
        warn!(count = errors.len(), "checkout form incomplete");
        ApiError::from(errors)
    })?;

    let summary = summarize(cart, config);
    let receipt = SubmissionReceipt::new(Some(summary.totals.total));
    let customer = serde_json::to_string(&form.redacted())?;

    info!(
        reference = %receipt.reference,
        store = %config.store_name,
        %customer,
        lines = summary.items.len(),
        total = %summary.formatted.total,
        "Checkout submitted"
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            email: "collector@example.com".to_string(),
            first_name: "Mina".to_string(),
            last_name: "Okafor".to_string(),
            address: "12 Loom Street".to_string(),
            city: "Lagos".to_string(),
            state: "LA".to_string(),
            zip_code: "100001".to_string(),
            country: "Nigeria".to_string(),
            card_number: "4242424242424242".to_string(),
            expiry_date: "12/29".to_string(),
            cvv: "123".to_string(),
            name_on_card: "Mina Okafor".to_string(),
        }
    }

    fn cart_with_kimonos_and_pants() -> CartStore {
        let mut store = CartStore::new();
        add_to_cart(&mut store, 1, Some(1), Some(2)).unwrap(); // $280 × 2
        add_to_cart(&mut store, 2, Some(1), Some(1)).unwrap(); // $180 × 1
        store
    }

    #[test]
    fn test_summary_totals() {
        let store = cart_with_kimonos_and_pants();
        let summary = get_checkout_summary(&store, &StoreConfig::default());

        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.totals.subtotal.cents(), 74000);
        assert_eq!(summary.formatted.subtotal, "$740.00");
        assert_eq!(summary.formatted.shipping, "$25.00");
        assert_eq!(summary.formatted.tax, "$59.20");
        assert_eq!(summary.formatted.total, "$824.20");
    }

    #[test]
    fn test_summary_uses_configured_shipping() {
        let store = cart_with_kimonos_and_pants();
        let config = StoreConfig::from_vars([("ATELIER_SHIPPING", "$0")]);
        let summary = get_checkout_summary(&store, &config);
        assert_eq!(summary.formatted.total, "$799.20");
    }

    #[test]
    fn test_submit_valid_checkout() {
        let store = cart_with_kimonos_and_pants();
        let receipt = submit_checkout(&store, &StoreConfig::default(), &filled_form()).unwrap();

        assert_eq!(receipt.total.map(|t| t.cents()), Some(82420));
        assert_eq!(store.cart().line_count(), 2);
    }

    #[test]
    fn test_submit_incomplete_checkout() {
        let store = cart_with_kimonos_and_pants();
        let form = CheckoutForm {
            email: "not-an-email".to_string(),
            name_on_card: String::new(),
            ..filled_form()
        };

        let err = submit_checkout(&store, &StoreConfig::default(), &form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields, vec!["email", "nameOnCard"]);
    }
}
