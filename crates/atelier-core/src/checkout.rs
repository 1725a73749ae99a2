//! # Checkout Totals
//!
//! The order summary shown beside the checkout form.
//!
//! ```text
//! Subtotal   Σ price × quantity
//! Shipping   flat charge
//! Tax        subtotal × rate
//! ─────────────────────────────
//! Total      subtotal + shipping + tax
//! ```
//!
//! Tax is charged on the subtotal only, never on shipping.

use serde::Serialize;
use ts_rs::TS;

use crate::cart::CartState;
use crate::money::Money;
use crate::types::TaxRate;

/// Order summary for the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

impl CheckoutTotals {
    /// Derives the summary from a subtotal.
    ///
    /// ```rust
    /// use atelier_core::checkout::CheckoutTotals;
    /// use atelier_core::money::Money;
    /// use atelier_core::types::TaxRate;
    ///
    /// let totals = CheckoutTotals::calculate(
    ///     Money::from_cents(74000),
    ///     Money::from_cents(2500),
    ///     TaxRate::from_bps(800),
    /// );
    /// assert_eq!(totals.total.to_string(), "$824.20");
    /// ```
    pub fn calculate(subtotal: Money, shipping: Money, tax_rate: TaxRate) -> Self {
        let tax = subtotal.calculate_tax(tax_rate);
        CheckoutTotals {
            subtotal,
            shipping,
            tax_rate,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Derives the summary for the current cart contents.
    pub fn for_cart(cart: &CartState, shipping: Money, tax_rate: TaxRate) -> Self {
        Self::calculate(cart.subtotal(), shipping, tax_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartAction, NewLineItem};
    use crate::{DEFAULT_SHIPPING, DEFAULT_TAX_RATE_BPS};

    fn add(cart: &mut CartState, id: u32, price: &str, quantity: u32) {
        cart.apply(CartAction::AddItem(NewLineItem {
            id,
            title: format!("Item {}", id),
            price: price.parse().unwrap(),
            image: String::new(),
            category: "pants".to_string(),
            selected_panel: None,
            quantity,
        }));
    }

    #[test]
    fn test_totals_for_cart() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", 2);
        add(&mut cart, 2, "$180", 1);

        let totals = CheckoutTotals::for_cart(
            &cart,
            DEFAULT_SHIPPING,
            TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
        );

        assert_eq!(totals.subtotal.cents(), 74000);
        assert_eq!(totals.shipping.cents(), 2500);
        assert_eq!(totals.tax.cents(), 5920);
        assert_eq!(totals.total.cents(), 82420);
    }

    #[test]
    fn test_tax_excludes_shipping() {
        let totals = CheckoutTotals::calculate(
            Money::from_cents(10000),
            Money::from_cents(2500),
            TaxRate::from_bps(800),
        );
        assert_eq!(totals.tax.cents(), 800);
    }

    #[test]
    fn test_empty_cart_still_charges_shipping() {
        let totals =
            CheckoutTotals::for_cart(&CartState::new(), DEFAULT_SHIPPING, TaxRate::default());
        assert_eq!(totals.tax, Money::zero());
        assert_eq!(totals.total, DEFAULT_SHIPPING);
    }

    #[test]
    fn test_huge_cart_does_not_overflow() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$92233720368547758", 2);
        add(&mut cart, 2, "$180", u32::MAX);

        assert_eq!(cart.subtotal().cents(), i64::MAX);
        assert_eq!(cart.items()[0].line_total().cents(), i64::MAX);

        let totals = CheckoutTotals::for_cart(&cart, DEFAULT_SHIPPING, TaxRate::default());
        assert_eq!(totals.total.cents(), i64::MAX);
    }
}
