//! # Cart Store
//!
//! The session's single cart. Every page reads it and every change goes
//! through [`CartStore::dispatch`].
//!
//! ## Ownership
//! The store is a plain owned value. Commands borrow it (`&CartStore` to
//! read, `&mut CartStore` to change); nothing hands out the inner state
//! mutably. All updates are synchronous, so there is no lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                   CartAction              Store                │
//! │  ───────                   ──────────              ─────                │
//! │  add_to_cart() ──────────► AddItem ──────┐                              │
//! │  update_cart_item() ─────► UpdateQuantity┤                              │
//! │  remove_from_cart() ─────► RemoveItem ───┼──► dispatch() ──► CartState  │
//! │  clear_cart() ───────────► ClearCart ────┤         │                    │
//! │  toggle_cart_drawer() ───► ToggleCart ───┘      debug!                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::{CartAction, CartState, Money};
use serde::Serialize;
use tracing::debug;

/// Cart summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Badge count: total quantity across rows
    pub item_count: u64,
    /// Distinct rows
    pub line_count: usize,
    pub subtotal: Money,
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            subtotal: cart.subtotal(),
        }
    }
}

/// Owns the session's cart.
#[derive(Debug, Default)]
pub struct CartStore {
    cart: CartState,
}

impl CartStore {
    /// Creates a store with an empty, closed cart.
    pub fn new() -> Self {
        CartStore {
            cart: CartState::new(),
        }
    }

    /// Applies one action to the cart.
    pub fn dispatch(&mut self, action: CartAction) {
        debug!(?action, "cart dispatch");
        self.cart.apply(action);
        debug!(
            lines = self.cart.line_count(),
            items = self.cart.item_count(),
            open = self.cart.is_open(),
            "cart updated"
        );
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use atelier_storefront::state::{CartStore, CartTotals};
    ///
    /// let store = CartStore::new();
    /// let totals = store.with_cart(|c| CartTotals::from(c));
    /// assert_eq!(totals.item_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        f(&self.cart)
    }
}
