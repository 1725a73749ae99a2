//! # Cart
//!
//! The shopping cart: an ordered list of line items plus the drawer flag.
//! Every page reads this one state and changes it only by applying a
//! [`CartAction`].
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action                 CartAction              State Change          │
//! │  ─────────                 ──────────              ────────────          │
//! │                                                                         │
//! │  Add to Cart ────────────► AddItem ──────────────► merge or push row    │
//! │  Change Quantity ────────► UpdateQuantity ───────► set qty (<=0 drops)  │
//! │  Click Remove ───────────► RemoveItem ───────────► drop row if present  │
//! │  Clear ──────────────────► ClearCart ────────────► items = []           │
//! │  Cart Icon ──────────────► ToggleCart ───────────► is_open = !is_open   │
//! │                                                                         │
//! │  Item count and subtotal are derived on demand, never stored.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Row Identity
//! A row is identified by `(id, selected_panel)`. The same item with a
//! different panel is a different row.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Cart Key
// =============================================================================

/// Identifies one cart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartKey {
    /// Catalog item id.
    pub id: u32,
    /// Panel variant, if one was chosen.
    pub selected_panel: Option<u32>,
}

impl CartKey {
    pub const fn new(id: u32, selected_panel: Option<u32>) -> Self {
        CartKey { id, selected_panel }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row in the cart.
///
/// Title, image and category are copied from the catalog when the row is
/// created so the drawer renders without another lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: u32,
    pub title: String,
    /// Unit price.
    pub price: Money,
    pub image: String,
    pub category: String,
    pub selected_panel: Option<u32>,
    /// Always at least 1.
    pub quantity: u32,
}

impl LineItem {
    pub fn key(&self) -> CartKey {
        CartKey::new(self.id, self.selected_panel)
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// Payload of [`CartAction::AddItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewLineItem {
    pub id: u32,
    pub title: String,
    pub price: Money,
    pub image: String,
    pub category: String,
    pub selected_panel: Option<u32>,
    /// Quantity to add; 0 is treated as 1.
    pub quantity: u32,
}

impl NewLineItem {
    pub fn key(&self) -> CartKey {
        CartKey::new(self.id, self.selected_panel)
    }
}

impl From<NewLineItem> for LineItem {
    fn from(item: NewLineItem) -> Self {
        LineItem {
            id: item.id,
            title: item.title,
            price: item.price,
            image: item.image,
            category: item.category,
            selected_panel: item.selected_panel,
            quantity: item.quantity.max(1),
        }
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// Everything that can happen to the cart.
///
/// Serializes as `{ "type": "ADD_ITEM", "payload": { ... } }`, the shape the
/// frontend dispatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Merge into the matching row or append a new one.
    AddItem(NewLineItem),
    /// Drop the matching row; nothing happens if there is none.
    RemoveItem(CartKey),
    /// Set a row's quantity. Zero or less removes the row.
    UpdateQuantity {
        id: u32,
        #[serde(rename = "selectedPanel")]
        selected_panel: Option<u32>,
        quantity: i64,
    },
    /// Empty the cart. The drawer stays as it is.
    ClearCart,
    /// Open the drawer if closed, close it if open.
    ToggleCart,
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart contents and drawer visibility.
///
/// ## Invariants
/// - No two rows share a [`CartKey`]
/// - Every row has `quantity >= 1`
/// - Rows keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<LineItem>,
    is_open: bool,
}

impl CartState {
    /// An empty cart with the drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action. Never fails.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(new_item) => self.add_item(new_item),
            CartAction::RemoveItem(key) => self.remove_item(key),
            CartAction::UpdateQuantity {
                id,
                selected_panel,
                quantity,
            } => self.update_quantity(CartKey::new(id, selected_panel), quantity),
            CartAction::ClearCart => self.items.clear(),
            CartAction::ToggleCart => self.is_open = !self.is_open,
        }
    }

    fn position(&self, key: CartKey) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    fn add_item(&mut self, new_item: NewLineItem) {
        match self.position(new_item.key()) {
            Some(index) => {
                let row = &mut self.items[index];
                row.quantity = row.quantity.saturating_add(new_item.quantity.max(1));
            }
            None => self.items.push(new_item.into()),
        }
    }

    fn remove_item(&mut self, key: CartKey) {
        self.items.retain(|item| item.key() != key);
    }

    fn update_quantity(&mut self, key: CartKey, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(key);
            return;
        }
        if let Some(index) = self.position(key) {
            self.items[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Rows in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the drawer is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Looks up a row.
    pub fn find(&self, key: CartKey) -> Option<&LineItem> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Number of distinct rows.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Total quantity across all rows (the badge on the cart icon).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of every row's line total.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(id: u32, price: &str, panel: Option<u32>, quantity: u32) -> NewLineItem {
        NewLineItem {
            id,
            title: format!("Item {}", id),
            price: price.parse().unwrap(),
            image: format!("/item-{}.svg", id),
            category: "kimono".to_string(),
            selected_panel: panel,
            quantity,
        }
    }

    fn add(cart: &mut CartState, id: u32, price: &str, panel: Option<u32>, quantity: u32) {
        cart.apply(CartAction::AddItem(new_item(id, price, panel, quantity)));
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert!(!cart.is_open());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_adding_same_key_merges_quantity() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", Some(1), 1);
        add(&mut cart, 1, "$280", Some(1), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_different_panel_is_a_new_row() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", Some(1), 1);
        add(&mut cart, 1, "$280", Some(2), 1);

        assert_eq!(cart.line_count(), 2);
        assert!(cart.find(CartKey::new(1, Some(1))).is_some());
        assert!(cart.find(CartKey::new(1, Some(2))).is_some());
    }

    #[test]
    fn test_no_panel_differs_from_a_panel() {
        let mut cart = CartState::new();
        add(&mut cart, 3, "$120", None, 1);
        add(&mut cart, 3, "$120", Some(1), 1);
        add(&mut cart, 3, "$120", None, 1);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.find(CartKey::new(3, None)).unwrap().quantity, 2);
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let mut cart = CartState::new();
        add(&mut cart, 5, "$320", None, 1);
        add(&mut cart, 2, "$180", None, 1);
        add(&mut cart, 5, "$320", None, 1);

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn test_zero_quantity_add_is_clamped_to_one() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", None, 0);
        assert_eq!(cart.item_count(), 1);

        add(&mut cart, 1, "$280", None, 0);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_missing_row_is_noop() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", Some(1), 2);
        let before = cart.clone();

        cart.apply(CartAction::RemoveItem(CartKey::new(1, Some(9))));
        cart.apply(CartAction::RemoveItem(CartKey::new(7, None)));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_only_matching_row() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", Some(1), 1);
        add(&mut cart, 1, "$280", Some(2), 1);

        cart.apply(CartAction::RemoveItem(CartKey::new(1, Some(1))));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].selected_panel, Some(2));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartState::new();
        add(&mut cart, 2, "$180", None, 1);

        cart.apply(CartAction::UpdateQuantity {
            id: 2,
            selected_panel: None,
            quantity: 4,
        });
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_row() {
        let mut cart = CartState::new();
        add(&mut cart, 2, "$180", None, 3);

        cart.apply(CartAction::UpdateQuantity {
            id: 2,
            selected_panel: None,
            quantity: 0,
        });
        assert!(cart.is_empty());

        add(&mut cart, 2, "$180", None, 3);
        cart.apply(CartAction::UpdateQuantity {
            id: 2,
            selected_panel: None,
            quantity: -2,
        });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_missing_row_is_noop() {
        let mut cart = CartState::new();
        add(&mut cart, 2, "$180", None, 1);
        let before = cart.clone();

        cart.apply(CartAction::UpdateQuantity {
            id: 3,
            selected_panel: None,
            quantity: 5,
        });
        assert_eq!(cart, before);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", None, 2);
        add(&mut cart, 2, "$180", None, 3);

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", None, 2);
        add(&mut cart, 2, "$180", None, 1);

        assert_eq!(cart.subtotal(), Money::from_major_minor(740, 0));
    }

    #[test]
    fn test_clear_empties_items_but_keeps_drawer() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", Some(1), 2);
        add(&mut cart, 6, "$200", Some(3), 1);
        cart.apply(CartAction::ToggleCart);

        cart.apply(CartAction::ClearCart);

        assert!(cart.items().is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_open());
    }

    #[test]
    fn test_toggle_cart() {
        let mut cart = CartState::new();
        cart.apply(CartAction::ToggleCart);
        assert!(cart.is_open());
        cart.apply(CartAction::ToggleCart);
        assert!(!cart.is_open());
    }

    #[test]
    fn test_action_wire_format() {
        let action: CartAction = serde_json::from_str(
            r#"{"type":"UPDATE_QUANTITY","payload":{"id":1,"selectedPanel":2,"quantity":3}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            CartAction::UpdateQuantity {
                id: 1,
                selected_panel: Some(2),
                quantity: 3,
            }
        );

        let json = serde_json::to_value(CartAction::ToggleCart).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "TOGGLE_CART" }));
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let mut cart = CartState::new();
        add(&mut cart, 1, "$280", Some(1), 1);

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["isOpen"], false);
        assert_eq!(json["items"][0]["selectedPanel"], 1);
        assert_eq!(json["items"][0]["price"], 28000);
    }
}
