//! # Cart Commands
//!
//! Commands the shop pages call to read and change the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Drawer  │────►│ Checkout │       │
//! │  │  Cart    │     │          │     │  Open    │     │   Page   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────► (back to empty)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::catalog::check_addable;
use atelier_core::validation::clamp_quantity;
use atelier_core::{CartAction, CartKey, CartState, LineItem, NewLineItem};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{CartStore, CartTotals};

/// Cart response including items, totals and drawer state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    pub is_open: bool,
}

impl From<&CartState> for CartResponse {
    fn from(cart: &CartState) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            is_open: cart.is_open(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a catalog item to the cart.
///
/// ## Behavior
/// - Same item and panel already in cart: quantity increases
/// - Otherwise: appended as a new row
/// - Title, price, image and category are copied from the catalog
/// - Quantity defaults to 1 and is clamped to at least 1
///
/// ## User Workflow
/// ```text
/// Item page: Panel 3, Qty 2, click "Add to Cart"
///      │
///      ▼
/// add_to_cart(item_id: 1, selected_panel: Some(3), quantity: Some(2))
///      │
///      ├── item unknown?          → NOT_FOUND
///      ├── item or panel sold out → UNAVAILABLE
///      │
///      ▼
/// dispatch(AddItem) → updated cart
/// ```
pub fn add_to_cart(
    cart: &mut CartStore,
    item_id: u32,
    selected_panel: Option<u32>,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = clamp_quantity(quantity.unwrap_or(1));
    debug!(item_id, ?selected_panel, quantity, "add_to_cart command");

    let item = check_addable(item_id, selected_panel).map_err(|e| {
        warn!(item_id, ?selected_panel, error = %e, "add_to_cart rejected");
        ApiError::from(e)
    })?;

    cart.dispatch(CartAction::AddItem(NewLineItem {
        id: item.id,
        title: item.title.to_string(),
        price: item.price,
        image: item.image.to_string(),
        category: item.category.to_string(),
        selected_panel,
        quantity,
    }));

    Ok(get_cart(cart))
}

/// Sets the quantity of a cart row. Zero or less removes the row.
pub fn update_cart_item(
    cart: &mut CartStore,
    item_id: u32,
    selected_panel: Option<u32>,
    quantity: i64,
) -> CartResponse {
    debug!(item_id, ?selected_panel, quantity, "update_cart_item command");
    cart.dispatch(CartAction::UpdateQuantity {
        id: item_id,
        selected_panel,
        quantity,
    });
    get_cart(cart)
}

/// Removes a cart row. Removing a row that isn't there is not an error.
pub fn remove_from_cart(
    cart: &mut CartStore,
    item_id: u32,
    selected_panel: Option<u32>,
) -> CartResponse {
    debug!(item_id, ?selected_panel, "remove_from_cart command");
    cart.dispatch(CartAction::RemoveItem(CartKey::new(item_id, selected_panel)));
    get_cart(cart)
}

/// Empties the cart.
pub fn clear_cart(cart: &mut CartStore) -> CartResponse {
    debug!("clear_cart command");
    cart.dispatch(CartAction::ClearCart);
    get_cart(cart)
}

/// Opens or closes the cart drawer.
pub fn toggle_cart_drawer(cart: &mut CartStore) -> CartResponse {
    debug!("toggle_cart_drawer command");
    cart.dispatch(CartAction::ToggleCart);
    get_cart(cart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_add_to_cart_copies_catalog_data() {
        let mut store = CartStore::new();
        let response = add_to_cart(&mut store, 1, Some(1), None).unwrap();

        assert_eq!(response.items.len(), 1);
        let row = &response.items[0];
        assert_eq!(row.title, "Ethereal Kimono");
        assert_eq!(row.category, "kimono");
        assert_eq!(row.price.cents(), 28000);
        assert_eq!(row.quantity, 1);
    }

    #[test]
    fn test_add_same_panel_twice_merges() {
        let mut store = CartStore::new();
        add_to_cart(&mut store, 1, Some(1), Some(1)).unwrap();
        let response = add_to_cart(&mut store, 1, Some(1), Some(2)).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 3);
    }

    #[test]
    fn test_add_clamps_quantity() {
        let mut store = CartStore::new();
        let response = add_to_cart(&mut store, 2, None, Some(-5)).unwrap();
        assert_eq!(response.totals.item_count, 1);
    }

    #[test]
    fn test_add_sold_out_item_is_rejected() {
        let mut store = CartStore::new();
        let err = add_to_cart(&mut store, 4, Some(1), None).unwrap_err();

        assert_eq!(err.code, ErrorCode::Unavailable);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_sold_out_panel_is_rejected() {
        let mut store = CartStore::new();
        let err = add_to_cart(&mut store, 1, Some(4), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unavailable);
    }

    #[test]
    fn test_add_unknown_item() {
        let mut store = CartStore::new();
        let err = add_to_cart(&mut store, 99, None, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_update_remove_clear() {
        let mut store = CartStore::new();
        add_to_cart(&mut store, 1, Some(1), Some(2)).unwrap();
        add_to_cart(&mut store, 2, Some(3), Some(3)).unwrap();
        assert_eq!(get_cart(&store).totals.item_count, 5);

        let response = update_cart_item(&mut store, 2, Some(3), 0);
        assert_eq!(response.items.len(), 1);

        let response = remove_from_cart(&mut store, 7, None);
        assert_eq!(response.items.len(), 1);

        let response = clear_cart(&mut store);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.item_count, 0);
    }

    #[test]
    fn test_toggle_drawer() {
        let mut store = CartStore::new();
        assert!(toggle_cart_drawer(&mut store).is_open);
        assert!(!toggle_cart_drawer(&mut store).is_open);
    }
}
