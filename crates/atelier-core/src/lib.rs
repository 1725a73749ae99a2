//! # atelier-core: Pure Shop Logic for the Atelier Storefront
//!
//! This crate holds everything the shop pages compute: the cart reducer,
//! money handling, the embedded catalog and portfolio, checkout totals and
//! form checks.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Atelier Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │    Shop ──► Item Detail ──► Cart Drawer ──► Checkout            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    add_to_cart, toggle_cart_drawer, submit_checkout, etc.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atelier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌───────┐  │   │
//! │  │   │  money  │ │ catalog │ │  cart   │ │ checkout │ │ forms │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └───────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents and display-string parsing
//! - [`types`] - Shared domain types (Category, Panel, TaxRate, ...)
//! - [`catalog`] - The embedded shop catalog
//! - [`cart`] - Cart state and its reducer
//! - [`checkout`] - Shipping, tax and total derivation
//! - [`forms`] - Contact and checkout form payloads
//! - [`validation`] - Field-level validation rules
//! - [`works`] - The portfolio shown on the Work page
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use atelier_core::cart::{CartAction, CartState, NewLineItem};
//! use atelier_core::money::Money;
//!
//! let mut cart = CartState::default();
//! cart.apply(CartAction::AddItem(NewLineItem {
//!     id: 1,
//!     title: "Ethereal Kimono".to_string(),
//!     price: "$280".parse().unwrap(),
//!     image: "/kimono.svg".to_string(),
//!     category: "kimono".to_string(),
//!     selected_panel: Some(3),
//!     quantity: 2,
//! }));
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal(), Money::from_major_minor(560, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod forms;
pub mod money;
pub mod types;
pub mod validation;
pub mod works;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartKey, CartState, LineItem, NewLineItem};
pub use checkout::CheckoutTotals;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of interchangeable panels offered for every catalog item.
pub const PANEL_COUNT: u32 = 20;

/// Flat shipping charge applied at checkout ($25.00).
pub const DEFAULT_SHIPPING: Money = Money::from_cents(2500);

/// Sales tax applied at checkout, in basis points (800 = 8%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;
