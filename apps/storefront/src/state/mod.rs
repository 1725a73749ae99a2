//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │      CartStore       │        │     StoreConfig      │              │
//! │  │                      │        │                      │              │
//! │  │  CartState (owned)   │        │  shipping            │              │
//! │  │  dispatch(action)    │        │  tax_rate            │              │
//! │  │                      │        │  currency            │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! │                                                                         │
//! │  CartStore: mutated only via dispatch, lives for the session           │
//! │  StoreConfig: read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartStore, CartTotals};
pub use config::StoreConfig;
