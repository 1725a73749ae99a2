//! # Atelier Storefront Library
//!
//! Session state and commands behind the Atelier shop pages.
//! The web frontend binds to the commands; all shop rules live in
//! `atelier-core`.
//!
//! ## Module Organization
//! ```text
//! atelier_storefront/
//! ├── lib.rs          ◄─── You are here (Storefront, tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store (dispatch)
//! │   └── config.rs   ◄─── Shipping, tax, currency
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports, SubmissionReceipt
//! │   ├── catalog.rs  ◄─── Shop grid and item page
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Order summary and checkout form
//! │   ├── contact.rs  ◄─── Contact form
//! │   └── works.rs    ◄─── Portfolio
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  init_tracing() ──► Storefront::from_env() ──► commands borrow parts    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │  cart: CartStore     │        │  config: StoreConfig │              │
//! │  │  (empty at start)    │        │  (env + defaults)    │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! │                                                                         │
//! │  Dropping the Storefront ends the session; the cart is not persisted.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use atelier_storefront::commands::{cart, checkout};
//! use atelier_storefront::Storefront;
//!
//! let mut shop = Storefront::default();
//! cart::add_to_cart(&mut shop.cart, 1, Some(1), Some(2)).unwrap();
//!
//! let summary = checkout::get_checkout_summary(&shop.cart, &shop.config);
//! assert_eq!(summary.formatted.total, "$629.80");
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CartStore, StoreConfig};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,atelier=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=atelier_storefront=trace` - Trace the storefront only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// One visitor's session: their cart plus the store settings.
#[derive(Debug, Default)]
pub struct Storefront {
    pub cart: CartStore,
    pub config: StoreConfig,
}

impl Storefront {
    /// Starts a session with an empty cart.
    pub fn new(config: StoreConfig) -> Self {
        info!(
            store = %config.store_name,
            shipping = %config.format_currency(config.shipping),
            tax_bps = config.tax_rate.bps(),
            "Storefront session started"
        );

        Storefront {
            cart: CartStore::new(),
            config,
        }
    }

    /// Starts a session configured from `ATELIER_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(StoreConfig::from_env())
    }
}
