//! # Commands Module
//!
//! All commands exposed to the web frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports, SubmissionReceipt)
//! ├── catalog.rs   ◄─── Shop grid, item page, panel gallery
//! ├── cart.rs      ◄─── Cart manipulation, drawer
//! ├── checkout.rs  ◄─── Order summary, checkout form
//! ├── contact.rs   ◄─── Contact form
//! └── works.rs     ◄─── Portfolio
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Page                         Command                    Response       │
//! │  ────                         ───────                    ────────       │
//! │  Shop grid ─────────────────► list_catalog(category) ──► CatalogListing │
//! │  Item page ─────────────────► get_catalog_item(id) ────► ItemDetail     │
//! │  "Add to Cart" ─────────────► add_to_cart(&mut store) ─► CartResponse   │
//! │  Checkout page ─────────────► get_checkout_summary() ──► CheckoutSummary│
//! │                                                                         │
//! │  Each command borrows only what it needs:                               │
//! │    &CartStore      read the cart                                        │
//! │    &mut CartStore  change the cart                                      │
//! │    &StoreConfig    shipping, tax and currency                           │
//! │                                                                         │
//! │  Failures come back as ApiError { code, message, fields }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod works;

use atelier_core::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Acknowledgement for an accepted form.
///
/// Nothing is sent anywhere; the reference only ties the log line to the
/// confirmation the visitor sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// Order total; `None` for contact messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,
}

impl SubmissionReceipt {
    pub(crate) fn new(total: Option<Money>) -> Self {
        SubmissionReceipt {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            total,
        }
    }
}
