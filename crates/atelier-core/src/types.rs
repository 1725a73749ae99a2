//! # Domain Types
//!
//! Shared domain types for the shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │     Panel       │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (1..=20)    │   │  Kimono         │       │
//! │  │  title          │   │  name           │   │  Pants          │       │
//! │  │  price (Money)  │   │  price (Money)  │   │  Shirts         │       │
//! │  │  available      │   │  available      │   │  Hoodies        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │ CategoryFilter  │                             │
//! │  │  bps (u32)      │   │  All            │                             │
//! │  │  800 = 8%       │   │  Only(Category) │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Garment category used to group and filter the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Kimono,
    Pants,
    Shirts,
    Hoodies,
}

impl Category {
    /// Every category, in the order the shop's filter lists them.
    pub const ALL: [Category; 4] = [
        Category::Pants,
        Category::Kimono,
        Category::Shirts,
        Category::Hoodies,
    ];

    /// Lowercase slug, as stored on line items.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Kimono => "kimono",
            Category::Pants => "pants",
            Category::Shirts => "shirts",
            Category::Hoodies => "hoodies",
        }
    }

    /// Capitalised label for the filter dropdown.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Kimono => "Kimono",
            Category::Pants => "Pants",
            Category::Shirts => "Shirts",
            Category::Hoodies => "Hoodies",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("unknown category '{}'", s.trim()),
            })
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The shop page's category selector: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether an item of `category` passes the filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Label shown in the dropdown ("All Items", "Kimono", ...).
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Items",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A piece offered in the shop.
///
/// Catalog data is compiled in; see [`crate::catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub price: Money,
    pub image: &'static str,
    /// Display-only stock flag; sold-out items cannot be added to the cart.
    pub available: bool,
    pub description: &'static str,
    /// Embeddable process video shown under the item image, if there is one.
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<&'static str>,
}

// =============================================================================
// Panel
// =============================================================================

/// An interchangeable panel for a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    /// 1-based panel number, as shown in the "Panel (1-20)" selector.
    pub id: u32,
    pub name: String,
    pub image: String,
    pub description: String,
    /// Long-form text for the panel detail modal.
    pub detailed_description: &'static str,
    pub available: bool,
    pub price: Money,
    pub material: &'static str,
    pub dimensions: &'static str,
    pub origin: &'static str,
    pub cultural_significance: &'static str,
    pub artisan: &'static str,
}

// =============================================================================
// Work
// =============================================================================

/// A portfolio piece on the Work page. Not for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub title: &'static str,
    pub year: u16,
    pub medium: &'static str,
    /// Free text: "45 minutes", "120 x 180 cm", ...
    pub dimensions: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    /// Shown in "Selected Works" on the home page.
    pub featured: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
