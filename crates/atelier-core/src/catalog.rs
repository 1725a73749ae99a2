//! # Catalog
//!
//! The shop's inventory, compiled in as constants. Nothing is fetched.
//!
//! ## Add-to-Cart Gate
//! ```text
//! item id ──► find_item ──► item.available? ──► panel in 1..=20? ──► panel.available?
//!                │                │                    │                   │
//!          ItemNotFound    ItemUnavailable     PanelOutOfRange     PanelUnavailable
//! ```
//!
//! Every item carries the same set of twenty panels. Which panels are out of
//! stock and what each costs on its own are fixed per item below.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogItem, Category, CategoryFilter, Panel};
use crate::PANEL_COUNT;

static ITEMS: [CatalogItem; 8] = [
    CatalogItem {
        id: 1,
        title: "Ethereal Kimono",
        category: Category::Kimono,
        price: Money::from_cents(28000),
        image: "/placeholder.svg?height=600&width=480&text=Ethereal+Kimono",
        available: true,
        description: "A flowing kimono featuring interchangeable panels that tell stories of ancient traditions and modern interpretations. Each panel represents a different cultural narrative.",
        video_url: Some("https://drive.google.com/file/d/1234567890abcdef/preview"),
    },
    CatalogItem {
        id: 2,
        title: "Memory Threads Pants",
        category: Category::Pants,
        price: Money::from_cents(18000),
        image: "/placeholder.svg?height=600&width=480&text=Memory+Threads+Pants",
        available: true,
        description: "Contemporary pants with removable panel sections that showcase textile heritage. Mix and match panels to create your own cultural story.",
        video_url: None,
    },
    CatalogItem {
        id: 3,
        title: "Cultural Stories Shirt",
        category: Category::Shirts,
        price: Money::from_cents(12000),
        image: "/placeholder.svg?height=600&width=480&text=Cultural+Stories+Shirt",
        available: true,
        description: "A versatile shirt design featuring detachable panels inspired by global textile traditions. Each panel carries the essence of different cultural expressions.",
        video_url: None,
    },
    CatalogItem {
        id: 4,
        title: "Trade Winds Hoodie",
        category: Category::Hoodies,
        price: Money::from_cents(16000),
        image: "/placeholder.svg?height=600&width=480&text=Trade+Winds+Hoodie",
        available: false,
        description: "Comfort meets culture in this hoodie with interchangeable panel system. Currently sold out due to high demand for its unique storytelling approach.",
        video_url: None,
    },
    CatalogItem {
        id: 5,
        title: "Ancestral Echoes Kimono",
        category: Category::Kimono,
        price: Money::from_cents(32000),
        image: "/placeholder.svg?height=600&width=480&text=Ancestral+Echoes+Kimono",
        available: true,
        description: "An elevated kimono design featuring premium panels that echo ancestral wisdom through contemporary textile art. A masterpiece of cultural fusion.",
        video_url: None,
    },
    CatalogItem {
        id: 6,
        title: "Woven Histories Pants",
        category: Category::Pants,
        price: Money::from_cents(20000),
        image: "/placeholder.svg?height=600&width=480&text=Woven+Histories+Pants",
        available: true,
        description: "Structured pants with modular panel system that celebrates the art of weaving across cultures. Each panel tells a story of craftsmanship and heritage.",
        video_url: None,
    },
    CatalogItem {
        id: 7,
        title: "Material Culture Shirt",
        category: Category::Shirts,
        price: Money::from_cents(14000),
        image: "/placeholder.svg?height=600&width=480&text=Material+Culture+Shirt",
        available: true,
        description: "A thoughtfully designed shirt exploring material culture through interchangeable panels. Perfect for those who appreciate cultural depth in fashion.",
        video_url: None,
    },
    CatalogItem {
        id: 8,
        title: "Border Stories Hoodie",
        category: Category::Hoodies,
        price: Money::from_cents(18000),
        image: "/placeholder.svg?height=600&width=480&text=Border+Stories+Hoodie",
        available: true,
        description: "A contemporary hoodie that challenges boundaries through its panel system. Each configuration tells a different story about cultural connections.",
        video_url: None,
    },
];

/// Out-of-stock panels per item id. Items not listed have every panel.
static SOLD_OUT_PANELS: &[(u32, &[u32])] = &[
    (1, &[4, 11, 17]),
    (2, &[2, 9, 13, 20]),
    (3, &[6, 15]),
    (5, &[3, 8, 12, 19]),
    (6, &[10, 14]),
    (7, &[5, 7, 16, 18]),
    (8, &[1, 12]),
];

// =============================================================================
// Item Lookup
// =============================================================================

/// Every catalog item, in shop order.
pub fn all_items() -> &'static [CatalogItem] {
    &ITEMS
}

/// Looks up an item by id.
pub fn find_item(id: u32) -> CoreResult<&'static CatalogItem> {
    ITEMS
        .iter()
        .find(|item| item.id == id)
        .ok_or(CoreError::ItemNotFound(id))
}

/// Items passing the shop page's category filter, in shop order.
///
/// ```rust
/// use atelier_core::catalog::items_in;
/// use atelier_core::types::CategoryFilter;
///
/// assert_eq!(items_in(CategoryFilter::All).len(), 8);
/// assert_eq!(items_in("kimono".parse().unwrap()).len(), 2);
/// ```
pub fn items_in(filter: CategoryFilter) -> Vec<&'static CatalogItem> {
    ITEMS
        .iter()
        .filter(|item| filter.matches(item.category))
        .collect()
}

// =============================================================================
// Panels
// =============================================================================

fn panel_in_stock(item_id: u32, panel_id: u32) -> bool {
    SOLD_OUT_PANELS
        .iter()
        .find(|(id, _)| *id == item_id)
        .map_or(true, |(_, sold_out)| !sold_out.contains(&panel_id))
}

/// Standalone price of a panel: $25 to $74.
fn panel_price(item_id: u32, panel_id: u32) -> Money {
    let dollars = 25 + (item_id * 11 + panel_id * 7) % 50;
    Money::from_major_minor(dollars as i64, 0)
}

const PANEL_DETAIL: &str = "This exquisite panel showcases the masterful artistry of traditional textile work, featuring hand-woven patterns that tell stories of ancient trade routes and cultural exchange. Each thread is carefully selected and dyed using traditional methods passed down through generations. The intricate motifs represent elements of nature, spirituality, and human connection, creating a visual narrative that speaks to the universal human experience while honoring specific cultural traditions.";

const PANEL_DIMENSIONS: &str = "24\" x 36\"";

const MATERIALS: [&str; 4] = ["Silk", "Cotton", "Linen", "Hemp"];

const SIGNIFICANCE: [&str; 4] = [
    "Represents the cycle of seasons and renewal",
    "Symbolizes protection and good fortune",
    "Depicts ancient trade route stories",
    "Celebrates harvest and abundance",
];

/// Workshops a panel can come from, paired with the artisan who works there.
const WORKSHOPS: [(&str, &str); 4] = [
    ("Kyoto, Japan", "Master Tanaka Hiroshi"),
    ("Varanasi, India", "Artisan Priya Sharma"),
    ("Istanbul, Turkey", "Craftsman Mehmet Özkan"),
    ("Marrakech, Morocco", "Weaver Fatima Al-Zahra"),
];

/// Picks one of four options from the item and panel ids. `stride` keeps
/// the attributes from moving in lockstep.
fn pick<T: Copy>(options: &[T; 4], item_id: u32, panel_id: u32, stride: u32) -> T {
    options[((item_id * stride + panel_id) % 4) as usize]
}

fn build_panel(item_id: u32, panel_id: u32) -> Panel {
    let (origin, artisan) = pick(&WORKSHOPS, item_id, panel_id, 3);

    Panel {
        id: panel_id,
        name: format!("Panel {}", panel_id),
        image: format!(
            "/placeholder.svg?height=400&width=400&text=Panel+{}",
            panel_id
        ),
        description: format!(
            "Panel {} represents a unique cultural narrative with intricate patterns.",
            panel_id
        ),
        detailed_description: PANEL_DETAIL,
        available: panel_in_stock(item_id, panel_id),
        price: panel_price(item_id, panel_id),
        material: pick(&MATERIALS, item_id, panel_id * 3, 1),
        dimensions: PANEL_DIMENSIONS,
        origin,
        cultural_significance: pick(&SIGNIFICANCE, item_id, panel_id * 5, 2),
        artisan,
    }
}

/// All panels offered for an item, numbered from 1.
pub fn panels_for(item: &CatalogItem) -> Vec<Panel> {
    (1..=PANEL_COUNT)
        .map(|panel_id| build_panel(item.id, panel_id))
        .collect()
}

/// A single panel of an item.
pub fn find_panel(item: &CatalogItem, panel_id: u32) -> CoreResult<Panel> {
    if !(1..=PANEL_COUNT).contains(&panel_id) {
        return Err(CoreError::PanelOutOfRange {
            panel: panel_id,
            max: PANEL_COUNT,
        });
    }
    Ok(build_panel(item.id, panel_id))
}

/// How many of an item's panels are in stock.
pub fn available_panel_count(item: &CatalogItem) -> usize {
    (1..=PANEL_COUNT)
        .filter(|panel_id| panel_in_stock(item.id, *panel_id))
        .count()
}

/// Checks whether an item (optionally with a panel) may go in the cart.
///
/// Mirrors the disabled state of the "Add to Cart" button: the item must be
/// available and so must the chosen panel.
pub fn check_addable(item_id: u32, panel_id: Option<u32>) -> CoreResult<&'static CatalogItem> {
    let item = find_item(item_id)?;

    if !item.available {
        return Err(CoreError::ItemUnavailable {
            title: item.title.to_string(),
        });
    }

    if let Some(panel_id) = panel_id {
        let panel = find_panel(item, panel_id)?;
        if !panel.available {
            return Err(CoreError::PanelUnavailable {
                title: item.title.to_string(),
                panel: panel_id,
            });
        }
    }

    Ok(item)
}

// =============================================================================
// Unit Tests
// =============================================================================
