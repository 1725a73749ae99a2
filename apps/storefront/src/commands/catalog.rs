//! # Catalog Commands
//!
//! Read-only views of the compiled-in catalog for the shop grid and the
//! item page.

use atelier_core::catalog::{available_panel_count, find_item, find_panel, items_in, panels_for};
use atelier_core::{CatalogItem, Category, CategoryFilter, Money, Panel, PANEL_COUNT};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;

/// Panels shown per page of the item page's gallery.
pub const PANELS_PER_PAGE: usize = 8;

/// One card on the shop grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub price: Money,
    /// Price as the card shows it, e.g. "$280"
    pub price_label: String,
    pub image: &'static str,
    pub available: bool,
}

impl From<&CatalogItem> for ItemSummary {
    fn from(item: &CatalogItem) -> Self {
        ItemSummary {
            id: item.id,
            title: item.title,
            category: item.category,
            price: item.price,
            price_label: item.price.format_compact(),
            image: item.image,
            available: item.available,
        }
    }
}

/// The shop grid after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogListing {
    /// Dropdown label for the active filter
    pub filter_label: &'static str,
    pub items: Vec<ItemSummary>,
}

/// Everything the item page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    #[serde(flatten)]
    pub summary: ItemSummary,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<&'static str>,
    pub panel_count: u32,
    pub available_panels: usize,
}

/// One page of the panel gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPage {
    pub start: usize,
    pub panels: Vec<Panel>,
    /// Where the "next" arrow leads; wraps back to the start
    pub next_start: usize,
}

/// Lists items for the shop grid.
///
/// ## Arguments
/// * `category` - `"all"`, a category slug, or `None` for all
pub fn list_catalog(category: Option<&str>) -> Result<CatalogListing, ApiError> {
    debug!(?category, "list_catalog command");

    let filter: CategoryFilter = match category {
        Some(slug) => slug.parse()?,
        None => CategoryFilter::All,
    };

    Ok(CatalogListing {
        filter_label: filter.label(),
        items: items_in(filter).into_iter().map(ItemSummary::from).collect(),
    })
}

/// Gets one item for the item page.
pub fn get_catalog_item(item_id: u32) -> Result<ItemDetail, ApiError> {
    debug!(item_id, "get_catalog_item command");
    let item = find_item(item_id)?;

    Ok(ItemDetail {
        summary: ItemSummary::from(item),
        description: item.description,
        video_url: item.video_url,
        panel_count: PANEL_COUNT,
        available_panels: available_panel_count(item),
    })
}

/// Gets a page of the panel gallery.
///
/// The gallery advances eight panels at a time and wraps around, so with
/// twenty panels the starts run 0, 8, 16, 4, 12, 0, ...
pub fn list_panels(item_id: u32, start: usize) -> Result<PanelPage, ApiError> {
    debug!(item_id, start, "list_panels command");
    let item = find_item(item_id)?;
    let panels = panels_for(item);

    let max_start = panels.len().saturating_sub(PANELS_PER_PAGE);
    let cycle = max_start + PANELS_PER_PAGE;
    let start = start % cycle;

    Ok(PanelPage {
        start,
        panels: panels.into_iter().skip(start).take(PANELS_PER_PAGE).collect(),
        next_start: (start + PANELS_PER_PAGE) % cycle,
    })
}

/// Gets one panel for the detail modal.
pub fn get_panel(item_id: u32, panel_id: u32) -> Result<Panel, ApiError> {
    debug!(item_id, panel_id, "get_panel command");
    let item = find_item(item_id)?;
    Ok(find_panel(item, panel_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_all() {
        let listing = list_catalog(None).unwrap();
        assert_eq!(listing.items.len(), 8);
        assert_eq!(listing.filter_label, "All Items");
        assert_eq!(listing.items[0].price_label, "$280");
    }

    #[test]
    fn test_list_by_category() {
        let listing = list_catalog(Some("shirts")).unwrap();
        let titles: Vec<&str> = listing.items.iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["Cultural Stories Shirt", "Material Culture Shirt"]);
        assert_eq!(listing.filter_label, "Shirts");
    }

    #[test]
    fn test_list_unknown_category() {
        let err = list_catalog(Some("socks")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields, vec!["category"]);
    }

    #[test]
    fn test_get_catalog_item() {
        let detail = get_catalog_item(4).unwrap();
        assert_eq!(detail.summary.title, "Trade Winds Hoodie");
        assert!(!detail.summary.available);
        assert_eq!(detail.panel_count, 20);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["title"], "Trade Winds Hoodie");
        assert_eq!(json["priceLabel"], "$160");

        assert_eq!(get_catalog_item(0).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_panel_gallery_wraps() {
        let mut start = 0;
        let mut starts = Vec::new();
        for _ in 0..5 {
            let page = list_panels(1, start).unwrap();
            starts.push(page.start);
            start = page.next_start;
        }
        assert_eq!(starts, vec![0, 8, 16, 4, 12]);
        assert_eq!(start, 0);

        let page = list_panels(1, 16).unwrap();
        let ids: Vec<u32> = page.panels.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![17, 18, 19, 20]);
    }

    #[test]
    fn test_get_panel_for_modal() {
        let panel = get_panel(1, 1).unwrap();
        assert_eq!(panel.origin, "Kyoto, Japan");
        assert_eq!(panel.artisan, "Master Tanaka Hiroshi");

        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["culturalSignificance"], "Celebrates harvest and abundance");
        assert!(json["detailedDescription"].is_string());

        assert_eq!(get_panel(1, 21).unwrap_err().code, ErrorCode::Unavailable);
        assert_eq!(get_panel(99, 1).unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_item_detail_video() {
        let json = serde_json::to_value(get_catalog_item(1).unwrap()).unwrap();
        assert!(json["videoUrl"].as_str().unwrap().starts_with("https://"));

        let json = serde_json::to_value(get_catalog_item(3).unwrap()).unwrap();
        assert!(json.get("videoUrl").is_none());
    }
}
