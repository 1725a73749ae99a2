//! # Works
//!
//! The artist's portfolio for the Work page, compiled in like the catalog.
//! Works are shown, never sold, so nothing here touches the cart.
//!
//! ```text
//! Work page ──────► all_works()       six pieces, newest first
//! Home page ──────► featured_works()  "Selected Works", first three
//! ```

use crate::types::Work;

static WORKS: [Work; 6] = [
    Work {
        title: "Memory Threads",
        year: 2024,
        medium: "Textile Installation",
        dimensions: "Variable dimensions",
        image: "/placeholder.svg?height=600&width=800&text=Memory+Threads",
        description: "An immersive installation exploring the tactile memories embedded in traditional textiles.",
        featured: true,
    },
    Work {
        title: "Trade Winds",
        year: 2023,
        medium: "Documentary Film",
        dimensions: "45 minutes",
        image: "/placeholder.svg?height=600&width=800&text=Trade+Winds",
        description: "A documentary examining the cultural exchange along ancient trade routes.",
        featured: true,
    },
    Work {
        title: "Material Stories",
        year: 2023,
        medium: "Mixed Media",
        dimensions: "120 x 180 cm",
        image: "/placeholder.svg?height=600&width=800&text=Material+Stories",
        description: "Mixed media works that investigate the narratives held within everyday objects.",
        featured: true,
    },
    Work {
        title: "Ancestral Echoes",
        year: 2022,
        medium: "Video Installation",
        dimensions: "3-channel video, 12 minutes",
        image: "/placeholder.svg?height=600&width=800&text=Ancestral+Echoes",
        description: "A multi-channel video installation exploring generational memory and cultural transmission.",
        featured: false,
    },
    Work {
        title: "Woven Histories",
        year: 2022,
        medium: "Textile Series",
        dimensions: "Series of 12, 60 x 80 cm each",
        image: "/placeholder.svg?height=600&width=800&text=Woven+Histories",
        description: "A series of textile works that map historical trade connections through material culture.",
        featured: false,
    },
    Work {
        title: "Cultural Cartography",
        year: 2021,
        medium: "Interactive Installation",
        dimensions: "Room-sized installation",
        image: "/placeholder.svg?height=600&width=800&text=Cultural+Cartography",
        description: "An interactive installation that allows visitors to explore cultural connections through touch and movement.",
        featured: false,
    },
];

/// The whole portfolio, newest first.
pub fn all_works() -> &'static [Work] {
    &WORKS
}

/// The pieces highlighted on the home page.
///
/// ```rust
/// use atelier_core::works::featured_works;
///
/// let titles: Vec<&str> = featured_works().map(|w| w.title).collect();
/// assert_eq!(titles, ["Memory Threads", "Trade Winds", "Material Stories"]);
/// ```
pub fn featured_works() -> impl Iterator<Item = &'static Work> {
    WORKS.iter().filter(|work| work.featured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let years: Vec<u16> = all_works().iter().map(|w| w.year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
        assert_eq!(all_works().len(), 6);
    }

    #[test]
    fn test_featured_subset() {
        assert_eq!(featured_works().count(), 3);
        assert!(featured_works().all(|w| all_works().contains(w)));
    }

    #[test]
    fn test_work_shape() {
        let json = serde_json::to_value(&all_works()[1]).unwrap();
        assert_eq!(json["title"], "Trade Winds");
        assert_eq!(json["year"], 2023);
        assert_eq!(json["dimensions"], "45 minutes");
    }
}
