//! # Works Commands
//!
//! The portfolio for the Work page and the home page's "Selected Works".

use atelier_core::works::{all_works, featured_works};
use atelier_core::Work;
use tracing::debug;

/// Lists portfolio pieces, newest first.
///
/// ## Arguments
/// * `featured_only` - `true` for the home page's selection
pub fn list_works(featured_only: bool) -> Vec<Work> {
    debug!(featured_only, "list_works command");
    if featured_only {
        featured_works().cloned().collect()
    } else {
        all_works().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_works() {
        assert_eq!(list_works(false).len(), 6);

        let featured = list_works(true);
        let titles: Vec<&str> = featured.iter().map(|w| w.title).collect();
        assert_eq!(titles, vec!["Memory Threads", "Trade Winds", "Material Stories"]);
    }
}
