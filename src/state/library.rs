use std::collections::HashSet;

use super::data::{seed_listings, Listing};
use super::filter::{filter_listings, sort_listings, FilterState};

/// The Library owns the catalog.
/// Listings are seeded once and never modified; the only mutable part is
/// the set of listings the user marked as favorite this session.
pub struct Library {
    listings: Vec<Listing>,
    favorites: HashSet<String>,
}

impl Library {
    /// Create a Library holding the hardcoded catalog
    pub fn seeded() -> Self {
        let library = Self::from_listings(seed_listings());
        log::debug!("Library seeded with {} listings", library.len());
        library
    }

    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Library {
            listings,
            favorites: HashSet::new(),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Get a count of listings in the library
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// The listings to display for a filter state: filtered, then ordered
    /// by the requested sort
    pub fn view(&self, state: &FilterState) -> Vec<&Listing> {
        let mut view = filter_listings(self.listings(), state);
        sort_listings(&mut view, state.sort);
        view
    }

    /// Flip the favorite flag of a listing.
    /// Returns the new flag; ids not in the catalog are ignored.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            log::warn!("Ignoring favorite toggle for unknown listing {}", id);
            return false;
        }

        if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Seeded likes plus the user's own like
    pub fn like_count(&self, listing: &Listing) -> u32 {
        listing.likes + u32::from(self.is_favorite(&listing.id))
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("listings", &self.listings.len())
            .field("favorites", &self.favorites)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::filter::{CategoryFilter, SortBy};

    #[test]
    fn test_view_filters_then_sorts() {
        let library = Library::seeded();
        let state = FilterState::default()
            .with_search("an")
            .with_sort(SortBy::PriceLow);

        let ids: Vec<&str> = library.view(&state).iter().map(|l| l.id.as_str()).collect();
        // "an" hits Handwoven, Tanaka and Handmade
        assert_eq!(ids, vec!["6", "3", "1"]);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut library = Library::seeded();
        let bowl = library.get("6").cloned().unwrap();

        assert_eq!(library.like_count(&bowl), 15);
        assert!(library.toggle_favorite("6"));
        assert!(library.is_favorite("6"));
        assert_eq!(library.like_count(&bowl), 16);
        assert_eq!(library.favorite_count(), 1);

        assert!(!library.toggle_favorite("6"));
        assert_eq!(library.like_count(&bowl), 15);
        assert_eq!(library.favorite_count(), 0);
    }

    #[test]
    fn test_unknown_favorite_ignored() {
        let mut library = Library::seeded();

        assert!(!library.toggle_favorite("42"));
        assert_eq!(library.favorite_count(), 0);
    }

    #[test]
    fn test_favorites_do_not_touch_listings() {
        let mut library = Library::seeded();
        let before = library.listings().to_vec();

        library.toggle_favorite("1");
        library.toggle_favorite("4");
        let _ = library.view(&FilterState::default().with_category(CategoryFilter::parse("Jewelry")));

        assert_eq!(library.listings(), before.as_slice());
    }
}
