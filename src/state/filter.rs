/// Catalog filtering
///
/// The filter state is a plain value owned by the caller. Every UI event
/// replaces it with an updated copy, and the visible catalog is recomputed
/// from scratch with [`filter_listings`].
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::data::{Category, Listing};

/// Which category the catalog is narrowed to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "All" sentinel, matches every listing
    #[default]
    All,
    Only(Category),
    /// A name outside the enumeration; matches nothing
    Unknown(String),
}

impl CategoryFilter {
    /// Interpret a category name as shown on the category chips
    pub fn parse(name: &str) -> Self {
        if name == "All" {
            return CategoryFilter::All;
        }
        match name.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unknown(name.to_string()),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
            CategoryFilter::Unknown(name) => f.write_str(name),
        }
    }
}

/// Requested ordering of the catalog
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Popular,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Newest,
        SortBy::PriceLow,
        SortBy::PriceHigh,
        SortBy::Popular,
    ];

    fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortBy::Newest => Ordering::Equal,
            SortBy::PriceLow => a.price.total_cmp(&b.price),
            SortBy::PriceHigh => b.price.total_cmp(&a.price),
            SortBy::Popular => b.likes.cmp(&a.likes),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortBy::Newest => "Newest First",
            SortBy::PriceLow => "Price: Low to High",
            SortBy::PriceHigh => "Price: High to Low",
            SortBy::Popular => "Most Popular",
        };
        f.write_str(label)
    }
}

/// The (category, search term, sort) tuple driving the catalog display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortBy,
}

impl FilterState {
    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_sort(self, sort: SortBy) -> Self {
        Self { sort, ..self }
    }

    /// Back to "All" with an empty search, keeping the chosen sort
    pub fn cleared(self) -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            ..self
        }
    }
}

/// Select the listings matching both the category and the search term.
///
/// The search is a case-insensitive substring match against the title or
/// the artist; an empty term matches everything. Survivors keep their
/// relative source order. The sort field is not consulted here, see
/// [`sort_listings`].
pub fn filter_listings<'a>(listings: &'a [Listing], state: &FilterState) -> Vec<&'a Listing> {
    let needle = state.search.to_lowercase();

    listings
        .iter()
        .filter(|listing| state.category.matches(listing.category))
        .filter(|listing| {
            listing.title.to_lowercase().contains(&needle)
                || listing.artist.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Reorder an already filtered view. Stable: ties keep their current order,
/// so `Newest` leaves the view untouched.
pub fn sort_listings(view: &mut [&Listing], sort: SortBy) {
    view.sort_by(|a, b| sort.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::seed_listings;

    fn ids(view: &[&Listing]) -> Vec<String> {
        view.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_pottery_only() {
        let listings = seed_listings();
        let state = FilterState::default().with_category(CategoryFilter::parse("Pottery"));

        let view = filter_listings(&listings, &state);
        assert_eq!(ids(&view), vec!["6"]);
        assert_eq!(view[0].title, "Handmade Pottery Bowl");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let listings = seed_listings();
        let state = FilterState::default().with_search("silk");

        let view = filter_listings(&listings, &state);
        assert_eq!(ids(&view), vec!["1"]);

        let upper = FilterState::default().with_search("SILK");
        assert_eq!(filter_listings(&listings, &upper), view);
    }

    #[test]
    fn test_search_matches_artist() {
        let listings = seed_listings();
        let state = FilterState::default().with_search("tanaka");

        assert_eq!(ids(&filter_listings(&listings, &state)), vec!["3"]);
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let listings = seed_listings();
        let state = FilterState::default()
            .with_category(CategoryFilter::Only(Category::Jewelry))
            .with_search("bowl");

        assert!(filter_listings(&listings, &state).is_empty());
    }

    #[test]
    fn test_empty_search_keeps_everything_in_order() {
        let listings = seed_listings();
        let view = filter_listings(&listings, &FilterState::default());

        assert_eq!(ids(&view), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let listings = seed_listings();
        let state = FilterState::default().with_category(CategoryFilter::parse("Glasswork"));

        assert_eq!(state.category, CategoryFilter::Unknown("Glasswork".to_string()));
        assert!(filter_listings(&listings, &state).is_empty());
    }

    #[test]
    fn test_every_category_partition() {
        let listings = seed_listings();

        for category in Category::ALL {
            let state = FilterState::default().with_category(CategoryFilter::Only(category));
            let view = filter_listings(&listings, &state);
            assert!(view.iter().all(|l| l.category == category));
            assert_eq!(
                view.len(),
                listings.iter().filter(|l| l.category == category).count()
            );
        }
    }

    #[test]
    fn test_filter_is_idempotent_and_order_preserving() {
        let listings = seed_listings();
        let state = FilterState::default().with_search("a");

        let once: Vec<Listing> = filter_listings(&listings, &state)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_listings(&once, &state);
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(once.iter()).all(|(a, b)| *a == b));

        // Output positions are strictly increasing in the source
        let positions: Vec<usize> = once
            .iter()
            .map(|l| listings.iter().position(|s| s.id == l.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_ignores_sort() {
        let listings = seed_listings();
        let state = FilterState::default().with_sort(SortBy::PriceHigh);

        assert_eq!(
            ids(&filter_listings(&listings, &state)),
            vec!["1", "2", "3", "4", "5", "6"]
        );
    }

    #[test]
    fn test_sort_orders() {
        let listings = seed_listings();

        let mut view = filter_listings(&listings, &FilterState::default());
        sort_listings(&mut view, SortBy::PriceLow);
        assert_eq!(ids(&view), vec!["6", "2", "4", "3", "1", "5"]);

        sort_listings(&mut view, SortBy::PriceHigh);
        assert_eq!(ids(&view), vec!["5", "1", "3", "4", "2", "6"]);

        sort_listings(&mut view, SortBy::Popular);
        assert_eq!(ids(&view), vec!["4", "5", "3", "1", "2", "6"]);
    }

    #[test]
    fn test_newest_keeps_current_order() {
        let listings = seed_listings();
        let mut view = filter_listings(&listings, &FilterState::default());
        view.reverse();

        sort_listings(&mut view, SortBy::Newest);
        assert_eq!(ids(&view), vec!["6", "5", "4", "3", "2", "1"]);
    }

    #[test]
    fn test_cleared_keeps_sort() {
        let state = FilterState::default()
            .with_category(CategoryFilter::Only(Category::Textiles))
            .with_search("silk")
            .with_sort(SortBy::Popular)
            .cleared();

        assert!(state.category.is_all());
        assert!(state.search.is_empty());
        assert_eq!(state.sort, SortBy::Popular);
    }
}
