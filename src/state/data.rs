/// Shared data structures for the application state
///
/// These structs represent the catalog model that flows between
/// the library and the UI layer.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Classification tag carried by every listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pottery,
    Textiles,
    Woodwork,
    Jewelry,
    Paintings,
    Sculptures,
    Metalwork,
    Ceramics,
}

impl Category {
    /// Every category, in the order the category chips are shown
    pub const ALL: [Category; 8] = [
        Category::Pottery,
        Category::Textiles,
        Category::Woodwork,
        Category::Jewelry,
        Category::Paintings,
        Category::Sculptures,
        Category::Metalwork,
        Category::Ceramics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Pottery => "Pottery",
            Category::Textiles => "Textiles",
            Category::Woodwork => "Woodwork",
            Category::Jewelry => "Jewelry",
            Category::Paintings => "Paintings",
            Category::Sculptures => "Sculptures",
            Category::Metalwork => "Metalwork",
            Category::Ceramics => "Ceramics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Represents a single marketplace item
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Unique identifier (e.g., "1")
    pub id: String,
    /// Display name of the piece
    pub title: String,
    /// Creator display name
    pub artist: String,
    pub category: Category,
    /// Price in dollars, never negative
    pub price: f64,
    /// URI of the product photo
    pub image: String,
    pub description: String,
    /// Seeded like counter
    pub likes: u32,
}

impl Listing {
    #[allow(clippy::too_many_arguments)]
    fn seed(
        id: &str,
        title: &str,
        artist: &str,
        category: Category,
        price: f64,
        image: &str,
        description: &str,
        likes: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            category,
            price,
            image: image.to_string(),
            description: description.to_string(),
            likes,
        }
    }
}

const TAPESTRY_IMAGE: &str =
    "https://images.pexels.com/photos/6195125/pexels-photo-6195125.jpeg?auto=compress&cs=tinysrgb&w=500";
const STUDIO_IMAGE: &str =
    "https://images.pexels.com/photos/1047540/pexels-photo-1047540.jpeg?auto=compress&cs=tinysrgb&w=500";
const JEWELRY_IMAGE: &str =
    "https://images.pexels.com/photos/1454171/pexels-photo-1454171.jpeg?auto=compress&cs=tinysrgb&w=500";
const PAINTING_IMAGE: &str =
    "https://images.pexels.com/photos/1266808/pexels-photo-1266808.jpeg?auto=compress&cs=tinysrgb&w=500";

/// The hardcoded catalog, newest first
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing::seed(
            "1",
            "Handwoven Silk Tapestry",
            "Maya Patel",
            Category::Textiles,
            450.0,
            TAPESTRY_IMAGE,
            "Beautiful traditional silk tapestry with intricate patterns passed down through generations.",
            24,
        ),
        Listing::seed(
            "2",
            "Ceramic Vase Collection",
            "Roberto Silva",
            Category::Ceramics,
            180.0,
            STUDIO_IMAGE,
            "Set of three handcrafted ceramic vases with traditional glazing techniques.",
            18,
        ),
        Listing::seed(
            "3",
            "Carved Wooden Sculpture",
            "Kenji Tanaka",
            Category::Woodwork,
            320.0,
            STUDIO_IMAGE,
            "Intricate wooden sculpture carved from sustainable bamboo using traditional Japanese techniques.",
            31,
        ),
        Listing::seed(
            "4",
            "Silver Filigree Jewelry",
            "Elena Rodriguez",
            Category::Jewelry,
            275.0,
            JEWELRY_IMAGE,
            "Delicate silver filigree jewelry set featuring traditional Portuguese craftsmanship.",
            42,
        ),
        Listing::seed(
            "5",
            "Abstract Oil Painting",
            "Amara Johnson",
            Category::Paintings,
            680.0,
            PAINTING_IMAGE,
            "Vibrant abstract oil painting inspired by African traditional art forms.",
            37,
        ),
        Listing::seed(
            "6",
            "Handmade Pottery Bowl",
            "Sarah Mitchell",
            Category::Pottery,
            95.0,
            STUDIO_IMAGE,
            "Beautiful handmade pottery bowl with natural earth tones and organic shapes.",
            15,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("Jewelry".parse::<Category>(), Ok(Category::Jewelry));
        assert_eq!(
            "Glasswork".parse::<Category>(),
            Err(UnknownCategory("Glasswork".to_string()))
        );
        // Names are matched exactly
        assert!("pottery".parse::<Category>().is_err());
    }

    #[test]
    fn test_seed_ids_unique() {
        let listings = seed_listings();
        assert_eq!(listings.len(), 6);

        let mut ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert!(listings.iter().all(|l| l.price >= 0.0));
    }
}
