/// Content-creation draft and its text templates
///
/// A draft describes one artwork. From it the user can generate a social
/// post, a blog article or a video script, edit the result, and preview
/// the finished post.
use std::fmt;

use thiserror::Error;

use super::data::Category;

/// Kind of content to generate for a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    #[default]
    Post,
    Blog,
    Video,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Post, ContentKind::Blog, ContentKind::Video];

    pub fn blurb(self) -> &'static str {
        match self {
            ContentKind::Post => "Share on social media",
            ContentKind::Blog => "Detailed story",
            ContentKind::Video => "Video content",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentKind::Post => "Social Post",
            ContentKind::Blog => "Blog Article",
            ContentKind::Video => "Video Script",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Enter a product name first")]
    MissingProductName,
    #[error("Select a category first")]
    MissingCategory,
    #[error("Price must be a non-negative number, got {0:?}")]
    InvalidPrice(String),
}

/// What the post preview card shows
#[derive(Debug, Clone, PartialEq)]
pub struct PostPreview {
    pub product_name: String,
    pub category: Category,
    pub content: String,
    pub price: Option<f64>,
    /// First attached image reference, used as the cover
    pub cover: Option<String>,
    pub image_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub product_name: String,
    pub category: Option<Category>,
    pub description: String,
    /// Kept as text; validated by [`PostDraft::price`]
    pub price: String,
    /// Attached image references (paths or URIs), in attach order
    pub images: Vec<String>,
    pub kind: ContentKind,
    pub content: String,
}

impl PostDraft {
    /// Attach an image reference. Blank input is ignored.
    pub fn add_image(&mut self, reference: &str) -> bool {
        let reference = reference.trim();
        if reference.is_empty() {
            return false;
        }
        self.images.push(reference.to_string());
        true
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Generation needs both a product name and a category
    pub fn can_generate(&self) -> bool {
        self.required().is_ok()
    }

    fn required(&self) -> Result<(&str, Category), DraftError> {
        let name = self.product_name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingProductName);
        }
        let category = self.category.ok_or(DraftError::MissingCategory)?;
        Ok((name, category))
    }

    /// Parsed price; blank means no price
    pub fn price(&self) -> Result<Option<f64>, DraftError> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
            _ => Err(DraftError::InvalidPrice(raw.to_string())),
        }
    }

    /// Fill the template for `kind` from the draft fields
    pub fn generate(&self, kind: ContentKind) -> Result<String, DraftError> {
        let (name, category) = self.required()?;
        Ok(render(kind, name, category, &self.description))
    }

    /// Validate the draft and assemble the preview card
    pub fn preview(&self) -> Result<PostPreview, DraftError> {
        let (name, category) = self.required()?;
        let price = self.price()?;

        Ok(PostPreview {
            product_name: name.to_string(),
            category,
            content: self.content.clone(),
            price,
            cover: self.images.first().cloned(),
            image_count: self.images.len(),
        })
    }
}

fn render(kind: ContentKind, name: &str, category: Category, description: &str) -> String {
    let lower = category.name().to_lowercase();

    match kind {
        ContentKind::Post => format!(
            r#"🎨 Excited to share my latest {lower} creation: "{name}"!

This piece represents hours of careful craftsmanship using traditional techniques passed down through generations. Each detail tells a story of cultural heritage and artistic passion.

{description}

What do you think? I'd love to hear your thoughts!

#TraditionalArt #Handmade #{category} #ArtisanCraft"#
        ),
        ContentKind::Blog => format!(
            r#"# The Story Behind "{name}"

## Inspiration and Process

Creating this {lower} piece was a journey that took me back to my roots in traditional craftsmanship.

{description}

## Traditional Techniques Used

The creation process involved several time-honored techniques:
- Hand-selected materials sourced locally
- Traditional tools passed down through generations
- Careful attention to cultural authenticity
- Hours of patient, detailed work

## The Final Result

The finished piece represents not just an artwork, but a bridge between past and present, connecting modern art lovers with ancient traditions.

*What aspects of traditional art resonate most with you? Share your thoughts below!*"#
        ),
        ContentKind::Video => format!(
            r#"🎬 VIDEO SCRIPT: "Creating {name}"

[INTRO - 0:00-0:15]
"Welcome back to my studio! Today I'm excited to show you the creation process of my latest {lower} piece..."

[MATERIALS SHOWCASE - 0:15-0:45]
"Let me first show you the traditional materials I'll be using. Each one has been carefully selected..."

[PROCESS DEMONSTRATION - 0:45-3:00]
"Now let's dive into the actual creation process. This technique has been used for centuries..."

[DETAILED WORK - 3:00-5:00]
"Here's where the magic happens. Notice how I'm using this traditional tool..."

[FINAL REVEAL - 5:00-5:30]
"And here's the finished piece! {description}"

[OUTRO - 5:30-6:00]
"Thanks for watching! Don't forget to like and subscribe for more traditional art content!"

📝 Video Notes:
- Close-up shots of hands working
- Time-lapse sequences for longer processes
- Good lighting to show texture and detail
- Background music: Traditional/ambient"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            product_name: "Indigo Table Runner".to_string(),
            category: Some(Category::Textiles),
            description: "Dyed by hand with natural indigo.".to_string(),
            ..PostDraft::default()
        }
    }

    #[test]
    fn test_generate_requires_name_and_category() {
        let mut d = draft();
        d.product_name = "   ".to_string();
        assert_eq!(d.generate(ContentKind::Post), Err(DraftError::MissingProductName));
        assert!(!d.can_generate());

        let mut d = draft();
        d.category = None;
        assert_eq!(d.generate(ContentKind::Blog), Err(DraftError::MissingCategory));

        assert!(draft().can_generate());
    }

    #[test]
    fn test_social_post() {
        let post = draft().generate(ContentKind::Post).unwrap();

        assert!(post.starts_with(
            "🎨 Excited to share my latest textiles creation: \"Indigo Table Runner\"!\n\n"
        ));
        assert!(post.contains("\n\nDyed by hand with natural indigo.\n\n"));
        assert!(post.ends_with("#TraditionalArt #Handmade #Textiles #ArtisanCraft"));
    }

    #[test]
    fn test_blog_article() {
        let blog = draft().generate(ContentKind::Blog).unwrap();

        assert!(blog.starts_with("# The Story Behind \"Indigo Table Runner\"\n"));
        assert!(blog.contains("Creating this textiles piece was a journey"));
        assert!(blog.contains("## Traditional Techniques Used"));
    }

    #[test]
    fn test_video_script() {
        let script = draft().generate(ContentKind::Video).unwrap();

        assert!(script.starts_with("🎬 VIDEO SCRIPT: \"Creating Indigo Table Runner\""));
        assert!(script.contains("\"And here's the finished piece! Dyed by hand with natural indigo.\""));
        assert!(script.ends_with("- Background music: Traditional/ambient"));
    }

    #[test]
    fn test_price_parsing() {
        let mut d = draft();
        assert_eq!(d.price(), Ok(None));

        d.price = " 49.50 ".to_string();
        assert_eq!(d.price(), Ok(Some(49.5)));

        d.price = "-3".to_string();
        assert_eq!(d.price(), Err(DraftError::InvalidPrice("-3".to_string())));

        d.price = "cheap".to_string();
        assert!(d.price().is_err());
    }

    #[test]
    fn test_images() {
        let mut d = draft();
        assert!(!d.add_image("  "));
        assert!(d.add_image("/tmp/front.jpg"));
        assert!(d.add_image("/tmp/back.jpg"));

        assert_eq!(d.remove_image(5), None);
        assert_eq!(d.remove_image(0), Some("/tmp/front.jpg".to_string()));
        assert_eq!(d.images, vec!["/tmp/back.jpg"]);
    }

    #[test]
    fn test_preview() {
        let mut d = draft();
        d.price = "120".to_string();
        d.add_image("runner.jpg");
        d.content = d.generate(ContentKind::Post).unwrap();

        let preview = d.preview().unwrap();
        assert_eq!(preview.product_name, "Indigo Table Runner");
        assert_eq!(preview.category, Category::Textiles);
        assert_eq!(preview.price, Some(120.0));
        assert_eq!(preview.cover.as_deref(), Some("runner.jpg"));
        assert_eq!(preview.image_count, 1);
        assert_eq!(preview.content, d.content);

        d.price = "abc".to_string();
        assert!(matches!(d.preview(), Err(DraftError::InvalidPrice(_))));
    }
}
