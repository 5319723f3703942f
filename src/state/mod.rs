/// State management module
///
/// This module holds everything the UI renders from, with no iced types:
/// - The catalog data model and seed listings (data.rs)
/// - Catalog filtering and ordering (filter.rs)
/// - The Library owning listings and favorites (library.rs)
/// - The art profile form and summary template (profile.rs)
/// - The content-creation draft and its templates (post.rs)

pub mod data;
pub mod filter;
pub mod library;
pub mod post;
pub mod profile;
