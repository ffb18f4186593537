pub mod page_extractor;
pub mod sitemap;
pub mod text;

pub use page_extractor::PageExtractor;
pub use sitemap::sitemap_exists;
