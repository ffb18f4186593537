pub mod models;

pub use models::{Category, InsightSet, SeoSnapshot, HEADER_LEVELS};
