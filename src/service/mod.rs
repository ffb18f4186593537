pub mod analyzer;
pub mod http;

pub use analyzer::SiteAnalyzer;
