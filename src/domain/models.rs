//! Domain entities for the insight pipeline - behavior lives WITH data

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AppError, Result};

/// Header levels recognized in a snapshot, in report enumeration order.
pub const HEADER_LEVELS: [&str; 6] = ["H1", "H2", "H3", "H4", "H5", "H6"];

// ====== Snapshot ======

/// A point-in-time record of a page's on-page SEO signals.
///
/// Produced once by the fetch/extract collaborators (or read back from a
/// `seo_data.json` file) and consumed by the insight engine. Optional keys
/// absent from the JSON resolve via the documented defaults, never errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoSnapshot {
    pub headers: HashMap<String, Vec<String>>,
    pub images_src: Vec<String>,
    pub alt_attributes: Vec<String>,
    #[serde(deserialize_with = "nullable_strings", default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub readability_score: f64,
    #[serde(default)]
    pub number_of_images: u64,
    #[serde(default)]
    pub number_of_links: u64,
    #[serde(default)]
    pub word_count: u64,
    #[serde(
        deserialize_with = "keyword_density_pairs",
        serialize_with = "keyword_density_map",
        default
    )]
    pub keyword_density: Vec<(String, f64)>,
    #[serde(default)]
    pub xml_sitemap_exists: bool,
    #[serde(default)]
    pub ssl_certificate_valid: bool,

    // Extended fields populated by the extractor but not consumed by the
    // insight engine yet; reserved for future categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_age_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots_txt: Option<String>,
}

impl SeoSnapshot {
    /// Parse a snapshot from its JSON representation.
    ///
    /// This is the one place a consumer-facing error surfaces: malformed
    /// JSON, a field with the wrong fundamental type, or an unknown header
    /// level key all abort with `AppError::SnapshotShape`. Business values
    /// (thresholds, booleans, missing optional keys) never error.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: SeoSnapshot =
            serde_json::from_str(json).map_err(|e| AppError::shape(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the minimal structural contract beyond what serde enforces.
    pub fn validate(&self) -> Result<()> {
        for level in self.headers.keys() {
            if !HEADER_LEVELS.contains(&level.as_str()) {
                return Err(AppError::shape(format!(
                    "unknown header level key: {:?} (expected H1..H6)",
                    level
                )));
            }
        }
        Ok(())
    }

    /// Header texts for one level, in page order. Absent levels are empty.
    pub fn headers_at(&self, level: &str) -> &[String] {
        self.headers.get(level).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Deserialize a JSON array whose entries may be `null` into plain strings.
/// Nulls and empties are kept verbatim as empty strings, not filtered.
fn nullable_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Option<String>> = Vec::deserialize(deserializer)?;
    Ok(entries.into_iter().map(Option::unwrap_or_default).collect())
}

/// Deserialize the keyword density JSON object into `(keyword, density)`
/// pairs in document order. Map iteration order is unspecified across
/// languages, so tie-breaking during the later stable sort works over this
/// captured sequence instead.
fn keyword_density_pairs<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, f64)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of keyword to density")
        }

        fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((keyword, density)) = access.next_entry::<String, f64>()? {
                pairs.push((keyword, density));
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor)
}

/// Serialize the captured pairs back out as a JSON object, preserving order.
fn keyword_density_map<S>(
    pairs: &[(String, f64)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (keyword, density) in pairs {
        map.serialize_entry(keyword, density)?;
    }
    map.end()
}

// ====== Categories ======

/// The eleven fixed report categories.
///
/// `ALL` is the display order of the rendered report - a visible contract,
/// not an incidental detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Headers,
    AltAttributes,
    Links,
    ReadabilityScore,
    NumberOfImages,
    NumberOfLinks,
    WordCount,
    KeywordDensity,
    Readability,
    Sitemap,
    SslCertificate,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Headers,
        Category::AltAttributes,
        Category::Links,
        Category::ReadabilityScore,
        Category::NumberOfImages,
        Category::NumberOfLinks,
        Category::WordCount,
        Category::KeywordDensity,
        Category::Readability,
        Category::Sitemap,
        Category::SslCertificate,
    ];

    /// Stable snake_case key, matching the snapshot/insight JSON vocabulary.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Headers => "headers",
            Category::AltAttributes => "alt_attributes",
            Category::Links => "links",
            Category::ReadabilityScore => "readability_score",
            Category::NumberOfImages => "number_of_images",
            Category::NumberOfLinks => "number_of_links",
            Category::WordCount => "word_count",
            Category::KeywordDensity => "keyword_density",
            Category::Readability => "readability",
            Category::Sitemap => "sitemap",
            Category::SslCertificate => "ssl_certificate",
        }
    }

    /// Human title used as the section heading in the rendered report.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Headers => "Headers",
            Category::AltAttributes => "Alt Attributes",
            Category::Links => "Links",
            Category::ReadabilityScore => "Readability Score",
            Category::NumberOfImages => "Number of Images",
            Category::NumberOfLinks => "Number of Links",
            Category::WordCount => "Word Count",
            Category::KeywordDensity => "Keyword Density",
            Category::Readability => "Readability",
            Category::Sitemap => "Sitemap",
            Category::SslCertificate => "SSL Certificate",
        }
    }
}

// ====== Insight set ======

/// Categorized recommendation strings derived from one snapshot.
///
/// All eleven categories are always present; a category with nothing to say
/// holds an empty list. Per-category insertion order drives render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InsightSet {
    pub headers: Vec<String>,
    pub alt_attributes: Vec<String>,
    pub links: Vec<String>,
    pub readability_score: Vec<String>,
    pub number_of_images: Vec<String>,
    pub number_of_links: Vec<String>,
    pub word_count: Vec<String>,
    pub keyword_density: Vec<String>,
    pub readability: Vec<String>,
    pub sitemap: Vec<String>,
    pub ssl_certificate: Vec<String>,
}

impl InsightSet {
    /// Insights for one category.
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Headers => &self.headers,
            Category::AltAttributes => &self.alt_attributes,
            Category::Links => &self.links,
            Category::ReadabilityScore => &self.readability_score,
            Category::NumberOfImages => &self.number_of_images,
            Category::NumberOfLinks => &self.number_of_links,
            Category::WordCount => &self.word_count,
            Category::KeywordDensity => &self.keyword_density,
            Category::Readability => &self.readability,
            Category::Sitemap => &self.sitemap,
            Category::SslCertificate => &self.ssl_certificate,
        }
    }

    /// All categories with their insights, in fixed display order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Total number of insights across all categories.
    pub fn len(&self) -> usize {
        self.sections().map(|(_, insights)| insights.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults_for_missing_optional_keys() {
        let json = r#"{
            "headers": {"H1": ["Welcome"]},
            "images_src": [],
            "alt_attributes": []
        }"#;
        let snapshot = SeoSnapshot::from_json(json).expect("minimal snapshot should parse");

        assert_eq!(snapshot.word_count, 0);
        assert_eq!(snapshot.readability_score, 0.0);
        assert!(!snapshot.xml_sitemap_exists);
        assert!(!snapshot.ssl_certificate_valid);
        assert!(snapshot.keyword_density.is_empty());
        assert!(snapshot.links.is_empty());
        assert!(snapshot.title_tag.is_none());
        assert!(snapshot.domain_age_days.is_none());
    }

    #[test]
    fn test_keyword_density_preserves_document_order() {
        let json = r#"{
            "headers": {},
            "images_src": [],
            "alt_attributes": [],
            "keyword_density": {"zebra": 0.03, "apple": 0.03, "mango": 0.01}
        }"#;
        let snapshot = SeoSnapshot::from_json(json).unwrap();

        let keywords: Vec<&str> = snapshot
            .keyword_density
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_null_links_kept_as_empty_strings() {
        let json = r#"{
            "headers": {},
            "images_src": [],
            "alt_attributes": [],
            "links": ["/about", null, "", "/about"]
        }"#;
        let snapshot = SeoSnapshot::from_json(json).unwrap();

        assert_eq!(snapshot.links, vec!["/about", "", "", "/about"]);
    }

    #[test]
    fn test_shape_error_on_wrong_fundamental_type() {
        let json = r#"{
            "headers": "not a mapping",
            "images_src": [],
            "alt_attributes": []
        }"#;
        let err = SeoSnapshot::from_json(json).unwrap_err();
        assert!(matches!(err, AppError::SnapshotShape(_)));
    }

    #[test]
    fn test_shape_error_on_unknown_header_level() {
        let json = r#"{
            "headers": {"H7": ["too deep"]},
            "images_src": [],
            "alt_attributes": []
        }"#;
        let err = SeoSnapshot::from_json(json).unwrap_err();
        assert!(matches!(err, AppError::SnapshotShape(_)));
    }

    #[test]
    fn test_snapshot_json_round_trip_keeps_keyword_order() {
        let json = r#"{
            "headers": {},
            "images_src": [],
            "alt_attributes": [],
            "keyword_density": {"first": 0.02, "second": 0.02}
        }"#;
        let snapshot = SeoSnapshot::from_json(json).unwrap();
        let serialized = serde_json::to_string(&snapshot).unwrap();
        let reparsed = SeoSnapshot::from_json(&serialized).unwrap();

        assert_eq!(snapshot.keyword_density, reparsed.keyword_density);
    }

    #[test]
    fn test_category_display_order_is_fixed() {
        let titles: Vec<&str> = Category::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Headers",
                "Alt Attributes",
                "Links",
                "Readability Score",
                "Number of Images",
                "Number of Links",
                "Word Count",
                "Keyword Density",
                "Readability",
                "Sitemap",
                "SSL Certificate",
            ]
        );
    }

    #[test]
    fn test_insight_set_exposes_all_eleven_categories() {
        let set = InsightSet::default();
        assert_eq!(set.sections().count(), 11);
        assert!(set.is_empty());
    }
}
