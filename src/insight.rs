//! Insight engine - derives categorized recommendations from a snapshot.
//!
//! Pure and deterministic: no I/O, no clock, no randomness. Every
//! structurally valid snapshot produces a full `InsightSet`; business rules
//! resolve through thresholds and defaults, never errors.

use std::cmp::Ordering;

use crate::domain::{InsightSet, SeoSnapshot, HEADER_LEVELS};

/// Word counts below this trigger the thin-content recommendation.
pub const WORD_COUNT_MIN: u64 = 300;
/// Word counts above this trigger the overly-long-content recommendation.
pub const WORD_COUNT_MAX: u64 = 2500;
/// Flesch reading-ease bounds for the readability recommendations.
pub const READABILITY_LOW: f64 = 60.0;
pub const READABILITY_HIGH: f64 = 80.0;
/// Keyword densities outside this closed interval are not worth reporting.
pub const DENSITY_MIN: f64 = 0.01;
pub const DENSITY_MAX: f64 = 0.05;
/// At most this many keywords are reported, highest density first.
pub const KEYWORD_LIMIT: usize = 10;

pub const MSG_LOW_WORD_COUNT: &str =
    "Consider increasing the word count on the page to provide more valuable content.";
pub const MSG_HIGH_WORD_COUNT: &str =
    "The word count is quite high. Ensure the content is focused and relevant to the target audience.";
pub const MSG_LOW_READABILITY: &str =
    "The readability score is low. Consider simplifying the content to make it more accessible to a broader audience.";
pub const MSG_HIGH_READABILITY: &str =
    "The readability score is high. This is great for general audiences, but make sure the content is still detailed and informative enough for your target audience.";
pub const MSG_NO_SITEMAP: &str =
    "No XML sitemap was found. Create and submit an XML sitemap to improve the site's crawlability.";
pub const MSG_INVALID_SSL: &str =
    "The SSL certificate is invalid or missing. Obtain a valid SSL certificate to ensure the website's security and improve search engine rankings.";

/// Derive the full set of categorized insights from one snapshot.
pub fn derive_insights(snapshot: &SeoSnapshot) -> InsightSet {
    InsightSet {
        headers: header_insights(snapshot),
        alt_attributes: alt_attribute_insights(snapshot),
        links: link_insights(snapshot),
        readability_score: vec![format!(
            "Readability score: {}",
            snapshot.readability_score
        )],
        number_of_images: vec![format!("Number of images: {}", snapshot.number_of_images)],
        number_of_links: vec![format!("Number of links: {}", snapshot.number_of_links)],
        word_count: word_count_insights(snapshot),
        keyword_density: keyword_density_insights(snapshot),
        readability: readability_insights(snapshot),
        sitemap: sitemap_insights(snapshot),
        ssl_certificate: ssl_insights(snapshot),
    }
}

/// One line per header, levels enumerated H1 through H6, texts in page order.
fn header_insights(snapshot: &SeoSnapshot) -> Vec<String> {
    let mut insights = Vec::new();
    for level in HEADER_LEVELS {
        for text in snapshot.headers_at(level) {
            insights.push(format!("{}: {}", level, text));
        }
    }
    insights
}

/// Flag images whose positionally aligned alt text is empty.
///
/// The zip truncates at the shorter of the two sequences; pairs beyond that
/// length are never considered. A length mismatch is a documented edge case
/// of the producer, not an error here.
fn alt_attribute_insights(snapshot: &SeoSnapshot) -> Vec<String> {
    snapshot
        .images_src
        .iter()
        .zip(snapshot.alt_attributes.iter())
        .filter(|(_, alt)| alt.is_empty())
        .map(|(src, _)| format!("Image with missing alt attribute: {}", src))
        .collect()
}

/// Every link verbatim, duplicates and empty targets included.
fn link_insights(snapshot: &SeoSnapshot) -> Vec<String> {
    snapshot
        .links
        .iter()
        .map(|link| format!("Link: {}", link))
        .collect()
}

fn word_count_insights(snapshot: &SeoSnapshot) -> Vec<String> {
    if snapshot.word_count < WORD_COUNT_MIN {
        vec![MSG_LOW_WORD_COUNT.to_string()]
    } else if snapshot.word_count > WORD_COUNT_MAX {
        vec![MSG_HIGH_WORD_COUNT.to_string()]
    } else {
        Vec::new()
    }
}

/// Keywords in the reportable density band, highest density first.
///
/// The sort is stable over the snapshot's captured document order, so equal
/// densities keep their relative order regardless of how any map type would
/// iterate. NaN densities compare as equal and therefore also keep their
/// captured position.
fn keyword_density_insights(snapshot: &SeoSnapshot) -> Vec<String> {
    let mut ranked: Vec<&(String, f64)> = snapshot.keyword_density.iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .filter(|(_, density)| (DENSITY_MIN..=DENSITY_MAX).contains(density))
        .take(KEYWORD_LIMIT)
        .map(|(keyword, density)| {
            format!(
                "The keyword '{}' has a density of {:.2}%. Consider optimizing its usage for better results.",
                keyword,
                density * 100.0
            )
        })
        .collect()
}

fn readability_insights(snapshot: &SeoSnapshot) -> Vec<String> {
    if snapshot.readability_score < READABILITY_LOW {
        vec![MSG_LOW_READABILITY.to_string()]
    } else if snapshot.readability_score > READABILITY_HIGH {
        vec![MSG_HIGH_READABILITY.to_string()]
    } else {
        Vec::new()
    }
}

fn sitemap_insights(snapshot: &SeoSnapshot) -> Vec<String> {
    if snapshot.xml_sitemap_exists {
        Vec::new()
    } else {
        vec![MSG_NO_SITEMAP.to_string()]
    }
}

fn ssl_insights(snapshot: &SeoSnapshot) -> Vec<String> {
    if snapshot.ssl_certificate_valid {
        Vec::new()
    } else {
        vec![MSG_INVALID_SSL.to_string()]
    }
}
