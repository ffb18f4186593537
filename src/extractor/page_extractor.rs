use std::collections::HashMap;
use std::sync::OnceLock;

use scraper::{Html, Selector};

use crate::domain::HEADER_LEVELS;

pub struct PageExtractor;

impl PageExtractor {
    /// Header texts keyed by level tag (H1..H6), in page order per level.
    /// Every level is present, possibly with an empty list.
    pub fn extract_headers(html: &Html) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        for level in HEADER_LEVELS {
            let selector = Selector::parse(&level.to_lowercase()).unwrap();
            let texts = html
                .select(&selector)
                .map(|el| el.text().collect::<String>().trim().to_string())
                .collect();
            headers.insert(level.to_string(), texts);
        }
        headers
    }

    /// Positionally aligned (src, alt) lists over every img element.
    ///
    /// Both lists cover the same elements in the same order, so index i of
    /// one corresponds to index i of the other. Missing attributes become
    /// empty strings rather than dropping the element, which would break
    /// the alignment.
    pub fn extract_images(html: &Html) -> (Vec<String>, Vec<String>) {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("img").unwrap());

        let mut sources = Vec::new();
        let mut alts = Vec::new();
        for img in html.select(selector) {
            sources.push(img.value().attr("src").unwrap_or("").to_string());
            alts.push(img.value().attr("alt").unwrap_or("").to_string());
        }
        (sources, alts)
    }

    /// Every anchor's href verbatim, in page order. Anchors without an href
    /// contribute an empty entry; nothing is deduplicated or filtered.
    pub fn extract_links(html: &Html) -> Vec<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("a").unwrap());

        html.select(selector)
            .map(|el| el.value().attr("href").unwrap_or("").to_string())
            .collect()
    }

    pub fn extract_title(html: &Html) -> Option<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("title").unwrap());
        html.select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn extract_meta_description(html: &Html) -> Option<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector =
            SELECTOR.get_or_init(|| Selector::parse("meta[name='description']").unwrap());
        html.select(selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn extract_meta_keywords(html: &Html) -> Option<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("meta[name='keywords']").unwrap());
        html.select(selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn extract_canonical(html: &Html) -> Option<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("link[rel='canonical']").unwrap());
        html.select(selector)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Visible text content of the whole document, whitespace-normalized.
    pub fn extract_text(html: &Html) -> String {
        html.root_element()
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
