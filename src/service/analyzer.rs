//! Site analyzer - the fetch/extract collaborator that produces a
//! `SeoSnapshot` for one page.
//!
//! Everything here is upstream of the insight engine: a failure is a
//! consumer-facing error, never a partial snapshot with made-up data.

use anyhow::Context;
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::domain::SeoSnapshot;
use crate::error::{AppError, Result};
use crate::extractor::{self, text, PageExtractor};
use crate::service::http::create_client;

pub struct SiteAnalyzer {
    client: Client,
}

impl SiteAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: create_client()?,
        })
    }

    /// Fetch one page and distill it into a snapshot.
    pub async fn analyze(&self, url: &str) -> Result<SeoSnapshot> {
        let parsed_url =
            Url::parse(url).map_err(|e| AppError::InvalidUrl(format!("{}: {}", url, e)))?;

        tracing::info!("[SCAN] Starting analysis: {}", url);
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(parsed_url.clone())
            .send()
            .await
            .map_err(|e| AppError::network(format!("failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::network(format!(
                "{} answered HTTP {}",
                url, status
            )));
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        tracing::debug!(
            "[SCAN] Fetched {} bytes in {:.2}ms",
            body.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        let xml_sitemap_exists = extractor::sitemap_exists(&self.client, &parsed_url).await;
        let ssl_certificate_valid = self.check_ssl(&parsed_url).await;

        // Parsing happens after the last await: the parsed document is not
        // Send and must not be held across suspension points.
        let snapshot = Self::build_snapshot(&body, xml_sitemap_exists, ssl_certificate_valid);

        tracing::info!(
            "[SCAN] Complete - {} words, {} images, {} links, readability {:.1}",
            snapshot.word_count,
            snapshot.number_of_images,
            snapshot.number_of_links,
            snapshot.readability_score
        );
        Ok(snapshot)
    }

    fn build_snapshot(body: &str, xml_sitemap_exists: bool, ssl_certificate_valid: bool) -> SeoSnapshot {
        let document = Html::parse_document(body);

        let headers = PageExtractor::extract_headers(&document);
        let (images_src, alt_attributes) = PageExtractor::extract_images(&document);
        let links = PageExtractor::extract_links(&document);

        let page_text = PageExtractor::extract_text(&document);
        let words = text::content_words(&page_text);
        let word_count = words.len() as u64;
        let keyword_density = text::keyword_density(&words);
        let readability_score = text::flesch_reading_ease(&page_text);

        let number_of_images = images_src.len() as u64;
        let number_of_links = links.len() as u64;

        SeoSnapshot {
            headers,
            images_src,
            alt_attributes,
            links,
            readability_score,
            number_of_images,
            number_of_links,
            word_count,
            keyword_density,
            xml_sitemap_exists,
            ssl_certificate_valid,
            title_tag: PageExtractor::extract_title(&document),
            meta_description: PageExtractor::extract_meta_description(&document),
            meta_keywords: PageExtractor::extract_meta_keywords(&document),
            canonical_url: PageExtractor::extract_canonical(&document),
            domain_age_days: None,
            robots_txt: None,
        }
    }

    /// A TLS-verified request to the https origin succeeding is the validity
    /// signal; any handshake or certificate failure means invalid.
    async fn check_ssl(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };

        let https_origin = match Url::parse(&format!("https://{}/", host)) {
            Ok(u) => u,
            Err(_) => return false,
        };

        match self.client.get(https_origin).send().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("SSL check failed for {}: {}", host, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::derive_insights;

    const SAMPLE: &str = r#"
        <html>
            <head><title>Sample</title></head>
            <body>
                <h1>Bienvenido</h1>
                <p>El contenido de la pagina habla de optimizacion y contenido.</p>
                <img src="hero.png" alt="">
                <a href="/contacto">Contacto</a>
            </body>
        </html>
    "#;

    #[test]
    fn test_build_snapshot_wires_extractors_together() {
        let snapshot = SiteAnalyzer::build_snapshot(SAMPLE, true, false);

        assert_eq!(snapshot.headers["H1"], vec!["Bienvenido"]);
        assert_eq!(snapshot.images_src, vec!["hero.png"]);
        assert_eq!(snapshot.alt_attributes, vec![""]);
        assert_eq!(snapshot.links, vec!["/contacto"]);
        assert_eq!(snapshot.number_of_images, 1);
        assert_eq!(snapshot.number_of_links, 1);
        assert!(snapshot.xml_sitemap_exists);
        assert!(!snapshot.ssl_certificate_valid);
        assert_eq!(snapshot.title_tag.as_deref(), Some("Sample"));
        // "contenido" appears twice among the content words
        assert!(snapshot
            .keyword_density
            .iter()
            .any(|(k, d)| k == "contenido" && *d > 0.0));
        assert!(snapshot.word_count > 0);
    }

    #[test]
    fn test_built_snapshot_is_valid_engine_input() {
        let snapshot = SiteAnalyzer::build_snapshot(SAMPLE, false, false);
        snapshot.validate().expect("extractor output must satisfy the shape contract");

        let insights = derive_insights(&snapshot);
        assert!(insights
            .alt_attributes
            .contains(&"Image with missing alt attribute: hero.png".to_string()));
    }
}
