use anyhow::{Context, Result};
use quick_xml::events::Event;
use reqwest::Client;
use url::Url;

pub const SITE_MAP_PATH: &str = "sitemap.xml";

/// Check whether the site publishes a usable XML sitemap.
///
/// True iff `<base>/sitemap.xml` answers 200 and the body is well-formed
/// XML. Network failures and parse failures both mean "no sitemap" rather
/// than an error; the insight engine only wants the boolean.
pub async fn sitemap_exists(client: &Client, base: &Url) -> bool {
    match fetch_sitemap(client, base).await {
        Ok(Some(body)) => is_well_formed_xml(&body),
        Ok(None) => false,
        Err(e) => {
            tracing::debug!("sitemap check failed for {}: {:#}", base, e);
            false
        }
    }
}

async fn fetch_sitemap(client: &Client, base: &Url) -> Result<Option<String>> {
    let sitemap_url = base
        .join(SITE_MAP_PATH)
        .context("Unable to join sitemap path onto base URL")?;

    let response = client
        .get(sitemap_url)
        .send()
        .await
        .context("Unable to send request for sitemap")?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let text = response
        .text()
        .await
        .context("Unable to read sitemap body")?;
    Ok(Some(text))
}

/// Scan the document with the event reader; any error before EOF means the
/// body is not XML (HTML 404 pages being the usual case).
fn is_well_formed_xml(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }

    let mut reader = quick_xml::Reader::from_str(text);
    let mut saw_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) | Ok(Event::Empty(_)) => saw_element = true,
            Ok(Event::Eof) => return saw_element,
            Ok(_) => {}
            Err(_) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlset_sitemap_is_well_formed() {
        let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
    <url><loc>https://example.com/</loc></url>
    <url><loc>https://example.com/about</loc></url>
</urlset>"#;
        assert!(is_well_formed_xml(text));
    }

    #[test]
    fn test_sitemap_index_is_well_formed() {
        let text = r#"
<sitemapindex>
<sitemap>
<loc>https://www.google.com/gmail/sitemap.xml</loc>
</sitemap>
</sitemapindex>"#;
        assert!(is_well_formed_xml(text));
    }

    #[test]
    fn test_empty_body_is_not_a_sitemap() {
        assert!(!is_well_formed_xml(""));
        assert!(!is_well_formed_xml("   \n  "));
    }

    #[test]
    fn test_plain_text_is_not_a_sitemap() {
        assert!(!is_well_formed_xml("https://example.com\nhttps://example.com/about"));
    }

    #[test]
    fn test_mismatched_tags_are_rejected() {
        assert!(!is_well_formed_xml("<urlset><url></urlset></url>"));
    }
}
