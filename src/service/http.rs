use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

/// Request timeout applied to every page and sitemap fetch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent with every request. Generic Chrome-like pattern without a
/// pinned version so it does not go stale.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Factory for the HTTP client shared across the scan.
pub fn create_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}
