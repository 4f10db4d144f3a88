//! Upstream session with a pooled HTTP client and fixed browser identity.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use tracing::debug;

use crate::fetcher::Fetcher;
use crate::{Result, SearchError, SearchQuery};

const UPSTREAM_URL: &str = "https://www.google.com/search";

// Upstream rejects obvious bot traffic, so the session presents a fixed
// desktop browser identity on every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.5";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A reusable upstream session.
///
/// Wraps one `reqwest::Client`, which keeps a pool of persistent
/// connections internally and supports concurrent checkout, so a single
/// `Session` serves any number of in-flight queries. This is the only
/// long-lived mutable resource in the pipeline.
pub struct Session {
    client: Client,
    base_url: String,
}

impl Session {
    /// Creates a session with the default 10 second timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a session with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .default_headers(headers)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: UPSTREAM_URL.to_string(),
        }
    }

    /// Creates a session with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: UPSTREAM_URL.to_string(),
        }
    }

    /// Overrides the upstream endpoint URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn params(query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.query.clone()),
            ("start", query.start.to_string()),
            ("num", query.num.to_string()),
        ];
        if let Some(language) = &query.language {
            params.push(("hl", language.clone()));
        }
        if let Some(country) = &query.country {
            params.push(("gl", country.clone()));
        }
        params.push(("safe", safe_value(query.safe_search).to_string()));
        params
    }
}

fn safe_value(safe_search: bool) -> &'static str {
    if safe_search {
        "active"
    } else {
        "off"
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for Session {
    async fn fetch(&self, query: &SearchQuery) -> Result<String> {
        debug!(query = %query.query, start = query.start, "fetching upstream results");

        let response = self
            .client
            .get(&self.base_url)
            .query(&Self::params(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        debug!(bytes = html.len(), "received upstream response");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let session = Session::new();
        assert_eq!(session.base_url, UPSTREAM_URL);
    }

    #[test]
    fn test_session_default() {
        let _session = Session::default();
    }

    #[test]
    fn test_session_with_client() {
        let client = Client::builder().user_agent("test-agent").build().unwrap();
        let session = Session::with_client(client);
        assert_eq!(session.base_url, UPSTREAM_URL);
    }

    #[test]
    fn test_session_with_base_url() {
        let session = Session::new().with_base_url("http://127.0.0.1:9999/search");
        assert_eq!(session.base_url, "http://127.0.0.1:9999/search");
    }

    #[test]
    fn test_params_basic() {
        let query = SearchQuery::new("cats");
        let params = Session::params(&query);
        assert!(params.contains(&("q", "cats".to_string())));
        assert!(params.contains(&("start", "0".to_string())));
        assert!(params.contains(&("num", "10".to_string())));
        assert!(params.contains(&("safe", "off".to_string())));
    }

    #[test]
    fn test_params_pagination() {
        let query = SearchQuery::new("cats").with_start(20).with_num(25);
        let params = Session::params(&query);
        assert!(params.contains(&("start", "20".to_string())));
        assert!(params.contains(&("num", "25".to_string())));
    }

    #[test]
    fn test_params_locale_forwarded_untouched() {
        let query = SearchQuery::new("cats")
            .with_language("pt-BR")
            .with_country("BR");
        let params = Session::params(&query);
        assert!(params.contains(&("hl", "pt-BR".to_string())));
        assert!(params.contains(&("gl", "BR".to_string())));
    }

    #[test]
    fn test_params_locale_omitted_when_unset() {
        let query = SearchQuery::new("cats");
        let params = Session::params(&query);
        assert!(!params.iter().any(|(key, _)| *key == "hl"));
        assert!(!params.iter().any(|(key, _)| *key == "gl"));
    }

    #[test]
    fn test_params_safe_search_active() {
        let query = SearchQuery::new("cats").with_safe_search(true);
        let params = Session::params(&query);
        assert!(params.contains(&("safe", "active".to_string())));
    }

    #[tokio::test]
    async fn test_fetch_connection_failure_is_transport_error() {
        // Nothing listens on this port; the request must fail as a
        // transport error, not a panic.
        let session = Session::with_timeout(Duration::from_secs(1))
            .with_base_url("http://127.0.0.1:9/search");
        let query = SearchQuery::new("cats");
        let result = session.fetch(&query).await;
        assert!(matches!(
            result,
            Err(SearchError::Http(_)) | Err(SearchError::Timeout)
        ));
    }
}
