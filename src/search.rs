//! Search orchestration: one fetch, one extraction pass, one envelope.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::extract::Extractor;
use crate::fetcher::Fetcher;
use crate::session::Session;
use crate::{SearchError, SearchQuery, SearchResponse};

/// The search pipeline entry point.
///
/// Holds the transport seam and the extractor; carries no other state, so
/// one instance serves concurrent queries. Retries are the caller's
/// business, not this type's.
pub struct Search {
    fetcher: Arc<dyn Fetcher>,
    extractor: Extractor,
}

impl Search {
    /// Creates a search pipeline backed by a default [`Session`].
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(Session::new()))
    }

    /// Creates a search pipeline with an injected transport.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            extractor: Extractor::new(),
        }
    }

    /// Replaces the extractor, e.g. to track upstream markup drift.
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Runs one full search cycle and returns the response envelope.
    ///
    /// A transport failure short-circuits to an errored envelope with zero
    /// results; the extractor is not consulted. On success the envelope
    /// carries every record the extractor could recover, and the error
    /// field stays unset even when that is fewer than upstream presented.
    pub async fn search(&self, query: &SearchQuery) -> SearchResponse {
        if query.query.trim().is_empty() {
            let err = SearchError::InvalidQuery("query cannot be empty".into());
            return SearchResponse::failure(&query.query, err.to_string());
        }

        let html = match self.fetcher.fetch(query).await {
            Ok(html) => html,
            Err(e) => {
                warn!(query = %query.query, error = %e, "upstream fetch failed");
                return SearchResponse::failure(&query.query, e.to_string());
            }
        };

        let results = self.extractor.extract(&html);
        debug!(query = %query.query, count = results.len(), "search completed");
        SearchResponse::success(&query.query, results)
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use async_trait::async_trait;

    struct FakeFetcher {
        html: String,
    }

    impl FakeFetcher {
        fn new(html: &str) -> Self {
            Self {
                html: html.to_string(),
            }
        }
    }

    #[async_trait]
    impl Fetcher for FakeFetcher {
        async fn fetch(&self, _query: &SearchQuery) -> Result<String> {
            Ok(self.html.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl Fetcher for FailingFetcher {
        async fn fetch(&self, _query: &SearchQuery) -> Result<String> {
            Err(SearchError::Timeout)
        }
    }

    const RESULTS_PAGE: &str = r#"
        <html><body>
            <div class="g">
                <a href="https://www.rust-lang.org/"><h3>Rust</h3></a>
                <span class="st">A systems language.</span>
            </div>
            <div class="g">
                <a href="/url?q=https%3A%2F%2Fexample.com&amp;sa=U"><h3>Example</h3></a>
            </div>
        </body></html>
    "#;

    #[tokio::test]
    async fn test_search_success() {
        let search = Search::with_fetcher(Arc::new(FakeFetcher::new(RESULTS_PAGE)));
        let response = search.search(&SearchQuery::new("cats")).await;

        assert_eq!(response.query, "cats");
        assert_eq!(response.total_results, 2);
        assert!(response.error().is_none());
        assert_eq!(response.items()[0].url, "https://www.rust-lang.org/");
        assert_eq!(response.items()[1].url, "https://example.com");
    }

    #[tokio::test]
    async fn test_search_transport_failure() {
        let search = Search::with_fetcher(Arc::new(FailingFetcher));
        let response = search.search(&SearchQuery::new("cats")).await;

        assert_eq!(response.query, "cats");
        assert!(response.items().is_empty());
        assert_eq!(response.total_results, 0);
        assert_eq!(response.error(), Some("upstream request timed out"));
    }

    #[tokio::test]
    async fn test_search_empty_query_rejected() {
        let search = Search::with_fetcher(Arc::new(FakeFetcher::new(RESULTS_PAGE)));
        let response = search.search(&SearchQuery::new("   ")).await;

        assert!(response.is_err());
        assert!(response.items().is_empty());
    }

    #[tokio::test]
    async fn test_search_error_and_results_mutually_exclusive() {
        let ok = Search::with_fetcher(Arc::new(FakeFetcher::new(RESULTS_PAGE)));
        let failing = Search::with_fetcher(Arc::new(FailingFetcher));

        let success = ok.search(&SearchQuery::new("cats")).await;
        let failure = failing.search(&SearchQuery::new("cats")).await;

        assert!(success.error().is_none() && !success.items().is_empty());
        assert!(failure.error().is_some() && failure.items().is_empty());
    }

    #[tokio::test]
    async fn test_search_empty_page_is_success_with_zero_results() {
        let search = Search::with_fetcher(Arc::new(FakeFetcher::new("<html></html>")));
        let response = search.search(&SearchQuery::new("cats")).await;

        assert!(!response.is_err());
        assert_eq!(response.total_results, 0);
    }

    #[tokio::test]
    async fn test_search_with_custom_extractor() {
        use crate::Selectors;

        let html = r#"
            <li class="hit"><a href="https://example.com"><h2>Hit</h2></a></li>
        "#;
        let selectors = Selectors::from_css("li.hit", "h2", "a[href]", &[]).unwrap();
        let search = Search::with_fetcher(Arc::new(FakeFetcher::new(html)))
            .with_extractor(Extractor::with_selectors(selectors));

        let response = search.search(&SearchQuery::new("cats")).await;
        assert_eq!(response.total_results, 1);
        assert_eq!(response.items()[0].title, "Hit");
    }
}
