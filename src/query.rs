//! Search query representation.

use serde::{Deserialize, Serialize};

/// A search query with all upstream-facing parameters.
///
/// Built once per incoming request by the caller and never mutated by the
/// pipeline. The locale, country, and safe-search fields are opaque
/// passthrough values: the pipeline forwards them upstream without
/// validating their contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub query: String,
    /// Pagination offset into upstream results (0-indexed).
    pub start: u32,
    /// Number of results to request from upstream.
    pub num: u32,
    /// Interface language code (e.g., "en"), forwarded as-is.
    pub language: Option<String>,
    /// Country code (e.g., "US"), forwarded as-is.
    pub country: Option<String>,
    /// Whether upstream safe-search filtering is requested.
    pub safe_search: bool,
}

impl SearchQuery {
    /// Creates a new search query with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            start: 0,
            num: 10,
            language: None,
            country: None,
            safe_search: false,
        }
    }

    /// Sets the pagination offset.
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Sets the requested result count.
    pub fn with_num(mut self, num: u32) -> Self {
        self.num = num;
        self
    }

    /// Sets the interface language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the country code.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the safe-search flag.
    pub fn with_safe_search(mut self, safe_search: bool) -> Self {
        self.safe_search = safe_search;
        self
    }
}
