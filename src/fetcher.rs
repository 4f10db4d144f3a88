//! Transport abstraction for fetching upstream result pages.

use async_trait::async_trait;

use crate::{Result, SearchQuery};

/// Trait for fetching the raw HTML of an upstream results page.
///
/// The production implementation is [`crate::Session`]; tests substitute a
/// fake that serves canned markup. Implementations must be safe to share
/// across concurrent in-flight queries.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issues one upstream query and returns the response body.
    async fn fetch(&self, query: &SearchQuery) -> Result<String>;
}
