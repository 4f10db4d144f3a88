//! # veil-search
//!
//! A privacy search proxy library.
//!
//! veil-search queries an upstream search engine on behalf of a caller,
//! parses the returned HTML into structured records, unwraps the upstream's
//! redirect-wrapped destination URLs, and hands back a plain response
//! envelope. The caller (a web frontend, a CLI) decides how to render it.
//!
//! The pipeline tolerates upstream markup that is neither versioned nor
//! documented: a container that fails to parse is skipped, not fatal, and
//! only a transport failure produces an errored (and empty) response.
//!
//! ## Example
//!
//! ```rust,no_run
//! use veil_search::{Search, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let search = Search::new();
//!
//!     let query = SearchQuery::new("rust programming");
//!     let response = search.search(&query).await;
//!
//!     for result in response.items() {
//!         println!("{}: {}", result.title, result.url);
//!     }
//! }
//! ```

mod error;
mod extract;
mod fetcher;
mod normalize;
mod query;
mod result;
mod search;
mod session;

pub use error::{Result, SearchError};
pub use extract::{Extractor, Selectors};
pub use fetcher::Fetcher;
pub use normalize::normalize;
pub use query::SearchQuery;
pub use result::{SearchResponse, SearchResult};
pub use search::Search;
pub use session::Session;
