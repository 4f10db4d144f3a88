//! Result extraction from upstream HTML.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::normalize::normalize;
use crate::{Result, SearchError, SearchResult};

// Current upstream markup. The result-block marker and the description
// classes drift over time, which is why the description is a fallback
// chain rather than a single rule.
const CONTAINER: &str = "div.g";
const TITLE: &str = "h3";
const LINK: &str = "a[href]";
const DESCRIPTION: [&str; 4] = ["span.st, span.aCOpRe", "div.VwiC3b", "div[data-sncf]", "div.s"];

/// Compiled selector set for one upstream markup generation.
///
/// Each field holds the selector(s) used to locate it inside a result
/// container; the description is an ordered fallback list tried first to
/// last. Markup drift is handled by constructing a new set with
/// [`Selectors::from_css`], not by changing extraction logic.
pub struct Selectors {
    container: Selector,
    title: Selector,
    link: Selector,
    description: Vec<Selector>,
}

impl Selectors {
    /// Compiles a selector set from CSS selector strings.
    pub fn from_css(
        container: &str,
        title: &str,
        link: &str,
        description: &[&str],
    ) -> Result<Self> {
        Ok(Self {
            container: parse_selector(container)?,
            title: parse_selector(title)?,
            link: parse_selector(link)?,
            description: description
                .iter()
                .map(|css| parse_selector(css))
                .collect::<Result<_>>()?,
        })
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::from_css(CONTAINER, TITLE, LINK, &DESCRIPTION)
            .expect("built-in selectors are valid CSS")
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SearchError::Selector(format!("{css}: {e:?}")))
}

/// Extracts structured result records from raw upstream markup.
///
/// Extraction is a fold over result containers that accumulates successes
/// and silently drops failures: a container missing its title or link is
/// skipped at container granularity and never aborts the pass. The output
/// preserves upstream presentation order and applies no deduplication,
/// sorting, or limit.
#[derive(Default)]
pub struct Extractor {
    selectors: Selectors,
}

impl Extractor {
    /// Creates an extractor with the built-in selector set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with a custom selector set.
    pub fn with_selectors(selectors: Selectors) -> Self {
        Self { selectors }
    }

    /// Extracts all well-formed result records from the given HTML.
    ///
    /// Never fails: unparseable markup simply yields fewer (or zero)
    /// records.
    pub fn extract(&self, html: &str) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let results: Vec<SearchResult> = document
            .select(&self.selectors.container)
            .filter_map(|container| self.extract_one(container))
            .collect();
        debug!(count = results.len(), "extracted result records");
        results
    }

    fn extract_one(&self, container: ElementRef<'_>) -> Option<SearchResult> {
        let title = match container.select(&self.selectors.title).next() {
            Some(el) => element_text(el),
            None => {
                trace!("skipping container without a title element");
                return None;
            }
        };
        if title.is_empty() {
            trace!("skipping container with an empty title");
            return None;
        }

        let href = match container
            .select(&self.selectors.link)
            .next()
            .and_then(|el| el.value().attr("href"))
        {
            Some(href) if !href.trim().is_empty() => href.trim().to_string(),
            _ => {
                trace!("skipping container without a link href");
                return None;
            }
        };

        // Description alone never disqualifies a container.
        let description = self
            .selectors
            .description
            .iter()
            .find_map(|selector| container.select(selector).next())
            .map(element_text)
            .unwrap_or_default();

        Some(SearchResult::new(title, normalize(&href), description))
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
