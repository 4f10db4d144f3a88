//! Destination URL normalization.
//!
//! Upstream wraps result links in an internal redirect endpoint that logs
//! the click before forwarding to the real destination. The normalizer
//! unwraps those links so a response never leaks the tracking hop.

use url::form_urlencoded;
use url::Url;

// The redirect endpoint path and the parameter carrying the destination.
const WRAPPER_PATH: &str = "/url";
const DEST_PARAM: &str = "q";

/// Returns the true destination of a possibly redirect-wrapped URL.
///
/// Hrefs matching the upstream wrapper (`/url?q=<dest>&...`, relative or
/// absolute) are replaced by the URL-decoded destination parameter. Anything
/// else, including malformed wrappers, is returned unchanged: a
/// normalization edge case must never cost the whole record.
pub fn normalize(href: &str) -> String {
    match unwrap_redirect(href) {
        Some(destination) => destination,
        None => href.to_string(),
    }
}

fn unwrap_redirect(href: &str) -> Option<String> {
    if let Some(query) = href.strip_prefix("/url?") {
        return dest_param(query);
    }

    // Absolute form of the same wrapper.
    let parsed = Url::parse(href).ok()?;
    if parsed.path() == WRAPPER_PATH {
        return dest_param(parsed.query()?);
    }
    None
}

fn dest_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == DEST_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
