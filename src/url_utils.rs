//! URL Utility Functions
//!
//! Host checks for media URLs and validation of batch targets. Source
//! resolution itself stays syntactic; parsing only happens where a host has to
//! be compared or a target has to be handed to the page provider.

use url::Url;

use crate::error::{Error, Result};

/// Parse a media URL, accepting protocol-relative `//host/path` forms.
#[must_use]
pub fn parse_media_url(s: &str) -> Option<Url> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(rest) = s.strip_prefix("//") {
        return Url::parse(&format!("https://{rest}")).ok();
    }

    Url::parse(s).ok()
}

/// Check whether a media URL is served from `host` (case-insensitive).
///
/// Unparseable URLs and URLs without a host never match.
#[must_use]
pub fn is_on_host(s: &str, host: &str) -> bool {
    parse_media_url(s)
        .and_then(|url| url.host_str().map(|h| h.eq_ignore_ascii_case(host)))
        .unwrap_or(false)
}

/// Validate a batch target as an absolute http(s) URL with a host.
pub fn validate_target(target: &str) -> Result<Url> {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return Err(invalid(target, "target is empty"));
    }

    let url = Url::parse(trimmed).map_err(|e| invalid(target, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(target, format!("unsupported scheme {:?}", url.scheme())));
    }

    if url.host_str().is_none() {
        return Err(invalid(target, "missing host"));
    }

    Ok(url)
}

fn invalid(target: &str, reason: impl ToString) -> Error {
    Error::InvalidTarget {
        target: target.to_string(),
        reason: reason.to_string(),
    }
}
