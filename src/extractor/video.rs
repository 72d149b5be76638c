//! Video Source Collector
//!
//! Video URLs appear either as a JSON `data-sources` attribute (on the video
//! element or on a wrapper around it) or as nested `<source>` tags. Both
//! encodings are collected and merged.

use serde_json::Value;
use tracing::debug;

use crate::dom;
use crate::patterns::VIDEO_SOURCES_ATTR;
use crate::result::dedup_preserving_order;
use crate::snapshot::PageSnapshot;

/// Parse a `data-sources` value: a JSON array of objects with a `src` field.
///
/// Malformed JSON yields an empty list. Entries without a string `src` are
/// skipped.
#[must_use]
pub fn parse_sources_attr(raw: &str) -> Vec<String> {
    let entries: Vec<Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(error = %err, "ignoring malformed data-sources attribute");
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| entry.get("src").and_then(Value::as_str))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect()
}

/// Unique video URLs of a snapshot in first-seen order.
///
/// Video elements come first (their `data-sources`, then their nested
/// `<source>` tags), followed by every element under the article container
/// carrying `data-sources`.
#[must_use]
pub fn extract_videos(snapshot: &PageSnapshot) -> Vec<String> {
    let mut urls = Vec::new();

    for video in dom::elements(&snapshot.select("video")) {
        if let Some(raw) = dom::get_attribute(&video, VIDEO_SOURCES_ATTR) {
            urls.extend(parse_sources_attr(&raw));
        }
        for source in dom::elements(&dom::query_selector_all(&video, "source")) {
            if let Some(src) = dom::non_empty_attribute(&source, "src") {
                urls.push(src);
            }
        }
    }

    let wrapper_selector = format!("[{VIDEO_SOURCES_ATTR}]");
    for wrapper in snapshot.select_in_article(&wrapper_selector) {
        if let Some(raw) = dom::get_attribute(&wrapper, VIDEO_SOURCES_ATTR) {
            urls.extend(parse_sources_attr(&raw));
        }
    }

    let videos = dedup_preserving_order(urls);
    debug!(videos = videos.len(), "collected video sources");
    videos
}
