//! Source Resolver
//!
//! Picks the single best media URL from the attributes an image element may
//! carry. Resolution is syntactic: nothing is fetched and URLs are not
//! validated here.

use dom_query::Selection;

use crate::dom;

/// The competing source attributes of one element, as read from the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceAttributes {
    /// Direct `src`.
    pub src: Option<String>,
    /// Lazy-load `data-src`.
    pub data_src: Option<String>,
    /// Alternate lazy-load `data-delayed-url`.
    pub delayed_url: Option<String>,
    /// Raw `srcset`.
    pub srcset: Option<String>,
}

impl SourceAttributes {
    /// Read the source attributes of an element. Blank values count as absent.
    #[must_use]
    pub fn from_selection(sel: &Selection) -> Self {
        Self {
            src: dom::non_empty_attribute(sel, "src"),
            data_src: dom::non_empty_attribute(sel, "data-src"),
            delayed_url: dom::non_empty_attribute(sel, "data-delayed-url"),
            srcset: dom::non_empty_attribute(sel, "srcset"),
        }
    }

    /// Candidate sources in priority order: direct, lazy, alternate-lazy and
    /// the first `srcset` entry.
    #[must_use]
    pub fn raw_sources(&self) -> Vec<Option<String>> {
        vec![
            non_empty(self.src.as_deref()),
            non_empty(self.data_src.as_deref()),
            non_empty(self.delayed_url.as_deref()),
            self.srcset.as_deref().and_then(first_srcset_entry),
        ]
    }
}

/// Resolve the best source URL, or `None` when every attribute is empty.
#[must_use]
pub fn resolve_source(attrs: &SourceAttributes) -> Option<String> {
    attrs.raw_sources().into_iter().flatten().next()
}

/// URL of the first `srcset` candidate (`"a.jpg 1x, b.jpg 2x"` gives `a.jpg`).
#[must_use]
pub fn first_srcset_entry(srcset: &str) -> Option<String> {
    srcset
        .split(',')
        .next()
        .and_then(|entry| entry.split_whitespace().next())
        .map(str::to_string)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
