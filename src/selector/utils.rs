//! Utility functions for structural pattern matching
//!
//! Attribute access and bounded ancestor traversal shared by the text and
//! image heuristics.

use crate::dom;
use dom_query::Selection;

// === DOM Traversal ===

/// Collect up to `max_depth` ancestors of a node, nearest first.
///
/// The walk is iterative and stops at the document root or at the depth cap,
/// whichever comes first. The tree is never modified.
///
/// # Example
///
/// ```rust
/// use rs_postextract::selector::utils;
/// use rs_postextract::dom;
///
/// let doc = dom::parse(r#"
///     <section><article><div><p id="target">text</p></div></article></section>
/// "#);
/// let p = doc.select("#target");
///
/// let ancestors = utils::ancestors(&p, 2);
/// assert_eq!(ancestors.len(), 2);
/// assert_eq!(utils::tag(&ancestors[0]), "div");
/// assert_eq!(utils::tag(&ancestors[1]), "article");
/// ```
#[must_use]
pub fn ancestors<'a>(sel: &Selection<'a>, max_depth: usize) -> Vec<Selection<'a>> {
    let mut found = Vec::new();
    let mut current = dom::parent(sel);

    while found.len() < max_depth && current.exists() {
        // The document node has no tag name; it ends the walk.
        if dom::tag_name(&current).is_none() {
            break;
        }
        let next = dom::parent(&current);
        found.push(current);
        current = next;
    }

    found
}

/// True when any of the nearest `max_depth` ancestors satisfies `rule`.
#[must_use]
pub fn has_ancestor(sel: &Selection, max_depth: usize, rule: impl Fn(&Selection) -> bool) -> bool {
    ancestors(sel, max_depth).iter().any(rule)
}

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Combine id and class for a single token match.
///
/// The two values are separated by a space so word-boundary patterns do not
/// match across them.
#[inline]
#[must_use]
pub fn id_class(sel: &Selection) -> String {
    format!("{} {}", id(sel), class(sel))
}

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}
