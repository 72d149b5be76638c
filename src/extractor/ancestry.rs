//! Structural ancestry markers.
//!
//! Walks a bounded number of ancestor levels of an element and records which
//! structural markers were seen. The result is an immutable set; the walk
//! never stops early and a marker, once recorded, is never removed.

use std::collections::BTreeSet;

use dom_query::Selection;

use crate::patterns::{COMMENT_MARKER, CONTENT_INDICATOR_CLASS, MAIN_POST_MARKER};
use crate::selector::utils;

/// A structural marker found on an ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    /// Ancestor class/id names a comment thread or comment item.
    Comment,
    /// Ancestor class/id names the primary post container.
    MainPost,
    /// Ancestor is a `figure` or carries a content layout class.
    ContentIndicator,
}

impl Marker {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::MainPost => "main-post",
            Self::ContentIndicator => "content",
        }
    }
}

/// Immutable set of markers collected from an element's ancestors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestryTags(BTreeSet<Marker>);

impl AncestryTags {
    #[must_use]
    pub fn contains(&self, marker: Marker) -> bool {
        self.0.contains(&marker)
    }

    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.contains(Marker::Comment)
    }

    #[must_use]
    pub fn is_main_post(&self) -> bool {
        self.contains(Marker::MainPost)
    }

    #[must_use]
    pub fn has_content_indicator(&self) -> bool {
        self.contains(Marker::ContentIndicator)
    }

    /// Marker names, for diagnostics.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|m| m.as_str())
    }
}

impl FromIterator<Marker> for AncestryTags {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Collect markers from up to `max_depth` ancestors of `sel`.
///
/// At each level the comment marker is checked before the main-post marker
/// and only the first of the two that matches is recorded for that level.
/// The content indicator is checked on every level independently.
#[must_use]
pub fn walk_ancestry(sel: &Selection, max_depth: usize) -> AncestryTags {
    let mut markers = BTreeSet::new();

    for ancestor in utils::ancestors(sel, max_depth) {
        let id_class = utils::id_class(&ancestor);

        if COMMENT_MARKER.is_match(&id_class) {
            markers.insert(Marker::Comment);
        } else if MAIN_POST_MARKER.is_match(&id_class) {
            markers.insert(Marker::MainPost);
        }

        if utils::is_tag(&ancestor, "figure") || CONTENT_INDICATOR_CLASS.is_match(&utils::class(&ancestor)) {
            markers.insert(Marker::ContentIndicator);
        }
    }

    AncestryTags(markers)
}
