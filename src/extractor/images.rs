//! Image Classifier
//!
//! Decides which image-bearing elements of a snapshot are primary-post
//! content. Elements are first materialized into `ImageElement` descriptors,
//! then turned into `MediaCandidate`s and filtered by pure predicates, so the
//! classification rules can be exercised without a live page.

use dom_query::Selection;
use tracing::{debug, trace};

use super::ancestry::{walk_ancestry, AncestryTags};
use super::dimensions::{resolve_dimensions, SizeSignals};
use super::source::{resolve_source, SourceAttributes};
use crate::dom;
use crate::options::Options;
use crate::patterns::{
    COMMENT_IMAGE_PATH, CONTENT_ALT, CONTENT_INDICATOR_CLASS, CONTENT_SHARING_PATH,
    EXCLUDED_IMAGE_PATH, LAZY_WRAPPER_SELECTOR,
};
use crate::result::dedup_preserving_order;
use crate::selector::utils;
use crate::snapshot::PageSnapshot;
use crate::url_utils::is_on_host;

/// Everything the classifier needs to know about one element, read once from
/// the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageElement {
    pub tag: String,
    pub class: String,
    pub alt: String,
    pub sources: SourceAttributes,
    pub size: SizeSignals,
    pub ancestry: AncestryTags,
}

impl ImageElement {
    #[must_use]
    pub fn from_selection(sel: &Selection, max_depth: usize) -> Self {
        Self {
            tag: utils::tag(sel),
            class: utils::class(sel),
            alt: utils::attr(sel, "alt"),
            sources: SourceAttributes::from_selection(sel),
            size: SizeSignals::from_selection(sel),
            ancestry: walk_ancestry(sel, max_depth),
        }
    }
}

/// Resolved view of an element used by the inclusion predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaCandidate {
    pub raw_sources: Vec<Option<String>>,
    pub resolved_source: Option<String>,
    pub width: u32,
    pub height: u32,
    pub ancestry: AncestryTags,
    pub tag: String,
    pub class: String,
    pub alt: String,
}

impl From<&ImageElement> for MediaCandidate {
    fn from(element: &ImageElement) -> Self {
        let dims = resolve_dimensions(&element.size);
        Self {
            raw_sources: element.sources.raw_sources(),
            resolved_source: resolve_source(&element.sources),
            width: dims.width,
            height: dims.height,
            ancestry: element.ancestry.clone(),
            tag: element.tag.clone(),
            class: element.class.clone(),
            alt: element.alt.clone(),
        }
    }
}

/// Why a candidate was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InsideComment,
    NoSource,
    ForeignHost,
    ExcludedPath,
    SmallCommentImage,
    NoContentSignal,
}

/// Apply the exclusion rules, then the inclusion signals.
///
/// Exclusions are evaluated first: a comment image is rejected no matter how
/// large it is.
pub fn check_candidate(candidate: &MediaCandidate, options: &Options) -> Result<(), Rejection> {
    if candidate.ancestry.is_comment() {
        return Err(Rejection::InsideComment);
    }

    let Some(src) = candidate.resolved_source.as_deref().filter(|s| !s.is_empty()) else {
        return Err(Rejection::NoSource);
    };

    if !is_on_host(src, &options.media_host) {
        return Err(Rejection::ForeignHost);
    }

    if EXCLUDED_IMAGE_PATH.is_match(src) {
        return Err(Rejection::ExcludedPath);
    }

    if COMMENT_IMAGE_PATH.is_match(src)
        && candidate.height < options.small_image_height
        && !CONTENT_SHARING_PATH.is_match(src)
    {
        return Err(Rejection::SmallCommentImage);
    }

    let wide = candidate.width > options.min_content_width;
    let large = candidate.width > options.large_image_dimension
        || candidate.height > options.large_image_dimension;

    if wide || candidate.ancestry.is_main_post() || has_content_indicator(candidate) || large {
        Ok(())
    } else {
        Err(Rejection::NoContentSignal)
    }
}

fn has_content_indicator(candidate: &MediaCandidate) -> bool {
    candidate.tag == "figure"
        || CONTENT_INDICATOR_CLASS.is_match(&candidate.class)
        || candidate.ancestry.has_content_indicator()
        || CONTENT_ALT.is_match(&candidate.alt)
}

/// Materialize image descriptors from a snapshot.
///
/// Every `img` on the page comes first, in document order, followed by
/// non-`img` wrappers under the article container that carry a lazily loaded
/// image URL.
#[must_use]
pub fn collect_image_elements(snapshot: &PageSnapshot, options: &Options) -> Vec<ImageElement> {
    let mut selections = dom::elements(&snapshot.select("img"));
    selections.extend(
        snapshot
            .select_in_article(LAZY_WRAPPER_SELECTOR)
            .into_iter()
            .filter(|sel| !utils::is_tag(sel, "img")),
    );

    selections
        .iter()
        .map(|sel| ImageElement::from_selection(sel, options.max_ancestor_depth))
        .collect()
}

/// Classify descriptors and return unique post image URLs in first-seen order.
#[must_use]
pub fn classify_images(elements: &[ImageElement], options: &Options) -> Vec<String> {
    let accepted = elements.iter().filter_map(|element| {
        let candidate = MediaCandidate::from(element);
        match check_candidate(&candidate, options) {
            Ok(()) => candidate.resolved_source,
            Err(reason) => {
                let markers: Vec<&str> = candidate.ancestry.names().collect();
                trace!(
                    ?reason,
                    ?markers,
                    source = candidate.resolved_source.as_deref().unwrap_or(""),
                    "image rejected"
                );
                None
            }
        }
    });

    dedup_preserving_order(accepted)
}

/// Post image URLs of a snapshot.
#[must_use]
pub fn extract_images(snapshot: &PageSnapshot, options: &Options) -> Vec<String> {
    let elements = collect_image_elements(snapshot, options);
    let images = classify_images(&elements, options);
    debug!(candidates = elements.len(), accepted = images.len(), "classified images");
    images
}
