//! Text Extractor
//!
//! Finds the primary post text among many similar text blocks, comments
//! included. A chain of selector strategies is tried from most to least
//! specific; a candidate is only accepted while it stays under the length
//! threshold, since long text usually means comments were swept in. When the
//! chain yields nothing acceptable, paragraph fallbacks that exclude comment
//! threads take over. If those find nothing either, the first over-long
//! selector candidate is kept and cut down to its leading sentences.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::options::Options;
use crate::patterns::{
    COMMENTARY_MARKER_SELECTOR, COMMENT_MARKER, CONTENT_PARAGRAPH_SELECTOR, DESCRIPTION_SELECTOR,
    TEXT_SEGMENT_SELECTOR,
};
use crate::selector::{first_success, utils, Strategy};
use crate::snapshot::PageSnapshot;

/// Separator between text blocks joined from several elements.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Selector strategies, most specific first.
pub const SELECTOR_CHAIN: [Strategy<PageSnapshot, String>; 4] = [
    Strategy::new("commentary-marker", commentary_marker),
    Strategy::new("article-text-segments", article_text_segments),
    Strategy::new("article-description", article_description),
    Strategy::new("article-paragraphs", article_paragraphs),
];

/// Paragraph fallbacks, used only when the selector chain accepted nothing.
pub const FALLBACK_CHAIN: [Strategy<PageSnapshot, String>; 2] = [
    Strategy::new("comment-free-paragraphs", comment_free_paragraphs),
    Strategy::new("container-paragraphs", container_paragraphs),
];

/// Primary post text of a snapshot, or `None` when nothing was found.
#[must_use]
pub fn extract_text(snapshot: &PageSnapshot, options: &Options) -> Option<String> {
    let text = first_success(&SELECTOR_CHAIN, snapshot, options, |text| {
        within_threshold(text, options)
    })
    .or_else(|| first_success(&FALLBACK_CHAIN, snapshot, options, |text| !text.is_empty()))
    .map(|(_, text)| text)
    .or_else(|| first_long_candidate(snapshot, options))?;

    if within_threshold(&text, options) {
        Some(text)
    } else {
        Some(truncate_sentences(&text, options.max_summary_sentences))
    }
}

/// First non-empty selector candidate, which can only have been rejected for
/// its length.
fn first_long_candidate(snapshot: &PageSnapshot, options: &Options) -> Option<String> {
    SELECTOR_CHAIN.iter().find_map(|strategy| {
        let text = (strategy.run)(snapshot, options).filter(|text| !text.is_empty())?;
        debug!(strategy = strategy.name, "reusing over-long candidate");
        Some(text)
    })
}

/// Acceptance rule: non-empty and shorter than the length threshold.
#[must_use]
pub fn within_threshold(text: &str, options: &Options) -> bool {
    !text.is_empty() && text.chars().count() < options.text_length_threshold
}

/// Keep the leading sentences of an over-long text.
///
/// Splits on `.`, `!` and `?`, keeps at most `max_sentences` non-empty pieces,
/// rejoins them with `". "` and ends the result with a period. Abbreviations,
/// decimals and quoted punctuation are split like any other terminator.
#[must_use]
pub fn truncate_sentences(text: &str, max_sentences: usize) -> String {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(max_sentences)
        .collect();

    if sentences.is_empty() {
        return text.trim().to_string();
    }

    let mut truncated = sentences.join(". ");
    if !truncated.ends_with(['.', '!', '?']) {
        truncated.push('.');
    }
    truncated
}

/// Trimmed text of each element, blanks dropped, joined by blank lines.
fn join_blocks<'a>(elements: impl IntoIterator<Item = Selection<'a>>) -> Option<String> {
    let blocks: Vec<String> = elements
        .into_iter()
        .map(|el| dom::trimmed_text(&el))
        .filter(|text| !text.is_empty())
        .collect();

    (!blocks.is_empty()).then(|| blocks.join(BLOCK_SEPARATOR))
}

fn commentary_marker(snapshot: &PageSnapshot, _: &Options) -> Option<String> {
    join_blocks(dom::elements(&snapshot.select(COMMENTARY_MARKER_SELECTOR)))
}

fn article_text_segments(snapshot: &PageSnapshot, _: &Options) -> Option<String> {
    join_blocks(snapshot.select_in_article(TEXT_SEGMENT_SELECTOR))
}

fn article_description(snapshot: &PageSnapshot, _: &Options) -> Option<String> {
    join_blocks(snapshot.select_in_article(DESCRIPTION_SELECTOR))
}

fn article_paragraphs(snapshot: &PageSnapshot, _: &Options) -> Option<String> {
    join_blocks(snapshot.select_in_article("p"))
}

fn comment_free_paragraphs(snapshot: &PageSnapshot, options: &Options) -> Option<String> {
    let paragraphs = dom::elements(&snapshot.select(CONTENT_PARAGRAPH_SELECTOR))
        .into_iter()
        .filter(|p| !inside_comment_section(p))
        .take(options.fallback_paragraphs);

    join_blocks(paragraphs)
}

fn container_paragraphs(snapshot: &PageSnapshot, options: &Options) -> Option<String> {
    join_blocks(
        snapshot
            .select_in_article("p")
            .into_iter()
            .take(options.container_paragraphs),
    )
}

/// True when any ancestor, up to the document root, is a comment section.
fn inside_comment_section(sel: &Selection) -> bool {
    utils::has_ancestor(sel, usize::MAX, |ancestor| {
        COMMENT_MARKER.is_match(&utils::id_class(ancestor))
    })
}
