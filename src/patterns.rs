//! Compiled regex patterns and CSS selectors for post extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by the component that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Structural Markers (ancestor class/id tokens)
// =============================================================================

/// Matches class/id names of comment threads and their items.
/// Covers `comments-comment-item`, `comments-comments-list`, `comment-image`
/// and reply containers.
pub static COMMENT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(comment|\breplies\b|reply[-_]?item)").expect("COMMENT_MARKER regex")
});

/// Matches class/id names of the primary post container.
pub static MAIN_POST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(feed[-_]shared[-_]update[-_]v2|main[-_]feed[-_]activity[-_]card|update[-_]components[-_]image|feed[-_]shared[-_]image|share[-_]update[-_]card|\bmain[-_]post\b)",
    )
    .expect("MAIN_POST_MARKER regex")
});

// =============================================================================
// Image Classification Patterns
// =============================================================================

/// Layout utility classes that post imagery carries and avatars do not.
pub static CONTENT_INDICATOR_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bw-full\b|\bh-full\b|object-cover|object-contain|ivm-view-attr__img--centered|update-components-image__image|feed-images-content)",
    )
    .expect("CONTENT_INDICATOR_CLASS regex")
});

/// Alt-text keywords describing attached content rather than a person.
pub static CONTENT_ALT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(no alternative text|\bimage\b|\bphoto\b|\bpicture\b|\bgraphic\b|\bchart\b|\bdiagram\b|infographic|screenshot|illustration)",
    )
    .expect("CONTENT_ALT regex")
});

/// URL paths of profile photos, background banners, logos and icon sprites.
pub static EXCLUDED_IMAGE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(profile[-_]displayphoto|profile[-_]displaybackgroundimage|profile[-_]framedphoto|company[-_]logo|ghost[-_]person|/sc/h/)",
    )
    .expect("EXCLUDED_IMAGE_PATH regex")
});

/// URL path used for images attached to comments.
pub static COMMENT_IMAGE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)comment[-_]?image").expect("COMMENT_IMAGE_PATH regex")
});

/// URL path marker of the media-sharing pipeline.
pub static CONTENT_SHARING_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)feedshare").expect("CONTENT_SHARING_PATH regex")
});

// =============================================================================
// Dimension Parsing Patterns
// =============================================================================

/// Leading integer of an attribute or CSS length (`"300"`, `"300.5px"`).
pub static LEADING_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\+?(\d+)").expect("LEADING_INTEGER regex")
});

/// `width:` declaration in an inline style (not `max-width` or `min-width`).
pub static STYLE_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*width\s*:\s*([^;]+)").expect("STYLE_WIDTH regex")
});

/// `height:` declaration in an inline style.
pub static STYLE_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*height\s*:\s*([^;]+)").expect("STYLE_HEIGHT regex")
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Selector for the article-like container scoping the primary post.
pub const ARTICLE_SELECTOR: &str =
    "article, [role='article'], .main-feed-activity-card, .feed-shared-update-v2";

/// Exact commentary marker of the primary post.
pub const COMMENTARY_MARKER_SELECTOR: &str =
    "[data-test-id='main-feed-activity-card__commentary']";

/// Text segments of the post body, scoped under the article container.
pub const TEXT_SEGMENT_SELECTOR: &str = ".attributed-text-segment-list__content";

/// Description blocks of the post, scoped under the article container.
pub const DESCRIPTION_SELECTOR: &str =
    ".feed-shared-update-v2__description, .update-components-text";

/// Known content paragraphs, queried page-wide by the fallback.
pub const CONTENT_PARAGRAPH_SELECTOR: &str = "p.attributed-text-segment-list__content";

/// Non-image wrappers that carry a lazily loaded image URL.
pub const LAZY_WRAPPER_SELECTOR: &str = "[data-src], [data-delayed-url]";

/// Attribute holding a JSON array of video sources.
pub const VIDEO_SOURCES_ATTR: &str = "data-sources";
