//! # rs-postextract
//!
//! Extracts a normalized content record (primary text, embedded images and
//! embedded videos) from a single rendered social-media post page, leaving out
//! comment threads, profile imagery and page chrome.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_postextract::extract;
//!
//! let html = r#"<html><body>
//!   <div class="feed-shared-update-v2">
//!     <div class="update-components-text">Shipping v2 today</div>
//!     <img src="https://media.licdn.com/dms/image/feedshare-shrink_800/0/1" width="800">
//!   </div>
//! </body></html>"#;
//!
//! let result = extract(html);
//! assert_eq!(result.text.as_deref(), Some("Shipping v2 today"));
//! assert_eq!(result.images.len(), 1);
//! ```
//!
//! ## Features
//!
//! - **Text Extraction**: Ordered selector strategies with a length-based
//!   acceptance rule and comment-excluding paragraph fallbacks
//! - **Image Classification**: Source and size resolution, ancestry markers,
//!   host/path exclusions and multi-signal inclusion
//! - **Video Collection**: JSON `data-sources` descriptors and `<source>` tags
//! - **Batch Processing**: Sequential per-target isolation over a
//!   [`PageProvider`]
//!
//! Extraction itself never fails: structure mismatches degrade to a `None`
//! text or empty media lists. Only page acquisition reports errors.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Read-only page snapshots.
pub mod snapshot;

/// Strategy chains and structural helpers.
pub mod selector;

/// Text, image and video extraction components.
pub mod extractor;

/// Batch extraction over a page provider.
pub mod batch;

/// URL host checks and target validation.
pub mod url_utils;

// Public API - re-exports
pub use batch::{extract_batch, Credential, PageProvider};
pub use error::{Error, Result};
pub use options::Options;
pub use result::{BatchEntry, ExtractionResult};
pub use snapshot::PageSnapshot;

/// Extracts post content from rendered HTML using default options.
///
/// # Example
///
/// ```rust
/// use rs_postextract::extract;
///
/// let result = extract("<html><body><p>nothing recognizable</p></body></html>");
/// assert!(result.is_empty());
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractionResult {
    extract_with_options(html, &Options::default())
}

/// Extracts post content from rendered HTML with custom options.
///
/// # Example
///
/// ```rust
/// use rs_postextract::{extract_with_options, Options};
///
/// let html = r#"<article><img src="https://cdn.example.com/p/1.jpg" width="640"></article>"#;
/// let options = Options {
///     media_host: "cdn.example.com".to_string(),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options);
/// assert_eq!(result.images, vec!["https://cdn.example.com/p/1.jpg"]);
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractionResult {
    let snapshot = PageSnapshot::parse(html);
    extract::extract_snapshot(&snapshot, options)
}

/// Extracts post content from an already acquired snapshot.
#[must_use]
pub fn extract_snapshot(snapshot: &PageSnapshot) -> ExtractionResult {
    extract::extract_snapshot(snapshot, &Options::default())
}

/// Extracts post content from an already acquired snapshot with custom options.
#[must_use]
pub fn extract_snapshot_with_options(snapshot: &PageSnapshot, options: &Options) -> ExtractionResult {
    extract::extract_snapshot(snapshot, options)
}
