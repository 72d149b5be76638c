//! Content extraction and classification components.
//!
//! # Module Structure
//!
//! - `source`: best media URL from competing attributes
//! - `dimensions`: effective width/height from size signals
//! - `ancestry`: bounded ancestor walk producing structural markers
//! - `text`: primary post text via selector strategies and fallbacks
//! - `images`: post image classification
//! - `video`: video source collection
//!
//! The text, image and video components are independent of each other; each
//! reads the snapshot and returns its own contribution.
//!
//! # Usage
//!
//! ```rust
//! use rs_postextract::extractor::{images, text, video};
//! use rs_postextract::{Options, PageSnapshot};
//!
//! let snapshot = PageSnapshot::parse(
//!     r#"<article><p class="attributed-text-segment-list__content">Hello</p></article>"#,
//! );
//! let options = Options::default();
//!
//! assert_eq!(text::extract_text(&snapshot, &options).as_deref(), Some("Hello"));
//! assert!(images::extract_images(&snapshot, &options).is_empty());
//! assert!(video::extract_videos(&snapshot).is_empty());
//! ```

pub mod ancestry;
pub mod dimensions;
pub mod images;
pub mod source;
pub mod text;
pub mod video;

pub use ancestry::{AncestryTags, Marker};
pub use images::{ImageElement, MediaCandidate};
