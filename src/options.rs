//! Configuration options for post extraction.
//!
//! The `Options` struct carries every threshold the heuristics use. The values
//! target markup that is unversioned and drifts over time, so they are tunable
//! rather than fixed constants.

/// Configuration options for post extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_postextract::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_content_width: 150,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Text at or above this many characters is treated as contaminated by
    /// comments: the selector chain rejects it, and final text this long is
    /// cut down to its leading sentences.
    ///
    /// Default: `2000`
    pub text_length_threshold: usize,

    /// Sentences kept when over-long text is truncated.
    ///
    /// Default: `5`
    pub max_summary_sentences: usize,

    /// Paragraphs joined by the page-wide comment-excluding fallback.
    ///
    /// Default: `3`
    pub fallback_paragraphs: usize,

    /// Paragraphs joined by the last-resort article-container fallback.
    ///
    /// Default: `2`
    pub container_paragraphs: usize,

    /// Ancestor levels inspected when classifying an image.
    ///
    /// Default: `10`
    pub max_ancestor_depth: usize,

    /// Host that serves post imagery. Images elsewhere are rejected.
    ///
    /// Default: `"media.licdn.com"`
    pub media_host: String,

    /// Width an image must exceed to count as content on size alone.
    ///
    /// Default: `200`
    pub min_content_width: u32,

    /// Width or height above which an image is clearly content.
    ///
    /// Default: `300`
    pub large_image_dimension: u32,

    /// Comment-path images shorter than this are rejected.
    ///
    /// Default: `150`
    pub small_image_height: u32,

    /// Maximum number of targets accepted by one batch call.
    ///
    /// Default: `10`
    pub max_batch_targets: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            text_length_threshold: 2000,
            max_summary_sentences: 5,
            fallback_paragraphs: 3,
            container_paragraphs: 2,
            max_ancestor_depth: 10,
            media_host: "media.licdn.com".to_string(),
            min_content_width: 200,
            large_image_dimension: 300,
            small_image_height: 150,
            max_batch_targets: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.text_length_threshold, 2000);
        assert_eq!(opts.max_summary_sentences, 5);
        assert_eq!(opts.fallback_paragraphs, 3);
        assert_eq!(opts.container_paragraphs, 2);
        assert_eq!(opts.max_ancestor_depth, 10);
        assert_eq!(opts.media_host, "media.licdn.com");
        assert_eq!(opts.min_content_width, 200);
        assert_eq!(opts.large_image_dimension, 300);
        assert_eq!(opts.small_image_height, 150);
        assert_eq!(opts.max_batch_targets, 10);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            min_content_width: 150,
            max_ancestor_depth: 4,
            media_host: "cdn.example.com".to_string(),
            ..Options::default()
        };

        assert_eq!(opts.min_content_width, 150);
        assert_eq!(opts.max_ancestor_depth, 4);
        assert_eq!(opts.media_host, "cdn.example.com");
        assert_eq!(opts.text_length_threshold, 2000);
    }
}
