//! Extraction orchestration.
//!
//! Runs the text, image and video components against one snapshot and
//! assembles the result. No retries and no timeouts happen here; those belong
//! to whoever acquired the snapshot.

use tracing::debug;

use crate::extractor::{images, text, video};
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::snapshot::PageSnapshot;

/// Main entry point for snapshot extraction.
pub(crate) fn extract_snapshot(snapshot: &PageSnapshot, options: &Options) -> ExtractionResult {
    let text = text::extract_text(snapshot, options);
    let images = images::extract_images(snapshot, options);
    let videos = video::extract_videos(snapshot);

    debug!(
        text_chars = text.as_deref().map_or(0, |t| t.chars().count()),
        images = images.len(),
        videos = videos.len(),
        "extraction complete"
    );

    ExtractionResult { text, images, videos }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_assembles_all_components() {
        let snapshot = PageSnapshot::parse(r#"
            <html><body>
              <div class="feed-shared-update-v2">
                <div class="update-components-text">Launching our new product today</div>
                <div class="update-components-image">
                  <img src="https://media.licdn.com/dms/image/feedshare-shrink_800/1" width="800">
                </div>
                <video data-sources='[{"src":"https://dms.licdn.com/playlist/1"}]'></video>
              </div>
            </body></html>
        "#);

        let result = extract_snapshot(&snapshot, &Options::default());
        assert_eq!(result.text.as_deref(), Some("Launching our new product today"));
        assert_eq!(result.images, vec!["https://media.licdn.com/dms/image/feedshare-shrink_800/1"]);
        assert_eq!(result.videos, vec!["https://dms.licdn.com/playlist/1"]);
    }

    #[test]
    fn extract_returns_empty_result_for_empty_page() {
        let snapshot = PageSnapshot::parse("");
        let result = extract_snapshot(&snapshot, &Options::default());
        assert!(result.is_empty());
    }

    #[test]
    fn extract_handles_malformed_html() {
        let snapshot = PageSnapshot::parse(
            r#"<article><p class="update-components-text">Unclosed <b>bold<div><img src="broken"#,
        );
        let result = extract_snapshot(&snapshot, &Options::default());
        assert!(result.images.is_empty());
        assert!(result.videos.is_empty());
    }
}
