use std::collections::HashSet;

use rs_postextract::{extract, extract_snapshot_with_options, ExtractionResult, Options, PageSnapshot};

const POST_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<body>
    <header class="global-nav">
        <img src="https://static.licdn.com/aero-v1/sc/h/logo.svg" width="34">
        <img src="https://media.licdn.com/dms/image/C4E03AQ/profile-displayphoto-shrink_100_100/0/9" width="24">
    </header>
    <article class="main-feed-activity-card">
        <img class="avatar" src="https://media.licdn.com/dms/image/C4E03AQ/profile-displayphoto-shrink_100_100/0/1" width="48">
        <p data-test-id="main-feed-activity-card__commentary">
            We just shipped the new release. Thanks to everyone who helped test it!
        </p>
        <ul class="feed-images-content">
            <li><img src="https://media.licdn.com/dms/image/D4E22AQ/feedshare-shrink_800/0/1" alt="Image"></li>
            <li><img data-delayed-url="https://media.licdn.com/dms/image/D4E22AQ/feedshare-shrink_800/0/2" width="800"></li>
            <li><img src="https://media.licdn.com/dms/image/D4E22AQ/feedshare-shrink_800/0/1" width="800"></li>
        </ul>
        <video data-sources='[{"src":"https://dms.licdn.com/playlist/vid/1/mp4-720p"}]'></video>
        <section class="comments-comments-list">
            <article class="comments-comment-item">
                <img src="https://media.licdn.com/dms/image/C4E03AQ/profile-displayphoto-shrink_100_100/0/2" width="40">
                <div class="comment-image"><img src="https://media.licdn.com/dms/image/D4E2/feedshare-shrink_800/0/3" width="600"></div>
                <p class="attributed-text-segment-list__content">Congrats!</p>
            </article>
        </section>
    </article>
</body>
</html>
"#;

fn assert_no_duplicates_or_empties(list: &[String]) {
    let unique: HashSet<&String> = list.iter().collect();
    assert_eq!(unique.len(), list.len(), "duplicates in {list:?}");
    assert!(list.iter().all(|s| !s.is_empty()), "empty entry in {list:?}");
}

#[test]
fn extract_full_post_page() {
    let result = extract(POST_PAGE);

    assert_eq!(
        result.text.as_deref(),
        Some("We just shipped the new release. Thanks to everyone who helped test it!")
    );
    assert_eq!(
        result.images,
        vec![
            "https://media.licdn.com/dms/image/D4E22AQ/feedshare-shrink_800/0/1",
            "https://media.licdn.com/dms/image/D4E22AQ/feedshare-shrink_800/0/2",
        ]
    );
    assert_eq!(result.videos, vec!["https://dms.licdn.com/playlist/vid/1/mp4-720p"]);
}

#[test]
fn extract_media_lists_never_hold_duplicates_or_empties() {
    let result = extract(POST_PAGE);

    assert_no_duplicates_or_empties(&result.images);
    assert_no_duplicates_or_empties(&result.videos);
}

#[test]
fn extract_excludes_comment_thread_content() {
    let result = extract(POST_PAGE);

    let text = result.text.unwrap_or_default();
    assert!(!text.contains("Congrats"));
    assert!(result.images.iter().all(|src| !src.ends_with("/0/3")));
}

#[test]
fn extract_unrecognized_page_is_empty_not_error() {
    let result = extract("<html><head><title>Sign in</title></head><body><form></form></body></html>");

    assert!(result.is_empty());
    assert_eq!(result, ExtractionResult::default());
}

#[test]
fn extract_tolerates_malformed_markup() {
    let result = extract("<html><body><article><p class='attributed-text-segment-list__content'>Unclosed <b>bold");

    assert_eq!(result.text.as_deref(), Some("Unclosed bold"));
}

#[test]
fn extract_snapshot_matches_string_entry_point() {
    let snapshot = PageSnapshot::parse(POST_PAGE);

    let from_snapshot = extract_snapshot_with_options(&snapshot, &Options::default());
    assert_eq!(from_snapshot, extract(POST_PAGE));

    // Snapshots are read-only; extracting twice gives the same record.
    assert_eq!(
        extract_snapshot_with_options(&snapshot, &Options::default()),
        from_snapshot
    );
}

#[test]
fn extraction_result_serializes_to_text_images_videos() {
    let json = serde_json::to_value(extract(POST_PAGE)).expect("serializable");

    assert!(json["text"].is_string());
    assert_eq!(json["images"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["videos"].as_array().map(Vec::len), Some(1));

    let empty = serde_json::to_value(ExtractionResult::default()).expect("serializable");
    assert!(empty["text"].is_null());
    assert_eq!(empty["images"], serde_json::json!([]));
}
