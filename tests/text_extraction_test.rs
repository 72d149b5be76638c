use rs_postextract::{extract, extract_with_options, Options};

#[test]
fn extract_prefers_commentary_marker_over_broader_selectors() {
    let html = r#"
        <html><body>
          <article class="main-feed-activity-card">
            <p data-test-id="main-feed-activity-card__commentary">
              MARKER_TEXT
            </p>
            <div class="update-components-text">DESCRIPTION_TEXT</div>
            <p>PARAGRAPH_TEXT</p>
          </article>
        </body></html>
    "#;

    let result = extract(html);
    assert_eq!(result.text.as_deref(), Some("MARKER_TEXT"));
}

#[test]
fn extract_returns_first_selector_text_unchanged() {
    let html = r#"
        <html><body>
          <article>
            <span class="attributed-text-segment-list__content">  First line,   with odd   spacing  </span>
            <span class="attributed-text-segment-list__content">Second block</span>
          </article>
        </body></html>
    "#;

    let result = extract(html);
    assert_eq!(
        result.text.as_deref(),
        Some("First line,   with odd   spacing\n\nSecond block")
    );
}

#[test]
fn extract_scopes_broad_selectors_to_first_article() {
    let html = r#"
        <html><body>
          <p>PAGE_CHROME</p>
          <article><p>POST_TEXT</p></article>
          <article><p>RELATED_POST</p></article>
        </body></html>
    "#;

    let result = extract(html);
    assert_eq!(result.text.as_deref(), Some("POST_TEXT"));
}

#[test]
fn extract_rejects_comment_contaminated_text_and_moves_on() {
    let comments = "Great insight, thanks for posting this. ".repeat(60);
    let html = format!(
        r#"<html><body>
          <article class="feed-shared-update-v2">
            <div class="attributed-text-segment-list__content">The post.</div>
            <section class="comments-comments-list">
              <div class="attributed-text-segment-list__content">{comments}</div>
            </section>
            <div class="update-components-text">The post.</div>
          </article>
        </body></html>"#
    );

    let result = extract(&html);
    assert_eq!(result.text.as_deref(), Some("The post."));
}

#[test]
fn extract_falls_back_to_comment_free_paragraphs() {
    let html = r#"
        <html><body>
          <div class="comments-comment-item">
            <p class="attributed-text-segment-list__content">COMMENT_TEXT</p>
          </div>
          <p class="attributed-text-segment-list__content">POST_ONE</p>
          <p class="attributed-text-segment-list__content">POST_TWO</p>
          <p class="attributed-text-segment-list__content">POST_THREE</p>
          <p class="attributed-text-segment-list__content">POST_FOUR</p>
        </body></html>
    "#;

    let result = extract(html);
    let text = result.text.unwrap_or_default();
    assert_eq!(text, "POST_ONE\n\nPOST_TWO\n\nPOST_THREE");
    assert!(!text.contains("COMMENT_TEXT"));
}

#[test]
fn extract_last_resort_uses_first_two_article_paragraphs() {
    let long = "word ".repeat(500);
    let html = format!(
        r#"<html><body>
          <article>
            <div class="comments-comment-item"><p>{long}</p></div>
            <p>SECOND</p>
            <p>THIRD</p>
          </article>
        </body></html>"#
    );

    // The broad article selector is too long and there are no content
    // paragraphs, so the container fallback keeps the first two paragraphs
    // regardless of ancestry, then truncation ends them with a period.
    let result = extract(&html);
    let text = result.text.unwrap_or_default();
    assert!(text.starts_with("word word"));
    assert!(text.ends_with("SECOND."));
    assert!(!text.contains("THIRD"));
}

#[test]
fn extract_truncates_long_fallback_text_to_five_sentences() {
    let sentence = |i: usize| format!("Sentence {i} {}", "x".repeat(405));
    let separators = [".  ", "! ", "?", ".\n", ". "];
    let mut text = String::new();
    for i in 1..=6 {
        text.push_str(&sentence(i));
        if i <= 5 {
            text.push_str(separators[i - 1]);
        }
    }
    text.push('.');
    assert!(text.chars().count() >= 2000);

    let html = format!(
        r#"<html><body><p class="attributed-text-segment-list__content">{text}</p></body></html>"#
    );

    let result = extract(&html);
    let expected = (1..=5).map(sentence).collect::<Vec<_>>().join(". ") + ".";
    assert_eq!(result.text.as_deref(), Some(expected.as_str()));
}

fn six_sentence_post() -> (String, String) {
    let sentence = |i: usize| format!("Sentence {i} {}", "y".repeat(400));
    let text = (1..=6).map(sentence).collect::<Vec<_>>().join(". ") + ".";
    let expected = (1..=5).map(sentence).collect::<Vec<_>>().join(". ") + ".";
    (text, expected)
}

#[test]
fn extract_truncates_long_commentary_without_paragraphs() {
    let (text, expected) = six_sentence_post();
    assert!(text.chars().count() >= 2000);

    let html = format!(
        r#"<html><body>
          <div data-test-id="main-feed-activity-card__commentary">{text}</div>
        </body></html>"#
    );

    let result = extract(&html);
    assert_eq!(result.text.as_deref(), Some(expected.as_str()));
}

#[test]
fn extract_truncates_long_description_spans_in_article() {
    let (text, expected) = six_sentence_post();

    let html = format!(
        r#"<html><body>
          <article class="feed-shared-update-v2">
            <div class="update-components-text"><span>{text}</span></div>
          </article>
        </body></html>"#
    );

    let result = extract(&html);
    assert_eq!(result.text.as_deref(), Some(expected.as_str()));
}

#[test]
fn extract_returns_none_text_when_nothing_matches() {
    let html = r#"<html><body><nav>Home</nav><div>chrome</div></body></html>"#;

    let result = extract(html);
    assert!(result.text.is_none());
}

#[test]
fn threshold_is_configurable() {
    let html = r#"
        <html><body><article>
          <div class="attributed-text-segment-list__content">Twelve chars</div>
          <div class="update-components-text">Short</div>
        </article></body></html>
    "#;

    let strict = Options {
        text_length_threshold: 10,
        ..Options::default()
    };

    assert_eq!(extract(html).text.as_deref(), Some("Twelve chars"));
    assert_eq!(extract_with_options(html, &strict).text.as_deref(), Some("Short"));
}
