//! Read-only page snapshots.
//!
//! A `PageSnapshot` is the rendered post page as the page provider handed it
//! over: the serialized DOM after scripts settled, "see more" expanded and
//! lazy media given a chance to resolve. The extractor only reads from it.

use crate::dom::{self, Document, Selection};
use crate::patterns::ARTICLE_SELECTOR;

/// Point-in-time, read-only view of one rendered post page.
pub struct PageSnapshot {
    document: Document,
}

impl PageSnapshot {
    /// Builds a snapshot from serialized rendered HTML.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: dom::parse(html),
        }
    }

    /// Page-wide selector query, in document order.
    #[must_use]
    pub fn select(&self, selector: &str) -> Selection<'_> {
        self.document.select(selector)
    }

    /// The first element recognized as scoping the primary post.
    #[must_use]
    pub fn article(&self) -> Option<Selection<'_>> {
        let article = self.document.select(ARTICLE_SELECTOR).first();
        article.exists().then_some(article)
    }

    /// Elements matching `selector` under the article container.
    ///
    /// Empty when the page has no article container.
    #[must_use]
    pub fn select_in_article(&self, selector: &str) -> Vec<Selection<'_>> {
        self.article()
            .map(|article| dom::elements(&dom::query_selector_all(&article, selector)))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for PageSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSnapshot")
            .field("has_article", &self.article().is_some())
            .finish_non_exhaustive()
    }
}
