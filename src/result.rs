//! Result types for extraction output.
//!
//! This module defines the structured output handed to the caller after one
//! snapshot has been processed, plus the per-target record of a batch run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Content extracted from one post page.
///
/// `images` and `videos` keep first-seen order and never contain duplicate or
/// empty entries. A `None` text and empty media lists are valid outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Primary post text, `None` when no selector or fallback produced any.
    pub text: Option<String>,

    /// Post image URLs in first-seen order.
    pub images: Vec<String>,

    /// Post video URLs in first-seen order.
    pub videos: Vec<String>,
}

impl ExtractionResult {
    /// True when neither text nor media was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.images.is_empty() && self.videos.is_empty()
    }
}

/// Outcome for a single target of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// The target exactly as supplied by the caller.
    pub target: String,

    /// Whether extraction produced a result for this target.
    pub success: bool,

    /// Present when `success` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ExtractionResult>,

    /// Present when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    #[must_use]
    pub fn succeeded(target: impl Into<String>, result: ExtractionResult) -> Self {
        Self {
            target: target.into(),
            success: true,
            result: Some(result),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(target: impl Into<String>, error: &crate::Error) -> Self {
        Self {
            target: target.into(),
            success: false,
            result: None,
            error: Some(error.to_string()),
        }
    }
}

/// Drops empty and repeated URLs, keeping the first occurrence of each.
pub(crate) fn dedup_preserving_order<I>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| !url.is_empty())
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
