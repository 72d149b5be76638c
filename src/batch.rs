//! Batch extraction over a page provider.
//!
//! Each target runs its full pipeline (acquire, then extract) to completion
//! before the next one starts. A failing target produces one failed entry and
//! never aborts the rest of the batch.

use tracing::{info_span, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::extract::extract_snapshot;
use crate::options::Options;
use crate::result::{BatchEntry, ExtractionResult};
use crate::snapshot::PageSnapshot;
use crate::url_utils::validate_target;

/// Session credential shared by every target of a batch.
///
/// The engine never inspects it; it is handed through to the page provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    name: String,
    value: String,
}

impl Credential {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Source of rendered page snapshots.
///
/// Implementations navigate to the target, wait for scripts to settle, expand
/// truncated text and give lazy media a chance to load before serializing the
/// page. Failures are reported as [`Error::AcquisitionFailure`].
pub trait PageProvider {
    fn acquire(&self, target: &Url, credential: Option<&Credential>) -> Result<PageSnapshot>;
}

impl<F> PageProvider for F
where
    F: Fn(&Url, Option<&Credential>) -> Result<PageSnapshot>,
{
    fn acquire(&self, target: &Url, credential: Option<&Credential>) -> Result<PageSnapshot> {
        self(target, credential)
    }
}

/// Extract every target in input order.
///
/// Returns `Err(Error::BatchTooLarge)` without acquiring anything when the
/// batch exceeds `options.max_batch_targets`. Otherwise returns exactly one
/// entry per target.
pub fn extract_batch<P, S>(
    targets: &[S],
    credential: Option<&Credential>,
    provider: &P,
    options: &Options,
) -> Result<Vec<BatchEntry>>
where
    P: PageProvider + ?Sized,
    S: AsRef<str>,
{
    if targets.len() > options.max_batch_targets {
        return Err(Error::BatchTooLarge {
            count: targets.len(),
            limit: options.max_batch_targets,
        });
    }

    let entries = targets
        .iter()
        .map(|target| {
            let target = target.as_ref();
            let _span = info_span!("extract_target", url = target).entered();

            match extract_target(target, credential, provider, options) {
                Ok(result) => BatchEntry::succeeded(target, result),
                Err(err) => {
                    warn!(error = %err, "target failed");
                    BatchEntry::failed(target, &err)
                }
            }
        })
        .collect();

    Ok(entries)
}

/// Validate, acquire and extract a single target.
pub fn extract_target<P>(
    target: &str,
    credential: Option<&Credential>,
    provider: &P,
    options: &Options,
) -> Result<ExtractionResult>
where
    P: PageProvider + ?Sized,
{
    let url = validate_target(target)?;
    let snapshot = provider.acquire(&url, credential)?;
    Ok(extract_snapshot(&snapshot, options))
}
