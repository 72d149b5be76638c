//! Strategy Infrastructure
//!
//! Heuristic fallback chains are expressed as ordered lists of named
//! strategies. Each strategy is a plain function from an input (and the
//! extraction options) to an optional candidate; `first_success` walks the
//! list and returns the first candidate the caller's acceptance predicate
//! keeps.

pub mod utils;

use tracing::debug;

use crate::Options;

/// A named heuristic producing an optional candidate from its input.
pub struct Strategy<I: ?Sized, T> {
    /// Name used in diagnostics.
    pub name: &'static str,
    /// The heuristic itself.
    pub run: fn(&I, &Options) -> Option<T>,
}

impl<I: ?Sized, T> Strategy<I, T> {
    #[must_use]
    pub const fn new(name: &'static str, run: fn(&I, &Options) -> Option<T>) -> Self {
        Self { name, run }
    }
}

impl<I: ?Sized, T> Clone for Strategy<I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized, T> Copy for Strategy<I, T> {}

impl<I: ?Sized, T> std::fmt::Debug for Strategy<I, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Strategy").field(&self.name).finish()
    }
}

/// Runs strategies in order and returns the first accepted candidate along
/// with the name of the strategy that produced it.
///
/// A strategy yielding `None` and a strategy whose candidate is rejected are
/// both skipped; neither stops the chain.
///
/// # Example
///
/// ```rust
/// use rs_postextract::selector::{first_success, Strategy};
/// use rs_postextract::Options;
///
/// fn short(input: &str, _: &Options) -> Option<String> {
///     input.split_whitespace().next().map(str::to_string)
/// }
/// fn whole(input: &str, _: &Options) -> Option<String> {
///     Some(input.to_string())
/// }
///
/// let chain = [Strategy::new("short", short), Strategy::new("whole", whole)];
/// let options = Options::default();
/// let found = first_success(&chain, "hello world", &options, |s: &String| s.len() > 5);
/// assert_eq!(found, Some(("whole", "hello world".to_string())));
/// ```
pub fn first_success<I, T, F>(
    strategies: &[Strategy<I, T>],
    input: &I,
    options: &Options,
    accept: F,
) -> Option<(&'static str, T)>
where
    I: ?Sized,
    F: Fn(&T) -> bool,
{
    for strategy in strategies {
        match (strategy.run)(input, options) {
            Some(candidate) if accept(&candidate) => {
                debug!(strategy = strategy.name, "strategy accepted");
                return Some((strategy.name, candidate));
            }
            Some(_) => debug!(strategy = strategy.name, "strategy candidate rejected"),
            None => debug!(strategy = strategy.name, "strategy found nothing"),
        }
    }
    None
}
