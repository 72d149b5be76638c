//! Dimension Resolver
//!
//! Computes an effective width and height from the size signals an image
//! element carries. The result is a size hint: the rendered style can reflect
//! CSS scaling rather than the true media size.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{LEADING_INTEGER, STYLE_HEIGHT, STYLE_WIDTH};

/// Raw size signals of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeSignals {
    /// `width` / `height` layout attributes.
    pub width_attr: Option<String>,
    pub height_attr: Option<String>,
    /// Decoded media size, written by the page provider as
    /// `data-natural-width` / `data-natural-height`.
    pub natural_width: Option<String>,
    pub natural_height: Option<String>,
    /// Inline `style` declarations.
    pub style: Option<String>,
}

impl SizeSignals {
    #[must_use]
    pub fn from_selection(sel: &Selection) -> Self {
        Self {
            width_attr: dom::get_attribute(sel, "width"),
            height_attr: dom::get_attribute(sel, "height"),
            natural_width: dom::get_attribute(sel, "data-natural-width"),
            natural_height: dom::get_attribute(sel, "data-natural-height"),
            style: dom::get_attribute(sel, "style"),
        }
    }
}

/// Effective size in pixels; 0 means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Resolve each axis independently: layout attribute, then natural size, then
/// rendered style. The first non-zero value wins.
#[must_use]
pub fn resolve_dimensions(signals: &SizeSignals) -> Dimensions {
    let style = signals.style.as_deref().unwrap_or_default();

    let width = first_non_zero([
        parse_leading_int(signals.width_attr.as_deref()),
        parse_leading_int(signals.natural_width.as_deref()),
        style_length(style, Axis::Width),
    ]);
    let height = first_non_zero([
        parse_leading_int(signals.height_attr.as_deref()),
        parse_leading_int(signals.natural_height.as_deref()),
        style_length(style, Axis::Height),
    ]);

    Dimensions { width, height }
}

#[derive(Clone, Copy)]
enum Axis {
    Width,
    Height,
}

fn style_length(style: &str, axis: Axis) -> u32 {
    let pattern = match axis {
        Axis::Width => &*STYLE_WIDTH,
        Axis::Height => &*STYLE_HEIGHT,
    };
    pattern
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map_or(0, |m| parse_leading_int(Some(m.as_str())))
}

fn first_non_zero<const N: usize>(values: [u32; N]) -> u32 {
    values.into_iter().find(|v| *v > 0).unwrap_or(0)
}

/// Integer prefix of a value (`"300px"` is 300); 0 when absent or invalid.
fn parse_leading_int(value: Option<&str>) -> u32 {
    value
        .and_then(|v| LEADING_INTEGER.captures(v))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
}
