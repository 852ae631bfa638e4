//! Display normalization for corpus text.

use std::borrow::Cow;

/// U+200B, used in Khmer text to mark word boundaries for line breaking.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Remove every zero-width space from `text`.
///
/// Borrows the input when there is nothing to strip.
pub fn strip_zero_width(text: &str) -> Cow<'_, str> {
    if contains_zero_width(text) {
        Cow::Owned(text.chars().filter(|c| *c != ZERO_WIDTH_SPACE).collect())
    } else {
        Cow::Borrowed(text)
    }
}

pub fn contains_zero_width(text: &str) -> bool {
    text.contains(ZERO_WIDTH_SPACE)
}
