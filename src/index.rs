//! Codepoint/byte index translation for UTF-8 string slices.
//!
//! This file mostly defers to `str_indices`, which counts codepoints with
//! vectorized bit tricks instead of decoding each character.

/// Counts the codepoints in `text`.
///
/// Runs in O(n) time.
#[inline]
pub(crate) fn count_chars(text: &str) -> usize {
    str_indices::chars::count(text)
}

/// Converts from codepoint-index to byte-index in a string slice.
///
/// Any past-the-end index will return the one-past-the-end byte index.
///
/// Runs in O(n) time.
#[inline]
pub(crate) fn char_to_byte_idx(text: &str, char_idx: usize) -> usize {
    str_indices::chars::to_byte_idx(text, char_idx)
}

/// Converts from byte-index to codepoint-index in a string slice.
///
/// If the byte is in the middle of a multi-byte codepoint, returns the index
/// of the codepoint that the byte belongs to.
///
/// Runs in O(n) time.
#[inline]
pub(crate) fn byte_to_char_idx(text: &str, byte_idx: usize) -> usize {
    str_indices::chars::from_byte_idx(text, byte_idx)
}
