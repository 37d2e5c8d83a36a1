//! A growable, UTF-8 aware string type with codepoint-indexed editing.
//!
//! This crate provides [`ZString`], an owned string built on a growable byte
//! buffer whose public editing operations are addressed in *codepoints* rather
//! than bytes.  Every index-taking operation ([`ZString::insert`],
//! [`ZString::remove`], [`ZString::remove_range`], [`ZString::char_at`], ...)
//! counts decoded codepoints from the start of the buffer and never splits a
//! multi-byte sequence, so the buffer holds well-formed UTF-8 at every
//! observable point.
//!
//! Fallible operations report one of two failure kinds through
//! [`ZStringError`]: growth failures are [`ZStringError::OutOfMemory`] and
//! violated index, range, or encoding preconditions are
//! [`ZStringError::InvalidRange`].  On failure the string is left
//! byte-for-byte unchanged.  Lookup misses (an index past the end in
//! [`ZString::char_at`], [`ZString::pop`] on an empty string, an absent
//! substring in [`ZString::find`], a token index past the last token in
//! [`ZString::split`]) are `None`, not errors.
//!
//! Borrowed views into the buffer are plain `&str` slices, so the borrow
//! checker enforces their validity window: a view lives exactly until the
//! next mutating call on the string it was taken from.
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! use zstring::ZString;
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let mut s = ZString::from("héllo");
//! assert_eq!(s.size(), 6); // bytes
//! assert_eq!(s.len(), 5);  // codepoints
//!
//! s.insert(5, " wörld")?;
//! assert_eq!(s.as_str(), "héllo wörld");
//!
//! assert_eq!(s.find("wörld"), Some(6));
//! assert_eq!(s.char_at(1), Some('é'));
//! #     Ok(())
//! # }
//! ```
//!
//! There is no Unicode normalization, collation, or grapheme segmentation
//! here, and case conversion is defined over the ASCII subrange only.  The
//! type has no internal synchronization; it is a single-owner value like
//! [`String`].

#![warn(
    missing_copy_implementations,
    missing_docs,
    unused_extern_crates,
    unused_qualifications,
    clippy::all
)]

mod error;
mod index;
mod iters;
mod search;
mod string;

pub use crate::error::ZStringError;

/// A growable UTF-8 string with codepoint-indexed editing.
///
/// The buffer tracks `size` (bytes in use, [`ZString::size`]) and `capacity`
/// (bytes allocated, [`ZString::capacity`]) separately; growth is amortized
/// geometric via the underlying [`Vec`], so repeated appends are amortized
/// O(1) per byte.  The codepoint count is [`ZString::len`], which is O(n) in
/// the buffer size.
///
/// # Examples
///
/// ```
/// use zstring::ZString;
///
/// let mut s = ZString::new();
/// s.push_str("abc").unwrap();
/// s.reverse();
/// assert_eq!(s.as_str(), "cba");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ZString {
    buf: Vec<u8>,
}

/// Iterator yielding the [`char`]s of a [`ZString`].
///
/// Holds a byte cursor into the borrowed buffer, so each step decodes one
/// codepoint in O(1).  Forward-only and fused: once exhausted, further calls
/// to `next` keep returning `None`.
#[derive(Clone, Debug)]
pub struct Chars<'a> {
    remaining: &'a str,
}

/// Iterator yielding `(index, char)` tuples from a [`ZString`].
///
/// The index is in codepoint units, consistent with every other indexed
/// operation on [`ZString`].
#[derive(Clone, Debug)]
pub struct CharIndices<'a> {
    chars: Chars<'a>,
    index: usize,
}
