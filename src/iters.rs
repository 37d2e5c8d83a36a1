//! Implementation for the various char iterators.
//!
//! The types themselves live in the lib.rs file to avoid having to have a public alias, but
//! implementations live here.

use std::iter::FusedIterator;

use crate::{CharIndices, Chars, ZString};

impl ZString {
    /// Returns an iterator over the codepoints of this string.
    ///
    /// The iterator starts at byte offset zero and decodes one codepoint per
    /// step, so each step is O(1).  It is forward-only and single-pass;
    /// construct a fresh iterator to restart.  While it is alive the string
    /// cannot be mutated, which the borrow checker enforces.
    #[inline]
    #[must_use]
    pub fn chars(&self) -> Chars<'_> {
        Chars {
            remaining: self.as_str(),
        }
    }

    /// Returns an iterator over the codepoints of this string and their
    /// positions, in codepoint units.
    #[inline]
    #[must_use]
    pub fn char_indices(&self) -> CharIndices<'_> {
        CharIndices {
            chars: self.chars(),
            index: 0,
        }
    }
}

impl<'a> Chars<'a> {
    /// Returns the not-yet-decoded remainder of the string.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.remaining
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        let ch = self.remaining.chars().next()?;
        self.remaining = &self.remaining[ch.len_utf8()..];
        Some(ch)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // One to four bytes per codepoint.
        let bytes = self.remaining.len();
        (bytes.div_ceil(4), Some(bytes))
    }
}

impl FusedIterator for Chars<'_> {}

impl Iterator for CharIndices<'_> {
    type Item = (usize, char);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.index;
        let ch = self.chars.next()?;
        self.index += 1;
        Some((pos, ch))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl FusedIterator for CharIndices<'_> {}
