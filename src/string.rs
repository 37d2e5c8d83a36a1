//! Implementations for the [`ZString`] type.
//!
//! The type itself lives in the `lib.rs` file to avoid having to have a public alias, but
//! implementations live here.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use crate::{ZString, ZStringError, index};

impl ZString {
    /// Creates a new empty [`ZString`] with zero size and capacity.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new empty [`ZString`] with a capacity, in bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Converts a vector of bytes to a [`ZString`], validating it as UTF-8.
    ///
    /// Malformed input fails with [`ZStringError::InvalidRange`]; no partial
    /// string is constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use zstring::{ZString, ZStringError};
    ///
    /// let s = ZString::from_utf8(b"h\xc3\xa9llo".to_vec()).unwrap();
    /// assert_eq!(s.as_str(), "héllo");
    ///
    /// // A truncated multi-byte sequence is rejected.
    /// assert_eq!(
    ///     ZString::from_utf8(b"h\xc3".to_vec()).unwrap_err(),
    ///     ZStringError::InvalidRange,
    /// );
    /// ```
    #[inline]
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, ZStringError> {
        match std::str::from_utf8(&bytes) {
            Ok(_) => Ok(Self { buf: bytes }),
            Err(_) => Err(ZStringError::InvalidRange),
        }
    }

    /// Creates a [`ZString`] by copying a string slice, reporting growth
    /// failure instead of aborting.
    #[inline]
    pub fn try_from_str(literal: &str) -> Result<Self, ZStringError> {
        let mut new = Self::new();
        new.push_str(literal)?;
        Ok(new)
    }

    /// Returns a `&str` view of the entire buffer.
    ///
    /// The view borrows the string and is invalidated by the next mutating
    /// call, which the borrow checker enforces.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: the buffer is valid UTF-8 at every observable point; all
        // mutations keep that invariant.
        unsafe { std::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns the number of bytes in use.
    #[inline]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes allocated.  Always at least [`size`](Self::size).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of codepoints.
    ///
    /// This decodes the buffer start to end and is O(n) in
    /// [`size`](Self::size); callers needing it repeatedly should cache it.
    #[inline]
    pub fn len(&self) -> usize {
        index::count_chars(self.as_str())
    }

    /// Returns `true` if the string holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Ensures the buffer can hold at least `bytes` bytes in total.
    ///
    /// Capacity never shrinks, and growth is amortized geometric, so repeated
    /// appends stay amortized O(1) per byte.  On failure returns
    /// [`ZStringError::OutOfMemory`] with size and capacity unchanged.
    #[inline]
    pub fn ensure_capacity(&mut self, bytes: usize) -> Result<(), ZStringError> {
        if bytes > self.buf.capacity() {
            self.grow(bytes - self.buf.len())?;
        }
        Ok(())
    }

    /// Shrinks the capacity of this string to match its size, releasing
    /// slack.  The content is untouched.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
    }

    /// Resets the size to zero.  The capacity is retained; cannot fail.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Appends a string slice onto the end of this string.
    ///
    /// Fails with [`ZStringError::OutOfMemory`] if the buffer cannot grow, in
    /// which case the string is unchanged.
    #[inline]
    pub fn push_str(&mut self, literal: &str) -> Result<(), ZStringError> {
        self.grow(literal.len())?;
        self.buf.extend_from_slice(literal.as_bytes());
        Ok(())
    }

    /// Appends raw bytes after validating them as UTF-8.
    ///
    /// Malformed input fails with [`ZStringError::InvalidRange`] and appends
    /// nothing, so a truncated multi-byte sequence can never end up at the
    /// boundary.
    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), ZStringError> {
        let literal = std::str::from_utf8(bytes).map_err(|_| ZStringError::InvalidRange)?;
        self.push_str(literal)
    }

    /// Appends the given [`char`] to the end of this string.
    #[inline]
    pub fn push(&mut self, ch: char) -> Result<(), ZStringError> {
        let mut buf = [0; 4];
        self.push_str(ch.encode_utf8(&mut buf))
    }

    /// Inserts a string slice at the given codepoint position, shifting the
    /// remainder right.
    ///
    /// `index == len()` appends; `index > len()` fails with
    /// [`ZStringError::InvalidRange`].  Growth failure leaves the string
    /// byte-for-byte unchanged.
    ///
    /// This is an O(n) operation as it requires copying every byte after the
    /// insertion point.
    ///
    /// # Examples
    ///
    /// ```
    /// use zstring::ZString;
    ///
    /// let mut s = ZString::from("日語");
    /// s.insert(1, "本").unwrap();
    /// assert_eq!(s.as_str(), "日本語");
    /// ```
    pub fn insert(&mut self, index: usize, literal: &str) -> Result<(), ZStringError> {
        let at = self.byte_offset(index)?;
        self.grow(literal.len())?;
        self.buf.splice(at..at, literal.bytes());
        Ok(())
    }

    /// Removes and returns the codepoint at the given position, shifting
    /// subsequent bytes left.
    ///
    /// `index >= len()` fails with [`ZStringError::InvalidRange`].
    pub fn remove(&mut self, index: usize) -> Result<char, ZStringError> {
        let at = self.byte_offset(index)?;
        let ch = self.as_str()[at..]
            .chars()
            .next()
            .ok_or(ZStringError::InvalidRange)?;
        self.buf.drain(at..at + ch.len_utf8());
        Ok(ch)
    }

    /// Removes the codepoints in the half-open range `[start, end)`.
    ///
    /// `end < start` or `end > len()` fails with
    /// [`ZStringError::InvalidRange`]; `start == end` is a no-op success.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<(), ZStringError> {
        if end < start {
            return Err(ZStringError::InvalidRange);
        }
        let from = self.byte_offset(start)?;
        let to = self.byte_offset(end)?;
        self.buf.drain(from..to);
        Ok(())
    }

    /// Removes the last codepoint from the string and returns it.
    ///
    /// Returns [`None`] if this string is empty; that is a miss, not an
    /// error.
    #[inline]
    pub fn pop(&mut self) -> Option<char> {
        let ch = self.as_str().chars().next_back()?;
        let new_size = self.buf.len() - ch.len_utf8();
        self.buf.truncate(new_size);
        Some(ch)
    }

    /// Removes leading codepoints that are members of `whitelist`.
    ///
    /// Membership is per codepoint: a multi-byte whitelist entry matches only
    /// the whole encoded sequence, never individual bytes.  Stops at the
    /// first codepoint not in the whitelist.  Cannot fail.
    pub fn trim_start(&mut self, whitelist: &str) {
        let s = self.as_str();
        let kept = s.trim_start_matches(|c: char| whitelist.contains(c)).len();
        let cut = s.len() - kept;
        self.buf.drain(..cut);
    }

    /// Removes trailing codepoints that are members of `whitelist`.
    pub fn trim_end(&mut self, whitelist: &str) {
        let kept = self
            .as_str()
            .trim_end_matches(|c: char| whitelist.contains(c))
            .len();
        self.buf.truncate(kept);
    }

    /// Removes leading and trailing codepoints that are members of
    /// `whitelist`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zstring::ZString;
    ///
    /// let mut s = ZString::from(" a ");
    /// s.trim(" \t\n");
    /// assert_eq!(s.as_str(), "a");
    /// ```
    pub fn trim(&mut self, whitelist: &str) {
        self.trim_end(whitelist);
        self.trim_start(whitelist);
    }

    /// Reverses the codepoint order in place, without allocating.
    ///
    /// Each multi-byte codepoint keeps its internal byte order; only the
    /// codepoint positions swap.
    ///
    /// # Examples
    ///
    /// ```
    /// use zstring::ZString;
    ///
    /// let mut s = ZString::from("aé日");
    /// s.reverse();
    /// assert_eq!(s.as_str(), "日éa");
    /// ```
    pub fn reverse(&mut self) {
        self.buf.reverse();
        // Every multi-byte sequence is now byte-reversed: its continuation
        // bytes (0b10xxxxxx) come first, then the leading byte.  Reverse each
        // such run back into place.
        let mut i = 0;
        while i < self.buf.len() {
            let start = i;
            while self.buf[i] & 0xC0 == 0x80 {
                i += 1;
            }
            self.buf[start..=i].reverse();
            i += 1;
        }
    }

    /// Appends `n` additional copies of the current content, so the string
    /// grows to `(n + 1)` times its original size.
    ///
    /// `n == 0` is a no-op.  Fails with [`ZStringError::OutOfMemory`] if the
    /// required size overflows or the buffer cannot grow, with the string
    /// unchanged.
    pub fn repeat(&mut self, n: usize) -> Result<(), ZStringError> {
        let original = self.buf.len();
        let extra = original.checked_mul(n).ok_or(ZStringError::OutOfMemory)?;
        self.grow(extra)?;
        for _ in 0..n {
            self.buf.extend_from_within(..original);
        }
        Ok(())
    }

    /// Converts ASCII letters to lowercase in place.
    ///
    /// Non-ASCII codepoints pass through unchanged; there are no Unicode case
    /// tables here.
    #[inline]
    pub fn make_ascii_lowercase(&mut self) {
        // ASCII-only rewrites cannot break UTF-8: multi-byte sequences have
        // the high bit set in every byte and are left untouched.
        self.buf.make_ascii_lowercase();
    }

    /// Converts ASCII letters to uppercase in place.
    #[inline]
    pub fn make_ascii_uppercase(&mut self) {
        self.buf.make_ascii_uppercase();
    }

    /// Returns a deep copy with an independent buffer, reporting growth
    /// failure instead of aborting.
    ///
    /// The copy's capacity may be exactly its size.
    #[inline]
    pub fn try_clone(&self) -> Result<Self, ZStringError> {
        Self::try_from_str(self.as_str())
    }

    /// Returns the codepoint at the given position, or [`None`] if `index`
    /// is past the end.  A miss, not an error.
    ///
    /// This decodes from the start of the buffer and is O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use zstring::ZString;
    ///
    /// let s = ZString::from("héllo");
    /// assert_eq!(s.char_at(0), Some('h'));
    /// assert_eq!(s.char_at(1), Some('é'));
    /// assert_eq!(s.char_at(5), None);
    /// ```
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.as_str().chars().nth(index)
    }

    /// Resolves a codepoint index to a byte offset.
    ///
    /// `index == len()` resolves to the one-past-the-end offset (the valid
    /// insert-at-end position); `index > len()` is
    /// [`ZStringError::InvalidRange`].
    pub(crate) fn byte_offset(&self, index: usize) -> Result<usize, ZStringError> {
        let s = self.as_str();
        let at = index::char_to_byte_idx(s, index);
        // char_to_byte_idx clamps past-the-end indices, so only the clamped
        // case needs the extra codepoint count.
        if at == s.len() && index > index::count_chars(s) {
            return Err(ZStringError::InvalidRange);
        }
        Ok(at)
    }

    #[inline]
    fn grow(&mut self, additional: usize) -> Result<(), ZStringError> {
        self.buf
            .try_reserve(additional)
            .map_err(|_| ZStringError::OutOfMemory)
    }
}

impl Default for ZString {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ZString {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for ZString {
    #[inline]
    fn from(source: &str) -> Self {
        Self {
            buf: source.as_bytes().to_vec(),
        }
    }
}

impl From<String> for ZString {
    #[inline]
    fn from(source: String) -> Self {
        Self {
            buf: source.into_bytes(),
        }
    }
}

impl From<char> for ZString {
    #[inline]
    fn from(source: char) -> Self {
        let mut buf = [0; 4];
        Self::from(&*source.encode_utf8(&mut buf))
    }
}

impl AsRef<str> for ZString {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ZString {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ZString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for ZString {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ZString {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<ZString> for str {
    #[inline]
    fn eq(&self, other: &ZString) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<ZString> for &str {
    #[inline]
    fn eq(&self, other: &ZString) -> bool {
        *self == other.as_str()
    }
}

impl PartialOrd<str> for ZString {
    #[inline]
    fn partial_cmp(&self, other: &str) -> Option<std::cmp::Ordering> {
        Some(self.as_str().cmp(other))
    }
}

impl PartialOrd<&str> for ZString {
    #[inline]
    fn partial_cmp(&self, other: &&str) -> Option<std::cmp::Ordering> {
        Some(self.as_str().cmp(other))
    }
}

impl FromIterator<char> for ZString {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut result: String = Default::default();
        result.extend(iter);
        Self::from(result)
    }
}
