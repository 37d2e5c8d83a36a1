//! Substring search and delimiter-set tokenization for [`ZString`].

use crate::{ZString, ZStringError, index};

impl ZString {
    /// Returns the codepoint index of the first occurrence of `literal`, or
    /// [`None`] if it does not occur.
    ///
    /// The match itself is byte-wise; the reported position is in codepoint
    /// units for consistency with every other indexed operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use zstring::ZString;
    ///
    /// let s = ZString::from("日本語abc");
    /// assert_eq!(s.find("abc"), Some(3));
    /// assert_eq!(s.find("xyz"), None);
    /// ```
    #[inline]
    pub fn find(&self, literal: &str) -> Option<usize> {
        let s = self.as_str();
        s.find(literal).map(|at| index::byte_to_char_idx(s, at))
    }

    /// Returns the `index`-th token obtained by splitting at every codepoint
    /// in `delimiters`, or [`None`] once `index` passes the last token.
    ///
    /// Consecutive delimiters yield empty tokens, as do leading and trailing
    /// delimiters, so joining all tokens with any single delimiter
    /// reconstructs the original content.  Each call retokenizes from the
    /// start, costing O(n); callers that want every token should iterate
    /// [`str::split`] over [`as_str`](Self::as_str) once instead.
    ///
    /// The returned view borrows this string and lives until the next
    /// mutating call.
    ///
    /// # Examples
    ///
    /// ```
    /// use zstring::ZString;
    ///
    /// let s = ZString::from("a,b;;c");
    /// assert_eq!(s.split(",;", 0), Some("a"));
    /// assert_eq!(s.split(",;", 2), Some(""));
    /// assert_eq!(s.split(",;", 3), Some("c"));
    /// assert_eq!(s.split(",;", 4), None);
    /// ```
    #[inline]
    pub fn split(&self, delimiters: &str, index: usize) -> Option<&str> {
        self.as_str()
            .split(|c: char| delimiters.contains(c))
            .nth(index)
    }

    /// Like [`split`](Self::split), but returns an owned, independent copy of
    /// the token.
    ///
    /// Fails with [`ZStringError::OutOfMemory`] if the copy cannot be
    /// allocated; a token index past the end is `Ok(None)`.
    #[inline]
    pub fn split_owned(
        &self,
        delimiters: &str,
        index: usize,
    ) -> Result<Option<ZString>, ZStringError> {
        self.split(delimiters, index)
            .map(ZString::try_from_str)
            .transpose()
    }

    /// Returns an owned copy of the codepoints in the half-open range
    /// `[start, end)`.
    ///
    /// `end < start` or `end > len()` fails with
    /// [`ZStringError::InvalidRange`]; allocation failure is
    /// [`ZStringError::OutOfMemory`].
    pub fn substr(&self, start: usize, end: usize) -> Result<ZString, ZStringError> {
        if end < start {
            return Err(ZStringError::InvalidRange);
        }
        let from = self.byte_offset(start)?;
        let to = self.byte_offset(end)?;
        ZString::try_from_str(&self.as_str()[from..to])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let s = ZString::from("hello world");
        assert_eq!(s.find("world"), Some(6));
        assert_eq!(s.find("hello"), Some(0));
        assert_eq!(s.find("o"), Some(4));
        assert_eq!(s.find("missing"), None);
    }

    #[test]
    fn test_find_reports_codepoint_units() {
        // "日本語" is 9 bytes but 3 codepoints.
        let s = ZString::from("日本語abc");
        assert_eq!(s.find("abc"), Some(3));
        assert_eq!(s.find("語"), Some(2));
    }

    #[test]
    fn test_find_empty_needle() {
        let s = ZString::from("ab");
        assert_eq!(s.find(""), Some(0));
    }

    #[test]
    fn test_split() {
        let s = ZString::from("one,two,three");
        assert_eq!(s.split(",", 0), Some("one"));
        assert_eq!(s.split(",", 1), Some("two"));
        assert_eq!(s.split(",", 2), Some("three"));
        assert_eq!(s.split(",", 3), None);
    }

    #[test]
    fn test_split_delimiter_set() {
        let s = ZString::from("a,b;c");
        assert_eq!(s.split(",;", 1), Some("b"));
        assert_eq!(s.split(",;", 2), Some("c"));
    }

    #[test]
    fn test_split_consecutive_delimiters_yield_empty_tokens() {
        let s = ZString::from(",a,,b,");
        let tokens: Vec<_> = (0..).map_while(|i| s.split(",", i)).collect();
        assert_eq!(tokens, ["", "a", "", "b", ""]);
    }

    #[test]
    fn test_split_no_delimiter_present() {
        let s = ZString::from("abc");
        assert_eq!(s.split(",", 0), Some("abc"));
        assert_eq!(s.split(",", 1), None);
    }

    #[test]
    fn test_split_multibyte_delimiter() {
        let s = ZString::from("a、b、c");
        assert_eq!(s.split("、", 1), Some("b"));
    }

    #[test]
    fn test_split_owned() {
        let s = ZString::from("a,b");
        let token = s.split_owned(",", 1).unwrap().unwrap();
        assert_eq!(token.as_str(), "b");
        assert_eq!(s.split_owned(",", 2).unwrap(), None);
    }

    #[test]
    fn test_substr() {
        let s = ZString::from("a日本語b");
        let t = s.substr(1, 4).unwrap();
        assert_eq!(t.as_str(), "日本語");

        let whole = s.substr(0, 5).unwrap();
        assert_eq!(whole, s);

        let empty = s.substr(2, 2).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_substr_invalid_range() {
        let s = ZString::from("abc");
        assert_eq!(s.substr(2, 1).unwrap_err(), ZStringError::InvalidRange);
        assert_eq!(s.substr(0, 4).unwrap_err(), ZStringError::InvalidRange);
    }
}
