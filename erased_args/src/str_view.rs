// Copyright 2026 the Erased Args Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-owning byte-string views.
//!
//! Both string alternatives of [`Value`](crate::value::Value) store a [`StrView`]: a pointer and
//! a length into bytes owned by someone else. The view never copies or frees the bytes.

use core::fmt::{self, Write as _};
use core::iter::Copied;
use core::slice;
use core::str::Utf8Error;

/// Returns the length of a NUL-terminated byte string.
///
/// Scans up to the first `0` byte. A buffer without a terminator has its full length.
/// Usable in `const` contexts and gives the same answer at compile time and at runtime.
#[must_use]
pub const fn c_str_len(bytes: &[u8]) -> usize {
    let mut len = 0;
    while len < bytes.len() && bytes[len] != 0 {
        len += 1;
    }
    len
}

/// A borrowed `(pointer, length)` view over string bytes.
///
/// Ordering and equality compare bytes lexicographically, with a shorter prefix sorting first.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrView<'a> {
    data: &'a [u8],
}

impl<'a> StrView<'a> {
    /// Creates a view over `data` with a known length.
    #[must_use]
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Creates a view over the NUL-terminated prefix of `bytes`.
    #[must_use]
    pub const fn from_nul_terminated(bytes: &'a [u8]) -> Self {
        let (data, _) = bytes.split_at(c_str_len(bytes));
        Self { data }
    }

    /// Returns the viewed bytes.
    #[must_use]
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Returns a pointer to the first byte.
    #[must_use]
    #[inline]
    pub const fn data(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Returns the number of bytes in the view.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the byte at `pos`, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: usize) -> Option<u8> {
        self.data.get(pos).copied()
    }

    /// Interprets the bytes as UTF-8.
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        core::str::from_utf8(self.data)
    }

    /// Drops the first `n` bytes from the view (all of them if `n > len`).
    pub fn remove_prefix(&mut self, n: usize) {
        self.data = self.data.get(n..).unwrap_or(&[]);
    }

    /// Iterates over the bytes.
    pub fn iter(&self) -> Copied<slice::Iter<'a, u8>> {
        self.data.iter().copied()
    }
}

impl<'a> From<&'a str> for StrView<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for StrView<'a> {
    #[inline]
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl PartialEq<str> for StrView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.data == other.as_bytes()
    }
}

impl PartialEq<&str> for StrView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.data == other.as_bytes()
    }
}

impl<'a> IntoIterator for StrView<'a> {
    type Item = u8;
    type IntoIter = Copied<slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the bytes as text, replacing invalid UTF-8 with U+FFFD.
impl fmt::Display for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.data.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for chunk in self.data.utf8_chunks() {
            write!(f, "{}", chunk.valid().escape_debug())?;
            for b in chunk.invalid() {
                write!(f, "\\x{b:02x}")?;
            }
        }
        f.write_char('"')
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;
    use alloc::string::ToString;

    use super::{StrView, c_str_len};

    #[test]
    fn c_str_len_matches_in_const_and_runtime() {
        const ABC: usize = c_str_len(b"abc\0");
        let runtime = c_str_len(std::hint::black_box(b"abc\0"));
        assert_eq!(ABC, 3);
        assert_eq!(runtime, 3);
    }

    #[test]
    fn c_str_len_without_terminator_is_full_length() {
        assert_eq!(c_str_len(b"abc"), 3);
        assert_eq!(c_str_len(b""), 0);
        assert_eq!(c_str_len(b"\0abc"), 0);
    }

    #[test]
    fn from_nul_terminated_stops_at_first_nul() {
        const V: StrView<'static> = StrView::from_nul_terminated(b"Be One\0With Yuri");
        assert_eq!(V, "Be One");
        assert_eq!(V.len(), 6);
    }

    #[test]
    fn ordering_is_lexicographic_then_length() {
        let a = StrView::from("abc");
        let b = StrView::from("abd");
        let prefix = StrView::from("ab");
        assert!(a < b);
        assert!(prefix < a);
        assert_eq!(a, StrView::new(b"abc"));
    }

    #[test]
    fn remove_prefix_saturates() {
        let mut v = StrView::from("hello");
        v.remove_prefix(2);
        assert_eq!(v, "llo");
        assert_eq!(v.get(0), Some(b'l'));
        v.remove_prefix(10);
        assert!(v.is_empty());
    }

    #[test]
    fn display_is_lossy_and_debug_escapes() {
        let v = StrView::new(b"a\xffb\n");
        assert_eq!(v.to_string(), "a\u{fffd}b\n");
        assert_eq!(format!("{v:?}"), "\"a\\xffb\\n\"");
        assert!(v.to_str().is_err());
    }
}
