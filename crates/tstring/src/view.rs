//! The const, non-owning string view.

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

use bstr::ByteSlice;

use crate::error::OutOfRangeError;

/// An immutable view over caller-managed bytes.
///
/// A `TStr` never allocates and never outlives the memory it points to; the
/// borrow checker enforces that statically. Every query is a `const fn`, so
/// views over `'static` data can be built and inspected at compile time:
///
/// ```rust
/// use tstring::{TStr, tstr};
///
/// const GREETING: TStr<'static> = tstr!("Compile Time String");
/// const _: () = assert!(GREETING.len() == 19);
/// const _: () = assert!(GREETING.byte_at(0) == b'C');
/// ```
#[derive(Clone, Copy)]
pub struct TStr<'a> {
    bytes: &'a [u8],
}

impl<'a> TStr<'a> {
    /// Wraps a byte slice; its length is the content length.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Wraps the bytes of a string slice.
    #[must_use]
    pub const fn from_str(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
        }
    }

    /// Wraps a NUL-terminated byte sequence: content runs up to, and not
    /// including, the first zero byte. A sequence without a zero byte is
    /// taken whole.
    #[must_use]
    pub const fn from_nul_terminated(raw: &'a [u8]) -> Self {
        let mut end = 0;
        while end < raw.len() && raw[end] != 0 {
            end += 1;
        }
        let (content, _) = raw.split_at(end);
        Self { bytes: content }
    }

    /// Number of content bytes.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bytes.len()
    }

    /// Whether the view covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bytes.is_empty()
    }

    /// The viewed bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'a [u8] {
        self.bytes
    }

    /// Pointer to the first viewed byte. Not NUL-terminated unless the
    /// underlying memory is.
    #[must_use]
    pub const fn as_ptr(self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// The byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`; in const evaluation that is a compile
    /// error.
    #[must_use]
    pub const fn byte_at(self, index: usize) -> u8 {
        self.bytes[index]
    }

    /// Narrows the view to the byte range starting at `pos`, at most
    /// `max_len` bytes long. The result borrows the same underlying memory;
    /// nothing is copied. A range running past the end is clamped.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] when `pos > len()`.
    pub const fn substr(self, pos: usize, max_len: usize) -> Result<TStr<'a>, OutOfRangeError> {
        if pos > self.bytes.len() {
            return Err(OutOfRangeError {
                pos,
                len: self.bytes.len(),
            });
        }
        let (_, tail) = self.bytes.split_at(pos);
        let take = if max_len < tail.len() {
            max_len
        } else {
            tail.len()
        };
        let (content, _) = tail.split_at(take);
        Ok(TStr { bytes: content })
    }

    /// Narrows the view to everything from `pos` to the end.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] when `pos > len()`.
    pub const fn substr_from(self, pos: usize) -> Result<TStr<'a>, OutOfRangeError> {
        if pos > self.bytes.len() {
            return Err(OutOfRangeError {
                pos,
                len: self.bytes.len(),
            });
        }
        let (_, tail) = self.bytes.split_at(pos);
        Ok(TStr { bytes: tail })
    }

    /// Byte offset of the first occurrence of `needle`, or `None` if it does
    /// not occur. An empty needle matches at offset 0; a needle longer than
    /// the view never matches and is rejected without scanning.
    #[must_use]
    pub const fn find(self, needle: TStr<'_>) -> Option<usize> {
        if needle.bytes.is_empty() {
            return Some(0);
        }
        if self.bytes.len() < needle.bytes.len() {
            return None;
        }
        let last = self.bytes.len() - needle.bytes.len();
        let mut at = 0;
        while at <= last {
            let mut i = 0;
            while i < needle.bytes.len() && self.bytes[at + i] == needle.bytes[i] {
                i += 1;
            }
            if i == needle.bytes.len() {
                return Some(at);
            }
            at += 1;
        }
        None
    }

    /// Const-evaluable equality against another view.
    #[must_use]
    pub const fn const_eq(self, other: TStr<'_>) -> bool {
        if self.bytes.len() != other.bytes.len() {
            return false;
        }
        matches!(self.const_cmp(other), Ordering::Equal)
    }

    /// Const-evaluable byte-wise lexicographic ordering against another
    /// view.
    #[must_use]
    pub const fn const_cmp(self, other: TStr<'_>) -> Ordering {
        let (a, b) = (self.bytes, other.bytes);
        let shorter = if a.len() < b.len() { a.len() } else { b.len() };
        let mut i = 0;
        while i < shorter {
            if a[i] < b[i] {
                return Ordering::Less;
            }
            if a[i] > b[i] {
                return Ordering::Greater;
            }
            i += 1;
        }
        if a.len() < b.len() {
            Ordering::Less
        } else if a.len() > b.len() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Splits on `delimiter` into views of every maximal non-empty run
    /// between delimiter bytes. The views borrow the original memory; only
    /// the returned `Vec` allocates. Empty runs are dropped.
    #[must_use]
    pub fn split(self, delimiter: u8) -> Vec<TStr<'a>> {
        self.bytes
            .split(move |&b| b == delimiter)
            .filter(|run| !run.is_empty())
            .map(TStr::new)
            .collect()
    }
}

impl Deref for TStr<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl AsRef<[u8]> for TStr<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl Hash for TStr<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Same scheme as `Hash for str`; see the TString impl.
        state.write(self.bytes);
        state.write_u8(0xff);
    }
}

impl fmt::Display for TStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.bytes.as_bstr(), f)
    }
}

impl fmt::Debug for TStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.bytes.as_bstr(), f)
    }
}
