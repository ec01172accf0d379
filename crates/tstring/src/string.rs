//! The growable string buffer.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Deref, DerefMut},
};

use bstr::ByteSlice;

use crate::{
    capacity::alloc_block,
    error::{OutOfRangeError, ReserveError},
};

/// A heap-backed byte string with power-of-two capacity growth.
///
/// The backing block always holds the content followed by a NUL terminator,
/// so [`as_c_ptr`](TString::as_c_ptr) can hand the content to raw
/// character-pointer APIs without copying. The block size is always the
/// smallest power of two that fits `len() + 1` bytes, except after an
/// explicit over-reservation via [`with_capacity`](TString::with_capacity) or
/// [`reserve`](TString::reserve).
///
/// An empty string owns nothing: `new()` and `take()` leave behind a
/// zero-capacity instance, and the first write allocates.
pub struct TString {
    /// Backing block; its length is the capacity. Either empty, or a
    /// power-of-two block with a NUL at offset `len`.
    buf: Box<[u8]>,
    len: usize,
}

/// Terminator handed out for strings that own no allocation.
const EMPTY: &[u8] = &[0];

#[cold]
#[inline(never)]
fn reserve_failed(err: ReserveError) -> ! {
    panic!("{err}")
}

impl TString {
    /// Creates an empty string. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
        }
    }

    /// Creates an empty string whose backing block holds at least
    /// `min_capacity` bytes (rounded up to a power of two).
    ///
    /// # Panics
    ///
    /// Panics if the block cannot be allocated; see
    /// [`try_with_capacity`](Self::try_with_capacity).
    #[must_use]
    pub fn with_capacity(min_capacity: usize) -> Self {
        match Self::try_with_capacity(min_capacity) {
            Ok(s) => s,
            Err(err) => reserve_failed(err),
        }
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    ///
    /// Returns a [`ReserveError`] if the block cannot be allocated.
    pub fn try_with_capacity(min_capacity: usize) -> Result<Self, ReserveError> {
        Ok(Self {
            buf: alloc_block(min_capacity)?,
            len: 0,
        })
    }

    /// Creates a string holding a single byte.
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        Self::from([byte])
    }

    /// Creates a string from a NUL-terminated byte sequence: content runs up
    /// to, and not including, the first zero byte. A sequence without a zero
    /// byte is taken whole.
    #[must_use]
    pub fn from_nul_terminated(raw: &[u8]) -> Self {
        let end = raw.find_byte(0).unwrap_or(raw.len());
        Self::from(&raw[..end])
    }

    fn from_content(content: &[u8]) -> Result<Self, ReserveError> {
        let mut buf = alloc_block(content.len() + 1)?;
        buf[..content.len()].copy_from_slice(content);
        // The block comes back zeroed, so the terminator at `content.len()`
        // is already in place.
        Ok(Self {
            buf,
            len: content.len(),
        })
    }

    /// Number of content bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the string holds no content bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the backing block in bytes. Zero for a string that has never
    /// been written to; otherwise a power of two ≥ `len() + 1`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The content bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The content bytes, mutably. Writing a zero byte here embeds it in the
    /// content; the terminator past the content is untouched.
    #[must_use]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }

    /// The content bytes plus the trailing NUL terminator.
    #[must_use]
    pub fn as_terminated_bytes(&self) -> &[u8] {
        if self.buf.is_empty() {
            EMPTY
        } else {
            &self.buf[..=self.len]
        }
    }

    /// A NUL-terminated pointer to the content, for raw character-pointer
    /// APIs. Valid until the string is mutated, moved, or dropped.
    #[must_use]
    pub fn as_c_ptr(&self) -> *const core::ffi::c_char {
        self.as_terminated_bytes().as_ptr().cast()
    }

    /// Grows the backing block to at least `min_capacity` bytes (rounded up
    /// to a power of two). Never shrinks; a no-op when the block is already
    /// large enough.
    ///
    /// # Panics
    ///
    /// Panics if the block cannot be allocated; see
    /// [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, min_capacity: usize) {
        if let Err(err) = self.try_reserve(min_capacity) {
            reserve_failed(err)
        }
    }

    /// Fallible form of [`reserve`](Self::reserve). On error the string is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ReserveError`] if the block cannot be allocated.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), ReserveError> {
        if min_capacity <= self.buf.len() {
            return Ok(());
        }
        let mut grown = alloc_block(min_capacity)?;
        grown[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = grown;
        Ok(())
    }

    /// Appends the content of any byte-sequence shape: another `TString` (by
    /// reference), `&str`, `String`, `&[u8]`, or a byte array.
    ///
    /// # Panics
    ///
    /// Panics if a larger block is needed and cannot be allocated; see
    /// [`try_append`](Self::try_append).
    pub fn append<S: AsRef<[u8]>>(&mut self, src: S) {
        if let Err(err) = self.try_append(src) {
            reserve_failed(err)
        }
    }

    /// Fallible form of [`append`](Self::append). All-or-nothing: on error
    /// the string is unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`ReserveError`] if a larger block is needed and cannot be
    /// allocated.
    pub fn try_append<S: AsRef<[u8]>>(&mut self, src: S) -> Result<(), ReserveError> {
        let src = src.as_ref();
        if src.is_empty() {
            return Ok(());
        }
        let new_len = self.len + src.len();
        if new_len + 1 > self.buf.len() {
            let mut grown = alloc_block(new_len + 1)?;
            grown[..self.len].copy_from_slice(&self.buf[..self.len]);
            self.buf = grown;
        }
        self.buf[self.len..new_len].copy_from_slice(src);
        self.buf[new_len] = 0;
        self.len = new_len;
        Ok(())
    }

    /// Appends a single byte. Amortized O(1) under the power-of-two growth
    /// policy.
    pub fn push(&mut self, byte: u8) {
        self.append([byte]);
    }

    /// Empties the string. The backing block is kept, so a later append of
    /// content that fits does not allocate.
    pub fn clear(&mut self) {
        self.len = 0;
        if let Some(first) = self.buf.first_mut() {
            *first = 0;
        }
    }

    /// Moves the content out, leaving `self` empty, owning nothing, and
    /// ready for reuse.
    #[must_use]
    pub fn take(&mut self) -> TString {
        core::mem::take(self)
    }

    fn content_from(&self, pos: usize) -> Result<&[u8], OutOfRangeError> {
        self.as_bytes()
            .get(pos..)
            .ok_or(OutOfRangeError { pos, len: self.len })
    }

    /// Copies out the byte range starting at `pos`, at most `max_len` bytes
    /// long, as an independent string. A range running past the end is
    /// clamped; `substr(len(), _)` is an empty success.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] when `pos > len()`.
    pub fn substr(&self, pos: usize, max_len: usize) -> Result<TString, OutOfRangeError> {
        let tail = self.content_from(pos)?;
        let take = max_len.min(tail.len());
        Ok(Self::from(&tail[..take]))
    }

    /// Copies out everything from `pos` to the end, as an independent string.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] when `pos > len()`.
    pub fn substr_from(&self, pos: usize) -> Result<TString, OutOfRangeError> {
        self.content_from(pos).map(Self::from)
    }

    /// Byte offset of the first occurrence of `needle`, or `None` if it does
    /// not occur. An empty needle matches at offset 0; a needle longer than
    /// the content never matches and is rejected without scanning.
    #[must_use]
    pub fn find<S: AsRef<[u8]>>(&self, needle: S) -> Option<usize> {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return Some(0);
        }
        if needle.len() > self.len {
            return None;
        }
        self.as_bytes().find(needle)
    }

    /// Splits on `delimiter`, copying every maximal non-empty run between
    /// delimiter bytes into its own string. Empty runs are dropped:
    /// consecutive delimiters and delimiters at either end produce nothing.
    #[must_use]
    pub fn split(&self, delimiter: u8) -> Vec<TString> {
        self.as_bytes()
            .split(|&b| b == delimiter)
            .filter(|run| !run.is_empty())
            .map(TString::from)
            .collect()
    }
}

impl Default for TString {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TString {
    /// Copies normalize: the clone's block is the smallest power of two for
    /// its length, regardless of any over-reservation in the source.
    fn clone(&self) -> Self {
        match Self::from_content(self.as_bytes()) {
            Ok(s) => s,
            Err(err) => reserve_failed(err),
        }
    }
}

impl From<&[u8]> for TString {
    fn from(content: &[u8]) -> Self {
        match Self::from_content(content) {
            Ok(s) => s,
            Err(err) => reserve_failed(err),
        }
    }
}

impl<const N: usize> From<[u8; N]> for TString {
    fn from(content: [u8; N]) -> Self {
        Self::from(content.as_slice())
    }
}

impl<const N: usize> From<&[u8; N]> for TString {
    fn from(content: &[u8; N]) -> Self {
        Self::from(content.as_slice())
    }
}

impl From<&str> for TString {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl From<&String> for TString {
    fn from(text: &String) -> Self {
        Self::from(text.as_bytes())
    }
}

impl From<String> for TString {
    fn from(text: String) -> Self {
        Self::from(text.as_bytes())
    }
}

impl Deref for TString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl DerefMut for TString {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl AsRef<[u8]> for TString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<S: AsRef<[u8]>> AddAssign<S> for TString {
    fn add_assign(&mut self, rhs: S) {
        self.append(rhs);
    }
}

impl<S: AsRef<[u8]>> Add<S> for TString {
    type Output = TString;

    fn add(mut self, rhs: S) -> TString {
        self.append(rhs);
        self
    }
}

impl<S: AsRef<[u8]>> Add<S> for &TString {
    type Output = TString;

    /// Copies the left operand, appends the right one, and leaves both
    /// unmodified.
    fn add(self, rhs: S) -> TString {
        let mut out = self.clone();
        out.append(rhs);
        out
    }
}

impl Hash for TString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Same scheme as `Hash for str` (content bytes, then the 0xff length
        // terminator), so equal content hashes identically to the equivalent
        // `str` value.
        state.write(self.as_bytes());
        state.write_u8(0xff);
    }
}

impl fmt::Display for TString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bytes().as_bstr(), f)
    }
}

impl fmt::Debug for TString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bytes().as_bstr(), f)
    }
}
