//! Byte strings with power-of-two capacity growth and C-string interop.
//!
//! The crate centers on two independent types:
//!
//! - [`TString`]: a heap-backed, growable byte string. The backing block is
//!   always a power of two in size and always carries a NUL terminator one
//!   past the content, so the content can be handed to raw character-pointer
//!   APIs without copying. Repeated single-byte appends are amortized O(1).
//! - [`TStr`]: an immutable, non-owning view over caller-managed bytes. Every
//!   query on it is a `const fn`, so string constants can be inspected and
//!   compared at compile time.
//!
//! Neither type knows about the other; they only share the same comparison
//! and search semantics.
//!
//! Content is raw bytes, not Unicode: indexing, `find`, and `split` all work
//! on byte offsets, and a zero byte is meaningful only as the terminator the
//! buffer maintains past its content. Instances are not synchronized; share
//! one across threads the same way you would share a `Vec<u8>`.
//!
//! ```rust
//! use tstring::TString;
//!
//! let mut s = TString::from("Hello");
//! s.append(", World!");
//! assert_eq!(s, "Hello, World!");
//! assert_eq!(s.find("World"), Some(7));
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod capacity;
mod cmp;
mod error;
#[cfg(feature = "serde")]
mod serde_impls;
mod string;
mod view;

#[cfg(test)]
mod tests;

pub use error::{OutOfRangeError, ReserveError};
pub use string::TString;
pub use view::TStr;

/// Macro to build a [`TStr`] view from a string literal, usable in `const`
/// contexts.
///
/// ```rust
/// use tstring::{TStr, tstr};
///
/// const GREETING: TStr<'static> = tstr!("Compile Time String");
/// const _: () = assert!(GREETING.len() == 19);
/// ```
#[macro_export]
macro_rules! tstr {
    ($text:literal) => {
        $crate::TStr::from_str($text)
    };
}
