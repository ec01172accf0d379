//! Comparison operators for both string types, against every accepted
//! byte-sequence shape.
//!
//! Each operation is implemented once over `&[u8]`; the per-shape entry
//! points are generated, so `TString`/`TStr` compare against each other's
//! kind of content (`str`, `String`, byte slices) without a combinatorial
//! pile of hand-written bodies. Semantics are byte-wise lexicographic
//! throughout; equal content implies equal length.

use alloc::{string::String, vec::Vec};
use core::cmp::Ordering;

use crate::{TStr, TString};

impl PartialEq for TString {
    fn eq(&self, other: &TString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TString {}

impl PartialOrd for TString {
    fn partial_cmp(&self, other: &TString) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TString {
    fn cmp(&self, other: &TString) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialEq for TStr<'_> {
    fn eq(&self, other: &TStr<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for TStr<'_> {}

impl PartialOrd for TStr<'_> {
    fn partial_cmp(&self, other: &TStr<'_>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TStr<'_> {
    fn cmp(&self, other: &TStr<'_>) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

macro_rules! impl_shape_cmp {
    ([$($g:tt)*] $lhs:ty, $rhs:ty) => {
        impl<$($g)*> PartialEq<$rhs> for $lhs {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                let other: &[u8] = other.as_ref();
                self.as_bytes() == other
            }
        }

        impl<$($g)*> PartialEq<$lhs> for $rhs {
            #[inline]
            fn eq(&self, other: &$lhs) -> bool {
                let this: &[u8] = self.as_ref();
                this == other.as_bytes()
            }
        }

        impl<$($g)*> PartialOrd<$rhs> for $lhs {
            #[inline]
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                let other: &[u8] = other.as_ref();
                Some(self.as_bytes().cmp(other))
            }
        }

        impl<$($g)*> PartialOrd<$lhs> for $rhs {
            #[inline]
            fn partial_cmp(&self, other: &$lhs) -> Option<Ordering> {
                let this: &[u8] = self.as_ref();
                Some(this.cmp(other.as_bytes()))
            }
        }
    };
}

impl_shape_cmp!([] TString, str);
impl_shape_cmp!(['x] TString, &'x str);
impl_shape_cmp!([] TString, String);
impl_shape_cmp!([] TString, [u8]);
impl_shape_cmp!(['x] TString, &'x [u8]);
impl_shape_cmp!([const N: usize] TString, [u8; N]);
impl_shape_cmp!(['x, const N: usize] TString, &'x [u8; N]);
impl_shape_cmp!([] TString, Vec<u8>);

impl_shape_cmp!(['a] TStr<'a>, str);
impl_shape_cmp!(['a, 'x] TStr<'a>, &'x str);
impl_shape_cmp!(['a] TStr<'a>, String);
impl_shape_cmp!(['a] TStr<'a>, [u8]);
impl_shape_cmp!(['a, 'x] TStr<'a>, &'x [u8]);
impl_shape_cmp!(['a, const N: usize] TStr<'a>, [u8; N]);
impl_shape_cmp!(['a, 'x, const N: usize] TStr<'a>, &'x [u8; N]);
