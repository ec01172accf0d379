//! The power-of-two block policy shared by every allocating code path.
//!
//! Backing blocks are always the smallest power of two that fits the content
//! plus its terminator, which keeps repeated single-byte appends amortized
//! O(1). The one exception is an explicit over-reservation
//! ([`crate::TString::with_capacity`], [`crate::TString::reserve`]), which may
//! leave the block larger than the content currently needs.

use alloc::{boxed::Box, vec::Vec};

use crate::error::ReserveError;

/// Smallest power of two ≥ `min`, with the fixed point that 0 and 1 both
/// yield 1 (a block always has room for the terminator).
pub(crate) const fn block_size(min: usize) -> Option<usize> {
    if min <= 1 {
        Some(1)
    } else {
        min.checked_next_power_of_two()
    }
}

/// Allocates a zeroed block of exactly `block_size(min)` bytes.
///
/// Goes through `try_reserve_exact` so exhaustion surfaces as a
/// [`ReserveError`] instead of aborting the process.
pub(crate) fn alloc_block(min: usize) -> Result<Box<[u8]>, ReserveError> {
    let size = block_size(min).ok_or(ReserveError { requested: min })?;
    let mut block = Vec::new();
    block
        .try_reserve_exact(size)
        .map_err(|_| ReserveError { requested: size })?;
    block.extend(core::iter::repeat_n(0u8, size));
    Ok(block.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::{alloc_block, block_size};

    #[test]
    fn fixed_point_at_one() {
        assert_eq!(block_size(0), Some(1));
        assert_eq!(block_size(1), Some(1));
    }

    #[test]
    fn rounds_up_to_next_power_of_two() {
        assert_eq!(block_size(2), Some(2));
        assert_eq!(block_size(3), Some(4));
        assert_eq!(block_size(5), Some(8));
        assert_eq!(block_size(8), Some(8));
        assert_eq!(block_size(9), Some(16));
        assert_eq!(block_size(1025), Some(2048));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        assert_eq!(block_size(usize::MAX), None);
        assert!(alloc_block(usize::MAX).is_err());
    }

    #[test]
    fn blocks_come_back_zeroed() {
        let block = alloc_block(5).unwrap();
        assert_eq!(block.len(), 8);
        assert!(block.iter().all(|&b| b == 0));
    }
}
