//! Block-count rescaling between filesystem block sizes.
//!
//! Platform facilities report counts in their own block size; everything
//! here converts to the canonical 512-byte unit. Sizes are power-of-two
//! multiples of each other on every supported platform, so the coarser
//! direction is exact multiplication and the finer direction divides.

use crate::types::CANONICAL_BLOCK_SIZE;

/// Rescale `blocks` counted in `from_size`-byte units to `to_size`-byte
/// units.
///
/// When the source unit is finer than the target, the result rounds up:
/// undercounting used space is worse than overcounting it by one block.
///
/// `to_size` must be nonzero, and when `from_size` is the coarser of the
/// two it must be an exact multiple of `to_size`.
///
/// # Examples
///
/// ```rust
/// use fsusage::adjust_blocks;
///
/// assert_eq!(adjust_blocks(100, 512, 512), 100);
/// assert_eq!(adjust_blocks(100, 2048, 512), 400);
/// assert_eq!(adjust_blocks(100, 256, 512), 50);
/// assert_eq!(adjust_blocks(101, 256, 512), 51); // rounds up
/// ```
#[inline]
pub fn adjust_blocks(blocks: u64, from_size: u64, to_size: u64) -> u64 {
    debug_assert!(from_size > 0 && to_size > 0);
    if from_size == to_size {
        blocks
    } else if from_size > to_size {
        blocks * (from_size / to_size)
    } else {
        (blocks + 1) / (to_size / from_size)
    }
}

/// Rescale `blocks` counted in `from_size`-byte units to the canonical
/// 512-byte unit.
#[inline]
pub fn to_canonical(blocks: u64, from_size: u64) -> u64 {
    adjust_blocks(blocks, from_size, CANONICAL_BLOCK_SIZE)
}
