//! Ultrix-style two-level `statfs` strategy.
//!
//! The facility returns an `fs_data` record whose counts are in a fixed
//! 1024-byte unit, so conversion to canonical blocks is a constant
//! doubling.

use std::path::Path;

use crate::blocks::adjust_blocks;
use crate::error::UsageError;
use crate::strategy::UsageStrategy;
use crate::types::{CANONICAL_BLOCK_SIZE, FsUsage};

/// The fixed unit `fs_data` counts are expressed in.
const FS_DATA_BLOCK_SIZE: u64 = 1024;

/// Raw record produced by an Ultrix `fs_data` facility, in 1024-byte
/// units.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsData {
    /// Total blocks (`fd_req.btot`).
    pub blocks: u64,
    /// Free blocks (`fd_req.bfree`).
    pub blocks_free: u64,
    /// Free blocks available to unprivileged callers (`fd_req.bfreen`).
    pub blocks_available: u64,
    /// Total inode slots (`fd_req.gtot`).
    pub files: u64,
    /// Free inode slots (`fd_req.gfree`).
    pub files_free: u64,
}

/// Usage strategy backed by the Ultrix two-level `statfs`.
///
/// All five result fields are populated.
pub struct FsDataUsage<F> {
    facility: F,
}

impl<F> FsDataUsage<F>
where
    F: Fn(&Path) -> Result<FsData, UsageError> + Send + Sync,
{
    /// Build the strategy around an injected `fs_data` facility.
    pub fn new(facility: F) -> Self {
        Self { facility }
    }
}

impl<F> UsageStrategy for FsDataUsage<F>
where
    F: Fn(&Path) -> Result<FsData, UsageError> + Send + Sync,
{
    fn query(&self, path: &Path, _device_hint: Option<&str>) -> Result<FsUsage, UsageError> {
        let data = (self.facility)(path)?;
        let convert = |blocks| adjust_blocks(blocks, FS_DATA_BLOCK_SIZE, CANONICAL_BLOCK_SIZE);
        Ok(FsUsage {
            total_blocks: Some(convert(data.blocks)),
            free_blocks: Some(convert(data.blocks_free)),
            available_blocks: Some(convert(data.blocks_available)),
            total_files: Some(data.files),
            free_files: Some(data.files_free),
        })
    }
}
