//! SVR3-style four-argument `statfs` strategy (SVR3, Dynix, Irix, AIX
//! RS/6000).
//!
//! Block counts from this facility are treated as already canonical:
//! empirically these systems report 512-byte blocks no matter what the
//! record's block-size field claims. That is a platform-specific
//! override observed on the enumerated systems, not a contract of the
//! facility — revisit it before pointing this strategy at anything else.

use std::path::Path;

use crate::error::UsageError;
use crate::strategy::UsageStrategy;
use crate::types::FsUsage;

/// Raw record produced by a four-argument `statfs` facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysvStat {
    /// Total blocks, in 512-byte units regardless of the reported size.
    pub blocks: u64,
    /// Free blocks.
    pub blocks_free: u64,
    /// Free blocks available to unprivileged callers. Plain SVR3 has no
    /// such field; DYNIX/ptx does.
    pub blocks_available: Option<u64>,
    /// Total inode slots.
    pub files: u64,
    /// Free inode slots.
    pub files_free: u64,
}

/// Usage strategy backed by the four-argument `statfs`.
///
/// No block-size conversion is performed. When the facility has no
/// "available" field, the free count is reused for it.
pub struct SysvStatfsUsage<F> {
    facility: F,
}

impl<F> SysvStatfsUsage<F>
where
    F: Fn(&Path) -> Result<SysvStat, UsageError> + Send + Sync,
{
    /// Build the strategy around an injected four-argument `statfs`
    /// facility.
    pub fn new(facility: F) -> Self {
        Self { facility }
    }
}

impl<F> UsageStrategy for SysvStatfsUsage<F>
where
    F: Fn(&Path) -> Result<SysvStat, UsageError> + Send + Sync,
{
    fn query(&self, path: &Path, _device_hint: Option<&str>) -> Result<FsUsage, UsageError> {
        let stat = (self.facility)(path)?;
        Ok(FsUsage {
            total_blocks: Some(stat.blocks),
            free_blocks: Some(stat.blocks_free),
            available_blocks: Some(stat.blocks_available.unwrap_or(stat.blocks_free)),
            total_files: Some(stat.files),
            free_files: Some(stat.files_free),
        })
    }
}
