//! SVR4-style `statvfs` strategy — the richest facility, and the
//! platform default on modern Unix.

use std::path::Path;

use crate::blocks::to_canonical;
use crate::error::UsageError;
use crate::strategy::UsageStrategy;
use crate::types::{CANONICAL_BLOCK_SIZE, FsUsage};

/// Raw record produced by an SVR4-style `statvfs` facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct VfsStat {
    /// Preferred I/O block size (`f_bsize`).
    pub block_size: u64,
    /// Fundamental allocation unit (`f_frsize`); zero when unsupported.
    pub fragment_size: u64,
    /// Total blocks, counted in the fragment size.
    pub blocks: u64,
    /// Free blocks.
    pub blocks_free: u64,
    /// Free blocks available to unprivileged callers.
    pub blocks_available: u64,
    /// Total inode slots.
    pub files: u64,
    /// Free inode slots.
    pub files_free: u64,
}

/// Usage strategy backed by `statvfs(2)`.
///
/// Counts are converted from the reported fragment size — or the block
/// size where the fragment size is unsupported — to canonical blocks.
/// All five result fields are populated.
pub struct StatvfsUsage<F> {
    facility: F,
}

impl<F> StatvfsUsage<F>
where
    F: Fn(&Path) -> Result<VfsStat, UsageError> + Send + Sync,
{
    /// Build the strategy around an injected `statvfs` facility.
    pub fn new(facility: F) -> Self {
        Self { facility }
    }
}

#[cfg(unix)]
impl StatvfsUsage<fn(&Path) -> Result<VfsStat, UsageError>> {
    /// Build the strategy around the host's real `statvfs(2)`.
    pub fn system() -> Self {
        Self {
            facility: system_statvfs,
        }
    }
}

#[cfg(unix)]
fn system_statvfs(path: &Path) -> Result<VfsStat, UsageError> {
    let stat = nix::sys::statvfs::statvfs(path)
        .map_err(|errno| UsageError::from_io("statvfs", path, std::io::Error::from(errno)))?;
    Ok(VfsStat {
        block_size: stat.block_size() as u64,
        fragment_size: stat.fragment_size() as u64,
        blocks: stat.blocks() as u64,
        blocks_free: stat.blocks_free() as u64,
        blocks_available: stat.blocks_available() as u64,
        files: stat.files() as u64,
        files_free: stat.files_free() as u64,
    })
}

impl<F> UsageStrategy for StatvfsUsage<F>
where
    F: Fn(&Path) -> Result<VfsStat, UsageError> + Send + Sync,
{
    fn query(&self, path: &Path, _device_hint: Option<&str>) -> Result<FsUsage, UsageError> {
        let stat = (self.facility)(path)?;
        // f_frsize isn't guaranteed to be supported.
        let unit = if stat.fragment_size != 0 {
            stat.fragment_size
        } else if stat.block_size != 0 {
            stat.block_size
        } else {
            CANONICAL_BLOCK_SIZE
        };
        Ok(FsUsage {
            total_blocks: Some(to_canonical(stat.blocks, unit)),
            free_blocks: Some(to_canonical(stat.blocks_free, unit)),
            available_blocks: Some(to_canonical(stat.blocks_available, unit)),
            total_files: Some(stat.files),
            free_files: Some(stat.files_free),
        })
    }
}
