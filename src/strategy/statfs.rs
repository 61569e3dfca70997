//! BSD-style `statfs` strategy.
//!
//! 4.3BSD-descended systems report counts in `f_bsize` units; 4.4BSD
//! reports them in `f_fsize` units instead. Whoever fills [`FsStat`]
//! picks the right one for `block_size` — an explicit mapping choice,
//! so this strategy stays a single variant.

use std::path::Path;

use crate::blocks::to_canonical;
use crate::error::UsageError;
use crate::strategy::UsageStrategy;
use crate::types::{CANONICAL_BLOCK_SIZE, FsUsage};

/// Raw record produced by a BSD-style `statfs` facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStat {
    /// The unit the block counts are expressed in (`f_bsize`, or
    /// `f_fsize` on 4.4BSD).
    pub block_size: u64,
    /// Total blocks.
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

/// Usage strategy backed by `statfs(2)`.
///
/// Counts are converted from the reported block size to canonical
/// blocks. All five result fields are populated.
pub struct StatfsUsage<F> {
    facility: F,
}

impl<F> StatfsUsage<F>
where
    F: Fn(&Path) -> Result<FsStat, UsageError> + Send + Sync,
{
    /// Build the strategy around an injected `statfs` facility.
    pub fn new(facility: F) -> Self {
        Self { facility }
    }
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "macos"
))]
impl StatfsUsage<fn(&Path) -> Result<FsStat, UsageError>> {
    /// Build the strategy around the host's real `statfs(2)`.
    pub fn system() -> Self {
        Self {
            facility: system_statfs,
        }
    }
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "macos"
))]
fn system_statfs(path: &Path) -> Result<FsStat, UsageError> {
    let stat = nix::sys::statfs::statfs(path)
        .map_err(|errno| UsageError::from_io("statfs", path, std::io::Error::from(errno)))?;
    // Field widths and signedness vary across these platforms; f_bavail
    // in particular goes negative when the superuser reserve is
    // overdrawn, which clamps to zero here.
    Ok(FsStat {
        block_size: u64::try_from(stat.block_size()).unwrap_or(0),
        blocks: u64::try_from(stat.blocks()).unwrap_or(0),
        blocks_free: u64::try_from(stat.blocks_free()).unwrap_or(0),
        blocks_available: u64::try_from(stat.blocks_available()).unwrap_or(0),
        files: u64::try_from(stat.files()).unwrap_or(0),
        files_free: u64::try_from(stat.files_free()).unwrap_or(0),
    })
}

impl<F> UsageStrategy for StatfsUsage<F>
where
    F: Fn(&Path) -> Result<FsStat, UsageError> + Send + Sync,
{
    fn query(&self, path: &Path, _device_hint: Option<&str>) -> Result<FsUsage, UsageError> {
        let stat = (self.facility)(path)?;
        let unit = if stat.block_size != 0 {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_using_reported_block_size() {
        let strategy = StatfsUsage::new(|_: &Path| {
            Ok(FsStat {
                block_size: 4096,
                blocks: 100,
                blocks_free: 25,
                blocks_available: 20,
                files: 512,
                files_free: 256,
            })
        });
        let usage = strategy.query(Path::new("/"), None).unwrap();
        assert_eq!(usage.total_blocks, Some(800));
        assert_eq!(usage.free_blocks, Some(200));
        assert_eq!(usage.available_blocks, Some(160));
        assert_eq!(usage.total_files, Some(512));
        assert_eq!(usage.free_files, Some(256));
    }

    #[test]
    fn finer_block_size_rounds_up() {
        let strategy = StatfsUsage::new(|_: &Path| {
            Ok(FsStat {
                block_size: 256,
                blocks: 101,
                blocks_free: 101,
                blocks_available: 101,
                files: 0,
                files_free: 0,
            })
        });
        let usage = strategy.query(Path::new("/"), None).unwrap();
        assert_eq!(usage.total_blocks, Some(51));
    }

    #[test]
    fn facility_errors_propagate() {
        let strategy = StatfsUsage::new(|path: &Path| {
            Err(UsageError::from_io(
                "statfs",
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        });
        let err = strategy.query(Path::new("/secret"), None).unwrap_err();
        assert!(matches!(err, UsageError::PermissionDenied { .. }));
    }
}
