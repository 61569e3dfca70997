//! AIX PS/2 `dustat` two-tier strategy.
//!
//! The platform has no `statfs` of its own, so the query is synthesized:
//! a basic file-status lookup maps the path to its device, and a
//! device-geometry call supplies the rest. Total blocks exclude the
//! inode-table area, and the inode-slot total is derived from that
//! area's size.

use std::path::Path;

use crate::blocks::to_canonical;
use crate::error::UsageError;
use crate::strategy::{DeviceId, UsageStrategy};
use crate::types::{CANONICAL_BLOCK_SIZE, FsUsage};

/// Per-device geometry and free counts from a `dustat` facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceGeometry {
    /// The unit the block counts are expressed in (`du_bsize`).
    pub block_size: u64,
    /// Total device blocks, inode-table area included (`du_fsize`).
    pub device_blocks: u64,
    /// Blocks occupied by the inode table (`du_isize`).
    pub index_blocks: u64,
    /// Free blocks (`du_tfree`).
    pub free_blocks: u64,
    /// Inode slots per index block (`du_inopb`).
    pub inodes_per_block: u64,
    /// Free inode slots (`du_tinode`).
    pub free_inodes: u64,
}

/// Usage strategy backed by `stat(2)` plus `dustat`.
///
/// All five result fields are populated. The first two index blocks
/// hold no inodes, so they are excluded from the inode-slot total.
pub struct DustatUsage<L, G> {
    lookup: L,
    geometry: G,
}

impl<L, G> DustatUsage<L, G>
where
    L: Fn(&Path) -> Result<DeviceId, UsageError> + Send + Sync,
    G: Fn(DeviceId) -> Result<DeviceGeometry, UsageError> + Send + Sync,
{
    /// Build the strategy around injected device-lookup and
    /// device-geometry facilities.
    pub fn new(lookup: L, geometry: G) -> Self {
        Self { lookup, geometry }
    }
}

impl<L, G> UsageStrategy for DustatUsage<L, G>
where
    L: Fn(&Path) -> Result<DeviceId, UsageError> + Send + Sync,
    G: Fn(DeviceId) -> Result<DeviceGeometry, UsageError> + Send + Sync,
{
    fn query(&self, path: &Path, _device_hint: Option<&str>) -> Result<FsUsage, UsageError> {
        let device = (self.lookup)(path)?;
        let geo = (self.geometry)(device)?;
        let unit = if geo.block_size != 0 {
            geo.block_size
        } else {
            CANONICAL_BLOCK_SIZE
        };
        let data_blocks = geo.device_blocks.saturating_sub(geo.index_blocks);
        let free = to_canonical(geo.free_blocks, unit);
        Ok(FsUsage {
            total_blocks: Some(to_canonical(data_blocks, unit)),
            free_blocks: Some(free),
            available_blocks: Some(free),
            total_files: Some(
                geo.index_blocks
                    .saturating_sub(2)
                    .saturating_mul(geo.inodes_per_block),
            ),
            free_files: Some(geo.free_inodes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesizes_all_five_fields() {
        let strategy = DustatUsage::new(
            |_: &Path| Ok(42),
            |device| {
                assert_eq!(device, 42);
                Ok(DeviceGeometry {
                    block_size: 1024,
                    device_blocks: 600,
                    index_blocks: 100,
                    free_blocks: 50,
                    inodes_per_block: 16,
                    free_inodes: 900,
                })
            },
        );
        let usage = strategy.query(Path::new("/"), None).unwrap();
        // 500 data blocks at 1024 bytes = 1000 canonical blocks.
        assert_eq!(usage.total_blocks, Some(1000));
        assert_eq!(usage.free_blocks, Some(100));
        assert_eq!(usage.available_blocks, Some(100));
        // 98 usable index blocks of 16 inode slots each.
        assert_eq!(usage.total_files, Some(1568));
        assert_eq!(usage.free_files, Some(900));
    }

    #[test]
    fn lookup_errors_propagate() {
        let strategy = DustatUsage::new(
            |path: &Path| {
                Err(UsageError::from_io(
                    "stat",
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                ))
            },
            |_| panic!("geometry query must not run when the lookup fails"),
        );
        assert!(
            strategy
                .query(Path::new("/gone"), None)
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn geometry_errors_propagate() {
        let strategy = DustatUsage::new(
            |_: &Path| Ok(1),
            |_| {
                Err(UsageError::from_io(
                    "dustat",
                    Path::new("/"),
                    std::io::Error::other("bad device"),
                ))
            },
        );
        assert!(matches!(
            strategy.query(Path::new("/"), None).unwrap_err(),
            UsageError::Io { .. }
        ));
    }
}
