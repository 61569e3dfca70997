//! SVR2-style `ustat` device-table strategy.
//!
//! The oldest and poorest facility: a basic file-status lookup maps the
//! path to its device, and a per-device table query reports free blocks.
//! Nothing else is available — total blocks and both inode counts come
//! back unknown, and the free count doubles as the available count.

use std::path::Path;

use crate::error::UsageError;
use crate::strategy::{DeviceId, UsageStrategy};
use crate::types::FsUsage;

/// Usage strategy backed by `stat(2)` plus `ustat(2)`.
///
/// `lookup` maps a path to its device; `device_free` reports that
/// device's free block count, already in canonical 512-byte units.
pub struct UstatUsage<L, F> {
    lookup: L,
    device_free: F,
}

impl<L, F> UstatUsage<L, F>
where
    L: Fn(&Path) -> Result<DeviceId, UsageError> + Send + Sync,
    F: Fn(DeviceId) -> Result<u64, UsageError> + Send + Sync,
{
    /// Build the strategy around injected device-lookup and device-table
    /// facilities.
    pub fn new(lookup: L, device_free: F) -> Self {
        Self {
            lookup,
            device_free,
        }
    }
}

impl<L, F> UsageStrategy for UstatUsage<L, F>
where
    L: Fn(&Path) -> Result<DeviceId, UsageError> + Send + Sync,
    F: Fn(DeviceId) -> Result<u64, UsageError> + Send + Sync,
{
    fn query(&self, path: &Path, _device_hint: Option<&str>) -> Result<FsUsage, UsageError> {
        let device = (self.lookup)(path)?;
        let free = (self.device_free)(device)?;
        Ok(FsUsage {
            total_blocks: None,
            free_blocks: Some(free),
            available_blocks: Some(free),
            total_files: None,
            free_files: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_free_and_available() {
        let strategy = UstatUsage::new(
            |_: &Path| Ok(7),
            |device| {
                assert_eq!(device, 7);
                Ok(1234)
            },
        );
        let usage = strategy.query(Path::new("/spool"), None).unwrap();
        assert_eq!(usage.total_blocks, None);
        assert_eq!(usage.free_blocks, Some(1234));
        assert_eq!(usage.available_blocks, Some(1234));
        assert_eq!(usage.total_files, None);
        assert_eq!(usage.free_files, None);
    }

    #[test]
    fn lookup_errors_propagate() {
        let strategy = UstatUsage::new(
            |path: &Path| {
                Err(UsageError::from_io(
                    "stat",
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                ))
            },
            |_| panic!("device query must not run when the lookup fails"),
        );
        assert!(
            strategy
                .query(Path::new("/gone"), None)
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn device_table_errors_propagate() {
        let strategy = UstatUsage::new(
            |_: &Path| Ok(3),
            |_| {
                Err(UsageError::from_io(
                    "ustat",
                    Path::new("/spool"),
                    std::io::Error::other("bad device"),
                ))
            },
        );
        assert!(matches!(
            strategy.query(Path::new("/spool"), None).unwrap_err(),
            UsageError::Io { .. }
        ));
    }
}
