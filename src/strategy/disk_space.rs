//! QNX-style raw-device strategy.
//!
//! The facility takes an open file descriptor, not a path, so the query
//! goes through [`open_nearest`] first. The handle is scoped to the
//! single query and closed before it returns, on success and failure
//! alike. Unlike the other strategies, the underlying query may touch
//! the actual device rather than cached kernel metadata.

use std::fs::File;
use std::path::Path;

use tracing::error;

use crate::error::UsageError;
use crate::resolver::open_nearest;
use crate::strategy::UsageStrategy;
use crate::types::FsUsage;

/// Free and total block counts from a block-device space query, already
/// in canonical 512-byte units.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskSpace {
    /// Free blocks on the device.
    pub free_blocks: u64,
    /// Total blocks on the device.
    pub total_blocks: u64,
}

/// Usage strategy backed by a raw block-device space query.
///
/// Inode counts come back unknown: these filesystems have no fixed
/// inode ceiling (entries live directly in the directory), and the free
/// count doubles as the available count.
pub struct DiskSpaceUsage<F> {
    facility: F,
}

impl<F> DiskSpaceUsage<F>
where
    F: Fn(&File) -> Result<DiskSpace, UsageError> + Send + Sync,
{
    /// Build the strategy around an injected device space query.
    pub fn new(facility: F) -> Self {
        Self { facility }
    }
}

impl<F> UsageStrategy for DiskSpaceUsage<F>
where
    F: Fn(&File) -> Result<DiskSpace, UsageError> + Send + Sync,
{
    fn query(&self, path: &Path, _device_hint: Option<&str>) -> Result<FsUsage, UsageError> {
        let handle = open_nearest(path).inspect_err(|err| {
            error!(path = %path.display(), %err, "usage query could not open a descriptor");
        })?;
        let space = (self.facility)(&handle).inspect_err(|err| {
            error!(path = %path.display(), %err, "device space query failed");
        })?;
        Ok(FsUsage {
            total_blocks: Some(space.total_blocks),
            free_blocks: Some(space.free_blocks),
            available_blocks: Some(space.free_blocks),
            total_files: None,
            free_files: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_through_an_open_handle() {
        let dir = tempfile::tempdir().unwrap();
        let strategy = DiskSpaceUsage::new(|handle: &File| {
            assert!(handle.metadata().unwrap().is_dir());
            Ok(DiskSpace {
                free_blocks: 300,
                total_blocks: 1000,
            })
        });
        let usage = strategy.query(dir.path(), None).unwrap();
        assert_eq!(usage.total_blocks, Some(1000));
        assert_eq!(usage.free_blocks, Some(300));
        assert_eq!(usage.available_blocks, Some(300));
        assert_eq!(usage.total_files, None);
        assert_eq!(usage.free_files, None);
    }

    #[test]
    fn missing_path_resolves_to_an_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let strategy = DiskSpaceUsage::new(|_: &File| Ok(DiskSpace::default()));
        let missing = dir.path().join("spool").join("queue");
        assert!(strategy.query(&missing, None).is_ok());
    }

    #[test]
    fn query_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let strategy = DiskSpaceUsage::new(|_: &File| {
            Err(UsageError::from_io(
                "disk_space",
                Path::new("/dev/hd0"),
                std::io::Error::other("device offline"),
            ))
        });
        assert!(matches!(
            strategy.query(dir.path(), None).unwrap_err(),
            UsageError::Io { .. }
        ));
    }

    #[test]
    fn unresolvable_path_fails_without_querying() {
        let strategy = DiskSpaceUsage::new(|_: &File| {
            panic!("space query must not run without a handle")
        });
        let err = strategy.query(Path::new(""), None).unwrap_err();
        assert!(err.is_not_found());
    }
}
