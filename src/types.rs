//! Core types for normalized filesystem usage reporting.

/// The fixed block size, in bytes, that all reported block counts are
/// normalized to, so results from different platform facilities are
/// directly comparable.
pub const CANONICAL_BLOCK_SIZE: u64 = 512;

/// Normalized space and inode usage for a single filesystem.
///
/// Every field is either a real count or `None`, the explicit "unknown"
/// sentinel for information the active platform strategy cannot supply.
/// `Some(0)` always means a genuine zero (e.g., a full disk), never
/// "not reported" — callers can rely on the distinction.
///
/// Block counts are expressed in [`CANONICAL_BLOCK_SIZE`]-byte units.
///
/// # Examples
///
/// ```rust
/// use fsusage::FsUsage;
///
/// let usage = FsUsage {
///     total_blocks: Some(1000),
///     free_blocks: Some(250),
///     available_blocks: Some(200),
///     total_files: None,
///     free_files: None,
/// };
/// assert_eq!(usage.total_bytes(), Some(512_000));
/// assert!(!usage.has_inode_counts());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FsUsage {
    /// Total canonical blocks making up the filesystem, if reported.
    pub total_blocks: Option<u64>,
    /// Canonical blocks currently free, if reported.
    pub free_blocks: Option<u64>,
    /// Canonical blocks free and usable by unprivileged callers.
    /// May be less than `free_blocks` where the platform reserves space.
    pub available_blocks: Option<u64>,
    /// Total inode slots, if the filesystem has a fixed inode limit.
    pub total_files: Option<u64>,
    /// Free inode slots, if reported.
    pub free_files: Option<u64>,
}

impl FsUsage {
    /// Total filesystem size in bytes, if the total block count is known.
    #[inline]
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_blocks
            .map(|blocks| blocks.saturating_mul(CANONICAL_BLOCK_SIZE))
    }

    /// Free space in bytes, if the free block count is known.
    #[inline]
    pub fn free_bytes(&self) -> Option<u64> {
        self.free_blocks
            .map(|blocks| blocks.saturating_mul(CANONICAL_BLOCK_SIZE))
    }

    /// Space usable by unprivileged callers in bytes, if known.
    #[inline]
    pub fn available_bytes(&self) -> Option<u64> {
        self.available_blocks
            .map(|blocks| blocks.saturating_mul(CANONICAL_BLOCK_SIZE))
    }

    /// Returns `true` if both inode counts were reported.
    ///
    /// Filesystems without a fixed inode ceiling report `None` for both.
    #[inline]
    pub fn has_inode_counts(&self) -> bool {
        self.total_files.is_some() && self.free_files.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reports_everything_unknown() {
        let usage = FsUsage::default();
        assert_eq!(usage.total_blocks, None);
        assert_eq!(usage.free_blocks, None);
        assert_eq!(usage.available_blocks, None);
        assert_eq!(usage.total_files, None);
        assert_eq!(usage.free_files, None);
        assert!(!usage.has_inode_counts());
    }

    #[test]
    fn byte_accessors_scale_by_canonical_block() {
        let usage = FsUsage {
            total_blocks: Some(8),
            free_blocks: Some(4),
            available_blocks: Some(2),
            total_files: Some(100),
            free_files: Some(50),
        };
        assert_eq!(usage.total_bytes(), Some(4096));
        assert_eq!(usage.free_bytes(), Some(2048));
        assert_eq!(usage.available_bytes(), Some(1024));
    }

    #[test]
    fn byte_accessors_propagate_unknown() {
        let usage = FsUsage::default();
        assert_eq!(usage.total_bytes(), None);
        assert_eq!(usage.free_bytes(), None);
        assert_eq!(usage.available_bytes(), None);
    }

    #[test]
    fn byte_accessors_saturate_instead_of_overflowing() {
        let usage = FsUsage {
            total_blocks: Some(u64::MAX),
            ..Default::default()
        };
        assert_eq!(usage.total_bytes(), Some(u64::MAX));
    }

    #[test]
    fn zero_is_distinct_from_unknown() {
        let full_disk = FsUsage {
            free_blocks: Some(0),
            ..Default::default()
        };
        assert_eq!(full_disk.free_blocks, Some(0));
        assert_ne!(full_disk.free_blocks, None);
    }

    #[test]
    fn types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FsUsage>();
    }
}
