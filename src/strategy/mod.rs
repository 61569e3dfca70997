//! # Usage Strategies
//!
//! The closed set of platform-specific ways to ask a filesystem how much
//! space it has. Exactly one strategy is selected per build via
//! [`UsageProbe`](crate::UsageProbe); selecting none is legal and means
//! usage reporting is unavailable.
//!
//! Each strategy owns two jobs: invoking its platform facility and
//! mapping the facility's raw record onto [`FsUsage`] — explicit field
//! mapping per variant, so the canonical result type stays single and
//! uniform. Facilities are injected (plain `Fn` values), which keeps the
//! historical variants testable on any host; the variants with a living
//! platform binding also offer a `system()` constructor.
//!
//! | Strategy | Facility | Unknown fields |
//! |----------|----------|----------------|
//! | [`StatvfsUsage`] | `statvfs(2)` (SVR4) | none |
//! | [`StatfsUsage`] | `statfs(2)` (4.3/4.4BSD) | none |
//! | [`SysvStatfsUsage`] | four-argument `statfs` (SVR3) | none |
//! | [`FsDataUsage`] | `fs_data` two-level `statfs` (Ultrix) | none |
//! | [`UstatUsage`] | `ustat(2)` device table (SVR2) | totals, inodes |
//! | [`DiskSpaceUsage`] | raw-device space query (QNX) | inodes |
//! | [`DustatUsage`] | `dustat` device geometry (AIX PS/2) | none |

mod disk_space;
mod dustat;
mod fs_data;
mod statfs;
mod statfs_sysv;
mod statvfs;
mod ustat;

pub use disk_space::{DiskSpace, DiskSpaceUsage};
pub use dustat::{DeviceGeometry, DustatUsage};
pub use fs_data::{FsData, FsDataUsage};
pub use statfs::{FsStat, StatfsUsage};
pub use statfs_sysv::{SysvStat, SysvStatfsUsage};
pub use statvfs::{StatvfsUsage, VfsStat};
pub use ustat::UstatUsage;

use std::path::Path;

use crate::error::UsageError;
use crate::types::FsUsage;

/// Identifier of the block device a path resides on, as reported by a
/// basic file-status lookup.
pub type DeviceId = u64;

/// One platform-specific implementation of the filesystem usage query.
///
/// A successful query populates all five [`FsUsage`] fields, using the
/// `None` sentinel for anything the facility cannot supply — never a
/// fabricated zero. Failures propagate the platform error verbatim.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Queries take `&self` and
/// touch no shared mutable state, so concurrent callers need no
/// coordination.
///
/// # Object Safety
///
/// This trait is object-safe; [`UsageProbe`](crate::UsageProbe) holds it
/// as `Box<dyn UsageStrategy>`.
pub trait UsageStrategy: Send + Sync {
    /// Report usage for the filesystem holding `path`.
    ///
    /// `device_hint` is an advisory device name for callers that already
    /// know the mount device. Current strategies ignore it; it exists
    /// for backends that address a raw device without a path lookup.
    ///
    /// # Errors
    ///
    /// - [`UsageError::NotFound`] — `path` (and, for handle-based
    ///   strategies, every ancestor) does not exist
    /// - [`UsageError::PermissionDenied`] / [`UsageError::Io`] — the
    ///   platform facility failed
    fn query(&self, path: &Path, device_hint: Option<&str>) -> Result<FsUsage, UsageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_strategy_is_object_safe() {
        fn _check(_: &dyn UsageStrategy) {}
    }

    #[test]
    fn usage_strategy_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync>() {}
        fn _check<T: UsageStrategy>() {
            _assert_send_sync::<T>();
        }
    }
}
