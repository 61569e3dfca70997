//! # fsusage
//!
//! Normalized filesystem space and inode usage reporting over pluggable
//! platform strategies.
//!
//! Every platform exposes "how full is this filesystem" through a
//! different facility, with different field names, different block-size
//! semantics, and different gaps in what it can report. This crate
//! normalizes all of them into one result type, [`FsUsage`]: five
//! counts — total, free, and available blocks plus total and free inode
//! slots — in a fixed 512-byte block unit, with an explicit `None`
//! sentinel wherever the active facility cannot supply a value. A
//! caller can always tell "zero free space" from "not reported."
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use fsusage::{FsUsage, UsageError, UsageProbe};
//! use std::path::Path;
//!
//! fn check_spool_space(spool: &Path) -> Result<FsUsage, UsageError> {
//!     let probe = UsageProbe::platform_default();
//!     probe.usage(spool, None)
//! }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`FsUsage`] | Canonical result — five counts, each possibly unknown |
//! | [`UsageProbe`] | Holds the one strategy fixed at build time |
//! | [`UsageStrategy`] | The query contract a platform backend implements |
//! | [`UsageError`] | Error type with path and operation context |
//!
//! ---
//!
//! ## Strategy Selection
//!
//! The set of strategies is closed and a process uses exactly one (or
//! none), chosen when the [`UsageProbe`] is built and immutable
//! afterwards. [`UsageProbe::platform_default`] makes the choice per
//! compile target; tests and embedders can inject any
//! [`UsageStrategy`] instead, including the historical variants in
//! [`strategy`] with mocked facilities:
//!
//! ```rust
//! use fsusage::{StatvfsUsage, UsageProbe, VfsStat};
//! use std::path::Path;
//!
//! let probe = UsageProbe::new(StatvfsUsage::new(|_: &Path| {
//!     Ok(VfsStat {
//!         fragment_size: 1024,
//!         blocks: 100,
//!         blocks_free: 40,
//!         blocks_available: 30,
//!         files: 800,
//!         files_free: 600,
//!         ..Default::default()
//!     })
//! }));
//! let usage = probe.usage(Path::new("/var/spool"), None).unwrap();
//! assert_eq!(usage.total_blocks, Some(200)); // rescaled to 512-byte blocks
//! ```
//!
//! A probe built with [`UsageProbe::unsupported`] fails every query
//! with [`UsageError::Unsupported`], observably distinct from any
//! platform failure.
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<T, UsageError>`. Platform failures are
//! propagated verbatim with their path and operation; there is no
//! partial result — a query either returns a fully populated
//! [`FsUsage`] (sentinels included) or an error. The only internal
//! recovery anywhere is the descriptor resolver's path-shortening
//! retry, and only for missing paths.
//!
//! ---
//!
//! ## Thread Safety
//!
//! [`UsageProbe`] and every [`UsageStrategy`] are `Send + Sync` with
//! `&self` query methods. Queries are synchronous, touch no shared
//! mutable state, and allocate a fresh result, so concurrent callers
//! need no coordination.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`FsUsage`] |

// Private modules
mod blocks;
mod error;
mod probe;
mod resolver;
mod types;

// Public modules
pub mod strategy;

// Public re-exports - error types
pub use error::UsageError;

// Public re-exports - core types
pub use types::{CANONICAL_BLOCK_SIZE, FsUsage};

// Public re-exports - block-unit conversion
pub use blocks::{adjust_blocks, to_canonical};

// Public re-exports - descriptor resolution
pub use resolver::open_nearest;

// Public re-exports - probe and strategies
pub use probe::UsageProbe;
pub use strategy::{
    DeviceGeometry, DeviceId, DiskSpace, DiskSpaceUsage, DustatUsage, FsData, FsDataUsage, FsStat,
    StatfsUsage, StatvfsUsage, SysvStat, SysvStatfsUsage, UsageStrategy, UstatUsage, VfsStat,
};
