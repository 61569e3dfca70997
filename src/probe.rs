//! The usage probe: holds the build-time strategy selection and runs
//! queries against it.

use std::fmt;
use std::path::Path;

use crate::error::UsageError;
use crate::strategy::UsageStrategy;
use crate::types::FsUsage;

/// A filesystem usage probe with a fixed strategy selection.
///
/// Exactly one strategy (or none) is chosen when the probe is built and
/// never changes afterwards, mirroring a per-platform build-time choice.
/// With no strategy selected, every query fails with
/// [`UsageError::Unsupported`].
///
/// The probe is `Send + Sync` and queries take `&self`; concurrent
/// callers need no coordination. Each query performs one blocking
/// platform call (two for the raw-device strategy: open, then query)
/// and allocates a fresh result.
///
/// # Examples
///
/// ```rust
/// use fsusage::{UsageError, UsageProbe};
/// use std::path::Path;
///
/// fn report(probe: &UsageProbe, spool: &Path) -> Result<(), UsageError> {
///     let usage = probe.usage(spool, None)?;
///     if let Some(bytes) = usage.available_bytes() {
///         println!("{} bytes usable under {}", bytes, spool.display());
///     }
///     Ok(())
/// }
/// ```
pub struct UsageProbe {
    strategy: Option<Box<dyn UsageStrategy>>,
}

impl UsageProbe {
    /// Build a probe around the given strategy.
    pub fn new(strategy: impl UsageStrategy + 'static) -> Self {
        Self {
            strategy: Some(Box::new(strategy)),
        }
    }

    /// Build a probe with no strategy. Every query fails with
    /// [`UsageError::Unsupported`].
    pub fn unsupported() -> Self {
        Self { strategy: None }
    }

    /// Build a probe with this target's default strategy: `statvfs` on
    /// Unix, nothing elsewhere.
    pub fn platform_default() -> Self {
        #[cfg(unix)]
        {
            Self::new(crate::strategy::StatvfsUsage::system())
        }
        #[cfg(not(unix))]
        {
            Self::unsupported()
        }
    }

    /// Returns `true` if a strategy is selected.
    #[inline]
    pub fn is_supported(&self) -> bool {
        self.strategy.is_some()
    }

    /// Report usage for the filesystem holding `path`.
    ///
    /// `path` may name any existing file or directory on the filesystem
    /// of interest. `device_hint` is an advisory device name, currently
    /// unused by every strategy.
    ///
    /// On success all five [`FsUsage`] fields are populated, with `None`
    /// marking whatever the selected strategy cannot report. On failure
    /// no partial result is produced.
    ///
    /// # Errors
    ///
    /// - [`UsageError::Unsupported`] — no strategy is selected
    /// - any error of the selected strategy, propagated verbatim
    pub fn usage(&self, path: &Path, device_hint: Option<&str>) -> Result<FsUsage, UsageError> {
        match &self.strategy {
            Some(strategy) => strategy.query(path, device_hint),
            None => Err(UsageError::Unsupported),
        }
    }
}

impl Default for UsageProbe {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Debug for UsageProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsageProbe")
            .field("supported", &self.is_supported())
            .finish()
    }
}
