//! Descriptor resolution for handle-based usage strategies.
//!
//! Some platform facilities take an open file descriptor instead of a
//! path. [`open_nearest`] turns a path into such a handle by opening the
//! path read-only and, when the entry does not exist, walking upward one
//! component at a time until something openable is found.
//!
//! The terminal candidates (`/`, `.`, the empty string, and the
//! two-slash `//<node>` remote-root syntax) and the two fallback
//! substitutions (`.` when the candidate has no separator, `/` when the
//! only separator is the leading one) are preserved exactly — they
//! encode real platform quirks, not a general algorithm.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::UsageError;

/// Open `path` read-only, falling back to its nearest openable ancestor.
///
/// Only "does not exist" drives the shortening loop; any other open
/// failure (permission denied, I/O error, not-a-directory) is fatal and
/// reported immediately with the candidate that failed. The loop
/// strictly shortens the candidate (or takes one of the two fixed
/// fallback steps), so it terminates in at most O(path length) attempts.
///
/// The returned [`File`] is closed when dropped, on every exit path of
/// the caller.
///
/// # Errors
///
/// - [`UsageError::NotFound`] — the path and all of its ancestors up to
///   a terminal candidate are missing.
/// - [`UsageError::PermissionDenied`] / [`UsageError::Io`] — the open
///   itself failed for a reason other than a missing entry.
pub fn open_nearest(path: &Path) -> Result<File, UsageError> {
    let mut candidate = path.to_string_lossy().into_owned();
    loop {
        match File::open(Path::new(&candidate)) {
            Ok(handle) => return Ok(handle),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if candidate == "/"
                    || candidate == "."
                    || candidate.is_empty()
                    || is_remote_root(&candidate)
                {
                    // Nothing left to shorten.
                    return Err(UsageError::from_io("open", Path::new(&candidate), err));
                }
                shorten(&mut candidate);
            }
            Err(err) => return Err(UsageError::from_io("open", Path::new(&candidate), err)),
        }
    }
}

/// Drop the last path component, substituting `.` when there is no
/// separator and `/` when the only separator is the leading one.
fn shorten(candidate: &mut String) {
    match candidate.rfind('/') {
        None => {
            candidate.clear();
            candidate.push('.');
        }
        Some(0) => {
            candidate.truncate(1);
        }
        Some(idx) => candidate.truncate(idx),
    }
}

/// `//<node>` with no further slash names the root of a remote node on
/// QNX-style networks and must not be shortened.
fn is_remote_root(candidate: &str) -> bool {
    candidate
        .strip_prefix("//")
        .is_some_and(|rest| !rest.contains('/'))
}
