//! Destination conflict policy.
//!
//! The check inspects only existence, never content, so locally edited
//! files are silently replaceable under `overwrite`. That data loss is the
//! contract the caller accepts by passing the flag.

use std::io;
use std::path::Path;

use crate::domain::SkipReason;

/// Whether an installation may proceed into `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    Allow,
    Deny(SkipReason),
}

/// Deny iff the destination directory exists, contains at least one entry,
/// and overwrite was not requested. An absent or empty destination, or an
/// explicit overwrite, always allows.
pub fn check(dest: &Path, overwrite: bool) -> io::Result<ConflictDecision> {
    if overwrite || !dest.exists() {
        return Ok(ConflictDecision::Allow);
    }

    let occupied = dest.read_dir()?.next().is_some();
    if occupied {
        Ok(ConflictDecision::Deny(SkipReason::AlreadyExists))
    } else {
        Ok(ConflictDecision::Allow)
    }
}
