//! Stable exit codes for patcher CLI commands.

use crate::core::error::PatchError;

/// Command succeeded; every selected patch applied or checked clean.
pub const OK: i32 = 0;
/// Command failed due to an invalid manifest, usage, or I/O error.
pub const INVALID: i32 = 1;
/// A literal required by a patch was missing from its target file.
pub const PRECONDITION: i32 = 2;

/// Map a command error to its exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<PatchError>().is_some() {
        PRECONDITION
    } else {
        INVALID
    }
}
