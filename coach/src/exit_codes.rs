//! Stable exit codes for coach CLI commands.

/// Command succeeded; for `verify`, every check passed.
pub const OK: i32 = 0;
/// Command failed due to an invalid manifest, missing files, or other errors.
pub const INVALID: i32 = 1;
/// `coach verify` ran to completion but at least one check failed.
pub const FAILED: i32 = 2;
