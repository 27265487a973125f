//! Stable exit codes for the domcheck CLI.

/// Report printed.
pub const OK: i32 = 0;
/// Missing checks/HTML file, malformed URL, no source, or an unusable checks file.
pub const INVALID: i32 = 1;
/// The URL could not be fetched. `2` is left to clap usage errors.
pub const NETWORK: i32 = 3;
