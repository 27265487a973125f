//! `domcheck` command line driver.
//!
//! `args` declares the flags, `runner` checks that the named files exist
//! and the URL has no whitespace, then hands a `CheckParams` to
//! `domcheck::check_source`. `errors` and `exit_codes` decide what is printed
//! where and which status the process ends with.
pub mod args;
pub mod errors;
pub mod exit_codes;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
