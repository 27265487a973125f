pub mod json;

pub use json::{to_pretty_json, write_report};
