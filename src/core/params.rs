use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::Source;

pub const CHECKS_FILE_DEFAULT: &str = "checks.json";
pub const HTML_FILE_DEFAULT: &str = "index.html";
pub const URL_DEFAULT: &str = "http://localhost:5000";

/// Check parameters suitable for config files and programmatic use.
/// Built once per invocation and passed by reference into the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckParams {
    /// JSON file holding the array of selectors
    pub checks: PathBuf,
    /// Document to check
    pub source: Source,
}

impl Default for CheckParams {
    fn default() -> Self {
        Self {
            checks: PathBuf::from(CHECKS_FILE_DEFAULT),
            source: Source::File(PathBuf::from(HTML_FILE_DEFAULT)),
        }
    }
}
