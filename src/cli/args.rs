use clap::Parser;
use std::path::PathBuf;

use domcheck::{CHECKS_FILE_DEFAULT, HTML_FILE_DEFAULT, URL_DEFAULT};

#[derive(Parser, Debug)]
#[command(
    name = "domcheck",
    version,
    about = "Check an HTML file or URL for the presence of CSS selectors"
)]
pub struct CliArgs {
    /// Path to a JSON array of selectors
    #[arg(short, long, default_value = CHECKS_FILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to a local HTML file (index.html when given without a value)
    #[arg(short, long, num_args = 0..=1, default_missing_value = HTML_FILE_DEFAULT)]
    pub file: Option<PathBuf>,

    /// URL to fetch (http://localhost:5000 when given without a value).
    /// Ignored when --file is also present.
    #[arg(short, long, num_args = 0..=1, default_missing_value = URL_DEFAULT)]
    pub url: Option<String>,

    /// Enable logging to stderr (RUST_LOG overrides the level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
