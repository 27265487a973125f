//! I/O layer: loading the checks file, reading HTML from disk or over HTTP,
//! and `writers` for the JSON report.
pub mod checks;
pub use checks::load_checks;

pub mod html;
pub use html::{load_document_from_file, parse_document};

pub mod http;
pub use http::fetch_document;

pub mod writers;
