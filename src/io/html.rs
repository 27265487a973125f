use std::fs;
use std::path::Path;

use scraper::Html;
use tracing::debug;

use crate::error::Result;

/// Parse HTML text into a queryable document.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Read a local HTML file and parse it. Invalid UTF-8 is replaced rather than rejected.
pub fn load_document_from_file(path: &Path) -> Result<Html> {
    let bytes = fs::read(path)?;
    debug!("Read {} bytes of HTML from {:?}", bytes.len(), path);
    Ok(parse_document(&String::from_utf8_lossy(&bytes)))
}
