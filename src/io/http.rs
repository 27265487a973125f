//! Remote document loading: a single HTTP GET, no retries and no timeout.
use scraper::Html;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::io::html::parse_document;

/// Fetch `url` once and parse the response body.
///
/// Connection-level failures map to [`Error::NoResponse`]; a non-success
/// status maps to [`Error::HttpStatus`].
pub async fn fetch_document(url: &str) -> Result<Html> {
    info!("Fetching {}", url);
    let response = reqwest::get(url).await.map_err(|e| {
        if e.is_builder() {
            Error::Http(e)
        } else {
            Error::NoResponse(e)
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    debug!("Received {} bytes from {} ({})", body.len(), url, status);
    Ok(parse_document(&body))
}
