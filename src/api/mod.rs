//! High-level, ergonomic library API: check a local HTML file, a URL, or an
//! in-memory string against a checks file. Prefer these entrypoints over the
//! low-level `io` and `core` modules when embedding domcheck.
use std::path::Path;

use tracing::info;

use crate::core::checker::check_document;
use crate::core::params::CheckParams;
use crate::error::{Error, Result};
use crate::io::{fetch_document, load_checks, load_document_from_file, parse_document};
use crate::types::{CheckList, CheckResults, Source};

/// Check an HTML string against an already loaded check list.
pub fn check_html(html: &str, checks: &CheckList) -> CheckResults {
    check_document(&parse_document(html), checks)
}

/// Check a local HTML file against the selectors in `checks_path`.
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> Result<CheckResults> {
    let checks = load_checks(checks_path)?;
    let document = load_document_from_file(html_path)?;
    Ok(check_document(&document, &checks))
}

/// Fetch `url` once and check the response body against the selectors in `checks_path`.
///
/// Checks are loaded before the request is made, so a broken checks file never
/// costs a network round trip.
pub async fn check_url(url: &str, checks_path: &Path) -> Result<CheckResults> {
    let checks = load_checks(checks_path)?;
    let document = fetch_document(url).await?;
    Ok(check_document(&document, &checks))
}

/// Run a complete check described by `params`.
///
/// File sources are handled synchronously. URL sources run on a
/// single-threaded runtime that blocks until the one request resolves.
///
/// # Errors
///
/// Returns [`Error::InsideRuntime`] for a URL source when called from within
/// a tokio runtime; async callers should await [`check_url`] instead.
pub fn check_source(params: &CheckParams) -> Result<CheckResults> {
    info!("Checking {} against {:?}", params.source, params.checks);
    match &params.source {
        Source::File(path) => check_html_file(path, &params.checks),
        Source::Url(url) => {
            if tokio::runtime::Handle::try_current().is_ok() {
                return Err(Error::InsideRuntime);
            }
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(check_url(url, &params.checks))
        }
    }
}
