#![doc = r##"
domcheck — check an HTML document for the presence of CSS-selector-defined elements.

This crate loads a list of selectors from a JSON file, parses an HTML document from a
local file or a single HTTP GET, and reports for every selector whether at least one
element matches. It powers the `domcheck` CLI and can be embedded in your own Rust
applications.

Checks file
-----------
A JSON array of non-empty selector strings:

```json
["#header", "a[href]", "div.content > p"]
```

Entries are validated when the file is loaded; anything that is not a string, is empty,
or does not parse as a selector is rejected up front. Selectors are sorted before use,
so output is deterministic.

Quick start: check a local file
-------------------------------
```rust,no_run
use std::path::Path;
use domcheck::check_html_file;

fn main() -> domcheck::Result<()> {
    let results = check_html_file(Path::new("index.html"), Path::new("checks.json"))?;
    for (selector, present) in results.iter() {
        println!("{selector}: {present}");
    }
    Ok(())
}
```

Check a URL
-----------
```rust,no_run
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() -> domcheck::Result<()> {
    let results = domcheck::check_url("http://localhost:5000", Path::new("checks.json")).await?;
    println!("{}", domcheck::to_pretty_json(&results)?);
    Ok(())
}
```

In-memory checks
----------------
```rust
use domcheck::{CheckList, check_html};

let checks = CheckList::from_selectors(["div", "span"]).unwrap();
let results = check_html("<html><body><div>x</div></body></html>", &checks);
assert_eq!(results.get("div"), Some(true));
assert_eq!(results.get("span"), Some(false));
```

Error handling
--------------
All fallible functions return `domcheck::Result<T>`; match on `domcheck::Error` to handle
specific cases. `Error::is_network` separates failures of the HTTP fetch from input errors.

```rust,no_run
use std::path::Path;
use domcheck::{check_html_file, Error};

fn main() {
    match check_html_file(Path::new("index.html"), Path::new("checks.json")) {
        Ok(results) => println!("{} checks", results.len()),
        Err(Error::Json(e)) => eprintln!("checks file is not JSON: {e}"),
        Err(Error::InvalidSelector { selector, .. }) => eprintln!("bad selector: {selector}"),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `CheckList`, `CheckResults`, `Source`.
- [`io`] — checks loader, HTML/HTTP document loaders and the JSON report writer.
- [`error`] — crate-level `Error` and `Result`.
"##]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{CHECKS_FILE_DEFAULT, CheckParams, HTML_FILE_DEFAULT, URL_DEFAULT};
pub use error::{Error, Result};
pub use types::{Check, CheckList, CheckResults, Source};

// Loaders and writers
pub use io::writers::{to_pretty_json, write_report};
pub use io::{fetch_document, load_checks, load_document_from_file, parse_document};

// High-level API re-exports
pub use api::{check_html, check_html_file, check_source, check_url};
pub use crate::core::checker::check_document;
