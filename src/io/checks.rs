use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::types::CheckList;

/// Read a checks file (a JSON array of selector strings) and validate every entry.
pub fn load_checks(path: &Path) -> Result<CheckList> {
    let contents = fs::read_to_string(path)?;
    let checks = CheckList::from_json_str(&contents)?;
    debug!("Loaded {} checks from {:?}", checks.len(), path);
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::Error;
    use crate::types::Check;

    fn checks_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_sorts_selectors() {
        let file = checks_file(r##"["h1", "#header", "a[href]"]"##);
        let checks = load_checks(file.path()).unwrap();
        let raws: Vec<_> = checks.iter().map(Check::as_str).collect();
        assert_eq!(raws, vec!["#header", "a[href]", "h1"]);
    }

    #[test]
    fn invalid_json_fails() {
        let file = checks_file("not json");
        assert!(matches!(load_checks(file.path()), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_checks(&dir.path().join("checks.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
