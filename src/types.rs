//! Shared types used across domcheck.
//! Includes the validated `CheckList` (and its `Check` entries), the
//! `CheckResults` mapping and the document `Source`.
use std::path::PathBuf;

use scraper::Selector;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// A single selector taken from the checks file, kept next to its parsed form.
#[derive(Debug, Clone)]
pub struct Check {
    raw: String,
    selector: Selector,
}

impl Check {
    /// Validate and parse one selector string.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let selector = Selector::parse(&raw).map_err(|e| Error::InvalidSelector {
            selector: raw.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { raw, selector })
    }

    /// The selector exactly as written in the checks file.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// Ordered, validated sequence of non-empty selectors.
///
/// Entries are sorted by UTF-16 code units on construction. Duplicates are kept;
/// they collapse into a single key once results are collected.
#[derive(Debug, Clone, Default)]
pub struct CheckList {
    checks: Vec<Check>,
}

impl CheckList {
    pub fn from_selectors<I, S>(selectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut checks = Vec::new();
        for (index, raw) in selectors.into_iter().enumerate() {
            let raw = raw.into();
            if raw.trim().is_empty() {
                return Err(Error::InvalidCheck {
                    index,
                    reason: "empty selector".to_string(),
                });
            }
            checks.push(Check::parse(raw)?);
        }
        // UTF-16 code-unit order, so checks files written for browser tooling
        // keep their order; differs from byte order only above U+FFFF.
        checks.sort_by(|a, b| a.raw.encode_utf16().cmp(b.raw.encode_utf16()));
        Ok(Self { checks })
    }

    /// Build from an already-parsed JSON value, which must be an array of strings.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(Error::ChecksNotArray {
                    found: json_kind(&other).to_string(),
                });
            }
        };

        let mut selectors = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::String(s) => selectors.push(s),
                other => {
                    return Err(Error::InvalidCheck {
                        index,
                        reason: format!("expected a string, got {}", json_kind(&other)),
                    });
                }
            }
        }
        Self::from_selectors(selectors)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Check> {
        self.checks.iter()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<'a> IntoIterator for &'a CheckList {
    type Item = &'a Check;
    type IntoIter = std::slice::Iter<'a, Check>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Selector -> presence mapping. Keys keep insertion order, which is the
/// order of the sorted check list; re-inserting a key updates it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResults(Vec<(String, bool)>);

impl CheckResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: impl Into<String>, present: bool) {
        let selector = selector.into();
        match self.0.iter_mut().find(|(key, _)| *key == selector) {
            Some(entry) => entry.1 = present,
            None => self.0.push((selector, present)),
        }
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.iter().find(|(key, _)| *key == selector).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Serialize for CheckResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Where the HTML document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "file {}", path.display()),
            Source::Url(url) => write!(f, "url {}", url),
        }
    }
}
