use scraper::Html;
use tracing::debug;

use crate::types::{CheckList, CheckResults};

/// Evaluate every check against `document`, recording whether at least one
/// element matches. Duplicate selectors overwrite the same key.
pub fn check_document(document: &Html, checks: &CheckList) -> CheckResults {
    let mut results = CheckResults::new();
    for check in checks {
        let present = document.select(check.selector()).next().is_some();
        debug!(selector = check.as_str(), present, "evaluated check");
        results.insert(check.as_str(), present);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><body><div>x</div></body></html>";

    fn check(selectors: &[&str], html: &str) -> CheckResults {
        let checks = CheckList::from_selectors(selectors.iter().copied()).unwrap();
        check_document(&Html::parse_document(html), &checks)
    }

    #[test]
    fn present_element_is_true() {
        let results = check(&["div"], PAGE);
        assert_eq!(results.get("div"), Some(true));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn absent_element_is_false() {
        let results = check(&["span"], PAGE);
        assert_eq!(results.get("span"), Some(false));
    }

    #[test]
    fn keys_match_checks_with_duplicates_collapsed() {
        let results = check(&["div", "span", "div", "body > div"], PAGE);
        let keys: Vec<_> = results.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["body > div", "div", "span"]);
        assert_eq!(results.get("body > div"), Some(true));
    }

    #[test]
    fn attribute_and_id_selectors() {
        let html = r##"<html><body><header id="header"></header><a>no href</a></body></html>"##;
        let results = check(&["#header", "a[href]"], html);
        assert_eq!(results.get("#header"), Some(true));
        assert_eq!(results.get("a[href]"), Some(false));
    }

    #[test]
    fn result_order_follows_check_list_order() {
        let halfwidth = "[title=\"\u{FF61}\"]";
        let emoji = "[title=\"\u{1F600}\"]";
        let results = check(&[halfwidth, emoji], PAGE);
        let keys: Vec<_> = results.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![emoji, halfwidth]);
    }

    #[test]
    fn empty_check_list_yields_empty_results() {
        let checks = CheckList::default();
        let results = check_document(&Html::parse_document(PAGE), &checks);
        assert!(results.is_empty());
    }
}
