use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<hr\s*/?>").unwrap());
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h1[^>]*>[^<]*\((\d+(?:\.\d+)+)\)").unwrap());

/// Split the manual into fragments on its horizontal-rule separators.
/// Each fragment is a candidate category or function entry.
pub fn split_fragments(html: &str) -> Vec<&str> {
    SEPARATOR_RE.split(html).collect()
}

/// Dotted numeric version from the document heading, e.g.
/// `<h1>Teardown API (1.2.3)</h1>` yields `1.2.3`.
pub fn extract_version(html: &str) -> Option<String> {
    VERSION_RE.captures(html).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_hr_variants() {
        let fragments = split_fragments("a<hr/>b<hr>c<hr />d");
        assert_eq!(fragments, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn no_separator_single_fragment() {
        assert_eq!(split_fragments("whole document").len(), 1);
    }

    #[test]
    fn version_captured() {
        assert_eq!(
            extract_version("<h1>Teardown API (1.2.3)</h1>").as_deref(),
            Some("1.2.3")
        );
        assert_eq!(
            extract_version("<h1 id=\"top\">Teardown API (0.9)</h1>").as_deref(),
            Some("0.9")
        );
    }

    #[test]
    fn version_missing() {
        assert_eq!(extract_version("<h1>Teardown API</h1>"), None);
        assert_eq!(extract_version("<h2>Not the doc header (1.2.3)</h2>"), None);
    }
}
