use std::sync::LazyLock;

use regex::Regex;

static EXAMPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<pre[^>]*class=["']?example["']?[^>]*>(.*?)</pre>"#).unwrap()
});

/// Verbatim code from the first example block in the segment, trimmed.
/// Further blocks in the same segment are ignored.
pub fn extract_example(segment: &str) -> Option<String> {
    EXAMPLE_RE
        .captures(segment)
        .map(|caps| caps[1].trim().to_string())
}
