use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").unwrap());

const MAX_WIDTH: usize = 80;

/// Remove residual markup tags and decode the handful of entities the
/// manual uses. Table placeholders carry no angle brackets and pass
/// through untouched.
pub fn strip_markup(text: &str) -> String {
    let stripped = TAG_RE.replace_all(text, " ");
    stripped
        .replace("&nbsp;", " ")
        .replace("&ndash;", "\u{2013}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Greedily repack prose into lines of at most 80 characters, joined by
/// single newlines. A token longer than the limit gets a line of its own,
/// unsplit. Token order is preserved exactly.
pub fn reflow(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= MAX_WIDTH {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(reflow(""), "");
        assert_eq!(reflow("   \n  "), "");
    }

    #[test]
    fn short_text_single_line() {
        assert_eq!(reflow("one two three"), "one two three");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(reflow("one\n\n  two\tthree"), "one two three");
    }

    #[test]
    fn lines_never_exceed_limit() {
        let text = "word ".repeat(100);
        let out = reflow(&text);
        for line in out.lines() {
            assert!(line.len() <= 80, "line too long: {:?}", line);
        }
    }

    #[test]
    fn order_preserved() {
        let words: Vec<String> = (0..60).map(|i| format!("w{}", i)).collect();
        let out = reflow(&words.join(" "));
        let back: Vec<&str> = out.split_whitespace().collect();
        assert_eq!(back, words.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    }

    #[test]
    fn oversized_token_own_line() {
        let big = "x".repeat(90);
        let out = reflow(&format!("small {} tail", big));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["small", big.as_str(), "tail"]);
    }

    #[test]
    fn strip_removes_tags_and_entities() {
        let out = strip_markup("a</p> <br/>b &amp; c&nbsp;d");
        assert_eq!(out.split_whitespace().collect::<Vec<_>>(), vec!["a", "b", "&", "c", "d"]);
    }

    #[test]
    fn strip_keeps_placeholders() {
        let out = strip_markup("see ${table:Colors}</p>");
        assert!(out.contains("${table:Colors}"));
    }
}
