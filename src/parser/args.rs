use std::sync::LazyLock;

use regex::Regex;

use crate::model::Argument;

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<span[^>]*>([^<]*)</span>\s*<span[^>]*>\(([^)]*)\)</span>\s*&ndash;\s*(.*?)<br\s*/?>",
    )
    .unwrap()
});

const OPTIONAL_MARKER: &str = ", optional";

/// Parse a paragraph of `name (type) – description` descriptor entries,
/// one per `<br/>`-terminated line. The `, optional` suffix inside the
/// type parentheses flips `optional` and is stripped from the stored
/// type, along with everything after it.
pub fn parse_arguments(segment: &str) -> Vec<Argument> {
    ENTRY_RE
        .captures_iter(segment)
        .map(|caps| {
            let raw_ty = caps[2].trim().to_string();
            let (ty, optional) = match raw_ty.find(OPTIONAL_MARKER) {
                Some(pos) => (raw_ty[..pos].to_string(), true),
                None => (raw_ty, false),
            };
            Argument {
                name: caps[1].trim().to_string(),
                ty,
                optional,
                desc: caps[3].trim().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_entries() {
        assert!(parse_arguments("None</p>").is_empty());
        assert!(parse_arguments("").is_empty());
    }

    #[test]
    fn optional_entry() {
        let args = parse_arguments(
            "<span class='foo name'>x</span> <span class='argtype'>(number, optional)</span> &ndash; desc<br/>",
        );
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "x");
        assert_eq!(args[0].ty, "number");
        assert!(args[0].optional);
        assert_eq!(args[0].desc, "desc");
    }

    #[test]
    fn required_entry() {
        let args = parse_arguments(
            r#"<span class="argname">path</span> <span class="argtype">(string)</span> &ndash; Registry path<br/>"#,
        );
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].ty, "string");
        assert!(!args[0].optional);
        assert_eq!(args[0].desc, "Registry path");
    }

    #[test]
    fn multiple_entries_in_order() {
        let segment = r#"<span class="argname">a</span> <span class="argtype">(number)</span> &ndash; first<br/>
<span class="argname">b</span> <span class="argtype">(table, optional)</span> &ndash; second<br/></p>"#;
        let args = parse_arguments(segment);
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "a");
        assert_eq!(args[1].name, "b");
        assert_eq!(args[1].ty, "table");
        assert!(args[1].optional);
    }

    #[test]
    fn marker_strips_trailing_text() {
        let args = parse_arguments(
            r#"<span class="argname">t</span> <span class="argtype">(number, optional, default 0)</span> &ndash; timeout<br/>"#,
        );
        assert_eq!(args[0].ty, "number");
        assert!(args[0].optional);
    }
}
