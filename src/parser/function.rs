use std::sync::LazyLock;

use regex::Regex;

use crate::model::Function;
use crate::parser::{args, example, tables, text};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<h3[^>]*>([^<]+)</h3>").unwrap());

/// Build one function descriptor from one fragment. `None` when the
/// fragment carries no level-3 heading, which marks it as something other
/// than a function entry.
///
/// Fragment layout after splitting on `<p>`: heading, arguments, returns,
/// description, optional second description paragraph, example.
pub fn parse_function(fragment: &str) -> Option<Function> {
    let name = HEADER_RE.captures(fragment)?[1].trim().to_string();

    let segments: Vec<&str> = fragment.split("<p>").collect();

    let arguments = segments
        .get(1)
        .map(|s| args::parse_arguments(s))
        .unwrap_or_default();
    let returns = segments
        .get(2)
        .map(|s| args::parse_arguments(s))
        .unwrap_or_default();

    let mut description = segments.get(3).copied().unwrap_or("").to_string();
    if segments.len() > 5 {
        description.push_str("\n\n");
        description.push_str(segments[4]);
    }

    let (remaining, tables) = tables::extract_tables(&description);
    let description = text::reflow(&text::strip_markup(&remaining));

    let examples = segments
        .last()
        .and_then(|s| example::extract_example(s))
        .into_iter()
        .collect();

    Some(Function {
        name,
        arguments,
        returns,
        description,
        tables,
        examples,
    })
}

// ── Tests ──
