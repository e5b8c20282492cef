use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Category;
use crate::parser::{tables, text};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<h2[^>]*>([^<]+)</h2>").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"<a\s[^>]*href=["']#([^"']+)["']"##).unwrap());

/// Build one category descriptor from one fragment. `None` when the
/// fragment carries no level-2 heading.
///
/// Segments with hyperlinks contribute their link targets to `entries`,
/// in order of appearance; everything else becomes tables and prose.
/// Entries are returned in discovery order, the caller sorts.
pub fn parse_category(fragment: &str) -> Option<Category> {
    let name = HEADER_RE.captures(fragment)?[1].trim().to_string();

    let mut entries = Vec::new();
    let mut table_map: BTreeMap<String, _> = BTreeMap::new();
    let mut chunks: Vec<String> = Vec::new();

    for segment in fragment.split("<p>").skip(1) {
        if LINK_RE.is_match(segment) {
            for caps in LINK_RE.captures_iter(segment) {
                entries.push(caps[1].to_string());
            }
            continue;
        }

        let (remaining, found) = tables::extract_tables(segment);
        table_map.extend(found);
        let cleaned = text::strip_markup(&remaining).trim().to_string();
        if !cleaned.is_empty() {
            chunks.push(cleaned);
        }
    }

    Some(Category {
        name,
        description: chunks.join("\n\n"),
        tables: table_map,
        entries,
    })
}

// ── Tests ──
