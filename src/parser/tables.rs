use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Table;

static TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<table[^>]*>(.*?)</\s*table\s*>").unwrap());
static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tr[^>]*>(.*?)</\s*tr\s*>").unwrap());
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<td[^>]*>(.*?)</\s*td\s*>").unwrap());

/// Pull embedded tables out of a text block, replacing each with a
/// `${table:Name}` placeholder at its original position. The first cell
/// of the first row names the table; that row is not stored. Markup
/// without rows, or without a naming cell, is left in place. Unterminated
/// table markup never matches and is skipped.
pub fn extract_tables(text: &str) -> (String, BTreeMap<String, Table>) {
    let mut tables = BTreeMap::new();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in TABLE_RE.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let body = caps.get(1).unwrap().as_str();

        let mut rows: Table = ROW_RE
            .captures_iter(body)
            .map(|row| {
                CELL_RE
                    .captures_iter(row.get(1).unwrap().as_str())
                    .map(|cell| clean_cell(cell.get(1).unwrap().as_str()))
                    .collect()
            })
            .collect();

        let name = match rows.first().and_then(|r| r.first()) {
            Some(n) if !n.is_empty() => n.clone(),
            _ => {
                // No naming cell: keep the markup as-is.
                out.push_str(&text[last..whole.end()]);
                last = whole.end();
                continue;
            }
        };
        rows.remove(0);

        out.push_str(&text[last..whole.start()]);
        out.push_str(&format!("${{table:{}}}", name));
        last = whole.end();
        tables.insert(name, rows);
    }
    out.push_str(&text[last..]);

    (out.trim().to_string(), tables)
}

fn clean_cell(cell: &str) -> String {
    cell.replace("&nbsp;", " ").trim().to_string()
}

// ── Tests ──
