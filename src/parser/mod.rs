pub mod args;
pub mod category;
pub mod example;
pub mod function;
pub mod splitter;
pub mod tables;
pub mod text;

use anyhow::{bail, Result};

use crate::model::Document;

/// Full pipeline: split the manual into fragments, classify each as a
/// category or a function entry, discard the rest. A missing document
/// version header is fatal.
pub fn parse_document(html: &str) -> Result<Document> {
    let Some(version) = splitter::extract_version(html) else {
        bail!("no version header found in document");
    };

    let mut categories = Vec::new();
    let mut functions = Vec::new();

    for fragment in splitter::split_fragments(html) {
        if let Some(mut cat) = category::parse_category(fragment) {
            cat.entries.sort();
            categories.push(cat);
        } else if let Some(func) = function::parse_function(fragment) {
            functions.push(func);
        }
        // Everything else is boilerplate between entries.
    }

    Ok(Document {
        version,
        categories,
        functions,
    })
}

// ── Tests ──
