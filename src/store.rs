use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Document, Function};

const API_FILE: &str = "api.json";
const VERSION_FILE: &str = "version.txt";

/// What `persist` did with the parsed document.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Stored version tag already matches; nothing written.
    Unchanged,
    /// New or changed version; files written.
    Written,
}

/// Serialized shape of the output file. Categories are deliberately not
/// persisted.
#[derive(Serialize, Deserialize)]
struct PersistedDocument {
    version: String,
    functions: Vec<Function>,
}

/// Previously stored version tag. A missing file reads as empty, so the
/// first run always writes.
pub fn read_previous_version(dir: &Path) -> Result<String> {
    let path = dir.join(VERSION_FILE);
    if !path.exists() {
        return Ok(String::new());
    }
    let tag = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(tag.trim().to_string())
}

/// Compare against the stored tag and write `api.json` + `version.txt`
/// when the version moved.
pub fn persist(dir: &Path, doc: &Document) -> Result<Outcome> {
    let previous = read_previous_version(dir)?;
    if previous == doc.version {
        return Ok(Outcome::Unchanged);
    }
    write_document(dir, doc)?;
    Ok(Outcome::Written)
}

pub fn write_document(dir: &Path, doc: &Document) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let persisted = PersistedDocument {
        version: doc.version.clone(),
        functions: doc.functions.clone(),
    };
    let json = serde_json::to_string_pretty(&persisted)?;
    fs::write(dir.join(API_FILE), json + "\n")
        .with_context(|| format!("failed to write {}", dir.join(API_FILE).display()))?;
    fs::write(dir.join(VERSION_FILE), &doc.version)
        .with_context(|| format!("failed to write {}", dir.join(VERSION_FILE).display()))?;
    Ok(())
}

/// Read back the persisted output for display commands.
pub fn load_functions(dir: &Path) -> Result<(String, Vec<Function>)> {
    let path = dir.join(API_FILE);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {} (run 'run' first)", path.display()))?;
    let stored: PersistedDocument =
        serde_json::from_str(&raw).context("malformed api.json")?;
    Ok((stored.version, stored.functions))
}

// ── Tests ──
