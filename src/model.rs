use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rows of trimmed cell strings. The naming row (first row, first cell)
/// is consumed during extraction and not stored here.
pub type Table = Vec<Vec<String>>;

/// Complete parsed manual for one version of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: String,
    pub categories: Vec<Category>,
    pub functions: Vec<Function>,
}

/// One category section: prose plus the names of its member functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tables: BTreeMap<String, Table>,
    /// Function names linked from the section, sorted lexicographically.
    /// Resolved against `Document::functions` by consumers.
    pub entries: Vec<String>,
}

/// One documented API function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub returns: Vec<Argument>,
    /// Reflowed prose, with `${table:Name}` placeholders where tables
    /// were lifted out.
    pub description: String,
    #[serde(default)]
    pub tables: BTreeMap<String, Table>,
    /// Example code blocks. The manual carries at most one per function.
    pub examples: Vec<String>,
}

/// Argument or return value descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub optional: bool,
    pub desc: String,
}
