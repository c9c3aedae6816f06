//! Marker keywords driving header detection and column role assignment.

use serde::Deserialize;

/// Substring markers that tag header cells with a column role.
///
/// Matching is case-insensitive substring containment against trimmed,
/// quote-stripped header cells. Defaults cover the vocabularies the tool
/// grew up with: Vietnamese student rosters ("mssv", "mã", "tên", "họ",
/// "ngành", "khoa") plus the English equivalents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkerConfig {
    /// Markers for the identifier (join-key) column.
    #[serde(default = "default_identifier_markers")]
    pub identifier: Vec<String>,
    /// Markers for the display-name column.
    #[serde(default = "default_name_markers")]
    pub name: Vec<String>,
    /// Markers for the category column.
    #[serde(default = "default_category_markers")]
    pub category: Vec<String>,
}

fn default_identifier_markers() -> Vec<String> {
    vec!["mssv".into(), "id".into(), "mã".into()]
}

fn default_name_markers() -> Vec<String> {
    vec!["tên".into(), "name".into(), "họ".into()]
}

fn default_category_markers() -> Vec<String> {
    vec!["ngành".into(), "khoa".into(), "major".into()]
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            identifier: default_identifier_markers(),
            name: default_name_markers(),
            category: default_category_markers(),
        }
    }
}

impl MarkerConfig {
    /// Load a marker config from TOML. Absent keys keep the built-in sets.
    pub fn from_toml(s: &str) -> Result<Self, MarkerError> {
        toml::from_str(s).map_err(|e| MarkerError::ConfigParse(e.to_string()))
    }

    /// True if the (already lower-cased) cell carries any marker from any
    /// role set. Used for the header-vs-data decision on the first line.
    pub fn is_header_cell(&self, cell: &str) -> bool {
        contains_any(cell, &self.identifier)
            || contains_any(cell, &self.name)
            || contains_any(cell, &self.category)
    }
}

/// Substring test of a lower-cased cell against one marker set.
pub(crate) fn contains_any(cell: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| cell.contains(m.to_lowercase().as_str()))
}

#[derive(Debug)]
pub enum MarkerError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
}

impl std::fmt::Display for MarkerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "marker config parse error: {msg}"),
        }
    }
}

impl std::error::Error for MarkerError {}
