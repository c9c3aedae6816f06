//! Header-vs-headerless inference.
//!
//! The decision is a named two-branch strategy rather than string matching
//! buried in the row loop, so each branch can be exercised on its own.

use crate::markers::{contains_any, MarkerConfig};
use crate::tokenize::split_line;

/// Resolved column roles for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub has_header: bool,
    /// Index of the first data line (1 when a header row was consumed).
    pub data_start: usize,
    pub id_col: usize,
    pub name_col: usize,
    pub category_col: usize,
}

impl Layout {
    /// Headerless branch: every line is data, identifier in column 0.
    fn positional() -> Self {
        Layout {
            has_header: false,
            data_start: 0,
            id_col: 0,
            name_col: 1,
            category_col: 2,
        }
    }
}

/// Decide whether `lines[0]` is a header and which column serves each role.
///
/// The first retained line is a header when any of its cells (trimmed,
/// quote-stripped, lower-cased) contains a marker keyword. Header cells are
/// then scanned in order and the first cell carrying a role's marker takes
/// that role. Roles with no marker hit keep the positional defaults
/// (identifier=0, name=1, category=2) — an ambiguous header silently falls
/// back to position for that role.
pub fn infer_layout(lines: &[&str], markers: &MarkerConfig) -> Layout {
    let Some(first) = lines.first() else {
        return Layout::positional();
    };

    let cells: Vec<String> = split_line(first)
        .iter()
        .map(|c| c.to_lowercase())
        .collect();

    if !cells.iter().any(|c| markers.is_header_cell(c)) {
        return Layout::positional();
    }

    let find = |set: &[String]| cells.iter().position(|c| contains_any(c, set));

    let mut layout = Layout::positional();
    layout.has_header = true;
    layout.data_start = 1;
    if let Some(i) = find(&markers.identifier) {
        layout.id_col = i;
    }
    if let Some(i) = find(&markers.name) {
        layout.name_col = i;
    }
    if let Some(i) = find(&markers.category) {
        layout.category_col = i;
    }
    layout
}
