//! `rostercheck-core` — shared data model.
//!
//! Pure type crate: records emitted by the parser, results produced by the
//! reconciler. No IO dependencies.

use std::collections::HashMap;

use serde::Serialize;

/// Raw-field key holding the unparsed input line of a record.
pub const RAW_ORIGINAL_LINE: &str = "original_line";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Which input file produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Subset,
    Master,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subset => write!(f, "subset"),
            Self::Master => write!(f, "master"),
        }
    }
}

/// One row parsed from an input file.
///
/// `identifier` is stored exactly as written in the input (the token's own
/// trim excepted). Normalization for matching happens at comparison time in
/// the reconciler, never at storage time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Join key. Never empty or whitespace-only; rows that cannot supply one
    /// are dropped during parsing.
    pub identifier: String,
    /// Empty string when the input had no name for this row.
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub origin: Origin,
    /// Free-form bag retaining original row data. Always contains
    /// [`RAW_ORIGINAL_LINE`]; with a header row, one entry per header cell.
    pub raw_fields: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Reconciliation output
// ---------------------------------------------------------------------------

/// Output of one reconciliation run. Read-only once produced; a new run
/// replaces the previous result wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciliationResult {
    /// Subset records confirmed present in the master, in subset input
    /// order, each carrying merged fields.
    pub matched: Vec<Record>,
    /// Subset records absent from the master, unmodified, in subset input
    /// order.
    pub unmatched: Vec<Record>,
    pub subset_count: usize,
    pub master_count: usize,
    /// Master records whose normalized identifier was already indexed.
    /// First occurrence wins for enrichment; this field only diagnoses.
    pub master_duplicates: usize,
}
