//! `rostercheck-analysis` — narrative summaries over reconciled rosters.
//!
//! The reconciliation engine never depends on this crate. Callers hand an
//! [`Analyst`] the already-computed `matched` sequence and are free to
//! discard any failure; an absent analysis is never an error upstream.

use std::collections::BTreeMap;

use rostercheck_core::Record;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Output shape
// ---------------------------------------------------------------------------

/// One row of the labeled category frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub summary: String,
    pub message: String,
    pub category_counts: Vec<CategoryCount>,
}

#[derive(Debug)]
pub enum AnalysisError {
    /// The collaborator could not produce an analysis.
    Unavailable(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "analysis unavailable: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

// ---------------------------------------------------------------------------
// Collaborator seam
// ---------------------------------------------------------------------------

/// A summarization collaborator.
///
/// Implementations may call out to an external text-generation service;
/// the shipped [`TemplateAnalyst`] is fully offline and deterministic.
/// Receives only matched records, already reconciled.
pub trait Analyst {
    fn analyze(&self, matched: &[Record]) -> Result<Analysis, AnalysisError>;
}

/// Count matched records per category, sorted by label. Records with no
/// category are left out of the table.
pub fn category_counts(matched: &[Record]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in matched {
        if let Some(category) = record.category.as_deref() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(label, value)| CategoryCount {
            label: label.to_string(),
            value,
        })
        .collect()
}

/// Template-based analyst: fixed phrasing, no external calls.
pub struct TemplateAnalyst;

impl Analyst for TemplateAnalyst {
    fn analyze(&self, matched: &[Record]) -> Result<Analysis, AnalysisError> {
        let count = matched.len();
        let summary = match count {
            0 => "No entries from the checked list were found in the master list.".to_string(),
            1 => "1 entry from the checked list appears in the master list.".to_string(),
            n => format!("{n} entries from the checked list appear in the master list."),
        };
        let message = if count == 0 {
            "No confirmed entries this time.".to_string()
        } else {
            format!("Congratulations to the {count} confirmed member(s)!")
        };
        Ok(Analysis {
            summary,
            message,
            category_counts: category_counts(matched),
        })
    }
}
