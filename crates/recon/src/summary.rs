//! Headline counts for reporting.

use rostercheck_core::ReconciliationResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconSummary {
    pub subset_count: usize,
    pub master_count: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Non-fatal diagnostic: master rows sharing an already-seen
    /// normalized identifier.
    pub master_duplicates: usize,
}

/// Compute summary statistics from a reconciliation result.
pub fn compute_summary(result: &ReconciliationResult) -> ReconSummary {
    ReconSummary {
        subset_count: result.subset_count,
        master_count: result.master_count,
        matched: result.matched.len(),
        unmatched: result.unmatched.len(),
        master_duplicates: result.master_duplicates,
    }
}
