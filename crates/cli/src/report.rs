//! JSON report envelope for `rcheck check`.
//!
//! Run metadata lives here, not in the reconciliation result itself: the
//! engine output stays a pure function of its inputs.

use chrono::Utc;
use rostercheck_analysis::Analysis;
use rostercheck_core::ReconciliationResult;
use rostercheck_recon::ReconSummary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub tool_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub meta: ReportMeta,
    pub summary: ReconSummary,
    pub result: ReconciliationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl CheckReport {
    pub fn new(
        summary: ReconSummary,
        result: ReconciliationResult,
        analysis: Option<Analysis>,
    ) -> Self {
        CheckReport {
            meta: ReportMeta {
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                run_at: Utc::now().to_rfc3339(),
            },
            summary,
            result,
            analysis,
        }
    }
}
