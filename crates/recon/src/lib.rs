//! `rostercheck-recon` — subset/master roster reconciliation.
//!
//! Pure engine crate: receives pre-parsed records, returns a
//! [`ReconciliationResult`](rostercheck_core::ReconciliationResult).
//! No IO dependencies, no hidden state.

pub mod reconcile;
pub mod summary;

pub use reconcile::reconcile;
pub use summary::{compute_summary, ReconSummary};
