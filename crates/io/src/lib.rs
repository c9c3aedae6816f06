//! `rostercheck-io` — best-effort roster parsing.
//!
//! Turns loosely structured text (header optional, delimiter ambiguous)
//! into ordered [`Record`](rostercheck_core::Record) sequences. Malformed
//! rows are dropped, never fatal: any text input yields a sequence, however
//! empty.

pub mod layout;
pub mod markers;
pub mod parse;
mod tokenize;

pub use layout::{infer_layout, Layout};
pub use markers::{MarkerConfig, MarkerError};
pub use parse::parse;
