//! CSV export of reconciliation results.

use std::path::Path;

use rostercheck_core::{ReconciliationResult, Record};

use crate::{CliError, EXIT_ERROR};

pub const STATUS_MATCHED: &str = "matched";
pub const STATUS_NOT_FOUND: &str = "not_found";

/// Write matched rows then unmatched rows with a fixed status column.
pub fn write_csv(path: &Path, result: &ReconciliationResult) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(csv_err)?;

    writer
        .write_record(["identifier", "display_name", "category", "status"])
        .map_err(csv_err)?;
    for record in &result.matched {
        write_row(&mut writer, record, STATUS_MATCHED)?;
    }
    for record in &result.unmatched {
        write_row(&mut writer, record, STATUS_NOT_FOUND)?;
    }
    writer.flush().map_err(|e| CliError::new(EXIT_ERROR, e.to_string()))
}

fn write_row<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    record: &Record,
    status: &str,
) -> Result<(), CliError> {
    writer
        .write_record([
            record.identifier.as_str(),
            record.display_name.as_str(),
            record.category.as_deref().unwrap_or(""),
            status,
        ])
        .map_err(csv_err)
}

fn csv_err(e: csv::Error) -> CliError {
    CliError::new(EXIT_ERROR, format!("CSV export error: {e}"))
}
