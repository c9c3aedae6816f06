//! Line-oriented record parsing.

use std::collections::HashMap;

use rostercheck_core::{Origin, Record, RAW_ORIGINAL_LINE};

use crate::layout::infer_layout;
use crate::markers::MarkerConfig;
use crate::tokenize::split_line;

/// Parse raw text into an ordered record sequence, best effort.
///
/// Blank and whitespace-only lines are discarded before structure
/// inference. Rows that cannot supply a non-empty identifier are dropped
/// rather than reported; the parse never fails.
pub fn parse(content: &str, origin: Origin, markers: &MarkerConfig) -> Vec<Record> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let layout = infer_layout(&lines, markers);
    let header_cells: Option<Vec<String>> = layout.has_header.then(|| split_line(lines[0]));

    let mut records = Vec::new();
    for line in &lines[layout.data_start..] {
        let tokens = split_line(line);

        // Must at least reach the identifier column.
        if tokens.len() <= layout.id_col {
            continue;
        }
        let identifier = tokens[layout.id_col].clone();
        if identifier.is_empty() {
            continue;
        }

        let display_name = tokens.get(layout.name_col).cloned().unwrap_or_default();
        let category = tokens
            .get(layout.category_col)
            .filter(|c| !c.is_empty())
            .cloned();

        let mut raw_fields = HashMap::new();
        raw_fields.insert(RAW_ORIGINAL_LINE.to_string(), (*line).to_string());
        if let Some(ref headers) = header_cells {
            for (i, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                if let Some(value) = tokens.get(i) {
                    raw_fields.insert(header.clone(), value.clone());
                }
            }
        }

        records.push(Record {
            identifier,
            display_name,
            category,
            origin,
            raw_fields,
        });
    }
    records
}
