//! Set-membership reconciliation with merge precedence.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rostercheck_core::{Origin, ReconciliationResult, Record};

/// Normalized form of an identifier. Used only for equality; the stored
/// identifier keeps its original casing and internal characters.
fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

/// Reconcile a subset roster against a master roster.
///
/// Matching is insensitive to letter case and surrounding whitespace.
/// Matched records keep the subset's literal identifier and take the
/// master's display name and category wherever the master actually has
/// them. When the master holds the same normalized identifier more than
/// once, the first occurrence supplies the enrichment; later occurrences
/// are only counted into `master_duplicates`.
pub fn reconcile(subset: &[Record], master: &[Record]) -> ReconciliationResult {
    // O(M) index by normalized identifier, first occurrence wins.
    let mut index: HashMap<String, &Record> = HashMap::with_capacity(master.len());
    let mut master_duplicates = 0;
    for record in master {
        match index.entry(normalize(&record.identifier)) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(_) => master_duplicates += 1,
        }
    }

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for member in subset {
        match index.get(normalize(&member.identifier).as_str()) {
            Some(found) => matched.push(merge(member, found)),
            None => unmatched.push(member.clone()),
        }
    }

    ReconciliationResult {
        matched,
        unmatched,
        subset_count: subset.len(),
        master_count: master.len(),
        master_duplicates,
    }
}

/// Merge precedence: the master wins for descriptive fields it has, the
/// subset's literal identifier wins for display, raw fields are unioned
/// with the master overwriting shared keys.
fn merge(member: &Record, found: &Record) -> Record {
    let display_name = if found.display_name.is_empty() {
        member.display_name.clone()
    } else {
        found.display_name.clone()
    };
    let category = found.category.clone().or_else(|| member.category.clone());

    let mut raw_fields = member.raw_fields.clone();
    for (key, value) in &found.raw_fields {
        raw_fields.insert(key.clone(), value.clone());
    }

    Record {
        identifier: member.identifier.clone(),
        display_name,
        category,
        origin: Origin::Subset,
        raw_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(origin: Origin, id: &str, name: &str, category: Option<&str>) -> Record {
        Record {
            identifier: id.into(),
            display_name: name.into(),
            category: category.map(Into::into),
            origin,
            raw_fields: HashMap::new(),
        }
    }

    fn subset(id: &str) -> Record {
        record(Origin::Subset, id, "", None)
    }

    #[test]
    fn match_is_case_and_whitespace_insensitive() {
        let members = vec![subset("  SV2011001  "), subset("sv2011002")];
        let roster = vec![
            record(Origin::Master, "sv2011001", "Nguyen A", None),
            record(Origin::Master, "SV2011002", "Tran B", None),
        ];
        let result = reconcile(&members, &roster);
        assert_eq!(result.matched.len(), 2);
        assert_eq!(result.unmatched.len(), 0);
        // Literal subset identifiers survive, un-lowercased.
        assert_eq!(result.matched[0].identifier, "  SV2011001  ");
        assert_eq!(result.matched[1].identifier, "sv2011002");
    }

    #[test]
    fn matched_plus_unmatched_equals_subset_count() {
        let members = vec![subset("a"), subset("b"), subset("c")];
        let roster = vec![record(Origin::Master, "b", "", None)];
        let result = reconcile(&members, &roster);
        assert_eq!(result.matched.len() + result.unmatched.len(), result.subset_count);
        assert_eq!(result.subset_count, 3);
        assert_eq!(result.master_count, 1);
    }

    #[test]
    fn unmatched_records_pass_through_unmodified() {
        let member = record(Origin::Subset, "2011009", "Le C", Some("CNTT"));
        let result = reconcile(std::slice::from_ref(&member), &[]);
        assert_eq!(result.unmatched, vec![member]);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn master_name_wins_over_subset_name() {
        let members = vec![record(Origin::Subset, "1", "Subset Name", None)];
        let roster = vec![record(Origin::Master, "1", "Master Name", None)];
        let result = reconcile(&members, &roster);
        assert_eq!(result.matched[0].display_name, "Master Name");
    }

    #[test]
    fn subset_name_fills_empty_master_name() {
        let members = vec![record(Origin::Subset, "1", "Subset Name", None)];
        let roster = vec![record(Origin::Master, "1", "", None)];
        let result = reconcile(&members, &roster);
        assert_eq!(result.matched[0].display_name, "Subset Name");
    }

    #[test]
    fn subset_category_survives_when_master_has_none() {
        // Scenario: subset row "2011003,,Khoa CNTT" against a master with
        // no category column.
        let members = vec![record(Origin::Subset, "2011003", "", Some("Khoa CNTT"))];
        let roster = vec![record(Origin::Master, "2011003", "Nguyen A", None)];
        let result = reconcile(&members, &roster);
        assert_eq!(result.matched[0].category.as_deref(), Some("Khoa CNTT"));
        assert_eq!(result.matched[0].display_name, "Nguyen A");
    }

    #[test]
    fn first_master_occurrence_wins_and_duplicates_are_counted() {
        let members = vec![subset("2011001")];
        let roster = vec![
            record(Origin::Master, "2011001", "First Name", None),
            record(Origin::Master, "2011001", "Second Name", None),
            record(Origin::Master, " 2011001 ", "Third Name", None),
        ];
        let result = reconcile(&members, &roster);
        assert_eq!(result.matched[0].display_name, "First Name");
        assert_eq!(result.master_duplicates, 2);
        assert_eq!(result.master_count, 3);
    }

    #[test]
    fn merged_origin_is_subset() {
        let members = vec![subset("1")];
        let roster = vec![record(Origin::Master, "1", "X", None)];
        let result = reconcile(&members, &roster);
        assert_eq!(result.matched[0].origin, Origin::Subset);
    }

    #[test]
    fn raw_field_union_prefers_master_on_collision() {
        let mut member = subset("1");
        member.raw_fields.insert("original_line".into(), "subset line".into());
        member.raw_fields.insert("note".into(), "from subset".into());
        let mut official = record(Origin::Master, "1", "X", None);
        official.raw_fields.insert("original_line".into(), "master line".into());
        official.raw_fields.insert("Ngành".into(), "CNTT".into());

        let result = reconcile(&[member], &[official]);
        let raw = &result.matched[0].raw_fields;
        assert_eq!(raw.get("original_line").map(String::as_str), Some("master line"));
        assert_eq!(raw.get("note").map(String::as_str), Some("from subset"));
        assert_eq!(raw.get("Ngành").map(String::as_str), Some("CNTT"));
    }

    #[test]
    fn empty_inputs_are_not_errors() {
        let result = reconcile(&[], &[]);
        assert_eq!(result.subset_count, 0);
        assert_eq!(result.master_count, 0);
        assert!(result.matched.is_empty());
        assert!(result.unmatched.is_empty());
    }

    #[test]
    fn reconcile_is_idempotent() {
        let members = vec![subset("a"), subset("B"), subset("c")];
        let roster = vec![
            record(Origin::Master, "A", "One", Some("X")),
            record(Origin::Master, "b", "Two", None),
        ];
        let first = reconcile(&members, &roster);
        let second = reconcile(&members, &roster);
        assert_eq!(first, second);
    }

    #[test]
    fn matched_keeps_subset_input_order() {
        let members = vec![subset("z9"), subset("a1"), subset("m5")];
        let roster = vec![
            record(Origin::Master, "a1", "", None),
            record(Origin::Master, "m5", "", None),
            record(Origin::Master, "z9", "", None),
        ];
        let result = reconcile(&members, &roster);
        let ids: Vec<&str> = result.matched.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["z9", "a1", "m5"]);
    }
}
