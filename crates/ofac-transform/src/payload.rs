//! Per-party payload aggregation.
//!
//! Sanctions entries are scanned once into a [`SanctionsSummary`]; the
//! summary and the party-level scalars are then merged into the record with
//! set-if-absent semantics, so values written earlier by payload feature
//! mappings are never overwritten.

use ofac_ingest::ReferenceTables;
use ofac_map::date_from_parts;
use ofac_model::attributes::{
    DATA_QUALITY_SCORE, IS_PRIMARY, SANCTIONS_DATE, SANCTIONS_LIST, SANCTIONS_PROGRAMS,
    SANCTIONS_REMARKS, SANCTIONS_TYPE,
};
use ofac_model::{Element, RecordBuilder};

/// Measure type whose comments name sanctions programs.
pub const PROGRAM_MEASURE_TYPE: &str = "1";

const SEPARATOR: &str = "; ";
const LIST_SUFFIX: &str = " list";

/// Distinct values collected from a party's sanctions entries, in first-seen
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanctionsSummary {
    pub lists: Vec<String>,
    pub earliest_date: Option<String>,
    pub programs: Vec<String>,
    pub types: Vec<String>,
}

impl SanctionsSummary {
    pub fn collect(entries: &[&Element], references: &ReferenceTables) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            if let Some(list_id) = entry.attr("ListID").filter(|id| !id.is_empty()) {
                let name = references.list(list_id).unwrap_or(list_id);
                if let Some(name) = normalize_list_name(name) {
                    push_distinct(&mut summary.lists, name);
                }
            }

            // Entry dates are uniform per entry; only the first event counts.
            if let Some(date) = entry.child("EntryEvent").and_then(entry_event_date)
                && summary
                    .earliest_date
                    .as_ref()
                    .is_none_or(|earliest| date < *earliest)
            {
                summary.earliest_date = Some(date);
            }

            for measure in entry.children_named("SanctionsMeasure") {
                let Some(measure_type) = measure.attr("SanctionsTypeID") else {
                    continue;
                };
                if measure_type == PROGRAM_MEASURE_TYPE {
                    if let Some(comment) = measure.find_text("Comment") {
                        push_distinct(&mut summary.programs, comment);
                    }
                } else {
                    let label = references
                        .sanctions_type(measure_type)
                        .unwrap_or(measure_type);
                    if !label.is_empty() {
                        push_distinct(&mut summary.types, label);
                    }
                }
            }
        }
        summary
    }

    /// Merge the summary into the record, joining multi-valued fields.
    pub fn apply(&self, builder: &mut RecordBuilder) {
        if !self.lists.is_empty() {
            builder.set_if_absent(SANCTIONS_LIST, self.lists.join(SEPARATOR));
        }
        if let Some(date) = &self.earliest_date {
            builder.set_if_absent(SANCTIONS_DATE, date.as_str());
        }
        if !self.programs.is_empty() {
            builder.set_if_absent(SANCTIONS_PROGRAMS, self.programs.join(SEPARATOR));
        }
        if !self.types.is_empty() {
            builder.set_if_absent(SANCTIONS_TYPE, self.types.join(SEPARATOR));
        }
    }
}

/// Party-level scalars merged after the sanctions summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyScalars {
    pub is_primary: Option<bool>,
    pub max_reliability: Option<i64>,
    pub remarks: Option<String>,
}

impl PartyScalars {
    pub fn apply(self, builder: &mut RecordBuilder) {
        if let Some(is_primary) = self.is_primary {
            builder.set_if_absent(IS_PRIMARY, is_primary);
        }
        if let Some(score) = self.max_reliability {
            builder.set_if_absent(DATA_QUALITY_SCORE, score);
        }
        if let Some(remarks) = self.remarks {
            builder.set_if_absent(SANCTIONS_REMARKS, remarks);
        }
    }
}

/// Trim a list name and drop a trailing "list" word.
pub fn normalize_list_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    let stripped = trimmed
        .len()
        .checked_sub(LIST_SUFFIX.len())
        .and_then(|cut| Some((trimmed.get(..cut)?, trimmed.get(cut..)?)))
        .filter(|(_, suffix)| suffix.eq_ignore_ascii_case(LIST_SUFFIX))
        .map_or(trimmed, |(head, _)| head.trim());
    (!stripped.is_empty()).then_some(stripped)
}

/// Date of an entry event: its `Date`, else the start of its `DatePeriod`.
pub fn entry_event_date(event: &Element) -> Option<String> {
    event
        .child("Date")
        .and_then(date_from_parts)
        .or_else(|| event.find("DatePeriod/Start/From").and_then(date_from_parts))
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}
