//! Run statistics.

use std::time::Duration;

use ofac_model::Record;
use ofac_model::attributes::{NUMBER_SUFFIX, REL_POINTER_KEY};

/// Counters for one transform run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Parties seen.
    pub processed: usize,
    /// Records written.
    pub emitted: usize,
    /// Parties without a stable identifier or profile.
    pub skipped: usize,
    /// Written records whose `RECORD_ID` was already written earlier.
    pub repeated_ids: usize,
    /// Features across all written records.
    pub features: usize,
    /// Features carrying `REL_POINTER_KEY`.
    pub relationships: usize,
    /// Features with at least one `*_NUMBER` attribute.
    pub identifiers: usize,
    pub unmapped_feature_codes: Vec<i64>,
    pub unmapped_document_codes: Vec<i64>,
    pub duration: Duration,
    /// Hex SHA-256 of every byte written.
    pub output_sha256: String,
}

impl TransformStats {
    pub fn record_emitted(&mut self, record: &Record) {
        self.emitted += 1;
        for feature in record.features() {
            self.features += 1;
            if feature.contains_key(REL_POINTER_KEY) {
                self.relationships += 1;
            }
            if feature.keys().any(|key| key.ends_with(NUMBER_SUFFIX)) {
                self.identifiers += 1;
            }
        }
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}
