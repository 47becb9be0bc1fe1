//! Run-scoped record of codes that had no mapping.

use std::collections::BTreeSet;

/// Distinct unmapped codes seen during a run. Each `record_*` call returns
/// true only the first time a code is seen, so callers warn once per code.
#[derive(Debug, Clone, Default)]
pub struct MissingCodes {
    feature_types: BTreeSet<i64>,
    document_types: BTreeSet<i64>,
}

impl MissingCodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_feature_type(&mut self, code: i64) -> bool {
        self.feature_types.insert(code)
    }

    pub fn record_document_type(&mut self, code: i64) -> bool {
        self.document_types.insert(code)
    }

    /// Unmapped feature type codes, ascending.
    pub fn feature_types(&self) -> Vec<i64> {
        self.feature_types.iter().copied().collect()
    }

    /// Unmapped document type codes, ascending.
    pub fn document_types(&self) -> Vec<i64> {
        self.document_types.iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.feature_types.is_empty() && self.document_types.is_empty()
    }
}
