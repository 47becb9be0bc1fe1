//! Output records and the set-if-absent builder that assembles them.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::attributes;
use crate::feature::Feature;

/// A top-level scalar merged into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Text(String),
    Flag(bool),
    Score(i64),
}

impl PayloadValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Text(value) if value.is_empty())
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for PayloadValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for PayloadValue {
    fn from(value: i64) -> Self {
        Self::Score(value)
    }
}

/// One flattened party, ready to be written as a JSON line.
///
/// Serializes as `DATA_SOURCE`, `RECORD_ID`, `FEATURES`, then payload keys
/// in the order they were first set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    data_source: String,
    record_id: String,
    features: Vec<Feature>,
    payload: Vec<(String, PayloadValue)>,
}

impl Record {
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn payload(&self, key: &str) -> Option<&PayloadValue> {
        self.payload.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn payload_keys(&self) -> impl Iterator<Item = &str> {
        self.payload.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.payload.len()))?;
        map.serialize_entry(attributes::DATA_SOURCE, &self.data_source)?;
        map.serialize_entry(attributes::RECORD_ID, &self.record_id)?;
        map.serialize_entry(attributes::FEATURES, &self.features)?;
        for (key, value) in &self.payload {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Accumulates one party's features and payload.
///
/// Payload keys are write-once: the first non-empty value set for a key is
/// kept and later writes are ignored. Envelope keys can never be set.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(data_source: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            record: Record {
                data_source: data_source.into(),
                record_id: record_id.into(),
                features: Vec::new(),
                payload: Vec::new(),
            },
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record.record_id
    }

    pub fn push_feature(&mut self, feature: Feature) {
        self.record.features.push(feature);
    }

    pub fn features(&self) -> &[Feature] {
        &self.record.features
    }

    /// Returns true when `key` is already taken, including envelope keys.
    pub fn has(&self, key: &str) -> bool {
        attributes::is_reserved(key) || self.record.payload.iter().any(|(k, _)| k == key)
    }

    /// Set a payload key unless it is taken or the value is empty.
    /// Returns whether the value was stored.
    pub fn set_if_absent(&mut self, key: &str, value: impl Into<PayloadValue>) -> bool {
        let value = value.into();
        if value.is_empty() || self.has(key) {
            return false;
        }
        self.record.payload.push((key.to_string(), value));
        true
    }

    pub fn build(self) -> Record {
        self.record
    }
}
