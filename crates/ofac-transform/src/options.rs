//! Run configuration.

/// Default `DATA_SOURCE` written on every record.
pub const DEFAULT_DATA_SOURCE: &str = "OFAC_ADVANCED";

/// Options for one transform run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Value of `DATA_SOURCE` and of every relationship domain.
    pub data_source: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = data_source.into();
        self
    }
}
