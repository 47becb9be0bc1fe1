//! Errors for the transform stage.
//!
//! Unmapped codes, unresolvable attributes and parties without a stable
//! identifier are not errors: they are logged and counted in the run
//! statistics. Only input and output failures abort a run.

use std::path::PathBuf;

use ofac_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("failed to create output file {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize record {record_id}: {source}")]
    Serialize {
        record_id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
