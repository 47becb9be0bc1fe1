//! Sanctions export transform.
//!
//! Turns an indexed sanctions export into one flattened record per party and
//! writes them as newline-delimited JSON:
//!
//! - **assembler**: per-party pipeline producing a [`ofac_model::Record`]
//! - **names**: name features and the display-name cache
//! - **relationships**: pointer features, roles and remarks
//! - **payload**: sanctions summary and party-level scalars
//! - **writer**: JSONL sink with an output digest
//! - **pipeline**: the index-then-stream run

pub mod assembler;
pub mod error;
pub mod names;
pub mod options;
pub mod payload;
pub mod pipeline;
pub mod relationships;
pub mod stats;
pub mod writer;

pub use assembler::RecordAssembler;
pub use error::{Result, TransformError};
pub use names::{DisplayNames, display_name, name_features};
pub use options::{DEFAULT_DATA_SOURCE, TransformOptions};
pub use payload::{PartyScalars, SanctionsSummary, normalize_list_name};
pub use pipeline::{transform_document, transform_file, transform_index};
pub use relationships::{RelationshipResolver, resolve_role};
pub use stats::TransformStats;
pub use writer::JsonlWriter;
