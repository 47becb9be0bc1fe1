//! Code-table driven mapping of sanctions features and identity documents.
//!
//! The static tables in [`tables`] are pure data: each known source code
//! carries an ordered list of [`Instruction`]s. [`FeatureMapper`] and
//! [`DocumentMapper`] resolve those instructions against one source element
//! and the read-only [`ofac_ingest::SourceIndex`], degrading to a generic
//! `OTHER_ID_*` feature for codes the tables do not know.

pub mod attributes;
pub mod dates;
pub mod document;
pub mod feature;
pub mod missing;
pub mod sanitize;
pub mod tables;

pub use attributes::AttributeKind;
pub use dates::{date_from_parts, format_date_parts, normalize_date_string};
pub use document::{
    DOCUMENT_STRATEGIES, DocumentFacts, DocumentMapper, DocumentStrategy, apply_document_mapping,
    by_exact_code, by_normalized_name, registration_number, resolve_document_mapping,
};
pub use feature::{
    FeatureFacts, FeatureMapper, MappedFeature, build_attributes, feature_reliability,
};
pub use missing::MissingCodes;
pub use sanitize::{UNKNOWN_IDENTIFIER, sanitize_identifier};
pub use tables::{
    DocumentGroup, DocumentMapping, FeatureMapping, Instruction, MappingTarget, name_part_attribute,
    name_type, record_type, relationship_role,
};
