//! Static code tables.
//!
//! Every table is plain data loaded once per process: integer-keyed entries
//! carrying an ordered list of [`Instruction`]s. Lookups go through
//! `LazyLock` indices built from the entry slices.

mod documents;
mod features;

use std::collections::HashMap;
use std::sync::LazyLock;

use ofac_model::attributes::{NAME_FIRST, NAME_LAST, NAME_MIDDLE, NAME_PREFIX, NAME_SUFFIX};

use crate::sanitize::sanitize_identifier;

/// How one output attribute is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub attribute: &'static str,
    /// Fixed value; `None` means the value is resolved from the source.
    pub constant: Option<&'static str>,
}

impl Instruction {
    pub fn is_dynamic(&self) -> bool {
        self.constant.is_none()
    }
}

pub const fn dynamic(attribute: &'static str) -> Instruction {
    Instruction {
        attribute,
        constant: None,
    }
}

pub const fn constant(attribute: &'static str, value: &'static str) -> Instruction {
    Instruction {
        attribute,
        constant: Some(value),
    }
}

/// Where a mapped feature lands in the output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingTarget {
    /// Appended to the record's `FEATURES` array.
    Feature,
    /// Merged as top-level scalars, first write wins.
    Payload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureMapping {
    pub code: i64,
    pub label: &'static str,
    pub target: MappingTarget,
    pub instructions: &'static [Instruction],
}

const fn feature(
    code: i64,
    label: &'static str,
    instructions: &'static [Instruction],
) -> FeatureMapping {
    FeatureMapping {
        code,
        label,
        target: MappingTarget::Feature,
        instructions,
    }
}

const fn payload(
    code: i64,
    label: &'static str,
    instructions: &'static [Instruction],
) -> FeatureMapping {
    FeatureMapping {
        code,
        label,
        target: MappingTarget::Payload,
        instructions,
    }
}

/// Broad family an identity document type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentGroup {
    Direct,
    National,
    Business,
    Tax,
    Account,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMapping {
    pub code: i64,
    pub name: &'static str,
    pub group: DocumentGroup,
    pub instructions: &'static [Instruction],
}

const fn document(
    code: i64,
    name: &'static str,
    group: DocumentGroup,
    instructions: &'static [Instruction],
) -> DocumentMapping {
    DocumentMapping {
        code,
        name,
        group,
        instructions,
    }
}

static FEATURES_BY_CODE: LazyLock<HashMap<i64, &'static FeatureMapping>> = LazyLock::new(|| {
    features::FEATURE_MAPPINGS
        .iter()
        .map(|mapping| (mapping.code, mapping))
        .collect()
});

static DOCUMENTS_BY_CODE: LazyLock<HashMap<i64, &'static DocumentMapping>> = LazyLock::new(|| {
    documents::DOCUMENT_MAPPINGS
        .iter()
        .map(|mapping| (mapping.code, mapping))
        .collect()
});

/// Document mappings keyed by sanitized name; a later entry replaces an
/// earlier one with the same normalized name.
static DOCUMENTS_BY_NAME: LazyLock<HashMap<String, &'static DocumentMapping>> =
    LazyLock::new(|| {
        documents::DOCUMENT_MAPPINGS
            .iter()
            .map(|mapping| (sanitize_identifier(mapping.name), mapping))
            .collect()
    });

pub fn feature_mappings() -> &'static [FeatureMapping] {
    features::FEATURE_MAPPINGS
}

pub fn document_mappings() -> &'static [DocumentMapping] {
    documents::DOCUMENT_MAPPINGS
}

pub fn feature_mapping(code: i64) -> Option<&'static FeatureMapping> {
    FEATURES_BY_CODE.get(&code).copied()
}

pub fn document_mapping(code: i64) -> Option<&'static DocumentMapping> {
    DOCUMENTS_BY_CODE.get(&code).copied()
}

/// Look up a document mapping by an already-sanitized type name.
pub fn document_mapping_by_name(normalized: &str) -> Option<&'static DocumentMapping> {
    DOCUMENTS_BY_NAME.get(normalized).copied()
}

const RECORD_TYPES: [(i64, &str); 4] = [
    (1, "VESSEL"),
    (2, "AIRCRAFT"),
    (3, "ORGANIZATION"),
    (4, "PERSON"),
];

const NAME_TYPES: [(i64, &str); 4] = [
    (1400, "AKA"),
    (1401, "FKA"),
    (1402, "NKA"),
    (1403, "PRIMARY"),
];

const RELATIONSHIP_ROLES: [(i64, &str); 10] = [
    (15003, "CONTROLLED_BY"),
    (15001, "SUPPORTS"),
    (15002, "AGENT_OF"),
    (92122, "PROPERTY_OF"),
    (91725, "LEADER_OF"),
    (15004, "FAMILY_OF"),
    (92019, "OWNS_CONTROLS"),
    (91422, "SIGNIFICANT_ROLE"),
    (91900, "EXECUTIVE_OF"),
    (1555, "ASSOCIATE_OF"),
];

const NAME_PARTS: [(i64, &str); 5] = [
    (1480, NAME_FIRST),
    (1481, NAME_LAST),
    (1482, NAME_MIDDLE),
    (1483, NAME_SUFFIX),
    (1484, NAME_PREFIX),
];

fn find(table: &[(i64, &'static str)], code: i64) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, value)| *value)
}

/// `RECORD_TYPE` for a party subtype code.
pub fn record_type(subtype: i64) -> Option<&'static str> {
    find(&RECORD_TYPES, subtype)
}

/// `NAME_TYPE` for an alias type code.
pub fn name_type(alias_type: i64) -> Option<&'static str> {
    find(&NAME_TYPES, alias_type)
}

/// Well-known pointer role for a relation type code.
pub fn relationship_role(relation_type: i64) -> Option<&'static str> {
    find(&RELATIONSHIP_ROLES, relation_type)
}

/// Name attribute for a documented name part type code.
pub fn name_part_attribute(part_type: i64) -> Option<&'static str> {
    find(&NAME_PARTS, part_type)
}
