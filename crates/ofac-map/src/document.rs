//! Identity document mapping.
//!
//! A document type code is resolved through an ordered list of strategies
//! (exact code, then normalized type name). Documents whose type resolves
//! nowhere still produce a generic `OTHER_ID_*` feature. A document without
//! a registration number is dropped before any resolution happens.

use ofac_ingest::ReferenceTables;
use ofac_model::attributes::{
    ACCOUNT_DOMAIN, NUMBER_SUFFIX, OTHER_ID_COUNTRY, OTHER_ID_NUMBER, OTHER_ID_TYPE,
};
use ofac_model::{Element, Feature};
use tracing::warn;

use crate::missing::MissingCodes;
use crate::sanitize::sanitize_identifier;
use crate::tables::{self, DocumentMapping};

/// One way of finding a static mapping for a document type code.
pub type DocumentStrategy = fn(i64, &ReferenceTables) -> Option<&'static DocumentMapping>;

/// Resolution strategies, tried in order.
pub const DOCUMENT_STRATEGIES: [(&str, DocumentStrategy); 2] = [
    ("exact_code", by_exact_code),
    ("normalized_name", by_normalized_name),
];

/// The static table entry for `code` itself.
pub fn by_exact_code(
    code: i64,
    _references: &ReferenceTables,
) -> Option<&'static DocumentMapping> {
    tables::document_mapping(code)
}

/// The static entry whose sanitized name equals the sanitized source label.
pub fn by_normalized_name(
    code: i64,
    references: &ReferenceTables,
) -> Option<&'static DocumentMapping> {
    let label = references.document_type(&code.to_string())?;
    tables::document_mapping_by_name(&sanitize_identifier(label))
}

pub fn resolve_document_mapping(
    code: i64,
    references: &ReferenceTables,
) -> Option<&'static DocumentMapping> {
    DOCUMENT_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(code, references))
}

/// Values a document element can supply to its mapping instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFacts<'a> {
    pub number: &'a str,
    pub country: Option<&'a str>,
    pub region: Option<&'a str>,
}

/// Apply a mapping's instructions to the document's facts.
pub fn apply_document_mapping(
    mapping: &DocumentMapping,
    facts: &DocumentFacts<'_>,
) -> Option<Feature> {
    let mut feature = Feature::new();
    for instruction in mapping.instructions {
        let attribute = instruction.attribute;
        if let Some(constant) = instruction.constant {
            feature.insert(attribute, constant);
        } else if attribute.ends_with(NUMBER_SUFFIX) {
            feature.insert(attribute, facts.number);
        } else if attribute.ends_with("_COUNTRY") {
            if let Some(country) = facts.country {
                feature.insert(attribute, country);
            }
        } else if attribute.ends_with("_STATE") {
            if let Some(region) = facts.region {
                feature.insert(attribute, region);
            }
        } else if attribute == ACCOUNT_DOMAIN {
            feature.insert(attribute, sanitize_identifier(mapping.name));
        } else {
            feature.insert(attribute, facts.number);
        }
    }
    (!feature.is_empty()).then_some(feature)
}

/// Registration number: the direct field, else the first nested detail value.
pub fn registration_number(document: &Element) -> Option<&str> {
    document.find_text("IDRegistrationNo").or_else(|| {
        document
            .descendants_named("DetailValue")
            .find_map(|detail| detail.child("Value"))
            .and_then(Element::text)
    })
}

pub struct DocumentMapper<'a> {
    references: &'a ReferenceTables,
}

impl<'a> DocumentMapper<'a> {
    pub fn new(references: &'a ReferenceTables) -> Self {
        Self { references }
    }

    /// Map one `IDRegDocument` element to at most one feature.
    pub fn map(&self, document: &Element, missing: &mut MissingCodes) -> Option<Feature> {
        let code = document.attr_int("IDRegDocTypeID")?;
        let facts = DocumentFacts {
            number: registration_number(document)?,
            country: document
                .attr("IssuedBy-CountryID")
                .filter(|id| !id.is_empty())
                .and_then(|id| self.references.country(id)),
            region: document.find_text("IssuedBy-RegionText"),
        };
        match resolve_document_mapping(code, self.references) {
            Some(mapping) => apply_document_mapping(mapping, &facts),
            None => {
                if missing.record_document_type(code) {
                    warn!(document_type_id = code, "no mapping for document type");
                }
                Some(self.fallback(code, &facts))
            }
        }
    }

    fn fallback(&self, code: i64, facts: &DocumentFacts<'_>) -> Feature {
        let label = self
            .references
            .document_type(&code.to_string())
            .map_or_else(|| format!("DOCTYPE_{code}"), str::to_string);
        let mut feature = Feature::new()
            .with(OTHER_ID_TYPE, sanitize_identifier(&label))
            .with(OTHER_ID_NUMBER, facts.number);
        if let Some(country) = facts.country {
            feature.insert(OTHER_ID_COUNTRY, country);
        }
        feature
    }
}
