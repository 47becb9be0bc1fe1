//! Sanctions export ingestion.
//!
//! Parses the XML export into an element tree, then walks it once to build
//! the read-only [`ReferenceTables`] and [`ProfileGraph`] every later stage
//! consults.

pub mod error;
pub mod graph;
pub mod reference;
pub mod xml;

use std::time::Instant;

use ofac_model::Element;
use tracing::info;

pub use error::{IngestError, Result};
pub use graph::{ProfileGraph, ProfileGraphBuilder, RelationshipDescriptor};
pub use reference::{ReferenceTableBuilder, ReferenceTables, Vocabulary};
pub use xml::{load_document, parse_reader, parse_str};

/// Everything the transform stage reads, built in one pass over the tree.
#[derive(Debug)]
pub struct SourceIndex<'doc> {
    pub references: ReferenceTables,
    pub graph: ProfileGraph<'doc>,
}

/// Walk the document once, feeding both index builders.
pub fn index_document(root: &Element) -> SourceIndex<'_> {
    let start = Instant::now();
    let mut references = ReferenceTableBuilder::new();
    let mut graph = ProfileGraphBuilder::new();
    for element in root.self_and_descendants() {
        references.visit(element);
        graph.visit(element);
    }
    let index = SourceIndex {
        references: references.finish(),
        graph: graph.finish(),
    };
    info!(
        parties = index.graph.parties().len(),
        profiles = index.graph.profile_count(),
        relationships = index.graph.relationship_count(),
        documents = index.graph.document_count(),
        sanctions_entries = index.graph.sanctions_entry_count(),
        locations = index.graph.location_count(),
        countries = index.references.len(Vocabulary::Country),
        feature_types = index.references.len(Vocabulary::FeatureType),
        document_types = index.references.len(Vocabulary::DocumentType),
        duration_ms = start.elapsed().as_millis(),
        "indexed source document"
    );
    index
}
