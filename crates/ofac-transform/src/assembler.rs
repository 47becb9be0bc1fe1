//! Per-party record assembly.
//!
//! Order of features in a record: record type, names, mapped features,
//! identity documents, relationship anchor, relationship pointers. Payload
//! feature mappings write first, then the sanctions summary, then the
//! party-level scalars; every payload key keeps its first value.

use ofac_ingest::SourceIndex;
use ofac_map::{
    DocumentMapper, FeatureMapper, MappingTarget, MissingCodes, feature_reliability, record_type,
};
use ofac_model::attributes::{RECORD_TYPE, REL_ANCHOR_DOMAIN, REL_ANCHOR_KEY};
use ofac_model::{Element, Feature, Record, RecordBuilder};
use tracing::debug;

use crate::names::{DisplayNames, is_flag_set, name_features};
use crate::options::TransformOptions;
use crate::payload::{PartyScalars, SanctionsSummary};
use crate::relationships::RelationshipResolver;

/// Assembles records for the parties of one indexed document.
///
/// Holds the run-scoped state shared across parties: the warn-once record of
/// unmapped codes and the display name cache.
pub struct RecordAssembler<'a, 'doc> {
    index: &'a SourceIndex<'doc>,
    options: &'a TransformOptions,
    missing: MissingCodes,
    names: DisplayNames,
}

impl<'a, 'doc> RecordAssembler<'a, 'doc> {
    pub fn new(index: &'a SourceIndex<'doc>, options: &'a TransformOptions) -> Self {
        Self {
            index,
            options,
            missing: MissingCodes::new(),
            names: DisplayNames::new(),
        }
    }

    pub fn missing(&self) -> &MissingCodes {
        &self.missing
    }

    /// Build the record for `party`, or `None` when it has no stable
    /// identifier or no profile.
    pub fn assemble(&mut self, party: &Element) -> Option<Record> {
        let Some(stable_id) = party.attr("FixedRef").filter(|id| !id.is_empty()) else {
            debug!("skipped party without a stable identifier");
            return None;
        };
        let Some(profile) = party.child("Profile") else {
            debug!(stable_id, "skipped party without a profile");
            return None;
        };

        let options = self.options;
        let data_source = options.data_source.as_str();
        let mut builder = RecordBuilder::new(data_source, stable_id);

        if let Some(record_type) = profile.attr_int("PartySubTypeID").and_then(record_type) {
            builder.push_feature(Feature::new().with(RECORD_TYPE, record_type));
        }
        for name in name_features(party) {
            builder.push_feature(name);
        }
        let max_reliability = self.map_features(party, &mut builder);
        self.map_documents(party, &mut builder);
        builder.push_feature(
            Feature::new()
                .with(REL_ANCHOR_DOMAIN, data_source)
                .with(REL_ANCHOR_KEY, stable_id),
        );

        let profile_id = profile.attr("ID").filter(|id| !id.is_empty());
        let resolver = RelationshipResolver::new(self.index, data_source);
        let mut remarks = None;
        if let Some(profile_id) = profile_id {
            for pointer in resolver.pointers(profile_id) {
                builder.push_feature(pointer);
            }
            remarks = resolver.remarks(profile_id, &mut self.names);
        }

        let entries = profile_id
            .map(|id| self.index.graph.sanctions_entries(id))
            .unwrap_or_default();
        SanctionsSummary::collect(entries, &self.index.references).apply(&mut builder);
        PartyScalars {
            is_primary: profile
                .attr("Primary")
                .filter(|flag| !flag.is_empty())
                .map(|flag| is_flag_set(Some(flag))),
            max_reliability,
            remarks,
        }
        .apply(&mut builder);

        Some(builder.build())
    }

    /// Map every typed feature under the party; returns the highest
    /// reliability seen.
    fn map_features(&mut self, party: &Element, builder: &mut RecordBuilder) -> Option<i64> {
        let index = self.index;
        let mapper = FeatureMapper::new(index);
        let mut max_reliability: Option<i64> = None;
        for element in party.descendants_named("Feature") {
            let Some(code) = element.attr_int("FeatureTypeID") else {
                continue;
            };
            if let Some(reliability) = feature_reliability(element) {
                max_reliability = max_reliability.max(Some(reliability));
            }
            let Some(mapped) = mapper.map(code, element, &mut self.missing) else {
                continue;
            };
            match mapped.target {
                MappingTarget::Feature => builder.push_feature(mapped.feature),
                MappingTarget::Payload => {
                    for (key, value) in mapped.feature.iter() {
                        builder.set_if_absent(key, value);
                    }
                }
            }
        }
        max_reliability
    }

    fn map_documents(&mut self, party: &Element, builder: &mut RecordBuilder) {
        let index = self.index;
        let mapper = DocumentMapper::new(&index.references);
        for identity in party.descendants_named("Identity") {
            let Some(identity_id) = identity.attr("ID").filter(|id| !id.is_empty()) else {
                continue;
            };
            for document in index.graph.documents(identity_id) {
                if let Some(feature) = mapper.map(document, &mut self.missing) {
                    builder.push_feature(feature);
                }
            }
        }
    }
}
