//! Feature occurrence mapping.
//!
//! A `Feature` element is reduced to a set of [`FeatureFacts`] (free text,
//! date, country, address) and the code's instructions pick from those
//! facts. When any dynamic attribute cannot be resolved the whole feature is
//! dropped. Unknown codes degrade to a generic `OTHER_ID_*` pair.

use ofac_ingest::SourceIndex;
use ofac_model::attributes::{OTHER_ID_NUMBER, OTHER_ID_TYPE};
use ofac_model::{Element, Feature};
use tracing::{debug, warn};

use crate::attributes::AttributeKind;
use crate::dates::{date_from_parts, normalize_date_string};
use crate::missing::MissingCodes;
use crate::sanitize::sanitize_identifier;
use crate::tables::{self, Instruction, MappingTarget};

/// A mapped feature and where it belongs in the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedFeature {
    pub target: MappingTarget,
    pub feature: Feature,
}

/// Values a feature element can supply to its mapping instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFacts {
    pub text: Option<String>,
    pub date: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
}

impl FeatureFacts {
    fn resolve(&self, kind: AttributeKind) -> Option<String> {
        match kind {
            AttributeKind::Date => self.date.clone(),
            AttributeKind::Country => self.country.clone(),
            AttributeKind::Email => self.text.as_deref().map(str::to_lowercase),
            AttributeKind::Address => self.address.clone(),
            AttributeKind::Text => self.text.clone(),
        }
    }
}

/// Apply `instructions` to `facts`.
///
/// Returns `None` when a dynamic attribute has no value, so callers never see
/// a partial feature.
pub fn build_attributes(instructions: &[Instruction], facts: &FeatureFacts) -> Option<Feature> {
    let mut feature = Feature::new();
    for instruction in instructions {
        let value = match instruction.constant {
            Some(constant) => constant.to_string(),
            None => facts.resolve(AttributeKind::of(instruction.attribute))?,
        };
        feature.insert(instruction.attribute, value);
    }
    (!feature.is_empty()).then_some(feature)
}

/// Reliability score of the feature's first version.
pub fn feature_reliability(element: &Element) -> Option<i64> {
    element.child("FeatureVersion")?.attr_int("ReliabilityID")
}

pub struct FeatureMapper<'a> {
    index: &'a SourceIndex<'a>,
}

impl<'a> FeatureMapper<'a> {
    pub fn new(index: &'a SourceIndex<'a>) -> Self {
        Self { index }
    }

    /// Map one feature element with type `code`.
    pub fn map(
        &self,
        code: i64,
        element: &Element,
        missing: &mut MissingCodes,
    ) -> Option<MappedFeature> {
        let Some(mapping) = tables::feature_mapping(code) else {
            let fallback = self.fallback(code, element);
            if fallback.is_none() && missing.record_feature_type(code) {
                warn!(feature_type_id = code, "no mapping for feature type");
            }
            return fallback.map(|feature| MappedFeature {
                target: MappingTarget::Feature,
                feature,
            });
        };
        let facts = self.facts(element);
        match build_attributes(mapping.instructions, &facts) {
            Some(feature) => Some(MappedFeature {
                target: mapping.target,
                feature,
            }),
            None => {
                debug!(
                    feature_type_id = code,
                    label = mapping.label,
                    "dropped feature with unresolved attribute"
                );
                None
            }
        }
    }

    /// Generic identifier feature for a code without a mapping.
    pub fn fallback(&self, code: i64, element: &Element) -> Option<Feature> {
        let text = self.text(element)?;
        let label = self
            .index
            .references
            .feature_type(&code.to_string())
            .map_or_else(|| format!("FEATURE_{code}"), str::to_string);
        Some(
            Feature::new()
                .with(OTHER_ID_TYPE, sanitize_identifier(&label))
                .with(OTHER_ID_NUMBER, text),
        )
    }

    /// Gather everything the instructions may ask for.
    pub fn facts(&self, element: &Element) -> FeatureFacts {
        let text = self.text(element);
        let date = self.date(element, text.as_deref());
        let mut country = self.country(element).map(str::to_string);
        let address = self.address(element, text.as_deref()).map(|address| {
            if country.is_none() {
                country = address.country.map(str::to_string);
            }
            address.full
        });
        FeatureFacts {
            text,
            date,
            country,
            address,
        }
    }

    /// First non-empty version detail, as text or as a detail reference.
    pub fn text(&self, element: &Element) -> Option<String> {
        let mut details = element.find_all("FeatureVersion/VersionDetail");
        if details.is_empty() {
            details.extend(element.child("VersionDetail"));
        }
        details.into_iter().find_map(|detail| {
            detail.text().map(str::to_string).or_else(|| {
                detail
                    .attr("DetailReferenceID")
                    .filter(|id| !id.is_empty())
                    .and_then(|id| self.index.references.detail_reference(id))
                    .map(str::to_string)
            })
        })
    }

    fn date(&self, element: &Element, text: Option<&str>) -> Option<String> {
        element
            .find("FeatureVersion/DatePart")
            .and_then(date_from_parts)
            .or_else(|| {
                element
                    .find("FeatureVersion/DatePeriod/Start/From")
                    .and_then(date_from_parts)
            })
            .or_else(|| text.and_then(normalize_date_string))
    }

    /// First `CountryID` on the element or below it that resolves.
    pub fn country(&self, element: &Element) -> Option<&'a str> {
        let index: &'a SourceIndex<'a> = self.index;
        element
            .self_and_descendants()
            .filter_map(|candidate| candidate.attr("CountryID"))
            .find_map(|id| index.references.country(id))
    }

    fn address(&self, element: &Element, text: Option<&str>) -> Option<Address<'a>> {
        let mut components: Vec<&str> = Vec::new();
        for part in element.find_all("FeatureVersion/LocationPart") {
            push_distinct(&mut components, location_part_value(part));
        }
        for part in element.children_named("LocationPart") {
            push_distinct(&mut components, location_part_value(part));
        }

        let mut country = self.country(element);
        let location = element
            .find("FeatureVersion/VersionLocation")
            .and_then(|reference| reference.attr("LocationID"))
            .filter(|id| !id.is_empty())
            .and_then(|id| self.index.graph.location(id));
        if let Some(location) = location {
            if country.is_none() {
                country = self.country(location);
            }
            for part in location.children_named("LocationPart") {
                push_distinct(&mut components, location_part_value(part));
            }
        }

        if components.is_empty() {
            push_distinct(&mut components, text);
        }
        if components.is_empty() {
            return None;
        }
        Some(Address {
            full: components.join(", "),
            country,
        })
    }
}

struct Address<'a> {
    full: String,
    country: Option<&'a str>,
}

fn push_distinct<'v>(components: &mut Vec<&'v str>, value: Option<&'v str>) {
    if let Some(value) = value
        && !components.contains(&value)
    {
        components.push(value);
    }
}

fn location_part_value(part: &Element) -> Option<&str> {
    part.find("LocationPartValue/Value")
        .or_else(|| part.child("LocationPartValue"))
        .and_then(Element::text)
}

#[cfg(test)]
mod tests {
    use ofac_ingest::{ProfileGraph, ReferenceTables, Vocabulary};

    use super::*;
    use crate::tables::{constant, dynamic};

    fn index(references: ReferenceTables) -> SourceIndex<'static> {
        SourceIndex {
            references,
            graph: ProfileGraph::default(),
        }
    }

    fn detail(text: &str) -> Element {
        Element::new("FeatureVersion").with_child(Element::new("VersionDetail").with_text(text))
    }

    #[test]
    fn constants_are_set_even_without_facts() {
        let instructions = [constant("OTHER_ID_TYPE", "MMSI"), dynamic("OTHER_ID_NUMBER")];
        let facts = FeatureFacts {
            text: Some("273".to_string()),
            ..FeatureFacts::default()
        };
        let feature = build_attributes(&instructions, &facts).unwrap();
        assert_eq!(feature.get("OTHER_ID_TYPE"), Some("MMSI"));
        assert_eq!(feature.get("OTHER_ID_NUMBER"), Some("273"));
        assert!(build_attributes(&instructions, &FeatureFacts::default()).is_none());
    }

    #[test]
    fn email_is_lowercased() {
        let facts = FeatureFacts {
            text: Some("Info@Example.COM".to_string()),
            ..FeatureFacts::default()
        };
        let feature = build_attributes(&[dynamic("EMAIL_ADDRESS")], &facts).unwrap();
        assert_eq!(feature.get("EMAIL_ADDRESS"), Some("info@example.com"));
    }

    #[test]
    fn text_falls_back_to_detail_reference() {
        let index = index(ReferenceTables::new().with(Vocabulary::DetailReference, "1432", "Male"));
        let mapper = FeatureMapper::new(&index);
        let feature = Element::new("Feature").with_child(
            Element::new("FeatureVersion").with_child(
                Element::new("VersionDetail").with_attribute("DetailReferenceID", "1432"),
            ),
        );
        assert_eq!(mapper.text(&feature).as_deref(), Some("Male"));
    }

    #[test]
    fn date_prefers_structured_parts() {
        let index = index(ReferenceTables::new());
        let mapper = FeatureMapper::new(&index);
        let feature = Element::new("Feature").with_child(
            detail("01 Jan 1960").with_child(
                Element::new("DatePeriod").with_child(
                    Element::new("Start").with_child(
                        Element::new("From")
                            .with_child(Element::new("Year").with_text("1962"))
                            .with_child(Element::new("Month").with_text("7")),
                    ),
                ),
            ),
        );
        assert_eq!(mapper.facts(&feature).date.as_deref(), Some("1962-07"));

        let text_only = Element::new("Feature").with_child(detail("01 Jan 1960"));
        assert_eq!(mapper.facts(&text_only).date.as_deref(), Some("1960-01-01"));
    }

    #[test]
    fn country_searches_descendants() {
        let index = index(ReferenceTables::new().with(Vocabulary::Country, "11", "US"));
        let mapper = FeatureMapper::new(&index);
        let feature = Element::new("Feature").with_child(
            Element::new("FeatureVersion")
                .with_child(Element::new("VersionLocation").with_attribute("CountryID", "99"))
                .with_child(Element::new("Country").with_attribute("CountryID", "11")),
        );
        assert_eq!(mapper.country(&feature), Some("US"));
    }

    #[test]
    fn address_joins_distinct_parts() {
        let index = index(ReferenceTables::new());
        let mapper = FeatureMapper::new(&index);
        let part = |value: &str| {
            Element::new("LocationPart").with_child(
                Element::new("LocationPartValue").with_child(Element::new("Value").with_text(value)),
            )
        };
        let feature = Element::new("Feature")
            .with_child(
                Element::new("FeatureVersion")
                    .with_child(part("Calle 5"))
                    .with_child(part("Havana")),
            )
            .with_child(part("Havana"))
            .with_child(Element::new("LocationPart").with_child(
                Element::new("LocationPartValue").with_text("Cuba"),
            ));
        assert_eq!(
            mapper.facts(&feature).address.as_deref(),
            Some("Calle 5, Havana, Cuba")
        );
    }
}
