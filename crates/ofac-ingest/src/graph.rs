//! Indices over the party/profile graph, keyed by graph identifiers.

use std::collections::BTreeMap;

use ofac_model::Element;

/// One outgoing profile relationship, as declared in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipDescriptor<'doc> {
    pub target: Option<&'doc str>,
    pub relation_type: Option<&'doc str>,
    pub quality: Option<&'doc str>,
    pub former: Option<&'doc str>,
}

impl RelationshipDescriptor<'_> {
    /// Target profile id, when present and non-empty.
    pub fn target(&self) -> Option<&str> {
        self.target.filter(|target| !target.is_empty())
    }

    /// True when the source marks the relationship as no longer current.
    pub fn is_former(&self) -> bool {
        self.former.is_some_and(|flag| {
            let flag = flag.trim();
            ["true", "1", "yes"]
                .iter()
                .any(|accepted| flag.eq_ignore_ascii_case(accepted))
        })
    }
}

/// Read-only indices over the parsed document.
#[derive(Debug, Default)]
pub struct ProfileGraph<'doc> {
    parties: Vec<&'doc Element>,
    stable_ids: BTreeMap<&'doc str, &'doc str>,
    party_by_profile: BTreeMap<&'doc str, &'doc Element>,
    relationships: BTreeMap<&'doc str, Vec<RelationshipDescriptor<'doc>>>,
    documents: BTreeMap<&'doc str, Vec<&'doc Element>>,
    sanctions_entries: BTreeMap<&'doc str, Vec<&'doc Element>>,
    locations: BTreeMap<&'doc str, &'doc Element>,
}

impl<'doc> ProfileGraph<'doc> {
    /// Every `DistinctParty` element, in document order.
    pub fn parties(&self) -> &[&'doc Element] {
        &self.parties
    }

    /// Stable identifier of the party owning `profile_id`.
    pub fn stable_id(&self, profile_id: &str) -> Option<&'doc str> {
        self.stable_ids.get(profile_id).copied()
    }

    pub fn party(&self, profile_id: &str) -> Option<&'doc Element> {
        self.party_by_profile.get(profile_id).copied()
    }

    pub fn relationships(&self, profile_id: &str) -> &[RelationshipDescriptor<'doc>] {
        self.relationships
            .get(profile_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn documents(&self, identity_id: &str) -> &[&'doc Element] {
        self.documents
            .get(identity_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn sanctions_entries(&self, profile_id: &str) -> &[&'doc Element] {
        self.sanctions_entries
            .get(profile_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn location(&self, location_id: &str) -> Option<&'doc Element> {
        self.locations.get(location_id).copied()
    }

    pub fn profile_count(&self) -> usize {
        self.stable_ids.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.values().map(Vec::len).sum()
    }

    pub fn document_count(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }

    pub fn sanctions_entry_count(&self) -> usize {
        self.sanctions_entries.values().map(Vec::len).sum()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }
}

/// Collects graph indices while the document is walked.
#[derive(Debug, Default)]
pub struct ProfileGraphBuilder<'doc> {
    graph: ProfileGraph<'doc>,
}

impl<'doc> ProfileGraphBuilder<'doc> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, element: &'doc Element) {
        match element.name() {
            "DistinctParty" => self.visit_party(element),
            "ProfileRelationship" => {
                let Some(source) = non_empty_attr(element, "From-ProfileID") else {
                    return;
                };
                self.graph
                    .relationships
                    .entry(source)
                    .or_default()
                    .push(RelationshipDescriptor {
                        target: element.attr("To-ProfileID"),
                        relation_type: element.attr("RelationTypeID"),
                        quality: element.attr("RelationQualityID"),
                        former: element.attr("Former"),
                    });
            }
            "IDRegDocument" => {
                if let Some(identity) = non_empty_attr(element, "IdentityID") {
                    self.graph
                        .documents
                        .entry(identity)
                        .or_default()
                        .push(element);
                }
            }
            "SanctionsEntry" => {
                if let Some(profile) = non_empty_attr(element, "ProfileID") {
                    self.graph
                        .sanctions_entries
                        .entry(profile)
                        .or_default()
                        .push(element);
                }
            }
            "Location" => {
                if let Some(id) = non_empty_attr(element, "ID") {
                    self.graph.locations.insert(id, element);
                }
            }
            _ => {}
        }
    }

    fn visit_party(&mut self, party: &'doc Element) {
        self.graph.parties.push(party);
        let Some(stable_id) = non_empty_attr(party, "FixedRef") else {
            return;
        };
        let Some(profile_id) = party
            .child("Profile")
            .and_then(|profile| non_empty_attr(profile, "ID"))
        else {
            return;
        };
        self.graph.stable_ids.insert(profile_id, stable_id);
        self.graph.party_by_profile.insert(profile_id, party);
    }

    pub fn finish(self) -> ProfileGraph<'doc> {
        self.graph
    }
}

fn non_empty_attr<'doc>(element: &'doc Element, key: &str) -> Option<&'doc str> {
    element.attr(key).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relationship(former: Option<&'static str>) -> RelationshipDescriptor<'static> {
        RelationshipDescriptor {
            target: Some("2"),
            relation_type: Some("15003"),
            quality: None,
            former,
        }
    }

    #[test]
    fn former_flag_accepts_common_truthy_spellings() {
        for flag in ["true", "TRUE", " yes ", "1"] {
            assert!(relationship(Some(flag)).is_former(), "{flag}");
        }
        for flag in ["false", "0", "", "no"] {
            assert!(!relationship(Some(flag)).is_former(), "{flag}");
        }
        assert!(!relationship(None).is_former());
    }
}
