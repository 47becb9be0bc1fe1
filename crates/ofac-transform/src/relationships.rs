//! Relationship pointers, roles and remarks.

use ofac_ingest::{ReferenceTables, RelationshipDescriptor, SourceIndex};
use ofac_map::{relationship_role, sanitize_identifier};
use ofac_model::Feature;
use ofac_model::attributes::{REL_POINTER_DOMAIN, REL_POINTER_KEY, REL_POINTER_ROLE};
use tracing::trace;

use crate::names::DisplayNames;

const FORMER_PREFIX: &str = "FORMER_";
const FORMER_ROLE: &str = "FORMER";
const REMARK_LABEL: &str = "Linked To";
const REMARK_SEPARATOR: &str = "; ";

/// Role for a relation type code: the well-known table, then the sanitized
/// source label, then `RELATION_<code>`. `None` when the code is not numeric.
pub fn base_role(relation_type: &str, references: &ReferenceTables) -> Option<String> {
    let code: i64 = relation_type.trim().parse().ok()?;
    if let Some(role) = relationship_role(code) {
        return Some(role.to_string());
    }
    let label = references
        .relation_type(relation_type)
        .map_or_else(|| format!("RELATION_{code}"), str::to_string);
    Some(sanitize_identifier(&label))
}

/// Mark a role as former: `FORMER_<role>`, or bare `FORMER` without a role.
pub fn former_role(role: Option<String>) -> String {
    match role {
        Some(role) if role.starts_with(FORMER_PREFIX) => role,
        Some(role) => format!("{FORMER_PREFIX}{role}"),
        None => FORMER_ROLE.to_string(),
    }
}

pub fn resolve_role(
    descriptor: &RelationshipDescriptor<'_>,
    references: &ReferenceTables,
) -> Option<String> {
    let role = descriptor
        .relation_type
        .and_then(|relation_type| base_role(relation_type, references));
    if descriptor.is_former() {
        Some(former_role(role))
    } else {
        role
    }
}

/// Turns a profile's outgoing edges into pointer features and remarks.
pub struct RelationshipResolver<'a, 'doc> {
    index: &'a SourceIndex<'doc>,
    data_source: &'a str,
}

impl<'a, 'doc> RelationshipResolver<'a, 'doc> {
    pub fn new(index: &'a SourceIndex<'doc>, data_source: &'a str) -> Self {
        Self { index, data_source }
    }

    /// One pointer feature per edge whose target has a stable identifier.
    pub fn pointers(&self, profile_id: &str) -> Vec<Feature> {
        let mut pointers = Vec::new();
        for descriptor in self.index.graph.relationships(profile_id) {
            let Some(target) = descriptor.target() else {
                continue;
            };
            let Some(key) = self.index.graph.stable_id(target) else {
                trace!(profile_id, target, "relationship target has no stable id");
                continue;
            };
            let mut pointer = Feature::new()
                .with(REL_POINTER_DOMAIN, self.data_source)
                .with(REL_POINTER_KEY, key);
            if let Some(role) = resolve_role(descriptor, &self.index.references) {
                pointer.insert(REL_POINTER_ROLE, role);
            }
            pointers.push(pointer);
        }
        pointers
    }

    /// `Linked To: <name>` for every edge, joined into one string.
    pub fn remarks(&self, profile_id: &str, names: &mut DisplayNames) -> Option<String> {
        let graph = &self.index.graph;
        let remarks: Vec<String> = graph
            .relationships(profile_id)
            .iter()
            .filter_map(RelationshipDescriptor::target)
            .map(|target| {
                let name = names
                    .resolve(graph, target)
                    .or_else(|| graph.stable_id(target))
                    .unwrap_or(target);
                format!("{REMARK_LABEL}: {name}")
            })
            .collect();
        (!remarks.is_empty()).then(|| remarks.join(REMARK_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use ofac_ingest::Vocabulary;

    use super::*;

    fn descriptor(
        relation_type: Option<&'static str>,
        former: Option<&'static str>,
    ) -> RelationshipDescriptor<'static> {
        RelationshipDescriptor {
            target: Some("2"),
            relation_type,
            quality: Some("1"),
            former,
        }
    }

    fn references() -> ReferenceTables {
        ReferenceTables::new().with(Vocabulary::RelationType, "1600", "Playing a Role in")
    }

    #[test]
    fn roles_prefer_the_fixed_table() {
        let references = references();
        assert_eq!(base_role("15003", &references).as_deref(), Some("CONTROLLED_BY"));
        assert_eq!(base_role("1600", &references).as_deref(), Some("PLAYING_A_ROLE_IN"));
        assert_eq!(base_role("42", &references).as_deref(), Some("RELATION_42"));
        assert_eq!(base_role("abc", &references), None);
    }

    #[test]
    fn former_edges_are_always_prefixed() {
        let references = references();
        let cases = [
            (Some("15003"), "FORMER_CONTROLLED_BY"),
            (Some("1600"), "FORMER_PLAYING_A_ROLE_IN"),
            (Some("42"), "FORMER_RELATION_42"),
            (Some("not-a-code"), "FORMER"),
            (None, "FORMER"),
        ];
        for (relation_type, expected) in cases {
            let role = resolve_role(&descriptor(relation_type, Some("true")), &references);
            assert_eq!(role.as_deref(), Some(expected), "{relation_type:?}");
        }
    }

    #[test]
    fn current_edges_keep_the_base_role() {
        let references = references();
        assert_eq!(
            resolve_role(&descriptor(Some("1555"), Some("false")), &references).as_deref(),
            Some("ASSOCIATE_OF")
        );
        assert_eq!(resolve_role(&descriptor(None, None), &references), None);
    }

    #[test]
    fn former_prefix_is_not_doubled() {
        assert_eq!(former_role(Some("FORMER_AGENT_OF".to_string())), "FORMER_AGENT_OF");
    }
}
