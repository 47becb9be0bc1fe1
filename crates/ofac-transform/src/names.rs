//! Name features and display names.

use std::collections::HashMap;

use ofac_ingest::ProfileGraph;
use ofac_map::{name_part_attribute, name_type};
use ofac_model::attributes::{NAME_FULL, NAME_TYPE};
use ofac_model::{Element, Feature};

const PRIMARY_NAME_TYPE: &str = "PRIMARY";
const DEFAULT_NAME_TYPE: &str = "AKA";

pub(crate) fn is_flag_set(value: Option<&str>) -> bool {
    value.is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

fn is_primary(alias: &Element) -> bool {
    is_flag_set(alias.attr("Primary"))
}

/// `NAME_TYPE` for an alias: primary wins, then the alias type table.
pub fn alias_name_type(alias: &Element) -> &'static str {
    if is_primary(alias) {
        return PRIMARY_NAME_TYPE;
    }
    alias
        .attr_int("AliasTypeID")
        .and_then(name_type)
        .unwrap_or(DEFAULT_NAME_TYPE)
}

fn name_parts(documented_name: &Element) -> impl Iterator<Item = (&Element, &str)> {
    documented_name
        .children_named("DocumentedNamePart")
        .filter_map(|part| {
            part.child("NamePartValue")
                .and_then(Element::text)
                .map(|value| (part, value))
        })
}

/// One name feature for a documented name, or `None` when it has no parts.
pub fn documented_name_feature(documented_name: &Element, name_type: &str) -> Option<Feature> {
    let mut feature = Feature::new();
    let mut parts = Vec::new();
    for (part, value) in name_parts(documented_name) {
        parts.push(value);
        if let Some(attribute) = part
            .attr_int("NamePartTypeID")
            .and_then(name_part_attribute)
        {
            feature.insert_if_absent(attribute, value);
        }
    }
    if parts.is_empty() {
        return None;
    }
    feature.insert(NAME_FULL, parts.join(" "));
    feature.insert(NAME_TYPE, name_type);
    Some(feature)
}

/// Name features for every documented name of every alias under `party`.
pub fn name_features(party: &Element) -> Vec<Feature> {
    party
        .descendants_named("Alias")
        .flat_map(|alias| {
            let name_type = alias_name_type(alias);
            alias
                .children_named("DocumentedName")
                .filter_map(move |name| documented_name_feature(name, name_type))
        })
        .collect()
}

/// Full name of the alias's first documented name that has parts.
pub fn compose_alias_name(alias: &Element) -> Option<String> {
    alias.children_named("DocumentedName").find_map(|name| {
        let parts: Vec<&str> = name_parts(name).map(|(_, value)| value).collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    })
}

/// Best display name for a profile: its primary aliases are searched first,
/// then every alias when none is primary.
pub fn display_name(graph: &ProfileGraph<'_>, profile_id: &str) -> Option<String> {
    let profile = graph.party(profile_id)?.child("Profile")?;
    let aliases: Vec<&Element> = profile
        .children_named("Identity")
        .flat_map(|identity| identity.children_named("Alias"))
        .collect();
    let primary: Vec<&Element> = aliases
        .iter()
        .copied()
        .filter(|alias| is_primary(alias))
        .collect();
    let search = if primary.is_empty() { &aliases } else { &primary };
    search.iter().find_map(|alias| compose_alias_name(alias))
}

/// Run-scoped cache of display names, misses included.
#[derive(Debug, Default)]
pub struct DisplayNames {
    cache: HashMap<String, Option<String>>,
}

impl DisplayNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, graph: &ProfileGraph<'_>, profile_id: &str) -> Option<&str> {
        self.cache
            .entry(profile_id.to_string())
            .or_insert_with(|| display_name(graph, profile_id))
            .as_deref()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use ofac_ingest::index_document;

    use super::*;

    fn part(type_id: &str, value: &str) -> Element {
        Element::new("DocumentedNamePart")
            .with_attribute("NamePartTypeID", type_id)
            .with_child(Element::new("NamePartValue").with_text(value))
    }

    fn alias(primary: &str, alias_type: &str, parts: Vec<Element>) -> Element {
        let name = parts
            .into_iter()
            .fold(Element::new("DocumentedName"), Element::with_child);
        Element::new("Alias")
            .with_attribute("Primary", primary)
            .with_attribute("AliasTypeID", alias_type)
            .with_child(name)
    }

    #[test]
    fn name_feature_keeps_first_part_per_attribute() {
        let name = Element::new("DocumentedName")
            .with_child(part("1480", "Ali"))
            .with_child(part("1480", "Hassan"))
            .with_child(part("1481", "Tarek"))
            .with_child(part("9999", "Jr."))
            .with_child(part("1482", "  "));
        let feature = documented_name_feature(&name, "AKA").unwrap();
        let pairs: Vec<(&str, &str)> = feature.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("NAME_FIRST", "Ali"),
                ("NAME_LAST", "Tarek"),
                ("NAME_FULL", "Ali Hassan Tarek Jr."),
                ("NAME_TYPE", "AKA"),
            ]
        );
        assert!(documented_name_feature(&Element::new("DocumentedName"), "AKA").is_none());
    }

    #[test]
    fn name_types() {
        assert_eq!(alias_name_type(&alias("true", "1400", vec![])), "PRIMARY");
        assert_eq!(alias_name_type(&alias("false", "1401", vec![])), "FKA");
        assert_eq!(alias_name_type(&alias("false", "77", vec![])), "AKA");
        assert_eq!(alias_name_type(&Element::new("Alias")), "AKA");
    }

    #[test]
    fn name_features_cover_every_documented_name() {
        let party = Element::new("DistinctParty").with_child(
            Element::new("Profile").with_child(
                Element::new("Identity")
                    .with_child(alias("true", "1403", vec![part("1502", "ACME LTD")]))
                    .with_child(alias("false", "1402", vec![part("1502", "ACME HOLDINGS")])),
            ),
        );
        let features = name_features(&party);
        let names: Vec<(Option<&str>, Option<&str>)> = features
            .iter()
            .map(|feature| (feature.get("NAME_FULL"), feature.get("NAME_TYPE")))
            .collect();
        assert_eq!(
            names,
            vec![
                (Some("ACME LTD"), Some("PRIMARY")),
                (Some("ACME HOLDINGS"), Some("NKA")),
            ]
        );
        assert_eq!(compose_alias_name(&alias("false", "1400", vec![])), None);
    }

    fn party(fixed_ref: &str, profile_id: &str, aliases: Vec<Element>) -> Element {
        let identity = aliases
            .into_iter()
            .fold(Element::new("Identity"), Element::with_child);
        Element::new("DistinctParty")
            .with_attribute("FixedRef", fixed_ref)
            .with_child(
                Element::new("Profile")
                    .with_attribute("ID", profile_id)
                    .with_child(identity),
            )
    }

    fn parties() -> Element {
        Element::new("DistinctParties")
            .with_child(party(
                "200",
                "20",
                vec![
                    alias("false", "1400", vec![part("1502", "FIRST TRADING")]),
                    alias("false", "1401", vec![part("1502", "SECOND TRADING")]),
                ],
            ))
            .with_child(party(
                "300",
                "30",
                vec![
                    alias("false", "1401", vec![part("1502", "OLD SHIPPING")]),
                    alias("true", "1403", vec![part("1502", "NEW SHIPPING")]),
                ],
            ))
            .with_child(party("400", "40", vec![]))
    }

    #[test]
    fn display_name_prefers_primary_then_first_alias() {
        let root = parties();
        let index = index_document(&root);
        assert_eq!(
            display_name(&index.graph, "20").as_deref(),
            Some("FIRST TRADING")
        );
        assert_eq!(
            display_name(&index.graph, "30").as_deref(),
            Some("NEW SHIPPING")
        );
        assert_eq!(display_name(&index.graph, "40"), None);
        assert_eq!(display_name(&index.graph, "99"), None);
    }

    #[test]
    fn display_names_cache_hits_and_misses() {
        let root = parties();
        let index = index_document(&root);
        let mut names = DisplayNames::new();
        assert!(names.is_empty());

        assert_eq!(names.resolve(&index.graph, "30"), Some("NEW SHIPPING"));
        assert_eq!(names.resolve(&index.graph, "40"), None);
        assert_eq!(names.resolve(&index.graph, "99"), None);
        assert_eq!(names.len(), 3);

        assert_eq!(names.resolve(&index.graph, "40"), None);
        assert_eq!(names.resolve(&index.graph, "30"), Some("NEW SHIPPING"));
        assert_eq!(names.len(), 3);
    }
}
