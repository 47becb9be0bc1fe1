//! Code-to-label lookups built from the document's vocabulary declarations.

use std::collections::BTreeMap;

use ofac_model::Element;

/// The vocabularies a sanctions export declares up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vocabulary {
    Country,
    FeatureType,
    DocumentType,
    RelationType,
    SanctionsType,
    DetailReference,
    List,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 7] = [
        Vocabulary::Country,
        Vocabulary::FeatureType,
        Vocabulary::DocumentType,
        Vocabulary::RelationType,
        Vocabulary::SanctionsType,
        Vocabulary::DetailReference,
        Vocabulary::List,
    ];

    /// Local name of the declaring element.
    pub fn element_name(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::FeatureType => "FeatureType",
            Self::DocumentType => "IDRegDocType",
            Self::RelationType => "RelationType",
            Self::SanctionsType => "SanctionsType",
            Self::DetailReference => "DetailReference",
            Self::List => "List",
        }
    }

    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|vocabulary| vocabulary.element_name() == name)
    }
}

/// Read-only `code -> label` tables, one per [`Vocabulary`].
///
/// Countries map to their ISO2 code; every other vocabulary maps to the
/// declaring element's trimmed text.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    tables: BTreeMap<Vocabulary, BTreeMap<String, String>>,
}

impl ReferenceTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry. A repeated code replaces the earlier label.
    #[must_use]
    pub fn with(
        mut self,
        vocabulary: Vocabulary,
        code: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.insert(vocabulary, code.into(), label.into());
        self
    }

    fn insert(&mut self, vocabulary: Vocabulary, code: String, label: String) {
        self.tables.entry(vocabulary).or_default().insert(code, label);
    }

    pub fn lookup(&self, vocabulary: Vocabulary, code: &str) -> Option<&str> {
        self.tables
            .get(&vocabulary)
            .and_then(|table| table.get(code))
            .map(String::as_str)
    }

    pub fn len(&self, vocabulary: Vocabulary) -> usize {
        self.tables.get(&vocabulary).map_or(0, BTreeMap::len)
    }

    pub fn country(&self, code: &str) -> Option<&str> {
        self.lookup(Vocabulary::Country, code)
    }

    pub fn feature_type(&self, code: &str) -> Option<&str> {
        self.lookup(Vocabulary::FeatureType, code)
    }

    pub fn document_type(&self, code: &str) -> Option<&str> {
        self.lookup(Vocabulary::DocumentType, code)
    }

    pub fn relation_type(&self, code: &str) -> Option<&str> {
        self.lookup(Vocabulary::RelationType, code)
    }

    pub fn sanctions_type(&self, code: &str) -> Option<&str> {
        self.lookup(Vocabulary::SanctionsType, code)
    }

    pub fn detail_reference(&self, code: &str) -> Option<&str> {
        self.lookup(Vocabulary::DetailReference, code)
    }

    pub fn list(&self, code: &str) -> Option<&str> {
        self.lookup(Vocabulary::List, code)
    }
}

/// Collects vocabulary declarations while the document is walked.
#[derive(Debug, Default)]
pub struct ReferenceTableBuilder {
    tables: ReferenceTables,
}

impl ReferenceTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, element: &Element) {
        let Some(vocabulary) = Vocabulary::from_element_name(element.name()) else {
            return;
        };
        let Some(code) = element.attr("ID").filter(|code| !code.is_empty()) else {
            return;
        };
        let label = match vocabulary {
            Vocabulary::Country => element
                .attr("ISO2")
                .map(str::trim)
                .filter(|iso2| !iso2.is_empty()),
            _ => element.text(),
        };
        if let Some(label) = label {
            self.tables
                .insert(vocabulary, code.to_string(), label.to_string());
        }
    }

    pub fn finish(self) -> ReferenceTables {
        self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_declarations_replace_earlier_ones() {
        let mut builder = ReferenceTableBuilder::new();
        builder.visit(&Element::new("FeatureType").with_attribute("ID", "8").with_text("Old"));
        builder.visit(
            &Element::new("FeatureType")
                .with_attribute("ID", "8")
                .with_text("  Birthdate "),
        );
        let tables = builder.finish();
        assert_eq!(tables.feature_type("8"), Some("Birthdate"));
        assert_eq!(tables.len(Vocabulary::FeatureType), 1);
    }

    #[test]
    fn declarations_without_code_or_label_are_ignored() {
        let mut builder = ReferenceTableBuilder::new();
        builder.visit(&Element::new("Country").with_attribute("ID", "11"));
        builder.visit(&Element::new("List").with_text("SDN List"));
        builder.visit(&Element::new("RelationType").with_attribute("ID", "1").with_text("  "));
        let tables = builder.finish();
        assert_eq!(tables.country("11"), None);
        assert_eq!(tables.len(Vocabulary::List), 0);
        assert_eq!(tables.relation_type("1"), None);
    }
}
