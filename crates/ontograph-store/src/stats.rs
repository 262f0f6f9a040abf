//! Ontology statistics

use std::collections::BTreeMap;

use ontograph_domain::Taxonomy;

use crate::Ontology;

/// Resource and entry counts of an ontology
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyStats {
    /// Registered classes
    pub classes: usize,

    /// Registered properties
    pub properties: usize,

    /// Registered individuals
    pub individuals: usize,

    /// Registered literals
    pub literals: usize,

    /// Caller-asserted entries across every taxonomy
    pub asserted_entries: usize,

    /// Inferred entries across every taxonomy
    pub inferred_entries: usize,

    /// Entry count per relation name
    pub entries_by_relation: BTreeMap<&'static str, usize>,
}

impl OntologyStats {
    /// Collect statistics for an ontology
    pub fn collect(ontology: &Ontology) -> Self {
        let mut stats = Self {
            classes: ontology.class_model().class_count(),
            properties: ontology.property_model().property_count(),
            individuals: ontology.data().individual_count(),
            literals: ontology.data().literal_count(),
            ..Self::default()
        };

        let class_taxonomies = ontology.class_model().taxonomies();
        let property_taxonomies = ontology.property_model().taxonomies();
        let data_taxonomies = ontology.data().taxonomies();
        let all = class_taxonomies
            .iter()
            .chain(property_taxonomies.iter())
            .chain(data_taxonomies.iter());

        for (relation, taxonomy) in all {
            stats.record(relation.as_str(), taxonomy);
        }
        stats
    }

    fn record(&mut self, relation: &'static str, taxonomy: &Taxonomy) {
        self.asserted_entries += taxonomy.asserted_count();
        self.inferred_entries += taxonomy.inferred_count();
        *self.entries_by_relation.entry(relation).or_insert(0) += taxonomy.len();
    }

    /// Total entries across every taxonomy
    pub fn total_entries(&self) -> usize {
        self.asserted_entries + self.inferred_entries
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Ontology Statistics".to_string(),
            "===================".to_string(),
            format!("Classes: {}", self.classes),
            format!("Properties: {}", self.properties),
            format!("Individuals: {}", self.individuals),
            format!("Literals: {}", self.literals),
            String::new(),
            format!(
                "Entries: {} ({} asserted, {} inferred)",
                self.total_entries(),
                self.asserted_entries,
                self.inferred_entries
            ),
        ];

        for (relation, count) in self.entries_by_relation.iter().filter(|(_, count)| **count > 0) {
            lines.push(format!("  {}: {}", relation, count));
        }

        lines.join("\n")
    }
}
