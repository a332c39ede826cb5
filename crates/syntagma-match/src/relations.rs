//! Dependency-relation normalization.
//!
//! Parsers emit surface labels that vary with voice and attachment: a passive
//! subject fills the same semantic slot as an active object, and a noun
//! attached through a preposition fills the same slot as a direct object.
//! Structural alignment compares *normalized relation classes*, produced here
//! and applied identically to template edges and document edges.
//!
//! The class set is empirical — it tracks whatever label inventory the
//! linguistic pipeline produces — so everything in this module is data:
//! string-keyed tables seeded with defaults and extensible at runtime,
//! never a closed enum.

use ahash::AHashMap;
use syntagma_graph::{Document, GraphError};

/// A derived compound edge: `governor -[governor_label]-> P -[object_label]->
/// object` collapses to `governor -[compound_class]-> object`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepositionRule {
    pub governor_label: String,
    pub object_label: String,
    pub compound_class: String,
}

/// Normalization and compatibility tables for relation classes.
#[derive(Debug, Clone)]
pub struct RelationRules {
    /// raw dependency label -> canonical class
    canonical: AHashMap<String, String>,
    /// required class -> additionally accepted classes
    compatible: AHashMap<String, Vec<String>>,
    prepositional: Vec<PrepositionRule>,
}

impl RelationRules {
    /// Empty tables: every label is its own class.
    pub fn empty() -> Self {
        Self {
            canonical: AHashMap::new(),
            compatible: AHashMap::new(),
            prepositional: Vec::new(),
        }
    }

    /// Default tables for the supported dependency label inventory.
    pub fn default_rules() -> Self {
        let mut rules = Self::empty();

        // Voice collapsing: passive subjects fill the object slot, passive
        // by-agents fill the subject slot (via the pobjb compound below).
        rules.add_mapping("nsubj", "subj");
        rules.add_mapping("csubj", "subj");
        rules.add_mapping("nsubjpass", "obj");
        rules.add_mapping("csubjpass", "obj");
        rules.add_mapping("dobj", "obj");
        rules.add_mapping("obj", "obj");
        rules.add_mapping("attr", "attr");
        // Adjectival and adverbial modification fill the same semantic slot
        // ("a strong belief" / "believes strongly").
        rules.add_mapping("acomp", "mod");
        rules.add_mapping("amod", "mod");
        rules.add_mapping("advmod", "mod");
        rules.add_mapping("nmod", "compound");
        rules.add_mapping("compound", "compound");

        // Prepositional compounds.
        rules.add_prepositional("prep", "pobj", "pobjp");
        rules.add_prepositional("agent", "pobj", "pobjb");

        // A template edge may match the prepositional variant of its slot.
        rules.add_compatibility("obj", "pobjp");
        rules.add_compatibility("subj", "pobjb");

        rules
    }

    /// Map a raw label onto its canonical class.
    pub fn add_mapping(&mut self, raw: impl Into<String>, class: impl Into<String>) {
        self.canonical.insert(raw.into(), class.into());
    }

    /// Accept `actual` wherever `required` is expected.
    pub fn add_compatibility(&mut self, required: impl Into<String>, actual: impl Into<String>) {
        self.compatible
            .entry(required.into())
            .or_default()
            .push(actual.into());
    }

    /// Register a derived-compound rule used by [`enrich_document`].
    ///
    /// [`enrich_document`]: RelationRules::enrich_document
    pub fn add_prepositional(
        &mut self,
        governor_label: impl Into<String>,
        object_label: impl Into<String>,
        compound_class: impl Into<String>,
    ) {
        self.prepositional.push(PrepositionRule {
            governor_label: governor_label.into(),
            object_label: object_label.into(),
            compound_class: compound_class.into(),
        });
    }

    /// Canonical class for a raw label. Unmapped labels are their own class.
    pub fn normalize(&self, raw: &str) -> String {
        self.canonical
            .get(raw)
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }

    /// True if an edge with normalized class `actual` satisfies a template
    /// edge requiring `required`.
    pub fn compatible(&self, required: &str, actual: &str) -> bool {
        if required == actual {
            return true;
        }
        self.compatible
            .get(required)
            .map(|accepted| accepted.iter().any(|a| a == actual))
            .unwrap_or(false)
    }

    /// True if the label governs a prepositional chain consumed by a
    /// compound rule (such tokens are skipped during template traversal).
    pub fn is_compound_governor(&self, label: &str) -> bool {
        self.prepositional.iter().any(|r| r.governor_label == label)
    }

    /// Compute the derived compound edges for a document.
    pub fn derive_compound_edges(&self, document: &Document) -> Vec<(usize, usize, String)> {
        let mut derived = Vec::new();
        for token in document.tokens() {
            for dep in &token.children {
                for rule in &self.prepositional {
                    if dep.label != rule.governor_label {
                        continue;
                    }
                    let Some(preposition) = document.token(dep.target) else {
                        continue;
                    };
                    for object in &preposition.children {
                        if object.label == rule.object_label {
                            derived.push((
                                token.index,
                                object.target,
                                rule.compound_class.clone(),
                            ));
                        }
                    }
                }
            }
        }
        derived
    }

    /// Install derived compound edges into a document. Idempotent: edges
    /// already present are skipped, so re-enriching a deserialized document
    /// changes nothing.
    pub fn enrich_document(&self, document: Document) -> Result<Document, GraphError> {
        let derived = self.derive_compound_edges(&document);
        document.with_additional_dependencies(derived)
    }
}

impl Default for RelationRules {
    fn default() -> Self {
        Self::default_rules()
    }
}
