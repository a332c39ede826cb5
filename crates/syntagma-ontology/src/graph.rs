use std::collections::VecDeque;

use ahash::AHashMap;
use roaring::RoaringBitmap;
use serde::{Deserialize, Serialize};

use crate::interner::{ConceptId, ConceptInterner};

// ============================================================================
// Relations
// ============================================================================

/// How two concepts are related in the ontology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    /// Identical concept or linked through synonym edges only.
    Synonym,
    /// The second concept is a descendant of the first.
    Hyponym,
    /// The second concept is an ancestor of the first.
    Hypernym,
}

/// Result of a relation lookup.
///
/// `signed_distance` is the shortest-path is-a distance: 0 for synonyms,
/// positive toward descendants, negative toward ancestors. Synonym edges do
/// not contribute to the distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyRelation {
    pub kind: RelationKind,
    pub signed_distance: i32,
}

// ============================================================================
// Ontology graph
// ============================================================================

/// Directed is-a / undirected synonym graph over lemmas and multiword
/// concepts.
///
/// Adjacency lists keep declaration order, so traversal visits edges in the
/// order they were declared and results are reproducible. Built once through
/// the `declare_*` methods (or the triple loader), then shared read-only.
pub struct Ontology {
    interner: ConceptInterner,
    /// parent -> children, declaration order
    hyponyms: AHashMap<ConceptId, Vec<ConceptId>>,
    /// child -> parents, declaration order
    hypernyms: AHashMap<ConceptId, Vec<ConceptId>>,
    /// undirected synonym adjacency, declaration order
    synonyms: AHashMap<ConceptId, Vec<ConceptId>>,
    /// longest declared concept, in whitespace-separated words
    max_concept_words: usize,
    symmetric: bool,
}

impl Ontology {
    pub fn new(symmetric: bool) -> Self {
        Self {
            interner: ConceptInterner::new(),
            hyponyms: AHashMap::new(),
            hypernyms: AHashMap::new(),
            synonyms: AHashMap::new(),
            max_concept_words: 1,
            symmetric,
        }
    }

    /// Whether is-a edges are also traversed against their direction.
    pub fn symmetric(&self) -> bool {
        self.symmetric
    }

    /// Number of distinct concepts declared.
    pub fn concept_count(&self) -> usize {
        self.interner.len()
    }

    /// True if the (normalized) text is a declared concept.
    pub fn is_concept(&self, text: &str) -> bool {
        self.interner.get(&normalize(text)).is_some()
    }

    /// True if the (normalized) text is a declared multiword concept.
    pub fn is_multiword_concept(&self, text: &str) -> bool {
        let normalized = normalize(text);
        normalized.contains(' ') && self.interner.get(&normalized).is_some()
    }

    /// Longest declared concept, in words. Bounds the window size when
    /// scanning a document for multiword concepts.
    pub fn max_concept_words(&self) -> usize {
        self.max_concept_words
    }

    // ------------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------------

    /// Declare a concept with no edges yet. Useful for classes that only
    /// ever appear as search-phrase words.
    pub fn declare_concept(&mut self, text: &str) {
        self.intern_concept(text);
    }

    /// Declare `child` as a more specific concept than `parent`.
    pub fn declare_hyponym(&mut self, parent: &str, child: &str) {
        let parent_id = self.intern_concept(parent);
        let child_id = self.intern_concept(child);
        push_unique(self.hyponyms.entry(parent_id).or_default(), child_id);
        push_unique(self.hypernyms.entry(child_id).or_default(), parent_id);
    }

    /// Declare two concepts as synonyms (undirected, distance 0).
    pub fn declare_synonym(&mut self, a: &str, b: &str) {
        let a_id = self.intern_concept(a);
        let b_id = self.intern_concept(b);
        if a_id == b_id {
            return;
        }
        push_unique(self.synonyms.entry(a_id).or_default(), b_id);
        push_unique(self.synonyms.entry(b_id).or_default(), a_id);
    }

    /// Declare a named individual of a class. Individuals participate in
    /// traversal as ordinary leaf hyponyms.
    pub fn declare_individual(&mut self, class: &str, name: &str) {
        tracing::debug!(class, name, "declaring ontology individual");
        self.declare_hyponym(class, name);
    }

    fn intern_concept(&mut self, text: &str) -> ConceptId {
        let normalized = normalize(text);
        let words = normalized.split(' ').count();
        if words > self.max_concept_words {
            self.max_concept_words = words;
        }
        self.interner.intern(&normalized)
    }

    // ------------------------------------------------------------------------
    // Relation lookup
    // ------------------------------------------------------------------------

    /// Relate two words through the graph, bounded at `max_depth` is-a steps.
    ///
    /// Returns `None` when either word is not a declared concept or no path
    /// exists within the bound. Descendant paths are preferred over ancestor
    /// paths when both exist; ancestor paths are only considered in symmetric
    /// mode. A path never changes direction: an up-then-down walk (two
    /// concepts sharing an ancestor) is not a relation.
    pub fn relate(&self, a: &str, b: &str, max_depth: u32) -> Option<OntologyRelation> {
        let origin = self.interner.get(&normalize(a))?;
        let target = self.interner.get(&normalize(b))?;

        let mut start = RoaringBitmap::new();
        start.insert(origin.raw());
        self.close_under_synonyms(&mut start);

        if start.contains(target.raw()) {
            return Some(OntologyRelation {
                kind: RelationKind::Synonym,
                signed_distance: 0,
            });
        }

        if let Some(depth) = self.directed_distance(&start, target, &self.hyponyms, max_depth) {
            return Some(OntologyRelation {
                kind: RelationKind::Hyponym,
                signed_distance: depth as i32,
            });
        }

        if self.symmetric {
            if let Some(depth) = self.directed_distance(&start, target, &self.hypernyms, max_depth)
            {
                return Some(OntologyRelation {
                    kind: RelationKind::Hypernym,
                    signed_distance: -(depth as i32),
                });
            }
        }

        None
    }

    /// Layered BFS: one layer per is-a step, each layer closed under synonym
    /// edges before the target test, so synonyms never add to the distance.
    fn directed_distance(
        &self,
        start: &RoaringBitmap,
        target: ConceptId,
        adjacency: &AHashMap<ConceptId, Vec<ConceptId>>,
        max_depth: u32,
    ) -> Option<u32> {
        let mut visited = start.clone();
        let mut frontier: Vec<u32> = start.iter().collect();

        for depth in 1..=max_depth {
            let mut next = RoaringBitmap::new();
            for raw in &frontier {
                let Some(neighbours) = adjacency.get(&ConceptId::new(*raw)) else {
                    continue;
                };
                for neighbour in neighbours {
                    if !visited.contains(neighbour.raw()) {
                        visited.insert(neighbour.raw());
                        next.insert(neighbour.raw());
                    }
                }
            }

            // Close the layer under synonym edges; a revisit via a longer
            // path can never shorten an already-assigned distance.
            let mut queue: VecDeque<u32> = next.iter().collect();
            while let Some(raw) = queue.pop_front() {
                let Some(syns) = self.synonyms.get(&ConceptId::new(raw)) else {
                    continue;
                };
                for syn in syns {
                    if !visited.contains(syn.raw()) {
                        visited.insert(syn.raw());
                        next.insert(syn.raw());
                        queue.push_back(syn.raw());
                    }
                }
            }

            if next.contains(target.raw()) {
                return Some(depth);
            }
            if next.is_empty() {
                return None;
            }
            frontier = next.iter().collect();
        }

        None
    }

    fn close_under_synonyms(&self, set: &mut RoaringBitmap) {
        let mut queue: VecDeque<u32> = set.iter().collect();
        while let Some(raw) = queue.pop_front() {
            let Some(syns) = self.synonyms.get(&ConceptId::new(raw)) else {
                continue;
            };
            for syn in syns {
                if !set.contains(syn.raw()) {
                    set.insert(syn.raw());
                    queue.push_back(syn.raw());
                }
            }
        }
    }
}

/// Concept keys are case-insensitive with collapsed whitespace.
pub(crate) fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn push_unique(list: &mut Vec<ConceptId>, id: ConceptId) {
    if !list.contains(&id) {
        list.push(id);
    }
}
