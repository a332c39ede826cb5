//! Ontology graph for semantic word matching.
//!
//! An ontology is a directed is-a graph plus undirected synonym links over
//! lemmas and multiword concepts. The matcher asks one question of it:
//! how are two words related, and how far apart are they?
//!
//! - synonym links cost 0 and are traversed freely in both directions,
//! - is-a links cost 1 and are traversed parent → child
//!   (child → parent as well when symmetric matching is enabled),
//! - distances are shortest-path, computed with an explicit bounded
//!   breadth-first worklist over declaration-ordered adjacency, so results
//!   are deterministic and traversal termination is obvious.
//!
//! The graph is built once (declarations or the triple loader) and then
//! shared read-only across any number of matching workers.

mod graph;
mod interner;
mod loader;

pub use graph::{Ontology, OntologyRelation, RelationKind};
pub use interner::{ConceptId, ConceptInterner};
pub use loader::{load_ontology_file, load_ontology_str};
