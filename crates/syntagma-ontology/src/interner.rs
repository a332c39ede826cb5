use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Interned concept ID (4 bytes instead of 24+ for String).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ConceptId(u32);

impl ConceptId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Concept interner: maps normalized concept strings to compact IDs.
///
/// Lock-free for readers, so an ontology built once can be queried from many
/// matching workers concurrently.
pub struct ConceptInterner {
    str_to_id: DashMap<String, ConceptId>,
    id_to_str: DashMap<ConceptId, String>,
    next_id: AtomicU32,
}

impl ConceptInterner {
    pub fn new() -> Self {
        Self {
            str_to_id: DashMap::new(),
            id_to_str: DashMap::new(),
            next_id: AtomicU32::new(0),
        }
    }

    /// Intern a concept string, returning its ID.
    pub fn intern(&self, s: &str) -> ConceptId {
        if let Some(id) = self.str_to_id.get(s) {
            return *id;
        }

        let id = ConceptId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.str_to_id.insert(s.to_string(), id);
        self.id_to_str.insert(id, s.to_string());
        id
    }

    /// Look up an existing ID without inserting.
    pub fn get(&self, s: &str) -> Option<ConceptId> {
        self.str_to_id.get(s).map(|id| *id)
    }

    /// Look up the string for an ID.
    pub fn resolve(&self, id: ConceptId) -> Option<String> {
        self.id_to_str.get(&id).map(|s| s.clone())
    }

    pub fn len(&self) -> usize {
        self.next_id.load(Ordering::SeqCst) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConceptInterner {
    fn default() -> Self {
        Self::new()
    }
}
