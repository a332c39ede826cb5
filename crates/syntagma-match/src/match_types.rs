//! Match records and the word-equivalence cascade vocabulary.
//!
//! The six ways a document word can satisfy a search-phrase word form a
//! closed tagged union. Each variant owns its explanation wording; the
//! matcher picks variants in the fixed cascade order, so the priority
//! direct → entity → ontology → embedding → derivation → entity-embedding
//! is enforced by construction.

use serde::{Deserialize, Serialize};

/// How a document word satisfied a search-phrase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Direct,
    Entity,
    Ontology,
    Embedding,
    Derivation,
    EntityEmbedding,
}

/// Variant-specific data feeding the explanation text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchDetail {
    /// direct / derivation: nothing beyond the word itself.
    None,
    /// entity: nothing (the placeholder is the search-phrase word).
    Placeholder,
    /// ontology: signed is-a distance.
    Distance(i32),
    /// embedding / entity-embedding: similarity in [0, 1].
    Similarity(f32),
}

impl MatchType {
    /// Deterministic explanation text for this match type.
    ///
    /// `search_phrase_word` is reported uppercased, the way a reader sees the
    /// phrase word in every template: "Matches CAT directly."
    pub fn explanation(self, search_phrase_word: &str, detail: MatchDetail) -> String {
        let word = search_phrase_word.to_uppercase();
        match (self, detail) {
            (MatchType::Direct, _) => format!("Matches {word} directly."),
            (MatchType::Entity, _) => format!("Has an entity label matching {word}."),
            (MatchType::Ontology, MatchDetail::Distance(distance)) => {
                format!(
                    "Is {} of {word} in the ontology.",
                    distance_phrase(distance)
                )
            }
            (MatchType::Ontology, _) => format!("Is related to {word} in the ontology."),
            (MatchType::Embedding, MatchDetail::Similarity(similarity)) => {
                format!(
                    "Has a word embedding that is {}% similar to {word}.",
                    percent(similarity)
                )
            }
            (MatchType::Derivation, _) => format!("Has a common stem with {word}."),
            (MatchType::EntityEmbedding, MatchDetail::Similarity(similarity)) => {
                format!(
                    "Has an entity label that is {}% similar to the word embedding \
                     corresponding to {word}.",
                    percent(similarity)
                )
            }
            (MatchType::Embedding | MatchType::EntityEmbedding, _) => {
                format!("Has a word embedding related to {word}.")
            }
        }
    }
}

/// Fixed depth-to-wording mapping; every depth beyond three keeps the same
/// collapsed label.
fn distance_phrase(distance: i32) -> &'static str {
    match distance {
        0 => "a synonym",
        1 => "a child",
        2 => "a grandchild",
        3 => "a great-grandchild",
        d if d >= 4 => "a descendant",
        -1 => "a parent",
        -2 => "a grandparent",
        -3 => "a great-grandparent",
        _ => "an ancestor",
    }
}

/// Similarity rounded to the nearest whole percent.
fn percent(similarity: f32) -> u32 {
    (similarity * 100.0).round() as u32
}

// ============================================================================
// Match records
// ============================================================================

/// One aligned word pair inside a match. Pure output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    pub match_type: MatchType,
    pub search_phrase_word: String,
    pub document_word: String,
    pub search_phrase_token_index: usize,
    pub document_token_index: usize,
    pub explanation: String,
}

/// One structural correspondence between a search phrase and a document
/// position. Pure output, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub search_phrase_label: String,
    pub document_label: String,
    /// Index of the token the template root matched.
    pub index_within_document: usize,
    /// Ordered by search-phrase token position.
    pub word_matches: Vec<WordMatch>,
}

impl MatchRecord {
    /// Flat JSON form for downstream consumers.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "search_phrase_label": self.search_phrase_label,
            "document_label": self.document_label,
            "index_within_document": self.index_within_document,
            "word_matches": self.word_matches.iter().map(|wm| {
                serde_json::json!({
                    "match_type": wm.match_type,
                    "search_phrase_word": wm.search_phrase_word,
                    "document_word": wm.document_word,
                    "explanation": wm.explanation,
                })
            }).collect::<Vec<_>>(),
        })
    }
}
