//! Caller-supplied semantic lookups.
//!
//! Embedding similarity and derivational morphology live outside the matcher:
//! they are synchronous pure functions behind one trait, so the matcher can
//! stay free of model dependencies and remain trivially parallelizable.

/// Semantic black boxes the matcher consults during the word-level cascade.
pub trait SemanticResources: Send + Sync {
    /// Similarity of two embedding vectors, in [0, 1].
    fn similarity(&self, a: &[f32], b: &[f32]) -> f32;

    /// Derivational stem of a lemma ("belief" → "believe"), `None` when the
    /// analyzer has nothing to say. Token-level derived lemmas from the
    /// pipeline take precedence over this lookup.
    fn derived_stem(&self, lemma: &str) -> Option<String>;

    /// Embedding of the canonical term behind an entity label
    /// ("PERSON" → the vector for "person").
    fn entity_label_embedding(&self, label: &str) -> Option<Vec<f32>>;
}

/// Default resources: plain cosine similarity, no morphology, no entity-label
/// embeddings.
#[derive(Debug, Default, Clone, Copy)]
pub struct CosineResources;

impl SemanticResources for CosineResources {
    fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    fn derived_stem(&self, _lemma: &str) -> Option<String> {
        None
    }

    fn entity_label_embedding(&self, _label: &str) -> Option<Vec<f32>> {
        None
    }
}

/// Cosine similarity clamped to [0, 1]; mismatched or zero-length vectors
/// score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}
