use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing a document graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("dependency references token {index} but the document has {len} tokens")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("dependency between token {parent} and token {child} has an empty label")]
    EmptyLabel { parent: usize, child: usize },
    #[error("token {index} declares a dependency on itself")]
    SelfDependency { index: usize },
}

// ============================================================================
// Part-of-speech classes
// ============================================================================

/// Coarse part-of-speech class assigned by the linguistic pipeline.
///
/// The matcher only needs enough granularity to decide matchability and
/// root-anchor plausibility; fine-grained tags stay in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosClass {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    /// Interrogative pronouns ("who", "what") are tracked separately because
    /// they are never matchable, even as wildcards.
    Interrogative,
    Determiner,
    Adposition,
    Particle,
    Conjunction,
    Numeral,
    Punctuation,
    Other,
}

impl PosClass {
    /// Content words can carry a matchable lemma on their own.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            PosClass::Noun
                | PosClass::ProperNoun
                | PosClass::Verb
                | PosClass::Adjective
                | PosClass::Adverb
                | PosClass::Numeral
        )
    }

    /// Closed-class grammatical words and pronouns never match alone.
    pub fn is_closed_class(self) -> bool {
        !self.is_content()
    }
}

// ============================================================================
// Token attributes
// ============================================================================

/// One constituent of a compound-decomposable word (e.g. German
/// "Bundesoberbehörde" → "Bundes" + "oberbehörde").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subword {
    pub text: String,
    pub lemma: String,
}

/// A dependency edge endpoint: the other token's index plus the raw relation
/// label produced by the parser (not yet normalized).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub target: usize,
    pub label: String,
}

impl Dependency {
    pub fn new(target: usize, label: impl Into<String>) -> Self {
        Self {
            target,
            label: label.into(),
        }
    }
}

/// A single analyzed token, immutable once its document is built.
///
/// `parents`/`children` hold the direct parse edges (plus any derived
/// compound edges added by enrichment before registration).
/// `coref_parents`/`coref_children` hold the coreference-linked overlay:
/// edges inherited from resolved antecedents. The overlay is unioned with the
/// direct edges at match time but stored separately so both sets round-trip
/// bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub lemma: String,
    pub pos: PosClass,
    pub entity_label: Option<String>,
    pub embedding: Option<Vec<f32>>,
    pub derived_lemma: Option<String>,
    pub subwords: Vec<Subword>,
    /// Indexes of resolved antecedents, when the pipeline resolved this
    /// token (typically a pronoun) against earlier mentions.
    pub antecedents: Vec<usize>,
    pub parents: Vec<Dependency>,
    pub children: Vec<Dependency>,
    pub coref_parents: Vec<Dependency>,
    pub coref_children: Vec<Dependency>,
}

impl Token {
    /// True if the token carries any coreference-linked edges, i.e. an
    /// antecedent inherited one of its relations.
    pub fn has_coreference_links(&self) -> bool {
        !self.coref_parents.is_empty() || !self.coref_children.is_empty()
    }

    /// True if the pipeline resolved this token against an antecedent.
    pub fn is_resolved(&self) -> bool {
        !self.antecedents.is_empty()
    }
}
