//! Error taxonomy.
//!
//! Everything here is a recoverable, user-facing validation or state error:
//! it surfaces synchronously to the caller of the offending operation, is
//! never retried internally, and never leaves a store half-mutated.

use thiserror::Error;

pub use syntagma_graph::{DeserializeError, GraphError};

/// Configuration problems, raised at manager construction.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must lie within [0.0, 1.0], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f32 },
    #[error(
        "embedding-based matching on root words has no effect when \
         overall_similarity_threshold is exactly 1.0"
    )]
    RootEmbeddingMatchingInactive,
    #[error(
        "embedding_matching_frequency_threshold ({embedding}) must not be lower than \
         relation_matching_frequency_threshold ({relation})"
    )]
    EmbeddingThresholdBelowRelationThreshold { relation: f32, embedding: f32 },
    #[error("number_of_workers must be at least 1, got {0}")]
    InvalidWorkerCount(usize),
    #[error("max_ontology_traversal_depth must be at least 1")]
    InvalidTraversalDepth,
    #[error("linguistic model '{0}' is not supported")]
    UnsupportedModel(String),
    #[error("initial question word behaviour '{0}' is not recognized")]
    UnrecognizedQuestionWordBehaviour(String),
    #[error("failed to build the worker thread pool: {0}")]
    WorkerPool(String),
}

/// Search-phrase compilation failures, raised at registration. A failed
/// registration stores nothing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    #[error("search phrases may not contain conjunctions")]
    ContainsConjunction,
    #[error("search phrases may not contain negation")]
    ContainsNegation,
    #[error("search phrases may not contain multiple clauses")]
    ContainsMultipleClauses,
    #[error("search phrase contains no matchable words")]
    WithoutMatchableWords,
    #[error("search phrases may not contain coreferring pronouns")]
    ContainsCoreferringPronoun,
}

/// Registration-time failures for search phrases and documents.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("a document is already registered under label '{0}'")]
    DuplicateDocument(String),
    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("failed to encode document archive: {0}")]
    Archive(#[from] bincode::Error),
}

/// Matching-time failures. An empty store is an error, not an empty result:
/// "nothing matched" and "nothing to match against" must stay distinguishable.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no search phrase has been registered")]
    NoSearchPhrase,
    #[error("no document has been registered")]
    NoDocument,
    #[error(transparent)]
    Graph(#[from] GraphError),
}
