//! Semantic structural matching.
//!
//! Given a linguistically analyzed search phrase and a collection of analyzed
//! documents, find every position whose dependency structure and word
//! semantics correspond to the phrase, under configurable notions of word
//! equivalence: direct, entity, ontology, embedding, derivation and
//! entity-embedding.
//!
//! The pipeline that produces analyzed documents is an external collaborator
//! (see `syntagma-graph`); so are embedding similarity and derivational
//! morphology (the [`SemanticResources`] seam). This crate owns:
//!
//! - the relation classifier that normalizes dependency labels
//!   ([`RelationRules`]),
//! - the search-phrase template compiler ([`template::compile`]),
//! - the recursive graph aligner ([`StructuralMatcher`]),
//! - the validated configuration surface ([`MatcherConfig`]) and the
//!   registration [`Manager`].
//!
//! Matching is a pure, read-mostly computation: templates, ontology and
//! documents are immutable once built, so documents partition freely across
//! worker threads with no locking anywhere.

pub mod config;
pub mod error;
pub mod manager;
pub mod match_types;
pub mod matcher;
pub mod relations;
pub mod resources;
pub mod spans;
pub mod template;

pub use config::{InitialQuestionWordBehaviour, MatcherConfig, SUPPORTED_MODELS};
pub use error::{CompileError, ConfigError, MatchError, RegistrationError};
pub use manager::Manager;
pub use match_types::{MatchDetail, MatchRecord, MatchType, WordMatch};
pub use matcher::StructuralMatcher;
pub use relations::{PrepositionRule, RelationRules};
pub use resources::{cosine_similarity, CosineResources, SemanticResources};
pub use template::{Template, TemplateNode};
