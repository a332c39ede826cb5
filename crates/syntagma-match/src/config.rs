//! Matcher configuration.
//!
//! All recognized tunables live in one explicit structure validated
//! exhaustively at construction time. Invalid values and invalid
//! combinations are rejected up front, never clamped and never re-checked
//! ad hoc at call sites.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Linguistic model ids this build knows how to work with.
pub const SUPPORTED_MODELS: &[&str] = &[
    "en_core_web_sm",
    "en_core_web_lg",
    "en_core_web_trf",
    "de_core_news_md",
    "de_core_news_lg",
];

/// What to do with an interrogative word heading a matched phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialQuestionWordBehaviour {
    Process,
    Exclusive,
    Ignore,
}

impl InitialQuestionWordBehaviour {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "process" => Ok(Self::Process),
            "exclusive" => Ok(Self::Exclusive),
            "ignore" => Ok(Self::Ignore),
            other => Err(ConfigError::UnrecognizedQuestionWordBehaviour(
                other.to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Linguistic model the documents and phrases were analyzed with.
    pub model: String,
    /// Geometric-mean similarity a whole match must reach; 1.0 disables
    /// embedding-based matching entirely.
    pub overall_similarity_threshold: f32,
    /// Attempt embedding matching on template root nodes.
    pub embedding_based_matching_on_root_words: bool,
    pub relation_matching_frequency_threshold: f32,
    pub embedding_matching_frequency_threshold: f32,
    pub word_embedding_match_threshold: f32,
    pub initial_question_word_embedding_match_threshold: f32,
    pub initial_question_word_behaviour: InitialQuestionWordBehaviour,
    /// Worker threads for partitioning documents during matching.
    pub number_of_workers: usize,
    /// Traverse ontology is-a edges against their direction as well.
    pub symmetric_matching: bool,
    pub max_ontology_traversal_depth: u32,
    pub perform_coreference_resolution: bool,
    pub analyze_derivational_morphology: bool,
}

impl MatcherConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            overall_similarity_threshold: 1.0,
            embedding_based_matching_on_root_words: false,
            relation_matching_frequency_threshold: 0.25,
            embedding_matching_frequency_threshold: 0.5,
            word_embedding_match_threshold: 0.8,
            initial_question_word_embedding_match_threshold: 0.85,
            initial_question_word_behaviour: InitialQuestionWordBehaviour::Process,
            number_of_workers: 1,
            symmetric_matching: false,
            max_ontology_traversal_depth: 10,
            perform_coreference_resolution: true,
            analyze_derivational_morphology: true,
        }
    }

    /// Check every field and every cross-field constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_MODELS.contains(&self.model.as_str()) {
            return Err(ConfigError::UnsupportedModel(self.model.clone()));
        }

        check_unit_interval(
            "overall_similarity_threshold",
            self.overall_similarity_threshold,
        )?;
        check_unit_interval(
            "relation_matching_frequency_threshold",
            self.relation_matching_frequency_threshold,
        )?;
        check_unit_interval(
            "embedding_matching_frequency_threshold",
            self.embedding_matching_frequency_threshold,
        )?;
        check_unit_interval(
            "word_embedding_match_threshold",
            self.word_embedding_match_threshold,
        )?;
        check_unit_interval(
            "initial_question_word_embedding_match_threshold",
            self.initial_question_word_embedding_match_threshold,
        )?;

        if self.embedding_based_matching_on_root_words
            && self.overall_similarity_threshold == 1.0
        {
            return Err(ConfigError::RootEmbeddingMatchingInactive);
        }
        if self.embedding_matching_frequency_threshold
            < self.relation_matching_frequency_threshold
        {
            return Err(ConfigError::EmbeddingThresholdBelowRelationThreshold {
                relation: self.relation_matching_frequency_threshold,
                embedding: self.embedding_matching_frequency_threshold,
            });
        }
        if self.number_of_workers < 1 {
            return Err(ConfigError::InvalidWorkerCount(self.number_of_workers));
        }
        if self.max_ontology_traversal_depth < 1 {
            return Err(ConfigError::InvalidTraversalDepth);
        }

        Ok(())
    }
}

fn check_unit_interval(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(ConfigError::ThresholdOutOfRange { name, value });
    }
    Ok(())
}
