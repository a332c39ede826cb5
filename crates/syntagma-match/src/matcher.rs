//! Recursive structural alignment.
//!
//! The matcher holds nothing mutable: configuration, relation rules, ontology
//! and semantic resources are all borrowed read-only, so any number of
//! documents can be matched concurrently with no locking. A single alignment
//! is bounded by the template's depth — small and fixed — so overlay cycles
//! in the document graph can never cause non-termination.

use syntagma_graph::Document;
use syntagma_ontology::Ontology;

use crate::config::MatcherConfig;
use crate::match_types::{MatchDetail, MatchRecord, MatchType, WordMatch};
use crate::relations::RelationRules;
use crate::resources::SemanticResources;
use crate::spans;
use crate::template::{Template, TemplateNode};

pub struct StructuralMatcher<'a> {
    config: &'a MatcherConfig,
    rules: &'a RelationRules,
    ontology: Option<&'a Ontology>,
    resources: &'a dyn SemanticResources,
}

impl<'a> StructuralMatcher<'a> {
    pub fn new(
        config: &'a MatcherConfig,
        rules: &'a RelationRules,
        ontology: Option<&'a Ontology>,
        resources: &'a dyn SemanticResources,
    ) -> Self {
        Self {
            config,
            rules,
            ontology,
            resources,
        }
    }

    /// Match every template against one document.
    ///
    /// Results are ordered by ascending root-anchor token index, ties broken
    /// by template registration order. Each document token anchors at most
    /// one match per template: the first successful alignment wins and no
    /// alternative decompositions are explored.
    pub fn match_templates(
        &self,
        templates: &[Template],
        document_label: &str,
        document: &Document,
    ) -> Vec<MatchRecord> {
        let mut records = Vec::new();
        for anchor in 0..document.len() {
            for template in templates {
                if !self.plausible_root(template.root(), document, anchor) {
                    continue;
                }
                let Some(mut word_matches) = self.align(template, 0, document, anchor) else {
                    continue;
                };
                word_matches.sort_by_key(|wm| wm.search_phrase_token_index);
                tracing::debug!(
                    search_phrase = template.label(),
                    document = document_label,
                    anchor,
                    "structural match"
                );
                records.push(MatchRecord {
                    search_phrase_label: template.label().to_string(),
                    document_label: document_label.to_string(),
                    index_within_document: anchor,
                    word_matches,
                });
            }
        }
        records
    }

    /// Cheap anchor filter; the word-level cascade is the real gate.
    fn plausible_root(&self, root: &TemplateNode, document: &Document, anchor: usize) -> bool {
        let Some(token) = document.token(anchor) else {
            return false;
        };
        if root.entity_type.is_some() {
            return token.entity_label.is_some();
        }
        token.pos.is_content() || token.entity_label.is_some()
    }

    /// Align one template node against one document token.
    ///
    /// Returns the word matches of the node and its whole subtree, or `None`
    /// if the node or any required child fails — there is no partial credit.
    fn align(
        &self,
        template: &Template,
        node_id: usize,
        document: &Document,
        anchor: usize,
    ) -> Option<Vec<WordMatch>> {
        let node = template.node(node_id);
        let mut collected = Vec::new();

        if node.matchable {
            collected.push(self.word_match(template, node, document, anchor)?);
        }

        for &child_id in &node.children {
            let child = template.node(child_id);
            let required = child.relation_to_parent.as_deref()?;
            let mut aligned = None;
            for dep in document.combined_children(anchor) {
                let actual = self.rules.normalize(&dep.label);
                if !self.rules.compatible(required, &actual) {
                    continue;
                }
                if let Some(sub) = self.align(template, child_id, document, dep.target) {
                    aligned = Some(sub);
                    break;
                }
            }
            collected.extend(aligned?);
        }

        Some(collected)
    }

    // ------------------------------------------------------------------------
    // Word-level cascade
    // ------------------------------------------------------------------------

    /// Try the equivalence cascade in its fixed order; first success wins.
    fn word_match(
        &self,
        template: &Template,
        node: &TemplateNode,
        document: &Document,
        anchor: usize,
    ) -> Option<WordMatch> {
        let token = document.token(anchor)?;
        let embeddings_allowed =
            !node.is_root() || self.config.embedding_based_matching_on_root_words;
        let embedding_threshold = self
            .config
            .overall_similarity_threshold
            .powi(template.matchable_count() as i32);

        // Document word forms, span first so a collapsed span represents its
        // tokens: (matching form, display form).
        let mut forms: Vec<(String, String)> = Vec::new();
        let doc_span = self
            .ontology
            .and_then(|ont| spans::ontology_span_at(document, anchor, ont))
            .or_else(|| spans::entity_span_at(document, anchor));
        if let Some(span) = &doc_span {
            forms.push((span.word.clone(), span.text.clone()));
        }
        let effective = document
            .effective_lemma(anchor)
            .unwrap_or_else(|| token.lemma.clone());
        forms.push((effective.to_lowercase(), token.text.clone()));
        forms.push((token.text.to_lowercase(), token.text.clone()));
        for subword in &token.subwords {
            forms.push((subword.lemma.to_lowercase(), token.text.clone()));
        }

        let finish = |match_type: MatchType, document_word: String, detail: MatchDetail| WordMatch {
            match_type,
            search_phrase_word: node.word.clone(),
            document_word,
            search_phrase_token_index: node.token_index,
            document_token_index: anchor,
            explanation: match_type.explanation(&node.word, detail),
        };

        // 1. direct
        for (form, display) in &forms {
            if *form == node.word {
                return Some(finish(MatchType::Direct, display.clone(), MatchDetail::None));
            }
        }

        // 2. entity placeholder
        if let Some(expected) = &node.entity_type {
            if token.entity_label.as_deref() == Some(expected.as_str())
                && !spans::is_entity_run_member(document, anchor)
            {
                let display = spans::entity_span_at(document, anchor)
                    .map(|span| span.text)
                    .unwrap_or_else(|| token.text.clone());
                return Some(finish(
                    MatchType::Entity,
                    display,
                    MatchDetail::Placeholder,
                ));
            }
        }

        // 3. ontology
        if let Some(ontology) = self.ontology {
            for (form, display) in &forms {
                if let Some(relation) =
                    ontology.relate(&node.word, form, self.config.max_ontology_traversal_depth)
                {
                    return Some(finish(
                        MatchType::Ontology,
                        display.clone(),
                        MatchDetail::Distance(relation.signed_distance),
                    ));
                }
            }
        }

        // 4. embedding
        if embeddings_allowed && embedding_threshold < 1.0 {
            if let (Some(phrase_vec), Some(doc_vec)) = (&node.embedding, &token.embedding) {
                let similarity = self.resources.similarity(phrase_vec, doc_vec);
                if similarity >= embedding_threshold {
                    return Some(finish(
                        MatchType::Embedding,
                        token.text.clone(),
                        MatchDetail::Similarity(similarity),
                    ));
                }
            }
        }

        // 5. derivation
        if self.config.analyze_derivational_morphology {
            let phrase_stem = node
                .derived_lemma
                .clone()
                .or_else(|| self.resources.derived_stem(&node.word))
                .unwrap_or_else(|| node.word.clone());
            let document_stem = token
                .derived_lemma
                .clone()
                .or_else(|| self.resources.derived_stem(&effective))
                .unwrap_or_else(|| effective.to_lowercase());
            if phrase_stem.to_lowercase() == document_stem.to_lowercase() {
                return Some(finish(
                    MatchType::Derivation,
                    token.text.clone(),
                    MatchDetail::None,
                ));
            }
        }

        // 6. entity embedding
        if embeddings_allowed && embedding_threshold < 1.0 {
            if let (Some(phrase_vec), Some(label)) = (&node.embedding, &token.entity_label) {
                if let Some(label_vec) = self.resources.entity_label_embedding(label) {
                    let similarity = self.resources.similarity(phrase_vec, &label_vec);
                    if similarity >= embedding_threshold {
                        let display = spans::entity_span_at(document, anchor)
                            .map(|span| span.text)
                            .unwrap_or_else(|| token.text.clone());
                        return Some(finish(
                            MatchType::EntityEmbedding,
                            display,
                            MatchDetail::Similarity(similarity),
                        ));
                    }
                }
            }
        }

        None
    }
}
