//! Registration manager.
//!
//! Owns the compiled templates, the registered documents, the relation rules
//! and the optional ontology, and exposes the matching entry points. All
//! stores are append-only between explicit `remove_all_*` calls; every
//! registration is atomic — a failed one leaves the stores untouched.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use syntagma_graph::{deserialize_document, serialize_document, Document};
use syntagma_ontology::{load_ontology_file, Ontology};

use crate::config::MatcherConfig;
use crate::error::{ConfigError, MatchError, RegistrationError};
use crate::match_types::MatchRecord;
use crate::matcher::StructuralMatcher;
use crate::relations::RelationRules;
use crate::resources::SemanticResources;
use crate::template::{self, Template};

pub struct Manager {
    config: MatcherConfig,
    rules: RelationRules,
    ontology: Option<Arc<Ontology>>,
    resources: Arc<dyn SemanticResources>,
    templates: Vec<Template>,
    /// Registration order matters for output ordering, so documents live in
    /// an ordered list; the label index only guards duplicates.
    documents: Vec<(String, Arc<Document>)>,
    labels: ahash::AHashMap<String, usize>,
    pool: Option<rayon::ThreadPool>,
}

impl Manager {
    /// Validate the configuration and build the manager.
    pub fn new(
        config: MatcherConfig,
        resources: Arc<dyn SemanticResources>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let pool = if config.number_of_workers > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.number_of_workers)
                .build()
                .map_err(|e| ConfigError::WorkerPool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };
        tracing::info!(
            model = %config.model,
            workers = config.number_of_workers,
            "manager ready"
        );
        Ok(Self {
            config,
            rules: RelationRules::default_rules(),
            ontology: None,
            resources,
            templates: Vec::new(),
            documents: Vec::new(),
            labels: ahash::AHashMap::new(),
            pool,
        })
    }

    /// Attach an ontology. Its own symmetric flag governs traversal.
    pub fn with_ontology(mut self, ontology: Ontology) -> Self {
        self.ontology = Some(Arc::new(ontology));
        self
    }

    /// Replace the default relation tables.
    pub fn with_relation_rules(mut self, rules: RelationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Load and attach an ontology from a triple file, honoring the
    /// configured symmetric-matching flag.
    pub fn load_ontology(&mut self, path: &Path) -> anyhow::Result<()> {
        let ontology = load_ontology_file(path, self.config.symmetric_matching)?;
        self.ontology = Some(Arc::new(ontology));
        Ok(())
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Search phrases
    // ------------------------------------------------------------------------

    /// Compile and register one search phrase. Nothing is stored on failure.
    pub fn register_search_phrase(
        &mut self,
        label: &str,
        phrase: Document,
    ) -> Result<(), RegistrationError> {
        let enriched = self.rules.enrich_document(phrase)?;
        let template = template::compile(
            label,
            &enriched,
            self.ontology.as_deref(),
            &self.rules,
            &self.config,
        )?;
        tracing::info!(label, "registered search phrase");
        self.templates.push(template);
        Ok(())
    }

    pub fn remove_all_search_phrases(&mut self) {
        self.templates.clear();
    }

    pub fn search_phrase_count(&self) -> usize {
        self.templates.len()
    }

    // ------------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------------

    /// Register a parsed document under a label. Duplicate labels are
    /// rejected before any mutation; the first registration stays intact.
    pub fn register_document(
        &mut self,
        label: &str,
        document: Document,
    ) -> Result<(), RegistrationError> {
        if self.labels.contains_key(label) {
            return Err(RegistrationError::DuplicateDocument(label.to_string()));
        }
        let enriched = self.rules.enrich_document(document)?;
        self.labels.insert(label.to_string(), self.documents.len());
        self.documents.push((label.to_string(), Arc::new(enriched)));
        tracing::info!(label, "registered document");
        Ok(())
    }

    /// Register a document from its serialized archive. Compatibility is
    /// checked before the store is touched.
    pub fn register_serialized_document(
        &mut self,
        label: &str,
        bytes: &[u8],
    ) -> Result<(), RegistrationError> {
        if self.labels.contains_key(label) {
            return Err(RegistrationError::DuplicateDocument(label.to_string()));
        }
        let document = deserialize_document(
            bytes,
            &self.config.model,
            self.config.analyze_derivational_morphology,
        )?;
        self.register_document(label, document)
    }

    /// Register several serialized documents, in order. Each registration is
    /// atomic; on failure, documents registered so far stay registered.
    pub fn register_serialized_documents(
        &mut self,
        archives: &[(String, Vec<u8>)],
    ) -> Result<(), RegistrationError> {
        for (label, bytes) in archives {
            self.register_serialized_document(label, bytes)?;
        }
        Ok(())
    }

    /// Serialize a registered document, or `None` for an unknown label.
    pub fn serialize_document(&self, label: &str) -> Result<Option<Vec<u8>>, RegistrationError> {
        let Some(&index) = self.labels.get(label) else {
            return Ok(None);
        };
        let (_, document) = &self.documents[index];
        let bytes = serialize_document(
            document,
            &self.config.model,
            self.config.analyze_derivational_morphology,
        )?;
        Ok(Some(bytes))
    }

    pub fn remove_all_documents(&mut self) {
        self.documents.clear();
        self.labels.clear();
    }

    pub fn document_labels(&self) -> Vec<&str> {
        self.documents.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn document(&self, label: &str) -> Option<&Document> {
        let &index = self.labels.get(label)?;
        Some(&self.documents[index].1)
    }

    // ------------------------------------------------------------------------
    // Matching
    // ------------------------------------------------------------------------

    /// Match every registered search phrase against every registered
    /// document. Empty stores are errors: "nothing matched" and "nothing to
    /// match against" must stay distinguishable.
    pub fn match_all(&self) -> Result<Vec<MatchRecord>, MatchError> {
        if self.templates.is_empty() {
            return Err(MatchError::NoSearchPhrase);
        }
        if self.documents.is_empty() {
            return Err(MatchError::NoDocument);
        }

        let matcher = StructuralMatcher::new(
            &self.config,
            &self.rules,
            self.ontology.as_deref(),
            self.resources.as_ref(),
        );

        // Documents are independent and everything shared is read-only, so
        // they partition freely across the worker pool. Collecting per
        // document keeps the output order equal to registration order.
        let per_document: Vec<Vec<MatchRecord>> = match &self.pool {
            Some(pool) => pool.install(|| {
                self.documents
                    .par_iter()
                    .map(|(label, document)| {
                        matcher.match_templates(&self.templates, label, document)
                    })
                    .collect()
            }),
            None => self
                .documents
                .iter()
                .map(|(label, document)| matcher.match_templates(&self.templates, label, document))
                .collect(),
        };

        Ok(per_document.into_iter().flatten().collect())
    }

    /// Match every registered search phrase against one ad-hoc document
    /// without registering it.
    pub fn match_document(
        &self,
        label: &str,
        document: Document,
    ) -> Result<Vec<MatchRecord>, MatchError> {
        if self.templates.is_empty() {
            return Err(MatchError::NoSearchPhrase);
        }
        let enriched = self.rules.enrich_document(document)?;
        let matcher = StructuralMatcher::new(
            &self.config,
            &self.rules,
            self.ontology.as_deref(),
            self.resources.as_ref(),
        );
        Ok(matcher.match_templates(&self.templates, label, &enriched))
    }
}
