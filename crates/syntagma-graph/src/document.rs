use serde::{Deserialize, Serialize};

use crate::token::{Dependency, GraphError, PosClass, Subword, Token};

// ============================================================================
// Token specification (builder input)
// ============================================================================

/// Per-token input to [`DocumentBuilder`].
///
/// The linguistic pipeline (or a test) describes each token with this spec;
/// dependency edges are declared separately so that indexes exist first.
#[derive(Debug, Clone)]
pub struct TokenSpec {
    text: String,
    lemma: String,
    pos: PosClass,
    entity_label: Option<String>,
    embedding: Option<Vec<f32>>,
    derived_lemma: Option<String>,
    subwords: Vec<Subword>,
}

impl TokenSpec {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosClass) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            entity_label: None,
            embedding: None,
            derived_lemma: None,
            subwords: Vec::new(),
        }
    }

    /// Named-entity label, e.g. "PERSON" or "GPE".
    pub fn entity(mut self, label: impl Into<String>) -> Self {
        self.entity_label = Some(label.into());
        self
    }

    /// Word embedding vector.
    pub fn embedding(mut self, vector: Vec<f32>) -> Self {
        self.embedding = Some(vector);
        self
    }

    /// Derivational lemma ("belief" → "believe").
    pub fn derived(mut self, lemma: impl Into<String>) -> Self {
        self.derived_lemma = Some(lemma.into());
        self
    }

    /// Append a subword constituent (compound-decomposable languages).
    pub fn subword(mut self, text: impl Into<String>, lemma: impl Into<String>) -> Self {
        self.subwords.push(Subword {
            text: text.into(),
            lemma: lemma.into(),
        });
        self
    }
}

// ============================================================================
// Document builder
// ============================================================================

/// Builds an immutable [`Document`] from pipeline output.
///
/// Edges are declared parent→child with the raw parser label; the builder
/// mirrors each edge into the child's parent list so both directions are
/// available at match time. Coreference-linked edges go into the separate
/// overlay lists and never touch the direct edges.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    specs: Vec<TokenSpec>,
    edges: Vec<(usize, usize, String)>,
    coref_edges: Vec<(usize, usize, String)>,
    antecedents: Vec<(usize, usize)>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token; returns its index within the document.
    pub fn push(&mut self, spec: TokenSpec) -> usize {
        self.specs.push(spec);
        self.specs.len() - 1
    }

    /// Declare a direct parse dependency `parent -[label]-> child`.
    pub fn dependency(&mut self, parent: usize, child: usize, label: impl Into<String>) {
        self.edges.push((parent, child, label.into()));
    }

    /// Declare a coreference-linked dependency `parent -[label]-> child`
    /// (an edge inherited through a resolved antecedent).
    pub fn coreference(&mut self, parent: usize, child: usize, label: impl Into<String>) {
        self.coref_edges.push((parent, child, label.into()));
    }

    /// Record that `token` (typically a pronoun) was resolved against
    /// `antecedent`.
    pub fn antecedent(&mut self, token: usize, antecedent: usize) {
        self.antecedents.push((token, antecedent));
    }

    pub fn build(self) -> Result<Document, GraphError> {
        let len = self.specs.len();
        let mut tokens: Vec<Token> = self
            .specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Token {
                index,
                text: spec.text,
                lemma: spec.lemma,
                pos: spec.pos,
                entity_label: spec.entity_label,
                embedding: spec.embedding,
                derived_lemma: spec.derived_lemma,
                subwords: spec.subwords,
                antecedents: Vec::new(),
                parents: Vec::new(),
                children: Vec::new(),
                coref_parents: Vec::new(),
                coref_children: Vec::new(),
            })
            .collect();

        for (parent, child, label) in &self.edges {
            validate_edge(*parent, *child, label, len)?;
            tokens[*parent].children.push(Dependency::new(*child, label.clone()));
            tokens[*child].parents.push(Dependency::new(*parent, label.clone()));
        }
        for (parent, child, label) in &self.coref_edges {
            validate_edge(*parent, *child, label, len)?;
            tokens[*parent]
                .coref_children
                .push(Dependency::new(*child, label.clone()));
            tokens[*child]
                .coref_parents
                .push(Dependency::new(*parent, label.clone()));
        }
        for (token, antecedent) in &self.antecedents {
            for index in [*token, *antecedent] {
                if index >= len {
                    return Err(GraphError::IndexOutOfRange { index, len });
                }
            }
            tokens[*token].antecedents.push(*antecedent);
        }

        Ok(Document { tokens })
    }
}

fn validate_edge(parent: usize, child: usize, label: &str, len: usize) -> Result<(), GraphError> {
    for index in [parent, child] {
        if index >= len {
            return Err(GraphError::IndexOutOfRange { index, len });
        }
    }
    if parent == child {
        return Err(GraphError::SelfDependency { index: parent });
    }
    if label.is_empty() {
        return Err(GraphError::EmptyLabel { parent, child });
    }
    Ok(())
}

// ============================================================================
// Document
// ============================================================================

/// An analyzed document: an ordered, immutable token arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    tokens: Vec<Token>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Direct and coreference-linked children of a token, in that order.
    ///
    /// The overlay only ever widens the child set; alignment treats both kinds
    /// identically.
    pub fn combined_children(&self, index: usize) -> Vec<&Dependency> {
        let Some(token) = self.tokens.get(index) else {
            return Vec::new();
        };
        token.children.iter().chain(token.coref_children.iter()).collect()
    }

    /// The token's lemma with any attached verb particle folded in
    /// ("wake" with a `prt` child "up" → "wake up").
    pub fn effective_lemma(&self, index: usize) -> Option<String> {
        let token = self.tokens.get(index)?;
        for dep in &token.children {
            if dep.label == "prt" {
                if let Some(particle) = self.tokens.get(dep.target) {
                    return Some(format!("{} {}", token.lemma, particle.lemma));
                }
            }
        }
        Some(token.lemma.clone())
    }

    /// Copy of this document with extra direct dependencies added.
    ///
    /// Used by enrichment to install derived compound edges before a document
    /// is registered. Edges already present (same endpoints and label) are
    /// skipped, which makes enrichment idempotent.
    pub fn with_additional_dependencies(
        mut self,
        extra: Vec<(usize, usize, String)>,
    ) -> Result<Document, GraphError> {
        let len = self.tokens.len();
        for (parent, child, label) in extra {
            validate_edge(parent, child, &label, len)?;
            let exists = self.tokens[parent]
                .children
                .iter()
                .any(|d| d.target == child && d.label == label);
            if exists {
                continue;
            }
            self.tokens[parent].children.push(Dependency::new(child, label.clone()));
            self.tokens[child].parents.push(Dependency::new(parent, label));
        }
        Ok(self)
    }
}
