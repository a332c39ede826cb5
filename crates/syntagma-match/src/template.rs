//! Search-phrase template compilation.
//!
//! A search phrase arrives as a parsed document; compilation validates it,
//! rejects disqualifying structures, collapses multiword spans and entity
//! placeholders, and emits an immutable template graph whose edges carry
//! normalized relation classes. Templates are built once at registration and
//! reused, read-only, across every document they are matched against.

use syntagma_graph::{Document, PosClass, Token};
use syntagma_ontology::Ontology;

use crate::config::MatcherConfig;
use crate::error::CompileError;
use crate::relations::RelationRules;
use crate::spans;

// ============================================================================
// Template graph
// ============================================================================

/// One matchable unit of a template: a word, a collapsed span, or an entity
/// placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateNode {
    /// Head token position within the source phrase.
    pub token_index: usize,
    /// Matching key: lowercased (phrasal) lemma, span concept, or the
    /// placeholder sentinel.
    pub word: String,
    /// Surface form, for reporting.
    pub text: String,
    /// Inclusive token range when this node is a collapsed span.
    pub span: Option<(usize, usize)>,
    /// Normalized relation class required toward the parent; `None` at the
    /// root.
    pub relation_to_parent: Option<String>,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    /// Entity placeholder type ("PERSON" for the sentinel ENTITYPERSON).
    pub entity_type: Option<String>,
    /// False for wildcard nodes kept only because a descendant is matchable.
    pub matchable: bool,
    pub pos: PosClass,
    pub embedding: Option<Vec<f32>>,
    pub derived_lemma: Option<String>,
}

impl TemplateNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Compiled, immutable form of one search phrase. Node 0 is the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    label: String,
    nodes: Vec<TemplateNode>,
    matchable_count: usize,
}

impl Template {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn root(&self) -> &TemplateNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: usize) -> &TemplateNode {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[TemplateNode] {
        &self.nodes
    }

    /// Number of matchable nodes; drives the per-word embedding threshold.
    pub fn matchable_count(&self) -> usize {
        self.matchable_count
    }
}

// ============================================================================
// Compilation
// ============================================================================

/// Compile a parsed (and enriched) phrase into a template.
pub fn compile(
    label: &str,
    phrase: &Document,
    ontology: Option<&Ontology>,
    rules: &RelationRules,
    config: &MatcherConfig,
) -> Result<Template, CompileError> {
    for token in phrase.tokens() {
        for dep in &token.children {
            if dep.label == "cc" || dep.label == "conj" {
                return Err(CompileError::ContainsConjunction);
            }
            if dep.label == "neg" {
                return Err(CompileError::ContainsNegation);
            }
        }
    }

    // A template must be self-contained: a pronoun the pipeline resolved
    // against an antecedent cannot be honored during matching. Without
    // coreference resolution the same pronoun is an ordinary wildcard.
    if config.perform_coreference_resolution {
        for token in phrase.tokens() {
            if token.pos == PosClass::Pronoun && token.is_resolved() {
                return Err(CompileError::ContainsCoreferringPronoun);
            }
        }
    }

    // Independent clause roots carrying matchable content. More than one —
    // including across sentence boundaries — is not a single search phrase.
    let clause_roots: Vec<usize> = phrase
        .tokens()
        .iter()
        .filter(|t| t.parents.is_empty() && t.pos != PosClass::Punctuation)
        .filter(|t| subtree_has_matchable(phrase, t.index))
        .map(|t| t.index)
        .collect();
    if clause_roots.len() > 1 {
        return Err(CompileError::ContainsMultipleClauses);
    }
    let Some(&clause_root) = clause_roots.first() else {
        return Err(CompileError::WithoutMatchableWords);
    };

    // The template roots at the first matchable token under the clause root
    // (usually the clause root itself).
    let root_token = first_matchable(phrase, clause_root)
        .ok_or(CompileError::WithoutMatchableWords)?;

    let mut nodes = Vec::new();
    let mut visited = vec![false; phrase.len()];
    build_node(
        phrase,
        ontology,
        rules,
        root_token,
        None,
        None,
        &mut nodes,
        &mut visited,
    );
    let matchable_count = nodes.iter().filter(|n| n.matchable).count();
    if matchable_count == 0 {
        return Err(CompileError::WithoutMatchableWords);
    }

    tracing::debug!(
        label,
        nodes = nodes.len(),
        matchable = matchable_count,
        "compiled search phrase"
    );

    Ok(Template {
        label: label.to_string(),
        nodes,
        matchable_count,
    })
}

/// Entity placeholder sentinel: `ENTITY<TYPE>` with an uppercase ASCII type.
pub(crate) fn placeholder_type(token: &Token) -> Option<String> {
    let rest = token.text.strip_prefix("ENTITY")?;
    if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_uppercase()) {
        Some(rest.to_string())
    } else {
        None
    }
}

fn token_is_matchable(token: &Token) -> bool {
    placeholder_type(token).is_some() || token.pos.is_content()
}

fn subtree_has_matchable(phrase: &Document, root: usize) -> bool {
    walk_subtree(phrase, root).any(|idx| {
        phrase
            .token(idx)
            .map(token_is_matchable)
            .unwrap_or(false)
    })
}

fn first_matchable(phrase: &Document, root: usize) -> Option<usize> {
    walk_subtree(phrase, root).find(|&idx| {
        phrase
            .token(idx)
            .map(token_is_matchable)
            .unwrap_or(false)
    })
}

/// Breadth-first walk over direct children, visited-guarded (derived compound
/// edges form diamonds).
fn walk_subtree(phrase: &Document, root: usize) -> impl Iterator<Item = usize> + '_ {
    let mut order = Vec::new();
    let mut visited = vec![false; phrase.len()];
    let mut queue = std::collections::VecDeque::new();
    if root < phrase.len() {
        visited[root] = true;
        queue.push_back(root);
    }
    while let Some(idx) = queue.pop_front() {
        order.push(idx);
        if let Some(token) = phrase.token(idx) {
            for dep in &token.children {
                if let Some(seen) = visited.get_mut(dep.target) {
                    if !*seen {
                        *seen = true;
                        queue.push_back(dep.target);
                    }
                }
            }
        }
    }
    order.into_iter()
}

#[allow(clippy::too_many_arguments)]
fn build_node(
    phrase: &Document,
    ontology: Option<&Ontology>,
    rules: &RelationRules,
    token_index: usize,
    parent: Option<usize>,
    relation_to_parent: Option<String>,
    nodes: &mut Vec<TemplateNode>,
    visited: &mut [bool],
) -> usize {
    visited[token_index] = true;
    let token = &phrase.tokens()[token_index];
    let placeholder = placeholder_type(token);

    // Collapse spans: entity runs first, then ontology-declared sequences.
    let span = spans::entity_span_at(phrase, token_index)
        .or_else(|| ontology.and_then(|ont| spans::ontology_span_at(phrase, token_index, ont)));

    let (word, text, span_range) = match (&placeholder, &span) {
        (Some(_), _) => (token.text.clone(), token.text.clone(), None),
        (None, Some(span)) => (
            span.word.clone(),
            span.text.clone(),
            Some((span.start, span.end)),
        ),
        (None, None) => {
            let lemma = phrase
                .effective_lemma(token_index)
                .unwrap_or_else(|| token.lemma.clone());
            (lemma.to_lowercase(), token.text.clone(), None)
        }
    };

    let node_id = nodes.len();
    nodes.push(TemplateNode {
        token_index,
        word,
        text,
        span: span_range,
        relation_to_parent,
        parent,
        children: Vec::new(),
        entity_type: placeholder,
        matchable: token_is_matchable(token),
        pos: token.pos,
        embedding: token.embedding.clone(),
        derived_lemma: token.derived_lemma.clone(),
    });

    for dep in &token.children {
        if let Some((start, end)) = span_range {
            if dep.target >= start && dep.target <= end {
                continue;
            }
        }
        // Particles fold into the phrasal lemma; prepositional governors are
        // reached through their derived compound edge instead.
        if dep.label == "prt" || rules.is_compound_governor(&dep.label) {
            continue;
        }
        if visited[dep.target] || !subtree_has_matchable(phrase, dep.target) {
            continue;
        }
        let required = rules.normalize(&dep.label);
        let child_id = build_node(
            phrase,
            ontology,
            rules,
            dep.target,
            Some(node_id),
            Some(required),
            nodes,
            visited,
        );
        nodes[node_id].children.push(child_id);
    }

    node_id
}
