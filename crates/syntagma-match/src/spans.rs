//! Multiword span detection.
//!
//! A span is an ordered, contiguous run of two or more tokens treated as one
//! matchable unit, either because entity tagging covers the run with a single
//! label or because the ontology declares the exact surface sequence as a
//! concept. A span is anchored at its head token (the one token whose parents
//! all lie outside the run); only the head represents the span during
//! alignment, and the head token also answers entity/embedding lookups for it.

use syntagma_graph::Document;
use syntagma_ontology::Ontology;

/// A resolved multiword span, anchored at `head`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    /// Inclusive.
    pub end: usize,
    pub head: usize,
    /// Concatenated surface text, e.g. "Mimi Momo".
    pub text: String,
    /// Representative lemma used for matching, e.g. "mimi momo".
    pub word: String,
    pub entity_label: Option<String>,
}

/// The maximal same-label entity run containing `index`, if it has ≥2 tokens.
pub fn entity_run(document: &Document, index: usize) -> Option<(usize, usize)> {
    let label = document.token(index)?.entity_label.as_deref()?;
    let mut start = index;
    while start > 0
        && document
            .token(start - 1)
            .and_then(|t| t.entity_label.as_deref())
            == Some(label)
    {
        start -= 1;
    }
    let mut end = index;
    while document
        .token(end + 1)
        .and_then(|t| t.entity_label.as_deref())
        == Some(label)
    {
        end += 1;
    }
    (end > start).then_some((start, end))
}

/// The entity span anchored at `head`, if `head` heads a ≥2-token run.
pub fn entity_span_at(document: &Document, head: usize) -> Option<Span> {
    let (start, end) = entity_run(document, head)?;
    if !is_window_head(document, start, end, head) {
        return None;
    }
    Some(Span {
        start,
        end,
        head,
        text: window_text(document, start, end),
        word: window_text(document, start, end).to_lowercase(),
        entity_label: document.token(head)?.entity_label.clone(),
    })
}

/// True when `index` sits inside a ≥2-token entity run without heading it.
pub fn is_entity_run_member(document: &Document, index: usize) -> bool {
    match entity_run(document, index) {
        Some((start, end)) => !is_window_head(document, start, end, index),
        None => false,
    }
}

/// The longest ontology-declared span anchored at `head`, if any.
///
/// Longer windows win over shorter ones; both the joined lemmas and the
/// joined surface texts are tried against the concept registry.
pub fn ontology_span_at(document: &Document, head: usize, ontology: &Ontology) -> Option<Span> {
    let max_words = ontology.max_concept_words().min(document.len());
    if max_words < 2 {
        return None;
    }

    for window_len in (2..=max_words).rev() {
        let lowest_start = (head + 1).saturating_sub(window_len);
        for start in lowest_start..=head {
            let end = start + window_len - 1;
            if end >= document.len() {
                continue;
            }
            if !is_window_head(document, start, end, head) {
                continue;
            }
            let lemmas = window_lemmas(document, start, end);
            let text = window_text(document, start, end);
            let word = if ontology.is_concept(&lemmas) {
                lemmas
            } else if ontology.is_concept(&text) {
                text.to_lowercase()
            } else {
                continue;
            };
            return Some(Span {
                start,
                end,
                head,
                text,
                word,
                entity_label: document.token(head).and_then(|t| t.entity_label.clone()),
            });
        }
    }
    None
}

/// `head` heads the window iff its parents all lie outside the window while
/// every other window token attaches inside it.
fn is_window_head(document: &Document, start: usize, end: usize, head: usize) -> bool {
    if head < start || head > end {
        return false;
    }
    for index in start..=end {
        let Some(token) = document.token(index) else {
            return false;
        };
        let attaches_inside = token
            .parents
            .iter()
            .any(|dep| dep.target >= start && dep.target <= end);
        if index == head {
            if attaches_inside {
                return false;
            }
        } else if !attaches_inside {
            return false;
        }
    }
    true
}

fn window_text(document: &Document, start: usize, end: usize) -> String {
    (start..=end)
        .filter_map(|i| document.token(i).map(|t| t.text.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn window_lemmas(document: &Document, start: usize, end: usize) -> String {
    (start..=end)
        .filter_map(|i| document.token(i).map(|t| t.lemma.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}
