//! Plain-text triple loader (boundary adapter).
//!
//! Ontologies usually arrive as RDF-shaped class declarations. This loader
//! reads the line-oriented triple subset:
//!
//! ```text
//! <http://example.org/ont#Dog> rdfs:subClassOf <http://example.org/ont#Animal> .
//! <http://example.org/ont#Mimi_Momo> rdf:type <http://example.org/ont#Cat> .
//! <http://example.org/ont#Oans> owl:equivalentClass <http://example.org/ont#Unouno> .
//! ```
//!
//! Concept labels come from the IRI local name: underscores become spaces and
//! everything is lowercased, so `Mimi_Momo` declares the multiword concept
//! "mimi momo". Predicates are recognized by local name, full IRI or prefixed
//! form alike. Unrecognized predicates and malformed lines are skipped.

use std::path::Path;

use anyhow::{Context, Result};

use crate::graph::Ontology;

/// Load an ontology from a triple file.
pub fn load_ontology_file(path: &Path, symmetric: bool) -> Result<Ontology> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading ontology file {}", path.display()))?;
    load_ontology_str(&content, symmetric)
}

/// Load an ontology from triple text.
pub fn load_ontology_str(content: &str, symmetric: bool) -> Result<Ontology> {
    let mut ontology = Ontology::new(symmetric);
    let mut statements = 0usize;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // <subject> <predicate> <object> .
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 || parts.last() != Some(&".") {
            tracing::warn!(line, "skipping malformed triple");
            continue;
        }

        let subject = concept_label(extract_iri(parts[0]));
        let predicate = local_name(extract_iri(parts[1]));
        let object_raw = parts[2..parts.len() - 1].join(" ");
        let object_iri = extract_iri(&object_raw).to_string();

        match predicate.as_str() {
            "subClassOf" => {
                // subject is-a object
                ontology.declare_hyponym(&concept_label(&object_iri), &subject);
                statements += 1;
            }
            "equivalentClass" | "sameAs" => {
                ontology.declare_synonym(&subject, &concept_label(&object_iri));
                statements += 1;
            }
            "type" | "a" => match local_name(&object_iri).as_str() {
                // Bare declarations intern the concept without edges.
                "Class" | "NamedIndividual" => {
                    ontology.declare_concept(&subject);
                    statements += 1;
                }
                "ObjectProperty" | "DatatypeProperty" | "AnnotationProperty" | "Ontology" => {}
                _ => {
                    ontology.declare_individual(&concept_label(&object_iri), &subject);
                    statements += 1;
                }
            },
            _ => {}
        }
    }

    tracing::debug!(
        statements,
        concepts = ontology.concept_count(),
        "loaded ontology"
    );
    Ok(ontology)
}

/// Strip `<...>` if present.
fn extract_iri(token: &str) -> &str {
    token
        .strip_prefix('<')
        .and_then(|t| t.strip_suffix('>'))
        .unwrap_or(token)
}

/// Fragment or last path segment, prefix-form aware.
fn local_name(iri: &str) -> String {
    iri.rsplit(['#', '/', ':']).next().unwrap_or(iri).to_string()
}

/// IRI local name as a concept label: underscores to spaces, lowercased.
fn concept_label(iri: &str) -> String {
    local_name(iri).replace('_', " ").to_lowercase()
}
