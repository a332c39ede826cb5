//! Linguistic document graph model.
//!
//! This crate sits at the boundary with the linguistic pipeline: a pipeline
//! (tokenizer, parser, NER, coreference resolver, embedding model) produces
//! annotated tokens, and this crate holds them as an immutable, index-based
//! token arena:
//!
//! - tokens are addressed by their position in the document,
//! - dependency edges are `(index, label)` pairs stored on both endpoints,
//! - coreference-linked edges live in separate parallel lists that only ever
//!   *add* alignment opportunities and never replace the parse edges.
//!
//! Keeping everything index-based (rather than an object graph) makes the
//! structure serializable and trivially cycle-safe: a traversal bounded by
//! template depth can never loop forever, whatever the coreference overlay
//! looks like.
//!
//! Documents are built once through [`DocumentBuilder`] and never mutated
//! afterwards, so they can be shared read-only across matching workers.

mod document;
mod serialize;
mod token;

pub use document::{Document, DocumentBuilder, TokenSpec};
pub use serialize::{
    deserialize_document, serialize_document, DeserializeError, SERIALIZED_DOCUMENT_VERSION,
};
pub use token::{Dependency, GraphError, PosClass, Subword, Token};
