//! Versioned document archives.
//!
//! A serialized document is only meaningful relative to the linguistic model
//! and the derivational-morphology setting it was produced under: lemmas,
//! labels and derived lemmas all depend on them. The archive therefore pins
//! all three, and deserialization rejects any mismatch *before* the caller
//! gets a document to install anywhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;

/// Current archive format version. Bumped whenever the token layout changes.
pub const SERIALIZED_DOCUMENT_VERSION: u32 = 2;

#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("serialized document has version {found}, this build reads version {expected}")]
    WrongVersion { expected: u32, found: u32 },
    #[error("serialized document was produced under model '{found}', this manager uses '{expected}'")]
    WrongModel { expected: String, found: String },
    #[error(
        "serialized document was produced with analyze_derivational_morphology={found}, \
         this manager uses {expected}"
    )]
    IncompatibleMorphology { expected: bool, found: bool },
    #[error("document archive could not be decoded: {0}")]
    Corrupt(#[from] bincode::Error),
}

#[derive(Serialize, Deserialize)]
struct DocumentArchive {
    version: u32,
    model: String,
    analyze_derivational_morphology: bool,
    document: Document,
}

/// Serialize a document together with its compatibility envelope.
pub fn serialize_document(
    document: &Document,
    model: &str,
    analyze_derivational_morphology: bool,
) -> Result<Vec<u8>, bincode::Error> {
    let archive = DocumentArchive {
        version: SERIALIZED_DOCUMENT_VERSION,
        model: model.to_string(),
        analyze_derivational_morphology,
        document: document.clone(),
    };
    bincode::serialize(&archive)
}

/// Decode an archive, checking version, model and morphology compatibility.
///
/// The checks run in a fixed order (version, model, morphology) so error
/// reporting is deterministic when several fields mismatch at once.
pub fn deserialize_document(
    bytes: &[u8],
    expected_model: &str,
    expected_morphology: bool,
) -> Result<Document, DeserializeError> {
    let archive: DocumentArchive = bincode::deserialize(bytes)?;
    if archive.version != SERIALIZED_DOCUMENT_VERSION {
        return Err(DeserializeError::WrongVersion {
            expected: SERIALIZED_DOCUMENT_VERSION,
            found: archive.version,
        });
    }
    if archive.model != expected_model {
        return Err(DeserializeError::WrongModel {
            expected: expected_model.to_string(),
            found: archive.model,
        });
    }
    if archive.analyze_derivational_morphology != expected_morphology {
        return Err(DeserializeError::IncompatibleMorphology {
            expected: expected_morphology,
            found: archive.analyze_derivational_morphology,
        });
    }
    Ok(archive.document)
}
