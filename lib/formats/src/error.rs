use std::error::Error;
use std::io;
use std::string::FromUtf8Error;

/// An error raised while serializing a node.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SerializationError {
    /// The JSON-LD document could not be written.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The XML writer failed.
    #[error("Failed to write RDF/XML: {0}")]
    Xml(#[source] Box<dyn Error + Send + Sync + 'static>),
    /// No XML element name can be derived from the predicate.
    #[error("Cannot derive an XML element name for predicate '{predicate}'")]
    InvalidElementName {
        /// The offending predicate.
        predicate: String,
    },
    /// A `_:` identifier whose label cannot be written as a blank node.
    #[error("Invalid blank node identifier '{id}'")]
    InvalidBlankNode {
        /// The offending identifier.
        id: String,
    },
    /// A decimal that is NaN or infinite.
    #[error("Predicate '{predicate}' has a non-finite decimal value, which has no RDF representation")]
    NonFiniteNumber {
        /// The predicate of the value.
        predicate: String,
    },
    /// The writer produced bytes that are not UTF-8.
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
}

impl SerializationError {
    pub(crate) fn xml(error: impl Error + Send + Sync + 'static) -> Self {
        Self::Xml(Box::new(error))
    }
}

impl From<SerializationError> for io::Error {
    #[inline]
    fn from(error: SerializationError) -> Self {
        match error {
            SerializationError::InvalidElementName { .. }
            | SerializationError::InvalidBlankNode { .. }
            | SerializationError::NonFiniteNumber { .. } => {
                Self::new(io::ErrorKind::InvalidInput, error)
            }
            _ => Self::other(error),
        }
    }
}
