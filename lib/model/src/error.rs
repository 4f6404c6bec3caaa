use oxiri::IriParseError;
use std::io;

/// An error raised while building a [`Node`](crate::Node) or a
/// [`NamespaceRegistry`](crate::NamespaceRegistry).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A node must be a JSON object.
    #[error("Expected a JSON object for a node, found {0}")]
    NotAnObject(&'static str),
    /// The `@id` of a node was not a string.
    #[error("The '@id' of a node must be a string")]
    InvalidId,
    /// The `@type` of a node was neither a string nor an array of strings.
    #[error("The '@type' of a node must be a string or an array of strings")]
    InvalidType,
    /// A property value contained an array inside an array.
    #[error("Predicate '{predicate}' contains a nested array, which cannot be mapped to triples")]
    NestedList {
        /// The offending predicate.
        predicate: String,
    },
    /// A keyword object that the model cannot represent, e.g. `@list`.
    #[error("Keyword '{keyword}' is not supported as a value of predicate '{predicate}'")]
    UnsupportedKeyword {
        /// The unsupported keyword.
        keyword: String,
        /// The predicate it was found under.
        predicate: String,
    },
    /// A malformed value object: an `@value` that is neither a string, a number nor a boolean, or
    /// a key that is not a keyword with a string value.
    #[error("Invalid value object for predicate '{predicate}'")]
    InvalidLiteral {
        /// The predicate of the literal.
        predicate: String,
    },
    /// A namespace prefix that cannot be used in a prefixed name.
    #[error("Invalid namespace prefix '{0}'")]
    InvalidPrefix(String),
    /// A namespace IRI that is not a valid absolute IRI.
    #[error("Invalid namespace IRI '{iri}': {error}")]
    InvalidNamespaceIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
}

impl From<ModelError> for io::Error {
    #[inline]
    fn from(error: ModelError) -> Self {
        Self::new(io::ErrorKind::InvalidInput, error)
    }
}
