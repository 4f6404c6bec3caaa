use rdf_export_formats::SerializationError;
use rdf_export_model::{IriParseError, ModelError};
use std::error::Error;
use std::io;

/// An error raised by the [`Exporter`](crate::Exporter).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The requested output format is not one of `jsonld`, `turtle`, `rdfxml` or `ntriples`.
    #[error("Unsupported output format '{0}'")]
    UnsupportedFormat(String),
    /// The export options could not be read.
    #[error("Invalid export options: {0}")]
    InvalidOptions(#[source] serde_json::Error),
    /// The base URI is invalid.
    #[error("Invalid base URI '{iri}': {error}")]
    InvalidBaseUri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// The graph or the namespace configuration is malformed.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// The graph could not be written in the requested format.
    #[error(transparent)]
    Serialization(#[from] SerializationError),
    /// The graph builder failed to describe the resource.
    #[error("Failed to build the graph: {0}")]
    Builder(#[source] Box<dyn Error + Send + Sync + 'static>),
}

impl From<ExportError> for io::Error {
    #[inline]
    fn from(error: ExportError) -> Self {
        match error {
            ExportError::Model(error) => error.into(),
            ExportError::Serialization(error) => error.into(),
            ExportError::UnsupportedFormat(_)
            | ExportError::InvalidOptions(_)
            | ExportError::InvalidBaseUri { .. } => {
                Self::new(io::ErrorKind::InvalidInput, error.to_string())
            }
            ExportError::Builder(_) => Self::other(error),
        }
    }
}
