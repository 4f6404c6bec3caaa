//! Serializers that turn a [`Node`](rdf_export_model::Node) into JSON-LD, Turtle, N-Triples or
//! RDF/XML text.
//!
//! JSON-LD is the native shape of the graph model and is written almost as is. Turtle and
//! N-Triples go through the [`TripleExtractor`]. RDF/XML walks the node tree directly.

mod error;
mod escape;
mod identifier;
mod jsonld;
mod ntriples;
mod policy;
mod rdfxml;
mod triple;
mod turtle;

pub use error::SerializationError;
pub use identifier::{IdentifierGenerator, IdentifierStrategy};
pub use jsonld::{JsonLdContext, JsonLdSerializer};
pub use ntriples::NTriplesSerializer;
pub use policy::PlainStringPolicy;
pub use rdfxml::{RdfXmlDocument, RdfXmlSerializer, XmlContent, XmlElement};
pub use triple::{flatten, Object, Triple, TripleExtractor};
pub use turtle::TurtleSerializer;
