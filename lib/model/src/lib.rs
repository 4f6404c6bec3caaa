//! The in-memory graph model consumed by the RDF Export serializers.
//!
//! A [`Node`] describes one resource as an ordered mapping from predicates to
//! [`Value`]s, shaped like an expanded-but-not-flattened JSON-LD document. The
//! [`NamespaceRegistry`] holds the prefix table used to compact and expand
//! IRIs during serialization.

mod error;
mod json;
mod literal;
mod namespace;
mod node;
mod value;
pub mod vocab;

pub use error::*;
pub use literal::{Literal, LiteralKind};
pub use namespace::{
    blank_node_label, is_absolute_iri, is_blank_node_label, is_turtle_local_name, Namespace,
    NamespaceRegistry,
};
pub use node::{Node, Property};
pub use value::Value;

pub use oxiri::{Iri, IriParseError};
