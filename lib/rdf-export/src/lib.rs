#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
//! Exports a described resource as JSON-LD, Turtle, RDF/XML or N-Triples.
//!
//! An external [`GraphBuilder`] maps a domain record into a [`Node`](model::Node). The
//! [`Exporter`] validates the requested [`RdfFormat`], asks the builder for the graph and hands it
//! to the matching serializer of [`formats`].
//!
//! ```
//! use rdf_export::model::Node;
//! use rdf_export::{BaseUri, ExportOptions, Exporter, ExporterConfig, RdfFormat};
//!
//! let config = ExporterConfig::new(BaseUri::parse("https://archive.example.org")?)
//!     .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")?;
//! let exporter = Exporter::new(config);
//!
//! let work = Node::from_json(&serde_json::json!({
//!     "@id": "http://example.org/work/1",
//!     "@type": "bf:Work",
//!     "bf:title": {"@value": "Letters"}
//! }))?;
//! let options = ExportOptions::default().with_output_format(RdfFormat::NTriples);
//! let export = exporter.serialize(&work, &options)?;
//!
//! assert_eq!(export.mime_type(), "application/n-triples");
//! assert!(export.content().contains("<http://id.loc.gov/ontologies/bibframe/Work>"));
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod config;
pub mod error;
mod exporter;
mod format;
mod options;

pub use config::{BaseUri, ExporterConfig};
pub use error::ExportError;
pub use exporter::{Export, Exporter, GraphBuilder};
pub use format::RdfFormat;
pub use options::ExportOptions;

pub mod model {
    pub use rdf_export_model::*;
}

pub mod formats {
    pub use rdf_export_formats::*;
}
