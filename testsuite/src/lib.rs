//! Checks that the Turtle, N-Triples and RDF/XML output of an [`Exporter`] parses back to the
//! triples of the exported graph.
//!
//! Outputs are parsed with [`oxrdfio`] and compared, after canonicalization of blank nodes, with
//! a [`ReferenceWalk`] of the graph.

pub mod reference;
pub mod report;

pub use crate::reference::{Anonymous, ReferenceWalk};
use crate::report::graph_diff;
use anyhow::{bail, ensure, Context, Result};
use oxrdf::dataset::CanonicalizationAlgorithm;
use oxrdf::{Graph, Triple};
use oxrdfio::RdfParser;
use rdf_export::model::Node;
use rdf_export::{ExportOptions, Exporter, RdfFormat};

/// The formats that can be parsed back.
pub const PARSEABLE_FORMATS: [RdfFormat; 3] =
    [RdfFormat::Turtle, RdfFormat::NTriples, RdfFormat::RdfXml];

/// Parses serialized output into a graph.
pub fn parse_graph(format: RdfFormat, content: &str) -> Result<Graph> {
    let parser_format = match format {
        RdfFormat::Turtle => oxrdfio::RdfFormat::Turtle,
        RdfFormat::NTriples => oxrdfio::RdfFormat::NTriples,
        RdfFormat::RdfXml => oxrdfio::RdfFormat::RdfXml,
        RdfFormat::JsonLd => bail!("JSON-LD output can not be parsed back into triples"),
    };
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(parser_format).for_slice(content.as_bytes()) {
        let quad = quad.with_context(|| format!("Invalid {format} output:\n{content}"))?;
        ensure!(
            quad.graph_name.is_default_graph(),
            "{format} output contains a named graph"
        );
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }
    Ok(graph)
}

/// Fails if the two graphs differ after blank node canonicalization.
pub fn assert_same_graph(mut expected: Graph, mut actual: Graph, context: &str) -> Result<()> {
    expected.canonicalize(CanonicalizationAlgorithm::Unstable);
    actual.canonicalize(CanonicalizationAlgorithm::Unstable);
    ensure!(
        expected == actual,
        "{context}: the parsed triples differ from the graph\n{}",
        graph_diff(&expected, &actual)
    );
    Ok(())
}

/// Exports `node` in `options.output_format` and checks the output against a reference walk.
pub fn check_export(exporter: &Exporter, node: &Node, options: &ExportOptions) -> Result<()> {
    let format = options.output_format;
    let export = exporter.serialize(node, options)?;
    let actual = parse_graph(format, export.content())?;
    let expected = ReferenceWalk::for_format(exporter, format, options).graph(node)?;
    assert_same_graph(expected, actual, &format!("{format} output\n{}", export.content()))
}

/// [`check_export`] for every parseable format.
pub fn check_parseable_exports(
    exporter: &Exporter,
    node: &Node,
    options: &ExportOptions,
) -> Result<()> {
    for format in PARSEABLE_FORMATS {
        check_export(exporter, node, &options.clone().with_output_format(format))?;
    }
    Ok(())
}
