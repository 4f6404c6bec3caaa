#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use anyhow::Result;
use rdf_export::formats::PlainStringPolicy;
use rdf_export::model::{Literal, Node, Value};
use rdf_export::{BaseUri, ExportOptions, Exporter, ExporterConfig, RdfFormat};
use rdf_export_testsuite::{check_export, check_parseable_exports, parse_graph};
use serde_json::json;

fn config() -> Result<ExporterConfig> {
    Ok(
        ExporterConfig::new(BaseUri::parse("https://archive.example.org")?)
            .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")?
            .with_namespace("rico", "https://www.ica.org/standards/RiC/ontology#")?
            .with_namespace("dc", "http://purl.org/dc/elements/1.1/")?,
    )
}

fn exporter() -> Result<Exporter> {
    Ok(Exporter::new(config()?))
}

fn record() -> Result<Node> {
    Ok(Node::from_json(&json!({
        "@id": "https://archive.example.org/record/f-1",
        "@type": ["rico:Record", "bf:Archival"],
        "rico:title": [
            {"@value": "Letters", "@language": "en"},
            {"@value": "Briefe", "@language": "de"}
        ],
        "rico:hasOrHadCreator": [{"@id": "urn:a"}, {"@id": "urn:b"}],
        "rico:date": {"@value": "1901", "@type": "xsd:gYear"},
        "rico:isOrWasDigitized": true,
        "rico:count": 42,
        "rico:width": 2.5,
        "rico:history": {"@value": 12.75},
        "dc:source": "https://example.org/source",
        "dc:description": "A \"quoted\" description\\ with\na line break and a\ttab",
        "http://purl.org/dc/terms/extent": "2 boxes",
        "http://purl.org/dc/terms/rights": {"@value": ""}
    }))?)
}

#[test]
fn typed_work() -> Result<()> {
    let work = Node::from_json(&json!({
        "@id": "http://example.org/work/1",
        "@type": "bf:Work",
        "bf:title": {"@value": "Letters"}
    }))?;
    check_parseable_exports(&exporter()?, &work, &ExportOptions::default())
}

#[test]
fn record_with_every_value_kind() -> Result<()> {
    let exporter = exporter()?;
    let record = record()?;
    check_parseable_exports(&exporter, &record, &ExportOptions::default())?;
    check_parseable_exports(
        &exporter,
        &record,
        &ExportOptions::default().with_pretty_print(false),
    )
}

#[test]
fn multi_valued_predicates_give_one_triple_per_value() -> Result<()> {
    let exporter = exporter()?;
    let record = record()?;
    for format in [RdfFormat::Turtle, RdfFormat::NTriples, RdfFormat::RdfXml] {
        let export = exporter.serialize(&record, &ExportOptions::default().with_output_format(format))?;
        let graph = parse_graph(format, export.content())?;
        let creators = graph
            .iter()
            .filter(|t| t.predicate.as_str() == "https://www.ica.org/standards/RiC/ontology#hasOrHadCreator")
            .count();
        assert_eq!(creators, 2, "{format}");
    }
    Ok(())
}

#[test]
#[allow(clippy::non_ascii_literal)]
fn literal_escaping_survives_parsing() -> Result<()> {
    let exporter = exporter()?;
    let tricky = "quote \" backslash \\ newline \n carriage \r tab \t unicode é 𝄞 <tag> & amp";
    let node = Node::new()
        .with_id("urn:x")
        .with_value("dc:title", tricky)
        .with_value("dc:description", Literal::new_language_tagged(tricky, "fr"));
    check_parseable_exports(&exporter, &node, &ExportOptions::default())
}

#[test]
fn anonymous_and_nested_nodes() -> Result<()> {
    let exporter = exporter()?;
    let record = Node::new()
        .with_type("rico:Record")
        .with_value(
            "rico:hasOrHadSubject",
            Node::new()
                .with_type("rico:Place")
                .with_value("rico:name", "Cape Town")
                .with_value(
                    "rico:isOrWasPartOf",
                    Node::new().with_id("urn:country:za").with_value("rico:name", "South Africa"),
                ),
        )
        .with_value("rico:hasOrHadSubject", Value::resource("urn:subject:2"));

    check_parseable_exports(&exporter, &record, &ExportOptions::default())?;
    check_parseable_exports(
        &exporter,
        &record,
        &ExportOptions::default().with_flatten_nested(true),
    )
}

#[test]
fn blank_node_identifiers() -> Result<()> {
    let exporter = exporter()?;
    let record = Node::from_json(&json!({
        "@id": "_:b0",
        "@type": "rico:Record",
        "rico:hasOrHadSubject": {"@id": "_:b1"},
        "rico:isOrWasPartOf": {"@id": "_:b2", "rico:title": "Fonds"}
    }))?;
    check_parseable_exports(&exporter, &record, &ExportOptions::default())?;
    check_parseable_exports(
        &exporter,
        &record,
        &ExportOptions::default().with_flatten_nested(true),
    )
}

#[test]
fn type_position_is_kept() -> Result<()> {
    let node = Node::from_json(&json!({
        "@id": "urn:x",
        "rico:title": "t",
        "@type": "rico:Record"
    }))?;
    let export = exporter()?.serialize(
        &node,
        &ExportOptions::default().with_output_format(RdfFormat::NTriples),
    )?;
    let predicates = export
        .content()
        .lines()
        .filter_map(|line| line.split(' ').nth(1))
        .collect::<Vec<_>>();
    assert_eq!(
        predicates,
        [
            "<https://www.ica.org/standards/RiC/ontology#title>",
            "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>",
        ]
    );
    Ok(())
}

#[test]
fn unregistered_namespaces() -> Result<()> {
    let node = Node::new()
        .with_id("http://example.org/thing/1")
        .with_type("http://schema.org/CreativeWork")
        .with_value("http://schema.org/name", "Thing")
        .with_value("http://example.org/vocab#weight", 3)
        .with_value("http://example.org/vocab#partOf", Value::resource("http://example.org/thing/2"));
    check_parseable_exports(&exporter()?, &node, &ExportOptions::default())
}

#[test]
fn strict_plain_strings() -> Result<()> {
    let exporter = Exporter::new(config()?.with_plain_strings(PlainStringPolicy::Literal));
    let node = Node::new()
        .with_id("urn:x")
        .with_value("dc:source", "https://example.org/not-a-link")
        .with_value("dc:relation", Value::resource("https://example.org/a-link"));
    check_parseable_exports(&exporter, &node, &ExportOptions::default())?;

    let export = exporter.serialize(
        &node,
        &ExportOptions::default().with_output_format(RdfFormat::NTriples),
    )?;
    assert!(export
        .content()
        .contains("<http://purl.org/dc/elements/1.1/source> \"https://example.org/not-a-link\" ."));
    Ok(())
}

#[test]
fn each_format_checked_alone() -> Result<()> {
    let exporter = exporter()?;
    let record = record()?;
    for format in [RdfFormat::Turtle, RdfFormat::NTriples, RdfFormat::RdfXml] {
        check_export(
            &exporter,
            &record,
            &ExportOptions::default().with_output_format(format),
        )?;
    }
    assert!(parse_graph(RdfFormat::JsonLd, "{}").is_err());
    Ok(())
}
