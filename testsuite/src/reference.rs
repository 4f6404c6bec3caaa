use anyhow::{ensure, Context, Result};
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{BlankNode, Graph, Literal, NamedNode, Subject, Term, Triple};
use rdf_export::formats::{IdentifierGenerator, PlainStringPolicy};
use rdf_export::model::{blank_node_label, LiteralKind, NamespaceRegistry, Node, Value};
use rdf_export::{ExportOptions, Exporter, RdfFormat};

/// How nodes without an `@id` are identified.
#[derive(Clone, Copy)]
pub enum Anonymous<'a> {
    /// By the identifiers the flat serializers synthesize.
    Minted(&'a IdentifierGenerator),
    /// By fresh blank nodes, as the node elements of RDF/XML without `rdf:about`.
    Blank,
}

/// Builds the triples a graph stands for, without going through any serializer.
#[derive(Clone, Copy)]
pub struct ReferenceWalk<'a> {
    namespaces: &'a NamespaceRegistry,
    plain_strings: PlainStringPolicy,
    anonymous: Anonymous<'a>,
    recursive: bool,
}

impl<'a> ReferenceWalk<'a> {
    pub fn new(
        namespaces: &'a NamespaceRegistry,
        plain_strings: PlainStringPolicy,
        anonymous: Anonymous<'a>,
        recursive: bool,
    ) -> Self {
        Self {
            namespaces,
            plain_strings,
            anonymous,
            recursive,
        }
    }

    /// The walk matching what `exporter` writes in `format`.
    ///
    /// RDF/XML always writes nested nodes in full, the flat formats only if
    /// [`ExportOptions::flatten_nested`] is set.
    pub fn for_format(exporter: &'a Exporter, format: RdfFormat, options: &ExportOptions) -> Self {
        let (anonymous, recursive) = match format {
            RdfFormat::RdfXml => (Anonymous::Blank, true),
            RdfFormat::JsonLd | RdfFormat::Turtle | RdfFormat::NTriples => (
                Anonymous::Minted(exporter.identifiers()),
                options.flatten_nested,
            ),
        };
        Self::new(
            exporter.namespaces(),
            exporter.plain_strings(),
            anonymous,
            recursive,
        )
    }

    pub fn graph(&self, node: &Node) -> Result<Graph> {
        let mut graph = Graph::new();
        self.walk(node, &mut graph)?;
        Ok(graph)
    }

    fn walk(&self, node: &Node, graph: &mut Graph) -> Result<Subject> {
        let subject = self.subject(node)?;
        for node_type in node.types() {
            graph.insert(&Triple::new(
                subject.clone(),
                rdf::TYPE,
                self.named_node(node_type)?,
            ));
        }
        for property in node.properties() {
            let predicate = self.named_node(property.predicate())?;
            for value in property.values() {
                let object = self
                    .object(value, graph)
                    .with_context(|| format!("Invalid value of {}", property.predicate()))?;
                graph.insert(&Triple::new(subject.clone(), predicate.clone(), object));
            }
        }
        Ok(subject)
    }

    fn subject(&self, node: &Node) -> Result<Subject> {
        Ok(match (node.id(), self.anonymous) {
            (Some(id), _) => self.resource(id)?,
            (None, Anonymous::Minted(identifiers)) => {
                NamedNode::new(identifiers.generate(node))?.into()
            }
            (None, Anonymous::Blank) => BlankNode::default().into(),
        })
    }

    fn object(&self, value: &Value, graph: &mut Graph) -> Result<Term> {
        Ok(match value {
            Value::Literal(literal) => match literal.kind() {
                LiteralKind::Simple => Literal::new_simple_literal(literal.value()).into(),
                LiteralKind::LanguageTagged(language) => {
                    Literal::new_language_tagged_literal(literal.value(), language)?.into()
                }
                LiteralKind::Typed(datatype) => {
                    Literal::new_typed_literal(literal.value(), self.named_node(datatype)?).into()
                }
            },
            Value::Resource(id) => self.resource(id)?.into(),
            Value::Nested(child) if self.recursive => self.walk(child, graph)?.into(),
            Value::Nested(child) => self.subject(child)?.into(),
            Value::String(value) if self.plain_strings.is_resource(value) => {
                NamedNode::new(value.as_str())?.into()
            }
            Value::String(value) => Literal::new_simple_literal(value.as_str()).into(),
            Value::Boolean(value) => Literal::new_typed_literal(value.to_string(), xsd::BOOLEAN).into(),
            Value::Integer(value) => Literal::new_typed_literal(value.to_string(), xsd::INTEGER).into(),
            Value::Decimal(value) => {
                ensure!(value.is_finite(), "{value} has no RDF representation");
                Literal::new_typed_literal(value.to_string(), xsd::DECIMAL).into()
            }
        })
    }

    /// A `_:label` identifier is a blank node, anything else a named node.
    fn resource(&self, id: &str) -> Result<Subject> {
        Ok(match blank_node_label(id) {
            Some(label) => BlankNode::new(label)?.into(),
            None => self.named_node(id)?.into(),
        })
    }

    fn named_node(&self, name: &str) -> Result<NamedNode> {
        NamedNode::new(self.namespaces.expand(name).into_owned())
            .with_context(|| format!("'{name}' does not expand to an absolute IRI"))
    }
}
