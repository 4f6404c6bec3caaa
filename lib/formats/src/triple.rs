use crate::{IdentifierGenerator, PlainStringPolicy, SerializationError};
use rdf_export_model::vocab::rdf;
use rdf_export_model::{
    blank_node_label, is_blank_node_label, Literal, NamespaceRegistry, Node, Property, Value,
};

/// The object of a [`Triple`].
#[derive(Clone, PartialEq, Debug)]
pub enum Object {
    /// A reference to a resource. The identifier is kept as written by the graph builder and may
    /// still be a prefixed name.
    Resource(String),
    Literal(Literal),
    /// A bare string that the [`PlainStringPolicy`] classified as a literal.
    String(String),
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
}

/// A `(subject, predicate, object)` statement.
///
/// Subjects and predicates are kept as written by the graph builder; serializers compact or
/// expand them as their syntax requires.
#[derive(Clone, PartialEq, Debug)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Object,
}

/// Flattens a node into triples.
///
/// Extraction is not recursive: a nested node contributes a single triple pointing to its
/// identifier, but its own properties are only extracted if the node is extracted itself (see
/// [`flatten`] and [`TripleExtractor::extract_all`]).
///
/// ```
/// use rdf_export_formats::{IdentifierGenerator, IdentifierStrategy, Object, TripleExtractor};
/// use rdf_export_model::{NamespaceRegistry, Node, Value};
///
/// let namespaces = NamespaceRegistry::with_well_known()
///     .with_namespace("rico", "https://www.ica.org/standards/RiC/ontology#")?;
/// let identifiers = IdentifierGenerator::new("https://example.org", IdentifierStrategy::ContentHash);
/// let extractor = TripleExtractor::new(&namespaces, &identifiers);
///
/// let record = Node::new()
///     .with_id("urn:record")
///     .with_value("rico:hasOrHadCreator", Value::resource("urn:a"))
///     .with_value("rico:hasOrHadCreator", Value::resource("urn:b"));
/// let triples = extractor.extract(&record, None);
/// assert_eq!(triples.len(), 2);
/// assert_eq!(triples[1].object, Object::Resource("urn:b".to_owned()));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TripleExtractor<'a> {
    namespaces: &'a NamespaceRegistry,
    identifiers: &'a IdentifierGenerator,
    plain_strings: PlainStringPolicy,
}

impl<'a> TripleExtractor<'a> {
    pub fn new(namespaces: &'a NamespaceRegistry, identifiers: &'a IdentifierGenerator) -> Self {
        Self {
            namespaces,
            identifiers,
            plain_strings: PlainStringPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_plain_strings(mut self, policy: PlainStringPolicy) -> Self {
        self.plain_strings = policy;
        self
    }

    /// Extracts the triples of `node`.
    ///
    /// The subject is the node's `@id`, else `subject`, else a synthesized identifier. Triples
    /// follow the predicate order of the node, then the value order within each predicate. The
    /// types become `rdf:type` triples with expanded type IRIs, at the position of `@type`.
    pub fn extract(&self, node: &Node, subject: Option<&str>) -> Vec<Triple> {
        let subject = match (node.id(), subject) {
            (Some(id), _) | (None, Some(id)) => id.to_owned(),
            (None, None) => self.identifiers.generate(node),
        };

        let (before_types, after_types) = node.split_at_types();
        let mut triples = Vec::new();
        self.extract_properties(&subject, before_types, &mut triples);
        for node_type in node.types() {
            triples.push(Triple {
                subject: subject.clone(),
                predicate: rdf::TYPE_PREFIXED.to_owned(),
                object: Object::Resource(self.namespaces.expand(node_type).into_owned()),
            });
        }
        self.extract_properties(&subject, after_types, &mut triples);
        triples
    }

    /// Extracts the triples of `node` and, if `recursive` is set, of every node nested in it.
    pub fn extract_all(&self, node: &Node, recursive: bool) -> Vec<Triple> {
        if !recursive {
            return self.extract(node, None);
        }
        flatten(node, self.identifiers)
            .iter()
            .flat_map(|node| self.extract(node, None))
            .collect()
    }

    fn extract_properties(&self, subject: &str, properties: &[Property], triples: &mut Vec<Triple>) {
        for property in properties {
            for value in property.values() {
                triples.push(Triple {
                    subject: subject.to_owned(),
                    predicate: property.predicate().to_owned(),
                    object: self.object(value),
                });
            }
        }
    }

    fn object(&self, value: &Value) -> Object {
        match value {
            Value::Literal(literal) => Object::Literal(literal.clone()),
            Value::Resource(id) => Object::Resource(id.clone()),
            Value::Nested(node) => Object::Resource(self.identifiers.identify(node)),
            Value::String(value) if self.plain_strings.is_resource(value) => {
                Object::Resource(value.clone())
            }
            Value::String(value) => Object::String(value.clone()),
            Value::Boolean(value) => Object::Boolean(*value),
            Value::Integer(value) => Object::Integer(*value),
            Value::Decimal(value) => Object::Decimal(*value),
        }
    }
}

/// Returns the label of a `_:label` subject or object, or `None` if `id` names an IRI.
pub(crate) fn blank_node(id: &str) -> Result<Option<&str>, SerializationError> {
    match blank_node_label(id) {
        Some(label) if is_blank_node_label(label) => Ok(Some(label)),
        Some(_) => Err(SerializationError::InvalidBlankNode { id: id.to_owned() }),
        None => Ok(None),
    }
}

/// Splits a node tree into a list of flat nodes.
///
/// Every nested node is replaced by a reference to its identifier (synthesized if it has none)
/// and appended to the list, in pre-order. The first node is always `node` itself.
pub fn flatten(node: &Node, identifiers: &IdentifierGenerator) -> Vec<Node> {
    let mut nodes = Vec::new();
    flatten_into(node, identifiers, &mut nodes);
    nodes
}

fn flatten_into(node: &Node, identifiers: &IdentifierGenerator, nodes: &mut Vec<Node>) -> String {
    let id = identifiers.identify(node);
    let position = nodes.len();
    nodes.push(Node::new());

    let (before_types, after_types) = node.split_at_types();
    let mut flat = Node::new().with_id(id.as_str());
    flatten_properties(&mut flat, before_types, identifiers, nodes);
    for node_type in node.types() {
        flat.add_type(node_type.as_str());
    }
    flatten_properties(&mut flat, after_types, identifiers, nodes);
    for (keyword, value) in node.keywords() {
        flat.add_keyword(keyword.as_str(), value.clone());
    }
    nodes[position] = flat;
    id
}

fn flatten_properties(
    flat: &mut Node,
    properties: &[Property],
    identifiers: &IdentifierGenerator,
    nodes: &mut Vec<Node>,
) {
    for property in properties {
        let values = property
            .values()
            .iter()
            .map(|value| match value {
                Value::Nested(child) => Value::Resource(flatten_into(child, identifiers, nodes)),
                value => value.clone(),
            })
            .collect();
        flat.set_values(property.predicate(), values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdentifierStrategy;

    fn namespaces() -> NamespaceRegistry {
        NamespaceRegistry::with_well_known()
            .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")
            .unwrap()
    }

    fn identifiers() -> IdentifierGenerator {
        IdentifierGenerator::new("https://example.org", IdentifierStrategy::ContentHash)
    }

    #[test]
    fn types_become_expanded_rdf_type_triples() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let node = Node::new()
            .with_id("http://example.org/work/1")
            .with_type("bf:Work")
            .with_type("http://schema.org/CreativeWork")
            .with_value("bf:title", Literal::new_simple("Letters"));

        let triples = TripleExtractor::new(&namespaces, &identifiers).extract(&node, None);
        assert_eq!(
            triples,
            [
                Triple {
                    subject: "http://example.org/work/1".to_owned(),
                    predicate: "rdf:type".to_owned(),
                    object: Object::Resource("http://id.loc.gov/ontologies/bibframe/Work".to_owned()),
                },
                Triple {
                    subject: "http://example.org/work/1".to_owned(),
                    predicate: "rdf:type".to_owned(),
                    object: Object::Resource("http://schema.org/CreativeWork".to_owned()),
                },
                Triple {
                    subject: "http://example.org/work/1".to_owned(),
                    predicate: "bf:title".to_owned(),
                    object: Object::Literal(Literal::new_simple("Letters")),
                },
            ]
        );
    }

    #[test]
    fn types_keep_their_position() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let node = Node::from_json(&serde_json::json!({
            "@id": "urn:x",
            "bf:title": "t",
            "@type": "bf:Work",
            "bf:date": "1901"
        }))
        .unwrap();

        let extractor = TripleExtractor::new(&namespaces, &identifiers);
        let predicates = |triples: Vec<Triple>| {
            triples.into_iter().map(|t| t.predicate).collect::<Vec<_>>()
        };
        assert_eq!(
            predicates(extractor.extract(&node, None)),
            ["bf:title", "rdf:type", "bf:date"]
        );
        assert_eq!(
            predicates(extractor.extract_all(&node, true)),
            ["bf:title", "rdf:type", "bf:date"]
        );
    }

    #[test]
    fn subject_resolution() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let extractor = TripleExtractor::new(&namespaces, &identifiers);

        let identified = Node::new().with_id("urn:own").with_value("bf:note", "n");
        assert_eq!(extractor.extract(&identified, Some("urn:other"))[0].subject, "urn:own");

        let anonymous = Node::new().with_value("bf:note", "n");
        assert_eq!(extractor.extract(&anonymous, Some("urn:other"))[0].subject, "urn:other");
        assert_eq!(
            extractor.extract(&anonymous, None)[0].subject,
            identifiers.identify(&anonymous)
        );
    }

    #[test]
    fn nested_nodes_are_not_walked() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let place = Node::new().with_type("bf:Place").with_value("bf:code", "ZA");
        let node = Node::new()
            .with_id("urn:work")
            .with_value("bf:originPlace", place.clone());

        let triples = TripleExtractor::new(&namespaces, &identifiers).extract(&node, None);
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].object, Object::Resource(identifiers.identify(&place)));
    }

    #[test]
    fn plain_strings_follow_policy() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let node = Node::new()
            .with_id("urn:work")
            .with_value("bf:link", "https://example.org/page");

        let legacy = TripleExtractor::new(&namespaces, &identifiers).extract(&node, None);
        assert_eq!(
            legacy[0].object,
            Object::Resource("https://example.org/page".to_owned())
        );
        let strict = TripleExtractor::new(&namespaces, &identifiers)
            .with_plain_strings(PlainStringPolicy::Literal)
            .extract(&node, None);
        assert_eq!(strict[0].object, Object::String("https://example.org/page".to_owned()));
    }

    #[test]
    fn flatten_assigns_consistent_identifiers() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let agent = Node::new().with_id("urn:agent").with_value("bf:name", "Ada");
        let place = Node::new().with_value("bf:code", "ZA");
        let event = Node::new()
            .with_value("bf:place", place.clone())
            .with_value("bf:agent", agent);
        let work = Node::new().with_id("urn:work").with_value("bf:event", event.clone());

        let nodes = flatten(&work, &identifiers);
        let ids = nodes.iter().map(|n| n.id().unwrap_or_default()).collect::<Vec<_>>();
        let event_id = identifiers.identify(&event);
        let place_id = identifiers.identify(&place);
        assert_eq!(ids, ["urn:work", event_id.as_str(), place_id.as_str(), "urn:agent"]);
        assert_eq!(
            nodes[0].get("bf:event"),
            Some([Value::Resource(event_id)].as_slice())
        );

        let extractor = TripleExtractor::new(&namespaces, &identifiers);
        assert_eq!(extractor.extract_all(&work, false).len(), 1);
        assert_eq!(extractor.extract_all(&work, true).len(), 5);
    }
}
