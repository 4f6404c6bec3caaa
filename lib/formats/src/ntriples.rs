use crate::escape::{write_iri, write_ntriples_string};
use crate::triple::blank_node;
use crate::{IdentifierGenerator, Object, PlainStringPolicy, SerializationError, Triple, TripleExtractor};
use rdf_export_model::vocab::xsd;
use rdf_export_model::{LiteralKind, NamespaceRegistry, Node};

/// A [N-Triples](https://www.w3.org/TR/n-triples/) serializer.
///
/// Every IRI is written in full: prefixed names, including `rdf:type`, are expanded through the
/// registry.
///
/// ```
/// use rdf_export_formats::{IdentifierGenerator, IdentifierStrategy, NTriplesSerializer};
/// use rdf_export_model::{NamespaceRegistry, Node};
///
/// let namespaces = NamespaceRegistry::with_well_known()
///     .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")?;
/// let identifiers = IdentifierGenerator::new("https://example.org", IdentifierStrategy::ContentHash);
/// let work = Node::new().with_id("http://example.org/work/1").with_type("bf:Work");
///
/// assert_eq!(
///     NTriplesSerializer::new(&namespaces, &identifiers).serialize(&work)?,
///     "<http://example.org/work/1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://id.loc.gov/ontologies/bibframe/Work> .\n"
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NTriplesSerializer<'a> {
    namespaces: &'a NamespaceRegistry,
    identifiers: &'a IdentifierGenerator,
    plain_strings: PlainStringPolicy,
    flatten: bool,
}

impl<'a> NTriplesSerializer<'a> {
    pub fn new(namespaces: &'a NamespaceRegistry, identifiers: &'a IdentifierGenerator) -> Self {
        Self {
            namespaces,
            identifiers,
            plain_strings: PlainStringPolicy::default(),
            flatten: false,
        }
    }

    #[must_use]
    pub fn with_plain_strings(mut self, policy: PlainStringPolicy) -> Self {
        self.plain_strings = policy;
        self
    }

    /// Also writes the triples of nested nodes.
    #[must_use]
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    pub fn serialize(&self, node: &Node) -> Result<String, SerializationError> {
        let triples = TripleExtractor::new(self.namespaces, self.identifiers)
            .with_plain_strings(self.plain_strings)
            .extract_all(node, self.flatten);
        tracing::trace!(triples = triples.len(), "Writing N-Triples");

        let mut output = String::new();
        for triple in &triples {
            self.write_triple(&mut output, triple)?;
            output.push('\n');
        }
        Ok(output)
    }

    /// Formats a single triple, without the trailing line break.
    pub fn format_triple(&self, triple: &Triple) -> Result<String, SerializationError> {
        let mut output = String::new();
        self.write_triple(&mut output, triple)?;
        Ok(output)
    }

    fn write_triple(&self, output: &mut String, triple: &Triple) -> Result<(), SerializationError> {
        self.write_node(output, &triple.subject)?;
        output.push(' ');
        self.write_expanded(output, &triple.predicate);
        output.push(' ');
        match &triple.object {
            Object::Resource(id) => self.write_node(output, id)?,
            Object::Literal(literal) => {
                write_ntriples_string(output, literal.value());
                match literal.kind() {
                    LiteralKind::Simple => {}
                    LiteralKind::LanguageTagged(language) => {
                        output.push('@');
                        output.push_str(language);
                    }
                    LiteralKind::Typed(datatype) => {
                        output.push_str("^^");
                        self.write_expanded(output, datatype);
                    }
                }
            }
            Object::String(value) => write_ntriples_string(output, value),
            Object::Boolean(value) => write_typed(output, &value.to_string(), xsd::BOOLEAN),
            Object::Integer(value) => write_typed(output, &value.to_string(), xsd::INTEGER),
            Object::Decimal(value) => {
                if !value.is_finite() {
                    return Err(SerializationError::NonFiniteNumber {
                        predicate: triple.predicate.clone(),
                    });
                }
                write_typed(output, &value.to_string(), xsd::DECIMAL);
            }
        }
        output.push_str(" .");
        Ok(())
    }

    fn write_node(&self, output: &mut String, id: &str) -> Result<(), SerializationError> {
        match blank_node(id)? {
            Some(label) => {
                output.push_str("_:");
                output.push_str(label);
            }
            None => self.write_expanded(output, id),
        }
        Ok(())
    }

    fn write_expanded(&self, output: &mut String, name: &str) {
        write_iri(output, &self.namespaces.expand(name));
    }
}

fn write_typed(output: &mut String, value: &str, datatype: &str) {
    write_ntriples_string(output, value);
    output.push_str("^^");
    write_iri(output, datatype);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdentifierStrategy;
    use rdf_export_model::{Literal, Value};

    fn namespaces() -> NamespaceRegistry {
        NamespaceRegistry::with_well_known()
            .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")
            .unwrap()
    }

    fn identifiers() -> IdentifierGenerator {
        IdentifierGenerator::new("https://example.org", IdentifierStrategy::ContentHash)
    }

    #[test]
    fn everything_is_expanded() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let node = Node::new()
            .with_id("bf:w1")
            .with_value("bf:title", Literal::new_language_tagged("Letters", "en"))
            .with_value("bf:date", Literal::new_typed("1901", "xsd:gYear"))
            .with_value("bf:relatedTo", Value::resource("bf:w2"))
            .with_value("bf:count", 2)
            .with_value("bf:flag", false)
            .with_value("bf:ratio", 0.25);

        let ntriples = NTriplesSerializer::new(&namespaces, &identifiers)
            .serialize(&node)
            .unwrap();
        let w1 = "<http://id.loc.gov/ontologies/bibframe/w1>";
        let expected = [
            format!("{w1} <http://id.loc.gov/ontologies/bibframe/title> \"Letters\"@en ."),
            format!("{w1} <http://id.loc.gov/ontologies/bibframe/date> \"1901\"^^<http://www.w3.org/2001/XMLSchema#gYear> ."),
            format!("{w1} <http://id.loc.gov/ontologies/bibframe/relatedTo> <http://id.loc.gov/ontologies/bibframe/w2> ."),
            format!("{w1} <http://id.loc.gov/ontologies/bibframe/count> \"2\"^^<http://www.w3.org/2001/XMLSchema#integer> ."),
            format!("{w1} <http://id.loc.gov/ontologies/bibframe/flag> \"false\"^^<http://www.w3.org/2001/XMLSchema#boolean> ."),
            format!("{w1} <http://id.loc.gov/ontologies/bibframe/ratio> \"0.25\"^^<http://www.w3.org/2001/XMLSchema#decimal> ."),
        ];
        assert_eq!(ntriples.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn strict_literal_escaping() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let node = Node::new()
            .with_id("urn:x")
            .with_value("bf:note", "a \"quoted\"\tword\\\nnext line");
        let ntriples = NTriplesSerializer::new(&namespaces, &identifiers)
            .serialize(&node)
            .unwrap();
        assert_eq!(
            ntriples,
            "<urn:x> <http://id.loc.gov/ontologies/bibframe/note> \"a \\\"quoted\\\"\\tword\\\\\\nnext line\" .\n"
        );
    }

    #[test]
    fn blank_node_identifiers() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        let node = Node::new()
            .with_id("_:b0")
            .with_value("bf:relatedTo", Value::resource("_:b1"));
        assert_eq!(
            NTriplesSerializer::new(&namespaces, &identifiers)
                .serialize(&node)
                .unwrap(),
            "_:b0 <http://id.loc.gov/ontologies/bibframe/relatedTo> _:b1 .\n"
        );
    }

    #[test]
    fn empty_node_produces_no_output() {
        let namespaces = namespaces();
        let identifiers = identifiers();
        assert_eq!(
            NTriplesSerializer::new(&namespaces, &identifiers)
                .serialize(&Node::new().with_id("urn:x"))
                .unwrap(),
            ""
        );
    }
}
