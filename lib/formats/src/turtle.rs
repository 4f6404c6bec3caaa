use crate::escape::{write_iri, write_turtle_string};
use crate::triple::blank_node;
use crate::{IdentifierGenerator, Object, PlainStringPolicy, SerializationError, Triple, TripleExtractor};
use rdf_export_model::vocab::xsd;
use rdf_export_model::{LiteralKind, NamespaceRegistry, Node};

/// A [Turtle](https://www.w3.org/TR/turtle/) serializer writing one triple per line.
///
/// ```
/// use rdf_export_formats::{IdentifierGenerator, IdentifierStrategy, TurtleSerializer};
/// use rdf_export_model::{Literal, NamespaceRegistry, Node};
///
/// let namespaces = NamespaceRegistry::with_well_known()
///     .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")?;
/// let identifiers = IdentifierGenerator::new("https://example.org", IdentifierStrategy::ContentHash);
/// let work = Node::new()
///     .with_id("http://example.org/work/1")
///     .with_type("bf:Work")
///     .with_value("bf:title", Literal::new_simple("Letters"));
///
/// let turtle = TurtleSerializer::new(&namespaces, &identifiers).serialize(&work)?;
/// assert!(turtle.contains("<http://example.org/work/1> rdf:type bf:Work .\n"));
/// assert!(turtle.contains("<http://example.org/work/1> bf:title \"Letters\" .\n"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TurtleSerializer<'a> {
    namespaces: &'a NamespaceRegistry,
    identifiers: &'a IdentifierGenerator,
    plain_strings: PlainStringPolicy,
    flatten: bool,
}

impl<'a> TurtleSerializer<'a> {
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

    /// Writes the `@prefix` declarations of every registered namespace, a blank line and the
    /// triples of `node`.
    pub fn serialize(&self, node: &Node) -> Result<String, SerializationError> {
        let mut output = String::new();
        for namespace in self.namespaces {
            output.push_str("@prefix ");
            output.push_str(namespace.prefix());
            output.push_str(": ");
            write_iri(&mut output, namespace.uri());
            output.push_str(" .\n");
        }
        output.push('\n');

        let triples = TripleExtractor::new(self.namespaces, self.identifiers)
            .with_plain_strings(self.plain_strings)
            .extract_all(node, self.flatten);
        tracing::trace!(triples = triples.len(), "Writing Turtle");
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
        self.write_name(output, &triple.predicate);
        output.push(' ');
        match &triple.object {
            Object::Resource(id) => self.write_node(output, id)?,
            Object::Literal(literal) => {
                write_turtle_string(output, literal.value());
                match literal.kind() {
                    LiteralKind::Simple => {}
                    LiteralKind::LanguageTagged(language) => {
                        output.push('@');
                        output.push_str(language);
                    }
                    LiteralKind::Typed(datatype) => {
                        output.push_str("^^");
                        self.write_name(output, datatype);
                    }
                }
            }
            Object::String(value) => write_turtle_string(output, value),
            Object::Boolean(value) => self.write_typed(output, &value.to_string(), xsd::BOOLEAN),
            Object::Integer(value) => self.write_typed(output, &value.to_string(), xsd::INTEGER),
            Object::Decimal(value) => {
                if !value.is_finite() {
                    return Err(SerializationError::NonFiniteNumber {
                        predicate: triple.predicate.clone(),
                    });
                }
                self.write_typed(output, &value.to_string(), xsd::DECIMAL);
            }
        }
        output.push_str(" .");
        Ok(())
    }

    fn write_typed(&self, output: &mut String, value: &str, datatype: &str) {
        write_turtle_string(output, value);
        output.push_str("^^");
        self.write_name(output, datatype);
    }

    /// Writes a subject or resource object: `_:label` for a blank node, else as [`Self::write_name`].
    fn write_node(&self, output: &mut String, id: &str) -> Result<(), SerializationError> {
        match blank_node(id)? {
            Some(label) => {
                output.push_str("_:");
                output.push_str(label);
            }
            None => self.write_name(output, id),
        }
        Ok(())
    }

    /// Writes a prefixed name if a registered namespace covers the (expanded) IRI, else the full
    /// IRI in angle brackets.
    fn write_name(&self, output: &mut String, name: &str) {
        let iri = self.namespaces.expand(name);
        match self.namespaces.compact(&iri) {
            Some(compacted) => output.push_str(&compacted),
            None => write_iri(output, &iri),
        }
    }
}
