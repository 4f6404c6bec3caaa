use crate::triple::blank_node;
use crate::{PlainStringPolicy, SerializationError};
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rdf_export_model::vocab::{rdf, xsd};
use rdf_export_model::{is_absolute_iri, LiteralKind, NamespaceRegistry, Node, Value};

/// `rdf:` names that are syntax, not vocabulary, and cannot name a node or property element.
const RESERVED_RDF_NAMES: [&str; 11] = [
    "RDF",
    "ID",
    "about",
    "bagID",
    "parseType",
    "resource",
    "nodeID",
    "li",
    "aboutEach",
    "aboutEachPrefix",
    "datatype",
];

/// The content of an [`XmlElement`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum XmlContent {
    Text(String),
    Children(Vec<XmlElement>),
}

/// A qualified XML element with its attributes, in document order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    content: XmlContent,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: XmlContent::Children(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The value of the attribute with the given qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn content(&self) -> &XmlContent {
        &self.content
    }

    /// The child elements, empty for a text element.
    pub fn children(&self) -> &[XmlElement] {
        match &self.content {
            XmlContent::Children(children) => children,
            XmlContent::Text(_) => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            XmlContent::Text(text) => Some(text),
            XmlContent::Children(_) => None,
        }
    }

    fn push_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.push((name.to_owned(), value.into()));
    }

    fn push_child(&mut self, child: XmlElement) {
        match &mut self.content {
            XmlContent::Children(children) => children.push(child),
            XmlContent::Text(_) => self.content = XmlContent::Children(vec![child]),
        }
    }
}

/// An RDF/XML document: one node element inside `rdf:RDF`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RdfXmlDocument {
    declarations: Vec<(String, String)>,
    description: XmlElement,
}

impl RdfXmlDocument {
    /// The `(prefix, namespace)` pairs declared on the root element. `rdf` always comes first.
    pub fn declarations(&self) -> &[(String, String)] {
        &self.declarations
    }

    /// The node element of the described resource.
    pub fn description(&self) -> &XmlElement {
        &self.description
    }

    /// Writes the document, indented by two spaces if `pretty_print` is set.
    pub fn write(&self, pretty_print: bool) -> Result<String, SerializationError> {
        let mut writer = if pretty_print {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(SerializationError::xml)?;

        let mut root = BytesStart::new("rdf:RDF");
        for (prefix, uri) in &self.declarations {
            root.push_attribute((format!("xmlns:{prefix}").as_str(), uri.as_str()));
        }
        writer
            .write_event(Event::Start(root))
            .map_err(SerializationError::xml)?;
        write_element(&mut writer, &self.description)?;
        writer
            .write_event(Event::End(BytesEnd::new("rdf:RDF")))
            .map_err(SerializationError::xml)?;

        let mut buffer = writer.into_inner();
        buffer.push(b'\n');
        Ok(String::from_utf8(buffer)?)
    }
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &XmlElement,
) -> Result<(), SerializationError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    match &element.content {
        XmlContent::Children(children) if children.is_empty() => writer
            .write_event(Event::Empty(start))
            .map_err(SerializationError::xml),
        XmlContent::Children(children) => {
            writer
                .write_event(Event::Start(start))
                .map_err(SerializationError::xml)?;
            for child in children {
                write_element(writer, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(element.name.as_str())))
                .map_err(SerializationError::xml)
        }
        // An empty literal keeps its start and end tags: `<p/>` can not carry `rdf:datatype`.
        // Carriage returns are written as references, XML parsers normalize raw ones to `\n`.
        XmlContent::Text(text) => {
            writer
                .write_event(Event::Start(start))
                .map_err(SerializationError::xml)?;
            let escaped = escape(text).replace('\r', "&#13;");
            writer
                .write_event(Event::Text(BytesText::from_escaped(escaped)))
                .map_err(SerializationError::xml)?;
            writer
                .write_event(Event::End(BytesEnd::new(element.name.as_str())))
                .map_err(SerializationError::xml)
        }
    }
}

/// A [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/) serializer.
///
/// The node tree is mapped to XML directly: the node becomes an element named after its first
/// type, each value a property element, repeated for multi-valued properties, and nested nodes
/// become node elements inside their property element. Only the namespaces actually used are
/// declared.
///
/// ```
/// use rdf_export_formats::RdfXmlSerializer;
/// use rdf_export_model::{Literal, NamespaceRegistry, Node};
///
/// let namespaces = NamespaceRegistry::with_well_known()
///     .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")?;
/// let work = Node::new()
///     .with_id("http://example.org/work/1")
///     .with_type("bf:Work")
///     .with_value("bf:title", Literal::new_language_tagged("Letters", "en"));
///
/// assert_eq!(
///     RdfXmlSerializer::new(&namespaces).serialize(&work)?,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
///      <rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\" xmlns:bf=\"http://id.loc.gov/ontologies/bibframe/\">\n  \
///        <bf:Work rdf:about=\"http://example.org/work/1\">\n    \
///          <bf:title xml:lang=\"en\">Letters</bf:title>\n  \
///        </bf:Work>\n\
///      </rdf:RDF>\n"
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RdfXmlSerializer<'a> {
    namespaces: &'a NamespaceRegistry,
    plain_strings: PlainStringPolicy,
    pretty_print: bool,
}

impl<'a> RdfXmlSerializer<'a> {
    pub fn new(namespaces: &'a NamespaceRegistry) -> Self {
        Self {
            namespaces,
            plain_strings: PlainStringPolicy::default(),
            pretty_print: true,
        }
    }

    #[must_use]
    pub fn with_plain_strings(mut self, policy: PlainStringPolicy) -> Self {
        self.plain_strings = policy;
        self
    }

    #[must_use]
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    /// Maps `node` to an element tree without writing it.
    pub fn build(&self, node: &Node) -> Result<RdfXmlDocument, SerializationError> {
        let mut names = QNames {
            namespaces: self.namespaces,
            declarations: vec![(rdf::PREFIX.to_owned(), rdf::NAMESPACE.to_owned())],
            generated: 0,
        };
        let description = self.node_element(node, &mut names)?;
        tracing::trace!(
            namespaces = names.declarations.len(),
            "Built RDF/XML element tree"
        );
        Ok(RdfXmlDocument {
            declarations: names.declarations,
            description,
        })
    }

    pub fn serialize(&self, node: &Node) -> Result<String, SerializationError> {
        self.build(node)?.write(self.pretty_print)
    }

    fn node_element(
        &self,
        node: &Node,
        names: &mut QNames<'_>,
    ) -> Result<XmlElement, SerializationError> {
        let types = node
            .types()
            .iter()
            .map(|node_type| self.namespaces.expand(node_type).into_owned())
            .collect::<Vec<_>>();
        let typed_name = types
            .first()
            .and_then(|first| names.qualify(first))
            .filter(|name| !is_reserved(name));

        let mut element = XmlElement::new(
            typed_name
                .clone()
                .unwrap_or_else(|| format!("{}:Description", rdf::PREFIX)),
        );
        if let Some(id) = node.id() {
            match blank_node(id)? {
                Some(label) => element.push_attribute("rdf:nodeID", label),
                None => element.push_attribute("rdf:about", self.namespaces.expand(id)),
            }
        }

        let skipped_types = usize::from(typed_name.is_some());
        for node_type in &types[skipped_types..] {
            let mut type_element = XmlElement::new("rdf:type".to_owned());
            type_element.push_attribute("rdf:resource", node_type.as_str());
            element.push_child(type_element);
        }

        for property in node.properties() {
            let predicate = self.namespaces.expand(property.predicate());
            let name = names
                .qualify(&predicate)
                .filter(|name| !is_reserved(name) && name != "rdf:Description")
                .ok_or_else(|| SerializationError::InvalidElementName {
                    predicate: property.predicate().to_owned(),
                })?;
            for value in property.values() {
                let child = self.property_element(name.clone(), property.predicate(), value, names)?;
                element.push_child(child);
            }
        }
        Ok(element)
    }

    fn property_element(
        &self,
        name: String,
        predicate: &str,
        value: &Value,
        names: &mut QNames<'_>,
    ) -> Result<XmlElement, SerializationError> {
        let mut element = XmlElement::new(name);
        match value {
            Value::Resource(id) => match blank_node(id)? {
                Some(label) => element.push_attribute("rdf:nodeID", label),
                None => element.push_attribute("rdf:resource", self.namespaces.expand(id)),
            },
            Value::String(value) if self.plain_strings.is_resource(value) => {
                element.push_attribute("rdf:resource", value.as_str());
            }
            Value::Nested(node) => element.push_child(self.node_element(node, names)?),
            Value::Literal(literal) => {
                match literal.kind() {
                    LiteralKind::Simple => {}
                    LiteralKind::LanguageTagged(language) => {
                        element.push_attribute("xml:lang", language.as_str());
                    }
                    LiteralKind::Typed(datatype) => {
                        element.push_attribute("rdf:datatype", self.namespaces.expand(datatype));
                    }
                }
                element.content = XmlContent::Text(literal.value().to_owned());
            }
            Value::String(value) => element.content = XmlContent::Text(value.clone()),
            Value::Boolean(value) => typed_text(&mut element, value.to_string(), xsd::BOOLEAN),
            Value::Integer(value) => typed_text(&mut element, value.to_string(), xsd::INTEGER),
            Value::Decimal(value) => {
                if !value.is_finite() {
                    return Err(SerializationError::NonFiniteNumber {
                        predicate: predicate.to_owned(),
                    });
                }
                typed_text(&mut element, value.to_string(), xsd::DECIMAL);
            }
        }
        Ok(element)
    }
}

fn typed_text(element: &mut XmlElement, text: String, datatype: &str) {
    element.push_attribute("rdf:datatype", datatype);
    element.content = XmlContent::Text(text);
}

fn is_reserved(name: &str) -> bool {
    name.strip_prefix("rdf:")
        .is_some_and(|local| RESERVED_RDF_NAMES.contains(&local))
}

/// Turns IRIs into XML qualified names and records the namespaces they use.
struct QNames<'a> {
    namespaces: &'a NamespaceRegistry,
    declarations: Vec<(String, String)>,
    generated: usize,
}

impl QNames<'_> {
    fn qualify(&mut self, iri: &str) -> Option<String> {
        if let Some(local) = iri.strip_prefix(rdf::NAMESPACE) {
            return is_ncname(local).then(|| format!("{}:{local}", rdf::PREFIX));
        }
        if let Some((namespace, local)) = self.namespaces.split(iri) {
            if is_ncname(local) && is_declarable(namespace.prefix()) {
                self.declare(namespace.prefix(), namespace.uri());
                return Some(format!("{}:{local}", namespace.prefix()));
            }
        }
        if !is_absolute_iri(iri) {
            return None;
        }
        let split = iri.rfind(['#', '/'])? + 1;
        let (uri, local) = iri.split_at(split);
        if !is_ncname(local) {
            return None;
        }
        let prefix = match self.declarations.iter().find(|(_, declared)| declared == uri) {
            Some((prefix, _)) => prefix.clone(),
            None => {
                let prefix = self.generate_prefix();
                self.declare(&prefix, uri);
                prefix
            }
        };
        Some(format!("{prefix}:{local}"))
    }

    fn declare(&mut self, prefix: &str, uri: &str) {
        if !self.declarations.iter().any(|(declared, _)| declared == prefix) {
            self.declarations.push((prefix.to_owned(), uri.to_owned()));
        }
    }

    fn generate_prefix(&mut self) -> String {
        loop {
            self.generated += 1;
            let prefix = format!("ns{}", self.generated);
            if self.namespaces.get(&prefix).is_none()
                && !self.declarations.iter().any(|(declared, _)| *declared == prefix)
            {
                return prefix;
            }
        }
    }
}

/// `rdf` is bound to its own namespace, and names starting with `xml` are reserved.
fn is_declarable(prefix: &str) -> bool {
    prefix != rdf::PREFIX && !prefix.to_ascii_lowercase().starts_with("xml")
}

/// A conservative check of the XML `NCName` production.
fn is_ncname(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '\u{B7}'))
}
