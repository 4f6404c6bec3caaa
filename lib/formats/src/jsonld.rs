use crate::SerializationError;
use rdf_export_model::{NamespaceRegistry, Node, Value};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value as JsonValue};

/// The `@context` written at the top of a JSON-LD document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JsonLdContext {
    /// An inline context object, usually a prefix table.
    Inline(Map<String, JsonValue>),
    /// The URL of an external context document.
    Remote(String),
}

impl Default for JsonLdContext {
    fn default() -> Self {
        Self::Inline(Map::new())
    }
}

impl JsonLdContext {
    /// An inline context mapping every registered prefix to its namespace.
    pub fn from_namespaces(namespaces: &NamespaceRegistry) -> Self {
        Self::Inline(
            namespaces
                .iter()
                .map(|ns| (ns.prefix().to_owned(), JsonValue::String(ns.uri().to_owned())))
                .collect(),
        )
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote(url.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Inline(terms) => terms.is_empty(),
            Self::Remote(url) => url.is_empty(),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Inline(terms) => JsonValue::Object(terms.clone()),
            Self::Remote(url) => JsonValue::String(url.clone()),
        }
    }
}

/// A [JSON-LD](https://www.w3.org/TR/json-ld11/) serializer.
///
/// The graph model already is a JSON-LD node object, so serialization only prepends the
/// `@context`. Slashes and non-ASCII characters are written unescaped.
///
/// ```
/// use rdf_export_formats::{JsonLdContext, JsonLdSerializer};
/// use rdf_export_model::{Literal, NamespaceRegistry, Node};
///
/// let namespaces = NamespaceRegistry::new().with_namespace("dc", "http://purl.org/dc/elements/1.1/")?;
/// let context = JsonLdContext::from_namespaces(&namespaces);
/// let node = Node::new()
///     .with_id("http://example.org/record/1")
///     .with_value("dc:title", Literal::new_language_tagged("Café", "fr"));
///
/// assert_eq!(
///     JsonLdSerializer::new(&context).with_pretty_print(false).serialize(&node)?,
///     r#"{"@context":{"dc":"http://purl.org/dc/elements/1.1/"},"@id":"http://example.org/record/1","dc:title":{"@value":"Café","@language":"fr"}}"#
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct JsonLdSerializer<'a> {
    context: &'a JsonLdContext,
    include_context: bool,
    pretty_print: bool,
}

impl<'a> JsonLdSerializer<'a> {
    pub fn new(context: &'a JsonLdContext) -> Self {
        Self {
            context,
            include_context: true,
            pretty_print: true,
        }
    }

    #[must_use]
    pub fn with_context(mut self, include_context: bool) -> Self {
        self.include_context = include_context;
        self
    }

    /// Indents the output with four spaces.
    #[must_use]
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn serialize(&self, node: &Node) -> Result<String, SerializationError> {
        check_finite(node)?;

        let mut document = Map::new();
        if self.include_context && !self.context.is_empty() {
            document.insert("@context".to_owned(), self.context.to_json());
        }
        if let JsonValue::Object(body) = node.to_json() {
            document.extend(body);
        }
        let document = JsonValue::Object(document);

        let mut buffer = Vec::new();
        if self.pretty_print {
            let mut serializer = serde_json::Serializer::with_formatter(
                &mut buffer,
                PrettyFormatter::with_indent(b"    "),
            );
            document.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(&mut buffer, &document)?;
        }
        Ok(String::from_utf8(buffer)?)
    }
}

/// Non-finite decimals would silently become `null`.
fn check_finite(node: &Node) -> Result<(), SerializationError> {
    for property in node.properties() {
        for value in property.values() {
            match value {
                Value::Decimal(value) if !value.is_finite() => {
                    return Err(SerializationError::NonFiniteNumber {
                        predicate: property.predicate().to_owned(),
                    });
                }
                Value::Nested(node) => check_finite(node)?,
                _ => {}
            }
        }
    }
    Ok(())
}
