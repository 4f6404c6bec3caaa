use crate::{Literal, Value};

/// A predicate together with its values, in insertion order.
///
/// A single-valued property is just a property with one value; the model does not distinguish it
/// from a singleton list.
#[derive(Clone, PartialEq, Debug)]
pub struct Property {
    predicate: String,
    values: Vec<Value>,
}

impl Property {
    pub fn new(predicate: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            predicate: predicate.into(),
            values,
        }
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// A described resource.
///
/// The reserved JSON-LD keys are held apart from the ordinary predicates: `@id` is the optional
/// identifier, `@type` the list of types. Any other `@`-keyword found when reading JSON is kept
/// verbatim so that the JSON-LD output can pass it through; the triple-based formats ignore it.
///
/// The position of the first type among the properties is remembered, so that `rdf:type`
/// statements keep the place `@type` had in the input.
///
/// ```
/// use rdf_export_model::{Node, Value};
///
/// let mut work = Node::new()
///     .with_id("http://example.org/work/1")
///     .with_type("bf:Work");
/// work.add_literal("bf:title", Some("Letters"), Some("en"), None);
/// work.add_resource("rico:hasOrHadCreator", "urn:a");
/// work.add_resource("rico:hasOrHadCreator", "urn:b");
///
/// assert_eq!(work.get("rico:hasOrHadCreator").map(<[Value]>::len), Some(2));
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Node {
    id: Option<String>,
    types: Vec<String>,
    types_position: usize,
    properties: Vec<Property>,
    keywords: Vec<(String, serde_json::Value)>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.add_type(node_type);
        self
    }

    #[must_use]
    pub fn with_value(mut self, predicate: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_value(predicate, value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn add_type(&mut self, node_type: impl Into<String>) {
        if self.types.is_empty() {
            self.types_position = self.properties.len();
        }
        self.types.push(node_type.into());
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Splits the properties into those added before the first type and the others.
    pub fn split_at_types(&self) -> (&[Property], &[Property]) {
        self.properties.split_at(self.types_position.min(self.properties.len()))
    }

    /// Returns the values of `predicate`, if it is set.
    pub fn get(&self, predicate: &str) -> Option<&[Value]> {
        self.properties
            .iter()
            .find(|p| p.predicate == predicate)
            .map(Property::values)
    }

    /// Keywords other than `@id` and `@type`, in the order they were read.
    pub fn keywords(&self) -> &[(String, serde_json::Value)] {
        &self.keywords
    }

    pub fn add_keyword(&mut self, keyword: impl Into<String>, value: serde_json::Value) {
        self.keywords.push((keyword.into(), value));
    }

    /// Returns whether the node has neither an identifier, types, nor properties.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.types.is_empty() && self.properties.is_empty()
    }

    /// Appends a value to `predicate`, turning it into a multi-valued property if it already has
    /// a value.
    pub fn add_value(&mut self, predicate: impl Into<String>, value: impl Into<Value>) {
        let predicate = predicate.into();
        let value = value.into();
        match self.properties.iter_mut().find(|p| p.predicate == predicate) {
            Some(property) => property.values.push(value),
            None => self.properties.push(Property::new(predicate, vec![value])),
        }
    }

    /// Replaces all values of `predicate`, keeping its position if it already exists.
    pub fn set_values(&mut self, predicate: impl Into<String>, values: Vec<Value>) {
        let predicate = predicate.into();
        match self.properties.iter_mut().find(|p| p.predicate == predicate) {
            Some(property) => property.values = values,
            None => self.properties.push(Property::new(predicate, values)),
        }
    }

    /// Adds a literal. Missing or empty values are ignored.
    pub fn add_literal(
        &mut self,
        predicate: impl Into<String>,
        value: Option<&str>,
        language: Option<&str>,
        datatype: Option<&str>,
    ) {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return;
        };
        self.add_value(predicate, Literal::new(value, language, datatype));
    }

    /// Adds a reference to another resource. Empty URIs are ignored.
    pub fn add_resource(&mut self, predicate: impl Into<String>, uri: &str) {
        if uri.is_empty() {
            return;
        }
        self.add_value(predicate, Value::resource(uri));
    }
}
