use crate::{Literal, Node};

/// One object of a property.
///
/// Scalars are kept in their native form; the serializers map them to `xsd:boolean`,
/// `xsd:integer` and `xsd:decimal` literals.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// An `{"@value": ...}` object.
    Literal(Literal),
    /// A reference to another resource, `{"@id": ...}`.
    Resource(String),
    /// An inline node that is not referenced by anything else.
    Nested(Node),
    /// A bare JSON string.
    String(String),
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
}

impl Value {
    /// Builds a resource reference.
    pub fn resource(id: impl Into<String>) -> Self {
        Self::Resource(id.into())
    }

    /// Returns the identifier if this value points to a resource.
    ///
    /// Nested nodes only have an identifier if they carry an `@id`.
    pub fn as_resource(&self) -> Option<&str> {
        match self {
            Self::Resource(id) => Some(id),
            Self::Nested(node) => node.id(),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Nested(node) => Some(node),
            _ => None,
        }
    }
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Self::Nested(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}
