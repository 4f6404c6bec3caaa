//! Conversion between the graph model and JSON-LD shaped `serde_json` values.

use crate::vocab::xsd;
use crate::{Literal, LiteralKind, ModelError, Node, Value};
use serde_json::{Map, Number, Value as JsonValue};

impl Node {
    /// Reads a node from a JSON-LD shaped object.
    ///
    /// Objects with an `@value` become [`Value::Literal`], objects whose only key is `@id` become
    /// [`Value::Resource`] and any other object becomes a [`Value::Nested`] node. `@set` objects are
    /// unwrapped and `null` values are skipped.
    ///
    /// ```
    /// use rdf_export_model::{Node, Value};
    /// use serde_json::json;
    ///
    /// let node = Node::from_json(&json!({
    ///     "@id": "http://example.org/work/1",
    ///     "@type": "bf:Work",
    ///     "bf:title": {"@value": "Letters"},
    ///     "rico:hasOrHadCreator": [{"@id": "urn:a"}, {"@id": "urn:b"}]
    /// }))?;
    /// assert_eq!(node.id(), Some("http://example.org/work/1"));
    /// assert_eq!(node.types(), ["bf:Work"]);
    /// assert_eq!(
    ///     node.get("rico:hasOrHadCreator"),
    ///     Some([Value::resource("urn:a"), Value::resource("urn:b")].as_slice())
    /// );
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn from_json(json: &JsonValue) -> Result<Self, ModelError> {
        let JsonValue::Object(object) = json else {
            return Err(ModelError::NotAnObject(json_type_name(json)));
        };

        let mut node = Node::new();
        for (key, value) in object {
            match key.as_str() {
                "@id" => match value {
                    JsonValue::String(id) => node.set_id(id.as_str()),
                    _ => return Err(ModelError::InvalidId),
                },
                "@type" => match value {
                    JsonValue::String(node_type) => node.add_type(node_type.as_str()),
                    JsonValue::Array(types) => {
                        for node_type in types {
                            let JsonValue::String(node_type) = node_type else {
                                return Err(ModelError::InvalidType);
                            };
                            node.add_type(node_type.as_str());
                        }
                    }
                    _ => return Err(ModelError::InvalidType),
                },
                keyword if keyword.starts_with('@') => node.add_keyword(keyword, value.clone()),
                predicate => {
                    let mut values = Vec::new();
                    read_values(predicate, value, false, &mut values)?;
                    if !values.is_empty() {
                        node.set_values(predicate, values);
                    }
                }
            }
        }
        Ok(node)
    }

    /// Writes the node as a JSON-LD shaped object.
    ///
    /// `@id` and `@type` come first, followed by the other keywords and the properties in
    /// insertion order. Single values are written without an enclosing array.
    pub fn to_json(&self) -> JsonValue {
        let mut object = Map::new();
        if let Some(id) = self.id() {
            object.insert("@id".to_owned(), JsonValue::String(id.to_owned()));
        }
        match self.types() {
            [] => {}
            [node_type] => {
                object.insert("@type".to_owned(), JsonValue::String(node_type.clone()));
            }
            types => {
                object.insert(
                    "@type".to_owned(),
                    JsonValue::Array(types.iter().cloned().map(JsonValue::String).collect()),
                );
            }
        }
        for (keyword, value) in self.keywords() {
            object.insert(keyword.clone(), value.clone());
        }
        for property in self.properties() {
            let json = match property.values() {
                [] => continue,
                [value] => value.to_json(),
                values => JsonValue::Array(values.iter().map(Value::to_json).collect()),
            };
            object.insert(property.predicate().to_owned(), json);
        }
        JsonValue::Object(object)
    }
}

impl Value {
    /// Writes the value in JSON-LD form.
    ///
    /// A native literal is written with its JSON number or boolean as `@value`, and without the
    /// datatype that scalar implies. Non-finite decimals have no JSON representation and are
    /// written as `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Literal(literal) => {
                let value = native_value(literal)
                    .unwrap_or_else(|| JsonValue::String(literal.value().to_owned()));
                let implied_datatype = implied_datatype(&value);
                let mut object = Map::new();
                object.insert("@value".to_owned(), value);
                match literal.kind() {
                    LiteralKind::Simple => {}
                    LiteralKind::LanguageTagged(language) => {
                        object.insert("@language".to_owned(), JsonValue::String(language.clone()));
                    }
                    LiteralKind::Typed(datatype) if Some(datatype.as_str()) == implied_datatype => {}
                    LiteralKind::Typed(datatype) => {
                        object.insert("@type".to_owned(), JsonValue::String(datatype.clone()));
                    }
                }
                for (keyword, value) in literal.annotations() {
                    object.insert(keyword.clone(), JsonValue::String(value.clone()));
                }
                JsonValue::Object(object)
            }
            Value::Resource(id) => {
                let mut object = Map::new();
                object.insert("@id".to_owned(), JsonValue::String(id.clone()));
                JsonValue::Object(object)
            }
            Value::Nested(node) => node.to_json(),
            Value::String(value) => JsonValue::String(value.clone()),
            Value::Boolean(value) => JsonValue::Bool(*value),
            Value::Integer(value) => JsonValue::Number((*value).into()),
            Value::Decimal(value) => Number::from_f64(*value).map_or(JsonValue::Null, JsonValue::Number),
        }
    }
}

fn read_values(
    predicate: &str,
    json: &JsonValue,
    in_array: bool,
    values: &mut Vec<Value>,
) -> Result<(), ModelError> {
    match json {
        JsonValue::Null => {}
        JsonValue::Array(items) => {
            if in_array {
                return Err(ModelError::NestedList {
                    predicate: predicate.to_owned(),
                });
            }
            for item in items {
                read_values(predicate, item, true, values)?;
            }
        }
        JsonValue::Bool(value) => values.push(Value::Boolean(*value)),
        JsonValue::Number(number) => values.push(match number.as_i64() {
            Some(value) => Value::Integer(value),
            None => Value::Decimal(number.as_f64().unwrap_or(f64::NAN)),
        }),
        JsonValue::String(value) => values.push(Value::String(value.clone())),
        JsonValue::Object(object) => {
            if object.contains_key("@value") {
                if let Some(literal) = read_literal(predicate, object)? {
                    values.push(Value::Literal(literal));
                }
            } else if let Some(set) = object.get("@set") {
                read_values(predicate, set, false, values)?;
            } else if object.contains_key("@list") {
                return Err(ModelError::UnsupportedKeyword {
                    keyword: "@list".to_owned(),
                    predicate: predicate.to_owned(),
                });
            } else if let (1, Some(JsonValue::String(id))) = (object.len(), object.get("@id")) {
                values.push(Value::Resource(id.clone()));
            } else {
                values.push(Value::Nested(Node::from_json(json)?));
            }
        }
    }
    Ok(())
}

fn read_literal(
    predicate: &str,
    object: &Map<String, JsonValue>,
) -> Result<Option<Literal>, ModelError> {
    let invalid = || ModelError::InvalidLiteral {
        predicate: predicate.to_owned(),
    };
    let optional_str = |key: &str| match object.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(invalid()),
    };
    let language = optional_str("@language")?;
    let datatype = optional_str("@type")?;

    let mut annotations = Vec::new();
    for (key, value) in object {
        match (key.as_str(), value) {
            ("@value" | "@language" | "@type", _) => {}
            (keyword, JsonValue::String(value)) if keyword.starts_with('@') => {
                annotations.push((keyword, value.as_str()));
            }
            (keyword, JsonValue::Null) if keyword.starts_with('@') => {}
            _ => return Err(invalid()),
        }
    }

    let value = match object.get("@value") {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(value @ (JsonValue::String(_) | JsonValue::Bool(_) | JsonValue::Number(_))) => value,
        Some(_) => return Err(invalid()),
    };
    let datatype = match (language, datatype) {
        (None, None) => implied_datatype(value),
        (_, datatype) => datatype,
    };
    let literal = match value {
        JsonValue::String(lexical) => Literal::new(lexical.as_str(), language, datatype),
        native => Literal::new(native.to_string(), language, datatype).with_native(true),
    };
    Ok(Some(annotations.into_iter().fold(literal, |literal, (keyword, value)| {
        literal.with_annotation(keyword, value)
    })))
}

/// The datatype a native JSON `@value` stands for.
fn implied_datatype(value: &JsonValue) -> Option<&'static str> {
    match value {
        JsonValue::Bool(_) => Some(xsd::BOOLEAN),
        JsonValue::Number(number) if number.is_f64() => Some(xsd::DOUBLE),
        JsonValue::Number(_) => Some(xsd::INTEGER),
        _ => None,
    }
}

fn native_value(literal: &Literal) -> Option<JsonValue> {
    if !literal.is_native() {
        return None;
    }
    serde_json::from_str::<JsonValue>(literal.value())
        .ok()
        .filter(|value| value.is_number() || value.is_boolean())
}

fn json_type_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_values_of_every_kind() {
        let node = Node::from_json(&json!({
            "@id": "urn:x",
            "ex:literal": {"@value": "Letters", "@language": "en"},
            "ex:typed": {"@value": "2001-01-01", "@type": "xsd:date"},
            "ex:native": {"@value": 5},
            "ex:string": "plain",
            "ex:flag": false,
            "ex:count": 3,
            "ex:ratio": 0.5,
            "ex:nested": {"@type": "ex:Place", "ex:name": "Cape Town"},
            "ex:skipped": null
        }))
        .unwrap();

        assert_eq!(
            node.get("ex:literal"),
            Some([Value::Literal(Literal::new_language_tagged("Letters", "en"))].as_slice())
        );
        assert_eq!(
            node.get("ex:typed"),
            Some([Value::Literal(Literal::new_typed("2001-01-01", "xsd:date"))].as_slice())
        );
        assert_eq!(
            node.get("ex:native"),
            Some([Value::Literal(Literal::new_typed("5", xsd::INTEGER).with_native(true))].as_slice())
        );
        assert_eq!(node.get("ex:string"), Some([Value::from("plain")].as_slice()));
        assert_eq!(node.get("ex:flag"), Some([Value::Boolean(false)].as_slice()));
        assert_eq!(node.get("ex:count"), Some([Value::Integer(3)].as_slice()));
        assert_eq!(node.get("ex:ratio"), Some([Value::Decimal(0.5)].as_slice()));
        let nested = node.get("ex:nested").and_then(|v| v[0].as_node()).unwrap();
        assert_eq!(nested.types(), ["ex:Place"]);
        assert_eq!(node.get("ex:skipped"), None);
    }

    #[test]
    fn object_with_id_and_properties_is_nested() {
        let node = Node::from_json(&json!({
            "ex:creator": {"@id": "urn:agent", "ex:name": "Ada"}
        }))
        .unwrap();
        let value = &node.get("ex:creator").unwrap()[0];
        assert!(value.as_node().is_some());
        assert_eq!(value.as_resource(), Some("urn:agent"));
    }

    #[test]
    fn set_is_unwrapped() {
        let node = Node::from_json(&json!({"ex:tag": {"@set": ["a", "b"]}})).unwrap();
        assert_eq!(node.get("ex:tag").map(<[Value]>::len), Some(2));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            Node::from_json(&json!([])),
            Err(ModelError::NotAnObject("an array"))
        ));
        assert!(matches!(
            Node::from_json(&json!({"@id": 1})),
            Err(ModelError::InvalidId)
        ));
        assert!(matches!(
            Node::from_json(&json!({"@type": ["a:B", 2]})),
            Err(ModelError::InvalidType)
        ));
        assert!(matches!(
            Node::from_json(&json!({"ex:p": [["a"]]})),
            Err(ModelError::NestedList { .. })
        ));
        assert!(matches!(
            Node::from_json(&json!({"ex:p": {"@list": ["a"]}})),
            Err(ModelError::UnsupportedKeyword { .. })
        ));
        assert!(matches!(
            Node::from_json(&json!({"ex:p": {"@value": {"x": 1}}})),
            Err(ModelError::InvalidLiteral { .. })
        ));
    }

    #[test]
    fn keywords_pass_through() {
        let json = json!({
            "@id": "urn:x",
            "@type": ["ex:A", "ex:B"],
            "@reverse": {"ex:partOf": {"@id": "urn:y"}},
            "ex:p": [{"@id": "urn:a"}, {"@value": "b", "@type": "xsd:string"}],
            "ex:q": "single"
        });
        let node = Node::from_json(&json).unwrap();
        assert_eq!(node.keywords().len(), 1);
        assert_eq!(node.to_json(), json);
    }

    #[test]
    fn value_objects_pass_through() {
        let json = json!({
            "@id": "urn:x",
            "ex:count": {"@value": 5},
            "ex:ratio": {"@value": 2.5},
            "ex:flag": {"@value": true},
            "ex:code": {"@value": 7, "@type": "xsd:short"},
            "ex:title": {"@value": "Letters", "@language": "en", "@direction": "ltr", "@index": "main"}
        });
        let node = Node::from_json(&json).unwrap();
        assert_eq!(node.to_json(), json);

        let ratio = node.get("ex:ratio").and_then(|v| v[0].as_literal()).unwrap();
        assert_eq!(ratio.datatype(), Some(xsd::DOUBLE));
        let title = node.get("ex:title").and_then(|v| v[0].as_literal()).unwrap();
        assert_eq!(
            title.annotations(),
            [
                ("@direction".to_owned(), "ltr".to_owned()),
                ("@index".to_owned(), "main".to_owned())
            ]
        );
    }

    #[test]
    fn rejects_unknown_value_object_keys() {
        assert!(matches!(
            Node::from_json(&json!({"ex:p": {"@value": "a", "note": "b"}})),
            Err(ModelError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            Node::from_json(&json!({"ex:p": {"@value": "a", "@index": 1}})),
            Err(ModelError::InvalidLiteral { .. })
        ));
    }
}
