use crate::{ExportError, RdfFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Per-call export options.
///
/// `include_digital_objects`, `include_drafts`, `include_children` and `max_depth` are only read
/// by the [`GraphBuilder`](crate::GraphBuilder). The other options drive serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools, reason = "Independent flags")]
pub struct ExportOptions {
    pub include_digital_objects: bool,
    pub include_drafts: bool,
    pub include_children: bool,
    /// Maximum depth of the described hierarchy, `0` for unlimited.
    pub max_depth: u32,
    pub pretty_print: bool,
    pub output_format: RdfFormat,
    /// Writes the `@context` into JSON-LD output.
    pub include_context: bool,
    /// Writes the triples of nested nodes in Turtle and N-Triples output.
    pub flatten_nested: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_digital_objects: true,
            include_drafts: false,
            include_children: true,
            max_depth: 0,
            pretty_print: true,
            output_format: RdfFormat::JsonLd,
            include_context: true,
            flatten_nested: false,
        }
    }
}

impl ExportOptions {
    /// Reads options from a JSON object, keeping the defaults for the missing keys.
    ///
    /// ```
    /// use rdf_export::{ExportError, ExportOptions, RdfFormat};
    ///
    /// let options = ExportOptions::from_json(&serde_json::json!({"outputFormat": "turtle", "maxDepth": 2}))?;
    /// assert_eq!(options.output_format, RdfFormat::Turtle);
    /// assert_eq!(options.max_depth, 2);
    /// assert!(options.pretty_print);
    ///
    /// assert!(matches!(
    ///     ExportOptions::from_json(&serde_json::json!({"outputFormat": "csv"})),
    ///     Err(ExportError::UnsupportedFormat(_))
    /// ));
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn from_json(json: &JsonValue) -> Result<Self, ExportError> {
        if let Some(format) = json.get("outputFormat").and_then(JsonValue::as_str) {
            format.parse::<RdfFormat>()?;
        }
        Self::deserialize(json).map_err(ExportError::InvalidOptions)
    }

    #[must_use]
    pub fn with_output_format(mut self, format: RdfFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    #[must_use]
    pub fn with_context(mut self, include_context: bool) -> Self {
        self.include_context = include_context;
        self
    }

    #[must_use]
    pub fn with_flatten_nested(mut self, flatten_nested: bool) -> Self {
        self.flatten_nested = flatten_nested;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let options = ExportOptions::from_json(&json!({})).unwrap();
        assert_eq!(options, ExportOptions::default());
        assert!(options.include_digital_objects);
        assert!(!options.include_drafts);
        assert!(options.include_children);
        assert_eq!(options.max_depth, 0);
        assert!(options.pretty_print);
        assert_eq!(options.output_format, RdfFormat::JsonLd);
        assert!(options.include_context);
        assert!(!options.flatten_nested);
    }

    #[test]
    fn camel_case_keys() {
        let options = ExportOptions::from_json(&json!({
            "includeDrafts": true,
            "prettyPrint": false,
            "includeContext": false,
            "flattenNested": true,
            "outputFormat": "ntriples",
            "someBuilderSpecificOption": "ignored"
        }))
        .unwrap();
        assert!(options.include_drafts);
        assert!(!options.pretty_print);
        assert!(!options.include_context);
        assert!(options.flatten_nested);
        assert_eq!(options.output_format, RdfFormat::NTriples);
    }

    #[test]
    fn malformed_options() {
        assert!(matches!(
            ExportOptions::from_json(&json!({"maxDepth": "deep"})),
            Err(ExportError::InvalidOptions(_))
        ));
        assert!(matches!(
            ExportOptions::from_json(&json!({"outputFormat": "n3"})),
            Err(ExportError::UnsupportedFormat(format)) if format == "n3"
        ));
    }
}
