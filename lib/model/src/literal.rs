/// What qualifies the lexical form of a [`Literal`].
///
/// RDF 1.1 does not allow a literal to carry both a language tag and an explicit datatype, so the
/// two are mutually exclusive here.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
pub enum LiteralKind {
    /// A plain string literal.
    #[default]
    Simple,
    /// A language-tagged string, e.g. `"Letters"@en`.
    LanguageTagged(String),
    /// A literal with an explicit datatype, either prefixed (`xsd:date`) or a full IRI.
    Typed(String),
}

/// An RDF literal: a lexical value plus an optional language tag or datatype.
///
/// Two details of the JSON-LD value object it was read from are kept for the JSON-LD output only:
/// whether `@value` was a native JSON number or boolean, and the other value-object keywords such
/// as `@index` or `@direction`.
///
/// ```
/// use rdf_export_model::{Literal, LiteralKind};
///
/// let title = Literal::new_language_tagged("Letters", "en");
/// assert_eq!(title.value(), "Letters");
/// assert_eq!(title.language(), Some("en"));
/// assert_eq!(title.datatype(), None);
///
/// // A datatype is dropped when a language tag is present.
/// let mixed = Literal::new("Letters", Some("en"), Some("xsd:string"));
/// assert_eq!(mixed.kind(), &LiteralKind::LanguageTagged("en".to_owned()));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Literal {
    value: String,
    kind: LiteralKind,
    native: bool,
    annotations: Vec<(String, String)>,
}

impl Literal {
    /// Builds a literal from its JSON-LD parts.
    ///
    /// If both `language` and `datatype` are given, the datatype is dropped and a warning is
    /// logged. Empty language tags and datatypes count as absent.
    pub fn new(value: impl Into<String>, language: Option<&str>, datatype: Option<&str>) -> Self {
        let value = value.into();
        let language = language.filter(|l| !l.is_empty());
        let datatype = datatype.filter(|d| !d.is_empty());
        match (language, datatype) {
            (Some(language), Some(datatype)) => {
                tracing::warn!(
                    value = %value,
                    language,
                    datatype,
                    "Literal has both a language tag and a datatype, dropping the datatype"
                );
                Self::new_language_tagged(value, language)
            }
            (Some(language), None) => Self::new_language_tagged(value, language),
            (None, Some(datatype)) => Self::new_typed(value, datatype),
            (None, None) => Self::new_simple(value),
        }
    }

    pub fn new_simple(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: LiteralKind::Simple,
            native: false,
            annotations: Vec::new(),
        }
    }

    pub fn new_language_tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: LiteralKind::LanguageTagged(language.into()),
            native: false,
            annotations: Vec::new(),
        }
    }

    pub fn new_typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: LiteralKind::Typed(datatype.into()),
            native: false,
            annotations: Vec::new(),
        }
    }

    /// Marks the lexical form as a native JSON number or boolean, written unquoted in JSON-LD.
    #[must_use]
    pub fn with_native(mut self, native: bool) -> Self {
        self.native = native;
        self
    }

    /// Adds a value-object keyword that only JSON-LD carries, e.g. `@direction`.
    #[must_use]
    pub fn with_annotation(mut self, keyword: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.push((keyword.into(), value.into()));
        self
    }

    /// The lexical form.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }

    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::LanguageTagged(language) => Some(language),
            _ => None,
        }
    }

    pub fn is_native(&self) -> bool {
        self.native
    }

    pub fn annotations(&self) -> &[(String, String)] {
        &self.annotations
    }

    /// The datatype as given by the graph builder (not expanded).
    pub fn datatype(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Typed(datatype) => Some(datatype),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_qualifiers_are_ignored() {
        let literal = Literal::new("x", Some(""), Some(""));
        assert_eq!(literal.kind(), &LiteralKind::Simple);
    }

    #[test]
    fn datatype_only() {
        let literal = Literal::new("2024-01-01", None, Some("xsd:date"));
        assert_eq!(literal.datatype(), Some("xsd:date"));
        assert_eq!(literal.language(), None);
    }

    #[test]
    fn language_wins_over_datatype() {
        let literal = Literal::new("Briefe", Some("de"), Some("xsd:string"));
        assert_eq!(literal.language(), Some("de"));
        assert_eq!(literal.datatype(), None);
    }
}
