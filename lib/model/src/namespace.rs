use crate::vocab::{rdf, rdfs, xsd};
use crate::ModelError;
use oxiri::Iri;
use std::borrow::Cow;

/// A `prefix` bound to a namespace `uri`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Namespace {
    prefix: String,
    uri: String,
}

impl Namespace {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// An ordered prefix table.
///
/// Used to compact full IRIs into `prefix:local` names and to expand such names back. The
/// registration order is kept for the `@prefix` and `xmlns` declarations and breaks ties: a
/// prefix that is registered twice keeps its first binding.
///
/// ```
/// use rdf_export_model::NamespaceRegistry;
///
/// let registry = NamespaceRegistry::new()
///     .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")?;
/// assert_eq!(
///     registry.expand("bf:Work"),
///     "http://id.loc.gov/ontologies/bibframe/Work"
/// );
/// assert_eq!(
///     registry.compact("http://id.loc.gov/ontologies/bibframe/Work").as_deref(),
///     Some("bf:Work")
/// );
/// assert_eq!(registry.compact("http://example.org/work/1"), None);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NamespaceRegistry {
    namespaces: Vec<Namespace>,
}

impl NamespaceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `rdf`, `rdfs` and `xsd`, the namespaces the serializers themselves emit.
    pub fn with_well_known() -> Self {
        let namespaces = [
            (rdf::PREFIX, rdf::NAMESPACE),
            (rdfs::PREFIX, rdfs::NAMESPACE),
            (xsd::PREFIX, xsd::NAMESPACE),
        ]
        .into_iter()
        .map(|(prefix, uri)| Namespace {
            prefix: prefix.to_owned(),
            uri: uri.to_owned(),
        })
        .collect();
        Self { namespaces }
    }

    /// Registers a namespace and returns `self`, see [`Self::register`].
    pub fn with_namespace(
        mut self,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> Result<Self, ModelError> {
        self.register(prefix, uri)?;
        Ok(self)
    }

    /// Registers `prefix` for the namespace `uri`.
    ///
    /// Returns `false` if the prefix was already registered, in which case the earlier binding is
    /// kept.
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> Result<bool, ModelError> {
        let prefix = prefix.into();
        if !is_valid_prefix(&prefix) {
            return Err(ModelError::InvalidPrefix(prefix));
        }
        let uri = uri.into();
        if let Err(error) = Iri::parse(uri.as_str()) {
            return Err(ModelError::InvalidNamespaceIri { iri: uri, error });
        }
        if self.get(&prefix).is_some() {
            return Ok(false);
        }
        self.namespaces.push(Namespace { prefix, uri });
        Ok(true)
    }

    /// Returns the namespace URI bound to `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.namespaces
            .iter()
            .find(|ns| ns.prefix == prefix)
            .map(Namespace::uri)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.iter()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Finds the namespace with the longest URI that is a prefix of `uri`.
    ///
    /// Returns the namespace and the remaining local part. On equal lengths the first registered
    /// namespace wins.
    pub fn split<'uri>(&self, uri: &'uri str) -> Option<(&Namespace, &'uri str)> {
        let mut best: Option<&Namespace> = None;
        for namespace in &self.namespaces {
            if uri.starts_with(namespace.uri.as_str())
                && best.map_or(true, |b| namespace.uri.len() > b.uri.len())
            {
                best = Some(namespace);
            }
        }
        best.map(|namespace| (namespace, &uri[namespace.uri.len()..]))
    }

    /// Compacts `uri` into a `prefix:local` name.
    ///
    /// Returns `None` if no namespace matches or if the local part is not a valid Turtle local
    /// name (in which case the caller must write the full IRI).
    pub fn compact(&self, uri: &str) -> Option<String> {
        let (namespace, local) = self.split(uri)?;
        is_turtle_local_name(local).then(|| format!("{}:{local}", namespace.prefix))
    }

    /// Expands a `prefix:local` name whose prefix is registered. Anything else is returned
    /// unchanged.
    pub fn expand<'token>(&self, token: &'token str) -> Cow<'token, str> {
        let Some((prefix, local)) = token.split_once(':') else {
            return Cow::Borrowed(token);
        };
        match self.get(prefix) {
            // Absolute IRIs such as "urn:isbn:..." only expand if the scheme is a registered prefix.
            Some(uri) if !local.starts_with("//") => Cow::Owned(format!("{uri}{local}")),
            _ => Cow::Borrowed(token),
        }
    }
}

impl<'a> IntoIterator for &'a NamespaceRegistry {
    type Item = &'a Namespace;
    type IntoIter = std::slice::Iter<'a, Namespace>;

    fn into_iter(self) -> Self::IntoIter {
        self.namespaces.iter()
    }
}

/// Returns whether `value` parses as an absolute IRI.
pub fn is_absolute_iri(value: &str) -> bool {
    Iri::parse(value).is_ok()
}

/// Returns whether `local` can follow `prefix:` in Turtle without escaping.
///
/// This is a conservative subset of the `PN_LOCAL` production: letters, digits, `_` and `-`, with
/// `.` allowed anywhere but at the ends. The empty local name is valid.
pub fn is_turtle_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if !(first.is_alphanumeric() || first == '_') {
        return false;
    }
    if local.ends_with('.') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Returns the label of a `_:label` blank node identifier, or `None` for IRIs and prefixed names.
pub fn blank_node_label(id: &str) -> Option<&str> {
    id.strip_prefix("_:")
}

/// Returns whether `label` can follow `_:` in Turtle and N-Triples and be an RDF/XML
/// `rdf:nodeID`.
///
/// This is the intersection of `BLANK_NODE_LABEL` and the XML `NCName`, restricted like
/// [`is_turtle_local_name`]: a letter or `_`, then letters, ASCII digits, `_`, `-` and `.`, not
/// ending with `.`.
pub fn is_blank_node_label(label: &str) -> bool {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && !label.ends_with('.')
        && chars.all(|c| c.is_alphabetic() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.'))
}

fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_alphabetic()
        && !prefix.ends_with('.')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
