use crate::ExportError;
use oxiri::Iri;
use rdf_export_formats::{IdentifierStrategy, JsonLdContext, PlainStringPolicy};
use rdf_export_model::NamespaceRegistry;
use std::fmt;
use std::str::FromStr;

/// The absolute URI under which exported resources are identified.
///
/// ```
/// use rdf_export::BaseUri;
///
/// let base = BaseUri::parse("https://archive.example.org/")?;
/// assert_eq!(base.as_str(), "https://archive.example.org");
/// assert_eq!(base.resource_uri("record", "f-12"), "https://archive.example.org/record/f-12");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUri(String);

impl BaseUri {
    /// Validates `iri` as an absolute IRI. Trailing slashes are removed.
    pub fn parse(iri: impl Into<String>) -> Result<Self, ExportError> {
        let iri = iri.into();
        if let Err(error) = Iri::parse(iri.as_str()) {
            return Err(ExportError::InvalidBaseUri { iri, error });
        }
        let trimmed = iri.trim_end_matches('/');
        Ok(Self(if trimmed.len() == iri.len() {
            iri
        } else {
            trimmed.to_owned()
        }))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<base>/<kind>/<id>`
    pub fn resource_uri(&self, kind: &str, id: &str) -> String {
        format!("{}/{kind}/{id}", self.0)
    }
}

impl AsRef<str> for BaseUri {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BaseUri {
    type Err = ExportError;

    #[inline]
    fn from_str(iri: &str) -> Result<Self, Self::Err> {
        Self::parse(iri)
    }
}

/// The configuration of an [`Exporter`](crate::Exporter).
///
/// It is fixed when the exporter is built and shared by all of its calls.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    base_uri: BaseUri,
    namespaces: NamespaceRegistry,
    context: Option<JsonLdContext>,
    identifiers: IdentifierStrategy,
    plain_strings: PlainStringPolicy,
}

impl ExporterConfig {
    /// A configuration with the `rdf`, `rdfs` and `xsd` namespaces registered.
    pub fn new(base_uri: BaseUri) -> Self {
        Self {
            base_uri,
            namespaces: NamespaceRegistry::with_well_known(),
            context: None,
            identifiers: IdentifierStrategy::default(),
            plain_strings: PlainStringPolicy::default(),
        }
    }

    /// Registers a namespace after the already registered ones.
    ///
    /// Registering a prefix twice keeps the first namespace.
    pub fn with_namespace(
        mut self,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> Result<Self, ExportError> {
        let prefix = prefix.into();
        if !self.namespaces.register(prefix.as_str(), uri)? {
            tracing::debug!(prefix = %prefix, "Namespace prefix already registered");
        }
        Ok(self)
    }

    /// Sets the JSON-LD `@context`. By default it is the prefix table of the registered
    /// namespaces.
    #[must_use]
    pub fn with_context(mut self, context: JsonLdContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_identifier_strategy(mut self, strategy: IdentifierStrategy) -> Self {
        self.identifiers = strategy;
        self
    }

    #[must_use]
    pub fn with_plain_strings(mut self, policy: PlainStringPolicy) -> Self {
        self.plain_strings = policy;
        self
    }

    #[inline]
    pub fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    #[inline]
    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    /// The explicitly configured JSON-LD context, if any.
    #[inline]
    pub fn context(&self) -> Option<&JsonLdContext> {
        self.context.as_ref()
    }

    #[inline]
    pub fn identifier_strategy(&self) -> IdentifierStrategy {
        self.identifiers
    }

    #[inline]
    pub fn plain_strings(&self) -> PlainStringPolicy {
        self.plain_strings
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        BaseUri,
        NamespaceRegistry,
        Option<JsonLdContext>,
        IdentifierStrategy,
        PlainStringPolicy,
    ) {
        (
            self.base_uri,
            self.namespaces,
            self.context,
            self.identifiers,
            self.plain_strings,
        )
    }
}
