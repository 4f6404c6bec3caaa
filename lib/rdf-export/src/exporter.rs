use crate::{BaseUri, ExportError, ExportOptions, ExporterConfig, RdfFormat};
use rdf_export_formats::{
    IdentifierGenerator, JsonLdContext, JsonLdSerializer, NTriplesSerializer, PlainStringPolicy,
    RdfXmlSerializer, TurtleSerializer,
};
use rdf_export_model::{NamespaceRegistry, Node};
use std::error::Error;

/// Maps a domain resource to a graph.
///
/// Implementations exist per metadata standard and live outside of this crate. They must use
/// the namespaces registered on the [`Exporter`] and must never set both a language tag and a
/// datatype on one literal.
pub trait GraphBuilder {
    type Resource: ?Sized;

    fn build_graph(
        &self,
        resource: &Self::Resource,
        options: &ExportOptions,
        base_uri: &BaseUri,
    ) -> Result<Node, Box<dyn Error + Send + Sync + 'static>>;

    /// The resource types this builder is able to describe.
    fn supported_resource_types(&self) -> &[&str];

    fn supports_resource_type(&self, resource_type: &str) -> bool {
        self.supported_resource_types().contains(&resource_type)
    }
}

/// The serialized description of one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    format: RdfFormat,
    content: String,
}

impl Export {
    #[inline]
    pub fn format(&self) -> RdfFormat {
        self.format
    }

    #[inline]
    pub fn mime_type(&self) -> &'static str {
        self.format.media_type()
    }

    #[inline]
    pub fn file_extension(&self) -> &'static str {
        self.format.file_extension()
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn into_content(self) -> String {
        self.content
    }
}

/// Serializes graphs in the format selected by the [`ExportOptions`].
///
/// The exporter holds no per-call state: one instance can serve any number of calls, including
/// concurrent ones.
///
/// ```
/// use rdf_export::model::Node;
/// use rdf_export::{BaseUri, ExportOptions, Exporter, ExporterConfig, RdfFormat};
///
/// let exporter = Exporter::new(
///     ExporterConfig::new(BaseUri::parse("https://archive.example.org")?)
///         .with_namespace("bf", "http://id.loc.gov/ontologies/bibframe/")?,
/// );
/// let work = Node::new().with_id("http://example.org/work/1").with_type("bf:Work");
/// let export = exporter.serialize(&work, &ExportOptions::default().with_output_format(RdfFormat::Turtle))?;
/// assert_eq!(export.file_extension(), "ttl");
/// assert!(export.content().ends_with("<http://example.org/work/1> rdf:type bf:Work .\n"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Exporter {
    base_uri: BaseUri,
    namespaces: NamespaceRegistry,
    context: JsonLdContext,
    identifiers: IdentifierGenerator,
    plain_strings: PlainStringPolicy,
}

impl Exporter {
    pub fn new(config: ExporterConfig) -> Self {
        let (base_uri, namespaces, context, strategy, plain_strings) = config.into_parts();
        let context = context.unwrap_or_else(|| JsonLdContext::from_namespaces(&namespaces));
        let identifiers = IdentifierGenerator::new(base_uri.as_str(), strategy);
        Self {
            base_uri,
            namespaces,
            context,
            identifiers,
            plain_strings,
        }
    }

    #[inline]
    pub fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    #[inline]
    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    /// The `@context` written into JSON-LD output.
    #[inline]
    pub fn context(&self) -> &JsonLdContext {
        &self.context
    }

    /// Mints the subjects of anonymous nodes.
    #[inline]
    pub fn identifiers(&self) -> &IdentifierGenerator {
        &self.identifiers
    }

    #[inline]
    pub fn plain_strings(&self) -> PlainStringPolicy {
        self.plain_strings
    }

    /// Describes `resource` with `builder` and serializes the graph.
    pub fn export<B: GraphBuilder + ?Sized>(
        &self,
        builder: &B,
        resource: &B::Resource,
        options: &ExportOptions,
    ) -> Result<Export, ExportError> {
        let node = builder
            .build_graph(resource, options, &self.base_uri)
            .map_err(ExportError::Builder)?;
        self.serialize(&node, options)
    }

    /// Exports each resource independently.
    ///
    /// The returned iterator is lazy: a resource is only described when its result is requested,
    /// and a failure does not stop the remaining exports.
    pub fn export_batch<'a, B, I>(
        &'a self,
        builder: &'a B,
        resources: I,
        options: &'a ExportOptions,
    ) -> impl Iterator<Item = Result<Export, ExportError>> + 'a
    where
        B: GraphBuilder + ?Sized,
        I: IntoIterator<Item = &'a B::Resource>,
        I::IntoIter: 'a,
    {
        resources
            .into_iter()
            .map(move |resource| self.export(builder, resource, options))
    }

    /// Serializes an already built graph.
    pub fn serialize(&self, node: &Node, options: &ExportOptions) -> Result<Export, ExportError> {
        let format = options.output_format;
        tracing::debug!(
            format = %format,
            subject = node.id().unwrap_or_default(),
            "Exporting graph"
        );
        let content = match format {
            RdfFormat::JsonLd => JsonLdSerializer::new(&self.context)
                .with_context(options.include_context)
                .with_pretty_print(options.pretty_print)
                .serialize(node)?,
            RdfFormat::Turtle => TurtleSerializer::new(&self.namespaces, &self.identifiers)
                .with_plain_strings(self.plain_strings)
                .with_flatten(options.flatten_nested)
                .serialize(node)?,
            RdfFormat::RdfXml => RdfXmlSerializer::new(&self.namespaces)
                .with_plain_strings(self.plain_strings)
                .with_pretty_print(options.pretty_print)
                .serialize(node)?,
            RdfFormat::NTriples => NTriplesSerializer::new(&self.namespaces, &self.identifiers)
                .with_plain_strings(self.plain_strings)
                .with_flatten(options.flatten_nested)
                .serialize(node)?,
        };
        tracing::debug!(format = %format, bytes = content.len(), "Exported graph");
        Ok(Export { format, content })
    }
}
