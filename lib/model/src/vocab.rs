//! IRIs of the vocabularies the serializers rely on.

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.

    pub const PREFIX: &str = "rdf";
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// The prefixed form of `rdf:type`, used as the predicate of type triples.
    pub const TYPE_PREFIXED: &str = "rdf:type";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const DESCRIPTION: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Description";
}

pub mod rdfs {
    //! [RDFS](https://www.w3.org/TR/rdf-schema/) vocabulary.

    pub const PREFIX: &str = "rdfs";
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
}

pub mod xsd {
    //! [XML Schema datatypes](https://www.w3.org/TR/xmlschema11-2/).

    pub const PREFIX: &str = "xsd";
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

pub mod xml {
    //! The namespace bound to the `xml` prefix by the XML specification.

    pub const NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
}
