use crate::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The output formats of the [`Exporter`](crate::Exporter).
///
/// ```
/// use rdf_export::RdfFormat;
///
/// assert_eq!(RdfFormat::Turtle.media_type(), "text/turtle");
/// assert_eq!(RdfFormat::from_extension("nt"), Some(RdfFormat::NTriples));
/// assert_eq!("rdfxml".parse::<RdfFormat>()?, RdfFormat::RdfXml);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RdfFormat {
    /// [JSON-LD](https://www.w3.org/TR/json-ld11/)
    #[default]
    JsonLd,
    /// [Turtle](https://www.w3.org/TR/turtle/)
    Turtle,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/)
    RdfXml,
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
}

impl RdfFormat {
    pub const ALL: [Self; 4] = [Self::JsonLd, Self::Turtle, Self::RdfXml, Self::NTriples];

    /// The name used in the `outputFormat` option.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JsonLd => "jsonld",
            Self::Turtle => "turtle",
            Self::RdfXml => "rdfxml",
            Self::NTriples => "ntriples",
        }
    }

    /// The format [IANA media type](https://tools.ietf.org/html/rfc2046).
    #[inline]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::JsonLd => "application/ld+json",
            Self::Turtle => "text/turtle",
            Self::RdfXml => "application/rdf+xml",
            Self::NTriples => "application/n-triples",
        }
    }

    /// The conventional file extension, without the dot.
    #[inline]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::JsonLd => "jsonld",
            Self::Turtle => "ttl",
            Self::RdfXml => "rdf",
            Self::NTriples => "nt",
        }
    }

    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name() == name)
    }

    /// Looks up a format from a media type, ignoring its parameters and case.
    ///
    /// ```
    /// use rdf_export::RdfFormat;
    ///
    /// assert_eq!(
    ///     RdfFormat::from_media_type("text/turtle; charset=utf-8"),
    ///     Some(RdfFormat::Turtle)
    /// );
    /// ```
    #[inline]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next()?.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.media_type().eq_ignore_ascii_case(essence))
    }

    #[inline]
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.file_extension().eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for RdfFormat {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = ExportError;

    #[inline]
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| ExportError::UnsupportedFormat(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_tables() {
        let table = RdfFormat::ALL.map(|f| (f.name(), f.media_type(), f.file_extension()));
        assert_eq!(
            table,
            [
                ("jsonld", "application/ld+json", "jsonld"),
                ("turtle", "text/turtle", "ttl"),
                ("rdfxml", "application/rdf+xml", "rdf"),
                ("ntriples", "application/n-triples", "nt"),
            ]
        );
    }

    #[test]
    fn lookups_invert_metadata() {
        for format in RdfFormat::ALL {
            assert_eq!(RdfFormat::from_name(format.name()), Some(format));
            assert_eq!(RdfFormat::from_media_type(format.media_type()), Some(format));
            assert_eq!(RdfFormat::from_extension(format.file_extension()), Some(format));
            assert_eq!(format.to_string().parse::<RdfFormat>().unwrap(), format);
        }
        assert_eq!(RdfFormat::from_extension("TTL"), Some(RdfFormat::Turtle));
        assert_eq!(RdfFormat::from_media_type("application/json"), None);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            "csv".parse::<RdfFormat>(),
            Err(ExportError::UnsupportedFormat(name)) if name == "csv"
        ));
        assert_eq!(RdfFormat::from_name("Turtle"), None);
    }

    #[test]
    fn serde_uses_option_names() {
        assert_eq!(
            serde_json::to_value(RdfFormat::NTriples).unwrap(),
            serde_json::json!("ntriples")
        );
        assert_eq!(
            serde_json::from_value::<RdfFormat>(serde_json::json!("rdfxml")).unwrap(),
            RdfFormat::RdfXml
        );
    }
}
