/// How bare JSON strings are mapped to RDF objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlainStringPolicy {
    /// Strings starting with `http://` or `https://` are written as resource references, every
    /// other string as a plain literal.
    ///
    /// A literal that merely looks like a URL is therefore misclassified.
    #[default]
    UrlAsResource,
    /// Bare strings are always plain literals.
    Literal,
}

impl PlainStringPolicy {
    /// Returns whether `value` is written as a resource reference.
    pub fn is_resource(self, value: &str) -> bool {
        match self {
            Self::UrlAsResource => value.starts_with("http://") || value.starts_with("https://"),
            Self::Literal => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_heuristic() {
        let policy = PlainStringPolicy::UrlAsResource;
        assert!(policy.is_resource("http://example.org/x"));
        assert!(policy.is_resource("https://example.org/x"));
        assert!(!policy.is_resource("ftp://example.org/x"));
        assert!(!policy.is_resource("see http://example.org/x"));
        assert!(!PlainStringPolicy::Literal.is_resource("https://example.org/x"));
    }
}
