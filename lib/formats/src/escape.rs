//! Escaping shared by the Turtle and N-Triples writers.

/// Writes `<iri>`, escaping the characters that `IRIREF` forbids as `\uXXXX`.
pub(crate) fn write_iri(output: &mut String, iri: &str) {
    output.push('<');
    for c in iri.chars() {
        match u8::try_from(c) {
            Ok(byte @ (b'\0'..=b' ' | b'<' | b'>' | b'"' | b'{' | b'}' | b'|' | b'^' | b'`' | b'\\')) => {
                output.push_str("\\u00");
                output.push_str(&hex::encode_upper([byte]));
            }
            _ => output.push(c),
        }
    }
    output.push('>');
}

/// Writes a Turtle string literal.
///
/// Only `\` and `"` are escaped. Values containing a line break are written as a `"""` long
/// string, which accepts raw line breaks.
pub(crate) fn write_turtle_string(output: &mut String, value: &str) {
    let delimiter = if value.contains(['\n', '\r']) {
        "\"\"\""
    } else {
        "\""
    };
    output.push_str(delimiter);
    for c in value.chars() {
        match c {
            '\\' => output.push_str("\\\\"),
            '"' => output.push_str("\\\""),
            c => output.push(c),
        }
    }
    output.push_str(delimiter);
}

/// Writes an N-Triples string literal, escaping `\`, `"`, line feeds, carriage returns and tabs.
pub(crate) fn write_ntriples_string(output: &mut String, value: &str) {
    output.push('"');
    for c in value.chars() {
        match c {
            '\\' => output.push_str("\\\\"),
            '"' => output.push_str("\\\""),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c => output.push(c),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(value: &str) -> String {
        let mut output = String::new();
        write_iri(&mut output, value);
        output
    }

    fn turtle(value: &str) -> String {
        let mut output = String::new();
        write_turtle_string(&mut output, value);
        output
    }

    fn ntriples(value: &str) -> String {
        let mut output = String::new();
        write_ntriples_string(&mut output, value);
        output
    }

    #[test]
    fn iri_escaping() {
        assert_eq!(iri("http://example.org/a"), "<http://example.org/a>");
        assert_eq!(iri("http://example.org/a b"), "<http://example.org/a\\u0020b>");
        assert_eq!(iri("http://example.org/<x>"), "<http://example.org/\\u003Cx\\u003E>");
    }

    #[test]
    fn turtle_escaping() {
        assert_eq!(turtle(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
        assert_eq!(turtle("tab\there"), "\"tab\there\"");
        assert_eq!(turtle("two\nlines"), "\"\"\"two\nlines\"\"\"");
    }

    #[test]
    fn ntriples_escaping() {
        assert_eq!(
            ntriples("a \"quote\", a \\ and\na line\r\tbreak"),
            r#""a \"quote\", a \\ and\na line\r\tbreak""#
        );
    }
}
