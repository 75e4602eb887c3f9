//! String encoding of triple objects for the flat representation
//!
//! Resources are kept as their bare identifier. Literals are wrapped in double quotes,
//! followed by `^^<datatype>` or `@language` when present, so any encoded value whose
//! first character is `"` is a literal.

use crate::core::{LiteralValue, Object};
use regex::Regex;
use std::sync::OnceLock;

/// Encode a literal as `"value"`, `"value"^^<datatype>` or `"value"@language`.
pub fn encode_literal(literal: &LiteralValue) -> String {
    if let Some(datatype) = literal.datatype() {
        format!("\"{}\"^^<{}>", literal.value, datatype)
    } else if let Some(language) = literal.language() {
        format!("\"{}\"@{}", literal.value, language)
    } else {
        format!("\"{}\"", literal.value)
    }
}

/// Encode an object for the flat representation.
pub fn encode_object(object: &Object) -> String {
    match object {
        Object::Resource(iri) => iri.to_string(),
        Object::Literal(literal) => encode_literal(literal),
    }
}

/// Shared pattern matching encoded literals, compiled on first use.
pub fn literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"^""#).expect("literal pattern is a valid regex"))
}

/// Whether an encoded object is a literal, detected by its leading quote.
pub fn is_encoded_literal(encoded: &str) -> bool {
    literal_pattern().is_match(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_plain_literal() {
        assert_eq!(encode_literal(&LiteralValue::plain("abc")), "\"abc\"");
    }

    #[test]
    fn test_encode_typed_literal() {
        let literal = LiteralValue::typed("abc", "Xy12");
        assert_eq!(encode_literal(&literal), "\"abc\"^^<Xy12>");
    }

    #[test]
    fn test_encode_language_literal() {
        let literal = LiteralValue::language_tagged("abc", "en");
        assert_eq!(encode_literal(&literal), "\"abc\"@en");
    }

    #[test]
    fn test_literal_detection() {
        assert!(is_encoded_literal("\"abc\"@en"));
        assert!(!is_encoded_literal("http://example.com/abc"));
        assert!(!is_encoded_literal(""));
        let literal = Object::Literal(LiteralValue::plain("x").into());
        let resource = Object::Resource("http://example.com/x".into());
        assert!(is_encoded_literal(&encode_object(&literal)));
        assert!(!is_encoded_literal(&encode_object(&resource)));
    }
}
