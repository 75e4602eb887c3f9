//! Flat representation: every triple is three strings.
//!
//! Literal objects are stored pre-serialized (see [`crate::core::encoding`]), so a
//! literal check is a leading-quote pattern match on the object string.

use crate::core::{encode_object, literal_pattern, Object};
use crate::error::Result;
use crate::representation::TripleStore;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

#[derive(Debug)]
pub struct StringTripleStore {
    triples: Vec<StringTriple>,
    // Resolved on construction so queries never pay for compiling it.
    literal_pattern: &'static Regex,
}

impl Default for StringTripleStore {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl StringTripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { triples: Vec::with_capacity(capacity), literal_pattern: literal_pattern() }
    }

    /// Pattern used by [`TripleStore::filter_literals`].
    pub fn literal_pattern(&self) -> &Regex {
        self.literal_pattern
    }

    pub fn triples(&self) -> &[StringTriple] {
        &self.triples
    }

    pub fn get(&self, index: usize) -> Option<&StringTriple> {
        self.triples.get(index)
    }
}

impl TripleStore for StringTripleStore {
    type Triple = StringTriple;
    type ObjectKey = String;

    fn insert(&mut self, subject: &str, predicate: &str, object: &Object) -> Result<()> {
        self.triples.push(StringTriple {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: encode_object(object),
        });
        Ok(())
    }

    fn object_key(&self, object: &Object) -> Result<String> {
        Ok(encode_object(object))
    }

    fn match_subject(&self, subject: &str) -> Vec<&StringTriple> {
        self.triples.iter().filter(|t| t.subject == subject).collect()
    }

    fn match_object(&self, object: &String) -> Vec<&StringTriple> {
        self.triples.iter().filter(|t| &t.object == object).collect()
    }

    fn filter_literals(&self) -> Vec<&StringTriple> {
        self.triples.iter().filter(|t| self.literal_pattern.is_match(&t.object)).collect()
    }

    fn len(&self) -> usize {
        self.triples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LiteralValue;

    #[test]
    fn test_objects_are_encoded_on_insert() {
        let mut store = StringTripleStore::new();
        let literal = Object::Literal(LiteralValue::typed("1", "dt").into());
        store.insert("http://example.com/s", "http://example.com/p", &literal).unwrap();

        let triple = store.get(0).unwrap();
        assert_eq!(triple.object, "\"1\"^^<dt>");
        assert_eq!(store.match_object(&"\"1\"^^<dt>".to_string()).len(), 1);
        assert_eq!(store.filter_literals().len(), 1);
    }

    #[test]
    fn test_literal_pattern_ready_before_first_query() {
        let store = StringTripleStore::new();
        assert!(std::ptr::eq(store.literal_pattern(), literal_pattern()));
        assert!(store.literal_pattern().is_match("\"x\""));

        let store = StringTripleStore::with_capacity(10);
        assert!(std::ptr::eq(store.literal_pattern(), literal_pattern()));
    }
}
