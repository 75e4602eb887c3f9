//! Structured representation built on the oxigraph term model.
//!
//! Every triple holds typed terms: IRIs as [`NamedNode`] and objects as [`Term`], so a
//! literal check is a match on the term variant.
//!
//! # Example
//!
//! ```
//! use tribench::core::{LiteralValue, Object};
//! use tribench::representation::{ObjectGraphStore, TripleStore};
//!
//! let mut store = ObjectGraphStore::new();
//! let literal = Object::Literal(LiteralValue::language_tagged("hello", "en").into());
//! store.insert("http://example.com/s", "http://example.com/p", &literal).unwrap();
//! assert_eq!(store.filter_literals().len(), 1);
//! ```

use crate::core::Object;
use crate::error::Result;
use crate::representation::TripleStore;
use oxigraph::model::{Literal, NamedNode, Term};

/// One structured triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTriple {
    pub subject: NamedNode,
    pub predicate: NamedNode,
    pub object: Term,
}

#[derive(Debug, Default)]
pub struct ObjectGraphStore {
    triples: Vec<ObjectTriple>,
}

impl ObjectGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { triples: Vec::with_capacity(capacity) }
    }

    pub fn triples(&self) -> &[ObjectTriple] {
        &self.triples
    }
}

/// Build the oxigraph term for a generated object.
///
/// Resource IRIs are validated. Synthetic datatypes and language tags are random
/// strings that are neither IRIs nor BCP47 tags, so they are stored unchecked.
pub fn to_term(object: &Object) -> Result<Term> {
    Ok(match object {
        Object::Resource(iri) => NamedNode::new(&**iri)?.into(),
        Object::Literal(literal) => {
            let value = literal.value.as_str();
            if let Some(datatype) = literal.datatype() {
                Literal::new_typed_literal(value, NamedNode::new_unchecked(datatype)).into()
            } else if let Some(language) = literal.language() {
                Literal::new_language_tagged_literal_unchecked(value, language).into()
            } else {
                Literal::new_simple_literal(value).into()
            }
        }
    })
}

impl TripleStore for ObjectGraphStore {
    type Triple = ObjectTriple;
    type ObjectKey = Term;

    fn insert(&mut self, subject: &str, predicate: &str, object: &Object) -> Result<()> {
        self.triples.push(ObjectTriple {
            subject: NamedNode::new(subject)?,
            predicate: NamedNode::new(predicate)?,
            object: to_term(object)?,
        });
        Ok(())
    }

    fn object_key(&self, object: &Object) -> Result<Term> {
        to_term(object)
    }

    fn match_subject(&self, subject: &str) -> Vec<&ObjectTriple> {
        self.triples.iter().filter(|t| t.subject.as_str() == subject).collect()
    }

    fn match_object(&self, object: &Term) -> Vec<&ObjectTriple> {
        self.triples.iter().filter(|t| &t.object == object).collect()
    }

    fn filter_literals(&self) -> Vec<&ObjectTriple> {
        self.triples.iter().filter(|t| matches!(t.object, Term::Literal(_))).collect()
    }

    fn len(&self) -> usize {
        self.triples.len()
    }
}
