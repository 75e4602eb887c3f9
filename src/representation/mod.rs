//! Triple representations under comparison
//!
//! Both representations implement [`TripleStore`], the only contract the benchmark
//! relies on: append a triple, scan by subject, scan by object, and pick out the
//! triples whose object is a literal. No indexing is expected; the benchmark measures
//! whatever each encoding costs.

use crate::core::Object;
use crate::error::Result;
use crate::generator::Dataset;

pub mod object_graph;
pub mod string_triples;

pub use object_graph::{ObjectGraphStore, ObjectTriple};
pub use string_triples::{StringTriple, StringTripleStore};

pub trait TripleStore {
    /// Stored triple type.
    type Triple;
    /// Object encoding used for lookups.
    type ObjectKey;

    /// Append a triple.
    fn insert(&mut self, subject: &str, predicate: &str, object: &Object) -> Result<()>;

    /// Convert a generated object into this store's object encoding.
    fn object_key(&self, object: &Object) -> Result<Self::ObjectKey>;

    fn match_subject(&self, subject: &str) -> Vec<&Self::Triple>;

    fn match_object(&self, object: &Self::ObjectKey) -> Vec<&Self::Triple>;

    /// Triples whose object is a literal.
    fn filter_literals(&self) -> Vec<&Self::Triple>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build a store holding every triple of `dataset`, in order.
pub fn build_store<S: TripleStore>(mut store: S, dataset: &Dataset) -> Result<S> {
    for triple in dataset.triples() {
        store.insert(triple.subject, triple.predicate, triple.object)?;
    }
    Ok(store)
}
