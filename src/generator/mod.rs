//! Deterministic synthetic RDF data

pub mod dataset;
pub mod random;

pub use dataset::Dataset;
pub use random::SeededRandom;
