//! # Tribench
//!
//! Tribench measures the time and memory cost of two competing in-memory
//! representations of RDF triples: a structured one, where every term is a typed
//! object, and a flat one, where every triple is three strings and literals are
//! recognised by their leading quote.
//!
//! A deterministic generator produces a synthetic dataset shaped like real RDF
//! graphs (few predicates account for most triples, literals mix plain, typed and
//! language-tagged values). A runner then executes one registered test at a time,
//! timing only its measure phase and reporting heap usage afterwards.
//!
//! ## Example
//!
//! ```rust
//! use tribench::benchmarks::runner::{BenchContext, Runner};
//! use tribench::benchmarks::suite::register_standard_suite;
//! use tribench::config::BenchConfig;
//!
//! fn example() -> tribench::Result<()> {
//!     let config = BenchConfig { triple_count: 1000, ..Default::default() };
//!     let mut runner = Runner::new(BenchContext::new(config)?, Some(4), Vec::new());
//!     register_standard_suite(&mut runner)?;
//!     runner.finish()?;
//!     assert_eq!(runner.results().len(), 3);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::new_without_default)]

/// Core data structures and types
pub mod core;

/// Deterministic dataset generation
pub mod generator;

/// Triple representations under comparison
pub mod representation;

/// Test case registry
pub mod registry;

/// Test execution, memory measurement and the standard suite
pub mod benchmarks;

/// Configuration structures and utilities
pub mod config;

/// Error types and result definitions
pub mod error;

// Re-export commonly used types
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("test error".to_string());
        assert_eq!(format!("{}", err), "Configuration error: test error");
    }
}
