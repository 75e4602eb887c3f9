//! Configuration structures and utilities

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of triples sharing one pooled resource or literal.
pub const POOL_DIVISOR: usize = 50;

/// Benchmark configuration.
///
/// Every field has a default, so a JSON file only needs to name the values it changes:
///
/// ```json
/// { "triple_count": 100000, "find_count": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of triples in the generated dataset
    pub triple_count: usize,
    /// Number of lookups issued by each find test
    pub find_count: usize,
    /// Initial value of the PRNG seed counter
    pub seed: u64,
    /// Prefix prepended to every resource identifier
    pub namespace: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            triple_count: 7_000_000,
            find_count: 100,
            seed: 1,
            namespace: "http://example.com/".to_string(),
        }
    }
}

impl BenchConfig {
    /// Load a configuration from a JSON file, filling missing fields with defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: BenchConfig = serde_json::from_str(&contents)?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Size of the resource pool and of the literal pool.
    pub fn pool_size(&self) -> usize {
        self.triple_count / POOL_DIVISOR
    }

    /// Reject configurations that would produce degenerate datasets.
    pub fn validate(&self) -> Result<()> {
        if self.triple_count == 0 {
            return Err(Error::Config("triple count must be positive".to_string()));
        }
        if self.pool_size() == 0 {
            return Err(Error::Config(format!(
                "triple count {} is too small, at least {} triples are needed to fill the pools",
                self.triple_count, POOL_DIVISOR
            )));
        }
        Ok(())
    }
}
