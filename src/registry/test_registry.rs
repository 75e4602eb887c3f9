use std::collections::BTreeMap;

use crate::benchmarks::runner::{BenchContext, BenchmarkResult};
use crate::error::{Error, Result};

pub type TestId = u32;

/// Executes registered tests. Handed to setup phases so they can materialize a
/// prerequisite test first.
pub trait TestExecutor {
    /// Run the test registered under `id`, including its report line.
    fn run(&mut self, id: TestId) -> Result<BenchmarkResult>;
}

/// Untimed preparation, may run other tests through the executor.
pub type SetupFn = fn(&mut dyn TestExecutor) -> Result<()>;

/// Timed phase.
pub type MeasureFn = fn(&mut BenchContext) -> Result<()>;

/// A named pair of setup and measure phases.
#[derive(Clone)]
pub struct TestCase {
    pub id: TestId,
    pub name: String,
    pub setup: SetupFn,
    pub measure: MeasureFn,
}

impl TestCase {
    pub fn new(id: TestId, name: impl Into<String>, setup: SetupFn, measure: MeasureFn) -> Self {
        Self { id, name: name.into(), setup, measure }
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase").field("id", &self.id).field("name", &self.name).finish()
    }
}

/// Setup that prepares nothing.
pub fn no_setup(_: &mut dyn TestExecutor) -> Result<()> {
    Ok(())
}

/// Measure phase that does nothing.
pub fn no_measure(_: &mut BenchContext) -> Result<()> {
    Ok(())
}

/// Test cases keyed by id, kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct TestRegistry {
    tests: BTreeMap<TestId, TestCase>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a test case. Ids are unique.
    pub fn register(&mut self, case: TestCase) -> Result<()> {
        if self.tests.contains_key(&case.id) {
            return Err(Error::DuplicateTest(case.id));
        }
        log::debug!("Registered test {}: {}", case.id, case.name);
        self.tests.insert(case.id, case);
        Ok(())
    }

    pub fn get(&self, id: TestId) -> Result<&TestCase> {
        self.tests.get(&id).ok_or(Error::UnknownTest(id))
    }

    pub fn contains(&self, id: TestId) -> bool {
        self.tests.contains_key(&id)
    }

    /// Registered tests in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.tests.values()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TestRegistry::new();
        registry.register(TestCase::new(3, "third", no_setup, no_measure)).unwrap();
        registry.register(TestCase::new(1, "first", no_setup, no_measure)).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(3).unwrap().name, "third");
        let ids: Vec<TestId> = registry.iter().map(|case| case.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = TestRegistry::new();
        registry.register(TestCase::new(1, "first", no_setup, no_measure)).unwrap();
        let result = registry.register(TestCase::new(1, "again", no_setup, no_measure));
        assert!(matches!(result, Err(Error::DuplicateTest(1))));
        assert_eq!(registry.get(1).unwrap().name, "first");
    }

    #[test]
    fn test_unknown_id() {
        let registry = TestRegistry::new();
        assert!(matches!(registry.get(42), Err(Error::UnknownTest(42))));
    }
}
