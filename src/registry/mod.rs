pub mod test_registry;

pub use test_registry::{
    no_measure, no_setup, MeasureFn, SetupFn, TestCase, TestExecutor, TestId, TestRegistry,
};
