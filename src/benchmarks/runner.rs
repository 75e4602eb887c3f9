//! Test execution
//!
//! A [`Runner`] owns the registry, the benchmark context and the report sink. Running a
//! test quiesces memory, runs the untimed setup (which may run a prerequisite test and
//! print its line first), times the measure phase, samples memory and prints one line:
//!
//! ```text
//! <id>. <name>: <seconds>s <megabytes>MB
//! ```

use crate::benchmarks::memory_tracker::{MemorySample, MemoryTracker};
use crate::config::BenchConfig;
use crate::error::{Error, Result};
use crate::generator::{Dataset, SeededRandom};
use crate::registry::{TestCase, TestExecutor, TestId, TestRegistry};
use crate::representation::{build_store, ObjectGraphStore, StringTripleStore};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;

/// Data shared by every test: configuration, generated dataset, the PRNG that produced
/// it, and the current instance of each representation.
#[derive(Debug)]
pub struct BenchContext {
    pub(crate) config: BenchConfig,
    pub(crate) rng: SeededRandom,
    pub(crate) dataset: Dataset,
    pub(crate) object_graph: Option<ObjectGraphStore>,
    pub(crate) string_triples: Option<StringTripleStore>,
}

impl BenchContext {
    /// Generate the dataset described by `config`.
    pub fn new(config: BenchConfig) -> Result<Self> {
        let mut rng = SeededRandom::new(config.seed);
        let start = Instant::now();
        let dataset = Dataset::generate(&config, &mut rng)?;
        log::info!(
            "Generated {} triples in {:.3}s",
            dataset.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(Self { config, rng, dataset, object_graph: None, string_triples: None })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn object_graph(&self) -> Result<&ObjectGraphStore> {
        self.object_graph.as_ref().ok_or(Error::MissingRepresentation("object graph"))
    }

    pub fn string_triples(&self) -> Result<&StringTripleStore> {
        self.string_triples.as_ref().ok_or(Error::MissingRepresentation("string triples"))
    }

    /// Replace the structured store with one freshly built from the dataset.
    pub fn rebuild_object_graph(&mut self) -> Result<()> {
        // Drop the previous instance first so both never coexist.
        self.object_graph = None;
        let store = ObjectGraphStore::with_capacity(self.dataset.len());
        self.object_graph = Some(build_store(store, &self.dataset)?);
        Ok(())
    }

    /// Replace the flat store with one freshly built from the dataset.
    pub fn rebuild_string_triples(&mut self) -> Result<()> {
        self.string_triples = None;
        let store = StringTripleStore::with_capacity(self.dataset.len());
        self.string_triples = Some(build_store(store, &self.dataset)?);
        Ok(())
    }
}

/// Outcome of one test run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub id: TestId,
    pub name: String,
    pub elapsed_seconds: f64,
    /// Memory after the measure phase; this is the reported figure
    pub memory: MemorySample,
    /// Memory when the test started, before its setup ran
    pub baseline: MemorySample,
    pub triple_count: usize,
}

impl BenchmarkResult {
    /// `<id>. <name>: <seconds>s <megabytes>MB`
    pub fn report_line(&self) -> String {
        format!(
            "{}. {}: {}s {}MB",
            self.id,
            self.name,
            self.elapsed_seconds,
            self.memory.megabytes()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One report line per test
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

pub struct Runner<W: Write = std::io::Stdout> {
    registry: TestRegistry,
    context: BenchContext,
    memory: MemoryTracker,
    selector: Option<TestId>,
    format: OutputFormat,
    out: W,
    results: Vec<BenchmarkResult>,
}

impl Runner<std::io::Stdout> {
    /// Runner reporting to standard output.
    pub fn stdout(context: BenchContext, selector: Option<TestId>) -> Self {
        Self::new(context, selector, std::io::stdout())
    }
}

impl<W: Write> Runner<W> {
    pub fn new(context: BenchContext, selector: Option<TestId>, out: W) -> Self {
        let memory = MemoryTracker::new();
        if memory.source().is_approximate() {
            log::warn!(
                "Heap usage is not tracked by the allocator, reporting {:?} instead",
                memory.source()
            );
        }
        Self {
            registry: TestRegistry::new(),
            context,
            memory,
            selector,
            format: OutputFormat::Text,
            out,
            results: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Store a test case and run it right away if it is the selected one.
    pub fn register(&mut self, case: TestCase) -> Result<()> {
        let id = case.id;
        self.registry.register(case)?;
        if self.selector == Some(id) {
            self.run(id)?;
        }
        Ok(())
    }

    /// Fail if a selector was given but no registered test carries that id.
    pub fn finish(&self) -> Result<()> {
        match self.selector {
            Some(id) if !self.registry.contains(id) => Err(Error::UnknownTest(id)),
            _ => Ok(()),
        }
    }

    pub fn registry(&self) -> &TestRegistry {
        &self.registry
    }

    pub fn bench_context(&self) -> &BenchContext {
        &self.context
    }

    /// Results in the order their lines were reported.
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn report(&mut self, result: &BenchmarkResult) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", result.report_line())?,
            OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string(result)?)?,
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> TestExecutor for Runner<W> {
    fn run(&mut self, id: TestId) -> Result<BenchmarkResult> {
        let case = self.registry.get(id)?.clone();
        log::debug!("Running test {}: {}", case.id, case.name);

        let baseline = self.memory.quiesce();
        (case.setup)(self)?;

        let start = Instant::now();
        (case.measure)(&mut self.context)?;
        let elapsed = start.elapsed();
        let memory = self.memory.measure();

        let result = BenchmarkResult {
            id: case.id,
            name: case.name,
            elapsed_seconds: elapsed.as_secs_f64(),
            memory,
            baseline,
            triple_count: self.context.dataset.len(),
        };
        self.report(&result)?;
        self.results.push(result.clone());
        Ok(result)
    }
}
