//! The standard comparison suite.
//!
//! Odd ids exercise the structured store, even ids from 2 up the flat store. Query
//! tests first run the matching build test, whose line is printed before their own.

use crate::benchmarks::runner::{BenchContext, Runner};
use crate::error::Result;
use crate::registry::{no_measure, no_setup, TestCase, TestExecutor, TestId};
use crate::representation::TripleStore;
use std::hint::black_box;
use std::io::Write;

pub const EMPTY: TestId = 0;
pub const BUILD_OBJECT_GRAPH: TestId = 1;
pub const BUILD_STRING_TRIPLES: TestId = 2;
pub const OBJECT_GRAPH_BY_SUBJECT: TestId = 3;
pub const STRING_TRIPLES_BY_SUBJECT: TestId = 4;
pub const OBJECT_GRAPH_BY_OBJECT: TestId = 5;
pub const STRING_TRIPLES_BY_OBJECT: TestId = 6;
pub const OBJECT_GRAPH_LITERALS: TestId = 7;
pub const STRING_TRIPLES_LITERALS: TestId = 8;

/// Every test of the suite, in registration order.
pub fn standard_tests() -> Vec<TestCase> {
    vec![
        TestCase::new(EMPTY, "Empty test environment", no_setup, no_measure),
        TestCase::new(
            BUILD_OBJECT_GRAPH,
            "Generate prototype-based triples",
            after_empty,
            build_object_graph,
        ),
        TestCase::new(
            BUILD_STRING_TRIPLES,
            "Generate object/string-based triples",
            after_empty,
            build_string_triples,
        ),
        TestCase::new(
            OBJECT_GRAPH_BY_SUBJECT,
            "Find prototype-based triples with a given subject",
            after_object_graph,
            object_graph_by_subject,
        ),
        TestCase::new(
            STRING_TRIPLES_BY_SUBJECT,
            "Find object/string-based triples with a given subject",
            after_string_triples,
            string_triples_by_subject,
        ),
        TestCase::new(
            OBJECT_GRAPH_BY_OBJECT,
            "Find prototype-based triples with a given object",
            after_object_graph,
            object_graph_by_object,
        ),
        TestCase::new(
            STRING_TRIPLES_BY_OBJECT,
            "Find object/string-based triples with a given object",
            after_string_triples,
            string_triples_by_object,
        ),
        TestCase::new(
            OBJECT_GRAPH_LITERALS,
            "Check prototype-based triples for literals",
            after_object_graph,
            object_graph_literals,
        ),
        TestCase::new(
            STRING_TRIPLES_LITERALS,
            "Check object/string-based triples for literals",
            after_string_triples,
            string_triples_literals,
        ),
    ]
}

/// Register the whole suite; the selected test runs as soon as it is registered.
pub fn register_standard_suite<W: Write>(runner: &mut Runner<W>) -> Result<()> {
    for case in standard_tests() {
        runner.register(case)?;
    }
    Ok(())
}

fn after_empty(executor: &mut dyn TestExecutor) -> Result<()> {
    executor.run(EMPTY).map(|_| ())
}

fn after_object_graph(executor: &mut dyn TestExecutor) -> Result<()> {
    executor.run(BUILD_OBJECT_GRAPH).map(|_| ())
}

fn after_string_triples(executor: &mut dyn TestExecutor) -> Result<()> {
    executor.run(BUILD_STRING_TRIPLES).map(|_| ())
}

fn build_object_graph(context: &mut BenchContext) -> Result<()> {
    context.rebuild_object_graph()
}

fn build_string_triples(context: &mut BenchContext) -> Result<()> {
    context.rebuild_string_triples()
}

fn object_graph_by_subject(context: &mut BenchContext) -> Result<()> {
    let store = context.object_graph.as_ref().ok_or(missing("object graph"))?;
    let subjects = context.dataset.subjects();
    for _ in 0..context.config.find_count {
        let subject = &subjects[context.rng.index(subjects.len())];
        black_box(store.match_subject(subject));
    }
    Ok(())
}

fn string_triples_by_subject(context: &mut BenchContext) -> Result<()> {
    let store = context.string_triples.as_ref().ok_or(missing("string triples"))?;
    for _ in 0..context.config.find_count {
        let triple = &store.triples()[context.rng.index(store.len())];
        black_box(store.match_subject(&triple.subject));
    }
    Ok(())
}

fn object_graph_by_object(context: &mut BenchContext) -> Result<()> {
    let store = context.object_graph.as_ref().ok_or(missing("object graph"))?;
    let objects = context.dataset.objects();
    for _ in 0..context.config.find_count {
        let object = &objects[context.rng.index(objects.len())];
        let term = store.object_key(object)?;
        black_box(store.match_object(&term));
    }
    Ok(())
}

fn string_triples_by_object(context: &mut BenchContext) -> Result<()> {
    let store = context.string_triples.as_ref().ok_or(missing("string triples"))?;
    for _ in 0..context.config.find_count {
        let triple = &store.triples()[context.rng.index(store.len())];
        black_box(store.match_object(&triple.object));
    }
    Ok(())
}

fn object_graph_literals(context: &mut BenchContext) -> Result<()> {
    black_box(context.object_graph()?.filter_literals());
    Ok(())
}

fn string_triples_literals(context: &mut BenchContext) -> Result<()> {
    black_box(context.string_triples()?.filter_literals());
    Ok(())
}

fn missing(representation: &'static str) -> crate::error::Error {
    crate::error::Error::MissingRepresentation(representation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TestRegistry;

    #[test]
    fn test_suite_ids_are_contiguous() {
        let ids: Vec<TestId> = standard_tests().iter().map(|case| case.id).collect();
        assert_eq!(ids, (0..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_suite_registers_into_registry() {
        let mut registry = TestRegistry::new();
        for case in standard_tests() {
            registry.register(case).unwrap();
        }
        assert_eq!(registry.len(), 9);
        assert_eq!(
            registry.get(STRING_TRIPLES_BY_SUBJECT).unwrap().name,
            "Find object/string-based triples with a given subject"
        );
    }
}
