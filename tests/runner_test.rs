use std::time::Duration;
use tribench::benchmarks::runner::{BenchContext, OutputFormat, Runner};
use tribench::benchmarks::suite::{self, register_standard_suite};
use tribench::config::BenchConfig;
use tribench::registry::{no_measure, no_setup, TestCase, TestExecutor, TestId};
use tribench::Error;

fn context(triple_count: usize) -> BenchContext {
    let config = BenchConfig { triple_count, find_count: 5, ..Default::default() };
    BenchContext::new(config).unwrap()
}

fn output_lines(output: Vec<u8>) -> Vec<String> {
    String::from_utf8(output).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn test_scenario_string_build_then_subject_find() {
    let selector = Some(suite::STRING_TRIPLES_BY_SUBJECT);
    let mut runner = Runner::new(context(1000), selector, Vec::new());
    register_standard_suite(&mut runner).unwrap();
    runner.finish().unwrap();

    let ids: Vec<TestId> = runner.results().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 2, 4]);
    assert!(runner.results().iter().all(|r| r.triple_count == 1000));

    let lines = output_lines(runner.into_output());
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("0. Empty test environment: "));
    assert!(lines[1].starts_with("2. Generate object/string-based triples: "));
    assert!(lines[2].starts_with("4. Find object/string-based triples with a given subject: "));
    for line in &lines {
        assert!(line.ends_with("MB"), "{}", line);
    }
}

#[test]
fn test_every_standard_test_runs() {
    for id in 0..=8 {
        let mut runner = Runner::new(context(500), Some(id), Vec::new());
        register_standard_suite(&mut runner).unwrap();
        runner.finish().unwrap();
        assert_eq!(runner.results().last().unwrap().id, id);
    }
}

#[test]
fn test_unmatched_selector_reports_nothing() {
    let mut runner = Runner::new(context(500), Some(99), Vec::new());
    register_standard_suite(&mut runner).unwrap();
    assert!(matches!(runner.finish(), Err(Error::UnknownTest(99))));
    assert!(runner.results().is_empty());
    assert!(runner.into_output().is_empty());
}

#[test]
fn test_no_selector_runs_nothing() {
    let mut runner = Runner::new(context(500), None, Vec::new());
    register_standard_suite(&mut runner).unwrap();
    runner.finish().unwrap();
    assert_eq!(runner.registry().len(), 9);
    assert!(runner.into_output().is_empty());
}

#[test]
fn test_direct_run_of_unknown_id_fails() {
    let mut runner = Runner::new(context(500), None, Vec::new());
    assert!(matches!(runner.run(3), Err(Error::UnknownTest(3))));
}

fn slow_measure(_: &mut BenchContext) -> tribench::Result<()> {
    std::thread::sleep(Duration::from_millis(50));
    Ok(())
}

fn run_slow_first(executor: &mut dyn TestExecutor) -> tribench::Result<()> {
    executor.run(1).map(|_| ())
}

#[test]
fn test_dependency_time_not_counted() {
    let mut runner = Runner::new(context(500), None, Vec::new());
    runner.register(TestCase::new(1, "Slow", no_setup, slow_measure)).unwrap();
    runner.register(TestCase::new(2, "Fast", run_slow_first, no_measure)).unwrap();

    let fast = runner.run(2).unwrap();
    let slow = &runner.results()[0];
    assert_eq!(slow.id, 1);
    assert!(slow.elapsed_seconds >= 0.05);
    assert!(fast.elapsed_seconds < 0.05);
}

#[test]
fn test_rebuild_keeps_single_instance() {
    let mut runner = Runner::new(context(500), None, Vec::new());
    register_standard_suite(&mut runner).unwrap();
    runner.run(suite::OBJECT_GRAPH_LITERALS).unwrap();
    runner.run(suite::OBJECT_GRAPH_BY_OBJECT).unwrap();

    let context = runner.bench_context();
    assert_eq!(context.object_graph().unwrap().triples().len(), 500);
    assert!(context.string_triples().is_err());
}

#[test]
fn test_json_output() {
    let mut runner =
        Runner::new(context(500), Some(0), Vec::new()).with_format(OutputFormat::Json);
    register_standard_suite(&mut runner).unwrap();

    let lines = output_lines(runner.into_output());
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["id"], 0);
    assert_eq!(value["name"], "Empty test environment");
    assert_eq!(value["triple_count"], 500);
    assert!(value["memory"]["source"].is_string());
    assert_eq!(value["baseline"]["source"], value["memory"]["source"]);
    assert!(value["baseline"]["bytes"].is_u64());
}

#[test]
fn test_results_carry_baseline_sample() {
    let mut runner = Runner::new(context(500), None, Vec::new());
    register_standard_suite(&mut runner).unwrap();
    let find = runner.run(suite::STRING_TRIPLES_BY_OBJECT).unwrap();
    let build = &runner.results()[1];
    assert_eq!(build.id, suite::BUILD_STRING_TRIPLES);

    assert_eq!(find.baseline.source, find.memory.source);
    assert_eq!(find.baseline.source, build.baseline.source);
}
