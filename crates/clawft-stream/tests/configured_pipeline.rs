//! Configured pipeline integration tests.
//!
//! Exercises `Pipeline` end to end: config loading, element limits, run
//! reports, and tracing output under an installed subscriber.

use std::cell::Cell;

use clawft_stream::{
    Pipeline, RunReport, StreamConfig, StreamError, chain, range, sink_with_flush, sort, source,
    to_vector,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("clawft_stream=trace")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn config_from_json_drives_run() {
    init_tracing();
    let config = StreamConfig::from_json(r#"{"name": "json-run", "maxElements": 10}"#).unwrap();
    let pipeline = Pipeline::new(config).unwrap();
    assert_eq!(pipeline.config().name, "json-run");

    let input = vec![3, 1, 2];
    let (result, report) = pipeline
        .run_with_report(source(&input), chain!(sort(), to_vector()))
        .unwrap();
    assert_eq!(result.value(), &[1, 2, 3]);
    assert_eq!(report, RunReport { pulled: 3 });
}

#[test]
fn limit_violation_skips_flush() {
    init_tracing();
    let pipeline = Pipeline::new(StreamConfig::named("limited").with_max_elements(4)).unwrap();
    let flushed = Cell::new(false);

    let outcome = pipeline.run(
        range(0..5),
        chain!(sort(), sink_with_flush(|_: i32| {}, || flushed.set(true))),
    );

    match outcome {
        Err(StreamError::LimitExceeded { limit }) => assert_eq!(limit, 4),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("run should exceed the limit"),
    }
    assert!(!flushed.get());
}

#[test]
fn invalid_json_config_is_rejected() {
    let err = StreamConfig::from_json(r#"{"name": ""}"#).unwrap_err();
    assert!(matches!(err, StreamError::ConfigInvalid { .. }));
}

#[test]
fn empty_source_reports_zero_pulled() {
    init_tracing();
    let input: Vec<i32> = Vec::new();
    let (result, report) = Pipeline::default()
        .run_with_report(source(&input), chain!(to_vector()))
        .unwrap();
    assert!(result.is_empty());
    assert_eq!(report.pulled, 0);
}
