//! Integration tests for the test-harness spy.

use jobcast::{Callback, JobId, testing::CallbackSpy};

#[derive(Clone, Debug, PartialEq, Callback)]
struct QueryResult {
    job_id: JobId,
    rows: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Callback)]
struct PingResult {
    latency_ms: u32,
}

#[test]
fn test_spy_observes_matching_dispatch() {
    let msg: Box<dyn Callback> = Box::new(QueryResult {
        job_id: JobId::new(42),
        rows: vec!["row".into()],
    });

    let spy = CallbackSpy::<QueryResult>::new();
    msg.handle::<QueryResult>(spy.recorder());

    assert_eq!(spy.count(), 1);
    assert_eq!(spy.job_ids(), vec![JobId::new(42)]);
    assert_eq!(spy.last().unwrap().rows, vec!["row".to_string()]);
}

#[test]
fn test_spy_stays_empty_on_mismatch() {
    let msg: Box<dyn Callback> = Box::new(PingResult { latency_ms: 1 });

    let spy = CallbackSpy::<QueryResult>::new();
    msg.handle::<QueryResult>(spy.recorder());

    assert!(spy.is_empty());
}

#[test]
fn test_one_spy_across_a_batch() {
    let batch: Vec<Box<dyn Callback>> = vec![
        Box::new(QueryResult {
            job_id: JobId::new(1),
            rows: vec![],
        }),
        Box::new(PingResult { latency_ms: 2 }),
        Box::new(QueryResult {
            job_id: JobId::new(3),
            rows: vec![],
        }),
    ];

    let spy = CallbackSpy::<QueryResult>::new();
    for msg in &batch {
        msg.handle::<QueryResult>(spy.recorder());
    }

    assert_eq!(spy.count(), 2);
    assert_eq!(spy.job_ids(), vec![JobId::new(1), JobId::new(3)]);
}
