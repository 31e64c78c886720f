//! Fan-out dispatch: offer every message to every typed handler and rely on
//! the silent no-op for mismatches. Run with `cargo run --example fanout`.

use jobcast::{Callback, JobId};

// Concrete callbacks, as a wire decoder would produce them
#[derive(Clone, Debug, Callback)]
struct PingResult {
    latency_ms: u32,
}

#[derive(Clone, Debug, Callback)]
struct QueryResult {
    job_id: JobId,
    rows: Vec<String>,
}

#[derive(Clone, Debug, Callback)]
enum ConnectionState {
    Up,
    Down(String),
}

fn main() {
    tracing_subscriber::fmt().init();

    let inbox: Vec<Box<dyn Callback>> = vec![
        Box::new(ConnectionState::Up),
        Box::new(PingResult { latency_ms: 23 }),
        Box::new(QueryResult {
            job_id: JobId::new(42),
            rows: vec!["alice".into(), "bob".into()],
        }),
        Box::new(ConnectionState::Down("remote reset".into())),
    ];

    for msg in &inbox {
        tracing::debug!(name = %msg.name(), job = %msg.job_id(), "dispatching");

        msg.handle::<PingResult>(|ping| {
            println!("ping came back in {}ms", ping.latency_ms);
        });
        msg.handle::<QueryResult>(|query| {
            println!("job {} returned {} rows", query.job_id(), query.rows.len());
        });
        msg.handle::<ConnectionState>(|state| match state {
            ConnectionState::Up => println!("connected"),
            ConnectionState::Down(reason) => println!("disconnected: {reason}"),
        });
    }
}
