//! Pre-filtered dispatch: an O(1) routing table keyed by runtime type, plus
//! a pending-request table keyed by job id. Run with
//! `cargo run --example routing`.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

use jobcast::{Callback, JobId};

#[derive(Clone, Debug, Callback)]
struct PingResult {
    latency_ms: u32,
}

#[derive(Clone, Debug, Callback)]
struct QueryResult {
    job_id: JobId,
    rows: Vec<String>,
}

type Route = Box<dyn Fn(&dyn Callback)>;

#[derive(Default)]
struct Router {
    routes: HashMap<TypeId, Route>,
}

impl Router {
    fn route<T: Callback>(mut self, handler: impl Fn(&T) + 'static) -> Self {
        self.routes.insert(
            TypeId::of::<T>(),
            Box::new(move |msg: &dyn Callback| msg.handle::<T>(&handler)),
        );
        self
    }

    fn dispatch(&self, msg: &dyn Callback) {
        let any: &dyn Any = msg;
        match self.routes.get(&any.type_id()) {
            Some(route) => route(msg),
            None => tracing::warn!(name = %msg.name(), "no route registered"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    // Requests we sent earlier, waiting for their correlated responses
    let pending: HashMap<JobId, &str> = HashMap::from([
        (JobId::new(42), "SELECT name FROM users"),
        (JobId::new(43), "SELECT id FROM orders"),
    ]);

    let router = Router::default()
        .route::<PingResult>(|ping| println!("ping: {}ms", ping.latency_ms))
        .route::<QueryResult>(move |query| {
            match pending.get(&query.job_id()) {
                Some(sql) => println!("{} rows for `{sql}`", query.rows.len()),
                None => println!("unsolicited query result, dropping"),
            }
        });

    let inbox: Vec<Box<dyn Callback>> = vec![
        Box::new(PingResult { latency_ms: 17 }),
        Box::new(QueryResult {
            job_id: JobId::new(42),
            rows: vec!["alice".into(), "bob".into()],
        }),
        Box::new(QueryResult {
            job_id: JobId::INVALID,
            rows: vec![],
        }),
    ];

    for msg in &inbox {
        router.dispatch(msg.as_ref());
    }
}
