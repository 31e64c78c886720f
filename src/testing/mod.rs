//! Test harness for asserting on handler invocations.
//!
//! Enable with the `test-harness` feature:
//!
//! ```toml
//! [dev-dependencies]
//! jobcast = { version = "0.1", features = ["test-harness"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! let spy = CallbackSpy::<QueryResult>::new();
//! msg.handle::<QueryResult>(spy.recorder());
//!
//! assert_eq!(1, spy.count());
//! assert_eq!(vec![JobId::new(42)], spy.job_ids());
//! ```

mod callback_spy;

pub use callback_spy::CallbackSpy;
