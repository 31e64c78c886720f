//! Jobcast - typed, job-correlated callback dispatch
//!
//! The dispatch kernel of callback-driven client libraries: every event a
//! client receives becomes a concrete type implementing the [`Callback`]
//! contract, optionally tagged with the [`JobId`] of the request that caused
//! it. Erased `dyn Callback` values can then be type-tested and routed to
//! typed handlers without unsafe casts.
//!
//! Subscription tables, wire decoding, and routing policy belong to the
//! surrounding dispatcher, not to this crate.
//!
//! See `demos/fanout.rs` and `demos/routing.rs`.

mod callback;
mod error;
mod job_id;

#[cfg(feature = "test-harness")]
pub mod testing;

pub use callback::Callback;
pub use error::Error;
pub use job_id::JobId;

#[cfg(feature = "macros")]
pub use jobcast_macros::Callback;

pub type Result<T = ()> = std::result::Result<T, Error>;
