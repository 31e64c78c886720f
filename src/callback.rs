use std::{
    any::{Any, type_name},
    borrow::Cow,
};

use crate::JobId;

/// Contract every concrete callback type implements.
///
/// A callback is the typed form of one event kind a client can receive:
/// plain structs (or enums) holding the event's payload, one type per kind.
/// The decoder that produces an instance sets its [`JobId`] when the event
/// answers an earlier request; everything else reads as uncorrelated.
///
/// Callbacks must be `Send + Sync + 'static` because they are handed around
/// as erased `Box<dyn Callback>` values and may be type-tested from any
/// thread. Implement by hand or with `#[derive(Callback)]`, which picks up a
/// field named (or tagged) `job_id` automatically.
///
/// Dispatch happens through the inherent methods on `dyn Callback`:
/// [`is`](dyn Callback::is), [`downcast_ref`](dyn Callback::downcast_ref)
/// and [`handle`](dyn Callback::handle).
pub trait Callback: Any + Send + Sync {
    /// Job this callback answers, or [`JobId::INVALID`] when it is not a
    /// response to any request.
    fn job_id(&self) -> JobId {
        JobId::INVALID
    }

    /// Human-readable label for the dispatcher's diagnostics.
    ///
    /// The default implementation returns the type name via
    /// `std::any::type_name`. Dispatch itself never consults it.
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(type_name::<Self>())
    }
}

impl dyn Callback {
    /// Returns `true` iff this callback's runtime type is `T`.
    ///
    /// Pure query; a mismatch is not an error. Repeated calls on the same
    /// instance always agree.
    pub fn is<T: Callback>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Safe downcast to the concrete type, or `None` on mismatch.
    ///
    /// This is the building block for routing tables keyed by `TypeId`:
    /// resolve the handler first, then downcast exactly once.
    pub fn downcast_ref<T: Callback>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Invokes `handler` iff this callback's runtime type is `T`.
    ///
    /// The handler runs synchronously on the caller's thread, at most once.
    /// A type mismatch returns normally without invoking it. Panics raised
    /// inside the handler propagate unchanged; isolation, queuing and retry
    /// are the dispatcher's business, not this layer's.
    pub fn handle<T: Callback>(&self, handler: impl FnOnce(&T)) {
        if let Some(callback) = self.downcast_ref::<T>() {
            handler(callback);
        }
    }
}
