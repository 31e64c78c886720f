use std::sync::{Arc, Mutex};

use crate::{Callback, JobId};

/// Records every value a handler receives, for test assertions.
///
/// The spy hands out recording closures via [`recorder`](Self::recorder);
/// each invocation clones the observed callback into a shared log, so tests
/// can assert on invocation counts and on the fields the handler actually
/// saw. Requires `T: Clone` so the log owns its entries.
///
/// Clones of a spy share the same log.
#[derive(Clone)]
pub struct CallbackSpy<T: Callback + Clone> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T: Callback + Clone> CallbackSpy<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handler that records each invocation.
    ///
    /// Cheap to create; every recorder from the same spy feeds one log.
    pub fn recorder(&self) -> impl Fn(&T) + Send + 'static {
        let calls = self.calls.clone();
        move |callback: &T| {
            calls.lock().expect("spy log poisoned").push(callback.clone());
        }
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.lock().expect("spy log poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Every recorded callback, in invocation order.
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().expect("spy log poisoned").clone()
    }

    /// The most recently recorded callback.
    pub fn last(&self) -> Option<T> {
        self.calls.lock().expect("spy log poisoned").last().cloned()
    }

    /// Job ids of every recorded callback, in invocation order.
    pub fn job_ids(&self) -> Vec<JobId> {
        self.calls
            .lock()
            .expect("spy log poisoned")
            .iter()
            .map(|c| c.job_id())
            .collect()
    }
}

impl<T: Callback + Clone> Default for CallbackSpy<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Probe {
        job_id: JobId,
    }

    impl Callback for Probe {
        fn job_id(&self) -> JobId {
            self.job_id
        }
    }

    #[test]
    fn test_spy_starts_empty() {
        let spy = CallbackSpy::<Probe>::new();
        assert!(spy.is_empty());
        assert_eq!(spy.last(), None);
    }

    #[test]
    fn test_spy_records_in_order() {
        let spy = CallbackSpy::<Probe>::new();
        let record = spy.recorder();
        record(&Probe {
            job_id: JobId::new(1),
        });
        record(&Probe {
            job_id: JobId::new(2),
        });

        assert_eq!(spy.count(), 2);
        assert_eq!(spy.job_ids(), vec![JobId::new(1), JobId::new(2)]);
        assert_eq!(
            spy.last(),
            Some(Probe {
                job_id: JobId::new(2)
            })
        );
    }

    #[test]
    fn test_recorders_share_one_log() {
        let spy = CallbackSpy::<Probe>::new();
        let a = spy.recorder();
        let b = spy.recorder();
        a(&Probe {
            job_id: JobId::new(1),
        });
        b(&Probe {
            job_id: JobId::new(2),
        });
        assert_eq!(spy.count(), 2);
    }
}
