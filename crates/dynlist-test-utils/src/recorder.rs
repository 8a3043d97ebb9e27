//! Callback recording for assertions in tests.

use std::sync::Arc;

use parking_lot::Mutex;

/// Records events pushed from callbacks.
///
/// Cloning a recorder shares the underlying buffer, so one clone can be moved
/// into a callback while the test keeps another for assertions.
///
/// # Borrow Checking Pattern: Interior Mutability
///
/// Engine callbacks are `Fn`, not `FnMut`, so recording goes through a
/// `parking_lot::Mutex` behind an `Arc`.
#[derive(Debug)]
pub struct EventRecorder<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E> Clone for EventRecorder<E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<E: Clone> EventRecorder<E> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&self, event: E) {
        self.events.lock().push(event);
    }

    /// Snapshot of all recorded events in order.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().clone()
    }

    /// Most recent event, if any.
    pub fn last(&self) -> Option<E> {
        self.events.lock().last().cloned()
    }

    /// Number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drain all recorded events.
    pub fn take(&self) -> Vec<E> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventRecorder<(usize, usize)> {
    /// A `(from, to)` callback that records each invocation.
    pub fn pair_callback(&self) -> impl Fn(usize, usize) + 'static {
        let recorder = self.clone();
        move |from, to| recorder.record((from, to))
    }
}
