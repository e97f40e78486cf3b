//! Completion notifier returned by every start call.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum State {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

#[derive(Default)]
struct Inner {
    state: State,
    listeners: Vec<Box<dyn FnOnce()>>,
}

/// Shared handle to a tween's completion listeners.
///
/// Clones observe the same tween. Listeners run synchronously, in the order
/// they were attached, the moment the tween finishes. Stopping or cancelling a
/// tween drops its listeners without running them.
#[derive(Clone, Default)]
pub struct Completion {
    inner: Rc<RefCell<Inner>>,
}

impl Completion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener. Ignored once the tween has already finished or been cancelled.
    pub fn on_complete(&self, listener: impl FnOnce() + 'static) -> &Self {
        let mut inner = self.inner.borrow_mut();
        if inner.state == State::Pending {
            inner.listeners.push(Box::new(listener));
        }
        self
    }

    pub fn is_complete(&self) -> bool {
        self.inner.borrow().state == State::Completed
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.borrow().state == State::Cancelled
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Run every listener once. Later calls are no-ops.
    pub(crate) fn fire(&self) {
        // Release the borrow before running listeners so they may touch this handle.
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.state != State::Pending {
                return;
            }
            inner.state = State::Completed;
            std::mem::take(&mut inner.listeners)
        };
        for listener in listeners {
            listener();
        }
    }

    pub(crate) fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state == State::Pending {
            inner.state = State::Cancelled;
            inner.listeners.clear();
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Completion")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
