use std::{cell::RefCell, rc::Rc};

/// Delay used for search-as-you-type inputs.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// A scheduled callback that can still be called off.
pub trait PendingCall {
    fn cancel(self);
}

#[cfg(target_arch = "wasm32")]
impl PendingCall for gloo_timers::callback::Timeout {
    fn cancel(self) {
        let _ = gloo_timers::callback::Timeout::cancel(self);
    }
}

/// Debouncer driven by browser timers.
#[cfg(target_arch = "wasm32")]
pub type TimerDebouncer = Debouncer<gloo_timers::callback::Timeout>;

/// Keeps at most one pending call; a newer call replaces and cancels the
/// older one, so only the last call in a quiet window runs.
pub struct Debouncer<P> {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    wait_ms: u32,
    pending: Rc<RefCell<Option<P>>>,
}

impl<P> Clone for Debouncer<P> {
    fn clone(&self) -> Self {
        Self {
            wait_ms: self.wait_ms,
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<P: PendingCall> Debouncer<P> {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Stores `next` as the pending call and cancels the one it replaces.
    // A fired call stays in the slot until the next one replaces it.
    pub fn replace(&self, next: P) {
        if let Some(previous) = self.pending.borrow_mut().replace(next) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(pending) = self.pending.borrow_mut().take() {
            pending.cancel();
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TimerDebouncer {
    /// Runs `callback` after the quiet window unless another call comes first.
    pub fn call(&self, callback: impl FnOnce() + 'static) {
        self.replace(gloo_timers::callback::Timeout::new(self.wait_ms, callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records which scheduled calls were called off.
    struct Scheduled {
        name: &'static str,
        cancelled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl PendingCall for Scheduled {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.name);
        }
    }

    fn scheduled(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Scheduled {
        Scheduled {
            name,
            cancelled: Rc::clone(log),
        }
    }

    #[test]
    fn newer_call_cancels_the_pending_one() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);
        debouncer.replace(scheduled("v", &log));
        debouncer.replace(scheduled("vo", &log));
        debouncer.replace(scheduled("vol", &log));
        assert_eq!(*log.borrow(), vec!["v", "vo"]);
    }

    #[test]
    fn cancel_drops_the_last_call_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);
        debouncer.cancel();
        assert!(log.borrow().is_empty());

        debouncer.replace(scheduled("volvo", &log));
        debouncer.clone().cancel();
        debouncer.cancel();
        assert_eq!(*log.borrow(), vec!["volvo"]);
    }
}
