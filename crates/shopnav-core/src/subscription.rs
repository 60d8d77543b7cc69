//! Cancellable cleanup for page-level bindings.
//!
//! Listeners attached outside the widget's own subtree, such as
//! document-level `keydown` and click handlers or media query watchers,
//! must not outlive the widget. Each binding registers its cleanup here
//! and the whole group is cancelled exactly once on detach.

use std::fmt;

/// A cancellable handle to a single page-level binding.
pub struct Subscription {
    /// The cleanup to run on cancellation.
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a new instance from a cleanup closure.
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// Returns `true` if the subscription has not been cancelled yet.
    pub fn is_active(&self) -> bool {
        self.cleanup.is_some()
    }

    /// Cancels the subscription, running its cleanup at most once.
    pub fn cancel(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A group of subscriptions cancelled together.
///
/// Registering on a group that has already been cancelled runs the
/// cleanup immediately, so a binding attached late cannot leak.
#[derive(Debug, Default)]
pub struct Subscriptions {
    /// The registered subscriptions.
    entries: Vec<Subscription>,
    /// Whether the group has been cancelled.
    cancelled: bool,
}

impl Subscriptions {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a cleanup to run when the group is cancelled.
    pub fn add(&mut self, cleanup: impl FnOnce() + 'static) {
        if self.cancelled {
            cleanup();
        } else {
            self.entries.push(Subscription::new(cleanup));
        }
    }

    /// Returns the number of active subscriptions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the group has no active subscriptions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the group has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Cancels every subscription in registration order.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        for mut entry in self.entries.drain(..) {
            entry.cancel();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::{Subscription, Subscriptions};
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn it_runs_cleanups_once_on_cancel() {
        let count = Rc::new(Cell::new(0));
        let mut subscriptions = Subscriptions::new();
        for _ in 0..3 {
            let count = count.clone();
            subscriptions.add(move || count.set(count.get() + 1));
        }
        assert_eq!(subscriptions.len(), 3);

        subscriptions.cancel();
        subscriptions.cancel();
        assert_eq!(count.get(), 3);
        assert!(subscriptions.is_empty());
        assert!(subscriptions.is_cancelled());
    }

    #[test]
    fn it_cleans_up_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let mut subscriptions = Subscriptions::new();
            let count = count.clone();
            subscriptions.add(move || count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn it_runs_late_registrations_immediately() {
        let count = Rc::new(Cell::new(0));
        let mut subscriptions = Subscriptions::new();
        subscriptions.cancel();

        let counter = count.clone();
        subscriptions.add(move || counter.set(counter.get() + 1));
        assert_eq!(count.get(), 1);
        assert!(subscriptions.is_empty());
    }

    #[test]
    fn it_cancels_single_subscriptions_once() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut subscription = Subscription::new(move || counter.set(counter.get() + 1));
        assert!(subscription.is_active());

        subscription.cancel();
        subscription.cancel();
        assert!(!subscription.is_active());
        drop(subscription);
        assert_eq!(count.get(), 1);
    }
}
