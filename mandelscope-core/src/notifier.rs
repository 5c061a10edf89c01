use tracing::trace;

/// Error returned by a failing listener.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

type Listener = Box<dyn FnMut() -> Result<(), ListenerError>>;

/// Handle for a registered listener.
///
/// Pass it back to [`ChangeNotifier::unsubscribe`] to stop receiving
/// notifications. Dropping the handle leaves the listener registered.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "keep the handle to unsubscribe later"]
pub struct Subscription {
    id: u64,
}

/// Ordered registry of change listeners.
///
/// Listeners take no payload: on notification they should re-read whatever
/// state they display.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it will run after every later notification, after
    /// all listeners registered before it.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut() -> Result<(), ListenerError> + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription { id }
    }

    /// Remove the listener behind `subscription`. Returns `false` if it was
    /// already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription.id);
        self.listeners.len() != before
    }

    /// Call every listener in registration order.
    ///
    /// The first error stops the pass and is returned unchanged.
    pub fn notify_all(&mut self) -> Result<(), ListenerError> {
        trace!(listeners = self.listeners.len(), "Notifying listeners");
        for (_, listener) in &mut self.listeners {
            listener()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn notifies_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut n = ChangeNotifier::new();
        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            let _ = n.subscribe(move || {
                log.borrow_mut().push(tag);
                Ok(())
            });
        }
        n.notify_all().unwrap();
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut n = ChangeNotifier::new();
        let h1 = Rc::clone(&hits);
        let first = n.subscribe(move || {
            h1.borrow_mut().push(1);
            Ok(())
        });
        let h2 = Rc::clone(&hits);
        let _second = n.subscribe(move || {
            h2.borrow_mut().push(2);
            Ok(())
        });

        assert!(n.unsubscribe(first));
        assert_eq!(n.len(), 1);
        n.notify_all().unwrap();
        assert_eq!(*hits.borrow(), vec![2]);
    }

    #[test]
    fn unsubscribe_twice_reports_false() {
        let mut n = ChangeNotifier::new();
        let sub = n.subscribe(|| Ok(()));
        let stale = Subscription { id: 0 };
        assert!(n.unsubscribe(sub));
        assert!(!n.unsubscribe(stale));
        assert!(n.is_empty());
    }

    #[test]
    fn failing_listener_stops_the_pass() {
        let reached = Rc::new(RefCell::new(false));
        let mut n = ChangeNotifier::new();
        let _ = n.subscribe(|| Err("render surface gone".into()));
        let r = Rc::clone(&reached);
        let _ = n.subscribe(move || {
            *r.borrow_mut() = true;
            Ok(())
        });
        let err = n.notify_all().unwrap_err();
        assert_eq!(err.to_string(), "render surface gone");
        assert!(!*reached.borrow());
    }
}
