//! Typed broadcast bus keeping independently mounted views consistent.
//!
//! The bus delivers synchronously on the UI thread: `emit` invokes every
//! live listener once, in subscription order, before returning. There is no
//! queueing, no replay for late subscribers and no delivery across page
//! loads; views re-derive their state from the session store on mount.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Events broadcast between views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// The session (login state, identity fields) changed.
    AuthChanged,
    /// Wishlist membership changed somewhere; cached per-card state is stale.
    WishlistChanged,
}

type Listener = Rc<dyn Fn(AppEvent)>;

#[derive(Default)]
struct Inner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Synchronous fan-out channel. Cloning shares the listener list.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<Inner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The subscription stays live until the returned
    /// guard is dropped.
    pub fn subscribe(&self, listener: impl Fn(AppEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every current listener, at most once each.
    pub fn emit(&self, event: AppEvent) {
        // Snapshot first so a listener may subscribe or drop its guard
        // without re-entering the borrow.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Guard for one bus subscription; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    inner: Weak<RefCell<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_all_listeners_once() {
        let bus = EventBus::new();
        let hits = Rc::new(Cell::new(0));

        let a = hits.clone();
        let _sub_a = bus.subscribe(move |_| a.set(a.get() + 1));
        let b = hits.clone();
        let _sub_b = bus.subscribe(move |_| b.set(b.get() + 1));

        bus.emit(AppEvent::WishlistChanged);
        assert_eq!(hits.get(), 2);

        bus.emit(AppEvent::AuthChanged);
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let bus = EventBus::new();
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        let sub = bus.subscribe(move |_| h.set(h.get() + 1));
        bus.emit(AppEvent::AuthChanged);
        assert_eq!(hits.get(), 1);

        drop(sub);
        assert_eq!(bus.listener_count(), 0);
        bus.emit(AppEvent::AuthChanged);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_listener_payload_matches_emitted_event() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        let _sub = bus.subscribe(move |evt| s.borrow_mut().push(evt));

        bus.emit(AppEvent::WishlistChanged);
        bus.emit(AppEvent::AuthChanged);
        assert_eq!(
            *seen.borrow(),
            vec![AppEvent::WishlistChanged, AppEvent::AuthChanged]
        );
    }

    #[test]
    fn test_listener_may_drop_guard_during_delivery() {
        let bus = EventBus::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let s = slot.clone();
        let sub = bus.subscribe(move |_| {
            s.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        bus.emit(AppEvent::AuthChanged);
        assert_eq!(bus.listener_count(), 0);
    }
}
