//! Scoped global input listeners
//!
//! Overlays that need to see input before the page does (escape to dismiss,
//! presses outside their area) register here. Registration hands back a
//! [`Subscription`]; dropping it unregisters the listener, so a listener can
//! only outlive its owner by leaking the handle.

use std::sync::{Arc, Mutex, MutexGuard};

/// Global input a dialog can listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    EscapeKey,
    PointerDownOutside,
}

#[derive(Debug, Default)]
struct RouterState {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Registry of active global listeners
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    inner: Arc<Mutex<RouterState>>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, RouterState> {
        // Listener bookkeeping stays consistent even if a holder panicked
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let mut state = self.state();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, listener));

        Subscription {
            id,
            listener,
            router: Arc::clone(&self.inner),
        }
    }

    pub fn is_listening(&self, listener: Listener) -> bool {
        self.state().listeners.iter().any(|(_, l)| *l == listener)
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.state().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to one registered listener; unregisters on drop
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listener: Listener,
    router: Arc<Mutex<RouterState>>,
}

impl Subscription {
    pub fn listener(&self) -> Listener {
        self.listener
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut state = match self.router.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.listeners.retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_drop() {
        let router = InputRouter::new();
        assert!(router.is_empty());

        let escape = router.subscribe(Listener::EscapeKey);
        let outside = router.subscribe(Listener::PointerDownOutside);
        assert_eq!(router.len(), 2);
        assert!(router.is_listening(Listener::EscapeKey));
        assert_eq!(outside.listener(), Listener::PointerDownOutside);

        drop(escape);
        assert!(!router.is_listening(Listener::EscapeKey));
        assert!(router.is_listening(Listener::PointerDownOutside));

        drop(outside);
        assert!(router.is_empty());
    }

    #[test]
    fn test_duplicate_listeners_are_independent() {
        let router = InputRouter::new();
        let first = router.subscribe(Listener::EscapeKey);
        let second = router.subscribe(Listener::EscapeKey);

        drop(first);
        assert!(router.is_listening(Listener::EscapeKey));
        drop(second);
        assert!(!router.is_listening(Listener::EscapeKey));
    }
}
