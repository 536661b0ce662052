//! Cancellable per-key timeouts owned by a component

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// One pending handle per key, a gloo `Timeout` unless stated otherwise.
///
/// Tracking again for a key replaces (and cancels) the previous handle.
/// All pending handles are dropped when the owning component unmounts,
/// so callbacks never touch disposed state.
pub struct KeyedTimers<K: 'static, T: 'static = Timeout> {
    pending: StoredValue<HashMap<K, T>, LocalStorage>,
}

impl<K: 'static, T: 'static> Clone for KeyedTimers<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static, T: 'static> Copy for KeyedTimers<K, T> {}

impl<K: Eq + Hash + 'static, T: 'static> KeyedTimers<K, T> {
    pub fn new() -> Self {
        let pending = StoredValue::new_local(HashMap::new());
        on_cleanup(move || {
            // dropping a gloo Timeout cancels it
            pending.try_update_value(|timers: &mut HashMap<K, T>| timers.clear());
        });
        Self { pending }
    }

    pub fn track(&self, key: K, handle: T) {
        self.pending.update_value(|timers| {
            timers.insert(key, handle);
        });
    }

    pub fn cancel(&self, key: &K) {
        self.pending.update_value(|timers| {
            timers.remove(key);
        });
    }

    pub fn pending(&self) -> usize {
        self.pending.with_value(|timers| timers.len())
    }
}

impl<K: Eq + Hash + 'static> KeyedTimers<K> {
    pub fn schedule(&self, key: K, millis: u32, callback: impl FnOnce() + 'static) {
        self.track(key, Timeout::new(millis, callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stands in for a `Timeout`: counts how many were cancelled
    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_rescheduling_a_key_cancels_the_previous_handle() {
        let cancelled = Rc::new(Cell::new(0));
        let owner = Owner::new();
        let timers = owner.with(KeyedTimers::<u32, Handle>::new);

        timers.track(1, Handle(cancelled.clone()));
        timers.track(1, Handle(cancelled.clone()));
        assert_eq!(cancelled.get(), 1);
        assert_eq!(timers.pending(), 1);

        timers.cancel(&1);
        assert_eq!(cancelled.get(), 2);
        assert_eq!(timers.pending(), 0);

        owner.cleanup();
    }

    #[test]
    fn test_dispose_cancels_pending_handles() {
        let cancelled = Rc::new(Cell::new(0));
        let owner = Owner::new();
        let timers = owner.with(KeyedTimers::<u32, Handle>::new);

        timers.track(1, Handle(cancelled.clone()));
        timers.track(2, Handle(cancelled.clone()));
        timers.track(3, Handle(cancelled.clone()));
        assert_eq!(cancelled.get(), 0);

        owner.cleanup();
        assert_eq!(cancelled.get(), 3);
    }
}
