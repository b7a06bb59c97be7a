use std::cell::RefCell;
use std::collections::HashMap;

use super::{ObserverId, ObserverRegistry, PreferenceError, PreferenceObserver, PreferenceStore, PreferenceValue};

/// Non-persistent store, used for tests and throwaway sessions
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, PreferenceValue>>,
    observers: ObserverRegistry,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.clone());
        self.observers.notify(key, Some(&value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        let removed = self.values.borrow_mut().remove(key);
        if removed.is_some() {
            self.observers.notify(key, None);
        }
        Ok(())
    }

    fn observe(&self, key: &str, observer: PreferenceObserver) -> ObserverId {
        self.observers.register(key, observer)
    }

    fn unobserve(&self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryPreferenceStore::new();
        store.set("k", PreferenceValue::Int(1)).unwrap();
        store.set("k", PreferenceValue::from("two")).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(PreferenceValue::from("two")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_notifies_only_when_present() {
        let store = MemoryPreferenceStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.observe("k", Box::new(move |_| counter.set(counter.get() + 1)));

        store.remove("k").unwrap();
        assert_eq!(calls.get(), 0);

        store.set("k", PreferenceValue::Bool(true)).unwrap();
        store.remove("k").unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_observer_can_read_store() {
        let store = Rc::new(MemoryPreferenceStore::new());
        let seen = Rc::new(RefCell::new(None));

        let store_ref = Rc::clone(&store);
        let sink = Rc::clone(&seen);
        store.observe(
            "k",
            Box::new(move |_| *sink.borrow_mut() = store_ref.get("k").unwrap()),
        );

        store.set("k", PreferenceValue::Double(0.5)).unwrap();
        assert_eq!(*seen.borrow(), Some(PreferenceValue::Double(0.5)));
    }
}
