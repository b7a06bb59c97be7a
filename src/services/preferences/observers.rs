use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::PreferenceValue;

/// Callback invoked with the new value of an observed key
pub type PreferenceObserver = Box<dyn Fn(Option<&PreferenceValue>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Per-key observer bookkeeping shared by the store implementations.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: Cell<u64>,
    observers: RefCell<Vec<(ObserverId, String, Rc<dyn Fn(Option<&PreferenceValue>)>)>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, key: &str, observer: PreferenceObserver) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers
            .borrow_mut()
            .push((id, key.to_string(), Rc::from(observer)));
        id
    }

    pub fn unregister(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(observer_id, _, _)| *observer_id != id);
        observers.len() != before
    }

    pub fn notify(&self, key: &str, value: Option<&PreferenceValue>) {
        // Snapshot first so callbacks can read the store or (un)register.
        let matching: Vec<_> = self
            .observers
            .borrow()
            .iter()
            .filter(|(_, observed, _)| observed == key)
            .map(|(_, _, observer)| Rc::clone(observer))
            .collect();

        for observer in matching {
            observer(value);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_only_matching_key() {
        let registry = ObserverRegistry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        registry.register(
            "a",
            Box::new(move |value| sink.borrow_mut().push(value.cloned())),
        );

        registry.notify("b", Some(&PreferenceValue::Int(1)));
        registry.notify("a", Some(&PreferenceValue::Int(2)));
        registry.notify("a", None);

        assert_eq!(*seen.borrow(), vec![Some(PreferenceValue::Int(2)), None]);
    }

    #[test]
    fn test_unregister() {
        let registry = ObserverRegistry::new();
        let id = registry.register("a", Box::new(|_| {}));
        assert_eq!(registry.len(), 1);
        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_observer_can_unregister_itself_during_notify() {
        let registry = Rc::new(ObserverRegistry::new());
        let own_id = Rc::new(Cell::new(None));

        let registry_ref = Rc::clone(&registry);
        let id_ref = Rc::clone(&own_id);
        let id = registry.register(
            "a",
            Box::new(move |_| {
                if let Some(id) = id_ref.get() {
                    registry_ref.unregister(id);
                }
            }),
        );
        own_id.set(Some(id));

        registry.notify("a", None);
        assert!(registry.is_empty());
    }
}
