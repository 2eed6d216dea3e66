use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String-keyed value substrate, shaped like browser localStorage: flat
/// string values, shared interior mutability, no locking.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory substrate used by native code and tests. Clones share the same
/// map, the way every script on a page shares one localStorage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "dark");
        assert_eq!(store.get("theme"), Some("dark".to_owned()));

        store.remove("theme");
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("currentUser", "alice");
        assert_eq!(other.get("currentUser"), Some("alice".to_owned()));
    }
}
