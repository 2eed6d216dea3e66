use homepage_core::storage::KeyValueStore;
use web_sys::Storage;

/// `window.localStorage` as the persistent substrate. Clones share the same
/// underlying browser storage, like every script on the page does.
#[derive(Clone)]
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    pub fn new(storage: Storage) -> Self {
        BrowserStore { storage }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).unwrap()
    }

    fn set(&self, key: &str, value: &str) {
        self.storage.set_item(key, value).unwrap()
    }

    fn remove(&self, key: &str) {
        self.storage.remove_item(key).unwrap()
    }
}
