use crate::storage::KeyValueStore;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// One serialized collection under one storage key. Every mutation is a full
/// load/save cycle, but call sites only see `append`/`update_where`/
/// `remove_where`, so concurrency control could later live here alone.
pub struct Repository<T, S: KeyValueStore> {
    storage: S,
    key: &'static str,
    _items: PhantomData<T>,
}

impl<T, S> Repository<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(storage: S, key: &'static str) -> Self {
        Repository {
            storage,
            key,
            _items: PhantomData,
        }
    }

    /// Missing value reads as an empty collection. So does a corrupt one:
    /// the next save overwrites it, which is all a client-side store can do.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.storage.get(self.key) {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!("discarding corrupt value under {:?}: {}", self.key, err);
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[T]) {
        let raw = serde_json::to_string(items).unwrap();
        self.storage.set(self.key, &raw);
    }

    pub fn append(&self, item: T) {
        let mut items = self.load();
        items.push(item);
        self.save(&items);
    }

    pub fn update_where<P, F>(&self, matches: P, mut apply: F) -> usize
    where
        P: Fn(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut items = self.load();
        let mut updated = 0;

        for item in items.iter_mut() {
            if matches(item) {
                apply(item);
                updated += 1;
            }
        }

        if updated > 0 {
            self.save(&items);
        }
        updated
    }

    pub fn remove_where<P>(&self, matches: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        let mut items = self.load();
        let before = items.len();
        items.retain(|item| !matches(item));
        let removed = before - items.len();

        if removed > 0 {
            self.save(&items);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn notes_repo(storage: MemoryStore) -> Repository<String, MemoryStore> {
        Repository::new(storage, "notes")
    }

    #[test]
    fn missing_key_reads_empty() {
        let repo = notes_repo(MemoryStore::new());
        assert_eq!(repo.load(), Vec::<String>::new());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let repo = notes_repo(MemoryStore::new());
        repo.append("a".to_owned());
        repo.append("b".to_owned());

        assert_eq!(repo.load(), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn corrupt_value_degrades_to_empty() {
        crate::init_logger();
        let storage = MemoryStore::new();
        storage.set("notes", "{not json");

        let repo = notes_repo(storage.clone());
        assert_eq!(repo.load(), Vec::<String>::new());

        // the next write replaces the corrupt value entirely
        repo.append("fresh".to_owned());
        assert_eq!(repo.load(), vec!["fresh".to_owned()]);
    }

    #[test]
    fn update_where_reports_match_count() {
        let repo = notes_repo(MemoryStore::new());
        repo.append("a".to_owned());
        repo.append("b".to_owned());

        let updated = repo.update_where(|item| item == "a", |item| item.push('!'));
        assert_eq!(updated, 1);
        assert_eq!(repo.load(), vec!["a!".to_owned(), "b".to_owned()]);

        let updated = repo.update_where(|item| item == "missing", |item| item.clear());
        assert_eq!(updated, 0);
    }

    #[test]
    fn remove_where_keeps_the_rest() {
        let repo = notes_repo(MemoryStore::new());
        repo.append("a".to_owned());
        repo.append("b".to_owned());
        repo.append("a".to_owned());

        assert_eq!(repo.remove_where(|item| item == "a"), 2);
        assert_eq!(repo.load(), vec!["b".to_owned()]);
        assert_eq!(repo.remove_where(|item| item == "a"), 0);
    }
}
