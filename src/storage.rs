use crate::core::{KvStore, MemoryStore};
use web_sys as web;

/// `window.localStorage` as a [`KvStore`]; write failures (quota, private
/// mode) are logged and dropped.
pub struct LocalStorageStore {
    storage: web::Storage,
}

impl LocalStorageStore {
    pub fn open() -> Option<Self> {
        let storage = web::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl KvStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("[storage] set {} failed: {:?}", key, e);
        }
    }
}

/// Persistent store when available, otherwise a page-lifetime memory store.
pub fn open_store() -> Box<dyn KvStore> {
    match LocalStorageStore::open() {
        Some(s) => Box::new(s),
        None => {
            log::warn!("[storage] localStorage unavailable; flags will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
