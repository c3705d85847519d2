//! Durable Key-Value Storage
//!
//! Thin seam over `window.localStorage` so the account and bookmark stores
//! can be exercised against an in-memory map.

use serde::de::DeserializeOwned;
use serde::Serialize;
#[cfg(test)]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::error::{GuideError, GuideResult};

/// Storage key holding the registered accounts
pub const USERS_KEY: &str = "users";
/// Storage key holding the logged-in account
pub const SESSION_KEY: &str = "currentUser";
/// Storage key holding bookmarked items
pub const SAVED_KEY: &str = "saved";

/// String-keyed durable storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> GuideResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> GuideResult<()>;
    fn remove(&self, key: &str) -> GuideResult<()>;
}

/// Decode the JSON blob under `key`. Missing keys and unreadable blobs
/// both yield the default.
pub fn read_json<T, S>(store: &S, key: &str) -> GuideResult<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(e) => {
            log::warn!("[STORAGE] Discarding unreadable '{}': {}", key, e);
            Ok(T::default())
        }
    }
}

/// Decode the JSON blob under `key` ahead of rewriting it. Missing keys and
/// `null` yield the default; an unreadable blob is an error so it never gets
/// replaced by a fresh value.
pub fn read_json_for_update<T, S>(store: &S, key: &str) -> GuideResult<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    serde_json::from_str::<Option<T>>(&raw)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            log::error!("[STORAGE] Refusing to overwrite unreadable '{}': {}", key, e);
            GuideError::CorruptRecord(key.to_string())
        })
}

pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> GuideResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// `window.localStorage`
#[derive(Clone)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> GuideResult<Self> {
        let window = web_sys::window().ok_or(GuideError::Unsupported("window"))?;
        let inner = window
            .local_storage()
            .map_err(|e| GuideError::Storage(format!("{:?}", e)))?
            .ok_or(GuideError::Unsupported("localStorage"))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> GuideResult<Option<String>> {
        self.inner.get_item(key).map_err(|e| GuideError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> GuideResult<()> {
        self.inner.set_item(key, value).map_err(|e| GuideError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> GuideResult<()> {
        self.inner.remove_item(key).map_err(|e| GuideError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store; clones share the same map.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GuideResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GuideResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> GuideResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_default() {
        let store = MemoryStore::new();
        let users: Vec<String> = read_json(&store, USERS_KEY).unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn test_null_and_corrupt_are_default() {
        let store = MemoryStore::new();
        store.set(SAVED_KEY, "null").unwrap();
        assert!(read_json::<Vec<u32>, _>(&store, SAVED_KEY).unwrap().is_empty());

        store.set(SAVED_KEY, "{not json").unwrap();
        assert!(read_json::<Vec<u32>, _>(&store, SAVED_KEY).unwrap().is_empty());
    }

    #[test]
    fn test_update_read_rejects_corrupt_blob() {
        let store = MemoryStore::new();
        assert!(read_json_for_update::<Vec<u32>, _>(&store, SAVED_KEY).unwrap().is_empty());

        store.set(SAVED_KEY, "null").unwrap();
        assert!(read_json_for_update::<Vec<u32>, _>(&store, SAVED_KEY).unwrap().is_empty());

        store.set(SAVED_KEY, "{not json").unwrap();
        let err = read_json_for_update::<Vec<u32>, _>(&store, SAVED_KEY).unwrap_err();
        assert_eq!(err, GuideError::CorruptRecord(SAVED_KEY.to_string()));
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        write_json(&store, "nums", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(store.get("nums").unwrap().as_deref(), Some("[1,2,3]"));
        assert_eq!(read_json::<Vec<u32>, _>(&store, "nums").unwrap(), vec![1, 2, 3]);

        store.remove("nums").unwrap();
        assert_eq!(store.get("nums").unwrap(), None);
    }
}
