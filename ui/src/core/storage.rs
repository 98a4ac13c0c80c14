//! Device-local key/value persistence.
//!
//! Only the session store writes here. Values are opaque strings; callers own
//! the encoding (the session record is JSON).
//!
//! Backends:
//! - WASM: `window.localStorage`
//! - Native: one file per key under the platform data directory
//! - Tests / unsupported targets: an in-memory map

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::StorageError;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`, looked up on every call so a revoked storage
    /// permission degrades to errors instead of a stale handle.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    fn backend_error(err: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Backend(format!("{err:?}"))
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?.get_item(key).map_err(backend_error)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?.set_item(key, value).map_err(backend_error)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            local_storage()?.remove_item(key).map_err(backend_error)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use directories::ProjectDirs;

    use super::{KeyValueStore, StorageError};

    /// One `<key>.json` file per entry inside `root`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        root: PathBuf,
    }

    impl FileStore {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        /// Store rooted in the per-user application data directory.
        pub fn open_default() -> Result<Self, StorageError> {
            let dirs = ProjectDirs::from("app", "SpiritualWisdom", "spiritual-wisdom")
                .ok_or(StorageError::Unavailable)?;
            Ok(Self::new(dirs.data_dir()))
        }

        pub(crate) fn path_for(&self, key: &str) -> PathBuf {
            let file_name: String = key
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                        c
                    } else {
                        '_'
                    }
                })
                .collect();
            self.root.join(format!("{file_name}.json"))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            fs::create_dir_all(&self.root)?;
            fs::write(self.path_for(key), value)?;
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            match fs::remove_file(self.path_for(key)) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err.into()),
            }
        }
    }
}

/// The persistent store for the current platform, or an in-memory one when
/// the platform offers none (sessions then last until the app closes).
pub fn device_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::open_default() {
            Ok(store) => Rc::new(store),
            Err(err) => {
                tracing::warn!(%err, "no data directory; sessions will not survive a restart");
                Rc::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert!(!store.contains("k"));
        // Removing twice is fine.
        store.remove("k").unwrap();
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let shared: Rc<dyn KeyValueStore> = Rc::new(store.clone());
        shared.set("user", "{}").unwrap();
        assert!(store.contains("user"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_under_root() {
        let root = std::env::temp_dir().join(format!(
            "wisdom-ui-file-store-{}",
            std::process::id()
        ));
        let store = FileStore::new(&root);

        assert_eq!(store.get("spiritual-app-user").unwrap(), None);
        store.set("spiritual-app-user", r#"{"id":"1"}"#).unwrap();
        assert!(root.join("spiritual-app-user.json").exists());

        let reopened = FileStore::new(&root);
        assert_eq!(
            reopened.get("spiritual-app-user").unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );

        reopened.remove("spiritual-app-user").unwrap();
        reopened.remove("spiritual-app-user").unwrap();
        assert_eq!(store.get("spiritual-app-user").unwrap(), None);

        let _ = std::fs::remove_dir_all(&root);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_sanitises_key_into_file_name() {
        let store = FileStore::new("/tmp/wisdom");
        assert_eq!(
            store.path_for("../evil key"),
            std::path::PathBuf::from("/tmp/wisdom/___evil_key.json")
        );
    }
}
