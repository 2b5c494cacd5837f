use contracts::system::auth::SessionRecord;
use std::sync::Arc;
use web_sys::window;

use super::error::StorageError;

/// The single key holding the serialized session record.
pub const SESSION_KEY: &str = "bpfeedbackdata_user";

/// Minimal string key-value store the session is persisted into.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on every call. Outside a browser every
/// read is a miss and every write reports `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process store used by native tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items
            .lock()
            .map(|items| items.contains_key(key))
            .unwrap_or(false)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Reads and writes the one session record under [`SESSION_KEY`].
#[derive(Clone)]
pub struct SessionPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl SessionPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Replaces any previously stored record.
    pub fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(record).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(SESSION_KEY, &json)
    }

    /// Absent key, missing browser and malformed content all read as `None`.
    pub fn load(&self) -> Option<SessionRecord> {
        let raw = self.store.get(SESSION_KEY)?;
        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) if record.is_well_formed() => Some(record),
            Ok(_) => {
                log::warn!("stored session has an empty identifier, ignoring it");
                None
            }
            Err(e) => {
                log::warn!("stored session is malformed, ignoring it: {}", e);
                None
            }
        }
    }

    pub fn clear(&self) {
        self.store.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn persistence() -> (MemoryStorage, SessionPersistence) {
        let store = MemoryStorage::new();
        let persistence = SessionPersistence::new(Arc::new(store.clone()));
        (store, persistence)
    }

    #[test]
    fn test_round_trip_every_role() {
        let (_, persistence) = persistence();
        for role in Role::ALL {
            let record = SessionRecord::new("someone@bpdata.com", role);
            persistence.save(&record).unwrap();
            assert_eq!(persistence.load(), Some(record));
        }
    }

    #[test]
    fn test_last_write_wins() {
        let (_, persistence) = persistence();
        persistence
            .save(&SessionRecord::new("viewer@bpdata.com", Role::Viewer))
            .unwrap();
        persistence.save(&SessionRecord::new("admin", Role::Admin)).unwrap();
        assert_eq!(persistence.load(), Some(SessionRecord::new("admin", Role::Admin)));
    }

    #[test]
    fn test_absent_key_is_none() {
        let (_, persistence) = persistence();
        assert_eq!(persistence.load(), None);
    }

    #[test]
    fn test_malformed_content_is_none() {
        let (store, persistence) = persistence();
        for raw in [
            "not json",
            "{}",
            r#"{"username":"admin"}"#,
            r#"{"role":"Admin"}"#,
            r#"{"username":"admin","role":"Root"}"#,
            r#"{"username":"","role":"Admin"}"#,
            "null",
        ] {
            store.set(SESSION_KEY, raw).unwrap();
            assert_eq!(persistence.load(), None, "raw value {raw:?}");
        }
    }

    #[test]
    fn test_reads_record_written_by_previous_builds() {
        let (store, persistence) = persistence();
        store
            .set(SESSION_KEY, r#"{"username":"hr_analyst@bpdata.com","role":"HR Analyst"}"#)
            .unwrap();
        assert_eq!(
            persistence.load(),
            Some(SessionRecord::new("hr_analyst@bpdata.com", Role::HrAnalyst))
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (store, persistence) = persistence();
        persistence.clear();
        persistence.save(&SessionRecord::new("admin", Role::Admin)).unwrap();
        persistence.clear();
        assert!(!store.contains(SESSION_KEY));
        persistence.clear();
        assert!(!store.contains(SESSION_KEY));
        assert_eq!(persistence.load(), None);
    }
}
