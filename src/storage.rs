use crate::core::{Storage, StorageError};
use web_sys as web;

/// `window.localStorage`; every call can fail (private mode, disabled
/// storage, quota) and reports it as a `StorageError`.
pub struct LocalStorage;

impl LocalStorage {
    fn backend(&self) -> Result<web::Storage, StorageError> {
        web::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend()?
            .get_item(key)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
