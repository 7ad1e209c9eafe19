use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::storage::StorageBackend;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<(String, String), String>>,
}

impl MemoryBackend {
    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<(String, String), String>>> {
        self.items
            .lock()
            .map_err(|_| AppError::Internal("memory storage lock poisoned".into()))
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, client_id: &str, key: &str) -> AppResult<Option<String>> {
        let items = self.lock()?;
        Ok(items
            .get(&(client_id.to_string(), key.to_string()))
            .cloned())
    }

    fn set_item(&self, client_id: &str, key: &str, value: &str) -> AppResult<()> {
        self.lock()?
            .insert((client_id.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    fn remove_item(&self, client_id: &str, key: &str) -> AppResult<()> {
        self.lock()?
            .remove(&(client_id.to_string(), key.to_string()));
        Ok(())
    }
}
