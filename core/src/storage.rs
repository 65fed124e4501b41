// mykart_client/src/storage.rs

//! File-backed key/value persistence mirroring browser localStorage.
//!
//! The store is a single JSON object on disk, keyed by string, with JSON
//! values. Reads are infallible the way localStorage reads are: a missing
//! file, a corrupt file, or a value of the wrong shape all behave as
//! "nothing stored". Writes flush to disk immediately.

use crate::error::{StoreError, StoreResult};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Well-known storage keys used by the MyKart client.
pub mod keys {
  /// Persisted auth session (created at login, destroyed at logout).
  pub const USER: &str = "user";
  /// Currency preference for display formatting.
  pub const SELECTED_CURRENCY: &str = "selectedCurrency";
  /// Product ids queued for side-by-side comparison.
  pub const COMPARE_LIST: &str = "compareList";
  /// Product ids saved for later.
  pub const WISHLIST: &str = "wishlist";
}

pub struct LocalStore {
  path: Option<PathBuf>,
  entries: RwLock<HashMap<String, Value>>,
}

impl LocalStore {
  /// Opens (or lazily creates) the store at `path`.
  pub fn open(path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    let entries = match fs::read_to_string(&path) {
      Ok(raw) => match serde_json::from_str::<HashMap<String, Value>>(&raw) {
        Ok(map) => map,
        Err(e) => {
          tracing::warn!(path = %path.display(), error = %e, "Corrupt store file, starting empty.");
          HashMap::new()
        }
      },
      Err(_) => HashMap::new(),
    };
    Self {
      path: Some(path),
      entries: RwLock::new(entries),
    }
  }

  /// A store with no disk backing. Used by tests and short-lived tools.
  pub fn in_memory() -> Self {
    Self {
      path: None,
      entries: RwLock::new(HashMap::new()),
    }
  }

  /// Reads and deserializes the value under `key`. Absent or mismatched
  /// values yield `None`, never an error.
  pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
    let value = self.entries.read().get(key).cloned()?;
    match serde_json::from_value(value) {
      Ok(parsed) => Some(parsed),
      Err(e) => {
        tracing::warn!(key, error = %e, "Stored value has unexpected shape, treating as absent.");
        None
      }
    }
  }

  pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
    let value =
      serde_json::to_value(value).map_err(|e| StoreError::Storage(format!("Cannot serialize '{}': {}", key, e)))?;
    let mut entries = self.entries.write();
    entries.insert(key.to_string(), value);
    self.flush(&entries)
  }

  pub fn remove(&self, key: &str) -> StoreResult<()> {
    let mut entries = self.entries.write();
    entries.remove(key);
    self.flush(&entries)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.entries.read().contains_key(key)
  }

  fn flush(&self, entries: &HashMap<String, Value>) -> StoreResult<()> {
    let Some(path) = &self.path else {
      return Ok(());
    };
    let raw = serde_json::to_string_pretty(entries)
      .map_err(|e| StoreError::Storage(format!("Cannot encode store: {}", e)))?;
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
          .map_err(|e| StoreError::Storage(format!("Cannot create '{}': {}", parent.display(), e)))?;
      }
    }
    fs::write(path, raw).map_err(|e| StoreError::Storage(format!("Cannot write '{}': {}", path.display(), e)))
  }
}
