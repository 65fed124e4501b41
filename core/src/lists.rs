// mykart_client/src/lists.rs

//! Wishlist and comparison lists: ordered product-id lists persisted in
//! the local store. Purely client-side; the backend never sees them.

use crate::error::{StoreError, StoreResult};
use crate::storage::{keys, LocalStore};
use std::sync::Arc;
use tracing::debug;

/// The comparison view renders at most four products side by side.
const COMPARE_CAP: usize = 4;

pub struct SavedList {
  store: Arc<LocalStore>,
  key: &'static str,
  cap: Option<usize>,
}

impl SavedList {
  pub fn wishlist(store: Arc<LocalStore>) -> Self {
    Self {
      store,
      key: keys::WISHLIST,
      cap: None,
    }
  }

  pub fn compare(store: Arc<LocalStore>) -> Self {
    Self {
      store,
      key: keys::COMPARE_LIST,
      cap: Some(COMPARE_CAP),
    }
  }

  /// Current contents, oldest first. A missing or corrupt stored value is
  /// an empty list.
  pub fn ids(&self) -> Vec<i64> {
    self.store.get_json::<Vec<i64>>(self.key).unwrap_or_default()
  }

  pub fn contains(&self, product_id: i64) -> bool {
    self.ids().contains(&product_id)
  }

  /// Appends a product id. Already-present ids are a no-op; a full capped
  /// list rejects the addition.
  pub fn add(&self, product_id: i64) -> StoreResult<()> {
    let mut ids = self.ids();
    if ids.contains(&product_id) {
      return Ok(());
    }
    if let Some(cap) = self.cap {
      if ids.len() >= cap {
        return Err(StoreError::Validation(format!(
          "You can compare at most {} products.",
          cap
        )));
      }
    }
    ids.push(product_id);
    debug!(key = self.key, product_id, "Added to saved list.");
    self.store.set_json(self.key, &ids)
  }

  pub fn remove(&self, product_id: i64) -> StoreResult<()> {
    let mut ids = self.ids();
    ids.retain(|id| *id != product_id);
    self.store.set_json(self.key, &ids)
  }

  /// Adds when absent, removes when present. Returns whether the id is in
  /// the list afterwards.
  pub fn toggle(&self, product_id: i64) -> StoreResult<bool> {
    if self.contains(product_id) {
      self.remove(product_id)?;
      Ok(false)
    } else {
      self.add(product_id)?;
      Ok(true)
    }
  }

  pub fn clear(&self) -> StoreResult<()> {
    self.store.set_json(self.key, &Vec::<i64>::new())
  }

  pub fn len(&self) -> usize {
    self.ids().len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids().is_empty()
  }
}
