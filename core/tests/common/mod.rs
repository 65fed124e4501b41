// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use mykart_client::{Cart, CartApi, CartItem, StoreError, StoreResult};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Sample data ---

pub fn sample_item(id: i64, product_id: i64, quantity: i32, price: f64) -> CartItem {
  CartItem {
    id,
    product_id,
    product_name: format!("Product {}", product_id),
    product_image_url: Some(format!("https://img.example/{}.png", product_id)),
    price,
    quantity,
  }
}

pub fn cart_with(items: Vec<CartItem>) -> Cart {
  Cart { cart_items: items }
}

// --- Scripted CartApi double for controller tests ---
//
// `get_cart` serves scripted carts in order; once the script runs out it
// keeps serving the most recently served cart. Mutations are recorded as
// "op:args" strings so tests can assert exactly which wire call a UI
// action maps to.
pub struct ScriptedCartApi {
  script: Mutex<VecDeque<Cart>>,
  fallback: Mutex<Cart>,
  pub calls: Mutex<Vec<String>>,
  fail_get: AtomicBool,
  fail_mutations: AtomicBool,
  // When set, the next mutation parks until the notify fires. Used to
  // hold a mutation in flight for busy-flag tests.
  gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedCartApi {
  pub fn new(initial: Cart) -> Arc<Self> {
    Arc::new(Self {
      script: Mutex::new(VecDeque::new()),
      fallback: Mutex::new(initial),
      calls: Mutex::new(Vec::new()),
      fail_get: AtomicBool::new(false),
      fail_mutations: AtomicBool::new(false),
      gate: Mutex::new(None),
    })
  }

  /// Queues the cart the next `get_cart` will serve.
  pub fn serve_next(&self, cart: Cart) {
    self.script.lock().push_back(cart);
  }

  pub fn set_fail_get(&self, fail: bool) {
    self.fail_get.store(fail, Ordering::SeqCst);
  }

  pub fn set_fail_mutations(&self, fail: bool) {
    self.fail_mutations.store(fail, Ordering::SeqCst);
  }

  /// Parks the next mutation until the returned notify is fired.
  pub fn hold_next_mutation(&self) -> Arc<Notify> {
    let notify = Arc::new(Notify::new());
    *self.gate.lock() = Some(Arc::clone(&notify));
    notify
  }

  pub fn recorded_calls(&self) -> Vec<String> {
    self.calls.lock().clone()
  }

  fn record(&self, call: String) {
    self.calls.lock().push(call);
  }

  async fn mutation(&self, call: String) -> StoreResult<()> {
    self.record(call);
    let gate = self.gate.lock().take();
    if let Some(notify) = gate {
      notify.notified().await;
    }
    if self.fail_mutations.load(Ordering::SeqCst) {
      return Err(StoreError::Server("Server error. Please try again later.".to_string()));
    }
    Ok(())
  }
}

#[async_trait]
impl CartApi for ScriptedCartApi {
  async fn get_cart(&self) -> StoreResult<Cart> {
    self.record("get".to_string());
    if self.fail_get.load(Ordering::SeqCst) {
      return Err(StoreError::Server("Server error. Please try again later.".to_string()));
    }
    let next = self.script.lock().pop_front();
    match next {
      Some(cart) => {
        *self.fallback.lock() = cart.clone();
        Ok(cart)
      }
      None => Ok(self.fallback.lock().clone()),
    }
  }

  async fn add_item(&self, product_id: i64, quantity: i32) -> StoreResult<()> {
    if product_id <= 0 || quantity <= 0 {
      return Err(StoreError::Validation("Invalid product ID or quantity".to_string()));
    }
    self.mutation(format!("add:{}:{}", product_id, quantity)).await
  }

  async fn update_item_quantity(&self, product_id: i64, quantity: i32) -> StoreResult<()> {
    if product_id <= 0 || quantity < 0 {
      return Err(StoreError::Validation("Invalid product ID or quantity".to_string()));
    }
    self.mutation(format!("update:{}:{}", product_id, quantity)).await
  }

  async fn remove_item(&self, product_id: i64) -> StoreResult<()> {
    if product_id <= 0 {
      return Err(StoreError::Validation("Invalid product ID".to_string()));
    }
    self.mutation(format!("remove:{}", product_id)).await
  }

  async fn clear_cart(&self) -> StoreResult<()> {
    self.mutation("clear".to_string()).await
  }
}

/// Polls `predicate` every 10 ms until it holds or ~2 s elapse. Used where
/// a bus pulse and the resulting refresh race the test body.
pub async fn wait_until(mut predicate: impl FnMut() -> bool) -> bool {
  for _ in 0..200 {
    if predicate() {
      return true;
    }
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
  }
  false
}
