// mykart_client/src/sync/controller.rs

//! Per-view cart controller.
//!
//! Each view (cart page, checkout, navbar badge) owns one controller over
//! a shared [`CartApi`] and a shared [`CartBus`]. The controller holds a
//! local copy of the cart and re-fetches from the server after every
//! mutation instead of updating optimistically, trading latency for the
//! guarantee that displayed state converges to server state. Lock guards
//! on the local state are never held across `.await`.

use crate::error::{StoreError, StoreResult};
use crate::gateway::CartApi;
use crate::models::{Cart, CartItem};
use crate::sync::bus::{CartBus, CartSignal, CartSubscription};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// View lifecycle: `idle → loading → {loaded | error}`, re-entering
/// `loading` on every refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
  /// Constructed, nothing fetched yet.
  Idle,
  /// A `get_cart` is in flight.
  Loading,
  Loaded(Cart),
  /// The last refresh failed; prior items are dropped and the message is
  /// kept for display.
  Error(String),
}

struct ViewInner {
  state: ViewState,
  /// Item id with a mutation in flight. Controls for that item are
  /// disabled; everything else stays interactive.
  updating_item: Option<i64>,
}

pub struct CartController<A: CartApi> {
  api: Arc<A>,
  bus: CartBus,
  inner: Arc<RwLock<ViewInner>>,
}

// Manual Clone: `A` itself need not be Clone behind the Arc.
impl<A: CartApi> Clone for CartController<A> {
  fn clone(&self) -> Self {
    Self {
      api: Arc::clone(&self.api),
      bus: self.bus.clone(),
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<A: CartApi> CartController<A> {
  pub fn new(api: Arc<A>, bus: CartBus) -> Self {
    Self {
      api,
      bus,
      inner: Arc::new(RwLock::new(ViewInner {
        state: ViewState::Idle,
        updating_item: None,
      })),
    }
  }

  /// Re-fetches the cart from the server. On failure the view shows the
  /// error and an empty item list; the error is also returned so callers
  /// can raise a transient notice.
  pub async fn refresh(&self) -> StoreResult<()> {
    self.inner.write().state = ViewState::Loading;

    match self.api.get_cart().await {
      Ok(cart) => {
        debug!(items = cart.len(), "View resynchronized with server cart.");
        self.inner.write().state = ViewState::Loaded(cart);
        Ok(())
      }
      Err(e) => {
        warn!(error = %e, "Cart refresh failed.");
        self.inner.write().state = ViewState::Error(e.to_string());
        Err(e)
      }
    }
  }

  /// Adds a product, then resynchronizes and signals every other view.
  pub async fn add_item(&self, product_id: i64, quantity: i32) -> StoreResult<()> {
    self.api.add_item(product_id, quantity).await?;
    self.after_mutation().await
  }

  /// Sets a line's quantity. Driving the quantity below 1 is an explicit
  /// remove, never an update with quantity zero.
  pub async fn set_quantity(&self, item_id: i64, product_id: i64, quantity: i32) -> StoreResult<()> {
    if quantity < 1 {
      return self.remove_item(item_id, product_id).await;
    }

    self.begin_item_update(item_id)?;
    let result = self.api.update_item_quantity(product_id, quantity).await;
    self.end_item_update();
    result?;
    self.after_mutation().await
  }

  /// Removes a line from the cart.
  pub async fn remove_item(&self, item_id: i64, product_id: i64) -> StoreResult<()> {
    self.begin_item_update(item_id)?;
    let result = self.api.remove_item(product_id).await;
    self.end_item_update();
    result?;
    self.after_mutation().await
  }

  /// Empties the cart. Safe to call on an already empty cart.
  pub async fn clear(&self) -> StoreResult<()> {
    self.api.clear_cart().await?;
    self.after_mutation().await
  }

  /// Drives a bus subscription: every pulse triggers a refresh. Returns
  /// once the bus is closed; dropping the future ends the listening scope
  /// and the subscription with it.
  pub async fn run_listener(&self, mut subscription: CartSubscription) {
    while subscription.recv().await.is_some() {
      if let Err(e) = self.refresh().await {
        warn!(error = %e, "Refresh triggered by cart signal failed.");
      }
    }
    debug!("Cart bus closed; listener finished.");
  }

  pub fn state(&self) -> ViewState {
    self.inner.read().state.clone()
  }

  pub fn items(&self) -> Vec<CartItem> {
    match &self.inner.read().state {
      ViewState::Loaded(cart) => cart.cart_items.clone(),
      _ => Vec::new(),
    }
  }

  /// Badge count: sum of line quantities, zero unless loaded.
  pub fn total_quantity(&self) -> i64 {
    match &self.inner.read().state {
      ViewState::Loaded(cart) => cart.total_quantity(),
      _ => 0,
    }
  }

  /// Sum of raw line prices, as the cart summary displays it.
  pub fn subtotal(&self) -> f64 {
    match &self.inner.read().state {
      ViewState::Loaded(cart) => cart.subtotal(),
      _ => 0.0,
    }
  }

  pub fn is_item_busy(&self, item_id: i64) -> bool {
    self.inner.read().updating_item == Some(item_id)
  }

  /// Broadcast after a successful mutation, then resynchronize our own
  /// copy. Our refresh and other listeners' refreshes race independently
  /// against the server; GET is idempotent, so every view converges.
  async fn after_mutation(&self) -> StoreResult<()> {
    self.bus.publish(CartSignal::Changed);
    self.refresh().await
  }

  fn begin_item_update(&self, item_id: i64) -> StoreResult<()> {
    let mut inner = self.inner.write();
    if inner.updating_item == Some(item_id) {
      return Err(StoreError::Validation(
        "An update for this item is already in progress.".to_string(),
      ));
    }
    inner.updating_item = Some(item_id);
    Ok(())
  }

  fn end_item_update(&self) {
    self.inner.write().updating_item = None;
  }
}
