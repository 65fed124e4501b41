// mykart_client/src/gateway/cart.rs

//! Cart remote gateway: the five operations over `/api/cart`.
//!
//! Mutations ignore the success payload (the backend answers with a
//! confirmation message) and return `()`; callers resynchronize by calling
//! `get_cart` again. That re-fetch-over-optimistic-update policy lives in
//! the view controller, not here.

use crate::error::{StoreError, StoreResult};
use crate::gateway::{classify_failure, ApiClient};
use crate::models::Cart;
use async_trait::async_trait;
use tracing::{debug, instrument};

const CART_PATH: &str = "/api/cart/";
const ITEMS_PATH: &str = "/api/cart/items";

/// Seam between view controllers and the wire. Production code uses
/// [`CartGateway`]; tests drive controllers with a scripted double.
#[async_trait]
pub trait CartApi: Send + Sync {
  /// Fetches the current cart (user or guest).
  async fn get_cart(&self) -> StoreResult<Cart>;

  /// Adds `quantity` of a product. The server decides whether that merges
  /// into an existing line or creates a new one.
  async fn add_item(&self, product_id: i64, quantity: i32) -> StoreResult<()>;

  /// Sets the quantity of an existing line. Requires authentication.
  async fn update_item_quantity(&self, product_id: i64, quantity: i32) -> StoreResult<()>;

  /// Removes a line. Requires authentication.
  async fn remove_item(&self, product_id: i64) -> StoreResult<()>;

  /// Empties the cart. Idempotent; clearing an empty cart succeeds.
  async fn clear_cart(&self) -> StoreResult<()>;
}

pub struct CartGateway {
  api: ApiClient,
}

impl CartGateway {
  pub fn new(api: ApiClient) -> Self {
    Self { api }
  }
}

#[async_trait]
impl CartApi for CartGateway {
  #[instrument(name = "CartGateway::get_cart", skip(self), err(Display))]
  async fn get_cart(&self) -> StoreResult<Cart> {
    let response = self.api.authorize(self.api.get(CART_PATH)).send().await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, false, "Failed to load cart").await);
    }

    let cart: Cart = response.json().await?;
    debug!(items = cart.len(), "Cart loaded.");
    Ok(cart)
  }

  #[instrument(name = "CartGateway::add_item", skip(self), err(Display))]
  async fn add_item(&self, product_id: i64, quantity: i32) -> StoreResult<()> {
    if product_id <= 0 || quantity <= 0 {
      return Err(StoreError::Validation("Invalid product ID or quantity".to_string()));
    }

    let request = self
      .api
      .post(ITEMS_PATH)
      .query(&[("productId", product_id.to_string()), ("quantity", quantity.to_string())]);
    let response = self.api.authorize(request).send().await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, false, "Failed to add item to cart").await);
    }
    debug!(product_id, quantity, "Item added.");
    Ok(())
  }

  #[instrument(name = "CartGateway::update_item_quantity", skip(self), err(Display))]
  async fn update_item_quantity(&self, product_id: i64, quantity: i32) -> StoreResult<()> {
    if product_id <= 0 || quantity < 0 {
      return Err(StoreError::Validation("Invalid product ID or quantity".to_string()));
    }

    let request = self
      .api
      .put(&format!("{}/{}", ITEMS_PATH, product_id))
      .query(&[("quantity", quantity.to_string())]);
    let response = self.api.authorize(request).send().await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, true, "Failed to update item quantity").await);
    }
    debug!(product_id, quantity, "Quantity updated.");
    Ok(())
  }

  #[instrument(name = "CartGateway::remove_item", skip(self), err(Display))]
  async fn remove_item(&self, product_id: i64) -> StoreResult<()> {
    if product_id <= 0 {
      return Err(StoreError::Validation("Invalid product ID".to_string()));
    }

    let request = self.api.delete(&format!("{}/{}", ITEMS_PATH, product_id));
    let response = self.api.authorize(request).send().await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, true, "Failed to remove item from cart").await);
    }
    debug!(product_id, "Item removed.");
    Ok(())
  }

  #[instrument(name = "CartGateway::clear_cart", skip(self), err(Display))]
  async fn clear_cart(&self) -> StoreResult<()> {
    let response = self.api.authorize(self.api.delete(CART_PATH)).send().await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, true, "Failed to clear cart").await);
    }
    debug!("Cart cleared.");
    Ok(())
  }
}
