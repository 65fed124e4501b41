// mykart_client/examples/cart_badge_sync.rs

use async_trait::async_trait;
use mykart_client::{Cart, CartApi, CartBus, CartController, CartItem, StoreError, StoreResult};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

// 1. A self-contained backend stand-in so the example runs without a
//    server. It implements the same seam the HTTP gateway implements, with
//    the same merge-by-product semantics.
#[derive(Default)]
struct InMemoryCart {
  items: Mutex<Vec<CartItem>>,
}

#[async_trait]
impl CartApi for InMemoryCart {
  async fn get_cart(&self) -> StoreResult<Cart> {
    Ok(Cart {
      cart_items: self.items.lock().clone(),
    })
  }

  async fn add_item(&self, product_id: i64, quantity: i32) -> StoreResult<()> {
    if product_id <= 0 || quantity <= 0 {
      return Err(StoreError::Validation("Invalid product ID or quantity".to_string()));
    }
    let mut items = self.items.lock();
    match items.iter_mut().find(|i| i.product_id == product_id) {
      Some(item) => item.quantity += quantity,
      None => items.push(CartItem {
        id: product_id,
        product_id,
        product_name: format!("Product {}", product_id),
        product_image_url: None,
        price: 499.0,
        quantity,
      }),
    }
    Ok(())
  }

  async fn update_item_quantity(&self, product_id: i64, quantity: i32) -> StoreResult<()> {
    let mut items = self.items.lock();
    if let Some(item) = items.iter_mut().find(|i| i.product_id == product_id) {
      item.quantity = quantity;
    }
    Ok(())
  }

  async fn remove_item(&self, product_id: i64) -> StoreResult<()> {
    self.items.lock().retain(|i| i.product_id != product_id);
    Ok(())
  }

  async fn clear_cart(&self) -> StoreResult<()> {
    self.items.lock().clear();
    Ok(())
  }
}

#[tokio::main]
async fn main() -> Result<(), StoreError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Cart Badge Sync Example ---");

  // 2. One bus per process; every view shares it.
  let api = Arc::new(InMemoryCart::default());
  let bus = CartBus::default();

  // 3. Two independent views over the same backend: the cart page (which
  //    mutates) and a navbar badge (which only displays a count).
  let cart_page = CartController::new(Arc::clone(&api), bus.clone());
  let badge = CartController::new(Arc::clone(&api), bus.clone());

  cart_page.refresh().await?;
  badge.refresh().await?;

  // 4. Mount the badge's listener. It re-fetches on every pulse; dropping
  //    the task is the unmount.
  let listener = {
    let badge = badge.clone();
    let subscription = bus.subscribe();
    tokio::spawn(async move { badge.run_listener(subscription).await })
  };

  // 5. Mutate from the cart page. Each call re-fetches its own state and
  //    pulses the bus; the badge converges on its own.
  cart_page.add_item(1, 2).await?;
  cart_page.add_item(2, 1).await?;
  cart_page.set_quantity(1, 1, 3).await?;

  // Give the badge's listener a moment to hear the last pulse.
  tokio::time::sleep(std::time::Duration::from_millis(50)).await;
  info!(
    badge_count = badge.total_quantity(),
    subtotal = cart_page.subtotal(),
    "Views converged."
  );
  assert_eq!(badge.total_quantity(), 4);

  // 6. Dropping to quantity zero removes the line instead of updating it.
  cart_page.set_quantity(1, 1, 0).await?;
  tokio::time::sleep(std::time::Duration::from_millis(50)).await;
  assert_eq!(badge.total_quantity(), 1);
  info!(badge_count = badge.total_quantity(), "Line removed via quantity zero.");

  listener.abort();
  Ok(())
}
