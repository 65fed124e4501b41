// mykart_client/examples/storefront_session.rs
//
// End-to-end walkthrough against a running MyKart backend. Point
// MYKART_API_URL at the backend (defaults to http://localhost:8082) and
// run with `cargo run --example storefront_session`.

use mykart_client::{
  currency, ApiClient, CartBus, CartController, CartGateway, CatalogGateway, ClientConfig, LocalStore, SortDirection,
  SortSpec, StoreError,
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), StoreError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Storefront Session Example ---");

  // 1. Configuration and the localStorage analog.
  let config = ClientConfig::from_env()?;
  let store = Arc::new(LocalStore::open(&config.storage_path));

  // 2. One transport handle feeds every gateway.
  let api = ApiClient::new(&config, Arc::clone(&store))?;
  let catalog = CatalogGateway::new(api.clone());
  let cart_gateway = Arc::new(CartGateway::new(api));

  // 3. Browse the catalog, cheapest first.
  let sort = SortSpec::new("price", SortDirection::Asc);
  let products = catalog.list(Some(&sort)).await?;
  info!(count = products.len(), "Catalog loaded.");
  for product in products.iter().take(3) {
    info!(
      "  {} - {}",
      product.name,
      currency::display_inr(&store, product.price)
    );
  }

  // 4. Drive the cart through a controller, as a guest. No login needed;
  //    the backend keeps a guest cart for the anonymous caller.
  let bus = CartBus::default();
  let cart = CartController::new(Arc::clone(&cart_gateway), bus.clone());
  cart.refresh().await?;

  if let Some(first) = products.first() {
    match cart.add_item(first.id, 1).await {
      Ok(()) => info!(
        total_quantity = cart.total_quantity(),
        subtotal = %currency::display_inr(&store, cart.subtotal()),
        "Added to cart."
      ),
      Err(e) => warn!(error = %e, "Add rejected."),
    }
  }

  // 5. Empty the cart again so the example is re-runnable.
  cart.clear().await?;
  info!(total_quantity = cart.total_quantity(), "Cart cleared.");

  Ok(())
}
