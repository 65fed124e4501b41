// mykart_client/src/models/mod.rs

//! Wire-level data model shared by the gateways and view controllers.

pub mod cart;
pub mod product;

pub use cart::{Cart, CartItem};
pub use product::Product;

use serde::{Deserialize, Serialize};

/// The `{ "message": ... }` body the backend uses for mutation
/// confirmations and error payloads alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  pub message: String,
}
