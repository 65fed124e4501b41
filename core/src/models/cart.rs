// mykart_client/src/models/cart.rs

use serde::{Deserialize, Serialize};

/// One line of the server-owned cart. The client holds a transient,
/// read-mostly copy; the server is the source of truth.
///
/// `price` is carried verbatim from the server and never reinterpreted
/// client-side. Whether it is a unit price or a line total is inconsistent
/// in the backend views it feeds, so nothing here multiplies it by
/// `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: i64,
  pub product_id: i64,
  #[serde(default)]
  pub product_name: String,
  #[serde(default)]
  pub product_image_url: Option<String>,
  #[serde(default)]
  pub price: f64,
  pub quantity: i32,
}

/// Canonical cart response envelope: `{ "cartItems": [...] }`.
///
/// Every call site goes through this one shape; the gateway rejects bodies
/// that do not match it instead of letting callers guess between
/// `response.cartItems` and `response.data.cartItems` variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
  #[serde(default)]
  pub cart_items: Vec<CartItem>,
}

impl Cart {
  pub fn len(&self) -> usize {
    self.cart_items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cart_items.is_empty()
  }

  /// Sum of line quantities, the number shown on the navbar badge.
  pub fn total_quantity(&self) -> i64 {
    self.cart_items.iter().map(|item| item.quantity as i64).sum()
  }

  /// Sum of raw `price` fields, exactly as the cart summary view computes
  /// it. See the note on [`CartItem::price`].
  pub fn subtotal(&self) -> f64 {
    self.cart_items.iter().map(|item| item.price).sum()
  }
}
