// mykart_client/src/models/product.rs

use serde::{Deserialize, Serialize};

/// Catalog entry as served by `/api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  pub price: f64,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub image_url: Option<String>,
  #[serde(default)]
  pub stock_quantity: Option<i32>,
  #[serde(default)]
  pub brand: Option<String>,
  #[serde(default)]
  pub rating: Option<f64>,
  #[serde(default)]
  pub discount_percentage: Option<i32>,
}
