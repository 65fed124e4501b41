// mykart_client/src/gateway/catalog.rs

//! Product catalog gateway over `/api/products`. All reads, all
//! unauthenticated.

use crate::error::StoreResult;
use crate::gateway::{classify_failure, ApiClient};
use crate::models::Product;
use tracing::{debug, instrument};

const PRODUCTS_PATH: &str = "/api/products/";

/// Optional sort directive, serialized as `sortBy`/`sortDirection` query
/// parameters the way the backend expects them.
#[derive(Debug, Clone)]
pub struct SortSpec {
  pub by: String,
  pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Asc,
  Desc,
}

impl SortSpec {
  pub fn new(by: impl Into<String>, direction: SortDirection) -> Self {
    Self {
      by: by.into(),
      direction,
    }
  }

  fn query(&self) -> [(&'static str, String); 2] {
    let direction = match self.direction {
      SortDirection::Asc => "asc",
      SortDirection::Desc => "desc",
    };
    [("sortBy", self.by.clone()), ("sortDirection", direction.to_string())]
  }
}

pub struct CatalogGateway {
  api: ApiClient,
}

impl CatalogGateway {
  pub fn new(api: ApiClient) -> Self {
    Self { api }
  }

  #[instrument(name = "CatalogGateway::list", skip(self), err(Display))]
  pub async fn list(&self, sort: Option<&SortSpec>) -> StoreResult<Vec<Product>> {
    let mut request = self.api.get(PRODUCTS_PATH);
    if let Some(sort) = sort {
      request = request.query(&sort.query());
    }
    let response = request.send().await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, false, "Failed to load products").await);
    }

    let products: Vec<Product> = response.json().await?;
    debug!(count = products.len(), "Products listed.");
    Ok(products)
  }

  #[instrument(name = "CatalogGateway::get", skip(self), err(Display))]
  pub async fn get(&self, id: i64) -> StoreResult<Product> {
    let response = self.api.get(&format!("{}{}", PRODUCTS_PATH, id)).send().await?;

    if !response.status().is_success() {
      let fallback = format!("Failed to load product with ID {}", id);
      return Err(classify_failure(response, false, &fallback).await);
    }

    Ok(response.json().await?)
  }

  #[instrument(name = "CatalogGateway::search", skip(self), err(Display))]
  pub async fn search(&self, query: &str, sort: Option<&SortSpec>) -> StoreResult<Vec<Product>> {
    let mut request = self
      .api
      .get(&format!("{}search", PRODUCTS_PATH))
      .query(&[("query", query)]);
    if let Some(sort) = sort {
      request = request.query(&sort.query());
    }
    let response = request.send().await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, false, "Failed to search products").await);
    }

    Ok(response.json().await?)
  }

  #[instrument(name = "CatalogGateway::by_category", skip(self), err(Display))]
  pub async fn by_category(&self, category: &str, sort: Option<&SortSpec>) -> StoreResult<Vec<Product>> {
    let mut request = self.api.get(&format!("{}category/{}", PRODUCTS_PATH, category));
    if let Some(sort) = sort {
      request = request.query(&sort.query());
    }
    let response = request.send().await?;

    if !response.status().is_success() {
      let fallback = format!("Failed to load products in category {}", category);
      return Err(classify_failure(response, false, &fallback).await);
    }

    Ok(response.json().await?)
  }
}
