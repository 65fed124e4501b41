// mykart_client/src/gateway/mod.rs

//! HTTP plumbing shared by the remote gateways.
//!
//! One `ApiClient` wraps the `reqwest::Client`, the backend base URL, and
//! the local store the bearer credential is read from. Every non-2xx
//! response funnels through [`classify_failure`], which implements the
//! crate-wide failure taxonomy: no retries, no backoff, one typed error
//! per failed call.

pub mod auth;
pub mod cart;
pub mod catalog;

pub use auth::AuthGateway;
pub use cart::{CartApi, CartGateway};
pub use catalog::{CatalogGateway, SortDirection, SortSpec};

use crate::config::ClientConfig;
use crate::error::{
  StoreError, StoreResult, AUTH_REQUIRED_MESSAGE, FORBIDDEN_MESSAGE, SERVER_ERROR_MESSAGE,
};
use crate::models::Message;
use crate::session::{bearer_header, current_session};
use crate::storage::LocalStore;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use std::sync::Arc;

/// Shared transport handle. Cheap to clone; all gateways built from the
/// same `ApiClient` share one connection pool and one credential source.
#[derive(Clone)]
pub struct ApiClient {
  http: Client,
  base_url: String,
  store: Arc<LocalStore>,
}

impl ApiClient {
  pub fn new(config: &ClientConfig, store: Arc<LocalStore>) -> StoreResult<Self> {
    let http = Client::builder().timeout(config.request_timeout).build()?;
    Ok(Self {
      http,
      base_url: config.api_base_url.trim_end_matches('/').to_string(),
      store,
    })
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  pub(crate) fn get(&self, path: &str) -> RequestBuilder {
    self.http.get(self.url(path))
  }

  pub(crate) fn post(&self, path: &str) -> RequestBuilder {
    self.http.post(self.url(path))
  }

  pub(crate) fn put(&self, path: &str) -> RequestBuilder {
    self.http.put(self.url(path))
  }

  pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
    self.http.delete(self.url(path))
  }

  /// Attaches `Authorization: Bearer <token>` when a session is persisted.
  /// Without one the request goes out as a guest; the backend tracks guest
  /// carts by its own means.
  pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
    match bearer_header(&current_session(&self.store)) {
      Some(header) => request.header(AUTHORIZATION, header),
      None => request,
    }
  }

  pub fn store(&self) -> &Arc<LocalStore> {
    &self.store
  }
}

/// Normalizes a non-2xx response into a `StoreError`.
///
/// `auth_protected` marks the calls where 401/403 should surface as an
/// auth error (the mutating cart calls); elsewhere those statuses fall
/// through to the generic branch. The generic branch extracts the message
/// from a `{ "message": ... }` body, falls back to the raw body, and to
/// `fallback` when the body is empty or unreadable.
pub(crate) async fn classify_failure(response: Response, auth_protected: bool, fallback: &str) -> StoreError {
  let status = response.status().as_u16();

  if status >= 500 {
    tracing::error!(status, "Server-side failure.");
    return StoreError::Server(SERVER_ERROR_MESSAGE.to_string());
  }

  if auth_protected {
    if status == 401 {
      return StoreError::Auth {
        status,
        message: AUTH_REQUIRED_MESSAGE.to_string(),
      };
    }
    if status == 403 {
      return StoreError::Auth {
        status,
        message: FORBIDDEN_MESSAGE.to_string(),
      };
    }
  }

  let message = match response.text().await {
    Ok(body) if !body.trim().is_empty() => match serde_json::from_str::<Message>(&body) {
      Ok(envelope) => envelope.message,
      Err(_) => body,
    },
    _ => fallback.to_string(),
  };

  tracing::warn!(status, message = %message, "Request rejected by server.");
  StoreError::Unexpected { status, message }
}
