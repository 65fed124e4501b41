// mykart_client/src/config.rs

use crate::error::{StoreError, StoreResult};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Client-side configuration, loaded from the environment with sensible
/// defaults for local development against a MyKart backend on port 8082.
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL of the REST backend, without a trailing slash.
  pub api_base_url: String,
  /// Per-request timeout. Every call carries this; there is no retry.
  pub request_timeout: Duration,
  /// Where the localStorage analog persists its entries.
  pub storage_path: PathBuf,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base_url: "http://localhost:8082".to_string(),
      request_timeout: Duration::from_secs(10),
      storage_path: PathBuf::from("mykart-store.json"),
    }
  }
}

impl ClientConfig {
  pub fn from_env() -> StoreResult<Self> {
    dotenv().ok(); // Load .env file if present

    let defaults = Self::default();

    let api_base_url = env::var("MYKART_API_URL").unwrap_or(defaults.api_base_url);
    let api_base_url = api_base_url.trim_end_matches('/').to_string();

    let request_timeout = match env::var("MYKART_TIMEOUT_SECS") {
      Ok(raw) => {
        let secs = raw
          .parse::<u64>()
          .map_err(|e| StoreError::Config(format!("Invalid MYKART_TIMEOUT_SECS '{}': {}", raw, e)))?;
        Duration::from_secs(secs)
      }
      Err(_) => defaults.request_timeout,
    };

    let storage_path = env::var("MYKART_STORAGE_PATH")
      .map(PathBuf::from)
      .unwrap_or(defaults.storage_path);

    tracing::info!(api_base_url = %api_base_url, "Client configuration loaded.");

    Ok(Self {
      api_base_url,
      request_timeout,
      storage_path,
    })
  }

  /// Convenience for tests and examples pointing at a throwaway server.
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self {
      api_base_url: base_url.into().trim_end_matches('/').to_string(),
      ..Self::default()
    }
  }
}
