// mykart_client/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failure taxonomy for every operation in this crate.
///
/// The gateways never retry; each variant is terminal for the call that
/// produced it and carries a human-readable message suitable for display.
#[derive(Debug, Error)]
pub enum StoreError {
  /// Bad local input, raised before any I/O happens.
  #[error("{0}")]
  Validation(String),

  /// The request never produced a response (connect failure, timeout).
  #[error("{0}")]
  Network(String),

  /// 401/403 on a protected mutation.
  #[error("{message}")]
  Auth { status: u16, message: String },

  /// HTTP 5xx from the backend.
  #[error("{0}")]
  Server(String),

  /// Any other non-2xx; message extracted from the body when present.
  #[error("{message}")]
  Unexpected { status: u16, message: String },

  /// A 2xx body that does not match the canonical response envelope.
  #[error("Unexpected response shape from server: {0}")]
  Decode(String),

  /// Local persistence (the localStorage analog) failed.
  #[error("Storage error: {0}")]
  Storage(String),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Internal client error. Source: {source}")]
  Internal {
    #[source]
    source: AnyhowError,
  },
}

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required. Please login to continue.";
pub const FORBIDDEN_MESSAGE: &str = "Access forbidden. Please check your permissions.";

impl From<reqwest::Error> for StoreError {
  fn from(err: reqwest::Error) -> Self {
    // A decode failure means the server answered 2xx with a body we could
    // not interpret; everything else on the transport path means no usable
    // response reached us.
    if err.is_decode() {
      return StoreError::Decode(err.to_string());
    }
    if err.is_builder() {
      return StoreError::Config(err.to_string());
    }
    tracing::debug!(transport_error = %err, "request failed before a response was received");
    StoreError::Network(NETWORK_ERROR_MESSAGE.to_string())
  }
}

impl From<AnyhowError> for StoreError {
  fn from(err: AnyhowError) -> Self {
    StoreError::Internal { source: err }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
