// mykart_client/src/session.rs

//! Auth token provider.
//!
//! Pure functions over the persisted session record. There is no error
//! path: absence of a session simply means requests go out unauthenticated
//! and the backend serves a guest cart.

use crate::storage::{keys, LocalStore};
use serde::{Deserialize, Serialize};

/// The session record persisted under the `user` key at login.
///
/// Older backend builds returned the credential as `accessToken`, newer
/// ones as `token`; both spellings are accepted and either satisfies
/// [`AuthSession::bearer_token`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub token: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub access_token: Option<String>,
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub first_name: Option<String>,
  #[serde(default)]
  pub last_name: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
}

impl AuthSession {
  /// The bearer credential, whichever legacy field name carries it.
  pub fn bearer_token(&self) -> Option<&str> {
    self
      .token
      .as_deref()
      .or(self.access_token.as_deref())
      .filter(|t| !t.is_empty())
  }
}

/// Reads the persisted session, if any. An unparsable record is treated
/// the same as no record: the caller proceeds as a guest.
pub fn current_session(store: &LocalStore) -> Option<AuthSession> {
  store.get_json::<AuthSession>(keys::USER)
}

/// Derives the `Authorization` header value for a request, or `None` when
/// the call should go out as a guest.
pub fn bearer_header(session: &Option<AuthSession>) -> Option<String> {
  let token = session.as_ref()?.bearer_token()?;
  Some(format!("Bearer {}", token))
}

/// Whether a usable credential is currently persisted.
pub fn is_authenticated(store: &LocalStore) -> bool {
  current_session(store).is_some_and(|s| s.bearer_token().is_some())
}
