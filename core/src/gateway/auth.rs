// mykart_client/src/gateway/auth.rs

//! Auth gateway over `/api/auth`.
//!
//! `sign_in` persists the returned session under the `user` storage key so
//! every subsequent gateway call picks up the bearer credential; `sign_out`
//! removes it. Neither touches the server-side session (the token is
//! opaque and stateless from the client's point of view).

use crate::error::StoreResult;
use crate::gateway::{classify_failure, ApiClient};
use crate::models::Message;
use crate::session::AuthSession;
use crate::storage::keys;
use serde::Serialize;
use tracing::{info, instrument};

const SIGNIN_PATH: &str = "/api/auth/signin";
const SIGNUP_PATH: &str = "/api/auth/signup";

#[derive(Serialize)]
struct SignInBody<'a> {
  email: &'a str,
  password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpBody<'a> {
  first_name: &'a str,
  last_name: &'a str,
  email: &'a str,
  password: &'a str,
}

pub struct AuthGateway {
  api: ApiClient,
}

impl AuthGateway {
  pub fn new(api: ApiClient) -> Self {
    Self { api }
  }

  #[instrument(name = "AuthGateway::sign_in", skip(self, password), err(Display))]
  pub async fn sign_in(&self, email: &str, password: &str) -> StoreResult<AuthSession> {
    let response = self
      .api
      .post(SIGNIN_PATH)
      .json(&SignInBody { email, password })
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, false, "Login failed. Please check your credentials.").await);
    }

    let session: AuthSession = response.json().await?;
    self.api.store().set_json(keys::USER, &session)?;
    info!(email, "Signed in, session persisted.");
    Ok(session)
  }

  #[instrument(name = "AuthGateway::sign_up", skip(self, password), err(Display))]
  pub async fn sign_up(
    &self,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
  ) -> StoreResult<Message> {
    let response = self
      .api
      .post(SIGNUP_PATH)
      .json(&SignUpBody {
        first_name,
        last_name,
        email,
        password,
      })
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(classify_failure(response, false, "Registration failed. Please try again.").await);
    }

    Ok(response.json().await?)
  }

  /// Local-only: drops the persisted session. Subsequent calls are guest
  /// calls.
  pub fn sign_out(&self) -> StoreResult<()> {
    self.api.store().remove(keys::USER)?;
    info!("Signed out, session removed.");
    Ok(())
  }
}
