//! Login and logout against the backend. There is no local tier for auth, so
//! failures come back as a [`ClientError`] instead of falling back.

use serde_json::Value;
use std::sync::Arc;
use tiered_client::resource::expand;
use tiered_client::{ApiRequest, ClientError, Envelope, Transport};
use tracing::{info, instrument, warn};

const LOGIN: &str = "/v2/auth/login/{id}";
const LOGOUT: &str = "/v2/auth/logout/{id}";

#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<dyn Transport>,
}

impl AuthClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Starts a session for the given login type (e.g. `"google"`). Sent
    /// with or without a credential. An empty answer is `null`.
    #[instrument(skip(self))]
    pub async fn login(&self, login_type: &str) -> Result<Envelope<Value>, ClientError> {
        let body = self
            .transport
            .send(ApiRequest::post(expand(LOGIN, &login_type)))
            .await
            .inspect_err(|e| warn!(error = %e, "Login failed"))?;
        info!("Logged in");
        Ok(Envelope::remote(body.unwrap_or(Value::Null)))
    }

    /// Ends the session. Requires a credential.
    #[instrument(skip(self))]
    pub async fn logout(&self, login_type: &str) -> Result<Envelope<Value>, ClientError> {
        if !self.transport.is_configured() {
            return Err(ClientError::Unconfigured);
        }
        let body = self
            .transport
            .send(ApiRequest::post(expand(LOGOUT, &login_type)))
            .await
            .inspect_err(|e| warn!(error = %e, "Logout failed"))?;
        info!("Logged out");
        Ok(Envelope::remote(body.unwrap_or(Value::Null)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tiered_client::mock::MockTransport;

    #[tokio::test]
    async fn login_returns_backend_answer() {
        let mock = MockTransport::new();
        mock.expect_post("/v2/auth/login/google")
            .return_json(json!({ "redirect": "https://accounts.example.com" }));
        let auth = AuthClient::new(Arc::new(mock.clone()));

        let env = auth.login("google").await.unwrap();
        assert!(env.is_remote());
        assert_eq!(env.data["redirect"], json!("https://accounts.example.com"));
        mock.verify();
    }

    #[tokio::test]
    async fn failures_are_normalized_not_hidden() {
        let mock = MockTransport::new();
        mock.expect_post("/v2/auth/logout/google").return_status(401, "Unauthorized");
        let auth = AuthClient::new(Arc::new(mock.clone()));

        assert_eq!(
            auth.logout("google").await,
            Err(ClientError::RemoteError {
                status: 401,
                status_text: "Unauthorized".into()
            })
        );
    }

    #[tokio::test]
    async fn logout_without_credential_is_unconfigured() {
        let mock = MockTransport::unconfigured();
        let auth = AuthClient::new(Arc::new(mock.clone()));
        assert_eq!(auth.logout("google").await, Err(ClientError::Unconfigured));
        assert_eq!(mock.call_count(), 0);
    }
}
